/*!
Tools for building the input to a context.

- [parse] reads a single formula.
- [problem] reads a collection of premises and a goal, with an optional strategy flag.

Formulas are added to a [context](crate::context::Context) through [add_premise](crate::context::Context::add_premise) and [set_goal](crate::context::Context::set_goal), each of which parses, converts, and simplifies the formula at once.
So, a malformed formula is noted before any clause is registered.
*/

pub mod parse;
pub mod problem;
