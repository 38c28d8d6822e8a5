/*!
Formulas of propositional logic, as an abstract syntax tree.

A formula is either an atom, the negation of a formula, or one of four binary connectives applied to a pair of formulas.
Formulas are immutable once built, and a transformation of a formula (e.g. to [negation normal form](crate::procedures::cnf)) builds a fresh formula.

```rust
# use sos_prover::structures::formula::Formula;
let formula = Formula::implies(Formula::atom('P'), Formula::or(Formula::atom('Q'), Formula::not(Formula::atom('R'))));
assert_eq!(formula.to_string(), "(P -> (Q | ~R))");
assert_eq!(formula.depth(), 4);
```
*/

use crate::structures::atom::Atom;

/// A formula of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(sub: Formula) -> Self {
        Formula::Not(Box::new(sub))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The number of nodes on a longest path from the root of the formula to an atom.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(sub) => 1 + sub.depth(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Not(sub) => write!(f, "~{sub}"),
            Formula::And(l, r) => write!(f, "({l} & {r})"),
            Formula::Or(l, r) => write!(f, "({l} | {r})"),
            Formula::Implies(l, r) => write!(f, "({l} -> {r})"),
            Formula::Iff(l, r) => write!(f, "({l} <-> {r})"),
        }
    }
}
