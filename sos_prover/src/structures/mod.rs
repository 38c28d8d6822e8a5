//! Key structures, such as formulas, literals and clauses.
//!
//! # Other structures without an implementation
//!
//! ## Clause sets
//!
//! A set of [clauses](clause) is interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals).
//! Clause sets are represented directly as a [BTreeSet](std::collections::BTreeSet) of clauses, in order for iteration over a clause set to be deterministic.
//!
//! ## Languages
//! A *language* is some set of [atoms](atom), closed under negation and the binary connectives of a [formula](formula). \
//! Here, the language is fixed to the twenty-six uppercase letters.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;

/// A set of clauses, interpreted as the conjunction of those clauses.
pub type ClauseSet = std::collections::BTreeSet<clause::Clause>;
