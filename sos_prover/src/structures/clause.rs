//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an ordered set of literals, so duplicate literals collapse and the order in which literals are given is irrelevant.
//!
//! ```rust
//! # use sos_prover::structures::clause::Clause;
//! # use sos_prover::structures::literal::Literal;
//! let clause = Clause::from_literals([
//!     Literal::new('Q', true),
//!     Literal::new('P', false),
//!     Literal::new('Q', true),
//! ]);
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.to_string(), "~P v Q");
//! assert_eq!("~P v Q".parse::<Clause>(), Ok(clause));
//! ```
//!
//! - The empty clause is always false (never true), and is written `NIL`.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use std::{collections::BTreeSet, str::FromStr};

use crate::{
    structures::{atom::Atom, literal::Literal},
    types::err::{self},
};

/// The textual form of the empty clause.
pub const EMPTY_CLAUSE: &str = "NIL";

/// The textual separator of literals in a clause.
pub const SEPARATOR: &str = " v ";

/// A set of literals, interpreted as their disjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Self {
        Clause::default()
    }

    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The clause containing only the given literal.
    pub fn unit(literal: Literal) -> Self {
        Clause::from_literals([literal])
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over all literals in the clause, in literal order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Whether the clause contains some literal together with its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.literals.contains(&literal.negate()))
    }

    /// Whether every literal of the clause is a literal of `other`.
    pub fn is_subset(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// The union of the clause with `other`.
    pub fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).copied().collect(),
        }
    }

    /// The binary resolvent of the clause and `other` on `pivot`, where `pivot` belongs to the clause and the negation of `pivot` belongs to `other`.
    ///
    /// No check is made on membership, so if `pivot` is not in the clause (or its negation is not in `other`) the result is simply the union of the two clauses without the pivot literals.
    pub fn resolve_on(&self, other: &Clause, pivot: &Literal) -> Clause {
        let complement = pivot.negate();
        let literals = self
            .literals
            .iter()
            .filter(|literal| *literal != pivot)
            .chain(other.literals.iter().filter(|literal| **literal != complement))
            .copied()
            .collect();
        Clause { literals }
    }

    /// Whether the clause is true on the given valuation.
    pub fn satisfied_by(&self, valuation: impl Fn(Atom) -> bool) -> bool {
        self.literals
            .iter()
            .any(|literal| valuation(literal.atom()) == literal.polarity())
    }

    /// A key which orders clauses by size, and then by the (sorted) textual forms of their literals.
    ///
    /// The key fixes the order in which clauses are first registered.
    pub fn registration_key(&self) -> (usize, Vec<(bool, Atom)>) {
        let mut textual = self
            .literals
            .iter()
            .map(|literal| literal.textual_key())
            .collect::<Vec<_>>();
        textual.sort_unstable();
        (self.size(), textual)
    }

    /// Some string representation of the clause.
    pub fn as_string(&self) -> String {
        if self.literals.is_empty() {
            return EMPTY_CLAUSE.to_string();
        }

        self.literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::unit(literal)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::from_literals(iter)
    }
}

/// Reads a clause from whitespace separated literals, with an optional `v` between literals.
///
/// `NIL` is read as the empty clause.
impl FromStr for Clause {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == EMPTY_CLAUSE {
            return Ok(Clause::empty());
        }

        s.split_whitespace()
            .filter(|token| *token != "v")
            .map(Literal::from_str)
            .collect()
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().unwrap()
    }

    #[test]
    fn rendering() {
        assert_eq!(Clause::empty().to_string(), "NIL");
        assert_eq!(clause("~Q P ~P").to_string(), "P v ~P v ~Q");
    }

    #[test]
    fn tautology() {
        assert!(clause("P ~P").is_tautology());
        assert!(clause("Q R ~Q").is_tautology());
        assert!(!clause("P ~Q").is_tautology());
        assert!(!Clause::empty().is_tautology());
    }

    #[test]
    fn resolution_on_pivot() {
        let c = clause("~P Q");
        let d = clause("P R");
        let pivot = Literal::new('P', false);
        assert_eq!(c.resolve_on(&d, &pivot), clause("Q R"));

        let unit = clause("~Q");
        let pivot = Literal::new('Q', false);
        assert_eq!(unit.resolve_on(&clause("Q"), &pivot), Clause::empty());
    }

    #[test]
    fn registration_order() {
        let mut clauses = [clause("~P Q"), clause("~A"), clause("Q"), clause("P Q"), clause("B")];
        clauses.sort_by_key(|c| c.registration_key());
        let rendered = clauses.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(rendered, vec!["B", "Q", "~A", "P v Q", "~P v Q"]);
    }
}
