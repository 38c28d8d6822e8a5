//! Literals are atoms paired with a (boolean) polarity.
//!
//! Textually, a literal with positive polarity is written as its atom, and a literal with negative polarity is written as its atom prefixed with `~`.
//!
//! ```rust
//! # use sos_prover::structures::literal::Literal;
//! let literal = Literal::new('P', false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 'P');
//! assert_eq!(literal.to_string(), "~P");
//! assert_eq!(literal.negate().to_string(), "P");
//!
//! assert_eq!("~P".parse::<Literal>(), Ok(literal));
//! ```
//!
//! Literals are ordered by atom and then polarity, with the positive literal of an atom before the negative literal.
//! This is the order in which literals of a clause are written.

use std::str::FromStr;

use crate::{
    structures::atom::{self, Atom},
    types::err::{self},
};

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// A key which orders literals as their textual forms order.
    ///
    /// As `~` follows every uppercase letter, every positive literal precedes every negative literal.
    pub fn textual_key(&self) -> (bool, Atom) {
        (!self.polarity, self.atom)
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            other.polarity.cmp(&self.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

impl FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (polarity, name) = match s.strip_prefix('~') {
            Some(name) => (false, name),
            None => (true, s),
        };

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if atom::is_atom(c) => Ok(Literal::new(c, polarity)),
            (Some(c), None) => Err(err::ParseError::UnrecognisedToken(c)),
            (None, _) => Err(err::ParseError::Empty),
            (Some(_), Some(_)) => Err(err::ParseError::Malformed(s.to_string())),
        }
    }
}
