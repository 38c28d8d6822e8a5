//! Error types used in the library.
//!
//! - Parse errors are raised while reading a formula, before any clause is registered.
//! - Resource errors are raised by a refutation which exceeds a configured bound.
//!   These are *not* a claim of non-entailment, only that the search was cut short.
//! - The remaining errors concern misuse of a context or its configuration.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Parse(ParseError),
    Resource(ResourceError),
    State(StateError),

    /// No formulas remain once strategy flags are removed from some input, or no goal was given.
    EmptyInput,

    /// A clause was requested by an id the clause store has not issued.
    UnknownClause(ClauseId),
}

/// Errors in the configuration of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An attempt to set the named option outside of its bounds.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// Some closing parenthesis without an opening partner, or the reverse.
    UnbalancedParentheses,

    /// A character which is not part of the formula grammar.
    UnrecognisedToken(char),

    /// Well-formed characters which do not split into a formula.
    Malformed(String),

    /// Nesting beyond the configured depth.
    DepthExceeded(usize),

    /// Some unspecific problem reading a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// A bound of a refutation was exceeded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// More resolvents were produced than permitted.
    Steps { limit: usize, steps: usize },

    /// More clauses were registered than permitted.
    Clauses { limit: usize, clauses: usize },
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A context has already been used for a refutation.
    RefutationComplete,

    /// A result was requested from a context before a refutation completed.
    Unrefuted,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfRange(name)) => write!(f, "{name} is out of range"),

            Self::Parse(ParseError::Empty) => write!(f, "Empty formula"),
            Self::Parse(ParseError::UnbalancedParentheses) => write!(f, "Unbalanced parentheses"),
            Self::Parse(ParseError::UnrecognisedToken(c)) => write!(f, "Unrecognised token: {c}"),
            Self::Parse(ParseError::Malformed(formula)) => {
                write!(f, "Formula not well formed: {formula}")
            }
            Self::Parse(ParseError::DepthExceeded(depth)) => {
                write!(f, "Formula nested beyond depth {depth}")
            }
            Self::Parse(ParseError::Line(line)) => write!(f, "Failed to read line {line}"),

            Self::Resource(ResourceError::Steps { limit, steps }) => {
                write!(f, "Resources exhausted: {steps} steps exceeds the limit of {limit}")
            }
            Self::Resource(ResourceError::Clauses { limit, clauses }) => {
                write!(f, "Resources exhausted: {clauses} clauses exceeds the limit of {limit}")
            }

            Self::State(StateError::RefutationComplete) => {
                write!(f, "The context has already been refuted")
            }
            Self::State(StateError::Unrefuted) => write!(f, "The context has not been refuted"),

            Self::EmptyInput => {
                write!(f, "No formulas found after removing strategy flags, a goal is required")
            }

            Self::UnknownClause(id) => write!(f, "No clause has id {id}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
