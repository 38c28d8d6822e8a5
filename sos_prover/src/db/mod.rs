//! Databases for holding information relevant to a refutation.
//!
//! - [The clause store](crate::db::clause)
//!   + Every clause seen during a refutation, each identified by a [ClauseId]. \
//!     There are two kinds of clause:
//!     * Input clauses \
//!       Clauses obtained from the premises or the negated goal, without provenance.
//!     * Resolvents \
//!       Clauses derived by resolution, with the ids of the two clauses resolved as provenance.
//!
//! Partitions of the clause store (the usable clauses and the set of support) are held by a [context](crate::context) as collections of ids.

pub mod clause;

/// An identifier of a clause in the [clause store](clause::ClauseStore).
///
/// Identifiers are issued in sequence, starting from 1, and are never reused.
pub type ClauseId = usize;
