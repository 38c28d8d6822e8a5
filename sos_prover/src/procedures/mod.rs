//! Various procedures used in a refutation.
//!
//! - [cnf] converts a formula to a set of clauses.
//! - [simplify] removes tautologies and subsumed clauses from a set of clauses.
//! - [resolution] finds the resolvents of a pair of clauses.
//! - [refute] is the main loop, and for the most part a collection of methods accessed via a context.

pub mod cnf;
pub mod refute;
pub mod resolution;
pub mod simplify;
