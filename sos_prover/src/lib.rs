//! A library for determining whether a propositional formula follows from some premises, by resolution refutation with the set-of-support strategy.
//!
//! Given some premises and a goal, the premises and the negation of the goal are converted to clauses, and resolution is used to search for a derivation of the empty clause.
//! If the empty clause is derived the premises entail the goal.
//! And, if the search ends without the empty clause the premises do not entail the goal, so long as the premises are consistent.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built with a [configuration](config), to which premises and a goal are added as text.
//! Each formula is [parsed](builder::parse), [converted to clauses](procedures::cnf), and [simplified](procedures::simplify) when added.
//! A [refutation](procedures::refute) then:
//! - Registers the clauses of the premises as *usable*, and the clauses of the negated goal as the *set of support*, in a [clause store](db::clause).
//! - Resolves each clause with support against the usable clauses and the set of support, adding each new resolvent to the set of support.
//! - Stops when the empty clause is derived, when no clause with support remains to be resolved, or when a bound on steps or clauses is exceeded.
//!
//! Every clause registered is kept, together with the clauses it was derived from, and so a [listing](reports::listing) of the refutation or [the proof](reports::proof_graph) may be obtained from the result.
//!
//! Useful starting points, then, may be:
//! - The [refutation procedure](crate::procedures::refute) to inspect the dynamics of a refutation.
//! - The [structures] to familiarise yourself with formulas, literals and clauses.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Refute a goal from some premises, through a context.
//!
//! ```rust
//! # use sos_prover::config::Config;
//! # use sos_prover::context::Context;
//! # use sos_prover::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for premise in ["P -> Q", "Q -> R", "P"] {
//!     assert!(the_context.add_premise(premise).is_ok());
//! }
//! assert!(the_context.set_goal("R").is_ok());
//!
//! assert_eq!(the_context.refute(), Ok(Report::Proven));
//! ```
//!
//! + Read a problem from text, with the strategy given on the last line.
//!
//! ```rust
//! # use sos_prover::config::Config;
//! # use sos_prover::reports::listing::ProofPresenter;
//! let problem = "
//! P | Q
//! ~P
//! Q
//! 1
//! ";
//!
//! let result = sos_prover::solve_from_str(problem, &Config::default()).unwrap();
//! assert!(result.proven);
//!
//! let summary = ProofPresenter::new(&result).summary();
//! assert!(summary.starts_with("Proven\n\nNumber of steps: 2\n"));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause store](crate::db::clause) can be filtered with `RUST_LOG=clause_store …` or,
//! - A summary of each refutation can be found with `RUST_LOG=refutation=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;

pub mod reports;

pub use procedures::refute::{solve_from_str, solve_problem};
