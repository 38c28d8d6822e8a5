/*!
The context, to which premises and a goal are added and within which a refutation takes place.

A context owns:
- A [configuration](crate::config).
- A [clause store](crate::db::clause), holding every clause seen.
- The [partitions](Partitions) of the clause store into usable clauses and the set of support.
- A queue of clauses from the set of support, yet to be resolved against the targets.
- A record of the pairs of clauses already resolved.

Premises and a goal are added as text, each formula is [parsed](crate::builder::parse), [converted to clauses](crate::procedures::cnf), and [simplified](crate::procedures::simplify) as it is added.
Nothing is registered to the clause store until a [refutation](crate::procedures::refute) begins.

A context supports a single refutation.

# Example
```rust
# use sos_prover::context::Context;
# use sos_prover::config::Config;
# use sos_prover::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_premise("P -> Q").is_ok());
assert!(the_context.add_premise("P").is_ok());
assert!(the_context.set_goal("Q").is_ok());

assert_eq!(the_context.refute(), Ok(Report::Proven));

let result = the_context.into_result().unwrap();
assert!(result.proven);
assert_eq!(result.steps, 2);
```
*/

mod counters;
pub use counters::Counters;
mod partitions;
pub use partitions::Partitions;

use std::collections::{HashSet, VecDeque};

use crate::{
    builder::parse::parse_bounded,
    config::Config,
    db::{clause::ClauseStore, ClauseId},
    misc::log::targets::{self},
    procedures::{cnf::to_cnf, simplify::simplify},
    reports::{ProofResult, Report},
    structures::{formula::Formula, ClauseSet},
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A refutation is in progress.
    Refuting,

    /// The empty clause was derived, with the given id.
    Proven(ClauseId),

    /// The set of support was exhausted without deriving the empty clause.
    NotProven,

    /// A bound was exceeded before the refutation completed.
    Exhausted(err::ResourceError),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Refuting => write!(f, "Refuting"),
            Self::Proven(_) => write!(f, "Proven"),
            Self::NotProven => write!(f, "Not proven"),
            Self::Exhausted(_) => write!(f, "Exhausted"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a refutation.
    pub counters: Counters,

    /// The clause store.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseStore,

    /// The usable clauses and the set of support.
    pub partitions: Partitions,

    /// The status of the context.
    pub state: ContextState,

    /// Clauses of the premises, each premise simplified on its own.
    pub(crate) premise_clauses: ClauseSet,

    /// Clauses of the negated goal, simplified.
    pub(crate) goal_clauses: Option<ClauseSet>,

    /// Clauses of the set of support, in the order they are to be given.
    pub(crate) sos_q: VecDeque<ClauseId>,

    /// Pairs of clauses already resolved, smallest id first.
    pub(crate) resolved_pairs: HashSet<(ClauseId, ClauseId)>,

    /// The first id after the usable clauses.
    pub(crate) usable_end: ClauseId,

    /// The first id after the clauses of the negated goal.
    pub(crate) sos_end: ClauseId,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseStore::default(),
            partitions: Partitions::default(),
            state: ContextState::Input,

            premise_clauses: ClauseSet::default(),
            goal_clauses: None,
            sos_q: VecDeque::default(),
            resolved_pairs: HashSet::default(),

            usable_end: 1,
            sos_end: 1,
        }
    }

    /// Parses a formula, bounded by the configured depth.
    fn formula(&self, text: &str) -> Result<Formula, err::ErrorKind> {
        let formula = parse_bounded(text, self.config.max_depth.value)?;
        Ok(formula)
    }

    /// Adds a premise to the context.
    ///
    /// The clauses of the premise are simplified before being added to the clauses of any other premise.
    pub fn add_premise(&mut self, text: &str) -> Result<(), err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::ErrorKind::from(err::StateError::RefutationComplete));
        }

        let formula = self.formula(text)?;
        let clauses = simplify(to_cnf(&formula));
        log::info!(target: targets::REFUTATION, "Premise {formula} with {} clauses", clauses.len());

        self.premise_clauses.extend(clauses);
        Ok(())
    }

    /// Sets the goal of the context, replacing any previous goal.
    ///
    /// The goal is negated, and the clauses of the negation are simplified.
    pub fn set_goal(&mut self, text: &str) -> Result<(), err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::ErrorKind::from(err::StateError::RefutationComplete));
        }

        let formula = self.formula(text)?;
        let clauses = simplify(to_cnf(&Formula::not(formula.clone())));
        log::info!(target: targets::REFUTATION, "Goal {formula} negated to {} clauses", clauses.len());

        self.goal_clauses = Some(clauses);
        Ok(())
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Option<Report> {
        match self.state {
            ContextState::Proven(_) => Some(Report::Proven),
            ContextState::NotProven => Some(Report::NotProven),
            ContextState::Input | ContextState::Refuting | ContextState::Exhausted(_) => None,
        }
    }

    /// The id of the empty clause, if derived.
    pub fn empty_clause(&self) -> Option<ClauseId> {
        match self.state {
            ContextState::Proven(id) => Some(id),
            _ => None,
        }
    }

    /// Consumes the context, returning the result of a completed refutation.
    pub fn into_result(self) -> Result<ProofResult, err::ErrorKind> {
        let proven = match self.state {
            ContextState::Proven(_) => true,
            ContextState::NotProven => false,
            ContextState::Exhausted(e) => return Err(err::ErrorKind::from(e)),
            ContextState::Input | ContextState::Refuting => {
                return Err(err::ErrorKind::from(err::StateError::Unrefuted))
            }
        };

        Ok(ProofResult {
            proven,
            steps: self.counters.steps,
            max_clauses_seen: self.counters.max_clauses_seen,
            ledger: self.clause_db,
            usable_end: self.usable_end,
            sos_end: self.sos_end,
        })
    }
}
