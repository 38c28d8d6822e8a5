/*!
Reports on a refutation.

- A [Report] is a high-level summary of a refutation.
- A [ProofResult] holds every detail of a completed refutation, from which [a listing](listing) and [a proof](proof_graph) may be obtained.
*/

pub mod listing;
pub mod proof_graph;

use crate::{
    db::{clause::ClauseStore, ClauseId},
    structures::clause::Clause,
};

/// High-level reports regarding a refutation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the premises entail the goal.
    Proven,

    /// The set of support was exhausted without deriving the empty clause.
    NotProven,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proven => write!(f, "Proven"),
            Self::NotProven => write!(f, "Not proven"),
        }
    }
}

/// The result of a completed refutation.
#[derive(Clone, Debug)]
pub struct ProofResult {
    /// Whether the empty clause was derived.
    pub proven: bool,

    /// A count of resolvents produced.
    pub steps: usize,

    /// The greatest count of registered clauses, not including the empty clause.
    pub max_clauses_seen: usize,

    /// Every clause registered, with provenance.
    pub ledger: ClauseStore,

    /// The first id after the usable clauses.
    pub usable_end: ClauseId,

    /// The first id after the clauses of the negated goal.
    pub sos_end: ClauseId,
}

impl ProofResult {
    pub fn report(&self) -> Report {
        match self.proven {
            true => Report::Proven,
            false => Report::NotProven,
        }
    }

    /// The id of the empty clause, if derived.
    pub fn empty_clause(&self) -> Option<ClauseId> {
        match self.proven {
            true => self.ledger.id_of(&Clause::empty()),
            false => None,
        }
    }
}
