/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every resolvent produced, including tautologies, duplicates, and the empty clause.
    pub steps: usize,

    /// A count of clauses taken from the queue and resolved against the targets.
    pub given: usize,

    /// A count of clauses taken from the queue after having been retracted from the set of support.
    pub skipped: usize,

    /// A count of tautological resolvents.
    pub tautologies: usize,

    /// A count of resolvents already in the clause store.
    pub duplicates: usize,

    /// A count of clauses retracted from a partition by simplification.
    pub retractions: usize,

    /// The greatest count of clauses in the clause store, not including the empty clause.
    pub max_clauses_seen: usize,
}
