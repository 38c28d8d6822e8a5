/*!
Listings of the clauses of a refutation.

A listing has three sections:
1. The usable clauses, in order of id.
2. After a line of 20 dashes, the clauses of the negated goal, in order of id.
3. After a line of 24 dashes, every resolvent in order of id, with the ids of the clauses the resolvent was derived from.

Each clause is given as `{id}. {clause}`.

```rust
# use sos_prover::procedures::refute::refute;
# use sos_prover::config::Strategy;
# use sos_prover::reports::listing::ProofPresenter;
let result = refute(&["P -> Q", "P"], "Q", Strategy::Basic, 100, 100).unwrap();

let expected = "\
1. P
2. ~P v Q
--------------------
3. ~Q
------------------------
4. ~P (3, 2)
5. NIL (4, 1)
";

assert_eq!(ProofPresenter::new(&result).listing(), expected);
```

A summary prefixes the listing with the outcome of the refutation, the count of steps, and the greatest count of clauses.
*/

use std::fmt::Write;

use crate::{
    db::{clause::ClauseRecord, ClauseId},
    reports::{proof_graph::ProofGraph, ProofResult},
};

/// The line after the usable clauses.
pub const USABLE_RULE: &str = "--------------------";

/// The line after the clauses of the negated goal.
pub const SOS_RULE: &str = "------------------------";

/// Renders a proof result as text.
pub struct ProofPresenter<'r> {
    result: &'r ProofResult,
}

impl<'r> ProofPresenter<'r> {
    pub fn new(result: &'r ProofResult) -> Self {
        ProofPresenter { result }
    }

    fn write_record(out: &mut String, record: &ClauseRecord) -> std::fmt::Result {
        match record.provenance {
            Some((c, d)) => writeln!(out, "{}. {} ({c}, {d})", record.id, record.clause),
            None => writeln!(out, "{}. {}", record.id, record.clause),
        }
    }

    fn write_listing(&self, out: &mut String) -> std::fmt::Result {
        let ledger = &self.result.ledger;

        for record in ledger.records().filter(|r| r.id < self.result.usable_end) {
            Self::write_record(out, record)?;
        }
        writeln!(out, "{USABLE_RULE}")?;

        for record in ledger
            .records()
            .filter(|r| self.result.usable_end <= r.id && r.id < self.result.sos_end)
        {
            Self::write_record(out, record)?;
        }
        writeln!(out, "{SOS_RULE}")?;

        for record in ledger.records().filter(|r| r.provenance.is_some()) {
            Self::write_record(out, record)?;
        }
        Ok(())
    }

    /// The listing of every clause of the refutation.
    pub fn listing(&self) -> String {
        let mut out = String::default();
        // Writing to a string does not fail.
        let _ = self.write_listing(&mut out);
        out
    }

    /// The outcome, steps, and greatest count of clauses, followed by the listing.
    pub fn summary(&self) -> String {
        let mut out = String::default();
        let _ = writeln!(out, "{}", self.result.report());
        let _ = writeln!(out);
        let _ = writeln!(out, "Number of steps: {}", self.result.steps);
        let _ = writeln!(out, "Maximum number of clauses: {}", self.result.max_clauses_seen);
        let _ = writeln!(out);
        let _ = self.write_listing(&mut out);
        out
    }

    fn write_ids(&self, ids: impl Iterator<Item = ClauseId>) -> String {
        let mut out = String::default();
        for id in ids {
            if let Ok(record) = self.result.ledger.record(id) {
                let _ = Self::write_record(&mut out, record);
            }
        }
        out
    }

    /// The clauses used to derive the empty clause, if the empty clause was derived.
    pub fn refutation(&self) -> Option<String> {
        let empty = self.result.empty_clause()?;
        let graph = ProofGraph::from_store(&self.result.ledger);
        Some(self.write_ids(graph.refutation(empty).into_iter()))
    }

    /// The input clauses used to derive the empty clause, if the empty clause was derived.
    pub fn core(&self) -> Option<String> {
        let empty = self.result.empty_clause()?;
        let graph = ProofGraph::from_store(&self.result.ledger);
        Some(self.write_ids(graph.core(empty).into_iter()))
    }
}

impl std::fmt::Display for ProofPresenter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod listing_tests {
    use super::*;
    use crate::{config::Strategy, procedures::refute::refute};

    #[test]
    fn not_proven_summary() {
        let result = refute(&["P"], "Q", Strategy::Basic, 100, 100).unwrap();
        let expected = "\
Not proven

Number of steps: 0
Maximum number of clauses: 2

1. P
--------------------
2. ~Q
------------------------
";
        assert_eq!(ProofPresenter::new(&result).summary(), expected);
        assert_eq!(ProofPresenter::new(&result).refutation(), None);
    }

    #[test]
    fn refutation_omits_unused_clauses() {
        let result = refute(&["P -> Q", "P", "R"], "Q", Strategy::Basic, 100, 100).unwrap();
        let presenter = ProofPresenter::new(&result);
        assert_eq!(
            presenter.refutation(),
            Some("1. P\n3. ~P v Q\n4. ~Q\n5. ~P (4, 3)\n6. NIL (5, 1)\n".to_string())
        );
        assert_eq!(presenter.core(), Some("1. P\n3. ~P v Q\n4. ~Q\n".to_string()));
    }
}
