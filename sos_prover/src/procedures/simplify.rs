/*!
Simplification of clause sets by removal of tautologies and subsumed clauses.

- A clause is a tautology if it contains some literal together with the negation of that literal.
- A clause *c₁* subsumes a (distinct) clause *c₂* if every literal of *c₁* is a literal of *c₂*.

Simplification is a single pass over a clause set:
1. Every tautology is removed.
2. Every remaining clause subsumed by some other remaining clause is removed.

Whether a clause is subsumed is decided relative to the clauses which remain after the first step, regardless of whether the subsuming clause is itself removed.

```rust
# use sos_prover::procedures::simplify::simplify;
# use sos_prover::structures::{clause::Clause, ClauseSet};
let clauses = ["P v Q", "P", "Q v ~Q", "P v Q v R", "R"]
    .iter()
    .map(|c| c.parse::<Clause>().unwrap())
    .collect::<ClauseSet>();

let simplified = simplify(clauses)
    .iter()
    .map(|clause| clause.to_string())
    .collect::<Vec<_>>();

assert_eq!(simplified, vec!["P", "R"]);
```
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, ClauseSet},
};

/// The clauses of `clauses` which are not tautologies and are not subsumed by some other non-tautological clause.
pub fn simplify(clauses: ClauseSet) -> ClauseSet {
    let kept = surviving(clauses.iter().map(|clause| (clause, clause)));
    clauses
        .iter()
        .filter(|clause| kept.contains(clause))
        .cloned()
        .collect()
}

/// The keys of those clauses which survive simplification.
///
/// Keys are expected to be in bijection with the clauses they are paired with.
pub fn surviving<'c, K: Copy + Ord>(entries: impl Iterator<Item = (K, &'c Clause)>) -> BTreeSet<K> {
    let mut candidates = Vec::default();
    let mut tautologies = 0;
    for (key, clause) in entries {
        match clause.is_tautology() {
            true => tautologies += 1,
            false => candidates.push((key, clause)),
        }
    }

    let mut reduced = candidates.iter().map(|(key, _)| *key).collect::<BTreeSet<_>>();
    for (_, subsuming) in &candidates {
        for (key, subsumed) in &candidates {
            if subsuming != subsumed && subsuming.is_subset(subsumed) {
                reduced.remove(key);
            }
        }
    }

    log::trace!(target: targets::SIMPLIFY,
                "{tautologies} tautologies and {} subsumed clauses removed",
                candidates.len() - reduced.len());
    reduced
}

#[cfg(test)]
mod simplify_tests {
    use super::*;

    fn clause_set(clauses: &[&str]) -> ClauseSet {
        clauses.iter().map(|c| c.parse::<Clause>().unwrap()).collect()
    }

    #[test]
    fn tautologies() {
        let simplified = simplify(clause_set(&["P v ~P", "Q v R v ~R", "Q"]));
        assert_eq!(simplified, clause_set(&["Q"]));
    }

    #[test]
    fn subsumption_chain() {
        let simplified = simplify(clause_set(&["A", "A v B", "A v B v C", "B v C"]));
        assert_eq!(simplified, clause_set(&["A", "B v C"]));
    }

    #[test]
    fn tautologies_do_not_subsume() {
        let simplified = simplify(clause_set(&["A v ~A", "A v ~A v B", "B v C"]));
        assert_eq!(simplified, clause_set(&["B v C"]));
    }

    #[test]
    fn empty_clause_subsumes_all() {
        let simplified = simplify(clause_set(&["NIL", "A", "B v C"]));
        assert_eq!(simplified, clause_set(&["NIL"]));
    }

    #[test]
    fn keyed() {
        let a: Clause = "A".parse().unwrap();
        let ab: Clause = "A v B".parse().unwrap();
        let c: Clause = "C".parse().unwrap();
        let kept = surviving([(3_u32, &ab), (1, &a), (2, &c)].into_iter());
        assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
