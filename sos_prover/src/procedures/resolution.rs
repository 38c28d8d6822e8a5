/*!
Binary resolution of (propositional) clauses.

Given a clause *c* with some literal *l*, and a clause *d* with the negation of *l*, the resolvent of *c* and *d* on *l* is (*c* \ {*l*}) ∪ (*d* \ {¬*l*}).

If *c* and *d* clash on more than one literal a resolvent is produced for each clash.
Each of these resolvents is a tautology, though it is left to the caller to decide what to do with a tautology.

```rust
# use sos_prover::procedures::resolution::resolvents;
# use sos_prover::structures::clause::Clause;
let c: Clause = "~P v Q".parse().unwrap();
let d: Clause = "P v R".parse().unwrap();
let found = resolvents(&c, &d);
assert_eq!(found.len(), 1);
assert_eq!(found[0].to_string(), "Q v R");

let c: Clause = "P v ~Q".parse().unwrap();
let d: Clause = "~P v Q".parse().unwrap();
let found = resolvents(&c, &d);
assert_eq!(found.len(), 2);
assert!(found.iter().all(|resolvent| resolvent.is_tautology()));
```
*/

use crate::{misc::log::targets::{self}, structures::clause::Clause};

/// Every binary resolvent of `c` and `d`, with pivots drawn from `c` in literal order.
///
/// A resolvent obtained on more than one pivot is returned once.
pub fn resolvents(c: &Clause, d: &Clause) -> Vec<Clause> {
    let mut found: Vec<Clause> = Vec::default();

    for pivot in c.literals() {
        if d.contains(&pivot.negate()) {
            let resolvent = c.resolve_on(d, pivot);
            log::trace!(target: targets::RESOLUTION, "{c} and {d} on {pivot}: {resolvent}");

            if !found.contains(&resolvent) {
                found.push(resolvent);
            }
        }
    }

    found
}

#[cfg(test)]
mod resolution_tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().unwrap()
    }

    #[test]
    fn no_clash() {
        assert!(resolvents(&clause("P v Q"), &clause("P v ~R")).is_empty());
        assert!(resolvents(&clause("P"), &clause("P")).is_empty());
    }

    #[test]
    fn units() {
        assert_eq!(resolvents(&clause("~P"), &clause("P")), vec![Clause::empty()]);
    }

    #[test]
    fn pivot_order() {
        let found = resolvents(&clause("A v ~B v C"), &clause("~A v B"));
        assert_eq!(found, vec![clause("~B v C v B"), clause("A v C v ~A")]);
    }
}
