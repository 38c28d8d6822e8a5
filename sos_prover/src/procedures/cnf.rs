/*!
Conversion of formulas to conjunctive normal form.

Conversion happens in three stages:
1. [Implications are eliminated](eliminate_implications), so `A -> B` becomes `~A | B` and `A <-> B` becomes `(~A | B) & (~B | A)`.
2. [Negations are pushed inward](negation_normal_form) by De Morgan's laws, and double negations are dropped.
   The result is a formula in negation normal form, in which negation applies only to atoms.
3. [Disjunctions are distributed](distribute) over conjunctions, by recursively turning each node into a list of clauses:
   - A literal is a single unit clause.
   - A conjunction is the concatenation of the clauses of each conjunct.
   - A disjunction is the pairwise union of the clauses of each disjunct.

The resulting clauses are collected into a set, and so clauses equal as sets of literals collapse.

```rust
# use sos_prover::builder::parse::parse;
# use sos_prover::procedures::cnf::to_cnf;
let formula = parse("P <-> Q").unwrap();
let clauses = to_cnf(&formula)
    .iter()
    .map(|clause| clause.to_string())
    .collect::<Vec<_>>();

assert_eq!(clauses, vec!["P v ~Q", "~P v Q"]);
```

No check for tautologies or subsumption is made here, for this see [simplify](crate::procedures::simplify).

Note, distribution may produce exponentially many clauses relative to the size of a formula.
*/

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal, ClauseSet},
};

/// A formula in negation normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nnf {
    Literal(Literal),
    And(Box<Nnf>, Box<Nnf>),
    Or(Box<Nnf>, Box<Nnf>),
}

/// Converts a formula to a set of clauses whose conjunction is equivalent to the formula.
pub fn to_cnf(formula: &Formula) -> ClauseSet {
    let implication_free = eliminate_implications(formula);
    let nnf = negation_normal_form(&implication_free);
    let clauses = distribute(&nnf).into_iter().collect::<ClauseSet>();

    log::trace!(target: targets::CNF, "{formula} has {} clauses", clauses.len());
    clauses
}

/// Rewrites implications and equivalences in terms of negation, conjunction, and disjunction.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(atom) => Formula::atom(*atom),

        Formula::Not(sub) => Formula::not(eliminate_implications(sub)),

        Formula::And(l, r) => Formula::and(eliminate_implications(l), eliminate_implications(r)),

        Formula::Or(l, r) => Formula::or(eliminate_implications(l), eliminate_implications(r)),

        Formula::Implies(l, r) => Formula::or(
            Formula::not(eliminate_implications(l)),
            eliminate_implications(r),
        ),

        Formula::Iff(l, r) => {
            let a = eliminate_implications(l);
            let b = eliminate_implications(r);
            Formula::and(
                Formula::or(Formula::not(a.clone()), b.clone()),
                Formula::or(Formula::not(b), a),
            )
        }
    }
}

/// Pushes negation inward to the atoms of a formula.
///
/// Any implication or equivalence is eliminated on the way.
pub fn negation_normal_form(formula: &Formula) -> Nnf {
    push_negation(formula, true)
}

/// The negation normal form of `formula`, if `polarity` is true, and of the negation of `formula` otherwise.
fn push_negation(formula: &Formula, polarity: bool) -> Nnf {
    match formula {
        Formula::Atom(atom) => Nnf::Literal(Literal::new(*atom, polarity)),

        Formula::Not(sub) => push_negation(sub, !polarity),

        Formula::And(l, r) => {
            let l = Box::new(push_negation(l, polarity));
            let r = Box::new(push_negation(r, polarity));
            match polarity {
                true => Nnf::And(l, r),
                false => Nnf::Or(l, r),
            }
        }

        Formula::Or(l, r) => {
            let l = Box::new(push_negation(l, polarity));
            let r = Box::new(push_negation(r, polarity));
            match polarity {
                true => Nnf::Or(l, r),
                false => Nnf::And(l, r),
            }
        }

        Formula::Implies(_, _) | Formula::Iff(_, _) => {
            push_negation(&eliminate_implications(formula), polarity)
        }
    }
}

/// Distributes disjunction over conjunction, returning a list of clauses.
pub fn distribute(nnf: &Nnf) -> Vec<Clause> {
    match nnf {
        Nnf::Literal(literal) => vec![Clause::unit(*literal)],

        Nnf::And(l, r) => {
            let mut clauses = distribute(l);
            clauses.extend(distribute(r));
            clauses
        }

        Nnf::Or(l, r) => {
            let left = distribute(l);
            let right = distribute(r);

            let mut clauses = Vec::with_capacity(left.len() * right.len());
            for a in &left {
                for b in &right {
                    clauses.push(a.union(b));
                }
            }
            clauses
        }
    }
}
