/*!
Refutation of the negation of a goal from a collection of premises, by resolution with the set-of-support strategy.

# Overview

The clauses of the premises form the *usable* clauses, and the clauses of the negated goal form the *set of support*.
Resolution is restricted so that at least one parent of every resolvent has support, i.e. is a clause of the negated goal or a resolvent with a parent with support.
And, as the premises are presumed consistent, if the empty clause is derivable from the premises together with the negated goal, then it is derivable under this restriction.

# Setup

1. The clauses of the premises are simplified together, and registered in ascending order of [registration key](crate::structures::clause::Clause::registration_key).
2. The clauses of the negated goal are registered in the same order.
   A clause of the negated goal already registered as a usable clause keeps its id, and is moved to the set of support.
3. If the strategy is [ActiveSimplification](crate::config::Strategy::ActiveSimplification), each partition is simplified.
4. The queue is seeded with the set of support, in order of registration key.

# The main loop

```rust,ignore
while let Some(given) = queue.pop_front() {
    if given is not in sos { continue }

    for target in usable ∪ sos, in ascending order of id {
        if target == given or {given, target} has been resolved { continue }

        for resolvent in resolvents(given, target) {
            steps += 1, checking steps against max_steps

            if resolvent is empty { Proven }
            if resolvent is a tautology or registered { discard }
            else { register, add to sos, enqueue, and simplify if active }

            check the clause store against max_clauses
        }
    }
}
NotProven
```

The targets of each given clause are taken when the clause is dequeued, and so a clause added while a given clause is resolved against its targets is not a target of that given clause.
Though, as the added clause is enqueued, the two are resolved when the added clause is given.

# Bounds

- Each resolvent is a step, and the bound on steps is checked as soon as a resolvent is produced.
  So, with a bound of *n* steps, an empty clause found on step *n* + 1 is not reported.
- The count of clauses in the store is checked after each resolvent.

Exceeding a bound is an [error](crate::types::err::ResourceError), and not a claim that the goal does not follow from the premises.
*/

use crate::{
    builder::problem::Problem,
    config::{Config, Strategy},
    context::{Context, ContextState},
    db::ClauseId,
    misc::log::targets::{self},
    procedures::{
        resolution::resolvents,
        simplify::{simplify, surviving},
    },
    reports::{ProofResult, Report},
    structures::{clause::Clause, ClauseSet},
    types::err::{self},
};

impl Context {
    /// Refutes the negated goal of the context from the premises of the context.
    ///
    /// ```rust
    /// # use sos_prover::context::Context;
    /// # use sos_prover::config::Config;
    /// # use sos_prover::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    /// assert!(the_context.add_premise("P").is_ok());
    /// assert!(the_context.set_goal("Q").is_ok());
    /// assert_eq!(the_context.refute(), Ok(Report::NotProven));
    /// ```
    pub fn refute(&mut self) -> Result<Report, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::ErrorKind::from(err::StateError::RefutationComplete));
        }

        let Some(goal_clauses) = self.goal_clauses.take() else {
            log::error!(target: targets::REFUTATION, "Refutation attempted without a goal");
            return Err(err::ErrorKind::EmptyInput);
        };

        self.state = ContextState::Refuting;
        self.setup(goal_clauses)?;

        let result = self.saturate();
        log::info!(target: targets::REFUTATION,
                   "{} after {} steps, with {} given and {} skipped",
                   self.state, self.counters.steps, self.counters.given, self.counters.skipped);
        result
    }

    /// Registers the input clauses, fixes the partitions, and seeds the queue.
    fn setup(&mut self, goal_clauses: ClauseSet) -> Result<(), err::ErrorKind> {
        let usable = simplify(std::mem::take(&mut self.premise_clauses));

        for clause in sorted_by_key(usable) {
            let id = self.clause_db.register(clause, None);
            self.partitions.usable.insert(id);
        }
        self.usable_end = self.clause_db.next_id();

        for clause in sorted_by_key(goal_clauses) {
            let id = self.clause_db.register(clause, None);
            self.partitions.support(id);
        }
        self.sos_end = self.clause_db.next_id();

        log::info!(target: targets::REFUTATION,
                   "{} usable clauses and {} clauses with support",
                   self.partitions.usable.len(), self.partitions.sos.len());

        if self.config.strategy.value == Strategy::ActiveSimplification {
            self.simplify_partitions()?;
        }

        let mut seed = Vec::with_capacity(self.partitions.sos.len());
        for id in &self.partitions.sos {
            seed.push((self.clause_db.lookup(*id)?.registration_key(), *id));
        }
        seed.sort_unstable();
        self.sos_q.extend(seed.into_iter().map(|(_, id)| id));

        self.counters.max_clauses_seen = self.clause_db.len();
        self.check_clause_bound()
    }

    /// Gives each clause of the queue in turn, until the empty clause is derived or the queue is empty.
    fn saturate(&mut self) -> Result<Report, err::ErrorKind> {
        while let Some(given) = self.sos_q.pop_front() {
            if !self.partitions.sos.contains(&given) {
                log::trace!(target: targets::REFUTATION, "Skipped retracted clause {given}");
                self.counters.skipped += 1;
                continue;
            }
            self.counters.given += 1;
            log::debug!(target: targets::REFUTATION, "Given {given}, with {} queued", self.sos_q.len());

            for target in self.partitions.targets() {
                if target == given {
                    continue;
                }

                let pair = (given.min(target), given.max(target));
                if !self.resolved_pairs.insert(pair) {
                    continue;
                }

                let found = resolvents(self.clause_db.lookup(given)?, self.clause_db.lookup(target)?);
                for resolvent in found {
                    if let Some(empty) = self.examine(resolvent, given, target)? {
                        self.state = ContextState::Proven(empty);
                        return Ok(Report::Proven);
                    }
                }
            }
        }

        self.state = ContextState::NotProven;
        Ok(Report::NotProven)
    }

    /// Examines a resolvent of `given` and `target`, returning the id of the resolvent if the resolvent is the empty clause.
    fn examine(
        &mut self,
        resolvent: Clause,
        given: ClauseId,
        target: ClauseId,
    ) -> Result<Option<ClauseId>, err::ErrorKind> {
        self.counters.steps += 1;
        let limit = self.config.max_steps.value;
        if self.counters.steps > limit {
            return Err(self.exhausted(err::ResourceError::Steps {
                limit,
                steps: self.counters.steps,
            }));
        }

        if resolvent.is_empty() {
            let id = self.clause_db.register(resolvent, Some((given, target)));
            log::info!(target: targets::REFUTATION, "Empty clause {id} from {given} and {target}");
            return Ok(Some(id));
        }

        if resolvent.is_tautology() {
            self.counters.tautologies += 1;
        } else if self.clause_db.id_of(&resolvent).is_some() {
            self.counters.duplicates += 1;
        } else {
            let id = self.clause_db.register(resolvent, Some((given, target)));
            self.partitions.sos.insert(id);
            self.sos_q.push_back(id);
            self.counters.max_clauses_seen = self.counters.max_clauses_seen.max(self.clause_db.len());

            if self.config.strategy.value == Strategy::ActiveSimplification {
                self.simplify_partitions()?;
            }
        }

        self.check_clause_bound()?;
        Ok(None)
    }

    /// Simplifies each partition, retracting tautologies and subsumed clauses.
    fn simplify_partitions(&mut self) -> Result<(), err::ErrorKind> {
        let before = self.partitions.len();

        let mut usable = Vec::with_capacity(self.partitions.usable.len());
        for id in &self.partitions.usable {
            usable.push((*id, self.clause_db.lookup(*id)?));
        }
        let usable = surviving(usable.into_iter());

        let mut sos = Vec::with_capacity(self.partitions.sos.len());
        for id in &self.partitions.sos {
            sos.push((*id, self.clause_db.lookup(*id)?));
        }
        let sos = surviving(sos.into_iter());

        self.partitions.usable = usable;
        self.partitions.sos = sos;

        let retracted = before - self.partitions.len();
        if retracted > 0 {
            log::debug!(target: targets::SIMPLIFY, "Retracted {retracted} clauses");
            self.counters.retractions += retracted;
        }
        Ok(())
    }

    fn check_clause_bound(&mut self) -> Result<(), err::ErrorKind> {
        let limit = self.config.max_clauses.value;
        let clauses = self.clause_db.len();
        match clauses > limit {
            true => Err(self.exhausted(err::ResourceError::Clauses { limit, clauses })),
            false => Ok(()),
        }
    }

    fn exhausted(&mut self, e: err::ResourceError) -> err::ErrorKind {
        log::warn!(target: targets::REFUTATION, "{}", err::ErrorKind::from(e));
        self.state = ContextState::Exhausted(e);
        err::ErrorKind::from(e)
    }
}

/// The clauses, in ascending order of registration key.
fn sorted_by_key(clauses: ClauseSet) -> Vec<Clause> {
    let mut keyed = clauses
        .into_iter()
        .map(|clause| (clause.registration_key(), clause))
        .collect::<Vec<_>>();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, clause)| clause).collect()
}

/// Refutes the negation of `goal` from `premises`, with the given strategy and bounds.
///
/// ```rust
/// # use sos_prover::procedures::refute::refute;
/// # use sos_prover::config::Strategy;
/// let result = refute(&["P -> Q", "P"], "Q", Strategy::Basic, 200_000, 200_000).unwrap();
/// assert!(result.proven);
/// assert_eq!(result.steps, 2);
/// ```
pub fn refute(
    premises: &[impl AsRef<str>],
    goal: &str,
    strategy: Strategy,
    max_steps: usize,
    max_clauses: usize,
) -> Result<ProofResult, err::ErrorKind> {
    let mut config = Config::default();
    config.strategy.set(strategy)?;
    config.max_steps.set(max_steps)?;
    config.max_clauses.set(max_clauses)?;

    let mut the_context = Context::from_config(config);
    for premise in premises {
        the_context.add_premise(premise.as_ref())?;
    }
    the_context.set_goal(goal)?;
    the_context.refute()?;
    the_context.into_result()
}

/// Refutes the negated goal of a problem from the premises of the problem.
///
/// A strategy given by the problem takes priority over the strategy of the configuration.
pub fn solve_problem(problem: &Problem, config: &Config) -> Result<ProofResult, err::ErrorKind> {
    let mut config = config.clone();
    if let Some(strategy) = problem.strategy {
        config.strategy.set(strategy)?;
    }

    let mut the_context = Context::from_config(config);
    for premise in &problem.premises {
        the_context.add_premise(premise)?;
    }
    the_context.set_goal(&problem.goal)?;
    the_context.refute()?;
    the_context.into_result()
}

/// Reads a problem from text and refutes the negated goal of the problem.
///
/// ```rust
/// # use sos_prover::procedures::refute::solve_from_str;
/// # use sos_prover::config::Config;
/// let result = solve_from_str("P\nQ\n1", &Config::default()).unwrap();
/// assert!(!result.proven);
/// ```
pub fn solve_from_str(text: &str, config: &Config) -> Result<ProofResult, err::ErrorKind> {
    let problem: Problem = text.parse()?;
    solve_problem(&problem, config)
}

#[cfg(test)]
mod refute_tests {
    use super::*;

    fn context(premises: &[&str], goal: &str, strategy: Strategy) -> Context {
        let mut config = Config::default();
        assert!(config.strategy.set(strategy).is_ok());
        let mut the_context = Context::from_config(config);
        for premise in premises {
            assert!(the_context.add_premise(premise).is_ok());
        }
        assert!(the_context.set_goal(goal).is_ok());
        the_context
    }

    #[test]
    fn registration_order() {
        let mut the_context = context(&["P -> Q", "P"], "Q", Strategy::Basic);
        assert_eq!(the_context.refute(), Ok(Report::Proven));

        let clauses = the_context
            .clause_db
            .records()
            .map(|record| (record.clause.to_string(), record.provenance))
            .collect::<Vec<_>>();

        assert_eq!(
            clauses,
            vec![
                ("P".to_string(), None),
                ("~P v Q".to_string(), None),
                ("~Q".to_string(), None),
                ("~P".to_string(), Some((3, 2))),
                ("NIL".to_string(), Some((4, 1))),
            ]
        );
        assert_eq!(the_context.empty_clause(), Some(5));
        assert_eq!(the_context.counters.max_clauses_seen, 4);
    }

    #[test]
    fn goal_clause_among_premises() {
        let mut the_context = context(&["P", "~Q"], "Q", Strategy::Basic);
        assert_eq!(the_context.refute(), Ok(Report::NotProven));
        // ~Q is registered once, as a usable clause, and then moved to the set of support.
        assert_eq!(the_context.clause_db.len(), 2);
        assert_eq!(the_context.partitions.usable.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(the_context.partitions.sos.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(the_context.sos_end, 3);
    }

    #[test]
    fn step_bound() {
        let mut the_context = context(&["P -> Q", "P"], "Q", Strategy::Basic);
        the_context.config.max_steps.value = 1;
        assert_eq!(
            the_context.refute(),
            Err(err::ErrorKind::from(err::ResourceError::Steps { limit: 1, steps: 2 }))
        );
        assert!(matches!(the_context.state, ContextState::Exhausted(_)));
        assert!(the_context.into_result().is_err());
    }

    #[test]
    fn clause_bound() {
        let mut the_context = context(&["P -> Q", "P"], "Q", Strategy::Basic);
        the_context.config.max_clauses.value = 3;
        assert_eq!(
            the_context.refute(),
            Err(err::ErrorKind::from(err::ResourceError::Clauses { limit: 3, clauses: 4 }))
        );
    }

    #[test]
    fn single_refutation() {
        let mut the_context = context(&["P"], "P", Strategy::Basic);
        assert_eq!(the_context.refute(), Ok(Report::Proven));
        assert_eq!(
            the_context.refute(),
            Err(err::ErrorKind::from(err::StateError::RefutationComplete))
        );
        assert!(the_context.add_premise("Q").is_err());
    }

    #[test]
    fn no_goal() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_premise("P").is_ok());
        assert_eq!(the_context.refute(), Err(err::ErrorKind::EmptyInput));
    }

    #[test]
    fn active_simplification_retracts() {
        // The resolvent ~P of ~P v ~Q and Q subsumes ~P v ~Q.
        let mut the_context = context(&["Q"], "P & Q", Strategy::ActiveSimplification);
        assert_eq!(the_context.refute(), Ok(Report::NotProven));
        assert_eq!(the_context.counters.retractions, 1);
        assert_eq!(the_context.partitions.sos.iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn basic_does_not_retract() {
        let mut the_context = context(&["Q"], "P & Q", Strategy::Basic);
        assert_eq!(the_context.refute(), Ok(Report::NotProven));
        assert_eq!(the_context.counters.retractions, 0);
        assert_eq!(the_context.partitions.sos.len(), 2);
    }
}
