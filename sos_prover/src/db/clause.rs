/*!
A store of every clause seen during a refutation.

Each distinct clause is registered at most once, and so has a unique [ClauseId].
Registration of a clause already in the store returns the existing id, and the provenance of the existing record is kept.

Nothing is ever removed from the store.
Retraction of a clause during a refutation removes the id of the clause from a partition, while the record of the clause remains, so that any proof which uses the clause may still be presented.

```rust
# use sos_prover::db::clause::ClauseStore;
# use sos_prover::structures::clause::Clause;
let mut store = ClauseStore::default();

let p = store.register("P".parse::<Clause>().unwrap(), None);
let not_p = store.register("~P".parse::<Clause>().unwrap(), None);
let empty = store.register(Clause::empty(), Some((not_p, p)));

assert_eq!((p, not_p, empty), (1, 2, 3));
assert_eq!(store.register("P".parse::<Clause>().unwrap(), None), p);
assert_eq!(store.lookup(empty).unwrap().to_string(), "NIL");
assert_eq!(store.len(), 3);
```
*/

use std::collections::HashMap;

use crate::{
    db::ClauseId,
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::{self},
};

/// The ids of the two clauses from which a clause was derived, if any.
pub type Provenance = Option<(ClauseId, ClauseId)>;

/// A clause together with its id and provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseRecord {
    pub id: ClauseId,
    pub clause: Clause,
    pub provenance: Provenance,
}

/// The clause store.
#[derive(Clone, Debug)]
pub struct ClauseStore {
    /// The id to be issued on the next registration.
    next_id: ClauseId,

    /// Records, indexed by id less one.
    records: Vec<ClauseRecord>,

    /// A map from clauses to ids, for detecting duplicates.
    index: HashMap<Clause, ClauseId>,
}

impl Default for ClauseStore {
    fn default() -> Self {
        ClauseStore {
            next_id: 1,
            records: Vec::default(),
            index: HashMap::default(),
        }
    }
}

impl ClauseStore {
    /// Registers a clause, returning the id of the clause.
    ///
    /// If the clause is already in the store the existing id is returned and `provenance` is ignored.
    pub fn register(&mut self, clause: Clause, provenance: Provenance) -> ClauseId {
        if let Some(id) = self.index.get(&clause) {
            return *id;
        }

        let id = self.next_id;
        self.next_id += 1;

        match provenance {
            Some((c, d)) => {
                log::trace!(target: targets::CLAUSE_STORE, "{id}. {clause} ({c}, {d})")
            }
            None => log::trace!(target: targets::CLAUSE_STORE, "{id}. {clause}"),
        }

        self.index.insert(clause.clone(), id);
        self.records.push(ClauseRecord {
            id,
            clause,
            provenance,
        });

        id
    }

    /// The clause with the given id.
    pub fn lookup(&self, id: ClauseId) -> Result<&Clause, err::ErrorKind> {
        self.record(id).map(|record| &record.clause)
    }

    /// The record of the clause with the given id.
    pub fn record(&self, id: ClauseId) -> Result<&ClauseRecord, err::ErrorKind> {
        match id.checked_sub(1).and_then(|index| self.records.get(index)) {
            Some(record) => Ok(record),
            None => Err(err::ErrorKind::UnknownClause(id)),
        }
    }

    /// The id of the clause, if the clause has been registered.
    pub fn id_of(&self, clause: &Clause) -> Option<ClauseId> {
        self.index.get(clause).copied()
    }

    /// The id to be issued on the next registration.
    pub fn next_id(&self) -> ClauseId {
        self.next_id
    }

    /// A count of registered clauses.
    ///
    /// As nothing is removed from the store, this is also the greatest count of clauses held at any point.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records of the store, in order of registration.
    pub fn records(&self) -> impl Iterator<Item = &ClauseRecord> {
        self.records.iter()
    }
}
