/*!
The graph of a refutation, built from the provenance of each clause in a clause store.

Nodes of the graph are clause ids, and there is an edge from each resolvent to each of the two clauses the resolvent was derived from.
So, the clauses used to derive some clause are exactly those reachable from the clause.

With respect to the empty clause:
- The *refutation* is the empty clause together with every clause reachable from the empty clause.
- The *input core* is the collection of input clauses in the refutation, i.e. those clauses without provenance.

The premises from which the input core was obtained are, together with the goal, sufficient for the proof.

```rust
# use sos_prover::procedures::refute::refute;
# use sos_prover::config::Strategy;
# use sos_prover::reports::proof_graph::ProofGraph;
let result = refute(&["P -> Q", "P", "R"], "Q", Strategy::Basic, 100, 100).unwrap();
let graph = ProofGraph::from_store(&result.ledger);
let empty = result.empty_clause().unwrap();

assert_eq!(graph.refutation(empty).into_iter().collect::<Vec<_>>(), vec![1, 3, 4, 5, 6]);
assert_eq!(graph.core(empty).into_iter().collect::<Vec<_>>(), vec![1, 3, 4]);
```
*/

use std::collections::BTreeSet;

use petgraph::{graphmap::DiGraphMap, visit::Dfs, Direction};

use crate::db::{clause::ClauseStore, ClauseId};

/// A graph from each resolvent to the clauses the resolvent was derived from.
pub struct ProofGraph {
    graph: DiGraphMap<ClauseId, ()>,
}

impl ProofGraph {
    pub fn from_store(store: &ClauseStore) -> Self {
        let mut graph = DiGraphMap::with_capacity(store.len(), store.len() * 2);

        for record in store.records() {
            graph.add_node(record.id);
            if let Some((c, d)) = record.provenance {
                graph.add_edge(record.id, c, ());
                graph.add_edge(record.id, d, ());
            }
        }

        ProofGraph { graph }
    }

    /// The clause together with every clause used in its derivation.
    pub fn refutation(&self, id: ClauseId) -> BTreeSet<ClauseId> {
        let mut ancestors = BTreeSet::default();
        if !self.graph.contains_node(id) {
            return ancestors;
        }

        let mut dfs = Dfs::new(&self.graph, id);
        while let Some(node) = dfs.next(&self.graph) {
            ancestors.insert(node);
        }
        ancestors
    }

    /// The input clauses used in the derivation of the clause.
    pub fn core(&self, id: ClauseId) -> BTreeSet<ClauseId> {
        self.refutation(id)
            .into_iter()
            .filter(|node| {
                self.graph
                    .neighbors_directed(*node, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .collect()
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use crate::structures::clause::Clause;

    #[test]
    fn ancestors() {
        let mut store = ClauseStore::default();
        let a = store.register("A".parse::<Clause>().unwrap(), None);
        let b = store.register("~A v B".parse::<Clause>().unwrap(), None);
        let c = store.register("~B".parse::<Clause>().unwrap(), None);
        let unused = store.register("C".parse::<Clause>().unwrap(), None);
        let d = store.register("~A".parse::<Clause>().unwrap(), Some((c, b)));
        let empty = store.register(Clause::empty(), Some((d, a)));

        let graph = ProofGraph::from_store(&store);
        let refutation = graph.refutation(empty);
        assert!(!refutation.contains(&unused));
        assert_eq!(refutation.len(), 5);
        assert_eq!(graph.core(empty).into_iter().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(graph.core(a).into_iter().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn unknown_node() {
        let graph = ProofGraph::from_store(&ClauseStore::default());
        assert!(graph.refutation(1).is_empty());
    }
}
