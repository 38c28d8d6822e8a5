use std::collections::BTreeSet;

use crate::db::ClauseId;

/// The usable clauses and the set of support, as disjoint sets of ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partitions {
    /// Clauses available as targets of resolution, obtained from the premises.
    pub usable: BTreeSet<ClauseId>,

    /// Clauses with support from the negated goal.
    pub sos: BTreeSet<ClauseId>,
}

impl Partitions {
    /// Every clause available as a target of resolution, in ascending order.
    pub fn targets(&self) -> Vec<ClauseId> {
        self.usable.union(&self.sos).copied().collect()
    }

    /// Places a clause in the set of support, removing it from the usable clauses if present.
    pub fn support(&mut self, id: ClauseId) {
        self.usable.remove(&id);
        self.sos.insert(id);
    }

    pub fn len(&self) -> usize {
        self.usable.len() + self.sos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usable.is_empty() && self.sos.is_empty()
    }
}

#[cfg(test)]
mod partition_tests {
    use super::*;

    #[test]
    fn support_is_disjoint() {
        let mut partitions = Partitions::default();
        partitions.usable.extend([1, 2, 3]);
        partitions.support(2);
        partitions.support(5);
        assert_eq!(partitions.usable.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(partitions.sos.iter().copied().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(partitions.targets(), vec![1, 2, 3, 5]);
        assert_eq!(partitions.len(), 4);
    }
}
