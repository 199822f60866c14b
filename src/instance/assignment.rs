use smallvec::{SmallVec, smallvec};

/// The decision taken for a single item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Decision {
    #[default]
    Unset,
    Excluded,
    Included,
}

impl Decision {
    pub fn is_unset(self) -> bool {
        self == Decision::Unset
    }

    pub fn is_included(self) -> bool {
        self == Decision::Included
    }
}

/// The children of a node in the decision tree; there are either none or exactly two.
pub type Branches = SmallVec<[Assignment; 2]>;

/// A (possibly partial) decision vector with one [`Decision`] per item. Within the branch and
/// bound search, nodes of the decision tree are represented by their assignment only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    decisions: Vec<Decision>,
}

impl Assignment {
    /// The root of the decision tree, i.e. all items are undecided.
    pub fn new_unset(number_of_items: usize) -> Self {
        Self {
            decisions: vec![Decision::Unset; number_of_items],
        }
    }

    /// The trivial complete assignment in which no item is selected.
    pub fn new_excluded(number_of_items: usize) -> Self {
        Self {
            decisions: vec![Decision::Excluded; number_of_items],
        }
    }

    /// Builds a complete assignment in which item `i` is included iff bit `i` of `mask` is set.
    ///
    /// # Example
    /// ```
    /// use knapsack_bb::instance::{Assignment, Decision};
    /// let assignment = Assignment::from_mask(3, 0b101);
    /// assert_eq!(
    ///     assignment.decisions(),
    ///     &[Decision::Included, Decision::Excluded, Decision::Included]
    /// );
    /// ```
    pub fn from_mask(number_of_items: usize, mask: u64) -> Self {
        debug_assert!(number_of_items <= u64::BITS as usize);
        (0..number_of_items)
            .map(|i| {
                if (mask >> i) & 1 == 1 {
                    Decision::Included
                } else {
                    Decision::Excluded
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn decision_of(&self, item: usize) -> Decision {
        self.decisions[item]
    }

    /// Returns the lowest index that is still undecided.
    pub fn first_unset(&self) -> Option<usize> {
        self.decisions.iter().position(|d| d.is_unset())
    }

    /// Returns true iff every item is decided.
    pub fn is_complete(&self) -> bool {
        self.first_unset().is_none()
    }

    /// Returns an iterator over the indices of the included items in increasing order.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.decisions
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.is_included().then_some(i))
    }

    /// Expands this node of the decision tree by deciding its first unset item: the first child
    /// excludes it, the second includes it. A complete assignment has no children.
    ///
    /// # Example
    /// ```
    /// use knapsack_bb::instance::{Assignment, Decision};
    /// let root = Assignment::new_unset(2);
    /// let children = root.branches();
    /// assert_eq!(children.len(), 2);
    /// assert_eq!(children[0].decisions(), &[Decision::Excluded, Decision::Unset]);
    /// assert_eq!(children[1].decisions(), &[Decision::Included, Decision::Unset]);
    ///
    /// assert!(Assignment::new_excluded(2).branches().is_empty());
    /// ```
    pub fn branches(&self) -> Branches {
        let Some(next) = self.first_unset() else {
            return Branches::new();
        };

        let mut excluded = self.clone();
        excluded.decisions[next] = Decision::Excluded;

        let mut included = self.clone();
        included.decisions[next] = Decision::Included;

        smallvec![excluded, included]
    }

    /// Maps the assignment to a selection vector; undecided items are reported as not selected.
    pub fn to_selection(&self) -> Vec<bool> {
        self.decisions.iter().map(|d| d.is_included()).collect()
    }
}

impl FromIterator<Decision> for Assignment {
    fn from_iter<T: IntoIterator<Item = Decision>>(iter: T) -> Self {
        Self {
            decisions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use std::collections::HashSet;

    #[test]
    fn root_of_empty_instance_is_a_leaf() {
        let root = Assignment::new_unset(0);
        assert!(root.is_complete());
        assert!(root.branches().is_empty());
        assert!(root.to_selection().is_empty());
    }

    #[test]
    fn branches_decide_lowest_unset_index() {
        let partial: Assignment = [Decision::Included, Decision::Unset, Decision::Unset]
            .into_iter()
            .collect();
        assert_eq!(partial.first_unset(), Some(1));

        let children = partial.branches();
        assert_eq!(
            children[0].decisions(),
            &[Decision::Included, Decision::Excluded, Decision::Unset]
        );
        assert_eq!(
            children[1].decisions(),
            &[Decision::Included, Decision::Included, Decision::Unset]
        );
    }

    #[test]
    fn full_expansion_yields_all_leaves() {
        for n in 0..8 {
            let mut level = vec![Assignment::new_unset(n)];
            for _ in 0..n {
                level = level.iter().flat_map(|a| a.branches()).collect_vec();
            }

            assert!(level.iter().all(|a| a.is_complete()));
            assert_eq!(level.len(), 1 << n);

            let distinct: HashSet<_> = level.into_iter().collect();
            assert_eq!(distinct.len(), 1 << n);
        }
    }

    #[test]
    fn mask_enumerates_every_leaf() {
        let n = 6;
        let from_masks: HashSet<_> = (0..(1u64 << n))
            .map(|mask| Assignment::from_mask(n, mask))
            .collect();
        assert_eq!(from_masks.len(), 1 << n);
        assert!(from_masks.iter().all(|a| a.is_complete()));
    }

    #[test]
    fn selection_treats_unset_as_excluded() {
        let partial: Assignment = [Decision::Included, Decision::Unset, Decision::Excluded]
            .into_iter()
            .collect();
        assert_eq!(partial.to_selection(), vec![true, false, false]);
        assert_eq!(partial.included().collect_vec(), vec![0]);
    }
}
