use super::*;

/// Sums the costs of all included items. Unset and excluded entries contribute nothing, so a
/// partial assignment is evaluated as if its undecided items were excluded.
///
/// # Example
/// ```
/// use knapsack_bb::instance::{cost, Assignment, Decision, Item};
/// let items = [Item::new(10, 5), Item::new(7, 3), Item::new(4, 1)];
/// let assignment: Assignment = [Decision::Included, Decision::Unset, Decision::Included]
///     .into_iter()
///     .collect();
/// assert_eq!(cost(&assignment, &items), 6);
/// ```
pub fn cost<N: Number>(assignment: &Assignment, items: &[Item<N>]) -> N {
    sum_of_included(assignment, items, Item::cost)
}

/// Sums the values of all included items; see [`cost`].
pub fn value<N: Number>(assignment: &Assignment, items: &[Item<N>]) -> N {
    sum_of_included(assignment, items, Item::value)
}

fn sum_of_included<N: Number>(
    assignment: &Assignment,
    items: &[Item<N>],
    component: impl Fn(&Item<N>) -> N,
) -> N {
    debug_assert_eq!(assignment.len(), items.len());
    assignment
        .included()
        .fold(N::zero(), |acc, i| acc + component(&items[i]))
}

/// An assignment together with its evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<N> {
    assignment: Assignment,
    value: N,
    cost: N,
}

impl<N: Number> Candidate<N> {
    pub fn evaluate(assignment: Assignment, items: &[Item<N>]) -> Self {
        let value = value(&assignment, items);
        let cost = cost(&assignment, items);
        Self {
            assignment,
            value,
            cost,
        }
    }

    /// The candidate in which nothing is selected; it has value and cost zero.
    pub fn trivial(number_of_items: usize) -> Self {
        Self {
            assignment: Assignment::new_excluded(number_of_items),
            value: N::zero(),
            cost: N::zero(),
        }
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn value(&self) -> N {
        self.value
    }

    pub fn cost(&self) -> N {
        self.cost
    }

    /// Returns true iff no item is included.
    pub fn is_trivial(&self) -> bool {
        self.assignment.included().next().is_none()
    }

    pub fn into_solution(self) -> Solution<N> {
        Solution::new(self.assignment.to_selection(), self.value, self.cost)
    }
}
