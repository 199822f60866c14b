use crate::{algorithm::*, exact::Incumbent, instance::*};
use log::{debug, info};
use std::collections::VecDeque;

/// Breadth-first branch and bound over the binary decision tree of a knapsack instance.
///
/// Each node of the tree is an [`Assignment`] that decides a prefix of the items. A node is
/// evaluated as if its undecided items were excluded; if the resulting cost exceeds the bound,
/// the whole subtree is pruned. Otherwise the node is offered to the [`Incumbent`] and its two
/// children are appended to the back of the frontier. The root itself is never evaluated.
///
/// A single call to [`IterativeAlgorithm::execute_step`] processes exactly one node.
///
/// # Example
/// ```
/// use knapsack_bb::prelude::*;
/// let items = [Item::new(10, 5), Item::new(6, 3), Item::new(5, 3)];
/// let solution = BranchAndBound::new(&items, 6).solve();
/// assert_eq!(solution.objective(), (11, 6));
/// assert_eq!(solution.selected(), &[false, true, true]);
/// ```
pub struct BranchAndBound<'a, N: Number> {
    items: &'a [Item<N>],
    frontier: VecDeque<Assignment>,
    incumbent: Incumbent<N>,

    iterations: usize,
    pruned: usize,
}

impl<'a, N: Number> BranchAndBound<'a, N> {
    pub fn new(items: &'a [Item<N>], bound: N) -> Self {
        let frontier = Assignment::new_unset(items.len()).branches().into_iter().collect();

        Self {
            items,
            frontier,
            incumbent: Incumbent::new(items.len(), bound),
            iterations: 0,
            pruned: 0,
        }
    }

    /// Returns the number of nodes taken from the frontier so far
    pub fn number_of_iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of nodes that exceeded the bound; their subtrees were never expanded
    pub fn number_of_pruned_nodes(&self) -> usize {
        self.pruned
    }

    pub fn number_of_pending_nodes(&self) -> usize {
        self.frontier.len()
    }

    pub fn incumbent(&self) -> &Incumbent<N> {
        &self.incumbent
    }

    /// Runs the search to completion and returns the optimal solution.
    ///
    /// # Panics
    /// If the returned solution were to exceed the bound, which indicates a bug in the search.
    pub fn solve(mut self) -> Solution<N> {
        while !self.is_completed() {
            self.execute_step();
        }

        info!(
            "Branch and bound completed: {} nodes visited, {} pruned, {} improvements, best value {} at cost {}",
            self.iterations,
            self.pruned,
            self.incumbent.number_of_improvements(),
            self.incumbent.best().value(),
            self.incumbent.best().cost()
        );

        self.incumbent.into_solution()
    }
}

impl<N: Number> TerminatingIterativeAlgorithm<Solution<N>> for BranchAndBound<'_, N> {}

impl<N: Number> IterativeAlgorithm<Solution<N>> for BranchAndBound<'_, N> {
    fn execute_step(&mut self) {
        let Some(node) = self.frontier.pop_front() else {
            return;
        };
        self.iterations += 1;

        let candidate = Candidate::evaluate(node, self.items);
        if !self.incumbent.is_feasible(&candidate) {
            self.pruned += 1;
            return;
        }

        // children are appended regardless of whether the node improves the incumbent
        let children = candidate.assignment().branches();

        if self.incumbent.offer(candidate) {
            let best = self.incumbent.best();
            debug!(
                "Improved to value {} at cost {} after {} nodes",
                best.value(),
                best.cost(),
                self.iterations
            );
        }

        self.frontier.extend(children);
    }

    fn is_completed(&self) -> bool {
        self.frontier.is_empty()
    }

    fn best_known_solution(&mut self) -> Option<Solution<N>> {
        Some(self.incumbent.solution())
    }
}

/// Computes a subset of `items` of maximum total value whose total cost does not exceed `bound`;
/// among all such subsets one of minimum cost is returned. If no item fits, the trivial
/// solution selecting nothing is returned.
///
/// # Example
/// ```
/// use knapsack_bb::prelude::*;
/// let items = [Item::new(10, 5)];
/// assert_eq!(branch_and_bound(&items, 4).objective(), (0, 0));
/// assert_eq!(branch_and_bound(&items, 5).selected(), &[true]);
/// ```
pub fn branch_and_bound<N: Number>(items: &[Item<N>], bound: N) -> Solution<N> {
    BranchAndBound::new(items, bound).solve()
}
