//! Long running searches are implemented using the [`IterativeAlgorithm`] trait.
//!
//! An algorithm does a small amount of work per step and then returns to its caller, which may
//! inspect the current state (e.g. to report progress) before invoking the next step.

/// [`IterativeAlgorithm`] provides a consistent interface to execute step-wise searches. Observe
/// that it does not prescribe any constructor which is left to the algorithm designer as each
/// algorithm has specific parameters. The construction phase should be cheap.
///
/// As an adopter of [`IterativeAlgorithm`], you have to implement the methods
///   [`IterativeAlgorithm::execute_step`],
///   [`IterativeAlgorithm::is_completed`] and [`IterativeAlgorithm::best_known_solution`].
///
/// If your algorithm is known to eventually terminate please also implement the marker trait
/// [`TerminatingIterativeAlgorithm`]. It offers an easy interface to run the algorithm to completion.
///
/// # Example
/// ```
/// use knapsack_bb::algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm};
///
/// struct CountDown {
///     remaining: u32,
///     steps: u32,
/// }
///
/// impl IterativeAlgorithm<u32> for CountDown {
///     fn execute_step(&mut self) {
///         self.remaining -= 1;
///         self.steps += 1;
///     }
///
///     fn is_completed(&self) -> bool {
///         self.remaining == 0
///     }
///
///     fn best_known_solution(&mut self) -> Option<u32> {
///         Some(self.steps)
///     }
/// }
///
/// impl TerminatingIterativeAlgorithm<u32> for CountDown {}
///
/// let mut algo = CountDown { remaining: 5, steps: 0 };
/// algo.run_while(|a| a.steps < 2);
/// assert_eq!(algo.steps, 2);
/// assert_eq!(algo.run_to_completion(), Some(5));
/// ```
pub trait IterativeAlgorithm<Result> {
    /// Advances the computation of this algorithm by a small amount of work.
    fn execute_step(&mut self);

    /// Returns true iff the algorithm is completed and [`IterativeAlgorithm::execute_step`] may not
    /// be called again.
    fn is_completed(&self) -> bool;

    /// Returns the currently best known solution or None if no solution is known yet.
    fn best_known_solution(&mut self) -> Option<Result>;

    /// Executes the algorithm and keeps calling [`IterativeAlgorithm::execute_step`] until the
    /// `predicate` becomes false or [`IterativeAlgorithm::is_completed`] becomes true. The
    /// function `predicate` is evaluated after each iteration, i.e. a step is carried out even
    /// if the predicate always returns false.
    fn run_while<F: FnMut(&mut Self) -> bool>(&mut self, mut predicate: F) {
        while !self.is_completed() {
            self.execute_step();

            if !predicate(self) {
                break;
            }
        }
    }
}

/// [`TerminatingIterativeAlgorithm`] is a marker trait, i.e. to adopt it, you give an empty `impl`
/// block. Add this trait to algorithms that will eventually terminate.
pub trait TerminatingIterativeAlgorithm<Result>: IterativeAlgorithm<Result> {
    /// Executes the algorithm until it completed and returns the best solution found.
    fn run_to_completion(&mut self) -> Option<Result> {
        while !self.is_completed() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
