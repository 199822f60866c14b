use crate::{
    errors::{InvariantCheck, InvariantViolation},
    instance::*,
};

/// The best feasible candidate found by a solver invocation so far, together with the bound
/// that every accepted candidate has to respect. Initially this is the trivial candidate that
/// selects nothing.
#[derive(Clone, Debug)]
pub struct Incumbent<N> {
    best: Candidate<N>,
    bound: N,
    number_of_items: usize,
    number_of_improvements: usize,
}

impl<N: Number> Incumbent<N> {
    pub fn new(number_of_items: usize, bound: N) -> Self {
        Self {
            best: Candidate::trivial(number_of_items),
            bound,
            number_of_items,
            number_of_improvements: 0,
        }
    }

    pub fn bound(&self) -> N {
        self.bound
    }

    pub fn best(&self) -> &Candidate<N> {
        &self.best
    }

    /// Returns how often [`Incumbent::offer`] replaced the best candidate.
    pub fn number_of_improvements(&self) -> usize {
        self.number_of_improvements
    }

    pub fn is_feasible(&self, candidate: &Candidate<N>) -> bool {
        candidate.cost() <= self.bound
    }

    /// A feasible candidate is accepted if it has a larger value than the best candidate, or the
    /// same value at a strictly smaller cost.
    pub fn accepts(&self, candidate: &Candidate<N>) -> bool {
        self.is_feasible(candidate)
            && (candidate.value() > self.best.value()
                || (candidate.value() == self.best.value() && candidate.cost() < self.best.cost()))
    }

    /// Replaces the best candidate with `candidate` if it is accepted; returns true in this case.
    pub fn offer(&mut self, candidate: Candidate<N>) -> bool {
        debug_assert_eq!(candidate.assignment().len(), self.number_of_items);
        if !self.accepts(&candidate) {
            return false;
        }

        self.best = candidate;
        self.number_of_improvements += 1;
        true
    }

    /// Returns the best candidate as a [`Solution`].
    ///
    /// # Panics
    /// If the best candidate violates the bound. This can only happen due to a bug in the
    /// acceptance logic and is never caused by the input.
    pub fn solution(&self) -> Solution<N> {
        self.assert_correct();
        self.best.clone().into_solution()
    }

    /// Consuming variant of [`Incumbent::solution`].
    pub fn into_solution(self) -> Solution<N> {
        self.assert_correct();
        self.best.into_solution()
    }

    fn assert_correct(&self) {
        if let Err(violation) = self.is_correct() {
            panic!("Solver produced an infeasible solution: {violation}");
        }
    }
}

impl<N: Number> InvariantCheck<InvariantViolation<N>> for Incumbent<N> {
    /// The best candidate must respect the bound. The trivial candidate is exempt, as it is the
    /// designated answer if nothing is feasible (e.g. for a negative bound).
    fn is_correct(&self) -> Result<(), InvariantViolation<N>> {
        if !self.best.is_trivial() && !self.is_feasible(&self.best) {
            return Err(InvariantViolation::CostExceedsBound {
                cost: self.best.cost(),
                bound: self.bound,
            });
        }

        if self.best.assignment().len() != self.number_of_items {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.number_of_items,
                found: self.best.assignment().len(),
            });
        }

        Ok(())
    }
}
