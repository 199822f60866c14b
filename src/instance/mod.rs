pub mod assignment;
pub mod evaluator;
pub mod item;
pub mod solution;

pub use assignment::*;
pub use evaluator::*;
pub use item::*;
pub use solution::*;

use num::Zero;
use std::fmt::{Debug, Display};

/// Numbers used for values, costs and bounds. Any copyable, ordered type with an additive
/// identity qualifies, so integer as well as floating point instances can be solved.
pub trait Number: Copy + PartialOrd + Zero + Debug + Display {}

impl<N> Number for N where N: Copy + PartialOrd + Zero + Debug + Display {}

/// A knapsack instance, i.e. an ordered sequence of items together with the bound on the total
/// cost of a feasible selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance<N> {
    items: Vec<Item<N>>,
    bound: N,
}

impl<N: Number> Instance<N> {
    pub fn new(items: Vec<Item<N>>, bound: N) -> Self {
        Self { items, bound }
    }

    pub fn items(&self) -> &[Item<N>] {
        &self.items
    }

    pub fn bound(&self) -> N {
        self.bound
    }

    /// Replaces the bound while keeping the items.
    ///
    /// # Example
    /// ```
    /// use knapsack_bb::instance::{Instance, Item};
    /// let mut instance = Instance::new(vec![Item::new(3, 2)], 1);
    /// instance.set_bound(2);
    /// assert_eq!(instance.bound(), 2);
    /// ```
    pub fn set_bound(&mut self, bound: N) {
        self.bound = bound;
    }

    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Instance<i64> {
    /// The 16 item instance with bound 100 that the solver binary falls back to if no instance
    /// is provided. Its optimum has value 1170 at cost 99.
    pub fn sample() -> Self {
        let items = [
            (130, 9),
            (150, 12),
            (190, 20),
            (190, 23),
            (229, 27),
            (290, 33),
            (330, 31),
            (70, 9),
            (330, 30),
            (110, 9),
            (90, 6),
            (310, 34),
            (330, 34),
            (190, 22),
            (230, 25),
            (170, 13),
        ];

        Self::new(items.into_iter().map(Item::from).collect(), 100)
    }
}
