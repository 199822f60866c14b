use serde::{Deserialize, Serialize};

/// An immutable (value, cost) pair. Neither component is validated; negative numbers are passed
/// through the arithmetic unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<N> {
    value: N,
    cost: N,
}

impl<N: Copy> Item<N> {
    pub fn new(value: N, cost: N) -> Self {
        Self { value, cost }
    }

    pub fn value(&self) -> N {
        self.value
    }

    pub fn cost(&self) -> N {
        self.cost
    }
}

impl<N> From<(N, N)> for Item<N> {
    fn from((value, cost): (N, N)) -> Self {
        Self { value, cost }
    }
}
