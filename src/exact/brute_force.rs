use crate::{exact::Incumbent, instance::*};
use log::debug;

/// Enumerates all `2^n` complete assignments in binary counting order and returns the best one
/// with respect to the same acceptance rule as [`crate::exact::branch_and_bound()`]. The running
/// time is exponential in every case, so this solver is only meant to cross-check the branch and
/// bound solver on small instances.
///
/// # Panics
/// If there are 64 or more items, as the enumeration counter cannot represent them. If the
/// returned solution were to exceed the bound, which indicates a bug in the search.
///
/// # Example
/// ```
/// use knapsack_bb::prelude::*;
/// let items = [Item::new(10, 5), Item::new(6, 3), Item::new(5, 3)];
/// assert_eq!(brute_force(&items, 6).objective(), branch_and_bound(&items, 6).objective());
/// ```
pub fn brute_force<N: Number>(items: &[Item<N>], bound: N) -> Solution<N> {
    let n = items.len();
    assert!(
        n < u64::BITS as usize,
        "Brute force cannot enumerate the assignments of {n} items"
    );

    let mut incumbent = Incumbent::new(n, bound);
    for mask in 0..(1u64 << n) {
        incumbent.offer(Candidate::evaluate(Assignment::from_mask(n, mask), items));
    }

    debug!(
        "Brute force enumerated {} assignments, {} improvements",
        1u64 << n,
        incumbent.number_of_improvements()
    );

    incumbent.into_solution()
}
