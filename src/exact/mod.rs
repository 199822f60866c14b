pub mod branch_and_bound;
pub mod brute_force;
pub mod incumbent;

pub use branch_and_bound::{BranchAndBound, branch_and_bound};
pub use brute_force::brute_force;
pub use incumbent::Incumbent;

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::generate_random_instance_stream;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rayon::prelude::*;

    #[test]
    fn independent_invocations_in_parallel() {
        (0..64u64).into_par_iter().for_each(|seed| {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            for instance in generate_random_instance_stream::<i64>(&mut rng, 12).take(10) {
                let bb = branch_and_bound(instance.items(), instance.bound());
                let bf = brute_force(instance.items(), instance.bound());
                assert_eq!(bb.objective(), bf.objective(), "seed: {seed}");
            }
        });
    }
}
