use crate::{instance::*, io::InstanceReader};
use rand::Rng;
use std::path::Path;

/// Generates an infinite stream of random instances with at most `max_items` items. Values are
/// drawn from `[0, 100]` and costs from `[0, 30]`, so instances contain some zero cost items and
/// many items of equal value. The bound is drawn uniformly from `[0, total cost]`.
pub fn generate_random_instance_stream<N: Number + From<u32>>(
    rng: &mut impl Rng,
    max_items: usize,
) -> impl Iterator<Item = Instance<N>> + '_ {
    (0..).map(move |_| {
        let n = rng.gen_range(0..=max_items);
        let raw: Vec<(u32, u32)> = (0..n)
            .map(|_| (rng.gen_range(0..=100), rng.gen_range(0..=30)))
            .collect();

        let total_cost: u32 = raw.iter().map(|&(_, c)| c).sum();
        let bound = rng.gen_range(0..=total_cost);

        Instance::new(
            raw.into_iter()
                .map(|(v, c)| Item::new(N::from(v), N::from(c)))
                .collect(),
            N::from(bound),
        )
    })
}

/// Textbook dynamic program over the exact total cost; independent of both search based solvers.
/// Returns the maximum value and the minimum cost at which it is attainable.
pub fn dynamic_programming_optimum(items: &[Item<u32>], bound: u32) -> (u32, u32) {
    let bound = bound as usize;

    // best[c] = largest value of a selection with total cost exactly c
    let mut best: Vec<Option<u32>> = vec![None; bound + 1];
    best[0] = Some(0);

    for item in items {
        let cost = item.cost() as usize;
        if cost > bound {
            continue;
        }

        for total in (cost..=bound).rev() {
            if let Some(previous) = best[total - cost] {
                let candidate = previous + item.value();
                if best[total].is_none_or(|current| current < candidate) {
                    best[total] = Some(candidate);
                }
            }
        }
    }

    let max_value = best.iter().flatten().copied().max().unwrap_or(0);
    let min_cost = best
        .iter()
        .position(|&v| v == Some(max_value))
        .unwrap_or(0);

    (max_value, min_cost as u32)
}

/// Iterates over all instance files matching `pattern`. The expected optimum is encoded in the
/// filename, e.g. `n016_b100_v1170_c99.kp` has value 1170 at cost 99.
pub fn get_test_instances_with_optimum(
    pattern: &str,
) -> impl Iterator<Item = (String, Instance<i64>, (i64, i64))> {
    glob::glob(pattern)
        .expect("Invalid glob pattern")
        .filter_map(Result::ok)
        .map(|path| {
            let filename = path.to_string_lossy().to_string();
            let optimum = optimum_from_filename(&path)
                .unwrap_or_else(|| panic!("Cannot parse optimum from {filename}"));
            let instance: Instance<i64> = Instance::try_read_instance_file(&path)
                .unwrap_or_else(|e| panic!("Cannot read {filename}: {e}"));
            (filename, instance, optimum)
        })
}

fn optimum_from_filename(path: &Path) -> Option<(i64, i64)> {
    let stem = path.file_stem()?.to_str()?;
    let field = |prefix: char| -> Option<i64> {
        stem.split('_')
            .find_map(|part| part.strip_prefix(prefix))
            .and_then(|x| x.parse().ok())
    };

    Some((field('v')?, field('c')?))
}
