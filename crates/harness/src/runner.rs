use std::time::{Duration, Instant};

use timsort::{SortAlgorithm, SortContext, SortParams, sort_with_ctx};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub size: usize,
    pub recursive_ms: f64,
    pub iterative_ms: f64,
}

pub fn measure<F: FnOnce()>(op: F) -> Duration {
    let start = Instant::now();
    op();
    start.elapsed()
}

pub fn run_single(
    size: usize,
    params: SortParams,
    generate: &mut impl FnMut(usize) -> Vec<u64>,
    ctx: &mut SortContext<u64>,
) -> BenchmarkResult {
    debug_assert!(size >= 1);

    let base = generate(size);
    debug_assert_eq!(base.len(), size);

    // Each algorithm sorts its own copy of the same dataset.
    let mut recursive_data = base.clone();
    let recursive_ms = to_millis(measure(|| {
        sort_with_ctx(
            SortAlgorithm::TimsortRecursive,
            &mut recursive_data,
            params,
            ctx,
        );
    }));

    let mut iterative_data = base;
    let iterative_ms = to_millis(measure(|| {
        sort_with_ctx(
            SortAlgorithm::TimsortIterative,
            &mut iterative_data,
            params,
            ctx,
        );
    }));

    BenchmarkResult {
        size,
        recursive_ms,
        iterative_ms,
    }
}

pub fn run_benchmarks(
    sizes: &[usize],
    params: SortParams,
    mut generate: impl FnMut(usize) -> Vec<u64>,
) -> Vec<BenchmarkResult> {
    let mut ctx = SortContext::default();
    sizes
        .iter()
        .map(|&size| run_single(size, params, &mut generate, &mut ctx))
        .collect()
}

#[inline]
fn to_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use timsort::DEFAULT_PARAMS;

    use super::*;
    use crate::dataset::UniformDataset;

    #[test]
    fn results_follow_the_requested_order() {
        let sizes = [100, 50, 200];
        let mut requested = Vec::new();

        let results = run_benchmarks(&sizes, DEFAULT_PARAMS, |size| {
            requested.push(size);
            (0..size as u64).rev().collect()
        });

        assert_eq!(requested, vec![100, 50, 200]);
        assert_eq!(results.len(), 3);
        for (result, &size) in results.iter().zip(&sizes) {
            assert_eq!(result.size, size);
            assert!(result.recursive_ms >= 0.0);
            assert!(result.iterative_ms >= 0.0);
        }
    }

    #[test]
    fn one_dataset_per_size_from_a_seeded_source() {
        let mut source = UniformDataset::seeded(0xBE7C_7150);
        let results = run_benchmarks(&[500, 500], DEFAULT_PARAMS, |size| source.generate(size));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn measure_reports_the_wrapped_operation() {
        let mut ran = false;
        let elapsed = measure(|| ran = true);
        assert!(ran);
        assert!(elapsed >= Duration::ZERO);
    }
}
