mod algorithms;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    TimsortRecursive,
    TimsortIterative,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] = [
    SortAlgorithm::TimsortRecursive,
    SortAlgorithm::TimsortIterative,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::TimsortRecursive => "timsort_recursive",
        SortAlgorithm::TimsortIterative => "timsort_iterative",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SortParams {
    pub min_run: usize,
}

pub const DEFAULT_PARAMS: SortParams = SortParams { min_run: 32 };

#[derive(Clone, Debug)]
pub struct SortContext<T> {
    scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Copy> SortContext<T> {
    #[inline]
    pub(crate) fn load_scratch(&mut self, src: &[T]) -> &[T] {
        self.scratch.clear();
        self.scratch.extend_from_slice(src);
        &self.scratch
    }
}

pub fn sort<T: Ord + Copy>(algo: SortAlgorithm, data: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, DEFAULT_PARAMS, &mut ctx);
}

pub fn sort_with_ctx<T: Ord + Copy>(
    algo: SortAlgorithm,
    data: &mut [T],
    params: SortParams,
    ctx: &mut SortContext<T>,
) {
    debug_assert!(params.min_run >= 1);
    match algo {
        SortAlgorithm::TimsortRecursive => algorithms::timsort_recursive::sort(data, params, ctx),
        SortAlgorithm::TimsortIterative => algorithms::timsort_iterative::sort(data, params, ctx),
    }
}
