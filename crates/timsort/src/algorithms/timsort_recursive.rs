use crate::{SortContext, SortParams};

use super::common;

pub fn sort<T: Ord + Copy>(data: &mut [T], params: SortParams, ctx: &mut SortContext<T>) {
    let n = data.len();
    if n < 2 {
        return;
    }

    sort_range(data, 0, n, params.min_run.max(1), ctx);
}

fn sort_range<T: Ord + Copy>(
    data: &mut [T],
    left: usize,
    right: usize,
    min_run: usize,
    ctx: &mut SortContext<T>,
) {
    let len = right - left;
    if len <= min_run {
        common::insertion_sort_range(data, left, right);
        return;
    }

    // The left half takes the extra element on odd lengths.
    let mid = left + (len + 1) / 2;
    sort_range(data, left, mid, min_run, ctx);
    sort_range(data, mid, right, min_run, ctx);
    common::merge_adjacent(data, left, mid, right, ctx);
}
