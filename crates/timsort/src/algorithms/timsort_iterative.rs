use crate::{SortContext, SortParams};

use super::common;

pub fn sort<T: Ord + Copy>(data: &mut [T], params: SortParams, ctx: &mut SortContext<T>) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let min_run = params.min_run.max(1);

    let mut left = 0;
    while left < n {
        let right = (left + min_run).min(n);
        common::insertion_sort_range(data, left, right);
        left = right;
    }

    let mut width = min_run;
    while width < n {
        let mut left = 0;
        while left < n {
            let mid = (left + width).min(n);
            let right = (left + 2 * width).min(n);
            // A trailing stride can lack a right run; its left run is already in place.
            if mid < right {
                common::merge_adjacent(data, left, mid, right, ctx);
            }
            left = right;
        }
        width *= 2;
    }
}
