//! A stable merge sort. [`Tree::build`][crate::Tree::build] runs its input through this
//! before splitting it into a balanced shape.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::sort::merge_sort;
//!
//! assert_eq!(merge_sort(vec![3, 1, 2]), vec![1, 2, 3]);
//! ```

/// Sorts `items` ascending into a new `Vec`. Equal items keep their relative order.
pub fn merge_sort<T>(mut items: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items), merge_sort(right))
}

/// Merges two sorted runs. Ties are taken from `left` first which is what makes the sort
/// stable.
fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}
