//! Stable top-down merge sort.
//!
//! The balanced tree is built from sorted input, and this is the sort it
//! uses. Every input, sorted or not, is split all the way down and merged
//! back up: Θ(n log n) comparisons and Θ(n) scratch space, with no shortcut
//! for presorted runs.

use core::cmp::Ordering;

use alloc::vec::Vec;

/// Sorts `(key, value)` pairs by key, keeping equal keys in input order.
///
/// # Examples
///
/// ```
/// use hollow_store::merge_sort;
///
/// let sorted = merge_sort(vec![(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd')]);
/// assert_eq!(sorted, vec![(0, 'd'), (1, 'b'), (2, 'a'), (2, 'c')]);
/// ```
///
/// # Complexity
///
/// Θ(n log n) time, Θ(n) auxiliary space.
#[must_use]
pub fn merge_sort<K: Ord, V>(entries: Vec<(K, V)>) -> Vec<(K, V)> {
    merge_sort_by(entries, |a, b| a.0.cmp(&b.0))
}

/// Sorts `items` by the key `f` extracts, keeping equal keys in input order.
///
/// # Examples
///
/// ```
/// use hollow_store::merge_sort::merge_sort_by_key;
///
/// let words = merge_sort_by_key(vec!["pear", "fig", "kiwi", "yam"], |word| word.len());
/// assert_eq!(words, vec!["fig", "yam", "pear", "kiwi"]);
/// ```
#[must_use]
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, mut f: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(items, |a, b| f(a).cmp(&f(b)))
}

/// Sorts `items` with the comparator `compare`, keeping items that compare
/// [`Equal`](Ordering::Equal) in input order.
#[must_use]
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(items, &mut compare)
}

fn sort_run<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, compare);
    let right = sort_run(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left run, which holds the earlier items.
        let next = if compare(l, r) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn trivial_inputs_come_back_unchanged() {
        assert_eq!(merge_sort::<i32, ()>(Vec::new()), Vec::new());
        assert_eq!(merge_sort(vec![(4, 'x')]), vec![(4, 'x')]);
    }

    #[test]
    fn descending_input() {
        let input: Vec<(i32, ())> = (0..9).rev().map(|key| (key, ())).collect();
        let keys: Vec<i32> = merge_sort(input).into_iter().map(|(key, ())| key).collect();
        assert_eq!(keys, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn comparator_is_honoured() {
        let sorted = merge_sort_by(vec![3, 1, 2], |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    proptest! {
        #[test]
        fn matches_std_stable_sort(keys in prop::collection::vec(-8i8..8, 0..200)) {
            // Tagging each key with its position makes stability observable.
            let input: Vec<(i8, usize)> = keys.into_iter().enumerate().map(|(at, key)| (key, at)).collect();
            let mut expected = input.clone();
            expected.sort_by_key(|&(key, _)| key);

            let sorted = merge_sort(input);
            prop_assert_eq!(&sorted, &expected);
            prop_assert_eq!(merge_sort(sorted.clone()), sorted);
        }
    }
}
