//! Frequency counting and mode selection.
//!
//! Ties are resolved in favour of the smallest value: counts live in an
//! ordered map and a later key only wins with a strictly higher count.

use std::collections::BTreeMap;

pub fn frequencies<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Key with the highest count; smallest key on ties.
pub fn most_frequent<T: Ord>(counts: BTreeMap<T, usize>) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    most_frequent(frequencies(values))
}
