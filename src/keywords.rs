use std::hash::Hash;

use fnv::FnvHashMap;

/// Number of keywords selected by default.
pub const DEFAULT_KEYWORDS: usize = 5;

/// Count every distinct item and return the `n` most frequent ones with their
/// counts.
///
/// Items are ranked by count, descending. Items with equal counts keep the
/// order of their first appearance in `items`.
pub fn select_keywords<T: Eq + Hash + Clone>(items: &[T], n: usize) -> Vec<(T, usize)> {
    let mut index: FnvHashMap<&T, usize> = FnvHashMap::default();
    let mut counts: Vec<(&T, usize)> = Vec::new();

    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // stable, first appearance breaks ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(n)
        .map(|(item, count)| (item.clone(), count))
        .collect()
}
