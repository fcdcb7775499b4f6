//! Grouping and deduplication helpers for the report pipeline.
//!
//! All three helpers take a key-extraction function rather than a
//! field name, so callers pass either a field accessor closure or
//! something computed (e.g. the primary-category lookup).

/// A deduplicated representative together with how many items shared
/// its key.
#[derive(Debug, Clone, PartialEq)]
pub struct Counted<T> {
    pub item: T,
    pub count: usize,
}

/// Stable partition of `items` by key.
///
/// Keys appear in first-seen order; items keep their original order
/// within each group. Callers that need cross-run determinism sort
/// the result themselves (see [`uniq_by`]).
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match groups.iter().position(|(existing, _)| *existing == k) {
            Some(pos) => groups[pos].1.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// One representative per distinct key: the first occurrence in
/// iteration order. The output is sorted ascending by key, not by
/// first-occurrence order.
///
/// `Option` keys order `None` first, so items with an absent key sort
/// ahead of every keyed item.
pub fn uniq_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups = group_by(items, &key);
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    groups
        .into_iter()
        .filter_map(|(_, bucket)| bucket.into_iter().next())
        .collect()
}

/// [`uniq_by`] with the occurrence count attached to each
/// representative.
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<Counted<T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups = group_by(items, &key);
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    groups
        .into_iter()
        .filter_map(|(_, bucket)| {
            let count = bucket.len();
            bucket.into_iter().next().map(|item| Counted { item, count })
        })
        .collect()
}
