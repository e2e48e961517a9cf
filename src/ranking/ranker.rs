// Sorting frequency tables by score.
//
// Descending order is produced by sorting ascending (stable, so ties keep
// table order) and then reversing the whole list. Ties therefore come out in
// reverse first-seen order: with {"x": 1, "y": 1, "z": 2} the descending
// ranking is z, y, x.

use std::cmp::Ordering;

use serde::Serialize;

use crate::frequency::FrequencyTable;

/// How many entries a report shows when no K is given.
pub const DEFAULT_TOP_K: usize = 20;

/// Sort direction for [`sort_by_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

/// A score that can be ranked.
///
/// Floats are ordered with `total_cmp`, so a NaN ranks above every finite
/// score instead of breaking the sort.
pub trait Score: Copy {
    fn cmp_score(&self, other: &Self) -> Ordering;
}

impl Score for u64 {
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Score for f64 {
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// (word, score) pairs in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedList<V> {
    entries: Vec<(String, V)>,
}

impl<V> RankedList<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, V)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(word, score)| (word.as_str(), score))
    }

    pub fn into_vec(self) -> Vec<(String, V)> {
        self.entries
    }

    /// Keep at most the first `k` entries.
    pub fn truncate(mut self, k: usize) -> Self {
        self.entries.truncate(k);
        self
    }
}

/// Order every entry of `table` by score.
pub fn sort_by_value<V>(table: &FrequencyTable<V>, direction: Direction) -> RankedList<V>
where
    V: Score,
{
    let mut entries: Vec<(String, V)> = table
        .iter()
        .map(|(word, &score)| (word.to_owned(), score))
        .collect();
    entries.sort_by(|a, b| a.1.cmp_score(&b.1));

    if direction == Direction::Descending {
        entries.reverse();
    }

    RankedList { entries }
}

/// The `k` highest-scoring entries of `table`, best first.
///
/// Asking for more entries than the table has returns all of them; `k == 0`
/// returns an empty list.
pub fn top_k<V>(table: &FrequencyTable<V>, k: usize) -> RankedList<V>
where
    V: Score,
{
    sort_by_value(table, Direction::Descending).truncate(k)
}
