// FrequencyTable — word -> score, in first-seen order.
//
// The order matters: ranking breaks ties by it.

use indexmap::IndexMap;

/// Scores keyed by word, in the order each word was first inserted.
///
/// `FrequencyTable<u64>` holds TF counts; `FrequencyTable<f64>` holds IDF
/// and TF-IDF scores.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<V> {
    scores: IndexMap<String, V>,
}

impl<V> Default for FrequencyTable<V> {
    fn default() -> Self {
        Self {
            scores: IndexMap::new(),
        }
    }
}

impl<V> FrequencyTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score for a word. An existing word keeps its position.
    pub fn insert(&mut self, word: impl Into<String>, score: V) {
        self.scores.insert(word.into(), score);
    }

    pub fn get(&self, word: &str) -> Option<&V> {
        self.scores.get(word)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.scores.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.scores.iter().map(|(word, score)| (word.as_str(), score))
    }
}

impl FrequencyTable<u64> {
    /// Count one more occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        match self.scores.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.scores.insert(word.to_owned(), 1);
            }
        }
    }

    /// Sum of all counts. For a TF table this equals the number of tokens
    /// it was built from.
    pub fn total(&self) -> u64 {
        self.scores.values().sum()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FrequencyTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, score) in iter {
            table.insert(word, score);
        }
        table
    }
}
