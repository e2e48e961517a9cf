// Ranking — order frequency tables by score and keep the top K.

pub mod ranker;

pub use ranker::{sort_by_value, top_k, Direction, RankedList, Score, DEFAULT_TOP_K};
