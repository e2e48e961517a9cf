// Frequency statistics — TF counts, IDF and TF-IDF scores.

pub mod engine;
pub mod table;

pub use engine::{idf, tf, tf_idf, tf_idf_lenient};
pub use table::FrequencyTable;
