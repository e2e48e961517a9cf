// Text cleaning and tokenization.

pub mod cleaner;
