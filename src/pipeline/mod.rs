// Analysis pipeline — load, clean, score, rank.

pub mod analysis;
