pub mod classifier;
pub mod countdown;
pub mod recency;
