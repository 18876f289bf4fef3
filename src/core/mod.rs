pub mod add;
pub mod calculator;
pub mod complete;
pub mod config;
pub mod del;
pub mod feed;
pub mod log;

pub use feed::{ActivityFeed, Feed, FeedContext, Snapshot};
