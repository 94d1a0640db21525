pub mod client;
pub mod filter;
pub mod sources;

pub use client::FeedClient;
pub use filter::ItemFilter;
pub use sources::{builtin_sources, FeedSource};

pub mod prelude {
    pub use super::client::FeedClient;
    pub use super::filter::ItemFilter;
    pub use super::sources::{builtin_sources, FeedSource};
    pub use nh_core::{Error, FeedItem, Result};
}
