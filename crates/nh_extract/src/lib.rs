pub mod cache;
pub mod filter;
pub mod local;
pub mod pipeline;

pub use cache::DescriptionCache;
pub use local::{ArticlePage, HttpFetcher, PageFetcher};
pub use pipeline::DescriptionPipeline;

pub mod prelude {
    pub use super::pipeline::DescriptionPipeline;
    pub use nh_core::{DescriptionOrigin, Error, ExtractionResult, Result};
}
