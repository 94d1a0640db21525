pub mod error;
pub mod models;
pub mod storage;
pub mod text;
pub mod types;

pub use error::Error;
pub use models::SummaryModel;
pub use storage::DecisionStore;
pub use types::{
    DecisionFilter, DecisionRecord, DecisionStatus, DescriptionOrigin, ExtractionResult, FeedItem,
};

pub type Result<T> = std::result::Result<T, Error>;
