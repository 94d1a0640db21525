pub mod fallback;
pub mod models;

pub use fallback::{RemoteFallback, NO_API_KEY_SENTINEL, UNAVAILABLE_SENTINEL};
pub use models::openrouter::OpenRouterModel;

pub mod prelude {
    pub use super::fallback::RemoteFallback;
    pub use super::models::openrouter::OpenRouterModel;
    pub use nh_core::{Error, Result, SummaryModel};
}
