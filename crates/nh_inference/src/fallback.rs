use nh_core::text;
use nh_core::{DescriptionOrigin, ExtractionResult, SummaryModel};
use std::sync::Arc;

/// Returned when no credential is configured for the remote service.
pub const NO_API_KEY_SENTINEL: &str = "No API key configured for description generation.";

/// Returned when the remote call fails in any way.
pub const UNAVAILABLE_SENTINEL: &str = "Description unavailable";

/// Appended when the remote summary comes back suspiciously short.
const BREVITY_CAVEAT: &str = " [Summary may be brief due to article length.]";

const MIN_SUMMARY_WORDS: usize = 30;
const MAX_LEN: usize = 500;

/// The remote stage of the extraction pipeline. Wraps an optional
/// [`SummaryModel`] and converts every outcome, including the missing-key
/// and failure cases, into a description string. Never errors.
pub struct RemoteFallback {
    model: Option<Arc<dyn SummaryModel>>,
}

impl RemoteFallback {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model: Some(model) }
    }

    /// A fallback with no credential behind it; always yields the
    /// missing-key sentinel.
    pub fn disabled() -> Self {
        Self { model: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    pub async fn describe(&self, url: &str) -> ExtractionResult {
        let Some(model) = &self.model else {
            return ExtractionResult {
                description: NO_API_KEY_SENTINEL.to_string(),
                origin: DescriptionOrigin::Unavailable,
            };
        };

        match model.summarize_url(url).await {
            Ok(raw) => ExtractionResult {
                description: post_process(&raw),
                origin: DescriptionOrigin::RemoteFallback,
            },
            Err(e) => {
                tracing::warn!("remote summary failed for {}: {}", url, e);
                ExtractionResult {
                    description: UNAVAILABLE_SENTINEL.to_string(),
                    origin: DescriptionOrigin::Unavailable,
                }
            }
        }
    }
}

/// Collapse whitespace, flag too-short summaries, clip to the display
/// bound. Caveat is appended before clipping, matching the order callers
/// see in the UI.
fn post_process(raw: &str) -> String {
    let mut description = text::collapse_whitespace(raw);
    if description.split_whitespace().count() < MIN_SUMMARY_WORDS {
        description.push_str(BREVITY_CAVEAT);
    }
    if description.chars().count() > MAX_LEN {
        description = description.chars().take(MAX_LEN).collect();
        description.push_str("...");
    }
    description
}
