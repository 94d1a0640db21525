use async_trait::async_trait;
use nh_core::{Error, Result, SummaryModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "perplexity/sonar";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_COMPLETION_TOKENS: u32 = 300;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat-completion client for OpenRouter. One request per summary,
/// deterministic sampling, bounded output.
pub struct OpenRouterModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl fmt::Debug for OpenRouterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterModel")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenRouterModel {
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::Inference("OpenRouter API key is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Http)?;
        Ok(Self {
            client,
            api_key,
            base_url: OPENROUTER_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_prompt(url: &str) -> String {
        format!(
            "Extract a concise, high-quality summary of at least 30 words from the full article at this URL:\n{}\n\n\
             Exclude any dates, author names, section titles, or repeated phrases. \
             Focus only on the main content and key ideas of the article.",
            url
        )
    }
}

#[async_trait]
impl SummaryModel for OpenRouterModel {
    fn name(&self) -> &str {
        "OpenRouter"
    }

    async fn summarize_url(&self, url: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(url),
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Inference(format!(
                "OpenRouter returned {}",
                status
            )));
        }

        let body = response.json::<ChatResponse>().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("completion response had no choices".to_string()))?;

        Ok(content.trim().to_string())
    }
}
