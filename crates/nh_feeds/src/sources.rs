use serde::{Deserialize, Serialize};

/// A configured feed: display name plus feed URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// The curated AI/robotics source list the curation dashboard ships with.
pub fn builtin_sources() -> Vec<FeedSource> {
    vec![
        FeedSource::new("DeepMind Blog", "https://rss.app/feeds/dISWeyZM2Tzfmh7n.xml"),
        FeedSource::new(
            "NVIDIA Developer - Generative AI",
            "https://rss.app/feeds/sh5T3ziuw18ppMnJ.xml",
        ),
        FeedSource::new("OpenAI News", "https://rss.app/feeds/88lTJ2E61JPFhtfy.xml"),
        FeedSource::new(
            "AWS Machine Learning",
            "https://rss.app/feeds/IvbT7TcwbDQXkpio.xml",
        ),
        FeedSource::new("Perplexity AI", "https://rss.app/feeds/nZ4JF5xejzLVJXkA.xml"),
        FeedSource::new("NVIDIA Robotics", "https://rss.app/feeds/fgok8MDwu6ZJCOl7.xml"),
        FeedSource::new("Anthropic", "https://rss.app/feeds/R87xeBq4tXiHLS3s.xml"),
        FeedSource::new("Microsoft", "https://rss.app/feeds/bQF9FLInBGQsYBi5.xml"),
        FeedSource::new("Meta AI Blog", "https://rss.app/feeds/9QDXU7Tl5VxHCNtv.xml"),
        FeedSource::new("Hugging Face", "https://rss.app/feeds/IkUVIFijmf7JEj9f.xml"),
        FeedSource::new("Boston Dynamics", "https://rss.app/feeds/aDP50odVFp6PJLj8.xml"),
        FeedSource::new(
            "News MIT",
            "https://news.mit.edu/topic/mitartificial-intelligence2-rss.xml",
        ),
    ]
}
