use chrono::{Days, Utc};
use clap::Parser;
use nh_core::Result;
use nh_extract::DescriptionPipeline;
use nh_feeds::{builtin_sources, FeedClient, ItemFilter};
use nh_inference::{OpenRouterModel, RemoteFallback};
use nh_storage::MemoryDecisionStore;
use nh_web::AppState;
use std::sync::Arc;
use tracing::info;

const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Parser, Debug)]
#[command(author, version, about = "News curation hub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,
    },
    /// Fetch feed items and print them
    Fetch {
        /// Only this source (by name). Fetches all sources if omitted.
        #[arg(long)]
        source: Option<String>,
        /// How many days back to include
        #[arg(long, default_value_t = 7)]
        days: u64,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Extract a description for a single article URL
    Extract { url: String },
    /// List configured feed sources
    Sources,
}

fn build_fallback() -> RemoteFallback {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => match OpenRouterModel::new(key) {
            Ok(model) => {
                info!("🧠 Remote fallback enabled (using OpenRouter)");
                RemoteFallback::new(Arc::new(model))
            }
            Err(e) => {
                info!("⚠️ Remote fallback disabled: {}", e);
                RemoteFallback::disabled()
            }
        },
        _ => {
            info!("⚠️ {} not set; remote fallback disabled", API_KEY_ENV);
            RemoteFallback::disabled()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => {
            let pipeline = DescriptionPipeline::new(build_fallback());
            let store = Arc::new(MemoryDecisionStore::new());

            info!("📰 Serving on {}", addr);
            nh_web::serve(&addr, AppState::new(pipeline, store)).await?;
        }
        Commands::Fetch {
            source,
            days,
            keyword,
        } => {
            let client = FeedClient::new();
            let sources: Vec<_> = match &source {
                Some(name) => builtin_sources()
                    .into_iter()
                    .filter(|s| s.name.eq_ignore_ascii_case(name))
                    .collect(),
                None => builtin_sources(),
            };
            if sources.is_empty() {
                eprintln!("No source named {:?}", source.unwrap_or_default());
                return Ok(());
            }

            let today = Utc::now().date_naive();
            let start = today - Days::new(days);
            let filter = ItemFilter::new(start, today).with_keyword(keyword);

            let items = filter.apply(client.fetch_all(&sources).await);
            info!("🦗 {} items within the last {} days", items.len(), days);
            for item in items {
                println!(
                    "{} [{}] {} - {}",
                    item.published_date, item.source, item.title, item.link
                );
            }
        }
        Commands::Extract { url } => {
            let pipeline = DescriptionPipeline::new(build_fallback());
            let result = pipeline.extract(&url).await;
            info!("origin: {:?}", result.origin);
            println!("{}", result.description);
        }
        Commands::Sources => {
            for source in builtin_sources() {
                println!("{} - {}", source.name, source.url);
            }
        }
    }

    Ok(())
}
