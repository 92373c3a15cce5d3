use anyhow::{Context, Result};
use clap::Parser;
use faq_core::{EngineOptions, FaqEngine, Stopwords, DEFAULT_THRESHOLD};
use faq_server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "faq_server")]
#[command(about = "Serve FAQ answers over HTTP", long_about = None)]
struct Args {
    /// Path to the FAQ corpus (JSON array of question/answer records)
    #[arg(long, default_value = "./sample_data/faqs.json")]
    faqs: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Reject matches scoring below this cosine similarity
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,
    /// Path to a custom stopword list (one word per line); defaults to the
    /// built-in English list
    #[arg(long)]
    stopwords: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let stopwords = match &args.stopwords {
        Some(path) => Stopwords::from_file(path)?,
        None => Stopwords::English,
    };
    let options = EngineOptions {
        threshold: args.threshold,
        stopwords,
    };
    let engine = FaqEngine::from_path(&args.faqs, options)
        .with_context(|| format!("loading faq corpus from {}", args.faqs))?;
    let app = build_app(Arc::new(engine));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "faq server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
