use anyhow::{Context, Result};
use clap::Parser;
use faq_core::{
    EngineOptions, FaqEngine, MatchResult, Stopwords, DEFAULT_THRESHOLD, FALLBACK_REPLY,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "faq_cli")]
#[command(about = "Chat with the FAQ bot from the terminal", long_about = None)]
struct Args {
    /// Path to the FAQ corpus (JSON array of question/answer records)
    #[arg(long, default_value = "./sample_data/faqs.json")]
    faqs: String,
    /// Reject matches scoring below this cosine similarity
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,
    /// Path to a custom stopword list (one word per line)
    #[arg(long)]
    stopwords: Option<String>,
    /// Answer a single question and exit instead of starting a session
    #[arg(long)]
    ask: Option<String>,
}

fn main() -> Result<()> {
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

    if let Some(question) = args.ask {
        println!("{}", reply(&engine, &question));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Bot: Hello! Ask me your questions.");
    loop {
        print!("You: ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        println!("Bot: {}\n", reply(&engine, text));
    }
    Ok(())
}

fn reply(engine: &FaqEngine, question: &str) -> String {
    match engine.answer(question) {
        MatchResult::Match { answer, score, index } => {
            tracing::debug!(score, index, "matched");
            answer
        }
        MatchResult::NoMatch => FALLBACK_REPLY.to_string(),
    }
}
