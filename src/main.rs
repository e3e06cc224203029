use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use trivia::{Question, TriviaClient, TriviaConfig};

/// Fetch a batch of trivia questions.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Category id, e.g. 9 for General Knowledge
    category: String,
    /// easy, medium or hard
    difficulty: String,
    /// Overrides TRIVIA_BASE_URL
    #[arg(long)]
    base_url: Option<String>,
    /// Overrides TRIVIA_TIMEOUT_SECS, 0 disables the timeout
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the questions as JSON
    #[arg(long, default_value_t)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let mut config = TriviaConfig::from_env().context("Failed to load configuration")?;

    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    let client = TriviaClient::init(&config).context("Failed to create HTTP client")?;

    let Some(questions) = client.fetch(&args.category, &args.difficulty).await else {
        println!("no questions available");
        return Ok(ExitCode::FAILURE);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        for (i, question) in questions.iter().enumerate() {
            print_question(i + 1, question);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_question(number: usize, question: &Question) {
    println!("{}. [{}] {}", number, question.category, question.question);
    println!("   * {}", question.correct_answer);
    for answer in &question.incorrect_answers {
        println!("   - {}", answer);
    }
}
