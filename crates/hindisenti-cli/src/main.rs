//! hindisenti CLI - classify Hindi sentences with the hosted sentiment API
//!
//! Usage:
//!     hindisenti [OPTIONS] [SENTENCE]...
//!
//! Environment Variables:
//!     HINDISENTI_ENDPOINT: Prediction endpoint (default: https://ItsMeArm00n-hindisenti.hf.space/predict)
//!     HINDISENTI_TIMEOUT_MS: Call deadline in milliseconds (default: 8000)
//!     HINDISENTI_WAKE_URL: Page that restarts a sleeping API (default: https://ItsMeArm00n-hindisenti.hf.space)
//!     HINDISENTI_LANG: Message language, en or hi (default: en)
//!     RUST_LOG: Log filter (default: warn)

use anyhow::Result;
use clap::Parser;
use hindisenti::{
    get_message, AlertModal, CallOutcome, ClientConfig, Language, ResultCard, SentimentClient,
    SentimentError, SharedSession, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, DEFAULT_WAKE_URL,
};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// BhāvSense - Hindi sentiment analysis
#[derive(Parser, Debug)]
#[command(name = "hindisenti")]
#[command(about = "Classify the sentiment of Hindi text with the hosted BhāvSense API")]
#[command(after_help = r#"Examples:
    # Classify one sentence
    hindisenti "मुझे यह फ़िल्म बहुत पसंद आई"

    # Interactive mode
    hindisenti

    # Hindi messages and a shorter deadline
    hindisenti --lang hi --timeout-ms 3000 "आज का दिन अच्छा नहीं था"

    # Wake a sleeping API
    hindisenti --wake

    # Machine-readable output
    hindisenti --json "ठीक है"
"#)]
struct Cli {
    /// Prediction endpoint URL
    #[arg(long, env = "HINDISENTI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Deadline for one prediction call, in milliseconds
    #[arg(long, env = "HINDISENTI_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Page that restarts a sleeping API
    #[arg(long, env = "HINDISENTI_WAKE_URL", default_value = DEFAULT_WAKE_URL)]
    wake_url: String,

    /// Message language (en or hi)
    #[arg(long, env = "HINDISENTI_LANG", default_value = "en", value_parser = ["en", "hi"])]
    lang: String,

    /// Visit the wake URL and exit
    #[arg(long)]
    wake: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Suppress log output
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Sentence to classify (interactive mode if not provided)
    sentence: Vec<String>,
}

fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_card(card: &ResultCard) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", card.title);
    println!("{}", "-".repeat(50));
    println!("{}", card.text);
    if let Some(badge) = &card.badge {
        println!("[{}] ({})", badge.text, card.class);
    }
    if let Some(hint) = &card.hint {
        println!();
        println!("{}", hint);
    }
    println!("{}", "=".repeat(50));
}

fn print_alert(alert: &AlertModal) {
    println!();
    println!("\u{26A0}\u{FE0F}  {}", alert.title);
    println!("{}", alert.description);
    println!("  {}: {}", alert.action_label, alert.action_url);
}

fn print_json(outcome: &CallOutcome, lang: Language) -> Result<()> {
    let mut value = serde_json::to_value(outcome)?;
    value["message"] = serde_json::Value::String(outcome.message(lang));
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn wake(client: &SentimentClient, lang: Language) -> bool {
    println!("{}...", client.config().wake_url);
    match client.wake().await {
        Ok(status) => {
            println!("\u{2713} {} (HTTP {})", get_message("wake_sent", lang), status);
            true
        }
        Err(e) => {
            println!("\u{2717} {}: {}", get_message("wake_failed", lang), e);
            false
        }
    }
}

/// Submit one sentence and render the result; returns the applied outcome
async fn submit(
    client: &SentimentClient,
    session: &SharedSession,
    sentence: &str,
    json: bool,
) -> Result<Option<CallOutcome>> {
    let lang = client.config().lang;
    if !json {
        println!("{}", get_message("analyzing", lang));
    }

    let Some(outcome) = session.submit(client, sentence).await? else {
        return Ok(None);
    };

    if json {
        print_json(&outcome, lang)?;
    } else {
        let view = session.view().await;
        if let Some(card) = view.card(lang) {
            print_card(&card);
        }
        if let Some(alert) = view.alert(client.config()) {
            print_alert(&alert);
        }
    }
    Ok(Some(outcome))
}

fn confirm(prompt: &str) -> bool {
    print!("{} ", prompt);
    io::stdout().flush().ok();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "हाँ" | "हां")
}

async fn run_interactive_mode(client: &SentimentClient, session: &SharedSession) -> Result<()> {
    let lang = client.config().lang;
    println!("\n{}\n", get_message("interactive_hint", lang));

    let stdin = io::stdin();
    loop {
        print!("{}: ", get_message("enter_sentence", lang));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let sentence = line.trim();
        if sentence.eq_ignore_ascii_case("quit") || sentence.eq_ignore_ascii_case("exit") {
            break;
        }

        match submit(client, session, sentence, false).await {
            Ok(_) => {}
            Err(e) => match e.downcast_ref::<SentimentError>() {
                Some(SentimentError::EmptyInput) => {
                    println!("{}", get_message("empty_input", lang));
                    continue;
                }
                _ => eprintln!("\nError: {}\n", e),
            },
        }

        if session.view().await.show_alert {
            if confirm(get_message("wake_prompt", lang)) {
                wake(client, lang).await;
            }
            session.dismiss_alert().await;
        }
        println!();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.quiet);

    let lang = Language::from_str(&args.lang);
    let config = ClientConfig::new(&args.endpoint)
        .with_timeout(Duration::from_millis(args.timeout_ms))
        .with_wake_url(&args.wake_url)
        .with_lang(lang);
    let client = SentimentClient::new(config)?;

    // Handle --wake
    if args.wake {
        if !wake(&client, lang).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    let session = SharedSession::new(lang);

    if args.sentence.is_empty() {
        return run_interactive_mode(&client, &session).await;
    }

    let sentence = args.sentence.join(" ");
    match submit(&client, &session, &sentence, args.json).await {
        Ok(Some(outcome)) if outcome.is_success() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) => match e.downcast_ref::<SentimentError>() {
            Some(SentimentError::EmptyInput) => {
                eprintln!("{}", get_message("empty_input", lang));
                std::process::exit(2);
            }
            _ => Err(e),
        },
    }
}
