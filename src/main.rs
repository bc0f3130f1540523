//! Newsroom CLI entry point.
//!
//! Collects a research topic, runs the agent team, renders the final
//! report, then answers follow-up questions about it until the user quits.
//! This layer only renders state and collects input; all orchestration
//! lives in the library.

use clap::Parser;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use newsroom::llm::OpenAiGenerator;
use newsroom::tools::DuckDuckGoSearch;
use newsroom::{report, NewsroomConfig, Session, Speaker};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "newsroom")]
#[command(
    author,
    version,
    about = "A team of AI agents that researches a topic, writes a report, and answers questions about it"
)]
struct Cli {
    /// Research topic (prompted interactively when omitted)
    topic: Option<String>,

    /// Path to config file (defaults to ./newsroom.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to use (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// Disable web search grounding for the research agents
    #[arg(long)]
    no_search: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsroom=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsroom=warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = NewsroomConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if cli.no_search {
        config.search_enabled = false;
    }

    // Credential is a precondition: fail here, before any run starts.
    let api_key = NewsroomConfig::api_key()?;

    let mut generator = OpenAiGenerator::new(api_key, config.api_base.clone());
    if config.search_enabled {
        generator = generator.with_search(Arc::new(DuckDuckGoSearch::new(config.search_results)));
    }

    let topic = match cli.topic {
        Some(topic) => topic,
        None => Input::new()
            .with_prompt("Research topic")
            .interact_text()?,
    };
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        anyhow::bail!("the research topic must not be empty");
    }

    if cli.verbose {
        println!("{} {}", "Model:".cyan().bold(), config.model);
        println!("{} {}", "Search:".cyan().bold(), config.search_enabled);
    }

    let mut session = Session::new();

    let spinner = working_spinner("The agent team is working on your report...");
    let result = report::run_report(&mut session, &topic, &config.model, &generator).await;
    spinner.finish_and_clear();

    let report_text = result?;
    println!("{}", "Final report".green().bold());
    println!();
    termimad::print_text(&report_text);

    // Follow-up loop: each question is answered independently against the
    // report; errors are rendered without discarding the session.
    loop {
        println!();
        let question: String = Input::new()
            .with_prompt("Ask about the report (empty to quit)")
            .allow_empty(true)
            .interact_text()?;
        let question = question.trim().to_string();
        if question.is_empty() {
            break;
        }

        let spinner = working_spinner("Writing an answer...");
        let result = report::answer_followup(&mut session, &question, &config.model, &generator).await;
        spinner.finish_and_clear();

        match result {
            Ok(_) => {
                if let Some(turn) = session.log().last() {
                    debug_assert_eq!(turn.speaker, Speaker::Assistant);
                    termimad::print_text(&turn.content);
                }
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                if e.source_error().is_retryable() {
                    eprintln!("{}", "Check your configuration and try again.".yellow());
                }
            }
        }
    }

    Ok(())
}

fn working_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
