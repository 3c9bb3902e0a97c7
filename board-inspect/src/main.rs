//! board-inspect - classify social media post URLs
//!
//! Runs the same submission pipeline as the TUI (URL validity, platform
//! detection, orientation, render target and height) and prints the result,
//! one line per URL, in text or JSON form.

use std::io::{BufRead, IsTerminal};

use clap::Parser;
use libembedboard::embed;
use libembedboard::orientation::detect_orientation;
use libembedboard::submit::classify_submission;
use libembedboard::{BoardError, Config, Result, SubmitError};

#[derive(Parser, Debug)]
#[command(name = "board-inspect")]
#[command(about = "Classify social media post URLs for embedding", long_about = None)]
struct Cli {
    /// URLs to classify (reads from stdin if not provided)
    urls: Vec<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            return Err(BoardError::InvalidInput(format!(
                "Unknown format '{}'. Valid options: text, json",
                other
            )))
        }
    };

    let urls = if cli.urls.is_empty() {
        read_urls_from_stdin()?
    } else {
        cli.urls
    };

    if urls.is_empty() {
        return Err(SubmitError::EmptyInput.into());
    }

    let config = Config::load()?;

    let mut first_failure: Option<SubmitError> = None;
    for url in &urls {
        match inspect(url, &config, json) {
            Ok(()) => {}
            Err(e) => {
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Classify one URL and print its line; returns the rejection if it failed
fn inspect(url: &str, config: &Config, json: bool) -> std::result::Result<(), SubmitError> {
    match classify_submission(url) {
        Ok(submission) => {
            let orientation = detect_orientation(&submission.url, submission.platform);
            let target = embed::render_target(submission.platform);
            let height = embed::display_height(orientation, &config.heights);

            if json {
                let value = serde_json::json!({
                    "url": submission.url,
                    "platform": submission.platform,
                    "orientation": orientation,
                    "target": target,
                    "width_percent": embed::FULL_WIDTH_PERCENT,
                    "height": height,
                });
                println!("{}", value);
            } else {
                println!(
                    "{}: platform={} orientation={} target={} height={}",
                    submission.url, submission.platform, orientation, target, height
                );
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let value = serde_json::json!({
                    "url": url,
                    "error": e.to_string(),
                });
                println!("{}", value);
            } else {
                println!("{}: error: {}", url, e);
            }
            Err(e)
        }
    }
}

/// Read one URL per line from stdin, skipping blank lines
fn read_urls_from_stdin() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut urls = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| BoardError::InvalidInput(e.to_string()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}
