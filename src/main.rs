//! Command-line host for rosterview.
//!
//! Loads the roster once, paints the initial table into an in-memory page,
//! replays control events, and writes the finished HTML document.
//!
//! # Lifecycle
//!
//! 1. **Configure**: defaults, `--config` TOML file, then flags
//! 2. **Trace**: install the tracing subscriber
//! 3. **Load**: fetch the roster; failures are logged and leave the table
//!    container empty
//! 4. **Replay**: apply each `--event`, then stdin lines with `--interactive`
//! 5. **Write**: the page goes to `--out` or stdout
//!
//! # Example
//!
//! ```text
//! rosterview --source students.json -e click:sort-gender --out roster.html
//! echo "input:search-bar=bo" | rosterview --interactive
//! ```

#![allow(clippy::multiple_crate_versions)]

mod cli;

use cli::CommandLineArgs;
use rosterview::app::{Session, UiEvent};
use rosterview::loader::Loader;
use rosterview::observability::init_tracing;
use rosterview::ui::HtmlPage;
use rosterview::{initialize, Config, Result, Student};
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CommandLineArgs::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("rosterview: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(&config, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rosterview failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, args: &CommandLineArgs) -> Result<()> {
    let state = initialize(config);
    let page = HtmlPage::new(&state.theme);
    let mut session = Session::new(state, page);

    session.load(load_students(config).await)?;

    for event in args.events() {
        replay(&mut session, event);
    }

    if args.interactive() {
        replay_lines(&mut session, BufReader::new(tokio::io::stdin())).await;
    }

    write_page(config, &session.into_document().to_html()).await
}

async fn load_students(config: &Config) -> Result<Vec<Student>> {
    let source = config.data_source()?;
    Loader::new()?.fetch_students(&source).await
}

/// Replays one event per line until end of input. A read error stops the
/// replay but keeps everything applied so far.
async fn replay_lines<R>(session: &mut Session<HtmlPage>, reader: R)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "stopped reading events");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<UiEvent>() {
            Ok(event) => replay(session, &event),
            Err(e) => tracing::warn!(line = %line, error = %e, "ignoring malformed event"),
        }
    }
}

fn replay(session: &mut Session<HtmlPage>, event: &UiEvent) {
    match session.trigger(event) {
        Ok(true) => tracing::debug!(event = %event, "event handled"),
        Ok(false) => tracing::debug!(event = %event, "event had no bound handler"),
        Err(e) => tracing::warn!(event = %event, error = %e, "event failed"),
    }
}

async fn write_page(config: &Config, html: &str) -> Result<()> {
    match config.output_path() {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
