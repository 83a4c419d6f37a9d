use anyhow::{Context, Result};
use chatmark::{Command, Config, RenderArgs, Transcript, TranscriptArgs};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
///
/// Kept at warn so the `render` subcommand's stdout carries only HTML.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Render(args) => run_render(args),
        Command::Transcript(args) => run_transcript(args),
    }
}

/// Renders Markdown input to stdout.
fn run_render(args: &RenderArgs) -> Result<()> {
    let text = match args.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let html = args.renderer().render(&text);
    tracing::debug!(input = text.len(), output = html.len(), "rendered fragment");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", html).context("Failed to write to stdout")?;
    Ok(())
}

/// Loads history and writes the transcript page.
fn run_transcript(args: &TranscriptArgs) -> Result<()> {
    let json = fs::read_to_string(&args.history)
        .with_context(|| format!("Failed to read {}", args.history.display()))?;
    let entries = chatmark::parse_history(&json)
        .with_context(|| format!("Invalid history file {}", args.history.display()))?;

    let mut transcript = Transcript::with_renderer(args.renderer());
    transcript.load_history(&entries);

    let index = chatmark::write_transcript_site(&args.output, &args.title, &transcript)
        .context("Failed to write transcript page")?;

    println!("Generated {}", index.display());

    if args.open {
        if let Err(e) = open::that(&index) {
            tracing::warn!(error = %e, path = %index.display(), "failed to open browser");
        }
    }

    Ok(())
}
