//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::markdown::MarkdownRenderer;

/// Command line configuration for chatmark.
#[derive(Debug, Clone, Parser)]
#[command(name = "chatmark", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render Markdown to an HTML fragment on stdout
    Render(RenderArgs),
    /// Render a JSON chat history to a standalone HTML page
    Transcript(TranscriptArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Markdown file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Let emphasis, heading and list rules rewrite inside code spans
    #[arg(long)]
    pub legacy_code_spans: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TranscriptArgs {
    /// JSON history file (array of {role|sender, content, timestamp?})
    pub history: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title
    #[arg(long, default_value = "Live Agent")]
    pub title: String,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,

    /// Let emphasis, heading and list rules rewrite inside code spans
    #[arg(long)]
    pub legacy_code_spans: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist or the output path is
    /// an existing regular file.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Render(args) => {
                if let Some(input) = args.input_path() {
                    ensure_file(input)?;
                }
            }
            Command::Transcript(args) => {
                ensure_file(&args.history)?;
                if args.output.is_file() {
                    bail!("Output path is a file: {}", args.output.display());
                }
            }
        }

        Ok(())
    }
}

impl RenderArgs {
    /// Returns input file path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    pub fn renderer(&self) -> MarkdownRenderer {
        renderer_for(self.legacy_code_spans)
    }
}

impl TranscriptArgs {
    pub fn renderer(&self) -> MarkdownRenderer {
        renderer_for(self.legacy_code_spans)
    }
}

fn renderer_for(legacy_code_spans: bool) -> MarkdownRenderer {
    if legacy_code_spans {
        MarkdownRenderer::legacy()
    } else {
        MarkdownRenderer::new()
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("Input file does not exist: {}", path.display());
    }
    Ok(())
}
