//! HTML page generators for chat transcripts.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{TRANSCRIPT_CSS, write_css_assets};
use crate::components::layout::page_wrapper;
use crate::transcript::Transcript;

/// Generates a standalone transcript page.
///
/// # Arguments
///
/// * `title`: Page title shown in the tab and the page header
/// * `transcript`: Transcript to render
///
/// # Returns
///
/// Complete HTML document referencing `assets/transcript.css`
pub fn generate_transcript_page(title: &str, transcript: &Transcript) -> Markup {
    let stylesheet = format!("assets/{}", TRANSCRIPT_CSS);
    page_wrapper(title, &[stylesheet.as_str()], transcript.render())
}

/// Writes a transcript page and its stylesheet to output directory.
///
/// Creates `index.html` and `assets/transcript.css` below `output`,
/// creating directories as needed and overwriting existing files.
///
/// # Arguments
///
/// * `output`: Output directory
/// * `title`: Page title
/// * `transcript`: Transcript to render
///
/// # Returns
///
/// Path of the written `index.html`
///
/// # Errors
///
/// Returns error if directories or files cannot be written
pub fn write_transcript_site(
    output: &Path,
    title: &str,
    transcript: &Transcript,
) -> Result<PathBuf> {
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let index_path = output.join("index.html");
    let page = generate_transcript_page(title, transcript);
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    tracing::info!(
        path = %index_path.display(),
        messages = transcript.len(),
        "wrote transcript page"
    );

    Ok(index_path)
}
