//! Markdown subset rendering for chat transcripts.
//!
//! This module converts the restricted Markdown dialect used by assistant
//! replies (headings, emphasis, code, links, simple lists, block quotes and
//! paragraphs) into an HTML fragment. Rendering is a fixed chain of text
//! substitutions over the escaped input, so it never fails.

mod patterns;
mod renderer;

pub use renderer::{CodeSpans, MarkdownRenderer, render};
