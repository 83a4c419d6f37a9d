//! Markdown subset rendering and chat transcript pages for live agent
//! front ends.

mod assets;
pub mod components;
mod config;
mod generators;
mod history;
mod markdown;
pub mod transcript;
mod util;

pub use assets::{TRANSCRIPT_CSS, write_css_assets};
pub use config::{Command, Config, RenderArgs, TranscriptArgs};
pub use generators::{generate_transcript_page, write_transcript_site};
pub use history::{HistoryEntry, parse_history};
pub use markdown::{CodeSpans, MarkdownRenderer, render};
pub use transcript::{Message, MessageBody, Role, Transcript};
pub use util::escape_html;
