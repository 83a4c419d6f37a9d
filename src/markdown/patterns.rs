//! Precompiled patterns for the substitution stages.
//!
//! Compiled once and shared by every renderer instance. Line rules run in
//! CRLF mode so `\r`, `\n` and `\r\n` all end a line and `.` never
//! consumes a `\r`.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Fenced block: opening fence, optional ASCII language tag, body, closing fence
pub static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([0-9A-Za-z_]*)\n((?s:.*?))```").unwrap());

/// Single backtick span with a non-empty body
pub static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^### (.*)$").unwrap());
pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^## (.*)$").unwrap());
pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^# (.*)$").unwrap());

pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*\*(.*?)\*\*").unwrap());
pub static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*(.*?)\*").unwrap());

/// `[label](url)` with non-empty label and url
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

pub static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[*+-] (.+)$").unwrap());

/// First `<li>` through the last `</li>`, across lines
pub static ITEM_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<li>.*</li>)").unwrap());

pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^\d+\. (.+)$").unwrap());

/// Quote marker as it appears after entity escaping
pub static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^&gt; (.+)$").unwrap());
