//! Substitution pipeline for the chat Markdown subset.

use maud::{PreEscaped, html};
use regex_lite::Captures;

use super::patterns::{
    BOLD_RE, FENCE_RE, H1_RE, H2_RE, H3_RE, INLINE_CODE_RE, ITALIC_RE, ITEM_RUN_RE, LINK_RE,
    ORDERED_ITEM_RE, QUOTE_RE, UNORDERED_ITEM_RE,
};
use crate::util::{escape_html, free_sentinel};

/// Controls whether code spans take part in the later inline stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeSpans {
    /// Fenced blocks and inline code are set aside once produced, so
    /// heading, emphasis, link, list and quote rules never touch them.
    #[default]
    Protected,
    /// Code spans stay in the buffer and are rewritten by every later
    /// stage, e.g. `` `**x**` `` ends up with a `<strong>` inside the code.
    Reprocessed,
}

/// Renders the chat Markdown subset to an HTML fragment.
///
/// The renderer escapes the raw text first and then layers markup on top
/// through a fixed sequence of substitutions. Every stage consumes the
/// previous stage's output, so the order below is part of the contract:
///
/// 1. entity escaping
/// 2. fenced code blocks
/// 3. inline code
/// 4. headings (`###`, `##`, `#`)
/// 5. bold, then 6. italic
/// 7. links
/// 8. unordered items with a single `<ul>` wrap
/// 9. ordered items (no container)
/// 10. block quotes
/// 11. paragraphs, 12. line breaks, 13. empty paragraph cleanup
///
/// Rendering cannot fail. Constructs that do not match their pattern pass
/// through as escaped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    code_spans: CodeSpans,
}

impl MarkdownRenderer {
    /// Creates renderer that protects code spans from inline rewriting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates renderer that lets later stages rewrite inside code spans.
    ///
    /// Emphasis, heading and list markers inside code are rewritten like
    /// any other text.
    pub fn legacy() -> Self {
        Self::with_code_spans(CodeSpans::Reprocessed)
    }

    pub fn with_code_spans(code_spans: CodeSpans) -> Self {
        Self { code_spans }
    }

    pub fn code_spans(&self) -> CodeSpans {
        self.code_spans
    }

    /// Renders text to an HTML fragment.
    ///
    /// # Arguments
    ///
    /// * `text`: Raw message text, possibly containing Markdown subset syntax
    ///
    /// # Returns
    ///
    /// HTML fragment safe for insertion into a message element. Empty input
    /// yields an empty string.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // Escaping only introduces ASCII, so a sentinel absent from the raw
        // text is absent from every later buffer too.
        let mut stash = match self.code_spans {
            CodeSpans::Protected => free_sentinel(text).map(CodeStash::new),
            CodeSpans::Reprocessed => None,
        };

        let html = escape_html(text);
        let html = fenced_code_blocks(&html, stash.as_mut());
        let html = inline_code(&html, stash.as_mut());
        let html = headings(&html);
        let html = emphasis(&html);
        let html = links(&html);
        let html = unordered_lists(&html);
        let html = ordered_items(&html);
        let html = block_quotes(&html);
        let html = match &stash {
            Some(stash) => stash.restore(html),
            None => html,
        };
        let html = paragraphs(&html);
        let html = line_breaks(&html);
        remove_empty_paragraphs(&html)
    }
}

/// Renders text with the default renderer.
///
/// # Examples
///
/// ```
/// let html = chatmark::render("**hi** <b>");
/// assert_eq!(html, "<p><strong>hi</strong> &lt;b&gt;</p>");
/// ```
pub fn render(text: &str) -> String {
    MarkdownRenderer::new().render(text)
}

/// Finished code markup held outside the buffer while inline stages run.
///
/// Each span is replaced by `{sentinel}{index}{sentinel}` where the sentinel
/// is a private use character that does not occur in the input.
struct CodeStash {
    sentinel: char,
    spans: Vec<String>,
}

impl CodeStash {
    fn new(sentinel: char) -> Self {
        Self {
            sentinel,
            spans: Vec::new(),
        }
    }

    fn keep(&mut self, markup: String) -> String {
        let key = self.key(self.spans.len());
        self.spans.push(markup);
        key
    }

    fn key(&self, index: usize) -> String {
        format!("{0}{1}{0}", self.sentinel, index)
    }

    /// Puts spans back, newest first.
    ///
    /// A later span may enclose the key of an earlier one (inline code
    /// running across a stashed fence), never the other way round.
    fn restore(&self, mut text: String) -> String {
        for (index, markup) in self.spans.iter().enumerate().rev() {
            text = text.replace(&self.key(index), markup);
        }
        text
    }
}

fn code_block(lang: &str, body: &str) -> String {
    // Body is already escaped by the first stage.
    html! {
        div class="code-block" {
            div class="code-header" { (lang) }
            pre { code { (PreEscaped(body)) } }
        }
    }
    .into_string()
}

fn fenced_code_blocks(text: &str, mut stash: Option<&mut CodeStash>) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let lang = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|lang| !lang.is_empty())
                .unwrap_or("code");
            let body = caps.get(2).map_or("", |m| m.as_str()).trim();
            let block = code_block(lang, body);

            match stash.as_deref_mut() {
                Some(stash) => stash.keep(block),
                None => block,
            }
        })
        .into_owned()
}

fn inline_code(text: &str, mut stash: Option<&mut CodeStash>) -> String {
    INLINE_CODE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let span = format!(r#"<code class="inline-code">{}</code>"#, &caps[1]);

            match stash.as_deref_mut() {
                Some(stash) => stash.keep(span),
                None => span,
            }
        })
        .into_owned()
}

fn headings(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>${1}</h3>");
    let text = H2_RE.replace_all(&text, "<h2>${1}</h2>");
    H1_RE.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// Bold runs before italic so `**x**` is not split into two italic markers.
fn emphasis(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&text, "<em>${1}</em>").into_owned()
}

fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="${2}" target="_blank">${1}</a>"#)
        .into_owned()
}

/// Item lines become `<li>`, then one `<ul>` spans the first item through
/// the last one present at this point.
fn unordered_lists(text: &str) -> String {
    let text = UNORDERED_ITEM_RE.replace_all(text, "<li>${1}</li>");
    ITEM_RUN_RE.replacen(&text, 1, "<ul>${1}</ul>").into_owned()
}

fn ordered_items(text: &str) -> String {
    ORDERED_ITEM_RE
        .replace_all(text, "<li>${1}</li>")
        .into_owned()
}

fn block_quotes(text: &str) -> String {
    QUOTE_RE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

fn paragraphs(text: &str) -> String {
    format!("<p>{}</p>", text.replace("\n\n", "</p><p>"))
}

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

fn remove_empty_paragraphs(text: &str) -> String {
    text.replace("<p></p>", "").replace("<p><br></p>", "")
}
