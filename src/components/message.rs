//! Chat message element

use maud::{Markup, PreEscaped, html};

use crate::markdown::MarkdownRenderer;
use crate::transcript::{Message, MessageBody, Role};

/// Renders a single message element.
///
/// User text is inserted as escaped text and never interpreted as
/// Markdown. Assistant text goes through the renderer and is inserted as
/// markup. A thinking message shows the three dot animation instead of
/// content.
///
/// # Arguments
///
/// * `message`: Message to render
/// * `renderer`: Renderer for assistant text
///
/// # Returns
///
/// `div.message` markup with content and optional timestamp
pub fn message(message: &Message, renderer: &MarkdownRenderer) -> Markup {
    html! {
        div class=(message_class(message)) id=(message.element_id()) {
            div class="message-content" {
                @match message.body() {
                    MessageBody::Thinking => (thinking_animation()),
                    MessageBody::Text(text) => {
                        @match message.role() {
                            Role::User => (text),
                            Role::Assistant => (PreEscaped(renderer.render(text))),
                        }
                    }
                }
            }
            @if let Some(timestamp) = message.timestamp() {
                div class="message-timestamp" { (timestamp) }
            }
        }
    }
}

fn message_class(message: &Message) -> &'static str {
    match (message.role(), message.is_thinking()) {
        (Role::User, _) => "message user-message",
        (Role::Assistant, false) => "message ai-message",
        (Role::Assistant, true) => "message ai-message thinking",
    }
}

fn thinking_animation() -> Markup {
    html! {
        div class="thinking-animation" {
            @for _ in 0..3 {
                span class="thinking-dot" {}
            }
        }
    }
}
