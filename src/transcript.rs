//! Chat transcript state.
//!
//! The transcript owns everything the chat view tracks between updates:
//! the ordered messages, the id counter and the live "thinking" bubble.
//! Markup is produced on demand from that state.

use maud::{Markup, html};

use crate::components::message::message;
use crate::history::HistoryEntry;
use crate::markdown::MarkdownRenderer;

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Message payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Message text. User text is shown verbatim, assistant text is
    /// rendered as Markdown.
    Text(String),
    /// Animated placeholder shown while the assistant is working.
    Thinking,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: u64,
    role: Role,
    body: MessageBody,
    timestamp: Option<String>,
}

impl Message {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Returns element id used in rendered markup (`message-N`).
    pub fn element_id(&self) -> String {
        format!("message-{}", self.id)
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self.body, MessageBody::Thinking)
    }
}

/// Chat transcript controller.
///
/// Ids start at 1 and increase with every appended message, including
/// thinking bubbles. Removing the thinking bubble does not reuse its id;
/// only [`Transcript::clear`] resets the counter.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    counter: u64,
    thinking: Option<u64>,
    renderer: MarkdownRenderer,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates transcript rendering assistant messages with given renderer.
    pub fn with_renderer(renderer: MarkdownRenderer) -> Self {
        Self {
            renderer,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns true while a thinking bubble is shown.
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_some()
    }

    /// Appends a message and returns its id.
    ///
    /// The message carries no timestamp and renders without a
    /// `message-timestamp` element. Use [`Transcript::add_message_at`] to
    /// attach a display time.
    pub fn add_message(&mut self, content: impl Into<String>, role: Role) -> u64 {
        self.push(role, MessageBody::Text(content.into()), None)
    }

    /// Appends a message carrying a display timestamp and returns its id.
    pub fn add_message_at(
        &mut self,
        content: impl Into<String>,
        role: Role,
        timestamp: impl Into<String>,
    ) -> u64 {
        self.push(
            role,
            MessageBody::Text(content.into()),
            Some(timestamp.into()),
        )
    }

    /// Toggles the assistant processing indicator.
    ///
    /// Turning processing on while a bubble is already shown, or off while
    /// none is shown, changes nothing.
    pub fn set_processing(&mut self, processing: bool) {
        tracing::debug!(processing, thinking = self.is_thinking(), "set processing");

        match (processing, self.thinking) {
            (true, None) => {
                let id = self.push(Role::Assistant, MessageBody::Thinking, None);
                self.thinking = Some(id);
            }
            (false, Some(_)) => self.remove_thinking(),
            _ => {}
        }
    }

    /// Removes the thinking bubble if one is shown.
    pub fn remove_thinking(&mut self) {
        if let Some(id) = self.thinking.take() {
            self.messages.retain(|message| message.id != id);
            tracing::debug!(id, "removed thinking bubble");
        }
    }

    /// Drops every message and resets the id counter.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.messages.len(), "clearing transcript");
        self.messages.clear();
        self.counter = 0;
        self.thinking = None;
    }

    /// Replaces the transcript with stored history.
    pub fn load_history(&mut self, entries: &[HistoryEntry]) {
        self.clear();

        for entry in entries {
            let role = if entry.is_user() {
                Role::User
            } else {
                Role::Assistant
            };
            self.push(
                role,
                MessageBody::Text(entry.content.clone()),
                entry.timestamp.clone(),
            );
        }

        tracing::info!(count = self.messages.len(), "loaded history");
    }

    /// Renders the chat container with every message in order.
    pub fn render(&self) -> Markup {
        html! {
            div id="chat-container" class="chat-container" {
                @for entry in &self.messages {
                    (message(entry, &self.renderer))
                }
            }
        }
    }

    fn push(&mut self, role: Role, body: MessageBody, timestamp: Option<String>) -> u64 {
        self.counter += 1;
        let id = self.counter;
        tracing::trace!(id, ?role, "adding message");

        self.messages.push(Message {
            id,
            role,
            body,
            timestamp,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_message_sequential_ids() {
        // Arrange
        let mut transcript = Transcript::new();

        // Act
        let first = transcript.add_message("hi", Role::User);
        let second = transcript.add_message("hello", Role::Assistant);

        // Assert
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].element_id(), "message-2");
    }

    #[test]
    fn test_add_message_has_no_timestamp() {
        // Arrange
        let mut transcript = Transcript::new();

        // Act
        transcript.add_message("hi", Role::Assistant);

        // Assert
        assert_eq!(transcript.messages()[0].timestamp(), None);
        assert!(!transcript.render().into_string().contains("message-timestamp"));
    }

    #[test]
    fn test_add_message_at_keeps_timestamp() {
        let mut transcript = Transcript::new();
        transcript.add_message_at("hi", Role::User, "10:15");
        assert_eq!(transcript.messages()[0].timestamp(), Some("10:15"));
    }

    #[test]
    fn test_set_processing_adds_single_bubble() {
        // Arrange
        let mut transcript = Transcript::new();

        // Act
        transcript.set_processing(true);
        transcript.set_processing(true);

        // Assert
        assert!(transcript.is_thinking());
        assert_eq!(transcript.len(), 1);
        assert!(transcript.messages()[0].is_thinking());
        assert_eq!(transcript.messages()[0].role(), Role::Assistant);
    }

    #[test]
    fn test_set_processing_off_removes_bubble() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.add_message("question", Role::User);
        transcript.set_processing(true);

        // Act
        transcript.set_processing(false);

        // Assert
        assert!(!transcript.is_thinking());
        assert_eq!(transcript.len(), 1);
        assert_eq!(
            transcript.messages()[0].body(),
            &MessageBody::Text("question".to_string())
        );
    }

    #[test]
    fn test_set_processing_off_without_bubble_is_noop() {
        let mut transcript = Transcript::new();
        transcript.add_message("x", Role::User);
        transcript.set_processing(false);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_removed_bubble_id_not_reused() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.set_processing(true);
        transcript.remove_thinking();

        // Act
        let id = transcript.add_message("answer", Role::Assistant);

        // Assert
        assert_eq!(id, 2);
    }

    #[test]
    fn test_remove_thinking_keeps_later_messages() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.set_processing(true);
        transcript.add_message("streamed", Role::Assistant);

        // Act
        transcript.remove_thinking();

        // Assert
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].id(), 2);
    }

    #[test]
    fn test_clear_resets_state() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.add_message("a", Role::User);
        transcript.set_processing(true);

        // Act
        transcript.clear();
        let id = transcript.add_message("b", Role::User);

        // Assert
        assert_eq!(id, 1);
        assert!(!transcript.is_thinking());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_load_history_replaces_messages() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.add_message("old", Role::User);
        let entries = vec![
            HistoryEntry::user("hi"),
            HistoryEntry {
                sender: Some("user".to_string()),
                content: "again".to_string(),
                ..HistoryEntry::default()
            },
            HistoryEntry::assistant("**yo**"),
        ];

        // Act
        transcript.load_history(&entries);

        // Assert
        let roles: Vec<_> = transcript.messages().iter().map(Message::role).collect();
        assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
        assert_eq!(transcript.messages()[0].id(), 1);
    }

    #[test]
    fn test_render_container_order() {
        // Arrange
        let mut transcript = Transcript::new();
        transcript.add_message("first", Role::User);
        transcript.add_message("second", Role::Assistant);

        // Act
        let html = transcript.render().into_string();

        // Assert
        assert!(html.starts_with(r#"<div id="chat-container" class="chat-container">"#));
        let first = html.find("message-1").expect("first message");
        let second = html.find("message-2").expect("second message");
        assert!(first < second);
    }

    #[test]
    fn test_render_empty_container() {
        let html = Transcript::new().render().into_string();
        assert_eq!(
            html,
            r#"<div id="chat-container" class="chat-container"></div>"#
        );
    }
}
