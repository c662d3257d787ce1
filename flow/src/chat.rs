use agromarket_core::{ChatMessage, Order};
use tracing::debug;
use uuid::Uuid;

/// Display time given to messages sent in this session.
pub const JUST_NOW: &str = "Ahora";

/// Local chat for one order.
///
/// Starts from the order's seeded messages. Sent messages live only as long
/// as the panel does.
#[derive(Debug, Clone)]
pub struct ChatPanel {
    counterpart: String,
    messages: Vec<ChatMessage>,
    draft: String,
}

impl ChatPanel {
    pub fn new(order: &Order) -> Self {
        Self {
            counterpart: order.counterpart_name.clone(),
            messages: order.messages.clone(),
            draft: String::new(),
        }
    }

    pub fn counterpart(&self) -> &str {
        &self.counterpart
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Appends the trimmed draft and clears it. Blank drafts are ignored.
    pub fn send(&mut self) -> Option<&ChatMessage> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let message = ChatMessage::new(Uuid::new_v4().to_string(), text, true, JUST_NOW);
        self.draft.clear();
        debug!(to = %self.counterpart, id = %message.id, "chat message sent");
        self.messages.push(message);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agromarket_core::seed;

    fn panel() -> ChatPanel {
        let sales = seed::derive_sales(&seed::catalog());
        ChatPanel::new(&sales[0])
    }

    #[test]
    fn test_send_appends_trimmed() {
        let mut chat = panel();
        let before = chat.messages().len();
        chat.set_draft("  ¿Sigue disponible?  ");

        let sent = chat.send().cloned().unwrap();
        assert_eq!(sent.text, "¿Sigue disponible?");
        assert!(sent.from_me);
        assert_eq!(sent.time, JUST_NOW);
        assert_eq!(chat.messages().len(), before + 1);
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut chat = panel();
        let before = chat.messages().len();
        chat.set_draft("   ");
        assert!(chat.send().is_none());
        assert_eq!(chat.messages().len(), before);
        assert_eq!(chat.draft(), "   ");
    }

    #[test]
    fn test_messages_keep_append_order_and_unique_ids() {
        let mut chat = panel();
        chat.set_draft("uno");
        chat.send();
        chat.set_draft("dos");
        chat.send();

        let tail: Vec<&str> = chat.messages().iter().rev().take(2).map(|m| m.text.as_str()).collect();
        assert_eq!(tail, vec!["dos", "uno"]);
        let n = chat.messages().len();
        assert_ne!(chat.messages()[n - 1].id, chat.messages()[n - 2].id);
    }
}
