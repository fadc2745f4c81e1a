// Adapters layer: concrete display surfaces the session core appends cards to.

use crate::domain::model::Card;
use crate::domain::ports::DisplaySurface;
use std::sync::Mutex;

/// In-memory display: just holds the appended cards. Used by tests and by
/// embedders that render cards themselves.
#[derive(Debug, Default)]
pub struct BufferDisplay {
    cards: Mutex<Vec<Card>>,
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Card>> {
        self.cards.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySurface for BufferDisplay {
    fn append(&self, card: Card) {
        self.lock().push(card);
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn cards(&self) -> Vec<Card> {
        self.lock().clone()
    }

    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Terminal display: prints each card as it arrives, and keeps the buffer so
/// the CLI can report how many cards the run produced.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    buffer: BufferDisplay,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn append(&self, card: Card) {
        println!("{}", card);
        self.buffer.append(card);
    }

    fn clear(&self) {
        self.buffer.clear();
    }

    fn cards(&self) -> Vec<Card> {
        self.buffer.cards()
    }

    fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            image_url: "img.png".to_string(),
            categories: vec!["Electric".to_string()],
        }
    }

    #[test]
    fn test_buffer_display_appends_in_order() {
        let display = BufferDisplay::new();
        display.append(card("Pikachu"));
        display.append(card("Eevee"));

        let cards = display.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Pikachu");
        assert_eq!(cards[1].name, "Eevee");
    }

    #[test]
    fn test_buffer_display_clear_empties_everything() {
        let display = BufferDisplay::new();
        display.append(card("Pikachu"));
        assert!(!display.is_empty());

        display.clear();

        assert!(display.is_empty());
        assert!(display.cards().is_empty());
    }
}
