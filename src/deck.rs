//! The fixed planning-poker card sequence.
//!
//! The deck never changes at runtime; a card's identity is its index in
//! this sequence. The "coffee" card is the only one rendered as a glyph
//! instead of text.

/// Ordered card labels, one page per label.
pub const CARDS: [&str; 12] = [
    "0", "1", "2", "3", "5", "8", "13", "20", "40", "100", "?", "coffee",
];

/// Label reserved for the break card.
pub const COFFEE: &str = "coffee";

/// Number of cards in the deck (also the indicator dot count).
pub fn card_count() -> usize {
    CARDS.len()
}

/// Label at `index`, if it is a valid page index.
pub fn label(index: usize) -> Option<&'static str> {
    CARDS.get(index).copied()
}

/// Whether a label is the coffee break card.
pub fn is_coffee(label: &str) -> bool {
    label == COFFEE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_sequence_is_fixed() {
        assert_eq!(
            CARDS,
            ["0", "1", "2", "3", "5", "8", "13", "20", "40", "100", "?", "coffee"]
        );
        assert_eq!(card_count(), 12);
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label(0), Some("0"));
        assert_eq!(label(9), Some("100"));
        assert_eq!(label(10), Some("?"));
        assert_eq!(label(11), Some("coffee"));
        assert_eq!(label(12), None);
    }

    #[test]
    fn test_coffee_detection() {
        assert!(is_coffee("coffee"));
        assert!(!is_coffee("100"));
        assert!(!is_coffee("?"));
    }
}
