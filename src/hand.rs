//! Hands and rank-sum scoring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write as _;

use crate::card::Card;
use crate::style::Style;

/// Sums the rank strengths of `cards`.
///
/// Suits and combinations do not count; an empty slice scores 0.
///
/// ```
/// use rankdraw::{Card, Rank, Suit, hand::evaluate};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ten),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// assert_eq!(evaluate(&cards), 23);
/// assert_eq!(evaluate(&[]), 0);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.value())).sum()
}

/// Renders `cards` as a sum, e.g. `10♥ + K♠ = 23`.
///
/// An empty slice renders as just the total.
#[must_use]
pub fn format_score(cards: &[Card], style: Style) -> String {
    let mut line = String::new();
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            line.push_str(" + ");
        }
        line.push_str(&style.card(*card));
    }
    if !cards.is_empty() {
        line.push_str(" = ");
    }
    let _ = write!(line, "{}", evaluate(cards));
    line
}

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Puts `card` in the 0-based `slot` and returns the card it replaced.
    ///
    /// Returns `None` and leaves the hand untouched if the slot is empty.
    pub fn replace(&mut self, slot: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(slot)
            .map(|held| core::mem::replace(held, card))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        evaluate(&self.cards)
    }

    /// Renders the hand as a sum, e.g. `10♥ + K♠ = 23`.
    #[must_use]
    pub fn score_line(&self, style: Style) -> String {
        format_score(&self.cards, style)
    }

    /// Renders the cards separated by spaces.
    #[must_use]
    pub fn render(&self, style: Style) -> String {
        self.cards
            .iter()
            .map(|card| style.card(*card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::Plain))
    }
}
