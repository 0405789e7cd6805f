//! The deck: a stack of cards dealt from the end.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckEmpty;
use crate::hand::Hand;

/// An ordered stack of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled 52-card deck.
    ///
    /// Cards are ordered rank by rank, each rank in suit order.
    ///
    /// ```
    /// use rankdraw::Deck;
    ///
    /// assert_eq!(Deck::new().len(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck holding exactly `cards`.
    ///
    /// The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckEmpty`] if no cards are left.
    pub fn deal_one(&mut self) -> Result<Card, DeckEmpty> {
        self.cards.pop().ok_or(DeckEmpty)
    }

    /// Deals `count` cards onto the end of `hand`, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DeckEmpty`] if the deck runs out. Cards dealt before that
    /// stay in the hand.
    pub fn deal_cards(&mut self, hand: &mut Hand, count: usize) -> Result<(), DeckEmpty> {
        for _ in 0..count {
            hand.add_card(self.deal_one()?);
        }
        Ok(())
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
