//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The text has no recognized suit glyph.
    #[error("invalid card: no suit glyph")]
    MissingSuit,
    /// The text before the suit glyph is not a rank.
    #[error("invalid card: unknown rank")]
    UnknownRank,
    /// The text continues past the suit glyph.
    #[error("invalid card: unexpected text after the suit glyph")]
    TrailingText,
}

/// A card was requested from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckEmpty;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out while dealing.
    #[error(transparent)]
    DeckEmpty(#[from] DeckEmpty),
}

/// Errors that can occur when replacing cards.
///
/// A rejected batch never changes the hand, the deck, or the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// Replacements are only allowed after the deal and before the bet.
    #[error("invalid game state for replacing cards")]
    InvalidState,
    /// All replacements for the session have been used.
    #[error("no replacements left")]
    QuotaExhausted,
    /// No indices were given.
    #[error("no card indices given")]
    NoIndices,
    /// An index does not name a card in the hand.
    #[error("card index {index} is outside 1..={hand_size}")]
    IndexOutOfRange {
        /// The offending 1-based index.
        index: usize,
        /// The number of cards in the hand.
        hand_size: usize,
    },
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted after the deal and before the showdown.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The pot for this wager does not fit in a `u64`.
    #[error("bet amount is too large")]
    PotOverflow,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No bet has been placed for the current round.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors produced while validating a line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line contains something other than digits and whitespace.
    #[error("input may only contain digits and spaces")]
    InvalidCharacters,
    /// The line is not an integer.
    #[error("input is not a number")]
    NotANumber,
    /// The bet is below zero.
    #[error("bet must not be negative")]
    NegativeBet,
    /// A card index does not name a card in the hand.
    #[error("card index is outside 1..={hand_size}")]
    IndexOutOfRange {
        /// The number of cards in the hand.
        hand_size: usize,
    },
}

/// Errors that end the console driver.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Standard input was closed while waiting for an answer.
    #[error("input closed")]
    InputClosed,
}
