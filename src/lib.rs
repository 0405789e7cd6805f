//! A rank-sum draw poker game against a scripted dealer, with optional
//! `no_std` support.
//!
//! Each round deals two cards to the player and two to the dealer. The player
//! may swap cards for fresh draws (three per session by default), states a
//! wager that the dealer matches, and the higher sum of card ranks takes the
//! pot. Equal sums split it.
//!
//! The crate provides a [`Session`] type that owns the deck and both hands
//! and enforces the round flow, and, with the `std` feature, a [`Console`]
//! that plays sessions over any line-based reader and writer.
//!
//! # Example
//!
//! ```
//! use rankdraw::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! session.start_round().unwrap();
//! session.replace_cards(&[1]).unwrap();
//! session.place_bet(50).unwrap();
//! let result = session.showdown().unwrap();
//! assert_eq!(result.pot, 100);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod result;
pub mod style;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{
    BetError, DealError, DeckEmpty, InputError, InvalidCard, ReplaceError, ShowdownError,
};
pub use game::{GameState, ReplacementReport, ReplacementStep, Session};
pub use hand::Hand;
pub use options::SessionOptions;
pub use result::{Outcome, RoundResult};
pub use style::{Color, Style};
