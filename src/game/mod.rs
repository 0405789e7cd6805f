//! Session engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::SessionOptions;

mod bet;
mod replace;
mod showdown;
pub mod state;

pub use replace::{ReplacementReport, ReplacementStep};
pub use state::GameState;

/// A single-player session against the dealer.
///
/// The session owns the deck, both hands, the replacement counter, and the
/// pot. A round runs [`start_round`](Self::start_round), any number of
/// [`replace_cards`](Self::replace_cards) calls,
/// [`place_bet`](Self::place_bet), then [`showdown`](Self::showdown).
pub struct Session {
    /// Cards left to deal.
    pub deck: Deck,
    /// Session options.
    pub options: SessionOptions,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Current phase.
    state: GameState,
    /// Replacements used since the counter was last reset.
    replacements_done: usize,
    /// Pot for the current round.
    pot: u64,
    /// Rounds started so far.
    rounds: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use rankdraw::{Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        debug!(seed, "deck shuffled");

        Self {
            deck,
            options,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::Idle,
            replacements_done: 0,
            pot: 0,
            rounds: 0,
            rng,
        }
    }

    /// Starts a round: deals the player's cards, then the dealer's.
    ///
    /// Unless [`SessionOptions::carry_over`] is set, every round after the
    /// first gets a freshly shuffled deck and a reset replacement counter.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the deck runs out. On a
    /// failed deal the cards already dealt stay in the hands and the round is
    /// over.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if matches!(self.state, GameState::Drawing | GameState::Showdown) {
            return Err(DealError::InvalidState);
        }

        if self.rounds > 0 && !self.options.carry_over {
            self.deck = Deck::shuffled(&mut self.rng);
            self.replacements_done = 0;
            debug!("deck and replacement counter reset");
        }

        self.rounds += 1;
        self.player.clear();
        self.dealer.clear();
        self.pot = 0;

        let size = self.options.hand_size;
        let dealt = self
            .deck
            .deal_cards(&mut self.player, size)
            .and_then(|()| self.deck.deal_cards(&mut self.dealer, size));

        if let Err(err) = dealt {
            self.state = GameState::RoundOver;
            warn!(round = self.rounds, "deck ran out while dealing");
            return Err(err.into());
        }

        self.state = GameState::Drawing;
        info!(
            round = self.rounds,
            cards_remaining = self.deck.len(),
            "round started"
        );

        Ok(())
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the player may replace cards right now.
    #[must_use]
    pub const fn can_replace(&self) -> bool {
        matches!(self.state, GameState::Drawing)
            && self.replacements_done < self.options.max_replacements
    }

    /// Returns the number of replacements used.
    #[must_use]
    pub const fn replacements_done(&self) -> usize {
        self.replacements_done
    }

    /// Returns the number of replacements allowed.
    #[must_use]
    pub const fn max_replacements(&self) -> usize {
        self.options.max_replacements
    }

    /// Returns the pot for the current round.
    #[must_use]
    pub const fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
