//! Round result types for showdown.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player scored higher and takes the pot.
    PlayerWins,
    /// The dealer scored higher.
    DealerWins,
    /// Equal scores; the pot is split.
    Tie,
}

/// Result of a round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's hand value.
    pub player_value: u32,
    /// The dealer's hand value.
    pub dealer_value: u32,
    /// The pot (twice the wager).
    pub pot: u64,
    /// What the player receives: the whole pot, half of it on a tie, or 0.
    pub payout: u64,
}

impl RoundResult {
    /// Scores a round by comparing totals.
    ///
    /// ```
    /// use rankdraw::{Outcome, RoundResult};
    ///
    /// let result = RoundResult::compare(20, 20, 21);
    /// assert_eq!(result.outcome, Outcome::Tie);
    /// assert_eq!(result.payout, 10);
    /// ```
    #[must_use]
    pub const fn compare(player_value: u32, dealer_value: u32, pot: u64) -> Self {
        let (outcome, payout) = if player_value > dealer_value {
            (Outcome::PlayerWins, pot)
        } else if dealer_value > player_value {
            (Outcome::DealerWins, 0)
        } else {
            (Outcome::Tie, pot / 2)
        };

        Self {
            outcome,
            player_value,
            dealer_value,
            pot,
            payout,
        }
    }
}
