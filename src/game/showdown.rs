use tracing::info;

use crate::error::ShowdownError;
use crate::result::RoundResult;

use super::{GameState, Session};

impl Session {
    /// Reveals both hands and settles the round.
    ///
    /// The higher total takes the pot; equal totals split it, with any odd
    /// chip dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed this round.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let result = RoundResult::compare(self.player.value(), self.dealer.value(), self.pot);
        self.state = GameState::RoundOver;

        info!(
            round = self.rounds,
            player = result.player_value,
            dealer = result.dealer_value,
            pot = result.pot,
            outcome = ?result.outcome,
            "round settled"
        );

        Ok(result)
    }
}
