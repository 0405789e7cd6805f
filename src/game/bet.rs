use tracing::debug;

use crate::error::BetError;

use super::{GameState, Session};

impl Session {
    /// Places the player's wager and ends the drawing phase.
    ///
    /// The dealer matches the wager, so the pot is twice the amount. A wager
    /// of zero is allowed.
    ///
    /// Returns the pot.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the drawing phase or the pot
    /// would overflow.
    pub fn place_bet(&mut self, amount: u64) -> Result<u64, BetError> {
        if self.state != GameState::Drawing {
            return Err(BetError::InvalidState);
        }

        let pot = amount.checked_mul(2).ok_or(BetError::PotOverflow)?;

        self.pot = pot;
        self.state = GameState::Showdown;
        debug!(amount, pot, "bet placed");

        Ok(pot)
    }
}
