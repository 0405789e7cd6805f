use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ReplaceError;
use crate::hand::Hand;

use super::{GameState, Session};

/// One card swapped out of the player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementStep {
    /// The 1-based position that was replaced.
    pub position: usize,
    /// The card that left the hand.
    pub discarded: Card,
    /// The card drawn from the deck.
    pub drawn: Card,
    /// The player's hand right after this replacement.
    pub hand: Hand,
}

/// What happened to a batch of replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementReport {
    /// Replacements applied, in order.
    pub steps: Vec<ReplacementStep>,
    /// Whether the batch stopped because the deck was empty.
    pub deck_exhausted: bool,
    /// Replacements used after this batch.
    pub replacements_done: usize,
    /// Replacements allowed.
    pub max_replacements: usize,
}

impl ReplacementReport {
    /// Returns whether no replacements are left.
    #[must_use]
    pub const fn quota_exhausted(&self) -> bool {
        self.replacements_done >= self.max_replacements
    }
}

impl Session {
    /// Replaces the player's cards at the given 1-based positions, in order.
    ///
    /// Each replacement draws one card from the deck and counts against the
    /// session quota. The batch stops early when the deck empties or the
    /// quota runs out; replacements made before that stay in effect.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the hand, the deck, or the counter,
    /// if the round is not in the drawing phase, the quota is already used
    /// up, no positions were given, or any position is outside the hand.
    pub fn replace_cards(
        &mut self,
        positions: &[usize],
    ) -> Result<ReplacementReport, ReplaceError> {
        if self.state != GameState::Drawing {
            return Err(ReplaceError::InvalidState);
        }

        if self.replacements_done >= self.options.max_replacements {
            return Err(ReplaceError::QuotaExhausted);
        }

        if positions.is_empty() {
            return Err(ReplaceError::NoIndices);
        }

        let hand_size = self.player.len();
        if let Some(&index) = positions
            .iter()
            .find(|&&index| !(1..=hand_size).contains(&index))
        {
            return Err(ReplaceError::IndexOutOfRange { index, hand_size });
        }

        let mut steps = Vec::with_capacity(positions.len());
        let mut deck_exhausted = false;

        for &position in positions {
            let Ok(drawn) = self.deck.deal_one() else {
                deck_exhausted = true;
                warn!(position, "deck empty, replacement skipped");
                break;
            };

            if let Some(discarded) = self.player.replace(position - 1, drawn) {
                self.replacements_done += 1;
                debug!(position, %discarded, %drawn, "card replaced");
                steps.push(ReplacementStep {
                    position,
                    discarded,
                    drawn,
                    hand: self.player.clone(),
                });
            }

            if self.replacements_done >= self.options.max_replacements {
                break;
            }
        }

        Ok(ReplacementReport {
            steps,
            deck_exhausted,
            replacements_done: self.replacements_done,
            max_replacements: self.options.max_replacements,
        })
    }
}
