//! Interactive console driver.
//!
//! [`Console`] reads answers from any [`BufRead`] and writes the table to any
//! [`Write`], so a whole session can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{BetError, ConsoleError, InputError, ReplaceError};
use crate::game::Session;
use crate::hand::Hand;
use crate::input::{ReplacementRequest, parse_bet, parse_play_again, parse_replacement_line};
use crate::result::{Outcome, RoundResult};
use crate::style::{Color, Style};

const REPLACE_PROMPT: &str =
    "You may replace card(s). Enter card indices separated by spaces (0 to skip): ";
const BET_PROMPT: &str = "Enter your bet: ";
const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";
const DECK_EMPTY: &str = "The deck is empty, no more cards.";

/// Plays sessions over a line-based text interface.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    /// Consumes the console and returns its output.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player declines to play again.
    ///
    /// Closed input ends the session the same way as declining.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run(&mut self, session: &mut Session) -> Result<(), ConsoleError> {
        match self.play_rounds(session) {
            Err(ConsoleError::InputClosed) => {
                debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn play_rounds(&mut self, session: &mut Session) -> Result<(), ConsoleError> {
        loop {
            self.play_round(session)?;
            if !self.ask_play_again()? {
                return Ok(());
            }
        }
    }

    /// Plays one round: deal, replace, bet, reveal, settle.
    ///
    /// Returns `None` if the round could not be dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or the input is closed.
    pub fn play_round(
        &mut self,
        session: &mut Session,
    ) -> Result<Option<RoundResult>, ConsoleError> {
        if let Err(err) = session.start_round() {
            debug!(%err, "round not dealt");
            self.error_line(DECK_EMPTY)?;
            return Ok(None);
        }

        self.show_hand("Player", &session.player)?;

        if session.can_replace() {
            self.replace_cards(session)?;
        } else {
            writeln!(self.output, "You cannot replace cards.")?;
        }

        loop {
            let amount = self.ask_bet()?;
            match session.place_bet(amount) {
                Ok(_) => break,
                Err(BetError::PotOverflow) => {
                    self.error_line("Bet is too large. Please enter a valid bet amount.")?;
                }
                Err(BetError::InvalidState) => return Ok(None),
            }
        }

        self.show_hand("Dealer", &session.dealer)?;

        let Ok(result) = session.showdown() else {
            return Ok(None);
        };
        self.announce(session, &result)?;

        Ok(Some(result))
    }

    /// Runs the replacement prompt until the player stops or the quota is used.
    fn replace_cards(&mut self, session: &mut Session) -> Result<(), ConsoleError> {
        while session.can_replace() {
            let line = self.prompt(REPLACE_PROMPT)?;

            let positions = match parse_replacement_line(&line, session.player.len()) {
                Ok(ReplacementRequest::Decline) => break,
                Ok(ReplacementRequest::Replace(positions)) => positions,
                Err(InputError::InvalidCharacters) => {
                    debug!(line = line.trim(), "replacement input rejected");
                    self.error_line("Invalid input. Please enter valid card indices.")?;
                    continue;
                }
                Err(_) => {
                    debug!(line = line.trim(), "replacement index rejected");
                    writeln!(self.output, "Invalid card index. Try again.")?;
                    continue;
                }
            };

            let report = match session.replace_cards(&positions) {
                Ok(report) => report,
                Err(ReplaceError::IndexOutOfRange { .. }) => {
                    writeln!(self.output, "Invalid card index. Try again.")?;
                    continue;
                }
                Err(err) => {
                    debug!(%err, "replacement refused");
                    break;
                }
            };

            for step in &report.steps {
                writeln!(self.output, "Your cards after replacement:")?;
                self.show_hand("Player", &step.hand)?;
            }
            if report.deck_exhausted {
                writeln!(self.output, "{DECK_EMPTY}")?;
            }

            writeln!(
                self.output,
                "You have made {} of {} replacement(s).",
                report.replacements_done, report.max_replacements
            )?;
            if report.quota_exhausted() {
                writeln!(self.output, "You have used all replacements.")?;
                break;
            }
        }

        Ok(())
    }

    /// Asks for a wager until a non-negative integer is entered.
    fn ask_bet(&mut self) -> Result<u64, ConsoleError> {
        loop {
            let line = self.prompt(BET_PROMPT)?;
            match parse_bet(&line) {
                Ok(amount) => return Ok(amount),
                Err(InputError::NegativeBet) => self.error_line(
                    "Bet must be a positive number. Please enter a valid bet amount.",
                )?,
                Err(_) => self.error_line("Invalid input. Please enter a valid bet amount.")?,
            }
        }
    }

    /// Asks whether to play another round.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or the input is closed.
    pub fn ask_play_again(&mut self) -> Result<bool, ConsoleError> {
        writeln!(self.output)?;
        let line = self.prompt(PLAY_AGAIN_PROMPT)?;
        Ok(parse_play_again(&line))
    }

    fn announce(&mut self, session: &Session, result: &RoundResult) -> Result<(), ConsoleError> {
        writeln!(
            self.output,
            "Player score: {}",
            session.player.score_line(self.style)
        )?;
        writeln!(
            self.output,
            "Dealer score: {}",
            session.dealer.score_line(self.style)
        )?;

        let line = match result.outcome {
            Outcome::PlayerWins => self
                .style
                .paint(&format!("Player wins! Gains ${}", result.payout), Color::Green),
            Outcome::DealerWins => "Dealer wins!".to_string(),
            Outcome::Tie => format!("It's a tie! Pot is split: ${} each.", result.payout),
        };
        writeln!(self.output, "{line}")?;

        Ok(())
    }

    fn show_hand(&mut self, owner: &str, hand: &Hand) -> Result<(), ConsoleError> {
        writeln!(self.output, "{owner}'s Hand: {}", hand.render(self.style))?;
        Ok(())
    }

    fn error_line(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", self.style.paint(message, Color::Red))?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }
}
