//! Parsing and validation of console answers.
//!
//! Each prompt has a pure parser here; the console only loops on them.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::InputError;

/// What the player asked for at the replacement prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplacementRequest {
    /// Keep the hand as it is.
    Decline,
    /// Replace the cards at these 1-based positions, in order.
    Replace(Vec<usize>),
}

/// Parses a wager.
///
/// ```
/// use rankdraw::input::parse_bet;
/// use rankdraw::InputError;
///
/// assert_eq!(parse_bet(" 50 "), Ok(50));
/// assert_eq!(parse_bet("-5"), Err(InputError::NegativeBet));
/// assert_eq!(parse_bet("ten"), Err(InputError::NotANumber));
/// ```
///
/// # Errors
///
/// Returns [`InputError::NegativeBet`] for amounts below zero and
/// [`InputError::NotANumber`] for anything that is not an integer.
pub fn parse_bet(line: &str) -> Result<u64, InputError> {
    let amount: i128 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    if amount < 0 {
        return Err(InputError::NegativeBet);
    }
    u64::try_from(amount).map_err(|_| InputError::NotANumber)
}

/// Parses a line of space-separated 1-based card positions.
///
/// An empty line or a lone `0` declines the replacement.
///
/// ```
/// use rankdraw::input::{ReplacementRequest, parse_replacement_line};
///
/// assert_eq!(parse_replacement_line("0", 2), Ok(ReplacementRequest::Decline));
/// assert_eq!(
///     parse_replacement_line("2 1", 2),
///     Ok(ReplacementRequest::Replace(vec![2, 1]))
/// );
/// assert!(parse_replacement_line("3", 2).is_err());
/// ```
///
/// # Errors
///
/// Returns [`InputError::InvalidCharacters`] if the line holds anything but
/// digits and whitespace, and [`InputError::IndexOutOfRange`] if any position
/// is outside `1..=hand_size`.
pub fn parse_replacement_line(
    line: &str,
    hand_size: usize,
) -> Result<ReplacementRequest, InputError> {
    let line = line.trim();

    if !line
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace())
    {
        return Err(InputError::InvalidCharacters);
    }

    if line.is_empty() || line == "0" {
        return Ok(ReplacementRequest::Decline);
    }

    let out_of_range = InputError::IndexOutOfRange { hand_size };
    let indices = line
        .split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(index) if (1..=hand_size).contains(&index) => Ok(index),
            _ => Err(out_of_range),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReplacementRequest::Replace(indices))
}

/// Returns whether the answer to "play again" is yes.
///
/// Only the first non-blank character counts, and it must be `y`.
#[must_use]
pub fn parse_play_again(line: &str) -> bool {
    line.trim_start().starts_with('y')
}
