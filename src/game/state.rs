//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been dealt yet.
    Idle,
    /// Cards are dealt; the player may replace cards and then bet.
    Drawing,
    /// The bet is placed; hands are ready to be compared.
    Showdown,
    /// The round has been scored or its deal failed.
    RoundOver,
}
