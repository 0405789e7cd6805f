//! Session configuration options.

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rankdraw::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_max_replacements(5)
///     .with_carry_over(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Total card replacements allowed before the counter is reset.
    pub max_replacements: usize,
    /// Cards dealt to the player and to the dealer each round.
    pub hand_size: usize,
    /// Whether the deck and the replacement counter carry over between
    /// rounds instead of being reset.
    pub carry_over: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_replacements: 3,
            hand_size: 2,
            carry_over: false,
        }
    }
}

impl SessionOptions {
    /// Sets the number of replacements allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use rankdraw::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_max_replacements(1);
    /// assert_eq!(options.max_replacements, 1);
    /// ```
    #[must_use]
    pub const fn with_max_replacements(mut self, max: usize) -> Self {
        self.max_replacements = max;
        self
    }

    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use rankdraw::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Sets whether the deck and replacement counter carry over between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use rankdraw::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_carry_over(true);
    /// assert!(options.carry_over);
    /// ```
    #[must_use]
    pub const fn with_carry_over(mut self, carry_over: bool) -> Self {
        self.carry_over = carry_over;
        self
    }
}
