//! Table configuration options.

/// Default total at which the dealer stops drawing.
pub const DEFAULT_DEALER_STANDS_ON: u8 = 17;

/// Configuration options for a training table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcoach::TableOptions;
///
/// let options = TableOptions::default()
///     .with_dealer_stands_on(17)
///     .with_quiz(false);
/// assert!(!options.quiz);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// The dealer draws while its total is below this value.
    pub dealer_stands_on: u8,
    /// Whether the dealer still plays out its hand after the player busts.
    pub dealer_draws_after_player_bust: bool,
    /// Whether quiz answers are graded.
    pub quiz: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
            dealer_draws_after_player_bust: false,
            quiz: true,
        }
    }
}

impl TableOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer keeps drawing after a player bust.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_draws_after_player_bust(true);
    /// assert!(options.dealer_draws_after_player_bust);
    /// ```
    #[must_use]
    pub const fn with_dealer_draws_after_player_bust(mut self, draws: bool) -> Self {
        self.dealer_draws_after_player_bust = draws;
        self
    }

    /// Sets whether quiz answers are graded.
    #[must_use]
    pub const fn with_quiz(mut self, quiz: bool) -> Self {
        self.quiz = quiz;
        self
    }
}
