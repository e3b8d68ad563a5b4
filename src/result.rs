//! Round outcome types.

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    PlayerWin,
    /// Dealer finished closer to 21.
    PlayerLose,
    /// Equal totals.
    Push,
}

/// Tactile/visual feedback class for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The player came out ahead.
    Success,
    /// A loss on totals or a push.
    Warning,
    /// The player busted.
    Error,
}

/// Settles two final totals.
///
/// A player bust is checked first, so it loses even when the dealer also
/// busts.
#[must_use]
pub const fn outcome_of(player_total: u8, dealer_total: u8) -> Outcome {
    if player_total > 21 {
        Outcome::PlayerBust
    } else if dealer_total > 21 {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerWin
    } else if player_total < dealer_total {
        Outcome::PlayerLose
    } else {
        Outcome::Push
    }
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }

    /// Returns whether the player lost the round.
    #[must_use]
    pub const fn is_player_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::PlayerLose)
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust. You lose.",
            Self::DealerBust => "The dealer busts. You win!",
            Self::PlayerWin => "You win!",
            Self::PlayerLose => "You lose.",
            Self::Push => "Push.",
        }
    }

    /// Returns the feedback class for this outcome.
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        match self {
            Self::PlayerBust => Feedback::Error,
            Self::DealerBust | Self::PlayerWin => Feedback::Success,
            Self::PlayerLose | Self::Push => Feedback::Warning,
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_drawn: usize,
    /// Whether the round ended on the initial deal.
    pub natural: bool,
}
