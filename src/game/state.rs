//! Round lifecycle types.

/// Lifecycle phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round has been dealt yet.
    #[default]
    Idle,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer reveals and plays out its hand.
    DealerTurn,
    /// Round has been settled; a new round may start.
    Settled,
}

/// An input coming from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Start a new round.
    Start,
    /// Draw a card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Answer the draw/stop quiz.
    QuizAnswer,
}

impl Phase {
    /// Returns whether `intent` is allowed in this phase.
    #[must_use]
    pub const fn accepts(self, intent: Intent) -> bool {
        match intent {
            Intent::Start => matches!(self, Self::Idle | Self::Settled),
            Intent::Hit | Intent::Stand | Intent::QuizAnswer => matches!(self, Self::PlayerTurn),
        }
    }

    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
