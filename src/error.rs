//! Error types for table operations.
//!
//! Every rejected intent leaves the round exactly as it was, so a host that
//! treats out-of-order input as a no-op can simply drop the error.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The supplied deck cannot cover the initial deal.
    #[error("not enough cards for the initial deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out mid-action.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when answering a quiz prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Quiz answers are only graded during the player's turn.
    #[error("quiz answers are only accepted during the player's turn")]
    InvalidState,
    /// The quiz is turned off at this table.
    #[error("the quiz is disabled at this table")]
    Disabled,
}
