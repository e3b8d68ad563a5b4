//! A single-table blackjack trainer engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs one round at a time: it
//! shuffles a fresh deck, deals, takes hit/stand decisions, plays the dealer
//! out and settles. While the player is deciding, the table reports the exact
//! bust odds of the next card and a simple draw/stop hint, and can grade the
//! player's own answer as a quiz.
//!
//! # Example
//!
//! ```
//! use bjcoach::{Phase, Table, TableOptions, Tally};
//!
//! let mut table = Table::new(TableOptions::default(), 42, Tally::new());
//! if table.start() == Ok(Phase::PlayerTurn) {
//!     let odds = table.bust_probability().unwrap();
//!     assert!(odds.as_f64() <= 1.0);
//!     table.stand().unwrap();
//! }
//! assert_eq!(table.stats().rounds, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod probability;
pub mod result;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, QuizError, StartError};
pub use game::{Intent, Phase, Table};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::TableOptions;
pub use probability::{BustProbability, bust_probability};
pub use result::{Feedback, Outcome, RoundResult, outcome_of};
pub use stats::{StatsSink, Tally};
pub use strategy::{Advice, Commentary, Rationale, Recommendation, recommend};
