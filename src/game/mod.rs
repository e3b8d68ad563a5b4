//! Round engine and table state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::probability::{BustProbability, bust_probability};
use crate::result::RoundResult;
use crate::stats::StatsSink;
use crate::strategy::{Advice, Commentary, recommend};

mod actions;
mod dealer;
pub mod state;

pub use state::{Intent, Phase};

/// A single-seat training table that runs one round at a time.
///
/// The table owns the deck, both hands and the round phase. Finished rounds
/// and graded quiz answers are forwarded to the [`StatsSink`] `S`.
///
/// # Example
///
/// ```
/// use bjcoach::{Phase, Table, TableOptions, Tally};
///
/// let mut table = Table::new(TableOptions::default(), 42, Tally::new());
/// let phase = table.start().unwrap();
/// assert!(matches!(phase, Phase::PlayerTurn | Phase::Settled));
/// ```
#[derive(Debug)]
pub struct Table<S = ()> {
    /// Table options.
    options: TableOptions,
    /// Current round phase.
    phase: Phase,
    /// Cards not yet dealt this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Result of the last settled round.
    result: Option<RoundResult>,
    /// Receiver for round and quiz statistics.
    stats: S,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl<S: StatsSink> Table<S> {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64, stats: S) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed), stats)
    }

    /// Creates a new table that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: ChaCha8Rng, stats: S) -> Self {
        Self {
            options,
            phase: Phase::Idle,
            deck: Deck::ordered(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            result: None,
            stats,
            rng,
        }
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the last settled round.
    ///
    /// `None` until a round settles, and again once a new round starts.
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the statistics collaborator.
    pub const fn stats(&self) -> &S {
        &self.stats
    }

    /// Returns the statistics collaborator mutably.
    pub const fn stats_mut(&mut self) -> &mut S {
        &mut self.stats
    }

    /// Consumes the table and returns the statistics collaborator.
    pub fn into_stats(self) -> S {
        self.stats
    }

    /// Returns the odds that the player's next card busts.
    ///
    /// Only the cards still in the deck are counted. The dealer's hole card
    /// has already left the deck, so it never contributes even though the
    /// player cannot see it. Returns `None` outside the player's turn.
    pub fn bust_probability(&self) -> Option<BustProbability> {
        (self.phase == Phase::PlayerTurn)
            .then(|| bust_probability(self.player.cards(), self.deck.cards()))
    }

    /// Returns the hit/stand advice for the current position.
    ///
    /// Returns `None` outside the player's turn.
    pub fn advice(&self) -> Option<Advice> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }
        let up_card = self.dealer.up_card()?;
        Some(recommend(self.player.value(), up_card.rank))
    }

    /// Returns a one-line comment on the player's position.
    ///
    /// Returns `None` outside the player's turn.
    pub fn commentary(&self) -> Option<Commentary> {
        self.bust_probability().map(|probability| Commentary {
            total: self.player.value(),
            probability,
        })
    }

    /// Discards the current round and returns the table to [`Phase::Idle`].
    ///
    /// Nothing is reported to the statistics collaborator for a discarded
    /// round.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.deck = Deck::ordered();
        self.result = None;
        self.phase = Phase::Idle;
    }
}
