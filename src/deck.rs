//! The 52-card deck used for a single round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::DeckError;

/// A deck of cards. Draws come off the end of the underlying vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Returns all 52 cards in suit-major, rank-minor order, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a full deck and shuffles it.
    ///
    /// The shuffle is a Fisher-Yates pass from the last index down to the
    /// second, swapping each position with a uniform index in `[0, i]`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::build(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Useful for replaying a known round. Nothing stops the caller from
    /// passing duplicate cards or fewer than 52.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Returns the remaining cards. The last element is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}
