//! Exact bust odds over the cards left in the deck.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::hand_value;

/// The exact chance that the next card busts a hand, kept as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BustProbability {
    /// Remaining cards that would push the hand over 21.
    pub busting: usize,
    /// Cards remaining in the deck.
    pub remaining: usize,
}

impl BustProbability {
    /// Returns the probability as a float in `[0, 1]`.
    ///
    /// An empty deck yields 0.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "card counts are far below f64 precision limits"
    )]
    pub fn as_f64(&self) -> f64 {
        if self.remaining == 0 {
            0.0
        } else {
            self.busting as f64 / self.remaining as f64
        }
    }

    /// Returns the probability as a whole percent, rounded to nearest.
    #[must_use]
    pub fn percent(&self) -> u8 {
        round(self.as_f64() * 100.0) as u8
    }

    /// Returns whether no remaining card can bust the hand.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.busting == 0
    }

    /// Returns whether every remaining card busts the hand.
    #[must_use]
    pub const fn is_certain(&self) -> bool {
        self.remaining > 0 && self.busting == self.remaining
    }
}

impl fmt::Display for BustProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Counts how many cards in `remaining` would bust `hand` if drawn next.
///
/// Every remaining card is tried once, so the result reflects exactly the
/// cards that have already left the deck.
///
/// # Example
///
/// ```
/// use bjcoach::{Card, Suit, bust_probability};
///
/// let hand = [Card::new(Suit::Spades, 10), Card::new(Suit::Hearts, 9)];
/// let remaining = [
///     Card::new(Suit::Clubs, 1),
///     Card::new(Suit::Clubs, 2),
///     Card::new(Suit::Clubs, 3),
///     Card::new(Suit::Clubs, 13),
/// ];
/// let odds = bust_probability(&hand, &remaining);
/// assert_eq!((odds.busting, odds.remaining), (2, 4));
/// assert_eq!(odds.to_string(), "50%");
/// ```
#[must_use]
pub fn bust_probability(hand: &[Card], remaining: &[Card]) -> BustProbability {
    let mut candidate: Vec<Card> = hand.to_vec();
    let mut busting = 0;

    for card in remaining {
        candidate.push(*card);
        if hand_value(&candidate) > 21 {
            busting += 1;
        }
        candidate.pop();
    }

    BustProbability {
        busting,
        remaining: remaining.len(),
    }
}
