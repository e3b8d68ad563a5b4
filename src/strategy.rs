//! A simplified hit/stand advisor for training.
//!
//! This is a teaching heuristic, not full basic strategy: it looks only at the
//! player's total and the dealer's up-card.

use core::fmt;

use crate::card::rank_value;
use crate::probability::BustProbability;

/// Lowest dealer up-card value considered strong.
const STRONG_UP_CARD: u8 = 7;

/// Binary decision offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Take another card.
    Draw,
    /// Keep the current total.
    Stop,
}

/// Which advice branch produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rationale {
    /// Total of 11 or less; the next card cannot bust the hand.
    CannotBust,
    /// Total of 17 or more; the bust risk outweighs any gain.
    HighBustRisk,
    /// Total 12..=16 against a dealer up-card of 7 or better.
    StrongDealer,
    /// Total 12..=16 against a dealer up-card of 2 through 6.
    WeakDealer,
}

impl Rationale {
    /// Returns the explanation shown next to the recommendation.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::CannotBust => "Take a card: you cannot bust.",
            Self::HighBustRisk => "Usually better to stop: the bust risk is high.",
            Self::StrongDealer => {
                "The dealer shows a strong card (7+). Taking a card is often right."
            }
            Self::WeakDealer => {
                "The dealer shows a weak card (2-6). Stopping is often right."
            }
        }
    }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A recommendation together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Advice {
    /// The suggested decision.
    pub recommendation: Recommendation,
    /// Why the decision was suggested.
    pub rationale: Rationale,
}

/// Recommends drawing or stopping for `player_total` against the dealer's
/// up-card `dealer_up_rank` (1 = Ace ... 13 = King).
///
/// The up-card is valued like a card in a hand, so an Ace counts as 11.
///
/// # Example
///
/// ```
/// use bjcoach::{Recommendation, recommend};
///
/// assert_eq!(recommend(13, 9).recommendation, Recommendation::Draw);
/// assert_eq!(recommend(13, 4).recommendation, Recommendation::Stop);
/// ```
#[must_use]
pub fn recommend(player_total: u8, dealer_up_rank: u8) -> Advice {
    let dealer_up = rank_value(dealer_up_rank);

    let (recommendation, rationale) = match player_total {
        0..=11 => (Recommendation::Draw, Rationale::CannotBust),
        17..=u8::MAX => (Recommendation::Stop, Rationale::HighBustRisk),
        _ if dealer_up >= STRONG_UP_CARD => (Recommendation::Draw, Rationale::StrongDealer),
        _ => (Recommendation::Stop, Rationale::WeakDealer),
    };

    Advice {
        recommendation,
        rationale,
    }
}

/// A one-line comment on the player's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commentary {
    /// The player's current total.
    pub total: u8,
    /// Bust odds for the next card.
    pub probability: BustProbability,
}

impl fmt::Display for Commentary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (12..=16).contains(&self.total) {
            write!(
                f,
                "At {} the decision depends on the dealer's card and the bust risk ({}).",
                self.total, self.probability
            )
        } else {
            write!(
                f,
                "Your total is {}. Weigh the bust probability against the expected gain.",
                self.total
            )
        }
    }
}
