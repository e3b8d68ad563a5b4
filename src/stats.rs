//! Statistics collaborator.

use crate::result::Outcome;

/// Receives finished rounds and graded quiz answers.
///
/// The table calls [`StatsSink::record`] exactly once per settled round and
/// [`StatsSink::record_quiz`] once per graded answer. Where the numbers end up
/// is the implementor's business.
pub trait StatsSink {
    /// Records a settled round.
    fn record(&mut self, outcome: Outcome);

    /// Records whether a quiz answer matched the advice.
    fn record_quiz(&mut self, correct: bool);
}

impl StatsSink for () {
    fn record(&mut self, _outcome: Outcome) {}

    fn record_quiz(&mut self, _correct: bool) {}
}

impl<T: StatsSink + ?Sized> StatsSink for &mut T {
    fn record(&mut self, outcome: Outcome) {
        (**self).record(outcome);
    }

    fn record_quiz(&mut self, correct: bool) {
        (**self).record_quiz(correct);
    }
}

/// Running totals kept in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds settled.
    pub rounds: u32,
    /// Rounds won by the player (including dealer busts).
    pub wins: u32,
    /// Rounds lost by the player (including player busts).
    pub losses: u32,
    /// Rounds tied.
    pub pushes: u32,
    /// Rounds lost to a player bust.
    pub busts: u32,
    /// Quiz answers graded.
    pub quiz_answered: u32,
    /// Quiz answers that matched the advice.
    pub quiz_correct: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            busts: 0,
            quiz_answered: 0,
            quiz_correct: 0,
        }
    }

    /// Returns the fraction of rounds won, or `None` before the first round.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        ratio(self.wins, self.rounds)
    }

    /// Returns the fraction of correct quiz answers, or `None` before the first
    /// answer.
    #[must_use]
    pub fn quiz_accuracy(&self) -> Option<f64> {
        ratio(self.quiz_correct, self.quiz_answered)
    }
}

fn ratio(part: u32, whole: u32) -> Option<f64> {
    (whole > 0).then(|| f64::from(part) / f64::from(whole))
}

impl StatsSink for Tally {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerBust => {
                self.losses += 1;
                self.busts += 1;
            }
            Outcome::PlayerLose => self.losses += 1,
            Outcome::DealerBust | Outcome::PlayerWin => self.wins += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    fn record_quiz(&mut self, correct: bool) {
        self.quiz_answered += 1;
        if correct {
            self.quiz_correct += 1;
        }
    }
}
