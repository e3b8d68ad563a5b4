use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, QuizError, StartError};
use crate::result::RoundResult;
use crate::stats::StatsSink;
use crate::strategy::Recommendation;

use super::{Intent, Phase, Table};

/// Cards needed for the initial deal.
const INITIAL_DEAL: usize = 4;

impl<S: StatsSink> Table<S> {
    fn ensure_accepts(&self, intent: Intent) -> bool {
        let accepted = self.phase.accepts(intent);
        if !accepted {
            debug!(?intent, phase = ?self.phase, "Rejected out-of-order intent");
        }
        accepted
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Deals two cards to the player, then two to the dealer with the first
    /// dealer card face down. If either side holds 21 after the deal the
    /// round settles at once.
    ///
    /// Returns the phase the round is in after dealing.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidState`] while a round is in progress.
    pub fn start(&mut self) -> Result<Phase, StartError> {
        if !self.ensure_accepts(Intent::Start) {
            return Err(StartError::InvalidState);
        }

        let deck = Deck::build(&mut self.rng);
        self.deal(deck)
    }

    /// Starts a new round dealing from `deck` instead of a fresh shuffle.
    ///
    /// Cards come off the deck in [`Deck::draw`] order.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidState`] while a round is in progress, or
    /// [`StartError::NotEnoughCards`] if `deck` holds fewer than four cards.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<Phase, StartError> {
        if !self.ensure_accepts(Intent::Start) {
            return Err(StartError::InvalidState);
        }

        self.deal(deck)
    }

    fn deal(&mut self, deck: Deck) -> Result<Phase, StartError> {
        if deck.len() < INITIAL_DEAL {
            return Err(StartError::NotEnoughCards);
        }

        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.phase = Phase::Dealing;

        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| StartError::NotEnoughCards)?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| StartError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        debug!(
            player = player_value,
            up_card = self.dealer.visible_value(),
            remaining = self.deck.len(),
            "Dealt new round"
        );

        if player_value == 21 || dealer_value == 21 {
            debug!(player = player_value, dealer = dealer_value, "Natural 21 on the deal");
            self.dealer.reveal_hole();
            self.settle(0, true);
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(self.phase)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn, runs the dealer's turn and settles the
    /// round before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn, or
    /// [`ActionError::Deck`] if the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if !self.ensure_accepts(Intent::Hit) {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        debug!(%card, player = value, "Player hit");

        if value > 21 {
            debug!(player = value, "Player busts");
            self.phase = Phase::DealerTurn;
            self.dealer_play()?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Runs the dealer's turn and settles the round before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn, or
    /// [`ActionError::Deck`] if the deck runs out while the dealer draws.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        if !self.ensure_accepts(Intent::Stand) {
            return Err(ActionError::InvalidState);
        }

        debug!(player = self.player.value(), "Player stands");
        self.phase = Phase::DealerTurn;
        self.dealer_play()
    }

    /// Grades a draw/stop answer against the current advice.
    ///
    /// The answer does not move the round forward; it is only reported to the
    /// statistics collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Disabled`] if the quiz is turned off, or
    /// [`QuizError::InvalidState`] outside the player's turn.
    pub fn submit_quiz_answer(&mut self, choice: Recommendation) -> Result<bool, QuizError> {
        if !self.options.quiz {
            return Err(QuizError::Disabled);
        }
        if !self.ensure_accepts(Intent::QuizAnswer) {
            return Err(QuizError::InvalidState);
        }

        let advice = self.advice().ok_or(QuizError::InvalidState)?;
        let correct = advice.recommendation == choice;
        debug!(?choice, expected = ?advice.recommendation, correct, "Quiz answer graded");
        self.stats.record_quiz(correct);

        Ok(correct)
    }
}
