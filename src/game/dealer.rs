use tracing::{debug, info};

use crate::error::ActionError;
use crate::result::{RoundResult, outcome_of};
use crate::stats::StatsSink;

use super::{Phase, Table};

impl<S: StatsSink> Table<S> {
    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer reveals the hole card and draws while below
    /// `dealer_stands_on`. Soft and hard totals are treated alike. After a
    /// player bust the dealer only reveals, unless
    /// `dealer_draws_after_player_bust` is set.
    pub(super) fn dealer_play(&mut self) -> Result<RoundResult, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer.reveal_hole();
        debug!(dealer = self.dealer.value(), "Dealer reveals hole card");

        let mut drawn = 0;
        if !self.player.is_bust() || self.options.dealer_draws_after_player_bust {
            while self.dealer.value() < self.options.dealer_stands_on {
                let card = self.deck.draw()?;
                self.dealer.add_card(card);
                drawn += 1;
                debug!(%card, dealer = self.dealer.value(), "Dealer draws");
            }
        }

        Ok(self.settle(drawn, false))
    }

    /// Compares final totals, reports the outcome and closes the round.
    pub(super) fn settle(&mut self, dealer_drawn: usize, natural: bool) -> RoundResult {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = outcome_of(player_value, dealer_value);

        let result = RoundResult {
            outcome,
            player_value,
            dealer_value,
            dealer_drawn,
            natural,
        };

        self.result = Some(result);
        self.phase = Phase::Settled;
        self.stats.record(outcome);

        info!(
            ?outcome,
            player = player_value,
            dealer = dealer_value,
            natural,
            "Round settled"
        );

        result
    }
}
