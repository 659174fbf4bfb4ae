use alloc::format;

use tracing::{debug, info};

use crate::deck::Shuffler;
use crate::result::RoundResult;

use super::actions::{RULE, write_hand};
use super::{Effect, Game, Phase};

/// The dealer draws while below this total and stands from it on.
pub const DEALER_STANDS_AT: u8 = 17;

impl<S: Shuffler> Game<S> {
    /// Performs one dealer step.
    ///
    /// Below [`DEALER_STANDS_AT`] the dealer draws a single card and asks to
    /// be woken up again. Otherwise the round is settled.
    pub(super) fn dealer_step(&mut self) -> Option<Effect> {
        let total = self.dealer.total_value();
        if total < DEALER_STANDS_AT {
            self.messages
                .push(format!("\nDealer must draw (below {DEALER_STANDS_AT})..."));
            let card = self.deck.draw();
            self.dealer.add_card(card);
            let new_total = self.dealer.total_value();
            self.messages.push(format!("Dealer drew: {card}"));
            self.messages.push(format!("Dealer's new total: {new_total}"));
            debug!(%card, dealer_total = new_total, "dealer drew");
            return Some(Effect::ScheduleDealerTick(self.options.dealer_delay));
        }

        self.show_final_state();
        let result = RoundResult::showdown(self.player.total_value(), total);
        self.messages.push(format!("{result}"));
        info!(
            outcome = ?result.outcome,
            player_total = result.player_total,
            dealer_total = result.dealer_total,
            "round complete"
        );
        self.phase = Phase::RoundComplete(result);
        None
    }

    fn show_final_state(&mut self) {
        self.messages.push("\nFinal Game State:");
        self.messages.push(RULE);
        write_hand(&mut self.messages, "Your Hand", &self.player);
        write_hand(&mut self.messages, "Dealer's Final Hand", &self.dealer);
        self.messages.push("\nFinal Result:");
        self.messages.push(RULE);
    }
}
