use alloc::format;

use tracing::{debug, info};

use crate::deck::Shuffler;
use crate::hand::Hand;
use crate::messages::MessageLog;
use crate::result::RoundResult;

use super::{Choice, Effect, Game, Phase};

/// Cards dealt to each side at the start of their turn.
const INITIAL_CARDS: usize = 2;

pub(super) const RULE: &str = "==================";
const HAND_RULE: &str = "----------------";

/// Writes a labelled hand section: header, one line per card, total.
///
/// Entries starting with a newline are shown after a blank row but still
/// count as one log entry.
pub(super) fn write_hand(messages: &mut MessageLog, label: &str, hand: &Hand) {
    messages.push(format!("\n{label}:"));
    messages.push(HAND_RULE);
    for card in hand.cards() {
        messages.push(format!("  {card}"));
    }
    messages.push(format!("Total value: {}", hand.total_value()));
}

impl<S: Shuffler> Game<S> {
    /// Clears both hands and reshuffles whatever is left in the deck.
    fn reset_round(&mut self) {
        self.messages.clear();
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.deck.shuffle(&mut self.shuffler);
    }

    /// Starts a round by dealing the opening cards to the player.
    pub(super) fn start_round(&mut self) {
        self.reset_round();

        for card in self.deck.draw_many(INITIAL_CARDS) {
            self.player.add_card(card);
        }
        info!(
            player_total = self.player.total_value(),
            cards_remaining = self.deck.len(),
            "round started"
        );

        self.show_table();
        self.check_player_hand();
    }

    /// Player action: take one more card.
    pub(super) fn hit(&mut self) {
        let card = self.deck.draw();
        self.player.add_card(card);
        debug!(%card, player_total = self.player.total_value(), "player drew");

        self.show_table();
        self.check_player_hand();
    }

    /// Player action: stand and hand the turn to the dealer.
    ///
    /// The dealer's opening cards are dealt here if they have not been yet.
    /// The dealer then acts on the scheduled ticks.
    pub(super) fn stand(&mut self) -> Effect {
        if self.dealer.is_empty() {
            for card in self.deck.draw_many(INITIAL_CARDS) {
                self.dealer.add_card(card);
            }
        }
        debug!(
            player_total = self.player.total_value(),
            dealer_total = self.dealer.total_value(),
            "player stands"
        );

        self.show_table();
        self.phase = Phase::DealerResolving;
        Effect::ScheduleDealerTick(self.options.dealer_delay)
    }

    /// Ends the round on a bust, otherwise offers the draw-or-stand menu.
    fn check_player_hand(&mut self) {
        if self.player.is_bust() {
            let result =
                RoundResult::player_bust(self.player.total_value(), self.dealer.total_value());
            self.messages.push("\nFinal Result:");
            self.messages.push(RULE);
            self.messages.push(format!("{result}"));
            info!(outcome = ?result.outcome, player_total = result.player_total, "round complete");
            self.phase = Phase::RoundComplete(result);
        } else {
            self.phase = Phase::AwaitingDrawChoice {
                selected: Choice::Draw,
            };
        }
    }

    /// Replaces the message log with a snapshot of both hands.
    pub(super) fn show_table(&mut self) {
        self.messages.clear();
        self.messages.push("\nCurrent Game State:");
        self.messages.push(RULE);
        write_hand(&mut self.messages, "Your Hand", &self.player);
        if !self.dealer.is_empty() {
            write_hand(&mut self.messages, "Dealer's Hand", &self.dealer);
        }
        self.messages.push(format!("\n{RULE}"));
    }
}
