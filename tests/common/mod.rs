//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::time::{Duration, Instant};

use bjcli::{Card, Clock, Game, GameOptions, Rank, Shuffler, Suit};

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Moves the listed cards to the front of the deck, in order.
///
/// This is still a permutation of whatever the deck holds, so the game sees
/// an ordinary shuffle.
pub struct Stacked(pub Vec<Card>);

impl Shuffler for Stacked {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        for (slot, wanted) in self.0.iter().enumerate() {
            if let Some(offset) = cards[slot..].iter().position(|c| c == wanted) {
                cards.swap(slot, slot + offset);
            }
        }
    }
}

pub fn stacked_game(draws: &[Card]) -> Game<Stacked> {
    Game::with_shuffler(GameOptions::default(), Stacked(draws.to_vec())).unwrap()
}

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
