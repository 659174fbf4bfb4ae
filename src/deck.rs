//! The replenishing card source.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A source of card permutations.
///
/// The game never reaches for a global random generator; whatever shuffles
/// the deck is handed in explicitly.
pub trait Shuffler {
    /// Reorders `cards` in place.
    fn shuffle_cards(&mut self, cards: &mut [Card]);
}

impl Shuffler for ChaCha8Rng {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(self);
    }
}

impl<S: Shuffler + ?Sized> Shuffler for &mut S {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        (**self).shuffle_cards(cards);
    }
}

/// An ordered sequence of cards drawn from the front.
///
/// A deck is never observed empty by a draw: once the last card is gone the
/// next draw refills it with a fresh, unshuffled 52-card sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck, rank-major and suit-minor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: fresh_cards(),
        }
    }

    /// Creates a deck that yields `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Replaces the contents with the canonical 52-card sequence.
    pub fn reset(&mut self) {
        self.cards = fresh_cards();
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<S: Shuffler + ?Sized>(&mut self, shuffler: &mut S) {
        shuffler.shuffle_cards(self.cards.make_contiguous());
    }

    /// Removes and returns the front card, refilling the deck first if empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a refilled deck always holds DECK_SIZE cards"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            tracing::debug!("deck exhausted, refilling with a fresh sequence");
            self.reset();
        }

        self.cards
            .pop_front()
            .expect("deck was refilled above and cannot be empty")
    }

    /// Draws exactly `count` cards, refilling between draws as needed.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.draw()).collect()
    }

    /// Returns the number of cards left before the next refill.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_cards() -> VecDeque<Card> {
    let mut cards = VecDeque::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push_back(Card::new(rank, suit));
        }
    }

    cards
}
