//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

const SOFT_ACE_REDUCTION: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    let mut hard_aces = aces;
    for _ in 0..aces {
        if value > BLACKJACK {
            value -= SOFT_ACE_REDUCTION;
            hard_aces -= 1;
        }
    }

    (value, hard_aces > 0)
}

/// Cards held by the player or the dealer for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Every ace starts at 11. For each ace, the total drops by 10 if it is
    /// still above 21, so aces turn soft one at a time and only as needed.
    #[must_use]
    pub fn total_value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand still counts an ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let (value, has_hard_ace) = evaluate_cards(&self.cards);
        has_hard_ace && value <= BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total_value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
