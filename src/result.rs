//! Round outcomes and winner determination.

use core::fmt;

use crate::hand::BLACKJACK;

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player wins.
    Player,
    /// The dealer wins.
    Dealer,
    /// Neither side wins.
    Tie,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21 before the dealer played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished on exactly 21.
    DealerBlackjack,
    /// Dealer finished above the player.
    DealerHigher,
    /// Player finished above the dealer.
    PlayerHigher,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Returns the side that won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::DealerBust | Self::PlayerHigher => Winner::Player,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerHigher => Winner::Dealer,
            Self::Push => Winner::Tie,
        }
    }
}

/// Decides a round in which the player stood without busting.
///
/// The dealer total is checked first: a dealer bust always loses and a
/// dealer 21 always wins, even against a player 21.
#[must_use]
pub const fn determine_winner(player_total: u8, dealer_total: u8) -> Outcome {
    if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if dealer_total == BLACKJACK {
        Outcome::DealerBlackjack
    } else if dealer_total > player_total {
        Outcome::DealerHigher
    } else if dealer_total < player_total {
        Outcome::PlayerHigher
    } else {
        Outcome::Push
    }
}

/// Final totals of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total (0 if the dealer never played).
    pub dealer_total: u8,
}

impl RoundResult {
    /// Result of a round the player lost by busting.
    #[must_use]
    pub const fn player_bust(player_total: u8, dealer_total: u8) -> Self {
        Self {
            outcome: Outcome::PlayerBust,
            player_total,
            dealer_total,
        }
    }

    /// Result of a round played out by the dealer.
    #[must_use]
    pub const fn showdown(player_total: u8, dealer_total: u8) -> Self {
        Self {
            outcome: determine_winner(player_total, dealer_total),
            player_total,
            dealer_total,
        }
    }

    /// Returns the side that won.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.outcome.winner()
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (player, dealer) = (self.player_total, self.dealer_total);
        match self.outcome {
            Outcome::PlayerBust => f.write_str("Bust! You lose!"),
            Outcome::DealerBust => write!(f, "Dealer busts with {dealer}! You win!"),
            Outcome::DealerBlackjack => f.write_str("Dealer has Blackjack! Dealer wins!"),
            Outcome::DealerHigher => write!(f, "Dealer wins with {dealer} vs your {player}!"),
            Outcome::PlayerHigher => write!(f, "You win with {player} vs dealer's {dealer}!"),
            Outcome::Push => write!(f, "It's a tie at {player}!"),
        }
    }
}
