//! A terminal blackjack game against a house-rules dealer.
//!
//! The crate provides a [`Game`] type that runs the round state machine:
//! dealing, the player's draw-or-stand choice, the dealer's timed draws to 17,
//! and the final comparison. The game never blocks; it hands timed work back
//! to its driver as an [`Effect`].
//!
//! With the `std` feature, [`Session`] ties a game to a [`Console`] input
//! line and a [`DealerTimer`], which is everything a terminal front end needs.
//!
//! # Example
//!
//! ```
//! use bjcli::{Event, Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//! game.handle(Event::Submit("draw".into()));
//! assert_eq!(game.player_hand().len(), 2);
//! assert!(!matches!(game.phase(), Phase::Normal));
//! # Ok::<(), bjcli::OptionsError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod messages;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod timer;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, Key};
pub use deck::{Deck, Shuffler};
pub use error::{CommandError, OptionsError};
pub use game::{Choice, Command, DEALER_STANDS_AT, Effect, Event, Game, PROMPT, Phase, TITLE};
pub use hand::{BLACKJACK, Hand};
pub use messages::MessageLog;
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, Winner, determine_winner};
#[cfg(feature = "std")]
pub use session::{Flow, Session};
#[cfg(feature = "std")]
pub use timer::{Clock, DealerTimer, SystemClock};
