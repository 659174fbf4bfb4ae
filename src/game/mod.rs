//! Game controller and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::deck::{Deck, Shuffler};
use crate::error::OptionsError;
use crate::hand::Hand;
use crate::messages::MessageLog;
use crate::options::GameOptions;

mod actions;
mod command;
mod dealer;
pub mod state;
mod view;

pub use command::Command;
pub use dealer::DEALER_STANDS_AT;
pub use state::{Choice, Effect, Event, Phase};
pub use view::{PROMPT, TITLE};

/// A single-player blackjack game against a house-rules dealer.
///
/// The game exclusively owns the deck, both hands and the message log. Every
/// input goes through [`Game::handle`], which mutates the round and returns
/// the work the driver still has to do, such as waking the dealer up later.
/// Nothing here blocks or sleeps.
pub struct Game<S = ChaCha8Rng> {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand for the current round.
    player: Hand,
    /// The dealer's hand for the current round.
    dealer: Hand,
    /// Current round phase.
    phase: Phase,
    /// Status lines shown to the player.
    messages: MessageLog,
    /// Game options.
    options: GameOptions,
    /// Reorders the deck at the start of each round.
    shuffler: S,
}

impl Game {
    /// Creates a new game whose shuffles are driven by a seeded generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42)?;
    /// assert_eq!(game.phase(), Phase::Normal);
    /// # Ok::<(), bjcli::OptionsError>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        debug!(seed, "seeding shuffler");
        Self::with_shuffler(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: Shuffler> Game<S> {
    /// Creates a new game that shuffles with `shuffler`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn with_shuffler(options: GameOptions, shuffler: S) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Normal,
            messages: MessageLog::new(options.message_capacity),
            options,
            shuffler,
        })
    }

    /// Applies one event and returns the effect the driver must carry out.
    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        match (self.phase, event) {
            (Phase::Closed, event) => {
                debug!(?event, "ignoring event after quit");
                None
            }
            (_, Event::Interrupt) => Some(self.quit()),
            (Phase::AwaitingDrawChoice { selected }, Event::SelectPrevious) => {
                self.phase = Phase::AwaitingDrawChoice {
                    selected: selected.previous(),
                };
                None
            }
            (Phase::AwaitingDrawChoice { selected }, Event::SelectNext) => {
                self.phase = Phase::AwaitingDrawChoice {
                    selected: selected.next(),
                };
                None
            }
            (Phase::AwaitingDrawChoice { selected }, Event::Confirm) => match selected {
                Choice::Draw => {
                    self.hit();
                    None
                }
                Choice::Show => Some(self.stand()),
            },
            (Phase::DealerResolving, Event::DealerTick) => self.dealer_step(),
            (phase, Event::Submit(text)) if phase.accepts_commands() => self.run_command(&text),
            (phase, event) => {
                debug!(?phase, ?event, "event has no effect in this phase");
                None
            }
        }
    }

    fn run_command(&mut self, text: &str) -> Option<Effect> {
        match text.parse::<Command>() {
            Ok(Command::Quit) => Some(self.quit()),
            Ok(Command::Draw) if self.phase == Phase::DealerResolving => {
                self.messages.push("The dealer is still playing!");
                None
            }
            Ok(Command::Draw) => {
                self.start_round();
                None
            }
            Err(err) => {
                debug!(%err, "rejecting command");
                self.messages.push("Unknown command!");
                None
            }
        }
    }

    fn quit(&mut self) -> Effect {
        info!("player quit");
        self.phase = Phase::Closed;
        Effect::Quit
    }
}

impl<S> Game<S> {
    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the status lines shown to the player.
    pub const fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of cards left before the deck refills.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
