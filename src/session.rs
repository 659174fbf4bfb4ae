//! Glue between the game, the console and the dealer timer.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::console::{Console, Key};
use crate::deck::Shuffler;
use crate::game::{Effect, Event, Game};
use crate::timer::{Clock, DealerTimer, SystemClock};

/// Whether the driver should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep delivering events.
    Continue,
    /// Tear everything down and exit.
    Exit,
}

/// A running game together with its input line and dealer timer.
///
/// The session is what a terminal driver talks to: it feeds key presses and
/// timer wake-ups in, renders the screen, and stops when told to exit.
pub struct Session<S = ChaCha8Rng, C = SystemClock> {
    game: Game<S>,
    console: Console,
    timer: DealerTimer<C>,
}

impl<S: Shuffler, C: Clock> Session<S, C> {
    /// Wraps `game`, timing dealer steps with `clock`.
    pub const fn new(game: Game<S>, clock: C) -> Self {
        Self {
            game,
            console: Console::new(),
            timer: DealerTimer::new(clock),
        }
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: Key) -> Flow {
        let phase = self.game.phase();
        match self.console.translate(key, &phase) {
            Some(event) => self.dispatch(event),
            None => Flow::Continue,
        }
    }

    /// Delivers the dealer tick if it is due.
    pub fn on_timer(&mut self) -> Flow {
        if self.timer.fire() {
            self.dispatch(Event::DealerTick)
        } else {
            Flow::Continue
        }
    }

    /// Returns how long the driver may wait before calling [`Self::on_timer`].
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Renders the current screen.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.game.render(self.console.input())
    }

    /// Returns the game.
    pub const fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Returns the console.
    pub const fn console(&self) -> &Console {
        &self.console
    }

    fn dispatch(&mut self, event: Event) -> Flow {
        match self.game.handle(event) {
            Some(Effect::ScheduleDealerTick(delay)) => {
                debug!(?delay, "scheduling dealer tick");
                self.timer.schedule(delay);
                Flow::Continue
            }
            Some(Effect::Quit) => {
                self.timer.cancel();
                Flow::Exit
            }
            None => Flow::Continue,
        }
    }
}
