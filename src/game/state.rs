//! Game state, events and effects.

use alloc::string::String;
use core::time::Duration;

use crate::result::RoundResult;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a typed command.
    Normal,
    /// The player picks between drawing another card and standing.
    AwaitingDrawChoice {
        /// The highlighted menu entry.
        selected: Choice,
    },
    /// The dealer plays out the hand, one timed step at a time.
    DealerResolving,
    /// The round is over; behaves like [`Phase::Normal`] for commands.
    RoundComplete(RoundResult),
    /// The player quit. Every further event is ignored.
    Closed,
}

impl Phase {
    /// Returns whether typed commands are accepted.
    #[must_use]
    pub const fn accepts_commands(&self) -> bool {
        matches!(
            self,
            Self::Normal | Self::RoundComplete(_) | Self::DealerResolving
        )
    }

    /// Returns the result of the finished round, if any.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        match self {
            Self::RoundComplete(result) => Some(*result),
            _ => None,
        }
    }
}

/// Entries of the draw-or-stand menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    /// Take another card.
    #[default]
    Draw,
    /// Stand and reveal the dealer's hand.
    Show,
}

impl Choice {
    /// All entries in menu order.
    pub const ALL: [Self; 2] = [Self::Draw, Self::Show];

    /// Returns the menu position of the entry.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Draw => 0,
            Self::Show => 1,
        }
    }

    /// Returns the entry at a menu position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Draw),
            1 => Some(Self::Show),
            _ => None,
        }
    }

    /// Returns the text shown in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Show => "Show",
        }
    }

    /// Returns the entry below, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Draw => Self::Show,
            Self::Show => Self::Draw,
        }
    }

    /// Returns the entry above, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        // Two entries: moving up and down land on the same one.
        self.next()
    }
}

/// Input delivered to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line of text was entered at the prompt.
    Submit(String),
    /// Move the menu highlight up.
    SelectPrevious,
    /// Move the menu highlight down.
    SelectNext,
    /// Activate the highlighted menu entry.
    Confirm,
    /// A previously scheduled dealer step is due.
    DealerTick,
    /// The player interrupted the program.
    Interrupt,
}

/// Work the game asks its driver to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`Event::DealerTick`] once the delay has elapsed.
    ScheduleDealerTick(Duration),
    /// Stop the program. Pending dealer ticks must not fire.
    Quit,
}
