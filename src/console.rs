//! Prompt editing and command history.
//!
//! The console turns raw key presses into game [`Event`]s. What a key means
//! depends on the phase: arrows walk the history at the prompt but move the
//! highlight while the draw-or-stand menu is open.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::game::{Event, Phase};

/// A key press delivered by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter.
    Enter,
    /// Backspace.
    Backspace,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Ctrl-C.
    Interrupt,
}

/// Input line with command history.
#[derive(Debug, Clone, Default)]
pub struct Console {
    input: String,
    history: Vec<String>,
    /// Position in `history`; `history.len()` means "past the newest entry".
    cursor: usize,
}

impl Console {
    /// Creates an empty console.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns the text typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns previously submitted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Applies a key press and returns the event it produces, if any.
    pub fn translate(&mut self, key: Key, phase: &Phase) -> Option<Event> {
        if matches!(phase, Phase::AwaitingDrawChoice { .. }) {
            return match key {
                Key::Up => Some(Event::SelectPrevious),
                Key::Down => Some(Event::SelectNext),
                Key::Enter => Some(Event::Confirm),
                Key::Interrupt => Some(Event::Interrupt),
                Key::Char(_) | Key::Backspace => None,
            };
        }

        match key {
            Key::Char(c) => {
                self.input.push(c);
                None
            }
            Key::Backspace => {
                self.input.pop();
                None
            }
            Key::Up => {
                self.recall_older();
                None
            }
            Key::Down => {
                self.recall_newer();
                None
            }
            Key::Enter => Some(Event::Submit(self.submit())),
            Key::Interrupt => Some(Event::Interrupt),
        }
    }

    fn submit(&mut self) -> String {
        let command = mem::take(&mut self.input);
        if !command.is_empty() {
            self.history.push(command.clone());
        }
        self.cursor = self.history.len();
        command
    }

    fn recall_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.input.clone_from(&self.history[self.cursor]);
    }

    fn recall_newer(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.cursor += 1;
        if self.cursor >= self.history.len() {
            self.cursor = self.history.len();
            self.input.clear();
        } else {
            self.input.clone_from(&self.history[self.cursor]);
        }
    }
}
