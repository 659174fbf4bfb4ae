use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{Choice, Game, Phase};

/// Heading shown above the message log.
pub const TITLE: &str = "Welcome to the Game!";

/// Prompt shown while a command can be typed.
pub const PROMPT: &str = "Enter command (draw/quit): ";

const FAREWELL: &str = "Goodbye!";

impl<S> Game<S> {
    /// Renders the screen as plain text lines.
    ///
    /// The lines are the title, the message log, and either the prompt
    /// followed by `input` or the draw-or-stand menu with the highlighted
    /// entry marked by `>`. Blank lines separate the three parts. A log entry
    /// holding a newline spans several lines.
    #[must_use]
    pub fn render(&self, input: &str) -> Vec<String> {
        if self.phase == Phase::Closed {
            return alloc::vec![FAREWELL.to_string()];
        }

        let mut lines = Vec::with_capacity(self.messages.len() + 6);
        lines.push(TITLE.to_string());
        lines.push(String::new());

        if self.messages.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(self.messages.iter().flat_map(str::lines).map(ToString::to_string));
        }
        lines.push(String::new());

        match self.phase {
            Phase::AwaitingDrawChoice { selected } => {
                for choice in Choice::ALL {
                    let marker = if choice == selected { "> " } else { "  " };
                    lines.push(format!("{marker}{}", choice.label()));
                }
            }
            _ => lines.push(format!("{PROMPT}{input}")),
        }

        lines
    }
}
