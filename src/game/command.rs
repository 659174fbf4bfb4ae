use alloc::string::ToString;
use core::str::FromStr;

use crate::error::CommandError;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new round and deal two cards to the player.
    Draw,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Returns the text that selects the command.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Quit => "quit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" => Ok(Self::Draw),
            "quit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
