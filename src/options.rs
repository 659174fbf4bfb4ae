//! Game configuration options.

use core::time::Duration;

use crate::error::OptionsError;

/// Pause between dealer actions unless configured otherwise.
pub const DEFAULT_DEALER_DELAY: Duration = Duration::from_millis(1200);

/// Number of message lines kept unless configured otherwise.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 20;

/// Configuration options for a game.
///
/// The house rules themselves are fixed; only pacing and display are tunable.
///
/// ```
/// use core::time::Duration;
/// use bjcli::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_delay(Duration::from_millis(500))
///     .with_message_capacity(10);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause before each dealer action.
    pub dealer_delay: Duration,
    /// Maximum number of lines kept in the message log.
    pub message_capacity: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_delay: DEFAULT_DEALER_DELAY,
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

impl GameOptions {
    /// Sets the pause before each dealer action.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_delay(Duration::from_millis(300));
    /// assert_eq!(options.dealer_delay, Duration::from_millis(300));
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Sets how many message lines are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_message_capacity(5);
    /// assert_eq!(options.message_capacity, 5);
    /// ```
    #[must_use]
    pub const fn with_message_capacity(mut self, capacity: usize) -> Self {
        self.message_capacity = capacity;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the message capacity or the dealer delay is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.message_capacity == 0 {
            return Err(OptionsError::ZeroMessageCapacity);
        }
        if self.dealer_delay.is_zero() {
            return Err(OptionsError::ZeroDealerDelay);
        }
        Ok(())
    }
}
