//! Blink toggle state machine
//!
//! Pure decision core of a blink controller. Both indicators run this
//! one machine, each with its own token and output pin.

use defmt::Format;

/// Per-indicator toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum BlinkState {
    /// Output held low until a toggle token arrives
    Idle,
    /// Output alternating, one phase on, one phase off
    Blinking,
}

impl BlinkState {
    /// Folds one observation of the toggle token into the state.
    ///
    /// A pending token flips the state; no token leaves it unchanged.
    /// The controller calls this once when its blocking wait completes
    /// and once after every blink phase with the result of the
    /// non-blocking check.
    #[must_use]
    pub fn observe(self, token: bool) -> Self {
        match (self, token) {
            (BlinkState::Idle, true) => BlinkState::Blinking,
            (BlinkState::Blinking, true) => BlinkState::Idle,
            (state, false) => state,
        }
    }
}
