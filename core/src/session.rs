//! IME session management.
//!
//! The `ImeSession` tracks the state that lives across key events but outside
//! the composition engine: which keyboard (Hangul or Latin) is active and
//! whether the shifted key row is selected.

use crate::Config;

/// Current input mode of the IME session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Letter keys are composed into Hangul
    #[default]
    Hangul,
    /// Passthrough mode (keys not processed by IME)
    Latin,
}

/// Shift variant selected on the Hangul keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftState {
    #[default]
    Off,
    /// Shifted row selected; released after the next letter when one-shot
    On,
}

/// IME session state.
#[derive(Debug, Clone)]
pub struct ImeSession {
    mode: InputMode,
    shift: ShiftState,
    one_shot_shift: bool,
}

impl ImeSession {
    /// Create a new session in Hangul mode with one-shot shift.
    pub fn new() -> Self {
        Self {
            mode: InputMode::Hangul,
            shift: ShiftState::Off,
            one_shot_shift: true,
        }
    }

    /// Create a session honoring the configured start mode and shift behavior.
    pub fn with_config(config: &Config) -> Self {
        Self {
            mode: if config.start_in_hangul {
                InputMode::Hangul
            } else {
                InputMode::Latin
            },
            shift: ShiftState::Off,
            one_shot_shift: config.one_shot_shift,
        }
    }

    /// Get the current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Set the input mode. Shift is released on every mode change.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.shift = ShiftState::Off;
    }

    /// Switch between Hangul and Latin, returning the new mode.
    pub fn toggle_mode(&mut self) -> InputMode {
        let next = match self.mode {
            InputMode::Hangul => InputMode::Latin,
            InputMode::Latin => InputMode::Hangul,
        };
        self.set_mode(next);
        next
    }

    /// Get the current shift state.
    pub fn shift(&self) -> ShiftState {
        self.shift
    }

    /// Check whether the shifted row is selected.
    pub fn is_shifted(&self) -> bool {
        self.shift == ShiftState::On
    }

    /// Toggle the shift key.
    pub fn toggle_shift(&mut self) {
        self.shift = match self.shift {
            ShiftState::Off => ShiftState::On,
            ShiftState::On => ShiftState::Off,
        };
    }

    /// Called after a letter was typed; releases a one-shot shift.
    pub fn letter_typed(&mut self) {
        if self.one_shot_shift {
            self.shift = ShiftState::Off;
        }
    }
}

impl Default for ImeSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = ImeSession::new();
        assert_eq!(session.mode(), InputMode::Hangul);
        assert_eq!(session.shift(), ShiftState::Off);
    }

    #[test]
    fn test_with_config_start_latin() {
        let config = Config {
            start_in_hangul: false,
            ..Config::default()
        };
        let session = ImeSession::with_config(&config);
        assert_eq!(session.mode(), InputMode::Latin);
    }

    #[test]
    fn test_mode_transitions() {
        let mut session = ImeSession::new();
        assert_eq!(session.toggle_mode(), InputMode::Latin);
        assert_eq!(session.toggle_mode(), InputMode::Hangul);

        session.set_mode(InputMode::Latin);
        assert_eq!(session.mode(), InputMode::Latin);
    }

    #[test]
    fn test_one_shot_shift_releases() {
        let mut session = ImeSession::new();
        session.toggle_shift();
        assert!(session.is_shifted());

        session.letter_typed();
        assert!(!session.is_shifted());
    }

    #[test]
    fn test_sticky_shift() {
        let config = Config {
            one_shot_shift: false,
            ..Config::default()
        };
        let mut session = ImeSession::with_config(&config);
        session.toggle_shift();
        session.letter_typed();
        session.letter_typed();
        assert!(session.is_shifted());

        session.toggle_shift();
        assert!(!session.is_shifted());
    }

    #[test]
    fn test_mode_change_releases_shift() {
        let mut session = ImeSession::new();
        session.toggle_shift();
        session.toggle_mode();
        assert_eq!(session.shift(), ShiftState::Off);
    }
}
