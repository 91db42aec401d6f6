//! IME engine with session management and key event processing.
//!
//! The `ImeEngine` wraps a `Composer` with session state (input mode, shift)
//! and the configured word separators, providing a `process_key()` method
//! that routes each key event and reports span operations to a sink.

use crate::engine::Composer;
use crate::session::{ImeSession, InputMode};
use crate::sink::ComposingSink;
use crate::Config;

/// Key event types that the IME can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character input (letters, digits, separators, punctuation)
    Char(char),
    /// Backspace key
    Backspace,
    /// Shift key on the Hangul keyboard
    Shift,
    /// Switch between Hangul and Latin keyboards
    ModeSwitch,
    /// The host moved the cursor or selection away from the composing span
    CursorMoved,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

impl KeyResult {
    pub fn is_handled(self) -> bool {
        self == KeyResult::Handled
    }
}

/// IME engine with session management.
///
/// # Example
///
/// ```rust,ignore
/// use libkorean_core::{Composition, ImeEngine, KeyEvent, KeyResult};
///
/// let mut ime = ImeEngine::new(composer);
/// let mut doc = Composition::new();
///
/// for ch in "gksrmf".chars() {
///     if ime.process_key(KeyEvent::Char(ch), &mut doc) == KeyResult::NotHandled {
///         doc.insert_char(ch);
///     }
/// }
/// assert_eq!(doc.text(), "한글");
/// ```
pub struct ImeEngine<C: Composer> {
    composer: C,
    session: ImeSession,
    config: Config,
}

impl<C: Composer> ImeEngine<C> {
    /// Create a new IME engine with the default configuration.
    pub fn new(composer: C) -> Self {
        Self::with_config(composer, Config::default())
    }

    /// Create an IME engine with the given configuration.
    pub fn with_config(composer: C, config: Config) -> Self {
        Self {
            composer,
            session: ImeSession::with_config(&config),
            config,
        }
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ImeSession {
        &self.session
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drop any staged syllable without committing it and return to the
    /// configured start mode. Used when a new input field gains focus.
    pub fn reset(&mut self) {
        self.composer.reset();
        self.session = ImeSession::with_config(&self.config);
    }

    /// Commit any staged syllable. Used when the input field loses focus.
    pub fn finish(&mut self, sink: &mut dyn ComposingSink) {
        self.composer.flush(sink);
    }

    /// Process a key event and report span operations to `sink`.
    ///
    /// Returns `KeyResult::Handled` if the IME consumed the key, or
    /// `KeyResult::NotHandled` if the host should apply its default action
    /// (insert the character, delete committed text).
    pub fn process_key(&mut self, key: KeyEvent, sink: &mut dyn ComposingSink) -> KeyResult {
        match key {
            KeyEvent::ModeSwitch => {
                self.composer.flush(sink);
                let mode = self.session.toggle_mode();
                tracing::debug!(?mode, "input mode switched");
                KeyResult::Handled
            }
            KeyEvent::CursorMoved => {
                self.composer.flush(sink);
                KeyResult::Handled
            }
            // Latin mode: the host handles everything else
            _ if self.session.mode() == InputMode::Latin => KeyResult::NotHandled,
            KeyEvent::Shift => {
                self.session.toggle_shift();
                tracing::debug!(shift = ?self.session.shift(), "shift toggled");
                KeyResult::Handled
            }
            KeyEvent::Backspace => self.composer.backspace(sink),
            KeyEvent::Char(ch) if self.config.is_separator(ch) => {
                self.composer.flush(sink);
                KeyResult::NotHandled
            }
            KeyEvent::Char(ch) => {
                let shifted = self.session.is_shifted();
                let result = self.composer.compose(ch, shifted, sink);
                if result.is_handled() {
                    self.session.letter_typed();
                }
                result
            }
        }
    }
}
