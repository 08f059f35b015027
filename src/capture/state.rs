//! The capture state machine.

use super::candidates::Candidate;
use crate::segment::RefKind;

/// A keystroke as seen by the capture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Escape,
}

/// Capture state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Composing { query: String },
}

/// What a keystroke did to the capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (idle keystroke, or an edit outside a capture).
    None,
    /// `@` typed; a new capture began with an empty query.
    Started,
    /// The query grew by one character.
    Extended,
    /// The query lost its last character.
    Shortened,
    /// Capture abandoned; the typed `@query` stays as literal text.
    Abandoned,
    /// The `@` itself was deleted; capture cancelled.
    Cancelled,
}

/// Result of selecting a candidate while composing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub kind: RefKind,
    pub identifier: String,
    /// The literal `@query` span the mention replaces.
    pub replaced: String,
}

/// Returns `true` for characters that extend a capture query.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Session-scoped `@` capture state machine.
#[derive(Debug, Clone, Default)]
pub struct CaptureMachine {
    state: CaptureState,
}

impl CaptureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// The current query, or `None` when idle.
    pub fn query(&self) -> Option<&str> {
        match &self.state {
            CaptureState::Idle => None,
            CaptureState::Composing { query } => Some(query),
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, CaptureState::Composing { .. })
    }

    /// Feed one keystroke.
    pub fn handle(&mut self, key: Key) -> Transition {
        if !self.is_composing() {
            if key == Key::Char('@') {
                self.start();
                return Transition::Started;
            }
            return Transition::None;
        }

        match key {
            Key::Char('@') => {
                self.start();
                Transition::Started
            }
            Key::Char(c) if is_word_char(c) => {
                if let CaptureState::Composing { query } = &mut self.state {
                    query.push(c);
                }
                Transition::Extended
            }
            Key::Char(_) | Key::Escape => {
                self.state = CaptureState::Idle;
                Transition::Abandoned
            }
            Key::Backspace => {
                let shortened = match &mut self.state {
                    CaptureState::Composing { query } => query.pop().is_some(),
                    CaptureState::Idle => false,
                };
                if shortened {
                    Transition::Shortened
                } else {
                    self.state = CaptureState::Idle;
                    Transition::Cancelled
                }
            }
        }
    }

    fn start(&mut self) {
        self.state = CaptureState::Composing {
            query: String::new(),
        };
    }

    /// Select a candidate, completing the capture.
    ///
    /// Returns `None` and does nothing when idle.
    pub fn select(&mut self, candidate: &Candidate) -> Option<Insertion> {
        let CaptureState::Composing { query } = std::mem::take(&mut self.state) else {
            return None;
        };

        Some(Insertion {
            kind: candidate.kind,
            identifier: candidate.identifier.clone(),
            replaced: format!("@{}", query),
        })
    }
}
