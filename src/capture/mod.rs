//! `@`-triggered mention capture.
//!
//! The capture machine is explicit, session-scoped state:
//!
//! ```text
//! Idle --'@'--> Composing("")
//! Composing(q) --word char c--> Composing(q + c)
//! Composing(q) --whitespace | other char | Escape--> Idle   (typed "@q" stays as text)
//! Composing(q) --Backspace--> Composing(q minus last char), or Idle when q is empty
//! Composing(q) --candidate selected--> Insert(kind, identifier) --> Idle
//! ```
//!
//! Word characters are alphanumerics, `_` and `-`. A second `@` while
//! composing abandons the current capture and starts a new one.
//!
//! [`Composer`] couples the machine with a [`crate::nodes::NodeTree`] for an
//! editing session where typing appends at the end of the document. It runs
//! synchronously on every keystroke against in-memory catalog snapshots.

mod candidates;
mod composer;
mod state;


// Re-export public API
pub use candidates::{Candidate, find_candidates};
pub use composer::{CaptureOptions, Composer};
pub use state::{CaptureMachine, CaptureState, Insertion, Key, Transition, is_word_char};
