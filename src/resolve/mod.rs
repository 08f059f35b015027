//! Resolution engine: template segments + run-time answers -> final prompt.
//!
//! Per segment, in order:
//!
//! - `Literal` text is appended verbatim
//! - `StepRef` appends the selected option's prompt fragment, or the raw
//!   value when the option has none. Multi-select answers are joined in
//!   selection order with the configured separator (`", "` by default).
//!   Option-level `prompt_media` is attached to the output.
//! - `MediaRef` attaches the catalog entry and appends no text
//!
//! Attached media are deduplicated by media id, first occurrence kept.
//!
//! Resolution is all-or-nothing and collects every failure before
//! returning, so callers can show a complete punch-list in one pass.

mod context;
mod engine;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use context::{RunAnswers, RunContext, StepAnswer};
pub use engine::{ResolveOptions, resolve, resolve_with};
pub use types::{ResolutionError, ResolutionErrors, ResolvedPrompt};
