//! promptref: mention-aware prompt templates.
//!
//! Templates are stored as canonical text with inline `@{step:<name>}` and
//! `@{ref:<media_id>}` tokens. The library covers the whole lifecycle of
//! such a template:
//!
//! - [`segment`]: token grammar, parser and serializer
//! - [`nodes`]: the editor-facing mention node tree
//! - [`capture`]: `@`-triggered mention capture while typing
//! - [`validate`]: display-name uniqueness and dangling-reference checks
//! - [`resolve`]: producing the final prompt text for one run

pub mod capture;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod nodes;
pub mod resolve;
pub mod segment;
pub mod template;
pub mod validate;

#[cfg(test)]
mod test_support;
