//! Canonical token grammar for prompt templates.
//!
//! A canonical template is literal text interspersed with tokens of the
//! exact shape:
//!
//! ```text
//! @{step:<identifier>}   reference to a prior workflow step's answer
//! @{ref:<identifier>}    reference to an entry in the template's media catalog
//! ```
//!
//! `<identifier>` matches `[A-Za-z0-9_-]+`. There is no whitespace inside the
//! braces, no nesting, and no escape sequence: any substring with the token
//! shape is always a token.
//!
//! Parsing is permissive and never fails. Anything that does not match the
//! token shape (`@{foo:bar}`, a bare `@name`, an unclosed `@{step:`) is kept as
//! literal text. Neither the parser nor the serializer consults a catalog, so
//! a template referencing a deleted step or image still round-trips.

mod grammar;
mod serialize;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use grammar::{is_identifier, parse};
pub use serialize::{export, serialize};
pub use types::{RefKind, Segment, references};
