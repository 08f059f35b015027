//! Filesystem utilities for promptref.
//!
//! Canonical text written by the CLI goes through an atomic write so that a
//! stored template is never observed half-written.

pub mod atomic;

pub use atomic::atomic_write_file;
