//! Read-only catalog snapshots supplied by collaborators.
//!
//! - **Media**: reference images attached to a template ([`MediaCatalogEntry`])
//! - **Steps**: the workflow's steps and their options ([`StepCatalogEntry`])
//!
//! This crate never fetches or mutates catalogs on its own; callers hand in
//! already-loaded snapshots.

mod display_name;
mod media;
mod steps;


// Re-export public API
pub use display_name::derive_display_name;
pub use media::{MediaCatalogEntry, find_media};
pub use steps::{StepCatalogEntry, StepOption, StepType, Workflow, find_step};
