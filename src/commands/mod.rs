//! Command implementations for promptref.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the document loading and output helpers they share.

mod compose;
mod inspect;
mod resolve_cmd;
mod validate_cmd;

use crate::cli::{Cli, Command, TemplateSource};
use promptref::catalog::{StepCatalogEntry, Workflow};
use promptref::config::Config;
use promptref::error::{PromptError, Result};
use promptref::events::{Event, append_event};
use promptref::template::Template;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// State shared by every command of one invocation.
pub struct Session {
    pub config: Config,
    /// Event log destination, if any.
    pub events: Option<PathBuf>,
}

impl Session {
    /// Append an audit event when an events log is configured.
    ///
    /// Logging failures are reported but never fail the command.
    pub fn record(&self, event: Event) {
        let Some(path) = &self.events else {
            return;
        };
        if let Err(e) = append_event(path, &event) {
            tracing::warn!(action = %event.action, error = %e, "failed to log event");
        }
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let events = cli
        .events
        .or_else(|| config.events_log.as_ref().map(PathBuf::from));
    let session = Session { config, events };

    match cli.command {
        Command::Parse(args) => inspect::cmd_parse(args),
        Command::Nodes(args) => inspect::cmd_nodes(args),
        Command::Candidates(args) => inspect::cmd_candidates(&session, args),
        Command::Validate(args) => validate_cmd::cmd_validate(&session, args),
        Command::Resolve(args) => resolve_cmd::cmd_resolve(&session, args),
        Command::Compose(args) => compose::cmd_compose(&session, args),
    }
}

/// Load the template named by `--text` or `--template`.
pub(crate) fn load_source(source: &TemplateSource) -> Result<Template> {
    match (&source.text, &source.template) {
        (Some(text), _) => Ok(Template::new(text.as_str())),
        (None, Some(path)) => Template::load(path),
        (None, None) => Err(PromptError::UserError(
            "either --text or --template is required".to_string(),
        )),
    }
}

/// Load the step catalog, or an empty one when no workflow is given.
pub(crate) fn load_steps(path: Option<&Path>) -> Result<Vec<StepCatalogEntry>> {
    match path {
        Some(path) => Ok(Workflow::load(path)?.steps),
        None => Ok(Vec::new()),
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PromptError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
