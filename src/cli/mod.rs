//! CLI argument parsing for promptref.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// promptref: author, check, and resolve mention-aware prompt templates.
///
/// Templates are plain text with `@{step:<name>}` and `@{ref:<media_id>}`
/// tokens. Template, workflow and answers documents are YAML files.
#[derive(Parser, Debug)]
#[command(name = "promptref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $PROMPTREF_CONFIG, then ./promptref.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append an audit event to this NDJSON file (overrides `events_log`).
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptref.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse canonical text and print its segments as JSON.
    Parse(ParseArgs),

    /// Show the editor view of a template: text with mention pills.
    ///
    /// Mentions absent from the catalogs are marked with `?`.
    Nodes(NodesArgs),

    /// List mention candidates for a query, steps first.
    Candidates(CandidatesArgs),

    /// Check display-name uniqueness and reference existence.
    ///
    /// Prints the report as JSON. Exits with code 2 if anything is found.
    Validate(ValidateArgs),

    /// Resolve a template with run answers into the final prompt.
    ///
    /// The template is validated first (exit code 2 on findings). Prints
    /// `{text, attached_media}` as JSON. Exits with code 3 if any step is
    /// unanswered or any media reference dangles.
    Resolve(ResolveArgs),

    /// Drive an editing session from a keystroke script.
    ///
    /// Script syntax: plain characters are typed; `<esc>`, `<bs>` and
    /// `<pick:N>` (select the N-th candidate, 0-based) are special keys.
    Compose(ComposeArgs),
}

/// Where the template comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TemplateSource {
    /// Canonical template text given inline.
    #[arg(long)]
    pub text: Option<String>,

    /// Template YAML file (`canonical_text`, `media_catalog`).
    #[arg(long)]
    pub template: Option<PathBuf>,
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: TemplateSource,
}

/// Arguments for the `nodes` command.
#[derive(Args, Debug)]
pub struct NodesArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Workflow YAML file with the step catalog.
    #[arg(long)]
    pub workflow: Option<PathBuf>,

    /// Print rendered nodes as JSON instead of a display line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `candidates` command.
#[derive(Args, Debug)]
pub struct CandidatesArgs {
    /// Query typed after `@` (empty lists everything).
    #[arg(default_value = "")]
    pub query: String,

    /// Template YAML file supplying the media catalog.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Workflow YAML file supplying the step catalog.
    #[arg(long)]
    pub workflow: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Template YAML file.
    #[arg(long)]
    pub template: PathBuf,

    /// Workflow YAML file with the step catalog.
    #[arg(long)]
    pub workflow: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Template YAML file.
    #[arg(long)]
    pub template: PathBuf,

    /// Workflow YAML file with step options, fragments and option media.
    #[arg(long)]
    pub workflow: Option<PathBuf>,

    /// Answers YAML file (`answers: {step: value | [values]}`).
    #[arg(long)]
    pub answers: Option<PathBuf>,
}

/// Arguments for the `compose` command.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Keystroke script to type.
    #[arg(long)]
    pub keys: String,

    /// Template YAML file to continue editing (its media catalog is used).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Workflow YAML file with the step catalog.
    #[arg(long)]
    pub workflow: Option<PathBuf>,

    /// Write the canonical text here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["promptref", "parse"]).is_err());
        assert!(
            Cli::try_parse_from(["promptref", "parse", "--text", "a", "--template", "t.yaml"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["promptref", "parse", "--text", "a"]).is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "promptref",
            "validate",
            "--template",
            "t.yaml",
            "-vv",
            "--events",
            "e.ndjson",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.events, Some(PathBuf::from("e.ndjson")));
        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn candidates_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["promptref", "candidates"]).unwrap();
        match cli.command {
            Command::Candidates(args) => assert_eq!(args.query, ""),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
