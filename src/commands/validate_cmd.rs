//! Implementation of the `promptref validate` command.

use super::{Session, load_steps, print_json};
use crate::cli::ValidateArgs;
use promptref::error::{PromptError, Result};
use promptref::events::{Event, EventAction, Outcome};
use promptref::template::Template;
use promptref::validate::validate_template;
use serde_json::json;

/// Execute the `promptref validate` command.
///
/// Prints the full report as JSON on stdout, then fails with the
/// punch-list if the report is not clean.
///
/// # Exit Codes
///
/// - 0: No findings
/// - 1: User error (unreadable template/workflow, invalid config)
/// - 2: Uniqueness violations or dangling references
pub fn cmd_validate(session: &Session, args: ValidateArgs) -> Result<()> {
    let template = Template::load(&args.template)?;
    let steps = load_steps(args.workflow.as_deref())?;

    let report = validate_template(&template, &steps);
    print_json(&report)?;

    let outcome = if report.is_clean() {
        Outcome::Ok
    } else {
        Outcome::Failed
    };
    session.record(
        Event::new(EventAction::Validate, outcome)
            .with_template(args.template.display().to_string())
            .with_details(json!({
                "uniqueness_violations": report.uniqueness_violations.len(),
                "dangling_references": report.dangling_references.len(),
            })),
    );

    if report.is_clean() {
        Ok(())
    } else {
        Err(PromptError::ValidationError(format!(
            "template '{}'\n\n{}",
            args.template.display(),
            report.format_error().trim_end()
        )))
    }
}
