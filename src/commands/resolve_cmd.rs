//! Implementation of the `promptref resolve` command.

use super::{Session, load_steps, print_json};
use crate::cli::ResolveArgs;
use promptref::error::{PromptError, Result};
use promptref::events::{Event, EventAction, Outcome};
use promptref::resolve::{RunAnswers, RunContext, resolve_with};
use promptref::template::Template;
use promptref::validate::validate_for_run;
use serde_json::json;

/// Execute the `promptref resolve` command.
///
/// The template is validated first: duplicate display names and dangling
/// media references always block resolution, dangling step references
/// block it when `--workflow` is given. The template's own media catalog
/// is the run's media catalog. Without `--answers` every step reference is
/// unanswered.
///
/// # Exit Codes
///
/// - 0: Prompt resolved and printed
/// - 1: User error (unreadable inputs, invalid config)
/// - 2: The template does not validate
/// - 3: One or more segments could not be resolved
pub fn cmd_resolve(session: &Session, args: ResolveArgs) -> Result<()> {
    let template = Template::load(&args.template)?;
    let steps = match &args.workflow {
        Some(path) => Some(load_steps(Some(path))?),
        None => None,
    };
    let answers = match &args.answers {
        Some(path) => RunAnswers::load(path)?,
        None => RunAnswers::default(),
    };

    let event = Event::new(EventAction::Resolve, Outcome::Failed)
        .with_template(args.template.display().to_string());

    let report = validate_for_run(&template, steps.as_deref());
    if !report.is_clean() {
        session.record(event.with_details(json!({ "validation": &report })));
        return Err(PromptError::ValidationError(format!(
            "template '{}' cannot be resolved\n\n{}",
            args.template.display(),
            report.format_error().trim_end()
        )));
    }

    let ctx = RunContext {
        step_answers: answers.answers,
        steps: steps.unwrap_or_default(),
        media_catalog: template.media_catalog.clone(),
    };

    let result = resolve_with(
        &template.segments(),
        &ctx,
        &session.config.resolve_options(),
    );

    match result {
        Ok(prompt) => {
            let mut event = event.with_details(json!({
                "chars": prompt.text.len(),
                "attached_media": prompt.attached_media.len(),
            }));
            event.outcome = Outcome::Ok;
            session.record(event);
            print_json(&prompt)
        }
        Err(errors) => {
            session.record(event.with_details(json!({ "errors": &errors })));
            Err(errors.into())
        }
    }
}
