//! Implementation of the `promptref compose` command.
//!
//! Replays a keystroke script through an editing session. Useful for
//! reproducing editor behavior and for producing canonical text from a
//! description of what an author typed.

use super::{Session, load_steps};
use crate::cli::ComposeArgs;
use promptref::capture::{Composer, Key};
use promptref::error::{PromptError, Result};
use promptref::events::{Event, EventAction, Outcome};
use promptref::fs::atomic_write_file;
use promptref::segment::references;
use promptref::template::Template;
use serde_json::json;

/// One step of a keystroke script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptStep {
    Key(Key),
    /// Select the N-th candidate (0-based).
    Pick(usize),
}

/// Parse a keystroke script.
///
/// Plain characters are typed as-is. `<esc>`, `<bs>` and `<pick:N>` are
/// special keys; `<lt>` types a literal `<`. Anything else in angle
/// brackets is typed literally.
pub(crate) fn parse_key_script(script: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    let mut rest = script;

    while let Some(c) = rest.chars().next() {
        if c == '<'
            && let Some(end) = rest.find('>')
        {
            let tag = &rest[1..end];
            let step = match tag {
                "esc" => Some(ScriptStep::Key(Key::Escape)),
                "bs" => Some(ScriptStep::Key(Key::Backspace)),
                "lt" => Some(ScriptStep::Key(Key::Char('<'))),
                _ => match tag.strip_prefix("pick:") {
                    Some(index) => Some(ScriptStep::Pick(index.parse().map_err(|_| {
                        PromptError::UserError(format!(
                            "invalid candidate index in '<{}>': expected a number",
                            tag
                        ))
                    })?)),
                    None => None,
                },
            };

            if let Some(step) = step {
                steps.push(step);
                rest = &rest[end + 1..];
                continue;
            }
        }

        steps.push(ScriptStep::Key(Key::Char(c)));
        rest = &rest[c.len_utf8()..];
    }

    Ok(steps)
}

/// Execute the `promptref compose` command.
///
/// Every run that gets as far as replaying the script is logged, failed
/// picks and failed writes included.
pub fn cmd_compose(session: &Session, args: ComposeArgs) -> Result<()> {
    let steps = load_steps(args.workflow.as_deref())?;
    let template = match &args.template {
        Some(path) => Template::load(path)?,
        None => Template::default(),
    };
    let script = parse_key_script(&args.keys)?;

    let mut event = Event::new(EventAction::Compose, Outcome::Ok);
    if let Some(path) = &args.template {
        event = event.with_template(path.display().to_string());
    }

    let mut composer = Composer::from_canonical(
        &template.canonical_text,
        steps,
        template.media_catalog,
        session.config.capture_options(),
    );

    let result = replay(&mut composer, script).and_then(|()| {
        let text = composer.canonical_text();
        match &args.out {
            Some(path) => {
                atomic_write_file(path, &text)?;
                eprintln!("Wrote {}", path.display());
            }
            None => println!("{}", text),
        }
        Ok(text)
    });

    match result {
        Ok(text) => {
            session.record(event.with_details(json!({
                "chars": text.len(),
                "mentions": references(&composer.tree().segments()).count(),
            })));
            Ok(())
        }
        Err(e) => {
            event.outcome = Outcome::Failed;
            session.record(event.with_details(json!({ "error": e.to_string() })));
            Err(e)
        }
    }
}

/// Feed a parsed script through an editing session.
fn replay(composer: &mut Composer, script: Vec<ScriptStep>) -> Result<()> {
    for step in script {
        match step {
            ScriptStep::Key(key) => {
                composer.type_key(key);
            }
            ScriptStep::Pick(index) => {
                let query = composer.machine().query().map(str::to_string);
                if composer.select_index(index).is_none() {
                    return Err(PromptError::UserError(match query {
                        Some(query) => format!("no candidate {} for query '@{}'", index, query),
                        None => format!("<pick:{}> used while no mention is being typed", index),
                    }));
                }
            }
        }
    }
    Ok(())
}
