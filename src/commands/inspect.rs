//! Read-only inspection commands: `parse`, `nodes`, `candidates`.

use super::{Session, load_source, load_steps, print_json};
use crate::cli::{CandidatesArgs, NodesArgs, ParseArgs};
use promptref::capture::find_candidates;
use promptref::error::Result;
use promptref::template::Template;

/// Execute `promptref parse`.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let template = load_source(&args.source)?;
    print_json(&template.segments())
}

/// Execute `promptref nodes`.
///
/// Step mentions are only checked for existence when a workflow is given.
pub fn cmd_nodes(args: NodesArgs) -> Result<()> {
    let template = load_source(&args.source)?;
    let steps = match &args.workflow {
        Some(path) => Some(load_steps(Some(path))?),
        None => None,
    };

    let tree = template.to_nodes(steps.as_deref());

    if args.json {
        return print_json(&tree.render());
    }

    println!("{}", tree.render_line());
    let missing = tree.missing().count();
    if missing > 0 {
        eprintln!();
        eprintln!("{} mention(s) reference missing steps or media (marked with ?)", missing);
    }
    Ok(())
}

/// Execute `promptref candidates`.
pub fn cmd_candidates(session: &Session, args: CandidatesArgs) -> Result<()> {
    let steps = load_steps(args.workflow.as_deref())?;
    let template = match &args.template {
        Some(path) => Template::load(path)?,
        None => Template::default(),
    };

    let candidates = find_candidates(
        &args.query,
        &steps,
        &template.media_catalog,
        session.config.max_candidates,
    );
    print_json(&candidates)
}
