//! Segment-by-segment substitution.

use super::context::RunContext;
use super::types::{ResolutionError, ResolutionErrors, ResolvedPrompt};
use crate::catalog::{MediaCatalogEntry, StepType, find_media, find_step};
use crate::segment::Segment;
use std::collections::HashSet;

/// Tunables for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Join string between the pieces of a multi-select answer.
    pub multi_select_separator: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            multi_select_separator: ", ".to_string(),
        }
    }
}

/// Resolve segments with default options.
///
/// # Examples
///
/// ```
/// use promptref::resolve::{RunContext, resolve};
/// use promptref::segment::parse;
///
/// let ctx = RunContext::default().answer("name", "Ava");
/// let prompt = resolve(&parse("Hello @{step:name} !"), &ctx).unwrap();
/// assert_eq!(prompt.text, "Hello Ava !");
/// assert!(prompt.attached_media.is_empty());
/// ```
pub fn resolve(segments: &[Segment], ctx: &RunContext) -> Result<ResolvedPrompt, ResolutionErrors> {
    resolve_with(segments, ctx, &ResolveOptions::default())
}

/// Resolve segments against a run context.
///
/// Fails with every [`ResolutionError`] found; no partial prompt is
/// returned. The same inputs always produce the same output.
pub fn resolve_with(
    segments: &[Segment],
    ctx: &RunContext,
    options: &ResolveOptions,
) -> Result<ResolvedPrompt, ResolutionErrors> {
    let mut text = String::new();
    let mut media = MediaList::default();
    let mut errors = Vec::new();

    for (segment_index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal { text: literal } => text.push_str(literal),
            Segment::StepRef { step_name } => {
                match step_text(step_name, ctx, options, &mut media) {
                    Some(piece) => text.push_str(&piece),
                    None => errors.push(ResolutionError::MissingAnswer {
                        segment_index,
                        step_name: step_name.clone(),
                    }),
                }
            }
            Segment::MediaRef { media_id } => match find_media(&ctx.media_catalog, media_id) {
                Some(entry) => media.attach(entry),
                None => errors.push(ResolutionError::DanglingMediaReference {
                    segment_index,
                    media_id: media_id.clone(),
                }),
            },
        }
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "resolution failed");
        return Err(ResolutionErrors::new(errors));
    }

    tracing::debug!(
        chars = text.len(),
        media = media.entries.len(),
        "resolved prompt"
    );

    Ok(ResolvedPrompt {
        text,
        attached_media: media.entries,
    })
}

/// Text for one step reference, or `None` when the step has no answer.
fn step_text(
    step_name: &str,
    ctx: &RunContext,
    options: &ResolveOptions,
    media: &mut MediaList,
) -> Option<String> {
    let mut values = ctx.step_answers.get(step_name)?.values();
    if values.is_empty() {
        return None;
    }

    let step = find_step(&ctx.steps, step_name);

    if let Some(step) = step
        && !step.step_type.allows_multiple()
        && values.len() > 1
    {
        tracing::warn!(
            step = step_name,
            selected = values.len(),
            "single-answer step has several selected values; using the first"
        );
        values.truncate(1);
    }

    let pieces: Vec<&str> = values
        .iter()
        .map(|&value| {
            let option = step.and_then(|step| step.option(value));

            if option.is_none()
                && let Some(step) = step
                && step.step_type != StepType::FreeText
                && !step.options.is_empty()
            {
                tracing::warn!(step = step_name, value, "answer matches no declared option");
            }

            if let Some(entry) = option.and_then(|option| option.prompt_media.as_ref()) {
                media.attach(entry);
            }

            option.and_then(|option| option.fragment()).unwrap_or(value)
        })
        .collect();

    Some(pieces.join(&options.multi_select_separator))
}

/// Attached media in first-occurrence order.
#[derive(Default)]
struct MediaList {
    entries: Vec<MediaCatalogEntry>,
    seen: HashSet<String>,
}

impl MediaList {
    fn attach(&mut self, entry: &MediaCatalogEntry) {
        if self.seen.insert(entry.media_id.clone()) {
            self.entries.push(entry.clone());
        }
    }
}
