//! Tests for the resolution engine.

use super::*;
use crate::catalog::{MediaCatalogEntry, StepCatalogEntry, StepOption, StepType};
use crate::segment::parse;
use crate::test_support::{media_entry, pet_step};

#[test]
fn test_step_without_fragment_uses_raw_value() {
    let ctx = RunContext::default().answer("name", "Ava");
    let prompt = resolve(&parse("Hello @{step:name} !"), &ctx).unwrap();

    assert_eq!(prompt.text, "Hello Ava !");
    assert!(prompt.attached_media.is_empty());
}

#[test]
fn test_media_reference_attaches_without_text() {
    let ctx = RunContext::new(vec![media_entry("m1", "refs/style-1.png")]);
    let prompt = resolve(&parse("Style: @{ref:m1}"), &ctx).unwrap();

    assert_eq!(prompt.text, "Style: ");
    assert_eq!(prompt.attached_media.len(), 1);
    assert_eq!(prompt.attached_media[0].media_id, "m1");
}

#[test]
fn test_dangling_media_fails_with_no_partial_output() {
    let ctx = RunContext::new(vec![media_entry("m1", "refs/style-1.png")]);
    let errors = resolve(&parse("@{ref:missing}"), &ctx).unwrap_err();

    assert_eq!(
        errors.errors(),
        &[ResolutionError::DanglingMediaReference {
            segment_index: 0,
            media_id: "missing".to_string(),
        }]
    );
}

#[test]
fn test_multi_select_joins_fragments_in_selection_order() {
    let ctx = RunContext::default()
        .with_steps(vec![pet_step()])
        .answer("pet", vec!["cat", "dog"]);
    let prompt = resolve(&parse("@{step:pet}"), &ctx).unwrap();

    assert_eq!(prompt.text, "a cat, a dog");

    let reversed = RunContext::default()
        .with_steps(vec![pet_step()])
        .answer("pet", vec!["dog", "cat"]);
    assert_eq!(resolve(&parse("@{step:pet}"), &reversed).unwrap().text, "a dog, a cat");
}

#[test]
fn test_multi_select_separator_is_configurable() {
    let ctx = RunContext::default()
        .with_steps(vec![pet_step()])
        .answer("pet", vec!["cat", "dog"]);
    let options = ResolveOptions {
        multi_select_separator: " and ".to_string(),
    };

    let prompt = resolve_with(&parse("@{step:pet}"), &ctx, &options).unwrap();
    assert_eq!(prompt.text, "a cat and a dog");
}

#[test]
fn test_missing_answer_is_fatal() {
    let ctx = RunContext::default();
    let errors = resolve(&parse("Hi @{step:name}"), &ctx).unwrap_err();

    assert_eq!(
        errors.errors(),
        &[ResolutionError::MissingAnswer {
            segment_index: 1,
            step_name: "name".to_string(),
        }]
    );
}

#[test]
fn test_empty_selection_counts_as_missing() {
    let ctx = RunContext::default().answer("pet", Vec::<&str>::new());
    let errors = resolve(&parse("@{step:pet}"), &ctx).unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_collects_every_failure_in_segment_order() {
    let ctx = RunContext::new(vec![media_entry("m1", "refs/a.png")]).answer("ok", "yes");
    let errors = resolve(
        &parse("@{step:a} @{ref:x} @{step:ok} @{ref:m1} @{step:b}"),
        &ctx,
    )
    .unwrap_err();

    let indices: Vec<usize> = errors.errors().iter().map(|e| e.segment_index()).collect();
    assert_eq!(indices, vec![0, 2, 8]);
    assert!(matches!(
        errors.errors()[1],
        ResolutionError::DanglingMediaReference { .. }
    ));

    let message = errors.to_string();
    assert_eq!(message.lines().count(), 3);
    assert!(message.contains("step 'a'"));
    assert!(message.contains("media 'x'"));
    assert!(message.contains("step 'b'"));
}

#[test]
fn test_option_media_attached_and_deduplicated() {
    let dog_media = media_entry("dogref", "refs/dog-1.png");
    let step = StepCatalogEntry::new("pet", StepType::MultiSelect)
        .with_option(StepOption::new("cat").with_fragment("a cat"))
        .with_option(
            StepOption::new("dog")
                .with_fragment("a dog")
                .with_media(dog_media.clone()),
        );
    let ctx = RunContext::new(vec![media_entry("m1", "refs/a.png"), dog_media])
        .with_steps(vec![step])
        .answer("pet", vec!["dog", "cat"]);

    let prompt = resolve(
        &parse("@{ref:m1} @{step:pet} @{ref:dogref} @{ref:m1}"),
        &ctx,
    )
    .unwrap();

    assert_eq!(prompt.text, " a dog, a cat  ");
    let ids: Vec<&str> = prompt
        .attached_media
        .iter()
        .map(|m| m.media_id.as_str())
        .collect();
    assert_eq!(ids, vec!["m1", "dogref"]);
}

#[test]
fn test_single_select_uses_first_value() {
    let step = StepCatalogEntry::new("color", StepType::SingleSelect)
        .with_option(StepOption::new("red").with_fragment("crimson"));
    let ctx = RunContext::default()
        .with_steps(vec![step])
        .answer("color", vec!["red", "blue"]);

    let prompt = resolve(&parse("@{step:color}"), &ctx).unwrap();
    assert_eq!(prompt.text, "crimson");
}

#[test]
fn test_unknown_option_falls_back_to_raw_value() {
    let ctx = RunContext::default()
        .with_steps(vec![pet_step()])
        .answer("pet", vec!["cat", "ferret"]);

    let prompt = resolve(&parse("@{step:pet}"), &ctx).unwrap();
    assert_eq!(prompt.text, "a cat, ferret");
}

#[test]
fn test_step_outside_catalog_uses_all_raw_values() {
    let ctx = RunContext::default().answer("tags", vec!["x", "y"]);
    let prompt = resolve(&parse("@{step:tags}"), &ctx).unwrap();
    assert_eq!(prompt.text, "x, y");
}

#[test]
fn test_empty_fragment_falls_back_to_value() {
    let step = StepCatalogEntry::new("size", StepType::SingleSelect)
        .with_option(StepOption::new("large").with_fragment(""));
    let ctx = RunContext::default()
        .with_steps(vec![step])
        .answer("size", "large");

    assert_eq!(resolve(&parse("@{step:size}"), &ctx).unwrap().text, "large");
}

#[test]
fn test_resolution_is_deterministic() {
    let ctx = RunContext::new(vec![media_entry("m1", "refs/a.png")])
        .with_steps(vec![pet_step()])
        .answer("pet", vec!["cat", "dog"]);
    let segments = parse("@{step:pet} @{ref:m1} @{step:nope}");

    assert_eq!(resolve(&segments, &ctx), resolve(&segments, &ctx));

    let ok = parse("@{step:pet} @{ref:m1}");
    assert_eq!(resolve(&ok, &ctx), resolve(&ok, &ctx));
}

#[test]
fn test_literal_only_template() {
    let prompt = resolve(&parse("a plain prompt"), &RunContext::default()).unwrap();
    assert_eq!(prompt.text, "a plain prompt");
}

#[test]
fn test_run_answers_from_yaml() {
    let answers = RunAnswers::from_yaml("answers:\n  name: Ava\n  pet: [cat, dog]\n").unwrap();

    assert_eq!(answers.answers.get("name"), Some(&StepAnswer::from("Ava")));
    assert_eq!(
        answers.answers.get("pet").map(StepAnswer::values),
        Some(vec!["cat", "dog"])
    );
}

#[test]
fn test_run_answers_rejects_nested_maps() {
    assert!(RunAnswers::from_yaml("answers:\n  name: {a: b}\n").is_err());
}

#[test]
fn test_resolved_prompt_json_shape() {
    let media: Vec<MediaCatalogEntry> = vec![media_entry("m1", "refs/a.png")];
    let ctx = RunContext::new(media);
    let prompt = resolve(&parse("x @{ref:m1}"), &ctx).unwrap();
    let json = serde_json::to_value(&prompt).unwrap();

    assert_eq!(json["text"], "x ");
    assert_eq!(json["attached_media"][0]["media_id"], "m1");
}
