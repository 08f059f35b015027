//! Tests for reference validation.

use super::*;
use crate::catalog::MediaCatalogEntry;
use crate::segment::{RefKind, parse};
use crate::template::Template;
use crate::test_support::{media_entry, name_step, pet_step};

#[test]
fn test_clean_template_passes() {
    let media = vec![media_entry("m1", "refs/style-1.png")];
    let report = validate(
        &parse("Hello @{step:name}, in @{ref:m1}"),
        &[name_step()],
        &media,
    );

    assert!(report.is_clean());
    assert_eq!(report.format_error(), "");
}

#[test]
fn test_duplicate_default_names_report_both_entries() {
    let media = vec![
        media_entry("a", "uploads/overlay-111.png"),
        media_entry("b", "other/overlay-222.jpg"),
    ];
    let report = validate(&parse("plain"), &[], &media);

    assert_eq!(
        report.uniqueness_violations,
        vec![UniquenessViolation {
            display_name: "overlay".to_string(),
            media_ids: vec!["a".to_string(), "b".to_string()],
        }]
    );
}

#[test]
fn test_uniqueness_reports_every_colliding_name() {
    let media = vec![
        media_entry("a", "x/overlay-1.png"),
        media_entry("b", "x/paper-1.png"),
        media_entry("c", "x/overlay-2.png"),
        media_entry("d", "x/unique.png"),
        media_entry("e", "x/paper-9.png"),
        media_entry("f", "x/other.png").with_display_name("overlay"),
    ];
    let violations = check_uniqueness(&media);

    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].display_name, "overlay");
    assert_eq!(violations[0].media_ids, vec!["a", "c", "f"]);
    assert_eq!(violations[1].display_name, "paper");
    assert_eq!(violations[1].media_ids, vec!["b", "e"]);
}

#[test]
fn test_uniqueness_is_case_sensitive() {
    let media = vec![
        MediaCatalogEntry::new("a", "u", "p.png").with_display_name("Logo"),
        MediaCatalogEntry::new("b", "u", "q.png").with_display_name("logo"),
    ];
    assert!(check_uniqueness(&media).is_empty());
}

#[test]
fn test_existence_collects_all_dangling_references() {
    let media = vec![media_entry("m1", "refs/a.png")];
    let report = validate(
        &parse("@{step:pet} @{step:gone} @{ref:m1} @{ref:lost}"),
        &[pet_step()],
        &media,
    );

    assert_eq!(
        report.dangling_references,
        vec![
            DanglingReference::new(2, RefKind::Step, "gone"),
            DanglingReference::new(6, RefKind::Media, "lost"),
        ]
    );
    assert!(!report.is_clean());
}

#[test]
fn test_step_and_media_namespaces_are_separate() {
    // A media id does not satisfy a step reference with the same identifier.
    let media = vec![media_entry("pet", "refs/pet.png")];
    let dangling = check_existence(&parse("@{step:pet}"), &[], &media);
    assert_eq!(dangling, vec![DanglingReference::new(0, RefKind::Step, "pet")]);
}

#[test]
fn test_validation_is_idempotent() {
    let media = vec![
        media_entry("a", "x/overlay-1.png"),
        media_entry("b", "x/overlay-2.png"),
    ];
    let segments = parse("@{ref:a} @{step:none}");

    let first = validate(&segments, &[], &media);
    let second = validate(&segments, &[], &media);
    assert_eq!(first, second);
}

#[test]
fn test_format_error_lists_both_sections() {
    let media = vec![
        media_entry("a", "x/overlay-1.png"),
        media_entry("b", "x/overlay-2.png"),
    ];
    let report = validate(&parse("@{step:pet}"), &[], &media);

    assert_eq!(
        report.format_error(),
        "Duplicate display names\n  overlay: a, b\n\nDangling references\n  segment 0: step 'pet'\n"
    );
}

#[test]
fn test_validate_template_uses_its_media_catalog() {
    let mut template = Template::new("@{ref:m1} @{step:name}");
    template
        .attach_media(media_entry("m1", "refs/a.png"))
        .unwrap();

    assert!(validate_template(&template, &[name_step()]).is_clean());

    template.detach_media("m1");
    let report = validate_template(&template, &[name_step()]);
    assert_eq!(
        report.dangling_references,
        vec![DanglingReference::new(0, RefKind::Media, "m1")]
    );
}

#[test]
fn test_report_json_shape() {
    let report = validate(&parse("@{ref:x}"), &[], &[]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "uniqueness_violations": [],
            "dangling_references": [
                {"segment_index": 0, "kind": "media", "identifier": "x"}
            ]
        })
    );
}

#[test]
fn test_validate_for_run_checks_steps_only_with_catalog() {
    let mut template = Template::new("@{step:pet} @{step:gone} @{ref:m1}");
    template
        .attach_media(media_entry("m1", "refs/a.png"))
        .unwrap();

    assert!(validate_for_run(&template, None).is_clean());

    let steps = [pet_step()];
    let report = validate_for_run(&template, Some(steps.as_slice()));
    assert_eq!(
        report.dangling_references,
        vec![DanglingReference::new(2, RefKind::Step, "gone")]
    );
}

#[test]
fn test_validate_for_run_always_checks_media() {
    let mut template = Template::new("@{ref:lost}");
    template.media_catalog = vec![
        media_entry("a", "x/overlay-1.png"),
        media_entry("b", "x/overlay-2.png"),
    ];

    let report = validate_for_run(&template, None);
    assert_eq!(report.uniqueness_violations.len(), 1);
    assert_eq!(
        report.dangling_references,
        vec![DanglingReference::new(0, RefKind::Media, "lost")]
    );
}
