//! Tests for the token grammar, parser, and serializer.

use super::*;
use proptest::prelude::*;

#[test]
fn test_parse_empty_string() {
    assert!(parse("").is_empty());
    assert_eq!(serialize(&[]), "");
}

#[test]
fn test_parse_plain_text_is_single_literal() {
    let input = "plain @nonsense text";
    let segments = parse(input);

    assert_eq!(segments, vec![Segment::literal(input)]);
    assert_eq!(serialize(&segments), input);
}

#[test]
fn test_parse_step_reference_with_surrounding_text() {
    let segments = parse("Hello @{step:name} !");

    assert_eq!(
        segments,
        vec![
            Segment::literal("Hello "),
            Segment::step("name"),
            Segment::literal(" !"),
        ]
    );
}

#[test]
fn test_parse_media_reference_at_end() {
    let segments = parse("Style: @{ref:m1}");

    assert_eq!(
        segments,
        vec![Segment::literal("Style: "), Segment::media("m1")]
    );
}

#[test]
fn test_parse_adjacent_tokens_emit_no_empty_literal() {
    let segments = parse("@{step:a}@{ref:b}@{step:c}");

    assert_eq!(
        segments,
        vec![Segment::step("a"), Segment::media("b"), Segment::step("c")]
    );
}

#[test]
fn test_parse_unknown_keyword_stays_literal() {
    let input = "keep @{foo:bar} as text";
    assert_eq!(parse(input), vec![Segment::literal(input)]);
}

#[test]
fn test_parse_rejects_whitespace_inside_braces() {
    let input = "@{step: name} @{ step:name}";
    assert_eq!(parse(input), vec![Segment::literal(input)]);
}

#[test]
fn test_parse_unclosed_token_stays_literal() {
    let input = "dangling @{step:name";
    assert_eq!(parse(input), vec![Segment::literal(input)]);
}

#[test]
fn test_parse_identifier_charset() {
    let segments = parse("@{step:Step_01-b}@{ref:img.png}");

    // The dot is outside the identifier charset, so the second token is literal.
    assert_eq!(
        segments,
        vec![Segment::step("Step_01-b"), Segment::literal("@{ref:img.png}")]
    );
}

#[test]
fn test_parse_token_inside_noise() {
    let segments = parse("@@{step:x}}");

    assert_eq!(
        segments,
        vec![
            Segment::literal("@"),
            Segment::step("x"),
            Segment::literal("}"),
        ]
    );
}

#[test]
fn test_parse_multibyte_literals() {
    let input = "café ☕ @{step:drink} 🍰";
    let segments = parse(input);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], Segment::literal("café ☕ "));
    assert_eq!(serialize(&segments), input);
}

#[test]
fn test_export_is_catalog_independent() {
    assert_eq!(export(&Segment::step("pet")), "@{step:pet}");
    assert_eq!(export(&Segment::media("m1")), "@{ref:m1}");
    assert_eq!(export(&Segment::literal("x @ y")), "x @ y");
}

#[test]
fn test_references_report_full_slice_indices() {
    let segments = parse("a @{step:one} b @{ref:two}");
    let refs: Vec<_> = references(&segments).collect();

    assert_eq!(
        refs,
        vec![(1, RefKind::Step, "one"), (3, RefKind::Media, "two")]
    );
}

#[test]
fn test_segment_accessors() {
    assert_eq!(Segment::literal("x").kind(), None);
    assert_eq!(Segment::literal("x").identifier(), None);
    assert_eq!(Segment::step("s").kind(), Some(RefKind::Step));
    assert_eq!(Segment::media("m").identifier(), Some("m"));
    assert_eq!(Segment::reference(RefKind::Media, "m"), Segment::media("m"));
}

#[test]
fn test_ref_kind_keywords() {
    assert_eq!(RefKind::Step.token_keyword(), "step");
    assert_eq!(RefKind::Media.token_keyword(), "ref");
    assert_eq!(RefKind::from_keyword("ref"), Some(RefKind::Media));
    assert_eq!(RefKind::from_keyword("media"), None);
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("abc_DEF-123"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("has space"));
    assert!(!is_identifier("dot.ted"));
}

#[test]
fn test_segment_json_shape() {
    let json = serde_json::to_value(parse("Hi @{step:name}@{ref:m1}")).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"type": "literal", "text": "Hi "},
            {"type": "step_ref", "step_name": "name"},
            {"type": "media_ref", "media_id": "m1"},
        ])
    );
}

/// Strings biased toward token fragments so the grammar is exercised at its edges.
fn template_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("@{step:".to_string()),
            Just("@{ref:".to_string()),
            Just("@{foo:".to_string()),
            Just("}".to_string()),
            Just("@".to_string()),
            "[a-zA-Z0-9_ -]{0,6}",
            "\\PC{0,3}",
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_round_trip(s in template_text()) {
        prop_assert_eq!(serialize(&parse(&s)), s);
    }

    #[test]
    fn prop_round_trip_arbitrary(s in "\\PC*") {
        prop_assert_eq!(serialize(&parse(&s)), s);
    }

    #[test]
    fn prop_no_empty_or_adjacent_literals(s in template_text()) {
        let segments = parse(&s);
        for pair in segments.windows(2) {
            let both_literal = matches!(
                (&pair[0], &pair[1]),
                (Segment::Literal { .. }, Segment::Literal { .. })
            );
            prop_assert!(!both_literal);
        }
        for segment in &segments {
            if let Segment::Literal { text } = segment {
                prop_assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn prop_reparse_is_stable(s in template_text()) {
        let segments = parse(&s);
        prop_assert_eq!(parse(&serialize(&segments)), segments);
    }
}
