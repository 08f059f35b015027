//! Single-pass tokenizer for canonical template text.

use super::types::{RefKind, Segment};
use regex::Regex;
use std::sync::LazyLock;

/// Token pattern. The keyword alternation is closed, so `@{foo:bar}` never matches.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\{(step|ref):([A-Za-z0-9_-]+)\}").expect("valid token regex"));

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid identifier regex"));

/// Returns `true` if `s` can be used as a token identifier.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Parse canonical text into an ordered segment sequence.
///
/// Scans once left to right. Text between tokens becomes a `Literal`
/// segment; empty slices are skipped, so two adjacent tokens produce two
/// adjacent reference segments with nothing in between. This function
/// never fails.
///
/// # Examples
///
/// ```
/// use promptref::segment::{parse, Segment};
///
/// let segments = parse("Hello @{step:name} in @{ref:m1}");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::literal("Hello "),
///         Segment::step("name"),
///         Segment::literal(" in "),
///         Segment::media("m1"),
///     ]
/// );
/// ```
pub fn parse(canonical_text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TOKEN_RE.captures_iter(canonical_text) {
        let (Some(whole), Some(keyword), Some(identifier)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        if whole.start() > cursor {
            segments.push(Segment::literal(&canonical_text[cursor..whole.start()]));
        }

        // The regex only admits the two known keywords.
        if let Some(kind) = RefKind::from_keyword(keyword.as_str()) {
            segments.push(Segment::reference(kind, identifier.as_str()));
        } else {
            segments.push(Segment::literal(whole.as_str()));
        }

        cursor = whole.end();
    }

    if cursor < canonical_text.len() {
        segments.push(Segment::literal(&canonical_text[cursor..]));
    }

    tracing::trace!(segments = segments.len(), "parsed canonical text");
    segments
}
