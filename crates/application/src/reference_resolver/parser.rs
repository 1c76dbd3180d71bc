//! Reference parser for `{{...}}` placeholder syntax
//!
//! Extracts recognized working-memory references with their byte spans.
//! Parsing is a pure function over the input; no matcher state survives a
//! call, so repeated detection on the same string always agrees.

use std::ops::Range;

use serde_json::Value;

/// The six recognized reference forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `{{scratchpad}}` - the agent's free-text working buffer.
    Scratchpad,
    /// `{{blackboard}}` - the full formatted memory log.
    Blackboard,
    /// `{{attributes}}` - every saved tool result as a JSON object.
    Attributes,
    /// `{{attribute:<name>}}` - one saved tool result, by verbatim name.
    Attribute(String),
    /// `{{artifacts}}` - every artifact as a JSON array.
    Artifacts,
    /// `{{artifact:<id-or-title>}}` - one artifact, by id or exact title.
    Artifact(String),
}

impl ReferenceKind {
    /// Classifies the inner text of a `{{...}}` token.
    ///
    /// Matching is case-insensitive and tolerates surrounding whitespace;
    /// captured attribute/artifact names keep their original case but are
    /// trimmed. Returns `None` for tokens that are not one of the six
    /// forms, including empty captured names.
    #[must_use]
    pub fn classify(inner: &str) -> Option<Self> {
        let inner = inner.trim();
        let lowered = inner.to_ascii_lowercase();

        match lowered.as_str() {
            "scratchpad" => return Some(Self::Scratchpad),
            "blackboard" => return Some(Self::Blackboard),
            "attributes" => return Some(Self::Attributes),
            "artifacts" => return Some(Self::Artifacts),
            _ => {}
        }

        if lowered.starts_with("attribute:") {
            // The matched prefix is pure ASCII, so slicing the original at
            // its byte length stays on a char boundary.
            let name = inner["attribute:".len()..].trim();
            if !name.is_empty() {
                return Some(Self::Attribute(name.to_string()));
            }
        }
        if lowered.starts_with("artifact:") {
            let key = inner["artifact:".len()..].trim();
            if !key.is_empty() {
                return Some(Self::Artifact(key.to_string()));
            }
        }

        None
    }

    /// Returns the canonical literal for this reference, as it would appear
    /// in a parameter string.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Scratchpad => "{{scratchpad}}".to_string(),
            Self::Blackboard => "{{blackboard}}".to_string(),
            Self::Attributes => "{{attributes}}".to_string(),
            Self::Attribute(name) => format!("{{{{attribute:{name}}}}}"),
            Self::Artifacts => "{{artifacts}}".to_string(),
            Self::Artifact(key) => format!("{{{{artifact:{key}}}}}"),
        }
    }
}

/// A parsed reference occurrence within a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Which of the six forms matched.
    pub kind: ReferenceKind,

    /// Byte range of the full `{{...}}` token in the original string.
    pub span: Range<usize>,
}

/// Parses a string and extracts all recognized reference occurrences.
///
/// Unrecognized `{{...}}` tokens are skipped; an unclosed `{{` ends the
/// scan. Names in `attribute:`/`artifact:` forms are captured up to the
/// first `}}`.
///
/// # Examples
///
/// ```
/// use synapse_application::reference_resolver::parser::parse_references;
///
/// let refs = parse_references("{{scratchpad}} and {{attribute:weather}}");
/// assert_eq!(refs.len(), 2);
/// ```
#[must_use]
pub fn parse_references(input: &str) -> Vec<ReferenceMatch> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '{' {
            continue;
        }
        let Some((_, '{')) = chars.peek() else {
            continue;
        };
        chars.next(); // consume second {

        let start = i;
        let mut inner = String::new();
        let mut found_end = false;

        // Read until }}
        while let Some((_, ch)) = chars.next() {
            if ch == '}'
                && let Some((end_idx, '}')) = chars.peek()
            {
                let end = *end_idx + 1;
                chars.next(); // consume second }

                if let Some(kind) = ReferenceKind::classify(&inner) {
                    references.push(ReferenceMatch {
                        kind,
                        span: start..end,
                    });
                }
                found_end = true;
                break;
            }
            inner.push(ch);
        }

        // No closing }} anywhere to the right; nothing more can match.
        if !found_end {
            break;
        }
    }

    references
}

/// Returns true if the value is a string containing at least one
/// recognized reference.
///
/// Non-string values return false unconditionally; this is a cheap guard
/// over a single leaf, not a tree scan. Callers use it to skip resolution
/// entirely for parameters with no placeholders.
#[must_use]
pub fn has_reference(value: &Value) -> bool {
    match value {
        Value::String(s) => !parse_references(s).is_empty(),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_classify_bare_forms() {
        assert_eq!(
            ReferenceKind::classify("scratchpad"),
            Some(ReferenceKind::Scratchpad)
        );
        assert_eq!(
            ReferenceKind::classify("blackboard"),
            Some(ReferenceKind::Blackboard)
        );
        assert_eq!(
            ReferenceKind::classify("attributes"),
            Some(ReferenceKind::Attributes)
        );
        assert_eq!(
            ReferenceKind::classify("artifacts"),
            Some(ReferenceKind::Artifacts)
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            ReferenceKind::classify("SCRATCHPAD"),
            Some(ReferenceKind::Scratchpad)
        );
        assert_eq!(
            ReferenceKind::classify("BlackBoard"),
            Some(ReferenceKind::Blackboard)
        );
        assert_eq!(
            ReferenceKind::classify("ATTRIBUTE:Weather"),
            Some(ReferenceKind::Attribute("Weather".to_string()))
        );
    }

    #[test]
    fn test_classify_preserves_name_case() {
        assert_eq!(
            ReferenceKind::classify("attribute:MixedCase"),
            Some(ReferenceKind::Attribute("MixedCase".to_string()))
        );
        assert_eq!(
            ReferenceKind::classify("artifact:Final Report"),
            Some(ReferenceKind::Artifact("Final Report".to_string()))
        );
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(
            ReferenceKind::classify(" scratchpad "),
            Some(ReferenceKind::Scratchpad)
        );
        assert_eq!(
            ReferenceKind::classify("attribute: weather "),
            Some(ReferenceKind::Attribute("weather".to_string()))
        );
    }

    #[test]
    fn test_classify_rejects_unknown_and_empty() {
        assert_eq!(ReferenceKind::classify("base_url"), None);
        assert_eq!(ReferenceKind::classify("attribute:"), None);
        assert_eq!(ReferenceKind::classify("artifact:   "), None);
        assert_eq!(ReferenceKind::classify(""), None);
    }

    #[test]
    fn test_parse_single_reference() {
        let refs = parse_references("{{scratchpad}}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::Scratchpad);
        assert_eq!(refs[0].span, 0..14);
    }

    #[test]
    fn test_parse_multiple_forms() {
        let refs = parse_references("{{blackboard}} then {{artifact:a1}} then {{attributes}}");
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].kind, ReferenceKind::Blackboard);
        assert_eq!(refs[1].kind, ReferenceKind::Artifact("a1".to_string()));
        assert_eq!(refs[2].kind, ReferenceKind::Attributes);
    }

    #[test]
    fn test_parse_skips_unrecognized_tokens() {
        let refs = parse_references("{{base_url}}/{{scratchpad}}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::Scratchpad);
    }

    #[test]
    fn test_parse_unclosed_reference() {
        assert!(parse_references("{{scratchpad").is_empty());
        assert!(parse_references("text {{artifact:a1").is_empty());
    }

    #[test]
    fn test_parse_adjacent_references() {
        let refs = parse_references("{{scratchpad}}{{blackboard}}");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].span, 14..28);
    }

    #[test]
    fn test_span_covers_full_token() {
        let input = "query: {{attribute: weather }}!";
        let refs = parse_references(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "{{attribute: weather }}");
    }

    #[test]
    fn test_name_captured_up_to_first_closing() {
        let refs = parse_references("{{artifact:Report}} trailing}}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::Artifact("Report".to_string()));
    }

    #[test]
    fn test_literal_round_trip() {
        assert_eq!(ReferenceKind::Scratchpad.literal(), "{{scratchpad}}");
        assert_eq!(
            ReferenceKind::Attribute("weather".to_string()).literal(),
            "{{attribute:weather}}"
        );
        assert_eq!(
            ReferenceKind::Artifact("a1".to_string()).literal(),
            "{{artifact:a1}}"
        );
    }

    #[test]
    fn test_has_reference_on_strings() {
        assert!(has_reference(&json!("{{scratchpad}}")));
        assert!(has_reference(&json!("prefix {{ARTIFACTS}} suffix")));
        assert!(!has_reference(&json!("no placeholders here")));
        assert!(!has_reference(&json!("{{unknown_var}}")));
        assert!(!has_reference(&json!("{{scratchpad")));
    }

    #[test]
    fn test_has_reference_rejects_non_strings() {
        assert!(!has_reference(&json!(42)));
        assert!(!has_reference(&json!(true)));
        assert!(!has_reference(&json!(null)));
        // Containers are not scanned, even when a nested string matches.
        assert!(!has_reference(&json!(["{{scratchpad}}"])));
        assert!(!has_reference(&json!({"q": "{{scratchpad}}"})));
    }

    #[test]
    fn test_detection_is_repeatable() {
        // Guards against reusable-matcher state: the same input must give
        // the same answer on consecutive calls.
        let value = json!("{{blackboard}}");
        let first = has_reference(&value);
        let second = has_reference(&value);
        assert_eq!(first, second);
        assert!(first);

        let refs_a = parse_references("{{scratchpad}} {{scratchpad}}");
        let refs_b = parse_references("{{scratchpad}} {{scratchpad}}");
        assert_eq!(refs_a, refs_b);
        assert_eq!(refs_a.len(), 2);
    }
}
