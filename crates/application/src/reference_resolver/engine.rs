//! Reference resolution engine
//!
//! Walks JSON-shaped parameter trees and expands `{{...}}` references
//! against a read-only working-memory snapshot.

use serde_json::{Map, Value};
use synapse_domain::ResolutionContext;

use super::format;
use super::parser::{ReferenceKind, ReferenceMatch, parse_references};

/// One expansion pass over a string, selecting a single reference form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Scratchpad,
    Blackboard,
    Attributes,
    Attribute,
    Artifacts,
    Artifact,
}

/// Expansion passes in their fixed order. Each pass re-scans the output of
/// the previous one, so text produced by an earlier substitution (for
/// example blackboard content containing a literal `{{artifact:...}}`) is
/// itself expanded by the later passes within the same call.
const PASS_ORDER: [Pass; 6] = [
    Pass::Scratchpad,
    Pass::Blackboard,
    Pass::Attributes,
    Pass::Attribute,
    Pass::Artifacts,
    Pass::Artifact,
];

const fn matches_pass(kind: &ReferenceKind, pass: Pass) -> bool {
    matches!(
        (kind, pass),
        (ReferenceKind::Scratchpad, Pass::Scratchpad)
            | (ReferenceKind::Blackboard, Pass::Blackboard)
            | (ReferenceKind::Attributes, Pass::Attributes)
            | (ReferenceKind::Attribute(_), Pass::Attribute)
            | (ReferenceKind::Artifacts, Pass::Artifacts)
            | (ReferenceKind::Artifact(_), Pass::Artifact)
    )
}

/// The reference resolution engine.
///
/// Holds one context snapshot and expands references against it. All
/// methods take `&self`; there is no cache or other interior state, so one
/// resolver is safe to share across concurrent tool preparations and a
/// fresh snapshot simply means a fresh resolver.
pub struct ReferenceResolver {
    context: ResolutionContext,
}

impl ReferenceResolver {
    /// Creates a new resolver over the given snapshot.
    #[must_use]
    pub const fn new(context: ResolutionContext) -> Self {
        Self { context }
    }

    /// Creates a resolver with an empty context.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ResolutionContext::new())
    }

    /// Returns a reference to the snapshot.
    #[must_use]
    pub const fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Resolves a JSON-shaped parameter tree.
    ///
    /// Strings are expanded, arrays are rebuilt element-wise in order,
    /// objects are rebuilt with the same key set, and all other scalars
    /// pass through by value. Container shape is preserved exactly.
    #[must_use]
    pub fn resolve(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.expand_str(s)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.resolve(item)).collect())
            }
            Value::Object(entries) => {
                let mut resolved = Map::new();
                for (key, item) in entries {
                    resolved.insert(key.clone(), self.resolve(item));
                }
                Value::Object(resolved)
            }
            other => other.clone(),
        }
    }

    /// Expands all references in one string.
    ///
    /// Runs the six passes in their fixed order; within one pass every
    /// occurrence is replaced, and replacement text is only re-scanned by
    /// the passes that follow.
    #[must_use]
    pub fn expand_str(&self, input: &str) -> String {
        let mut current = input.to_string();
        for pass in PASS_ORDER {
            current = self.run_pass(&current, pass);
        }
        current
    }

    /// Substitutes every occurrence of one reference form in `input`.
    fn run_pass(&self, input: &str, pass: Pass) -> String {
        let matches: Vec<ReferenceMatch> = parse_references(input)
            .into_iter()
            .filter(|m| matches_pass(&m.kind, pass))
            .collect();

        if matches.is_empty() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for reference in &matches {
            result.push_str(&input[last_end..reference.span.start]);
            result.push_str(&self.substitution(&reference.kind));
            last_end = reference.span.end;
        }
        result.push_str(&input[last_end..]);

        result
    }

    /// Produces the replacement text for one reference.
    fn substitution(&self, kind: &ReferenceKind) -> String {
        match kind {
            ReferenceKind::Scratchpad => self.context.scratchpad.clone(),
            ReferenceKind::Blackboard => format::format_blackboard(&self.context.blackboard),
            ReferenceKind::Attributes => format::format_attribute_map(&self.context),
            ReferenceKind::Attribute(name) => self.context.attribute(name).map_or_else(
                || format::attribute_not_found(name),
                format::format_attribute_result,
            ),
            ReferenceKind::Artifacts => format::format_artifact_list(&self.context.artifacts),
            ReferenceKind::Artifact(key) => self.context.artifact(key).map_or_else(
                || format::artifact_not_found(key),
                |artifact| artifact.content.clone(),
            ),
        }
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Map, json};
    use synapse_domain::{Artifact, ArtifactKind, AttributeRecord, MemoryCategory, MemoryEntry};

    use super::*;

    fn test_context() -> ResolutionContext {
        let mut report = Artifact::new(ArtifactKind::Text, "Report", "done", 4);
        report.id = "a1".to_string();

        let mut ctx = ResolutionContext::new()
            .with_scratchpad("found X")
            .with_blackboard(vec![MemoryEntry::new(MemoryCategory::Insight, "Y works", 2)])
            .with_artifacts(vec![report]);
        ctx.insert_attribute(AttributeRecord::new(
            "weather",
            "get_weather",
            Map::new(),
            json!("22C"),
            3,
        ))
        .unwrap();
        ctx
    }

    #[test]
    fn test_scratchpad_substitution() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(resolver.expand_str("Notes: {{scratchpad}}"), "Notes: found X");
    }

    #[test]
    fn test_scratchpad_case_insensitive() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(resolver.expand_str("{{SCRATCHPAD}}"), "found X");
        assert_eq!(resolver.expand_str("{{ScratchPad}}"), "found X");
    }

    #[test]
    fn test_empty_scratchpad_substitutes_empty_string() {
        let resolver = ReferenceResolver::empty();
        assert_eq!(resolver.expand_str("Notes: {{scratchpad}}"), "Notes: ");
    }

    #[test]
    fn test_blackboard_formatting() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{blackboard}}"),
            "[INSIGHT] (Iteration 2): Y works"
        );
    }

    #[test]
    fn test_attribute_lookup_by_name() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("Temp: {{attribute:weather}}"),
            "Temp: 22C"
        );
    }

    #[test]
    fn test_missing_attribute_marker() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{attribute:ghost}}"),
            "[Attribute 'ghost' not found]"
        );
    }

    #[test]
    fn test_attribute_name_lookup_verbatim() {
        let resolver = ReferenceResolver::new(test_context());
        // The form keyword is case-insensitive; the name is not.
        assert_eq!(
            resolver.expand_str("{{ATTRIBUTE:Weather}}"),
            "[Attribute 'Weather' not found]"
        );
    }

    #[test]
    fn test_artifact_lookup_by_id() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(resolver.expand_str("{{artifact:a1}}"), "done");
    }

    #[test]
    fn test_artifact_lookup_by_title_fallback() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(resolver.expand_str("{{artifact:Report}}"), "done");
    }

    #[test]
    fn test_missing_artifact_marker() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{artifact:nope}}"),
            "[Artifact 'nope' not found]"
        );
    }

    #[test]
    fn test_empty_collections_render_literals() {
        let resolver = ReferenceResolver::empty();
        assert_eq!(resolver.expand_str("{{attributes}}"), "{}");
        assert_eq!(resolver.expand_str("{{artifacts}}"), "[]");
        assert_eq!(resolver.expand_str("{{blackboard}}"), "[No blackboard entries]");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{scratchpad}} / {{scratchpad}}"),
            "found X / found X"
        );
    }

    #[test]
    fn test_mixed_forms_in_one_string() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{scratchpad}} + {{attribute:weather}} + {{artifact:a1}}"),
            "found X + 22C + done"
        );
    }

    #[test]
    fn test_unknown_placeholders_survive() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(
            resolver.expand_str("{{base_url}}/{{scratchpad}}"),
            "{{base_url}}/found X"
        );
    }

    #[test]
    fn test_expands_references_produced_by_earlier_passes() {
        // Documented quirk of the sequential-pass design: scratchpad
        // content containing a later form's literal is expanded by that
        // later pass within the same call.
        let ctx = test_context().with_scratchpad("see {{artifact:a1}}");
        let resolver = ReferenceResolver::new(ctx);
        assert_eq!(resolver.expand_str("{{scratchpad}}"), "see done");
    }

    #[test]
    fn test_earlier_forms_in_later_output_are_not_expanded() {
        // The reverse direction does not apply: an artifact whose content
        // names {{scratchpad}} keeps the literal, because the scratchpad
        // pass already ran.
        let mut note = Artifact::new(ArtifactKind::Text, "Note", "use {{scratchpad}}", 1);
        note.id = "n1".to_string();
        let ctx = ResolutionContext::new()
            .with_scratchpad("found X")
            .with_artifacts(vec![note]);

        let resolver = ReferenceResolver::new(ctx);
        assert_eq!(resolver.expand_str("{{artifact:n1}}"), "use {{scratchpad}}");
    }

    #[test]
    fn test_resolve_leaves_non_strings_untouched() {
        let resolver = ReferenceResolver::new(test_context());
        assert_eq!(resolver.resolve(&json!(42)), json!(42));
        assert_eq!(resolver.resolve(&json!(true)), json!(true));
        assert_eq!(resolver.resolve(&json!(null)), json!(null));
        assert_eq!(resolver.resolve(&json!(1.5)), json!(1.5));
    }

    #[test]
    fn test_resolve_nested_containers() {
        let resolver = ReferenceResolver::new(test_context());
        let params = json!({
            "query": "{{scratchpad}}",
            "limits": {"max": 10, "strict": true},
            "notes": ["plain", "{{attribute:weather}}", 7],
        });

        let resolved = resolver.resolve(&params);
        assert_eq!(
            resolved,
            json!({
                "query": "found X",
                "limits": {"max": 10, "strict": true},
                "notes": ["plain", "22C", 7],
            })
        );
    }

    #[test]
    fn test_resolve_is_idempotent_without_references() {
        let resolver = ReferenceResolver::new(test_context());
        let params = json!({"a": [1, "two", {"b": null}], "c": "no refs"});
        assert_eq!(resolver.resolve(&params), params);
    }

    #[test]
    fn test_resolve_preserves_shape() {
        let resolver = ReferenceResolver::new(test_context());
        let params = json!({"outer": ["{{scratchpad}}", {"inner": "{{blackboard}}"}]});

        let resolved = resolver.resolve(&params);
        let outer = resolved["outer"].as_array().unwrap();
        assert_eq!(outer.len(), 2);
        assert!(outer[1].is_object());
        assert_eq!(
            resolved.as_object().unwrap().keys().collect::<Vec<_>>(),
            params.as_object().unwrap().keys().collect::<Vec<_>>()
        );
    }
}
