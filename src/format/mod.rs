// SPDX-FileCopyrightText: 2026 Scriptbook Contributors
// SPDX-License-Identifier: MIT

//! The raw, externally-validated script document.
//!
//! This is the flat serialized shape produced by the script data pipeline:
//! every record carries a stable string `id`, and reference fields address
//! other records either by positional array index (the older document shape)
//! or by string id (the newer one). Both shapes deserialize into the same
//! types here; `crate::book` resolves either into one canonical graph.
//!
//! Shape conformance is a producer concern: `document_schema` emits a JSON
//! Schema generated from these types so producers can validate before
//! shipping. The book builder still rejects dangling references, which a
//! schema cannot express.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{RichText, RichTextSegment, RichTextStyle};

pub mod demo;

/// A reference to another record, by array position or by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawRef {
    Index(u32),
    Id(String),
}

impl fmt::Display for RawRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Id(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawRole {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawRoom {
    pub id: String,
    pub num: u32,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawNoun {
    pub id: String,
    pub num: u32,
    pub parent_room: RawRef,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawConversation {
    pub id: String,
    pub parent_noun: RawRef,
    #[serde(default)]
    pub verb: Option<RawRef>,
    #[serde(default)]
    pub condition: Option<RawRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawCondition {
    pub id: String,
    pub parent_room: RawRef,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawVerb {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawLine {
    pub id: String,
    pub num: u32,
    pub parent_conversation: RawRef,
    pub role: RawRef,
    pub text: RawLineText,
}

/// Dialogue text: a bare string, or an ordered mix of bare strings and
/// styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawLineText {
    Plain(String),
    Segments(Vec<RawSegment>),
}

impl RawLineText {
    /// Lifts the raw text into the rich-text model, preserving input order
    /// exactly. No segment merging is performed.
    pub fn to_rich_text(&self) -> RichText {
        match self {
            Self::Plain(text) => RichText::of_plain_text(text.clone()),
            Self::Segments(segments) => RichText::new(
                segments
                    .iter()
                    .map(|segment| match segment {
                        RawSegment::Plain(text) => RichTextSegment::of_plain_text(text.clone()),
                        RawSegment::Styled(styled) => RichTextSegment::new(
                            RichTextStyle::new(styled.style.bold, styled.style.italic),
                            styled.text.clone(),
                        ),
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawSegment {
    Plain(String),
    Styled(RawStyledSegment),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawStyledSegment {
    pub text: String,
    #[serde(default)]
    pub style: RawStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RawStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// One complete script document. Conditions and verbs are optional extras
/// some producers omit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDocument {
    pub roles: Vec<RawRole>,
    pub rooms: Vec<RawRoom>,
    pub nouns: Vec<RawNoun>,
    pub conversations: Vec<RawConversation>,
    pub lines: Vec<RawLine>,
    #[serde(default)]
    pub conditions: Vec<RawCondition>,
    #[serde(default)]
    pub verbs: Vec<RawVerb>,
}

/// The JSON Schema for [`ScriptDocument`], for external producer-side
/// validation.
pub fn document_schema() -> schemars::Schema {
    schemars::schema_for!(ScriptDocument)
}

#[cfg(test)]
mod tests {
    use super::{document_schema, RawLineText, RawRef, ScriptDocument};
    use crate::model::RichTextStyle;

    #[test]
    fn deserializes_index_addressed_document() {
        let doc: ScriptDocument = serde_json::from_str(
            r#"{
                "roles": [{"id": "r1", "name": "Narrator", "shortName": "N"}],
                "rooms": [{"id": "rm1", "num": 1, "name": "Cellar"}],
                "nouns": [{"id": "n1", "num": 1, "parentRoom": 0, "description": "Door"}],
                "conversations": [{"id": "c1", "parentNoun": 0, "verb": null, "condition": null}],
                "lines": [{"id": "l1", "num": 0, "parentConversation": 0, "role": 0, "text": "Hi."}]
            }"#,
        )
        .expect("document");

        assert_eq!(doc.nouns[0].parent_room, RawRef::Index(0));
        assert_eq!(doc.conversations[0].verb, None);
        assert!(doc.conditions.is_empty());
        assert!(doc.verbs.is_empty());
    }

    #[test]
    fn deserializes_id_addressed_document() {
        let doc: ScriptDocument = serde_json::from_str(
            r#"{
                "roles": [{"id": "r1", "name": "Narrator", "shortName": "N"}],
                "rooms": [{"id": "rm1", "num": 1}],
                "nouns": [{"id": "n1", "num": 1, "parentRoom": "rm1"}],
                "conversations": [{"id": "c1", "parentNoun": "n1"}],
                "lines": [{"id": "l1", "num": 0, "parentConversation": "c1", "role": "r1", "text": "Hi."}]
            }"#,
        )
        .expect("document");

        assert_eq!(doc.nouns[0].parent_room, RawRef::Id("rm1".to_owned()));
        assert_eq!(doc.rooms[0].name, None);
    }

    #[test]
    fn styled_line_text_lifts_with_defaulted_flags() {
        let text: RawLineText = serde_json::from_str(
            r#"["plain ", {"text": "loud", "style": {"bold": true}}, {"text": "flat"}]"#,
        )
        .expect("line text");

        let rich = text.to_rich_text();
        let segments = rich.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].style(), RichTextStyle::default());
        assert_eq!(segments[1].style(), RichTextStyle::new(true, false));
        assert_eq!(segments[2].style(), RichTextStyle::default());
        assert_eq!(rich.plain_text(), "plain loudflat");
    }

    #[test]
    fn plain_line_text_lifts_to_single_segment() {
        let text: RawLineText = serde_json::from_str(r#""Just words.""#).expect("line text");
        assert_eq!(text.to_rich_text().segments().len(), 1);
    }

    #[test]
    fn document_schema_describes_the_document() {
        let schema = serde_json::to_value(document_schema()).expect("schema json");
        let properties = schema
            .get("properties")
            .and_then(|value| value.as_object())
            .expect("schema properties");
        for key in ["roles", "rooms", "nouns", "conversations", "lines"] {
            assert!(properties.contains_key(key), "schema missing {key}");
        }
    }
}
