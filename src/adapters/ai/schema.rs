//! Structured-output schema for the analysis response.
//!
//! The response shape is declared once, as typed data, and attached to
//! every generation request; the serde types in `domain::assessment` are
//! the parsing side of the same contract. A test walks the declared shape
//! and parses the resulting sample through the domain types, keeping the
//! two sides in lock-step.

use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// OpenAPI-style value kinds understood by the structured-output API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Integer,
}

/// One node of the declared response shape.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: SchemaKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Object properties in declaration order.
    #[serde(serialize_with = "entries_as_map", skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<(&'static str, SchemaNode)>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
}

impl SchemaNode {
    /// An object with the given properties, all of `required` mandatory.
    pub fn object(properties: Vec<(&'static str, SchemaNode)>, required: Vec<&'static str>) -> Self {
        Self {
            kind: SchemaKind::Object,
            description: None,
            properties: Some(properties),
            items: None,
            required: Some(required),
        }
    }

    /// An array of the given item shape.
    pub fn array(items: SchemaNode) -> Self {
        Self {
            kind: SchemaKind::Array,
            description: None,
            properties: None,
            items: Some(Box::new(items)),
            required: None,
        }
    }

    /// A described string leaf.
    pub fn string(description: &'static str) -> Self {
        Self {
            kind: SchemaKind::String,
            description: Some(description),
            properties: None,
            items: None,
            required: None,
        }
    }

    /// A described integer leaf.
    pub fn integer(description: &'static str) -> Self {
        Self {
            kind: SchemaKind::Integer,
            description: Some(description),
            properties: None,
            items: None,
            required: None,
        }
    }
}

fn entries_as_map<S>(
    entries: &Option<Vec<(&'static str, SchemaNode)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let entries = entries.as_deref().unwrap_or(&[]);
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, node) in entries {
        map.serialize_entry(key, node)?;
    }
    map.end()
}

/// The declared shape of the analysis response.
///
/// Field names match the serde renames on [`crate::domain::assessment::AnalysisResult`]
/// and [`crate::domain::assessment::Recommendation`].
pub static ANALYSIS_RESPONSE_SCHEMA: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::object(
        vec![
            (
                "summary",
                SchemaNode::string(
                    "High-level executive summary, in Chinese, of the recommendation strategy.",
                ),
            ),
            (
                "recommendations",
                SchemaNode::array(SchemaNode::object(
                    vec![
                        (
                            "name",
                            SchemaNode::string(
                                "Database product name, e.g. OceanBase, TiDB, openGauss, PolarDB.",
                            ),
                        ),
                        ("score", SchemaNode::integer("Suitability score from 0 to 100.")),
                        (
                            "matchReason",
                            SchemaNode::string(
                                "Detailed explanation, in Chinese, of why this product fits.",
                            ),
                        ),
                        (
                            "pros",
                            SchemaNode::array(SchemaNode::string("Key advantage, in Chinese.")),
                        ),
                        (
                            "cons",
                            SchemaNode::array(SchemaNode::string("Potential drawback, in Chinese.")),
                        ),
                        (
                            "deploymentAdvice",
                            SchemaNode::string(
                                "High-availability and deployment advice, in Chinese.",
                            ),
                        ),
                        (
                            "xinchuangFit",
                            SchemaNode::string(
                                "Compatibility analysis for domestic hardware (Kunpeng/Hygon) and Xinchuang standards.",
                            ),
                        ),
                    ],
                    vec![
                        "name",
                        "score",
                        "matchReason",
                        "pros",
                        "cons",
                        "deploymentAdvice",
                        "xinchuangFit",
                    ],
                )),
            ),
        ],
        vec!["summary", "recommendations"],
    )
});
