//! The node type vocabulary of the pipeline editor.
//!
//! Node `type` tags serialize to/from the camelCase strings the editor
//! emits. [`NodeTypeTag`] additionally supports unknown tags via its
//! `Extension` variant so new editor node kinds never break parsing.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Known node types registered by the pipeline editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// A pipeline input source.
    CustomInput,
    /// A large-language-model invocation.
    Llm,
    /// A pipeline output sink.
    CustomOutput,
    /// A text template with variable interpolation.
    Text,
    /// A branch on a boolean condition.
    Conditional,
    /// An arithmetic operation over numeric inputs.
    Calculator,
    /// A structured data transformation step.
    DataTransform,
    /// A logging side-channel tap.
    Logger,
    /// A fan-in merge of multiple upstream values.
    Merge,
}

/// The `type` field on a node: either a known [`NodeType`] or an
/// extension string.
///
/// Any string that is not one of the registered editor kinds is accepted
/// as [`NodeTypeTag::Extension`] without error — the core treats node
/// types as opaque metadata, so rejection is never correct here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeTypeTag {
    /// A node type recognised by this version of flowdag-core.
    Known(NodeType),
    /// A node type not (yet) registered by the editor vocabulary.
    Extension(String),
}

impl NodeTypeTag {
    /// Returns the camelCase string representation of the tag.
    ///
    /// For known variants this is a `&'static str` with no allocation.
    /// For extension variants the inner `String` is returned by reference.
    pub fn as_str(&self) -> &str {
        match self {
            NodeTypeTag::Known(NodeType::CustomInput) => "customInput",
            NodeTypeTag::Known(NodeType::Llm) => "llm",
            NodeTypeTag::Known(NodeType::CustomOutput) => "customOutput",
            NodeTypeTag::Known(NodeType::Text) => "text",
            NodeTypeTag::Known(NodeType::Conditional) => "conditional",
            NodeTypeTag::Known(NodeType::Calculator) => "calculator",
            NodeTypeTag::Known(NodeType::DataTransform) => "dataTransform",
            NodeTypeTag::Known(NodeType::Logger) => "logger",
            NodeTypeTag::Known(NodeType::Merge) => "merge",
            NodeTypeTag::Extension(s) => s.as_str(),
        }
    }
}

impl AsRef<str> for NodeTypeTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for NodeTypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeTypeTag::Known(t) => t.serialize(serializer),
            NodeTypeTag::Extension(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for NodeTypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeTypeTagVisitor;

        impl de::Visitor<'_> for NodeTypeTagVisitor {
            type Value = NodeTypeTag;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string representing a node type")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(match v {
                    "customInput" => NodeTypeTag::Known(NodeType::CustomInput),
                    "llm" => NodeTypeTag::Known(NodeType::Llm),
                    "customOutput" => NodeTypeTag::Known(NodeType::CustomOutput),
                    "text" => NodeTypeTag::Known(NodeType::Text),
                    "conditional" => NodeTypeTag::Known(NodeType::Conditional),
                    "calculator" => NodeTypeTag::Known(NodeType::Calculator),
                    "dataTransform" => NodeTypeTag::Known(NodeType::DataTransform),
                    "logger" => NodeTypeTag::Known(NodeType::Logger),
                    "merge" => NodeTypeTag::Known(NodeType::Merge),
                    other => NodeTypeTag::Extension(other.to_owned()),
                })
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                match v.as_str() {
                    "customInput" => Ok(NodeTypeTag::Known(NodeType::CustomInput)),
                    "llm" => Ok(NodeTypeTag::Known(NodeType::Llm)),
                    "customOutput" => Ok(NodeTypeTag::Known(NodeType::CustomOutput)),
                    "text" => Ok(NodeTypeTag::Known(NodeType::Text)),
                    "conditional" => Ok(NodeTypeTag::Known(NodeType::Conditional)),
                    "calculator" => Ok(NodeTypeTag::Known(NodeType::Calculator)),
                    "dataTransform" => Ok(NodeTypeTag::Known(NodeType::DataTransform)),
                    "logger" => Ok(NodeTypeTag::Known(NodeType::Logger)),
                    "merge" => Ok(NodeTypeTag::Known(NodeType::Merge)),
                    _ => Ok(NodeTypeTag::Extension(v)),
                }
            }
        }

        deserializer.deserialize_str(NodeTypeTagVisitor)
    }
}
