//! Self-rendering fragments of generated source.
//!
//! An [`Excerpt`] records a decision that has already been made (copy this
//! annotation, or synthesize that one) and renders it on demand. Rendering is
//! pure: the same excerpt always produces the same text.

use std::fmt;

use buildr_model::AnnotationOccurrence;
use serde::{Serialize, Serializer};

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    jackson::JSON_PROPERTY,
};

/// A fragment attached to a generated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excerpt {
    /// A user annotation copied verbatim from the source declaration.
    Annotation { literal: String },
    /// A synthesized `@JsonProperty("<property_name>")`.
    JsonProperty { property_name: String },
}

impl Excerpt {
    /// Copy an annotation occurrence, capturing its text now.
    pub fn annotation(occurrence: &AnnotationOccurrence) -> Self {
        Self::Annotation {
            literal: occurrence.literal().to_string(),
        }
    }

    pub fn json_property(property_name: impl Into<String>) -> Self {
        Self::JsonProperty {
            property_name: property_name.into(),
        }
    }

    /// Write this excerpt as one line of the output.
    pub fn add_to(&self, code: &mut CodeBuilder) {
        code.push_line(&self.to_string());
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annotation { literal } => f.write_str(literal),
            Self::JsonProperty { property_name } => write!(
                f,
                "@{}({})",
                JSON_PROPERTY,
                java_string_literal(property_name)
            ),
        }
    }
}

impl Renderable for Excerpt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_string())]
    }
}

impl Serialize for Excerpt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Quote a string as a Java string literal.
pub(crate) fn java_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
