//! Annotation occurrences as written in the input source.

use std::fmt;

use buildr_core::{ParseQualifiedNameError, QualifiedName};
use serde::Serialize;
use thiserror::Error;

/// One annotation written on a declaration.
///
/// The literal text is captured once, at construction, and rendered back
/// unchanged. Nothing re-derives it from the declaration later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationOccurrence {
    annotation_type: QualifiedName,
    literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationParseError {
    #[error("annotation must start with '@'")]
    MissingAt,
    #[error("invalid annotation type: {0}")]
    InvalidType(#[from] ParseQualifiedNameError),
    #[error("annotation type '{0}' must be fully qualified")]
    Unqualified(String),
    #[error("unbalanced parentheses in annotation arguments")]
    UnbalancedParens,
    #[error("unexpected text after annotation arguments: '{0}'")]
    TrailingText(String),
}

impl AnnotationOccurrence {
    pub fn new(annotation_type: QualifiedName, literal: impl Into<String>) -> Self {
        Self {
            annotation_type,
            literal: literal.into(),
        }
    }

    /// A marker annotation with no arguments, e.g. `@com.example.Marker`.
    pub fn marker(annotation_type: QualifiedName) -> Self {
        let literal = format!("@{}", annotation_type);
        Self::new(annotation_type, literal)
    }

    /// Parse annotation text such as `@com.example.Name("value")`.
    ///
    /// The annotation type must be written fully qualified. Surrounding
    /// whitespace is trimmed; everything else is kept verbatim.
    pub fn parse(text: &str) -> Result<Self, AnnotationParseError> {
        let literal = text.trim();
        let body = literal
            .strip_prefix('@')
            .ok_or(AnnotationParseError::MissingAt)?;

        let (name, args) = match body.find('(') {
            Some(open) => (&body[..open], Some(&body[open..])),
            None => (body, None),
        };
        let annotation_type: QualifiedName = name.trim_end().parse()?;
        if annotation_type.package().is_empty() {
            return Err(AnnotationParseError::Unqualified(
                annotation_type.simple_name().to_string(),
            ));
        }

        if let Some(args) = args {
            let close = matching_paren(args).ok_or(AnnotationParseError::UnbalancedParens)?;
            let trailing = args[close + 1..].trim();
            if !trailing.is_empty() {
                return Err(AnnotationParseError::TrailingText(trailing.to_string()));
            }
        }

        Ok(Self::new(annotation_type, literal))
    }

    pub fn annotation_type(&self) -> &QualifiedName {
        &self.annotation_type
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn is(&self, annotation_type: &QualifiedName) -> bool {
        &self.annotation_type == annotation_type
    }
}

impl fmt::Display for AnnotationOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Byte offset of the parenthesis closing the one at `args[0]`.
///
/// Parentheses inside string and char literals are ignored.
fn matching_paren(args: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in args.char_indices() {
        if let Some(q) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
