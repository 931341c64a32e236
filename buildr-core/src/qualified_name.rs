use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Fully qualified name of a declared type, e.g. `com.example.Person`.
///
/// Equality and ordering compare the package first, then the simple name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct QualifiedName {
    package: Cow<'static, str>,
    simple_name: Cow<'static, str>,
}

impl QualifiedName {
    pub fn of(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: Cow::Owned(package.into()),
            simple_name: Cow::Owned(simple_name.into()),
        }
    }

    /// Build a name from string literals, usable in `const` items.
    pub const fn from_static(package: &'static str, simple_name: &'static str) -> Self {
        Self {
            package: Cow::Borrowed(package),
            simple_name: Cow::Borrowed(simple_name),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.simple_name)
        } else {
            write!(f, "{}.{}", self.package, self.simple_name)
        }
    }
}

/// Error returned when a dotted name is not a valid qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQualifiedNameError {
    #[error("qualified name is empty")]
    Empty,
    #[error("'{name}' has an empty segment")]
    EmptySegment { name: String },
    #[error("'{segment}' in '{name}' is not a valid identifier")]
    InvalidSegment { name: String, segment: String },
}

impl FromStr for QualifiedName {
    type Err = ParseQualifiedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseQualifiedNameError::Empty);
        }
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(ParseQualifiedNameError::EmptySegment {
                    name: s.to_string(),
                });
            }
            if !is_identifier(segment) {
                return Err(ParseQualifiedNameError::InvalidSegment {
                    name: s.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(match s.rsplit_once('.') {
            Some((package, simple_name)) => Self::of(package, simple_name),
            None => Self::of("", s),
        })
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = ParseQualifiedNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for QualifiedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let name = QualifiedName::of("com.fasterxml.jackson.annotation", "JsonProperty");
        assert_eq!(
            name.to_string(),
            "com.fasterxml.jackson.annotation.JsonProperty"
        );
        assert_eq!(QualifiedName::of("", "Foo").to_string(), "Foo");
    }

    #[test]
    fn test_static_equals_owned() {
        const STATIC: QualifiedName = QualifiedName::from_static("java.util", "Objects");
        assert_eq!(STATIC, QualifiedName::of("java.util", "Objects"));
    }

    #[test]
    fn test_ordering() {
        let a = QualifiedName::of("a.b", "Z");
        let b = QualifiedName::of("a.c", "A");
        let c = QualifiedName::of("a.c", "B");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_from_str() {
        let name: QualifiedName = "com.example.Person".parse().unwrap();
        assert_eq!(name.package(), "com.example");
        assert_eq!(name.simple_name(), "Person");

        let name: QualifiedName = "Person".parse().unwrap();
        assert_eq!(name.package(), "");
        assert_eq!(name.simple_name(), "Person");
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "".parse::<QualifiedName>(),
            Err(ParseQualifiedNameError::Empty)
        );
        assert!(matches!(
            "com..Person".parse::<QualifiedName>(),
            Err(ParseQualifiedNameError::EmptySegment { .. })
        ));
        assert!(matches!(
            "com.example.".parse::<QualifiedName>(),
            Err(ParseQualifiedNameError::EmptySegment { .. })
        ));
        assert!(matches!(
            "com.1example.Person".parse::<QualifiedName>(),
            Err(ParseQualifiedNameError::InvalidSegment { .. })
        ));
        assert!(matches!(
            "com.example.Per son".parse::<QualifiedName>(),
            Err(ParseQualifiedNameError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_serde() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            name: QualifiedName,
        }
        let holder: Holder = toml::from_str(r#"name = "java.util.Objects""#).unwrap();
        assert_eq!(holder.name, QualifiedName::of("java.util", "Objects"));
        let out = toml::to_string(&holder).unwrap();
        assert_eq!(out.trim(), r#"name = "java.util.Objects""#);
    }
}
