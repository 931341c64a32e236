//! Identifier rules for names written in the manifest.

/// Java reserved words, which cannot name an accessor.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Why `name` is not a valid Java identifier, or `None` if it is.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name is empty"),
        Some(c) if c.is_ascii_digit() => return Some("name starts with a digit"),
        Some(c) if !(c.is_alphabetic() || c == '_' || c == '$') => {
            return Some("name starts with an invalid character");
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name contains an invalid character");
    }
    if JAVA_KEYWORDS.contains(&name) {
        return Some("name is a Java reserved word");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(validate_identifier("getAge"), None);
        assert_eq!(validate_identifier("_x"), None);
        assert_eq!(validate_identifier("$value"), None);
        assert_eq!(validate_identifier("isActive2"), None);
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name is empty"));
        assert_eq!(validate_identifier("2age"), Some("name starts with a digit"));
        assert_eq!(
            validate_identifier("-age"),
            Some("name starts with an invalid character")
        );
        assert_eq!(
            validate_identifier("get-age"),
            Some("name contains an invalid character")
        );
        assert_eq!(
            validate_identifier("class"),
            Some("name is a Java reserved word")
        );
    }
}
