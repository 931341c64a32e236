//! Accessor and property naming rules.

/// Lower-case the first character, e.g. "FirstName" -> "firstName".
///
/// Follows the JavaBeans convention: names whose first two characters are
/// both upper case are returned unchanged ("URL" stays "URL").
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => String::new(),
        (Some(a), Some(b)) if a.is_uppercase() && b.is_uppercase() => s.to_string(),
        (Some(a), _) => a.to_lowercase().chain(s[a.len_utf8()..].chars()).collect(),
    }
}

/// Strip a `get` prefix, or an `is` prefix on boolean accessors.
///
/// Returns `None` when the name does not carry a recognised prefix followed
/// by an upper-case character.
pub fn strip_accessor_prefix(name: &str, is_boolean: bool) -> Option<&str> {
    let rest = name
        .strip_prefix("get")
        .or_else(|| if is_boolean { name.strip_prefix("is") } else { None })?;
    match rest.chars().next() {
        Some(c) if c.is_uppercase() => Some(rest),
        _ => None,
    }
}
