//! Naming utilities for entity_naming
//!
//! Pure string conversions between naming conventions. Every function is total
//! over its input, including the empty string.

/// Letter case applied to the whole result of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    /// Apply this case to a string
    pub fn apply(self, name: &str) -> String {
        match self {
            Case::Lower => to_lower(name),
            Case::Upper => to_upper(name),
        }
    }
}

/// Keep a name as is
pub fn identity(name: &str) -> String {
    name.to_string()
}

/// Lowercase every character.
///
/// Uses full Unicode case mapping, so the result may be longer than the input
/// (`İ` lowercases to `i\u{307}`).
pub fn to_lower(name: &str) -> String {
    name.to_lowercase()
}

/// Uppercase every character.
///
/// Uses full Unicode case mapping, so the result may be longer than the input
/// (`ß` uppercases to `SS`).
pub fn to_upper(name: &str) -> String {
    name.to_uppercase()
}

/// Split a camel case name at lower-to-upper boundaries and apply a case.
///
/// A separator is inserted only where a lowercase letter or a digit is
/// directly followed by an uppercase letter, so a run of capitals such as
/// `ID` stays one token and a leading capital never produces a leading
/// separator.
///
/// ```
/// use entity_naming::utils::naming::{camel_to_separated, Case};
///
/// assert_eq!(camel_to_separated("userName", "_", Case::Lower), "user_name");
/// assert_eq!(camel_to_separated("UserOrder", "_", Case::Upper), "USER_ORDER");
/// assert_eq!(camel_to_separated("ID", "_", Case::Lower), "id");
/// ```
pub fn camel_to_separated(name: &str, separator: &str, case: Case) -> String {
    let mut result = String::with_capacity(name.len() + name.len() / 2);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && (p.is_lowercase() || p.is_numeric()) {
                result.push_str(separator);
            }
        }
        result.push(c);
        prev = Some(c);
    }

    case.apply(&result)
}

/// Camel case to lowercase snake case (`userName` -> `user_name`)
pub fn camel_to_lower_underscore(name: &str) -> String {
    camel_to_separated(name, "_", Case::Lower)
}

/// Camel case to uppercase snake case (`userName` -> `USER_NAME`)
pub fn camel_to_upper_underscore(name: &str) -> String {
    camel_to_separated(name, "_", Case::Upper)
}
