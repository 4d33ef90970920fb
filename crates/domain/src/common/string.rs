//! String inspection utilities.

/// Returns `true` if the string is empty or holds only whitespace.
///
/// # Examples
///
/// ```
/// use guardrail_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" red "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Extension trait for strings providing `is_blank` as a method.
///
/// # Examples
///
/// ```
/// use guardrail_domain::common::StringExt;
///
/// assert!("   ".is_blank());
/// assert!(!"Blue".is_blank());
/// ```
pub trait StringExt {
    /// Returns `true` if this string is empty or whitespace only.
    fn is_blank(&self) -> bool;
}

impl StringExt for str {
    fn is_blank(&self) -> bool {
        is_blank(self)
    }
}

impl StringExt for String {
    fn is_blank(&self) -> bool {
        is_blank(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_empty_string() {
        assert!(is_blank(""));
    }

    #[test]
    fn test_is_blank_whitespace_only() {
        assert!(is_blank(" "));
        assert!(is_blank("\t"));
        assert!(is_blank("\n"));
        assert!(is_blank("   "));
    }

    #[test]
    fn test_is_blank_with_content() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  red  "));
        assert!(!is_blank("Красный"));
    }

    #[test]
    fn test_string_ext_owned_and_borrowed() {
        assert!(String::from(" ").is_blank());
        assert!(!"green".is_blank());
    }
}
