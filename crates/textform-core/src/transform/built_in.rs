//! Built-in transformations
//!
//! Plain functions behind the default registry tags. They are exposed so
//! callers can use them directly or wrap them in their own handlers.
//!
//! Copyright (c) 2025 Textform Team
//! Licensed under the Apache-2.0 license

/// Return the string unchanged
pub fn nop(s: &str) -> String {
    s.to_string()
}

/// Remove leading and trailing Unicode whitespace
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Lowercase the whole string
pub fn downcase(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase the whole string
pub fn upcase(s: &str) -> String {
    s.to_uppercase()
}

/// Uppercase the first character and lowercase the remainder
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize("éCOLE"), "École");
        assert_eq!(capitalize("1ABC"), "1abc");
    }

    #[test]
    fn test_trim_unicode_whitespace() {
        assert_eq!(trim("\u{2003} hi\t\n"), "hi");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(upcase("straße"), "STRASSE");
        assert_eq!(downcase("ÀBC"), "àbc");
        assert_eq!(nop(" as is "), " as is ");
    }
}
