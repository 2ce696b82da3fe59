//! Query string parsing
//!
//! Values are form-decoded (`%xx` escapes and `+` as space). When a key
//! repeats, the first occurrence wins.

use url::form_urlencoded;

/// Look up a single query parameter by name
pub fn get_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_value() {
        assert_eq!(
            get_param(Some("path=%2Fhome%2Fme%2Fmy+notes"), "path").as_deref(),
            Some("/home/me/my notes")
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(get_param(None, "path"), None);
        assert_eq!(get_param(Some("other=1"), "path"), None);
    }

    #[test]
    fn test_empty_and_repeated() {
        assert_eq!(get_param(Some("path="), "path").as_deref(), Some(""));
        assert_eq!(get_param(Some("path=a&path=b"), "path").as_deref(), Some("a"));
    }

    #[test]
    fn test_unicode() {
        assert_eq!(
            get_param(Some("path=%E7%AC%94%E8%AE%B0.md"), "path").as_deref(),
            Some("笔记.md")
        );
    }
}
