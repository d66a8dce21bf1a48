/// Returns the trimmed string if it has any non-whitespace content.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Returns an owned copy of an optional string, or an empty string.
pub fn or_empty(s: Option<&str>) -> String {
    s.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \n\t")), None);
        assert_eq!(non_blank(Some("  render ")), Some("render"));
    }

    #[test]
    fn test_or_empty() {
        assert_eq!(or_empty(None), "");
        assert_eq!(or_empty(Some(" App.js ")), " App.js ");
    }
}
