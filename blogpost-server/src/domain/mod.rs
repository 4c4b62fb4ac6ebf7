pub(crate) mod error;
pub(crate) mod post;
pub(crate) mod user;

/// `"{first} {last}"` with surrounding whitespace removed, so a missing part leaves no gap.
pub(crate) fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::display_name;

    #[test]
    fn display_name_joins_both_parts() {
        assert_eq!(display_name(Some("Ann"), Some("Lee")), "Ann Lee");
    }

    #[test]
    fn display_name_trims_missing_parts() {
        assert_eq!(display_name(None, Some("Lee")), "Lee");
        assert_eq!(display_name(Some("Ann"), None), "Ann");
        assert_eq!(display_name(None, None), "");
    }
}
