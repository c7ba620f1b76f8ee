//! Whitespace trimming and prefix/suffix stripping

/// Remove leading and trailing whitespace, including byte order marks
pub fn trim(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

/// Remove exactly one leading `prefix` from `input`, if present
pub fn remove_prefix(input: &str, prefix: &str) -> String {
    input.strip_prefix(prefix).unwrap_or(input).to_string()
}

/// Remove exactly one trailing `suffix` from `input`, if present
pub fn remove_suffix(input: &str, suffix: &str) -> String {
    input.strip_suffix(suffix).unwrap_or(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  user_name \n\t"), "user_name");
        assert_eq!(trim("inner  space"), "inner  space");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_trim_strips_byte_order_mark() {
        assert_eq!(trim("\u{feff}ab "), "ab");
        assert_eq!(trim("\u{a0}name\u{2003}"), "name");
        assert_eq!(trim("a\u{feff}b"), "a\u{feff}b");
    }

    #[test]
    fn test_remove_prefix() {
        assert_eq!(remove_prefix("getUserName", "get"), "UserName");
        assert_eq!(remove_prefix("getget", "get"), "get");
        assert_eq!(remove_prefix("setUserName", "get"), "setUserName");
        assert_eq!(remove_prefix("Get", "get"), "Get");
        assert_eq!(remove_prefix("name", ""), "name");
    }

    #[test]
    fn test_remove_suffix() {
        assert_eq!(remove_suffix("UserEntity", "Entity"), "User");
        assert_eq!(remove_suffix("idid", "id"), "id");
        assert_eq!(remove_suffix("UserDto", "Entity"), "UserDto");
        assert_eq!(remove_suffix("name", ""), "name");
    }
}
