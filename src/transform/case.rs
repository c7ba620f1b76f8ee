//! Identifier case conversion
//!
//! Casing is Unicode-aware but locale-independent. Word detection for
//! `snake_case` and `camel_case` only looks at ASCII letters, which is what
//! generated identifiers are made of.

/// Convert `userName` to `user_name`
///
/// An underscore is inserted at every lowercase to uppercase boundary and the
/// whole string is then lowercased. Runs of capitals are not split, so an
/// acronym such as `HTTPServer` becomes `httpserver`.
///
/// # Example
/// ```rust
/// use rustf_helpers::transform::snake_case;
/// assert_eq!(snake_case("userName"), "user_name");
/// ```
pub fn snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if ch.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            result.push('_');
        }
        result.push(ch);
        prev = Some(ch);
    }

    result.to_lowercase()
}

/// Convert `user_name` or `user-name` to `userName`
///
/// Every `-` or `_` directly followed by a lowercase letter is removed and the
/// letter uppercased. Everything else is left as it is.
pub fn camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' || ch == '_' {
            if let Some(next) = chars.next_if(|c| c.is_ascii_lowercase()) {
                result.push(next.to_ascii_uppercase());
                continue;
            }
        }
        result.push(ch);
    }

    result
}

/// Convert `user_name`, `user-name` or `user name` to `UserName`
///
/// The input is split into words on every run of characters that are not
/// alphanumeric (underscores count as separators). Each word gets its first
/// character uppercased and the rest lowercased, and the words are joined
/// without a separator.
pub fn pascal_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            let mut out: String = chars
                .next()
                .into_iter()
                .flat_map(char::to_uppercase)
                .collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        })
        .collect()
}

/// Uppercase the first character only
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character only
pub fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}
