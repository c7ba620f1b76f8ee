//! Regular expression matching and literal replacement

use regex::Regex;

/// Return true iff `pattern` matches anywhere in `target`
///
/// The pattern is compiled on every call. Helper invocations happen at
/// template render frequency, so no compiled-pattern cache is kept.
pub fn is_match(pattern: &str, target: &str) -> Result<bool, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.is_match(target))
}

/// Replace every literal occurrence of `old` in `target` with `new`
///
/// `old` is not a regular expression. An empty `old` matches between every
/// pair of characters, so `replace_all("abc", "", "-")` yields `a-b-c`.
pub fn replace_all(target: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        let mut result = String::with_capacity(target.len() * (new.len() + 1));
        for (i, ch) in target.chars().enumerate() {
            if i > 0 {
                result.push_str(new);
            }
            result.push(ch);
        }
        return result;
    }

    target.replace(old, new)
}
