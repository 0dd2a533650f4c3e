//! Name transformation primitives
//!
//! Case conversion and prefix/postfix stripping used for controller and
//! action segments. Matching is ordinal; the first candidate in list order
//! wins, so configuration order matters.

/// Convert PascalCase/camelCase to lowercase hyphen-separated form.
///
/// A hyphen is inserted before every uppercase letter that follows a
/// lowercase letter, then the whole string is lowercased:
/// `"UserInfo"` becomes `"user-info"`, `"Get"` becomes `"get"`.
/// Single-character and empty strings pass through unchanged.
pub fn to_kebab_case(name: &str) -> String {
    if name.chars().nth(1).is_none() {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_is_lowercase = false;
    for ch in name.chars() {
        if ch.is_uppercase() && prev_is_lowercase {
            result.push('-');
        }
        prev_is_lowercase = ch.is_lowercase();
        for lower in ch.to_lowercase() {
            result.push(lower);
        }
    }
    result
}

/// Remove the first matching candidate suffix, ordinal comparison.
///
/// Blank candidates are skipped. Returns `name` unchanged when nothing
/// matches or the candidate list is empty.
pub fn strip_suffix<'a, S: AsRef<str>>(name: &'a str, candidates: &[S]) -> &'a str {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        if let Some(stripped) = name.strip_suffix(candidate) {
            return stripped;
        }
    }
    name
}

/// Remove the first matching candidate prefix, ordinal comparison.
pub fn strip_prefix<'a, S: AsRef<str>>(name: &'a str, candidates: &[S]) -> &'a str {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        if let Some(stripped) = name.strip_prefix(candidate) {
            return stripped;
        }
    }
    name
}

/// Remove the first matching candidate prefix, ASCII case-insensitive.
///
/// Verb-prefix matching is case-insensitive, so stripping has to be too.
pub fn strip_prefix_ignore_case<'a, S: AsRef<str>>(name: &'a str, candidates: &[S]) -> &'a str {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        if starts_with_ignore_case(name, candidate) {
            return &name[candidate.len()..];
        }
    }
    name
}

/// ASCII case-insensitive `starts_with`
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Remove one trailing `"Async"` from an action name.
///
/// The host framework the original design targeted drops this suffix before
/// conventions run (`GetAsync` resolves as `Get`); it is not configurable.
pub fn trim_async_suffix(name: &str) -> &str {
    name.strip_suffix("Async").unwrap_or(name)
}
