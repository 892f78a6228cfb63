#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Joins values into a single header value: `,` separated, no surrounding
/// whitespace, `""` for an empty input.
pub fn join_header_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            joined.push(',');
        }
        joined.push_str(value.as_ref());
    }
    joined
}

/// Splits a configuration value on `,` optionally followed by a single space.
pub(crate) fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(|part| part.strip_prefix(' ').unwrap_or(part))
        .collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
