use crate::constants::origin::{NULL, WILDCARD};
use crate::util::equals_ignore_case;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use thiserror::Error;

/// `http(s)://[www.]host.tld[:port][/path][?query]`, `*` or `null`.
static ORIGIN_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:\*|null|https?://(?:www\.)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,63}(?::[0-9]{1,5})?(?:/[^?#\s]*)?(?:\?[^#\s]*)?)$",
    )
    .expect("origin grammar is a valid regex")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a URL origin, `*` or `null`")]
pub struct OriginError(pub String);

/// Returns whether `value` is an acceptable allow-list entry.
pub fn is_valid_origin(value: &str) -> bool {
    ORIGIN_GRAMMAR.is_match(value)
}

/// Ordered allow-list of origins.
///
/// The number of entries decides how a request origin is resolved, see
/// [`AllowedOrigins::resolve`]. Entries are never deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    entries: Vec<String>,
}

impl AllowedOrigins {
    /// Builds the list without validating entries.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn any() -> Self {
        Self::list([WILDCARD])
    }

    /// Builds the list, rejecting the first entry that fails the origin grammar.
    pub fn parse<I, S>(values: I) -> Result<Self, OriginError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        for value in values {
            let value = value.into();
            if !is_valid_origin(&value) {
                return Err(OriginError(value));
            }
            entries.push(value);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the `Access-Control-Allow-Origin` value for `request_origin`.
    ///
    /// A single entry is echoed verbatim without looking at the request
    /// origin. With several entries the request origin is echoed when it
    /// equals one of them case-insensitively; otherwise, and for an empty
    /// list, the result is empty.
    pub fn resolve(&self, request_origin: &str) -> String {
        match self.entries.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            entries => {
                if entries
                    .iter()
                    .any(|entry| equals_ignore_case(entry, request_origin))
                {
                    request_origin.to_string()
                } else {
                    String::new()
                }
            }
        }
    }
}

/// Whether a resolved allow-origin value defeats origin-keyed caching.
pub(crate) fn requires_vary(resolved_origin: &str) -> bool {
    resolved_origin.eq_ignore_ascii_case(WILDCARD) || resolved_origin.eq_ignore_ascii_case(NULL)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
