use crate::constants::method;
use crate::util::join_header_values;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the nine standard HTTP methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Connect,
        HttpMethod::Options,
        HttpMethod::Trace,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => method::GET,
            HttpMethod::Head => method::HEAD,
            HttpMethod::Post => method::POST,
            HttpMethod::Put => method::PUT,
            HttpMethod::Delete => method::DELETE,
            HttpMethod::Connect => method::CONNECT,
            HttpMethod::Options => method::OPTIONS,
            HttpMethod::Trace => method::TRACE,
            HttpMethod::Patch => method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a standard HTTP method")]
pub struct MethodError(pub String);

impl FromStr for HttpMethod {
    type Err = MethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| MethodError(value.to_string()))
    }
}

/// Insertion-ordered set of methods emitted in `Access-Control-Allow-Methods`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedMethods(IndexSet<HttpMethod>);

impl AllowedMethods {
    pub fn new<I>(methods: I) -> Self
    where
        I: IntoIterator<Item = HttpMethod>,
    {
        Self(methods.into_iter().collect())
    }

    /// Parses method names case-insensitively, failing on the first name
    /// outside the standard set.
    pub fn parse<I, S>(values: I) -> Result<Self, MethodError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .map(|value| value.as_ref().parse::<HttpMethod>())
            .collect::<Result<IndexSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, method: HttpMethod) -> bool {
        self.0.contains(&method)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.0.iter().copied()
    }

    pub fn header_value(&self) -> String {
        join_header_values(self.0.iter().map(HttpMethod::as_str))
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
