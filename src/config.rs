//! Resolution of a [`CorsPolicy`] from init parameters.
//!
//! Resolution never fails. A value that does not validate is reported as a
//! [`ConfigError`], logged, and the affected field keeps the value it had in
//! the policy being replaced.

use crate::allowed_methods::AllowedMethods;
use crate::constants::param;
use crate::header_names::HeaderNames;
use crate::origin::AllowedOrigins;
use crate::policy::CorsPolicy;
use crate::util::split_list;
use indexmap::IndexMap;
use thiserror::Error;

/// Named init parameters in declaration order.
pub type InitParams = IndexMap<String, String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{key}`: `{value}` is not a URL origin, `*` or `null`")]
    InvalidOrigin { key: String, value: String },
    #[error("`{key}`: `{value}` is not a standard HTTP method")]
    UnknownMethod { key: String, value: String },
    #[error("`{key}`: `{value}` is not `true` or `false`")]
    InvalidBoolean { key: String, value: String },
    #[error("`{key}`: list `{value}` contains an empty entry")]
    EmptyEntry { key: String, value: String },
}

impl ConfigError {
    pub fn key(&self) -> &str {
        match self {
            ConfigError::InvalidOrigin { key, .. }
            | ConfigError::UnknownMethod { key, .. }
            | ConfigError::InvalidBoolean { key, .. }
            | ConfigError::EmptyEntry { key, .. } => key,
        }
    }
}

/// A resolved policy together with the diagnostics recorded on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub policy: CorsPolicy,
    pub diagnostics: Vec<ConfigError>,
}

/// Where a gate's policy comes from.
#[derive(Debug, Clone)]
pub enum PolicySource {
    /// Parameters handed to the gate at initialization.
    InitParams(InitParams),
    /// A policy injected by the host application's own configuration system.
    External(CorsPolicy),
}

impl PolicySource {
    pub fn resolve(self, current: &CorsPolicy) -> Resolution {
        match self {
            PolicySource::InitParams(params) => resolve_policy(current, &params),
            PolicySource::External(policy) => {
                tracing::debug!("using externally configured cors policy");
                Resolution {
                    policy,
                    diagnostics: Vec::new(),
                }
            }
        }
    }
}

/// Builds a policy from `params`, starting from `current`.
///
/// Empty `params` means the policy was configured elsewhere and `current` is
/// returned untouched.
pub fn resolve_policy(current: &CorsPolicy, params: &InitParams) -> Resolution {
    if params.is_empty() {
        tracing::debug!("no init parameters, keeping externally configured cors policy");
        return Resolution {
            policy: current.clone(),
            diagnostics: Vec::new(),
        };
    }

    let mut resolver = Resolver::new(current.clone());
    resolver.credentials(params.get(param::ALLOW_CREDENTIALS));

    for (key, value) in params {
        match key.as_str() {
            param::ALLOW_CREDENTIALS => {}
            param::ALLOW_ORIGIN => resolver.origins(key, value),
            param::ALLOW_METHODS => resolver.methods(key, value),
            param::ALLOW_HEADERS => {
                if let Some(names) = resolver.header_names(key, value) {
                    resolver.policy.allowed_headers = names;
                }
            }
            param::EXPOSE_HEADERS => {
                if let Some(names) = resolver.header_names(key, value) {
                    resolver.policy.exposed_headers = names;
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown cors init parameter"),
        }
    }

    resolver.finish()
}

struct Resolver {
    policy: CorsPolicy,
    diagnostics: Vec<ConfigError>,
}

impl Resolver {
    fn new(policy: CorsPolicy) -> Self {
        Self {
            policy,
            diagnostics: Vec::new(),
        }
    }

    fn record(&mut self, error: ConfigError) {
        tracing::warn!(
            key = error.key(),
            error = %error,
            "invalid cors init parameter, keeping previous value"
        );
        self.diagnostics.push(error);
    }

    fn credentials(&mut self, value: Option<&String>) {
        let allow_credentials = match value.map(|value| value.trim()) {
            None => false,
            Some(value) if value.eq_ignore_ascii_case("true") => true,
            Some(value) if value.eq_ignore_ascii_case("false") => false,
            Some(value) => {
                self.record(ConfigError::InvalidBoolean {
                    key: param::ALLOW_CREDENTIALS.to_string(),
                    value: value.to_string(),
                });
                false
            }
        };
        self.policy.allow_credentials = allow_credentials;
    }

    fn origins(&mut self, key: &str, value: &str) {
        let Some(entries) = self.entries(key, value) else {
            return;
        };
        match AllowedOrigins::parse(entries) {
            Ok(origins) => self.policy.allowed_origins = origins,
            Err(err) => self.record(ConfigError::InvalidOrigin {
                key: key.to_string(),
                value: err.0,
            }),
        }
    }

    fn methods(&mut self, key: &str, value: &str) {
        let Some(entries) = self.entries(key, value) else {
            return;
        };
        match AllowedMethods::parse(entries) {
            Ok(methods) => self.policy.allowed_methods = methods,
            Err(err) => self.record(ConfigError::UnknownMethod {
                key: key.to_string(),
                value: err.0,
            }),
        }
    }

    fn header_names(&mut self, key: &str, value: &str) -> Option<HeaderNames> {
        self.entries(key, value).map(HeaderNames::list)
    }

    /// Splits a list value. A blank value is the empty list; an empty entry
    /// inside a non-empty list fails the whole field.
    fn entries<'v>(&mut self, key: &str, value: &'v str) -> Option<Vec<&'v str>> {
        if value.trim().is_empty() {
            return Some(Vec::new());
        }

        let entries = split_list(value);
        if entries.iter().any(|entry| entry.trim().is_empty()) {
            self.record(ConfigError::EmptyEntry {
                key: key.to_string(),
                value: value.to_string(),
            });
            return None;
        }
        Some(entries)
    }

    fn finish(self) -> Resolution {
        Resolution {
            policy: self.policy,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
