use crate::allowed_methods::AllowedMethods;
use crate::header_names::HeaderNames;
use crate::origin::AllowedOrigins;

/// Resolved CORS configuration.
///
/// The default policy allows nothing: credentials are off and every list is
/// empty, so each emitted header carries an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_credentials: bool,
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: HeaderNames,
    pub exposed_headers: HeaderNames,
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
