use crate::headers::{Headers, write_headers};

/// Outcome of evaluating one request against a policy.
///
/// Both variants carry the full set of CORS headers; they only differ in
/// whether the pipeline may continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request: respond with the headers alone, skip the next stage.
    Preflight { headers: Headers },
    /// Any other method: run the next stage and attach the headers to its response.
    Forward { headers: Headers },
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight { headers } | CorsDecision::Forward { headers } => headers,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            CorsDecision::Preflight { headers } | CorsDecision::Forward { headers } => headers,
        }
    }

    pub fn is_short_circuit(&self) -> bool {
        matches!(self, CorsDecision::Preflight { .. })
    }

    /// Writes the decision's headers into an outbound collection, merging
    /// `Vary` with any value already present.
    pub fn apply_to(&self, response_headers: &mut Headers) {
        write_headers(response_headers, self.headers());
    }
}
