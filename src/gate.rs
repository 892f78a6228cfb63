use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::{HeaderCollection, Headers};
use crate::origin::requires_vary;
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;

/// CORS policy gate that evaluates requests against a [`CorsPolicy`].
///
/// The gate holds no mutable state; share it behind an `Arc`, or behind
/// [`crate::SharedGate`] when the policy can be reloaded.
#[derive(Debug)]
pub struct CorsGate {
    policy: CorsPolicy,
}

impl CorsGate {
    pub fn new(policy: CorsPolicy) -> Self {
        tracing::info!(
            allow_credentials = policy.allow_credentials,
            origins = policy.allowed_origins.len(),
            methods = %policy.allowed_methods.header_value(),
            "cors gate initialized"
        );
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        evaluate(request.origin_or_empty(), request.method, &self.policy)
    }

    /// Runs the gate as a pipeline stage.
    ///
    /// The CORS headers are written into `response_headers` first. For a
    /// preflight `next` is dropped without being called and `None` is
    /// returned; otherwise `next` runs and its output is returned.
    pub fn filter<F, R>(
        &self,
        request: &RequestContext<'_>,
        response_headers: &mut Headers,
        next: F,
    ) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        let decision = self.evaluate(request);
        decision.apply_to(response_headers);

        if decision.is_short_circuit() {
            return None;
        }
        Some(next())
    }
}

/// Computes the CORS headers for one request and whether it is a preflight.
///
/// `origin` is the `Origin` header value, empty when absent. The function is
/// total: a disallowed origin yields an empty `Access-Control-Allow-Origin`.
pub fn evaluate(origin: &str, request_method: &str, policy: &CorsPolicy) -> CorsDecision {
    let resolved_origin = policy.allowed_origins.resolve(origin);
    let vary = requires_vary(&resolved_origin);

    let mut headers = HeaderCollection::new();
    headers.push(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        policy.allow_credentials.to_string(),
    );
    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, resolved_origin.as_str());
    headers.push(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        policy.allowed_methods.header_value(),
    );
    headers.push(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        policy.allowed_headers.header_value(),
    );
    headers.push(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        policy.exposed_headers.header_value(),
    );
    if vary {
        headers.add_vary(header::ORIGIN);
    }

    let preflight = request_method.eq_ignore_ascii_case(method::OPTIONS);
    tracing::trace!(
        origin,
        method = request_method,
        resolved_origin = %resolved_origin,
        preflight,
        "cors request evaluated"
    );

    let headers = headers.into_headers();
    if preflight {
        CorsDecision::Preflight { headers }
    } else {
        CorsDecision::Forward { headers }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
