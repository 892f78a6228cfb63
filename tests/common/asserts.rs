use cors_gate::{CorsDecision, Headers};

pub fn assert_forward(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Forward { headers } => headers,
        other => panic!("expected forward decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Preflight { headers } => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}
