pub mod constants;

mod allowed_methods;
mod config;
mod context;
mod gate;
mod header_names;
mod headers;
mod origin;
mod policy;
mod result;
mod swap;
mod util;

pub use allowed_methods::{AllowedMethods, HttpMethod, MethodError};
pub use config::{ConfigError, InitParams, PolicySource, Resolution, resolve_policy};
pub use context::RequestContext;
pub use gate::{CorsGate, evaluate};
pub use header_names::HeaderNames;
pub use headers::Headers;
pub use origin::{AllowedOrigins, OriginError, is_valid_origin};
pub use policy::CorsPolicy;
pub use result::CorsDecision;
pub use swap::SharedGate;
pub use util::{equals_ignore_case, join_header_values, normalize_lower};
