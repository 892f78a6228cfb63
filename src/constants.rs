pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const CONNECT: &str = "CONNECT";
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const TRACE: &str = "TRACE";
}

/// Init parameter keys understood by [`crate::resolve_policy`].
pub mod param {
    pub const ALLOW_CREDENTIALS: &str = "allowCredentials";
    pub const ALLOW_ORIGIN: &str = "allowOrigin";
    pub const ALLOW_METHODS: &str = "allowMethods";
    pub const ALLOW_HEADERS: &str = "allowHeaders";
    pub const EXPOSE_HEADERS: &str = "exposeHeaders";
}

pub mod origin {
    pub const WILDCARD: &str = "*";
    pub const NULL: &str = "null";
}
