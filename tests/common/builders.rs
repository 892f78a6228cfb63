use cors_gate::constants::method;
use cors_gate::{
    AllowedMethods, AllowedOrigins, CorsDecision, CorsGate, CorsPolicy, HeaderNames,
    RequestContext,
};

#[derive(Default)]
pub struct GateBuilder {
    credentials: Option<bool>,
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<HeaderNames>,
    exposed_headers: Option<HeaderNames>,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = Some(AllowedMethods::parse(methods).expect("standard methods"));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(HeaderNames::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(HeaderNames::list(headers));
        self
    }

    pub fn policy(self) -> CorsPolicy {
        let CorsPolicy {
            allow_credentials: default_credentials,
            allowed_origins: default_origins,
            allowed_methods: default_methods,
            allowed_headers: default_allowed_headers,
            exposed_headers: default_exposed_headers,
        } = CorsPolicy::default();

        CorsPolicy {
            allow_credentials: self.credentials.unwrap_or(default_credentials),
            allowed_origins: self.origins.unwrap_or(default_origins),
            allowed_methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
        }
    }

    pub fn build(self) -> CorsGate {
        CorsGate::new(self.policy())
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, gate: &CorsGate) -> CorsDecision {
        let RequestBuilder { method, origin } = self;
        gate.evaluate(&RequestContext::new(&method, origin.as_deref()))
    }
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}
