/// The parts of an incoming request the gate looks at.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    /// The `Origin` header value, empty when the header is absent.
    pub fn origin_or_empty(&self) -> &'a str {
        self.origin.unwrap_or_default()
    }
}
