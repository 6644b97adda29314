/// The requested storefront resource does not exist.
#[derive(Debug)]
pub struct NotFound {
    pub resource: String,
}

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not found: {}", self.resource)
    }
}

impl std::error::Error for NotFound {}
