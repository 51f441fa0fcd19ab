//! Normalized resource locations used as response-log keys.

use std::fmt::{Display, Formatter};

/// Normalized resource location derived from a URL.
///
/// Normalization drops the fragment and query parts and trims a trailing
/// slash, so reads and writes against the same resource share one cache key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceSpecification {
    location: String,
}

impl ResourceSpecification {
    pub fn new(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or(url);
        let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
        let location = without_query.trim_end_matches('/').to_string();
        Self { location }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Display for ResourceSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location)
    }
}
