//! Correlation handles binding requests to observing UI state.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Cheap cloneable handle correlating a transport request with the UI state
/// that should observe its result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregatorHandle {
    id: Uuid,
}

impl AggregatorHandle {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for AggregatorHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for AggregatorHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
