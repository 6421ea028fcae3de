use serde::{Deserialize, Serialize};

/// Upper bound on the number of flights a catalogue holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Maximum number of flights. Adding beyond it fails with `CapacityExceeded`.
    pub capacity: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl CatalogueConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}
