//! ID generation utilities.

use ulid::Ulid;
use uuid::Uuid;

/// ID generator for subscription operations and request correlation.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new ULID-based ID, used as a subscription operation id.
    ///
    /// ULIDs are lexicographically sortable, which keeps log lines for a
    /// connection's subscriptions in start order.
    #[must_use]
    pub fn generate(&self) -> String {
        Ulid::new().to_string().to_lowercase()
    }

    /// Generate a random UUID v4 for the `x-request-id` header.
    #[must_use]
    pub fn generate_request_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
