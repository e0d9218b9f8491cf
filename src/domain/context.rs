//! Operation Context
//!
//! Contains metadata about the current request for tracing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for an operation, threaded from the HTTP boundary into the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationContext {
    /// Correlation ID for request tracing (the `x-request-id` header)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl OperationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            correlation_id: None,
        }
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}
