use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DatabaseHealthStatus {
    pub connected: bool,
    pub latency_ms: u64,
}
