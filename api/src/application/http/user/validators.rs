use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Partial update payload. A field left out keeps its stored value.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(length(min = 2, max = 8, message = "language must be a short code like 'en' or 'vi'"))]
    pub language: Option<String>,
}
