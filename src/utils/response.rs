use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body
///
/// Format:
/// ```json
/// {
///   "code": "AI_001",
///   "detail": "AI service is not available."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "AI_001")]
    pub code: String,
    /// Human-readable detail message
    #[schema(example = "AI service is not available.")]
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}
