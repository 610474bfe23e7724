use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Term generation request DTO
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TermRequest {
    /// Free-text category the term belongs to
    #[schema(example = "finance")]
    pub category: String,

    /// Caller identifier, recorded in logs only
    #[schema(example = "123456789012345678")]
    pub user_id: String,
}

/// Term generation response DTO
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TermResponse {
    /// Generated term
    #[schema(example = "Photosynthesis")]
    pub term_name: String,

    /// One-line definition
    #[schema(example = "The process by which plants convert light into energy.")]
    pub term_definition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_term_request() {
        // Arrange
        let json = r#"{ "category": "tech", "userId": "42" }"#;

        // Act
        let req: TermRequest = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(req.category, "tech");
        assert_eq!(req.user_id, "42");
    }

    #[test]
    fn should_reject_request_without_user_id() {
        let result: Result<TermRequest, _> = serde_json::from_str(r#"{ "category": "tech" }"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_accept_empty_strings() {
        let req: TermRequest =
            serde_json::from_str(r#"{ "category": "", "userId": "" }"#).unwrap();

        assert!(req.category.is_empty());
        assert!(req.user_id.is_empty());
    }

    #[test]
    fn should_serialize_response_in_camel_case() {
        let res = TermResponse {
            term_name: "Beta".to_string(),
            term_definition: "Volatility relative to the market.".to_string(),
        };

        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["termName"], "Beta");
        assert_eq!(json["termDefinition"], "Volatility relative to the market.");
    }
}
