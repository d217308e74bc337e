//! API error types for the Buycoins GraphQL client.

use serde::Deserialize;
use thiserror::Error;

/// API-specific error type for the Buycoins GraphQL client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client was built without an endpoint (unrecognized environment)
    #[error("No endpoint configured: environment is unset")]
    NoEndpoint,

    /// Credentials rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server-side error (5xx)
    #[error("Server error {0}: {1}")]
    ServerError(u16, String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),

    /// The remote answered with a GraphQL `errors` array
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    /// Response body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// The remote returned an empty sequence where one element was required
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Invalid parameter provided to the client builder
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether the request never produced a server response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_) | ApiError::NoEndpoint)
    }

    /// GraphQL errors reported by the remote, if this is a GraphQL error.
    pub fn graphql_errors(&self) -> Option<&[GraphQlError]> {
        match self {
            ApiError::GraphQl(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// One entry of a GraphQL response's `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub locations: Option<Vec<GraphQlLocation>>,
}

/// Source position of a GraphQL error within the request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GraphQlLocation {
    pub line: u32,
    pub column: u32,
}

fn join_messages(errors: &[GraphQlError]) -> String {
    if errors.is_empty() {
        return "unknown error".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_display_joins_messages() {
        let err = ApiError::GraphQl(vec![
            GraphQlError {
                message: "Order not found".to_string(),
                path: None,
                locations: None,
            },
            GraphQlError {
                message: "Invalid pair".to_string(),
                path: None,
                locations: None,
            },
        ]);
        assert_eq!(err.to_string(), "GraphQL error: Order not found; Invalid pair");
        assert_eq!(err.graphql_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_graphql_error_deserialize() {
        let json = r#"{
            "message": "Argument \"side\" has invalid value",
            "path": ["getProOrders"],
            "locations": [{"line": 2, "column": 3}]
        }"#;
        let err: GraphQlError = serde_json::from_str(json).unwrap();
        assert_eq!(err.path, Some(vec![serde_json::json!("getProOrders")]));
        assert_eq!(err.locations, Some(vec![GraphQlLocation { line: 2, column: 3 }]));
    }

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::NoEndpoint.is_transport());
        assert!(!ApiError::EmptyResult("getBalances".to_string()).is_transport());
        assert!(!ApiError::GraphQl(vec![]).is_transport());
    }
}
