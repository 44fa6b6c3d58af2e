//! Wire types for the generation endpoint.

use serde::{Deserialize, Serialize};

/// Request body: the user-supplied source text, opaque to this client.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    /// Source text to convert into a diagram description.
    pub code: &'a str,
}

/// Response body from the generation endpoint.
///
/// The service may omit `mermaid_syntax` entirely or send an empty string;
/// both mean "nothing to render". Other fields (the service also sends an
/// `error` field on its own failures) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Diagram description in Mermaid syntax, if the service produced one.
    #[serde(default)]
    pub mermaid_syntax: Option<String>,
}

impl GenerateResponse {
    /// The diagram description, treating an empty string like an absent
    /// field (the endpoint's JS-facing contract is falsy-based).
    #[must_use]
    pub fn syntax(&self) -> Option<&str> {
        self.mermaid_syntax.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_serializes_code_key() {
        let body = serde_json::to_string(&GenerateRequest { code: "x = 1" }).unwrap();
        assert_eq!(body, r#"{"code":"x = 1"}"#);
    }

    #[test]
    fn test_response_with_syntax() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"mermaid_syntax":"graph TD\nA --> B"}"#).unwrap();
        assert_eq!(response.syntax(), Some("graph TD\nA --> B"));
    }

    #[test]
    fn test_response_missing_field_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.syntax(), None);
    }

    #[test]
    fn test_response_empty_string_is_empty() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"mermaid_syntax":""}"#).unwrap();
        assert_eq!(response.syntax(), None);
    }

    #[test]
    fn test_response_null_is_empty() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"mermaid_syntax":null}"#).unwrap();
        assert_eq!(response.syntax(), None);
    }

    #[test]
    fn test_response_whitespace_counts_as_present() {
        // Falsy semantics: only absent/empty collapse to the empty outcome.
        let response: GenerateResponse =
            serde_json::from_str(r#"{"mermaid_syntax":"  "}"#).unwrap();
        assert_eq!(response.syntax(), Some("  "));
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"error":"oops","mermaid_syntax":"graph TD"}"#).unwrap();
        assert_eq!(response.syntax(), Some("graph TD"));
    }
}
