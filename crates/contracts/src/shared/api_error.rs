use serde::{Deserialize, Serialize};

/// Тело ответа сервера при ошибке: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// Extract the `error` message from a raw response body.
    ///
    /// Returns `None` for empty bodies, non-JSON bodies and JSON without a
    /// string `error` field.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"error":"in use"}"#),
            Some("in use".to_string())
        );
    }

    #[test]
    fn test_unstructured_bodies() {
        assert_eq!(ApiErrorBody::message_from(""), None);
        assert_eq!(ApiErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"nope"}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":42}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"  "}"#), None);
    }
}
