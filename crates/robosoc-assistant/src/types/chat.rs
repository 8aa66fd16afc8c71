//! Chat request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Body of `POST /`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's message; absent is treated like empty
    pub message: Option<String>,
}

impl ChatRequest {
    /// Read a request from a decoded JSON body.
    ///
    /// The body must be an object. `message` may be absent, otherwise it must
    /// be a string; `null` and other types are rejected.
    pub fn from_json(body: Value) -> Result<Self> {
        let Value::Object(mut fields) = body else {
            return Err(Error::internal("Request body is not a JSON object"));
        };

        let message = match fields.remove("message") {
            Some(value) => Some(serde_json::from_value::<String>(value)?),
            None => None,
        };

        Ok(Self { message })
    }

    /// The message with surrounding whitespace removed, or `None` if nothing is left
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Successful chat reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Error body shared by 4xx and 5xx replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_message(message: &str) -> ChatRequest {
        ChatRequest::from_json(json!({ "message": message })).unwrap()
    }

    #[test]
    fn missing_message_key_is_none() {
        let request = ChatRequest::from_json(json!({})).unwrap();
        assert!(request.message.is_none());
        assert!(request.trimmed_message().is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let request = ChatRequest::from_json(json!({ "message": "hi", "lang": "en" })).unwrap();
        assert_eq!(request.trimmed_message(), Some("hi"));
    }

    #[test]
    fn whitespace_only_message_is_empty() {
        assert!(with_message("  \n\t ").trimmed_message().is_none());
    }

    #[test]
    fn message_is_trimmed() {
        let request = with_message("  Tell me about RoboWeek \n");
        assert_eq!(request.trimmed_message(), Some("Tell me about RoboWeek"));
    }

    #[test]
    fn null_message_is_rejected() {
        let err = ChatRequest::from_json(json!({ "message": null })).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn non_string_message_is_rejected() {
        let err = ChatRequest::from_json(json!({ "message": 42 })).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [json!(["hi"]), json!([]), json!(null), json!("hi"), json!(3)] {
            let err = ChatRequest::from_json(body.clone()).unwrap_err();
            assert!(matches!(err, Error::Internal(_)), "{} gave {:?}", body, err);
        }
    }
}
