/**
 * Post Handler Types
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::backend::middleware::RequestSchema;

/// Body for creating a post or a comment
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct TextRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

impl RequestSchema for TextRequest {
    const FIELDS: &'static [&'static str] = &["text"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_text_is_a_field_error() {
        let request: TextRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        let text_errors = errors.field_errors()["text"];
        assert_eq!(text_errors[0].message.as_deref(), Some("Text is required"));
    }
}
