//! Body returned by `POST /api/contact`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contact::ValidationFailure;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
pub const VALIDATION_MESSAGE: &str = "Validation error";
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            errors: None,
        }
    }

    pub fn invalid(failure: &ValidationFailure) -> Self {
        Self {
            success: false,
            message: VALIDATION_MESSAGE.to_string(),
            errors: Some(failure.to_error_map()),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: GENERIC_ERROR_MESSAGE.to_string(),
            errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validate;
    use serde_json::json;

    #[test]
    fn wire_shapes() {
        assert_eq!(
            serde_json::to_value(ContactResponse::accepted()).unwrap(),
            json!({ "success": true, "message": SUCCESS_MESSAGE })
        );
        assert_eq!(
            serde_json::to_value(ContactResponse::failed()).unwrap(),
            json!({ "success": false, "message": GENERIC_ERROR_MESSAGE })
        );

        let failure = validate(&json!({
            "name": "John Doe",
            "businessName": "My Shop",
            "phone": "123",
            "message": "I would like a demo please."
        }))
        .unwrap_err();
        let body = serde_json::to_value(ContactResponse::invalid(&failure)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], VALIDATION_MESSAGE);
        assert_eq!(body["errors"].as_object().unwrap().len(), 1);
        assert!(body["errors"]["phone"].is_string());
    }

    #[test]
    fn tolerates_missing_errors_key() {
        let parsed: ContactResponse =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert_eq!(parsed.errors, None);
    }
}
