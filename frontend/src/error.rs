use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Field name -> messages, as returned in a Laravel-style `errors` object.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldMessages,
    },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("unexpected response from the server: {0}")]
    Decode(String),

    #[error("you are not logged in")]
    NotAuthenticated,
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// A body with an `errors` object always becomes [ApiError::Validation], whatever the
    /// status; otherwise 401 maps to [ApiError::Unauthorized] and the rest to
    /// [ApiError::Server]. `default_message` is used when the body has no `message`.
    pub fn from_response(status: u16, body: &str, default_message: &str) -> Self {
        let json = serde_json::from_str::<Value>(body).ok();
        let message = json
            .as_ref()
            .and_then(|json| json.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(default_message)
            .to_string();

        if let Some(errors) = json.as_ref().and_then(|json| json.get("errors")) {
            let errors = field_messages(errors);
            if !errors.is_empty() {
                return ApiError::Validation { message, errors };
            }
        }

        match status {
            401 => ApiError::Unauthorized(message),
            _ => ApiError::Server { status, message },
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Accepts both `{"field": ["msg", ...]}` and `{"field": "msg"}`.
fn field_messages(errors: &Value) -> FieldMessages {
    let Some(object) = errors.as_object() else {
        return FieldMessages::new();
    };

    object
        .iter()
        .filter_map(|(field, messages)| {
            let messages: Vec<String> = match messages {
                Value::String(message) => vec![message.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
                _ => Vec::new(),
            };
            (!messages.is_empty()).then(|| (field.clone(), messages))
        })
        .collect()
}

pub const GENERAL: &str = "general";

/// Inputs of the expense form that render their own errors inline.
pub const FORM_FIELDS: [&str; 5] = ["category_id", "name", "amount", "method", "date"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(FieldMessages);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(GENERAL, message);
        errors
    }

    /// Translate a failed save into what the form shows.
    ///
    /// Validation errors are kept verbatim, anything else becomes a general message, and
    /// an error with no text falls back to "Unknown error".
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::Validation { errors, .. } => Self(errors.clone()),
            other => {
                let message = other.to_string();
                if message.trim().is_empty() {
                    Self::general("Unknown error")
                } else {
                    Self::general(message)
                }
            }
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<String> {
        self.0.get(field).map(|messages| messages.join(", "))
    }

    pub fn general_messages(&self) -> &[String] {
        self.0.get(GENERAL).map(Vec::as_slice).unwrap_or_default()
    }

    /// Errors for keys that have no input among `fields`, e.g. `household_id`.
    pub fn unattached(&self, fields: &[&str]) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .filter(|(field, _)| field.as_str() != GENERAL && !fields.contains(&field.as_str()))
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| (field.as_str(), message.as_str()))
            })
            .collect()
    }

    /// General messages followed by the unattached ones, for the banner above a form.
    pub fn banner(&self, fields: &[&str]) -> Vec<String> {
        self.general_messages()
            .iter()
            .cloned()
            .chain(
                self.unattached(fields)
                    .into_iter()
                    .map(|(field, message)| format!("{field}: {message}")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_kept_per_field() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "amount": ["The amount must be a number.", "The amount must be at least 0."],
                "date": "The date is not a valid date."
            }
        }"#;

        let error = ApiError::from_response(422, body, "Request failed");

        let ApiError::Validation { message, errors } = error else {
            panic!("expected a validation error, got {error:?}");
        };
        assert_eq!(message, "The given data was invalid.");
        assert_eq!(errors["amount"].len(), 2);
        assert_eq!(errors["date"], vec!["The date is not a valid date.".to_string()]);
    }

    #[test]
    fn unauthorized_uses_server_message() {
        let error = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#, "x");

        assert_eq!(error, ApiError::Unauthorized("Unauthenticated.".to_string()));
    }

    #[test]
    fn non_json_body_uses_default_message() {
        let error = ApiError::from_response(500, "<html>oops</html>", "Request failed");

        assert_eq!(
            error,
            ApiError::Server {
                status: 500,
                message: "Request failed".to_string()
            }
        );
    }

    #[test]
    fn empty_errors_object_is_not_a_validation_error() {
        let error = ApiError::from_response(400, r#"{"message":"Bad","errors":{}}"#, "x");

        assert!(matches!(error, ApiError::Server { status: 400, .. }));
    }

    #[test]
    fn form_errors_keep_validation_messages_verbatim() {
        let mut fields = FieldMessages::new();
        fields.insert(
            "amount".to_string(),
            vec!["The amount field is required.".to_string()],
        );
        let error = ApiError::Validation {
            message: "invalid".to_string(),
            errors: fields.clone(),
        };

        let errors = FormErrors::from_error(&error);

        assert_eq!(errors, FormErrors(fields));
        assert_eq!(
            errors.field("amount").as_deref(),
            Some("The amount field is required.")
        );
        assert!(errors.general_messages().is_empty());
    }

    #[test]
    fn other_errors_become_general_messages() {
        let errors = FormErrors::from_error(&ApiError::Network("offline".to_string()));

        assert_eq!(errors.general_messages(), ["network error: offline".to_string()]);
    }

    #[test]
    fn blank_messages_fall_back_to_unknown_error() {
        let errors = FormErrors::from_error(&ApiError::Unauthorized(String::new()));

        assert_eq!(errors.general_messages(), ["Unknown error".to_string()]);
    }

    #[test]
    fn unattached_excludes_form_fields_and_general() {
        let mut errors = FormErrors::general("Something broke");
        errors.add("amount", "bad amount");
        errors.add("household_id", "unknown household");

        assert_eq!(errors.unattached(&FORM_FIELDS), vec![("household_id", "unknown household")]);
    }

    #[test]
    fn registration_errors_stay_attached_to_their_inputs() {
        let body = r#"{
            "message": "The email has already been taken.",
            "errors": {
                "email": ["The email has already been taken."],
                "household_action": ["The selected household action is invalid."]
            }
        }"#;

        let errors = FormErrors::from_error(&ApiError::from_response(422, body, "Registration failed"));

        assert_eq!(errors.field("email").as_deref(), Some("The email has already been taken."));
        assert_eq!(
            errors.banner(&["name", "email", "password"]),
            vec!["household_action: The selected household action is invalid.".to_string()]
        );
    }

    #[test]
    fn banner_leads_with_general_messages() {
        let mut errors = FormErrors::general("Server unavailable");
        errors.add("household_id", "unknown household");
        errors.add("name", "too long");

        assert_eq!(
            errors.banner(&FORM_FIELDS),
            vec![
                "Server unavailable".to_string(),
                "household_id: unknown household".to_string()
            ]
        );
    }
}
