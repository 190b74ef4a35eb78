//! Translation of `validator` failures into the outward error shape.
//!
//! Every field failure becomes one entry in a field → message map. Field
//! names are normalized to snake_case and messages come from a fixed table
//! keyed on the constraint code, so clients can rely on stable wording.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Convert validation failures into a user-friendly field → message map.
///
/// Only the first failure per field is reported. Unrecognized constraint
/// codes fall back to the error's own message, or "<field> is invalid".
pub fn translate_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let name = to_snake_case(field);
            let message = field_errors
                .first()
                .map(|error| error_message(&name, error))
                .unwrap_or_else(|| format!("{name} is invalid"));
            (name, message)
        })
        .collect()
}

/// Convert camelCase or PascalCase to snake_case.
///
/// A separator is inserted before each interior uppercase letter; the first
/// character is never prefixed. Already-snake_case input passes through.
pub fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    for (i, ch) in input.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() {
            result.push('_');
        }
        result.push(ch.to_ascii_lowercase());
    }
    result
}

fn error_message(field: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => format!("{field} is required"),
        "email" => format!("{field} must be a valid email address"),
        "length" => length_message(field, &error.params),
        "range" => range_message(field, &error.params),
        "url" => format!("{field} must be a valid URL"),
        "uri" => format!("{field} must be a valid URI"),
        "alpha" => format!("{field} must contain only alphabetic characters"),
        "alphanumeric" => format!("{field} must contain only alphanumeric characters"),
        "numeric" => format!("{field} must be a valid number"),
        "uuid" => format!("{field} must be a valid UUID"),
        "oneof" => match error.params.get("allowed") {
            Some(Value::Array(allowed)) => {
                let values: Vec<String> = allowed.iter().map(param_text).collect();
                format!("{field} must be one of [{}]", values.join(", "))
            }
            _ => format!("{field} is invalid"),
        },
        "must_match" => match error.params.get("other") {
            Some(other) => format!("{field} must equal {}", param_text(other)),
            None => format!("{field} is invalid"),
        },
        "does_not_match" => match error.params.get("other") {
            Some(other) => format!("{field} must not equal {}", param_text(other)),
            None => format!("{field} is invalid"),
        },
        _ => error
            .message
            .as_ref()
            .map(|message| message.to_string())
            .unwrap_or_else(|| format!("{field} is invalid")),
    }
}

fn length_message(field: &str, params: &HashMap<Cow<'static, str>, Value>) -> String {
    if let Some(equal) = params.get("equal") {
        return format!(
            "{field} must be exactly {} characters long",
            param_text(equal)
        );
    }

    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => format!(
            "{field} must be between {} and {} characters long",
            param_text(min),
            param_text(max)
        ),
        (Some(min), None) => format!(
            "{field} must be at least {} characters long",
            param_text(min)
        ),
        (None, Some(max)) => format!("{field} must not exceed {} characters", param_text(max)),
        (None, None) => format!("{field} is invalid"),
    }
}

fn range_message(field: &str, params: &HashMap<Cow<'static, str>, Value>) -> String {
    if let Some(min) = params.get("exclusive_min") {
        return format!("{field} must be greater than {}", param_text(min));
    }
    if let Some(max) = params.get("exclusive_max") {
        return format!("{field} must be less than {}", param_text(max));
    }

    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => format!(
            "{field} must be between {} and {}",
            param_text(min),
            param_text(max)
        ),
        (Some(min), None) => format!(
            "{field} must be greater than or equal to {}",
            param_text(min)
        ),
        (None, Some(max)) => {
            format!("{field} must be less than or equal to {}", param_text(max))
        }
        (None, None) => format!("{field} is invalid"),
    }
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct CreateProbe {
        #[validate(required, length(min = 3, max = 50))]
        username: Option<String>,
        #[validate(required)]
        first_name: Option<String>,
        #[validate(required, email)]
        email: Option<String>,
        #[validate(required, length(min = 8))]
        password: Option<String>,
    }

    fn probe(
        username: Option<&str>,
        first_name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> CreateProbe {
        CreateProbe {
            username: username.map(String::from),
            first_name: first_name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_required_field_message() {
        let errors = probe(Some("alice"), None, Some("a@b.com"), Some("secret123"))
            .validate()
            .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(translated["first_name"], "first_name is required");
        assert_eq!(translated.len(), 1);
    }

    #[test]
    fn test_minimum_length_message() {
        let errors = probe(Some("alice"), Some("Alice"), Some("a@b.com"), Some("short"))
            .validate()
            .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(
            translated["password"],
            "password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_bounded_length_message() {
        let errors = probe(Some("ab"), Some("Alice"), Some("a@b.com"), Some("secret123"))
            .validate()
            .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(
            translated["username"],
            "username must be between 3 and 50 characters long"
        );
    }

    #[test]
    fn test_email_message() {
        let errors = probe(Some("alice"), Some("Alice"), Some("nope"), Some("secret123"))
            .validate()
            .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(translated["email"], "email must be a valid email address");
    }

    #[test]
    fn test_multiple_failures_report_every_field() {
        let errors = probe(None, None, None, None).validate().unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(translated.len(), 4);
        assert_eq!(translated["username"], "username is required");
        assert_eq!(translated["email"], "email is required");
        assert_eq!(translated["password"], "password is required");
    }

    fn reject_with_alpha(_value: &str) -> Result<(), ValidationError> {
        Err(ValidationError::new("alpha"))
    }

    #[derive(Validate)]
    struct CustomProbe {
        #[validate(custom(function = reject_with_alpha))]
        nickname: String,
    }

    #[test]
    fn test_custom_code_from_table() {
        let errors = CustomProbe {
            nickname: "x1".to_string(),
        }
        .validate()
        .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(
            translated["nickname"],
            "nickname must contain only alphabetic characters"
        );
    }

    fn reject_unknown(_value: &str) -> Result<(), ValidationError> {
        Err(ValidationError::new("some_unknown_rule"))
    }

    #[derive(Validate)]
    struct UnknownProbe {
        #[validate(custom(function = reject_unknown))]
        widget: String,
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let errors = UnknownProbe {
            widget: "w".to_string(),
        }
        .validate()
        .unwrap_err();
        let translated = translate_errors(&errors);

        assert_eq!(translated["widget"], "widget is invalid");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("FirstName"), "first_name");
        assert_eq!(to_snake_case("camelCase"), "camel_case");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("X"), "x");
        assert_eq!(to_snake_case(""), "");
    }
}
