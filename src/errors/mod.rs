use thiserror::Error;

/// ModelError: errors raised while building, decoding or validating an API model.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Missing required field `{field_name}`.")]
    MissingRequiredField { field_name: String },
    #[error("Unknown value `{value}` for field `{field_name}`.")]
    UnknownEnumValue { field_name: String, value: String },
    #[error("Invalid document, cannot be parsed: {raw_error_message:?}")]
    InvalidDocument { raw_error_message: String },
    #[error("Invalid object reference `{reference}`: {raw_error_message:?}")]
    InvalidReference {
        reference: String,
        raw_error_message: String,
    },
    #[error("Cannot serialize model: {raw_error_message:?}")]
    Serialization { raw_error_message: String },
}

impl ModelError {
    pub fn new_missing_required_field(field_name: &str) -> Self {
        ModelError::MissingRequiredField {
            field_name: field_name.to_string(),
        }
    }

    pub fn new_unknown_enum_value(field_name: &str, value: &str) -> Self {
        ModelError::UnknownEnumValue {
            field_name: field_name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn new_invalid_reference(reference: &str, raw_error_message: impl Into<String>) -> Self {
        ModelError::InvalidReference {
            reference: reference.to_string(),
            raw_error_message: raw_error_message.into(),
        }
    }

    pub fn new_invalid_document(raw_error_message: impl ToString) -> Self {
        ModelError::InvalidDocument {
            raw_error_message: raw_error_message.to_string(),
        }
    }

    pub fn new_serialization(raw_error_message: impl ToString) -> Self {
        ModelError::Serialization {
            raw_error_message: raw_error_message.to_string(),
        }
    }

    /// Returns true when the error is about an absent required field.
    pub fn is_missing_required_field(&self) -> bool {
        matches!(self, ModelError::MissingRequiredField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_messages() {
        assert_eq!(
            ModelError::new_missing_required_field("name").to_string(),
            "Missing required field `name`."
        );
        assert_eq!(
            ModelError::new_unknown_enum_value("source", "SYSLOG").to_string(),
            "Unknown value `SYSLOG` for field `source`."
        );
    }

    #[test]
    fn test_invalid_document_keeps_raw_message() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let raw_error_message = err.to_string();
        assert_eq!(
            ModelError::new_invalid_document(err),
            ModelError::InvalidDocument { raw_error_message }
        );
    }

    #[test]
    fn test_is_missing_required_field() {
        assert!(ModelError::new_missing_required_field("source").is_missing_required_field());
        assert!(!ModelError::new_invalid_reference("x", "bad").is_missing_required_field());
    }
}
