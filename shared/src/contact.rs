//! Contact form schema.
//!
//! The backend and the frontend both validate through this module, so the
//! field rules exist exactly once. Raw JSON goes through [`validate`], which
//! type-checks each field before handing the strings to the same rule set the
//! browser runs via [`ContactForm::validate_submission`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// `+254` or `0`, then a `7` or `1`, then eight ASCII digits. Nothing else.
pub static KENYAN_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+254|0)[17][0-9]{8}$").expect("phone pattern is valid"));

/// Dotted domain ending in an alphabetic TLD of two or more letters. The local
/// part may not start or end with a dot or hold two dots in a row. IP-literal
/// domains and single-label hosts are rejected.
pub static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

pub const REQUIRED_MESSAGE: &str = "Required";
pub const PHONE_MESSAGE: &str =
    "Please enter a valid Kenyan phone number (e.g., 0712345678 or +254712345678)";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Form fields in declaration order. Error lists are sorted by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    BusinessName,
    Phone,
    Email,
    Message,
    InterestedPlan,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::BusinessName,
        Field::Phone,
        Field::Email,
        Field::Message,
        Field::InterestedPlan,
    ];

    /// Key used on the wire and in the error map.
    pub fn path(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::BusinessName => "businessName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
            Field::InterestedPlan => "interestedPlan",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Email | Field::InterestedPlan)
    }

    pub fn from_path(path: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.path() == path)
    }

    // validator reports errors under the Rust field name
    fn from_struct_field(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "business_name" => Some(Field::BusinessName),
            "phone" => Some(Field::Phone),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            "interested_plan" => Some(Field::InterestedPlan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every violated field of one submission, one message per field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid contact submission ({} field(s) rejected)", .errors.len())]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    fn from_errors(mut errors: Vec<FieldError>) -> Self {
        errors.sort_by_key(|e| e.field);
        errors.dedup_by_key(|e| e.field);
        Self { errors }
    }

    fn from_validator(errors: &ValidationErrors) -> Self {
        let mut collected = Vec::new();
        for (name, field_errors) in errors.field_errors() {
            let name: &str = name.as_ref();
            let Some(field) = Field::from_struct_field(name) else {
                continue;
            };
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                collected.push(FieldError::new(field, message));
            }
        }
        Self::from_errors(collected)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn to_error_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|e| (e.field.path().to_string(), e.message.clone()))
            .collect()
    }
}

/// A submission that passed every rule. Optional fields are `None` when the
/// user left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub business_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interested_plan: Option<String>,
}

/// The form exactly as the user typed it. This is also the request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub business_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub interested_plan: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::BusinessName => &self.business_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::InterestedPlan => &self.interested_plan,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::BusinessName => self.business_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::InterestedPlan => self.interested_plan = value,
        }
    }

    pub fn validate_submission(&self) -> Result<ContactSubmission, ValidationFailure> {
        let candidate = Candidate::from(self);
        match candidate.validate() {
            Ok(()) => Ok(candidate.into()),
            Err(errors) => Err(ValidationFailure::from_validator(&errors)),
        }
    }
}

/// Validate an untrusted JSON body.
///
/// Missing or `null` required fields report [`REQUIRED_MESSAGE`], non-string
/// values report their JSON type, and everything else goes through the shared
/// rules. All violations are collected.
pub fn validate(raw: &Value) -> Result<ContactSubmission, ValidationFailure> {
    let object = raw.as_object();
    let mut shape_errors = Vec::new();
    let mut form = ContactForm::default();

    for field in Field::ALL {
        if let Some(text) = read_string(object, field, &mut shape_errors) {
            form.set(field, text);
        }
    }

    match form.validate_submission() {
        Ok(submission) if shape_errors.is_empty() => Ok(submission),
        Ok(_) => Err(ValidationFailure::from_errors(shape_errors)),
        Err(rules) => {
            let mut errors = shape_errors;
            for error in rules.errors {
                if !errors.iter().any(|e| e.field == error.field) {
                    errors.push(error);
                }
            }
            Err(ValidationFailure::from_errors(errors))
        }
    }
}

fn read_string(
    object: Option<&Map<String, Value>>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.and_then(|o| o.get(field.path())) {
        None | Some(Value::Null) => {
            if field.is_required() {
                errors.push(FieldError::new(field, REQUIRED_MESSAGE));
            }
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("Expected string, received {}", json_type(other)),
            ));
            None
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Validate)]
struct Candidate {
    #[validate(custom(function = "validate_name"))]
    name: String,
    #[validate(custom(function = "validate_business_name"))]
    business_name: String,
    #[validate(regex(path = *KENYAN_PHONE, message = "Please enter a valid Kenyan phone number (e.g., 0712345678 or +254712345678)"))]
    phone: String,
    #[validate(regex(path = *EMAIL_ADDRESS, message = "Please enter a valid email address"))]
    email: Option<String>,
    #[validate(custom(function = "validate_message"))]
    message: String,
    interested_plan: Option<String>,
}

impl From<&ContactForm> for Candidate {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            business_name: form.business_name.clone(),
            phone: form.phone.clone(),
            email: blank_to_none(&form.email),
            message: form.message.clone(),
            interested_plan: blank_to_none(&form.interested_plan),
        }
    }
}

impl From<Candidate> for ContactSubmission {
    fn from(c: Candidate) -> Self {
        Self {
            name: c.name,
            business_name: c.business_name,
            phone: c.phone,
            email: c.email,
            message: c.message,
            interested_plan: c.interested_plan,
        }
    }
}

fn char_bounds(
    value: &str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    let (code, message) = if len < min {
        ("too_short", too_short)
    } else if len > max {
        ("too_long", too_long)
    } else {
        return Ok(());
    };
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    char_bounds(
        value,
        2,
        100,
        "Name must be at least 2 characters",
        "Name is too long",
    )
}

fn validate_business_name(value: &str) -> Result<(), ValidationError> {
    char_bounds(
        value,
        2,
        100,
        "Business name must be at least 2 characters",
        "Business name is too long",
    )
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    char_bounds(
        value,
        10,
        1000,
        "Message must be at least 10 characters",
        "Message is too long",
    )
}
