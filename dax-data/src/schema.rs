//! Declarative field constraints.
//!
//! Constraint metadata lives in a [`Schema`] value — a mapping from field
//! name to constraint descriptors — consumed by a generic validator over
//! `serde_json::Value` records. Nothing here is attached to entity types
//! themselves; the schema travels as plain configuration data.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Named patterns for common field formats.
pub mod patterns {
    /// Email address.
    pub const EMAIL: &str = r"^\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$";
    /// Mobile phone number (11 digits, no country code).
    pub const PHONE: &str =
        r"^(13[0-9]|14[5|7]|15[0|1|2|3|4|5|6|7|8|9]|18[0|1|2|3|5|6|7|8|9])\d{8}$";
    /// Domain name.
    pub const DOMAIN: &str = r"[a-zA-Z0-9][-a-zA-Z0-9]{0,62}(\.[a-zA-Z0-9][-a-zA-Z0-9]{0,62})+\.?";
    /// Dotted-quad IPv4 address.
    pub const IPV4: &str =
        r"((2(5[0-5]|[0-4]\d))|[0-1]?\d{1,2})(\.((2(5[0-5]|[0-4]\d))|[0-1]?\d{1,2})){3}";
}

/// A single constraint on one field.
///
/// Every constraint except [`Required`](Self::Required) is skipped when
/// the field is absent or null; combine with `Required` to make a field
/// mandatory.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The field must be present and non-null.
    Required,
    /// Minimum length of a string (or array) value.
    MinLength(usize),
    /// Maximum length of a string (or array) value.
    MaxLength(usize),
    /// The string value must match this regex.
    Matches(String),
    /// Inclusive numeric range.
    Range { min: f64, max: f64 },
    /// The string value must be one of these.
    OneOf(Vec<String>),
}

impl Constraint {
    pub fn email() -> Self {
        Constraint::Matches(patterns::EMAIL.to_string())
    }

    pub fn phone() -> Self {
        Constraint::Matches(patterns::PHONE.to_string())
    }

    pub fn domain() -> Self {
        Constraint::Matches(patterns::DOMAIN.to_string())
    }

    pub fn ipv4() -> Self {
        Constraint::Matches(patterns::IPV4.to_string())
    }
}

/// A field-level validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// All field errors collected from one validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Field-name → constraints mapping with a builder API.
///
/// # Example
///
/// ```ignore
/// let schema = Schema::new()
///     .field("email", vec![Constraint::Required, Constraint::email()])
///     .field("weight", vec![Constraint::Range { min: 10.0, max: 1000.0 }]);
///
/// schema.validate(&record)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Constraint>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add constraints for a field. Field order is preserved in error
    /// reports.
    pub fn field(mut self, name: impl Into<String>, constraints: Vec<Constraint>) -> Self {
        self.fields.push((name.into(), constraints));
        self
    }

    /// Check `record` against every constraint, collecting all failures
    /// rather than stopping at the first.
    pub fn validate(&self, record: &Value) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        for (name, constraints) in &self.fields {
            let value = record.get(name);
            for constraint in constraints {
                if let Some(error) = check(name, constraint, value) {
                    errors.push(error);
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

fn field_error(field: &str, code: &str, message: String) -> FieldError {
    FieldError {
        field: field.to_string(),
        message,
        code: code.to_string(),
    }
}

fn check(field: &str, constraint: &Constraint, value: Option<&Value>) -> Option<FieldError> {
    let value = match value {
        None | Some(Value::Null) => {
            return match constraint {
                Constraint::Required => Some(field_error(
                    field,
                    "required",
                    format!("{field} is required"),
                )),
                _ => None,
            };
        }
        Some(v) => v,
    };

    match constraint {
        Constraint::Required => None,
        Constraint::MinLength(min) => match value_len(value) {
            Some(len) if len < *min => Some(field_error(
                field,
                "min_length",
                format!("{field} must be at least {min} characters"),
            )),
            _ => None,
        },
        Constraint::MaxLength(max) => match value_len(value) {
            Some(len) if len > *max => Some(field_error(
                field,
                "max_length",
                format!("{field} cannot exceed {max} characters"),
            )),
            _ => None,
        },
        Constraint::Matches(pattern) => {
            let Some(text) = value.as_str() else {
                return Some(field_error(
                    field,
                    "type",
                    format!("{field} must be a string"),
                ));
            };
            match Regex::new(pattern) {
                Ok(re) if re.is_match(text) => None,
                Ok(_) => Some(field_error(
                    field,
                    "pattern",
                    format!("{field} has an invalid format"),
                )),
                Err(_) => Some(field_error(
                    field,
                    "pattern",
                    format!("invalid pattern for {field}"),
                )),
            }
        }
        Constraint::Range { min, max } => {
            let Some(n) = value.as_f64() else {
                return Some(field_error(
                    field,
                    "type",
                    format!("{field} must be a number"),
                ));
            };
            if n < *min || n > *max {
                Some(field_error(
                    field,
                    "range",
                    format!("{field} must be between {min} and {max}"),
                ))
            } else {
                None
            }
        }
        Constraint::OneOf(allowed) => {
            let Some(text) = value.as_str() else {
                return Some(field_error(
                    field,
                    "type",
                    format!("{field} must be a string"),
                ));
            };
            if allowed.iter().any(|a| a == text) {
                None
            } else {
                Some(field_error(
                    field,
                    "one_of",
                    format!("{field} must be one of: {}", allowed.join(", ")),
                ))
            }
        }
    }
}

fn value_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}
