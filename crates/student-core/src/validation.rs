//! Validation Engine
//!
//! Per-field rules for the student form, plus a whole-form check that
//! evaluates every field so all messages can be shown at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::FormFields;

static ROOM_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("Invalid room number regex"));

static MOBILE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid mobile number regex"));

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    RoomNumber,
    MobileNumber,
    FeeAmount,
    FeePaid,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::RoomNumber,
        Field::MobileNumber,
        Field::FeeAmount,
        Field::FeePaid,
    ];

    /// DOM id of the input bound to this field
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::RoomNumber => "roomNo",
            Field::MobileNumber => "mobileNo",
            Field::FeeAmount => "fee",
            Field::FeePaid => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Student Name",
            Field::RoomNumber => "Room No",
            Field::MobileNumber => "Mobile No",
            Field::FeeAmount => "Fee Amount",
            Field::FeePaid => "Fee Status",
        }
    }

    /// Message shown under the input when its rule fails
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => "Student name is required and must be 3 to 100 characters.",
            Field::RoomNumber => {
                "Room number is required and can only contain letters, numbers, and hyphens."
            }
            Field::MobileNumber => "Mobile number is required and must be 10 digits.",
            Field::FeeAmount => "Fee amount is required and must be a positive number.",
            Field::FeePaid => "Please select fee status.",
        }
    }
}

/// Outcome of checking one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl FieldCheck {
    fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(field: Field) -> Self {
        Self {
            valid: false,
            message: field.error_message().to_string(),
        }
    }
}

/// Check a single raw input value against its field's rule.
///
/// Values are trimmed before the rule is applied, matching how drafts are built.
pub fn validate_field(field: Field, value: &str) -> FieldCheck {
    let value = value.trim();
    let ok = match field {
        Field::Name => (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&value.chars().count()),
        Field::RoomNumber => !value.is_empty() && ROOM_NUMBER_REGEX.is_match(value),
        Field::MobileNumber => MOBILE_NUMBER_REGEX.is_match(value),
        Field::FeeAmount => parse_fee_amount(value).is_some(),
        Field::FeePaid => parse_fee_status(value).is_some(),
    };
    if ok {
        FieldCheck::pass()
    } else {
        FieldCheck::fail(field)
    }
}

/// Parse a fee amount, accepting only finite numbers greater than zero
pub fn parse_fee_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Parse the fee status select value ("true"/"false"); the unset "" is None
pub fn parse_fee_status(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Result of checking every field of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    checks: Vec<(Field, FieldCheck)>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|(_, check)| check.valid)
    }

    /// Every field whose rule failed, in display order
    pub fn failures(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.checks
            .iter()
            .filter(|(_, check)| !check.valid)
            .map(|(field, check)| (*field, check.message.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldCheck)> + '_ {
        self.checks.iter()
    }
}

/// Run all five rules. Never stops at the first failure.
pub fn validate_form(fields: &FormFields) -> FormValidation {
    let checks = Field::ALL
        .iter()
        .map(|field| (*field, validate_field(*field, fields.get(*field))))
        .collect();
    FormValidation { checks }
}
