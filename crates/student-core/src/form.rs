//! Form Controller
//!
//! Two-state machine (Add / Edit) over the raw form inputs. Holds the
//! per-field error text and invalid markers that validation sets and clears.

use std::collections::BTreeMap;

use crate::models::{StudentDraft, StudentId, StudentRecord};
use crate::validation::{
    parse_fee_amount, parse_fee_status, validate_field, validate_form, Field, FormValidation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(StudentId),
}

/// Raw input values as typed. `fee_status` is the select value: "", "true" or "false".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub room_number: String,
    pub mobile_number: String,
    pub fee_amount: String,
    pub fee_status: String,
}

impl FormFields {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            room_number: record.room_number.clone(),
            mobile_number: record.mobile_number.clone(),
            fee_amount: record.fee_amount.to_string(),
            fee_status: record.fee_paid.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::RoomNumber => &self.room_number,
            Field::MobileNumber => &self.mobile_number,
            Field::FeeAmount => &self.fee_amount,
            Field::FeePaid => &self.fee_status,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::RoomNumber => self.room_number = value,
            Field::MobileNumber => self.mobile_number = value,
            Field::FeeAmount => self.fee_amount = value,
            Field::FeePaid => self.fee_status = value,
        }
    }

    /// Trimmed, typed values. None if the fee or status does not parse.
    pub fn to_draft(&self) -> Option<StudentDraft> {
        Some(StudentDraft {
            name: self.name.trim().to_string(),
            room_number: self.room_number.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            fee_amount: parse_fee_amount(&self.fee_amount)?,
            fee_paid: parse_fee_status(&self.fee_status)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormController {
    mode: FormMode,
    fields: FormFields,
    errors: BTreeMap<Field, String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<StudentId> {
        match self.mode {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Error text under the input, if its last check failed
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Store a typed value and re-check that field right away
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.check_field(field);
    }

    fn check_field(&mut self, field: Field) -> bool {
        let check = validate_field(field, self.fields.get(field));
        if check.valid {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, check.message);
        }
        check.valid
    }

    /// Check every field, setting or clearing each error marker
    pub fn validate(&mut self) -> FormValidation {
        let validation = validate_form(&self.fields);
        for (field, check) in validation.iter() {
            if check.valid {
                self.errors.remove(field);
            } else {
                self.errors.insert(*field, check.message.clone());
            }
        }
        validation
    }

    /// Add -> Edit(id), filling the inputs from `record`
    pub fn begin_edit(&mut self, record: &StudentRecord) {
        self.fields = FormFields::from_record(record);
        self.errors.clear();
        self.mode = FormMode::Edit(record.id);
    }

    /// Back to an empty Add form with no error markers
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Save Student",
            FormMode::Edit(_) => "Update Student",
        }
    }

    pub fn submit_class(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "btn-primary",
            FormMode::Edit(_) => "btn-warning",
        }
    }

    pub fn cancel_visible(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }
}
