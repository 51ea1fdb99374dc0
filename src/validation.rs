//! Form validation
//!
//! Forms are ordered lists of named fields. A field marked required must be
//! non-empty after trimming; nothing else is checked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Rupees;
use crate::notify::Notification;

/// Largest amount a single claim may request
pub const MAX_CLAIM_AMOUNT: Rupees = 100_000;

/// Reasons a submission is refused before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required fields left blank, in form order
    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A claim needs at least one staged evidence file
    #[error("At least one supporting document is required")]
    MissingEvidence,
}

impl ValidationError {
    /// Notification shown for this failure
    pub fn notification(&self) -> Notification {
        match self {
            Self::MissingFields(_) => Notification::validation_failed(),
            Self::MissingEvidence => Notification::error(
                "Missing Evidence",
                "Please upload at least one supporting document.",
            ),
        }
    }

    /// Field names to highlight
    pub fn fields(&self) -> &[String] {
        match self {
            Self::MissingFields(fields) => fields,
            Self::MissingEvidence => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl Field {
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Snapshot of a form's fields at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field
    pub fn required(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name.into(), value.into(), true);
        self
    }

    /// Add an optional field
    pub fn optional(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name.into(), value.into(), false);
        self
    }

    fn push(&mut self, name: String, value: String, required: bool) {
        self.fields.push(Field {
            name,
            value,
            required,
        });
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Names of required fields that are blank
    pub fn missing_required(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required && f.is_blank())
            .map(|f| f.name.clone())
            .collect()
    }

    /// True when every required field has a value
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.required || !f.is_blank())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Field name to value map, the shape saved as a draft
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

/// Claim amount input after the cap has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    pub value: String,
    pub capped: bool,
}

impl AmountInput {
    pub fn notification(&self) -> Option<Notification> {
        self.capped
            .then(|| Notification::warning("Amount Limit", "Maximum claim amount is ₹1,00,000"))
    }
}

/// Cap a typed claim amount at [`MAX_CLAIM_AMOUNT`].
///
/// Only the numeric prefix is inspected, so partial input such as `"12"` or
/// `""` passes through unchanged.
pub fn cap_claim_amount(raw: &str) -> AmountInput {
    let trimmed = raw.trim();
    let numeric: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();

    match numeric.parse::<Rupees>() {
        Ok(value) if value > MAX_CLAIM_AMOUNT => AmountInput {
            value: MAX_CLAIM_AMOUNT.to_string(),
            capped: true,
        },
        // Digit strings too long for i64 are far above the cap as well
        Err(_) if numeric.len() > 18 => AmountInput {
            value: MAX_CLAIM_AMOUNT.to_string(),
            capped: true,
        },
        _ => AmountInput {
            value: raw.to_string(),
            capped: false,
        },
    }
}
