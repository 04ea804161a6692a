use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::validation::{Field, FieldErrors};

/// A stored directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned, never reused
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i64, draft: UserDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            mobile: draft.mobile,
            address: draft.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field and refreshes `updated_at`.
    pub fn apply_draft(&mut self, draft: UserDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email = draft.email;
        self.mobile = draft.mobile;
        self.address = draft.address;
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// The mutable fields, e.g. to pre-populate an edit form.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            address: self.address.clone(),
        }
    }
}

/// The five caller-supplied fields of a user.
///
/// Missing properties deserialize as empty strings so they are reported as
/// "required" by validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
}

impl UserDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Address => &self.address,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::Address => &mut self.address,
        }
    }

    /// Every failing field with its message; empty when the draft is valid.
    pub fn field_errors(&self) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                field
                    .validate(self.value(field))
                    .err()
                    .map(|message| (field, message))
            })
            .collect()
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let failures = self.field_errors();
        if failures.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for (field, message) in failures {
            let mut err = ValidationError::new("invalid");
            err.message = Some(Cow::Borrowed(message));
            errors.add(field.wire_name(), err);
        }
        Err(errors)
    }
}

/// PUT body: a draft plus the id it claims to update.
///
/// The id must equal the path id; an absent id counts as a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub draft: UserDraft,
}
