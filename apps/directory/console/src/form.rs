//! Create/edit form state with live validation.

use domain_users::validation::{filter_mobile_input, filter_name_input};
use domain_users::{Field, FieldErrors, User, UserDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    draft: UserDraft,
    errors: FieldErrors,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: UserDraft::default(),
            errors: FieldErrors::new(),
        }
    }

    /// Form pre-populated from `user`.
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            draft: user.to_draft(),
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Stores `input` for `field` after filtering, then refreshes that field's error.
    ///
    /// Names and email are re-checked on every change. Other fields only drop a stale
    /// error; they are checked in full on submit.
    pub fn set(&mut self, field: Field, input: &str) {
        let value = match field {
            Field::FirstName | Field::LastName => filter_name_input(input),
            Field::Mobile => filter_mobile_input(input),
            Field::Email | Field::Address => input.to_string(),
        };

        let live_error = match field {
            Field::FirstName | Field::LastName if value.is_empty() => None,
            Field::FirstName | Field::LastName | Field::Email => field.validate(&value).err(),
            Field::Mobile | Field::Address => None,
        };

        match live_error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }

        *self.draft.value_mut(field) = value;
    }

    /// Validates every field. Returns the draft only when nothing fails.
    pub fn submit(&mut self) -> Option<UserDraft> {
        self.errors = self.draft.field_errors();
        self.errors.is_empty().then(|| self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        let mut form = UserForm::create();
        form.set(Field::FirstName, "Ann");
        form.set(Field::LastName, "Lee");
        form.set(Field::Email, "ann@x.io");
        form.set(Field::Mobile, "5551234");
        form.set(Field::Address, "1 Elm St");
        form
    }

    #[test]
    fn test_name_and_mobile_input_is_filtered() {
        let mut form = UserForm::create();
        form.set(Field::FirstName, "An3n!");
        form.set(Field::Mobile, "555-123-4567-8901");

        assert_eq!(form.draft().first_name, "Ann");
        assert_eq!(form.draft().mobile, "555123456789");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_email_is_validated_live() {
        let mut form = UserForm::create();
        form.set(Field::Email, "ann@");
        assert_eq!(
            form.error(Field::Email),
            Some("Please enter a valid email address format (e.g., user@example.com)")
        );

        form.set(Field::Email, "ann@x.io");
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn test_clearing_a_name_does_not_flag_it_until_submit() {
        let mut form = filled();
        form.set(Field::FirstName, "");
        assert_eq!(form.error(Field::FirstName), None);

        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
    }

    #[test]
    fn test_overlong_name_is_flagged_live() {
        let mut form = UserForm::create();
        form.set(Field::LastName, &"a".repeat(51));
        assert_eq!(
            form.error(Field::LastName),
            Some("Last name cannot exceed 50 characters")
        );
    }

    #[test]
    fn test_editing_address_clears_its_error() {
        let mut form = UserForm::create();
        assert!(form.submit().is_none());
        assert_eq!(form.error(Field::Address), Some("Address is required"));

        form.set(Field::Address, "");
        assert_eq!(form.error(Field::Address), None);
    }

    #[test]
    fn test_submit_returns_draft_when_valid() {
        let mut form = filled();
        let draft = form.submit().unwrap();
        assert_eq!(draft.email, "ann@x.io");
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_empty_submit_reports_every_field() {
        let mut form = UserForm::create();
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 5);
    }
}
