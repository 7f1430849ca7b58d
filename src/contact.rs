//! Contact form state machine.
//!
//! Submission is simulated: nothing leaves the browser. The view drives the
//! transitions `Idle -> Submitting -> Submitted -> Idle` with timers using
//! [`SUBMIT_DELAY`] and [`RESET_DELAY`].

use std::{collections::BTreeMap, fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);
pub const RESET_DELAY: Duration = Duration::from_secs(5);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Email is invalid")]
    InvalidEmail,
}

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, err: FieldError) {
        self.0.insert(field, err);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }
        if errors.get(Field::Email).is_none() && !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub errors: ValidationErrors,
}

impl ContactState {
    /// Sets a field and clears any error shown for it.
    pub fn update(&mut self, field: Field, value: String) {
        *self.form.slot(field) = value;
        self.errors.clear(field);
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.status != SubmitStatus::Idle {
            return Err(ContactError::Busy);
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.status = SubmitStatus::Submitting;
                Ok(())
            }
            Err(errors) => {
                log::debug!("contact form rejected: {errors}");
                self.errors = errors.clone();
                Err(errors.into())
            }
        }
    }

    /// Called once the simulated delay elapses.
    pub fn complete_submit(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Submitted;
            self.form = ContactForm::default();
        }
    }

    pub fn reset(&mut self) {
        if self.status == SubmitStatus::Submitted {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.update(Field::Name, "Ada".to_string());
        state.update(Field::Email, "ada@example.com".to_string());
        state.update(Field::Subject, "Hello".to_string());
        state.update(Field::Message, "Let's build something".to_string());
        state
    }

    #[test]
    fn test_each_empty_field_blocks_submit() {
        for field in Field::ALL {
            let mut state = filled();
            state.update(field, "   ".to_string());
            let res = state.begin_submit();
            assert!(matches!(res, Err(ContactError::Invalid(_))));
            assert_eq!(state.status, SubmitStatus::Idle);
            assert_eq!(state.errors.len(), 1);
            assert_eq!(state.errors.get(field), Some(&FieldError::Required(field)));
            assert_eq!(state.error(field), Some(format!("{} is required", field.label())));
        }
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        for bad in ["plainaddress", "missing@tld", "@no-user.com ", "a@b."] {
            let mut state = filled();
            state.update(Field::Email, bad.to_string());
            assert!(state.begin_submit().is_err(), "{bad} should be rejected");
            assert_eq!(state.errors.get(Field::Email), Some(&FieldError::InvalidEmail));
            assert_eq!(state.error(Field::Email).as_deref(), Some("Email is invalid"));
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut state = ContactState::default();
        let Err(ContactError::Invalid(errors)) = state.begin_submit() else {
            panic!("empty form should not submit");
        };
        assert_eq!(errors.len(), 4);
        // required wins over the format check
        assert_eq!(errors.get(Field::Email), Some(&FieldError::Required(Field::Email)));
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut state = ContactState::default();
        let _ = state.begin_submit();
        state.update(Field::Name, "A".to_string());
        assert!(state.error(Field::Name).is_none());
        assert!(state.error(Field::Email).is_some());
        assert!(state.error(Field::Subject).is_some());
    }

    #[test]
    fn test_valid_submission_lifecycle() {
        let mut state = filled();
        assert!(state.begin_submit().is_ok());
        assert_eq!(state.status, SubmitStatus::Submitting);
        assert!(state.errors.is_empty());

        assert_eq!(state.begin_submit(), Err(ContactError::Busy));

        state.complete_submit();
        assert_eq!(state.status, SubmitStatus::Submitted);
        assert_eq!(state.form, ContactForm::default());

        state.reset();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut state = filled();
        state.complete_submit();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form.name, "Ada");
        state.reset();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_delays() {
        assert_eq!(SUBMIT_DELAY.as_millis(), 2000);
        assert_eq!(RESET_DELAY.as_millis(), 5000);
    }
}
