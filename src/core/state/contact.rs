use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

lazy_static! {
    static ref EMAIL: Option<Regex> = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok();
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContactError {
    #[strum(to_string = "Please enter your name")]
    MissingName,
    #[strum(to_string = "Please enter a valid email address")]
    InvalidEmail,
    #[strum(to_string = "Please write a message")]
    MissingMessage,
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Content of the contacts overlay
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focus: FormField,
    error: Option<ContactError>,
}

impl ContactForm {
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<ContactError> {
        self.error
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn next_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn input(&mut self, c: char) {
        if c == '\n' && self.focus != FormField::Message {
            return;
        }
        self.focused_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn validate(&self) -> Result<Submission, ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and remember the failure, if any, for display
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        let result = self.validate();
        self.error = result.as_ref().err().copied();
        result
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Farrel".to_string(),
            email: "hi@example.com".to_string(),
            message: "Hello!".to_string(),
            ..ContactForm::default()
        }
    }

    #[rstest]
    #[case("hi@example.com", true)]
    #[case("first.last@sub.domain.id", true)]
    #[case("hi@example", false)]
    #[case("@example.com", false)]
    #[case("hi there@example.com", false)]
    #[case("", false)]
    fn test_is_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_email(value), expected);
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let mut form = filled();
        form.name = "  Farrel ".to_string();

        let submission = form.submit();
        assert_eq!(
            submission,
            Ok(Submission {
                name: "Farrel".to_string(),
                email: "hi@example.com".to_string(),
                message: "Hello!".to_string(),
            })
        );
        assert_eq!(form.error(), None);
    }

    #[rstest]
    #[case(FormField::Name, ContactError::MissingName)]
    #[case(FormField::Email, ContactError::InvalidEmail)]
    #[case(FormField::Message, ContactError::MissingMessage)]
    fn test_blank_field_is_rejected(#[case] field: FormField, #[case] expected: ContactError) {
        let mut form = filled();
        match field {
            FormField::Name => form.name = "   ".to_string(),
            FormField::Email => form.email.clear(),
            FormField::Message => form.message = "\n".to_string(),
        }

        assert_eq!(form.submit(), Err(expected));
        assert_eq!(form.error(), Some(expected));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::default();
        form.input('a');
        form.next_field();
        form.input('b');
        form.input('\n');
        form.next_field();
        form.input('c');
        form.input('\n');
        form.backspace();
        form.backspace();

        assert_eq!(form.value(FormField::Name), "a");
        assert_eq!(form.value(FormField::Email), "b");
        assert_eq!(form.value(FormField::Message), "");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = ContactForm::default();
        form.prev_field();
        assert_eq!(form.focus(), FormField::Message);
        form.next_field();
        assert_eq!(form.focus(), FormField::Name);
        form.focus_field(FormField::Email);
        assert_eq!(form.focus(), FormField::Email);
    }

    #[test]
    fn test_error_clears_on_input() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_err());
        form.input('x');
        assert_eq!(form.error(), None);
    }
}
