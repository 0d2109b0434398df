//! Contact form state and the simulated submission.
//!
//! Nothing leaves the page: `submit` hands an [`Acknowledgement`] to the
//! caller-supplied `notify` callback and clears the form. That callback is
//! the one place a real delivery backend would be plugged in.

use serde::{Deserialize, Serialize};

use crate::core::language::Language;
use crate::t;

/// Free-text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Value of the `name` attribute on the input element.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// HTML input type (the message uses a textarea).
    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        }
    }

    /// Browser-level required marker; phone is optional.
    pub fn required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

/// What the toast shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub language: Language,
    pub title: String,
    pub description: String,
}

impl Acknowledgement {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            title: t!(language, "contact-success-title"),
            description: t!(language, "contact-success-description"),
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Acknowledge in `language` through `notify`, then reset every field.
    pub fn submit(&mut self, language: Language, notify: impl FnOnce(Acknowledgement)) {
        notify(Acknowledgement::for_language(language));
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Rafi");
        form.set(ContactField::Email, "rafi@example.com");
        form.set(ContactField::Phone, "01700000000");
        form.set(ContactField::Subject, "Admission");
        form.set(ContactField::Message, "When does class 6 admission open?");
        form
    }

    #[test]
    fn set_updates_only_the_named_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Subject, "Fees");
        assert_eq!(form.get(ContactField::Subject), "Fees");
        assert_eq!(form.get(ContactField::Name), "");
    }

    #[test]
    fn submit_clears_all_fields() {
        let mut form = filled();
        form.submit(Language::En, |_| {});
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "", "{:?} not cleared", field);
        }
        assert!(form.is_empty());
    }

    #[test]
    fn acknowledgement_follows_active_language() {
        let mut received = Vec::new();
        let mut form = filled();
        form.submit(Language::Bn, |ack| received.push(ack));
        let mut form = filled();
        form.submit(Language::En, |ack| received.push(ack));

        assert_eq!(received[0].language, Language::Bn);
        assert_eq!(received[0].title, "আপনার বার্তা সফলভাবে পাঠানো হয়েছে!");
        assert_eq!(received[1].title, "Your message has been sent successfully!");
        assert_eq!(received[1].description, "We will get back to you soon.");
    }

    #[test]
    fn phone_is_the_only_optional_field() {
        let optional: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|field| !field.required())
            .collect();
        assert_eq!(optional, vec![ContactField::Phone]);
    }

    #[test]
    fn form_serializes_for_a_future_backend() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["subject"], "Admission");
    }
}
