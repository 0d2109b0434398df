use super::Icon;
use crate::core::contact::ContactField;
use crate::core::language::Language;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub title: String,
    pub details: String,
    pub icon: Icon,
}

/// Placeholders for the form inputs plus the submit label.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLabels {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub submit: String,
}

impl FormLabels {
    pub fn placeholder(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub info_title: String,
    pub info_text: String,
    pub info: Vec<ContactInfo>,
    pub map_title: String,
    pub map_subtitle: String,
    pub form_title: String,
    pub form: FormLabels,
}

impl ContactContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "contact-title"),
            subtitle: t!(lang, "contact-subtitle"),
            info_title: t!(lang, "contact-info-title"),
            info_text: t!(lang, "contact-info-text"),
            info: vec![
                ContactInfo {
                    title: t!(lang, "contact-address-title"),
                    details: t!(lang, "contact-address-details"),
                    icon: Icon::Pin,
                },
                ContactInfo {
                    title: t!(lang, "contact-phone-title"),
                    details: t!(lang, "contact-phone-details"),
                    icon: Icon::Phone,
                },
                ContactInfo {
                    title: t!(lang, "contact-email-title"),
                    details: t!(lang, "contact-email-details"),
                    icon: Icon::Mail,
                },
                ContactInfo {
                    title: t!(lang, "contact-hours-title"),
                    details: t!(lang, "contact-hours-details"),
                    icon: Icon::Clock,
                },
            ],
            map_title: t!(lang, "contact-map-title"),
            map_subtitle: t!(lang, "contact-map-subtitle"),
            form_title: t!(lang, "contact-form-title"),
            form: FormLabels {
                name: t!(lang, "contact-form-name"),
                email: t!(lang, "contact-form-email"),
                phone: t!(lang, "contact-form-phone"),
                subject: t!(lang, "contact-form-subject"),
                message: t!(lang, "contact-form-message"),
                submit: t!(lang, "contact-form-submit"),
            },
        }
    }
}
