use super::Icon;
use crate::core::language::Language;
use crate::core::sections;
use crate::t;

/// One admissions card; `anchor` is the target of the matching submenu link.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionStep {
    pub anchor: &'static str,
    pub title: String,
    pub text: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionsContent {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<AdmissionStep>,
    pub cta: String,
}

impl AdmissionsContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "admissions-title"),
            subtitle: t!(lang, "admissions-subtitle"),
            steps: vec![
                AdmissionStep {
                    anchor: sections::ADMISSION_PROCESS,
                    title: t!(lang, "admissions-process-title"),
                    text: t!(lang, "admissions-process-text"),
                    icon: Icon::Clipboard,
                },
                AdmissionStep {
                    anchor: sections::ELIGIBILITY,
                    title: t!(lang, "admissions-eligibility-title"),
                    text: t!(lang, "admissions-eligibility-text"),
                    icon: Icon::Check,
                },
                AdmissionStep {
                    anchor: sections::FEES,
                    title: t!(lang, "admissions-fees-title"),
                    text: t!(lang, "admissions-fees-text"),
                    icon: Icon::Wallet,
                },
                AdmissionStep {
                    anchor: sections::SCHOLARSHIPS,
                    title: t!(lang, "admissions-scholarships-title"),
                    text: t!(lang, "admissions-scholarships-text"),
                    icon: Icon::Star,
                },
            ],
            cta: t!(lang, "admissions-cta"),
        }
    }
}
