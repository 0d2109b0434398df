use dioxus::prelude::*;

use crate::components::{IconGlyph, SectionHeader};
use crate::content::AdmissionsContent;
use crate::core::language::Language;
use crate::core::sections::SectionId;

#[component]
pub fn AdmissionsSection(language: Language) -> Element {
    let content = AdmissionsContent::for_language(language);

    rsx! {
        section { id: SectionId::Admissions.anchor(), class: "section admissions",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                ol { class: "admissions__steps",
                    for (index, step) in content.steps.iter().enumerate() {
                        li { key: "{step.anchor}", id: step.anchor, class: "card admissions__step",
                            span { class: "admissions__step-number", {(index + 1).to_string()} }
                            IconGlyph { icon: step.icon }
                            h3 { class: "card__title", "{step.title}" }
                            p { class: "card__text", "{step.text}" }
                        }
                    }
                }

                div { class: "admissions__cta",
                    a { class: "button button--primary", href: SectionId::Contact.href(),
                        "{content.cta}"
                    }
                }
            }
        }
    }
}
