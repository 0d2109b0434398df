use dioxus::prelude::*;

use crate::content::Icon;

/// Decorative glyph for an [`Icon`]; hidden from assistive tech.
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        span { class: icon.class(), aria_hidden: "true", "{icon.glyph()}" }
    }
}

/// Centered section title with an optional subtitle.
#[component]
pub fn SectionHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "section__header",
            h2 { class: "section__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section__subtitle", "{subtitle}" }
            }
        }
    }
}
