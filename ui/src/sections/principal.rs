use dioxus::prelude::*;

use crate::components::SectionHeader;
use crate::content::PrincipalContent;
use crate::core::language::Language;
use crate::core::sections::SectionId;

/// Principal's message. Carries the `news` anchor: it is the page's
/// editorial block.
#[component]
pub fn PrincipalSection(language: Language) -> Element {
    let content = PrincipalContent::for_language(language);

    rsx! {
        section { id: SectionId::News.anchor(), class: "section section--tinted principal",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone() }

                div { class: "principal__body",
                    div { class: "principal__message",
                        span { class: "principal__quote-mark", aria_hidden: "true", "❝" }
                        blockquote { class: "principal__quote", "\"{content.quote}\"" }
                        div { class: "principal__signature",
                            h3 { class: "principal__name", "{content.name}" }
                            p { class: "principal__designation", "{content.designation}" }
                        }
                    }

                    div { class: "principal__portrait",
                        div { class: "principal__halo" }
                        img { src: content.portrait, alt: "{content.portrait_alt}" }
                        span { class: "principal__dot principal__dot--accent" }
                        span { class: "principal__dot principal__dot--secondary" }
                    }
                }
            }
        }
    }
}
