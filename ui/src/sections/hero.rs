use dioxus::prelude::*;

use crate::components::IconGlyph;
use crate::content::HeroContent;
use crate::core::language::Language;
use crate::core::sections::SectionId;

/// Floating background bubbles.
const BUBBLES: usize = 6;

#[component]
pub fn HeroSection(language: Language) -> Element {
    let content = HeroContent::for_language(language);

    rsx! {
        section { id: SectionId::Home.anchor(), class: "hero",
            div { class: "hero__backdrop",
                img { class: "hero__image", src: content.image, alt: "{content.image_alt}" }
                div { class: "hero__overlay" }
            }

            div { class: "hero__bubbles", aria_hidden: "true",
                for i in 0..BUBBLES {
                    span {
                        key: "{i}",
                        class: "hero__bubble",
                        style: bubble_style(i),
                    }
                }
            }

            div { class: "hero__content",
                h1 { class: "hero__title", "{content.title}" }
                h2 { class: "hero__subtitle", "{content.subtitle}" }
                p { class: "hero__description", "{content.description}" }

                div { class: "hero__actions",
                    a { class: "button button--hero", href: "{content.cta_apply_href}",
                        "{content.cta_apply}"
                        span { class: "button__arrow", aria_hidden: "true", "→" }
                    }
                    a { class: "button button--outline-light", href: "{content.cta_learn_href}",
                        "{content.cta_learn}"
                    }
                }

                div { class: "hero__stats",
                    for stat in content.stats.iter() {
                        div { key: "{stat.label}", class: "hero__stat",
                            IconGlyph { icon: stat.icon }
                            div { class: "hero__stat-value", "{stat.value}" }
                            div { class: "hero__stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            div { class: "hero__scroll", aria_hidden: "true",
                div { class: "hero__scroll-dot" }
            }
        }
    }
}

/// Spread the bubbles diagonally with staggered float speeds.
fn bubble_style(i: usize) -> String {
    format!(
        "left: {}%; top: {}%; animation-duration: {}s;",
        10 + i * 15,
        20 + i * 10,
        15 + i * 2
    )
}
