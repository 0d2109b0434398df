use dioxus::prelude::*;

use crate::components::{IconGlyph, SectionHeader};
use crate::content::AboutContent;
use crate::core::language::Language;
use crate::core::sections::SectionId;

#[component]
pub fn AboutSection(language: Language) -> Element {
    let content = AboutContent::for_language(language);

    rsx! {
        section { id: SectionId::About.anchor(), class: "section section--warm about",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                div { class: "about__pillars",
                    for pillar in content.pillars.iter() {
                        article { key: "{pillar.title}", class: "card about__pillar",
                            div { class: "about__pillar-icon", IconGlyph { icon: pillar.icon } }
                            h3 { class: "card__title", "{pillar.title}" }
                            p { class: "card__text", "{pillar.text}" }
                        }
                    }
                }

                div { class: "about__story",
                    div { class: "about__history",
                        h3 { class: "about__history-title", "{content.history_title}" }
                        p { class: "about__history-text", "{content.history}" }
                        a { class: "button button--accent", href: SectionId::Admissions.href(),
                            "{content.cta}"
                        }
                    }

                    div { class: "about__achievements",
                        for achievement in content.achievements.iter() {
                            div { key: "{achievement.title}", class: "card about__achievement",
                                div { class: "about__achievement-icon", IconGlyph { icon: achievement.icon } }
                                div {
                                    div { class: "about__achievement-count", "{achievement.count}" }
                                    div { class: "about__achievement-title", "{achievement.title}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
