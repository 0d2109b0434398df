use dioxus::prelude::*;

use crate::components::{IconGlyph, SectionHeader};
use crate::content::{AcademicLevel, AcademicsContent, Facility, Program};
use crate::core::language::Language;
use crate::core::sections::SectionId;

/// Academic programs with a Primary/Secondary tab switch. Both tab panels
/// stay mounted and the facilities panel sits below them, so every anchor
/// in this section is on the page whichever tab is selected.
#[component]
pub fn AcademicsSection(language: Language) -> Element {
    let content = AcademicsContent::for_language(language);
    let mut level = use_signal(AcademicLevel::default);
    let active = level();

    rsx! {
        section { id: SectionId::Academics.anchor(), class: "section section--tinted academics",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                div { class: "academics__tabs", role: "tablist",
                    for tab in AcademicLevel::ALL {
                        button {
                            key: "{tab:?}",
                            r#type: "button",
                            role: "tab",
                            class: if tab == active { "academics__tab academics__tab--active" } else { "academics__tab" },
                            aria_selected: tab == active,
                            onclick: move |_| level.set(tab),
                            "{content.tab_label(tab)}"
                        }
                    }
                }

                for (panel, shown) in active.panels() {
                    {render_panel(&content, panel, shown)}
                }

                div { id: SectionId::Facilities.anchor(), class: "academics__facilities",
                    h3 { class: "academics__facilities-title", "{content.facilities_title}" }
                    p { class: "academics__facilities-subtitle", "{content.facilities_subtitle}" }
                    div { class: "academics__facility-grid",
                        for facility in content.facilities.iter() {
                            {render_facility(facility)}
                        }
                    }
                }
            }
        }
    }
}

fn render_panel(content: &AcademicsContent, panel: AcademicLevel, shown: bool) -> Element {
    match panel {
        AcademicLevel::Primary => rsx! {
            div {
                key: "{panel:?}",
                class: "card academics__primary",
                role: "tabpanel",
                hidden: !shown,
                h3 { class: "academics__primary-heading", "{content.primary_heading}" }
                p { class: "academics__primary-text", "{content.primary_text}" }
                ul { class: "academics__subjects",
                    for subject in content.primary_subjects.iter() {
                        li { key: "{subject}", class: "academics__subject", "{subject}" }
                    }
                }
            }
        },
        AcademicLevel::Secondary => rsx! {
            div {
                key: "{panel:?}",
                class: "academics__programs",
                role: "tabpanel",
                hidden: !shown,
                for program in content.programs.iter() {
                    {render_program(program, &content.cta)}
                }
            }
        },
    }
}

fn render_program(program: &Program, cta: &str) -> Element {
    rsx! {
        article {
            key: "{program.anchor}",
            id: program.anchor,
            class: "card program {program.theme}",
            div { class: "program__media",
                img { src: program.image, alt: "{program.title}" }
                div { class: "program__badge", IconGlyph { icon: program.icon } }
            }
            div { class: "program__body",
                h3 { class: "card__title", "{program.title}" }
                p { class: "card__text", "{program.description}" }
                ul { class: "program__subjects",
                    for subject in program.subjects.iter() {
                        li { key: "{subject}", "{subject}" }
                    }
                }
                a { class: "button button--outline program__cta", href: SectionId::Contact.href(),
                    "{cta}"
                }
            }
        }
    }
}

fn render_facility(facility: &Facility) -> Element {
    rsx! {
        div { key: "{facility.name}", class: "academics__facility",
            IconGlyph { icon: facility.icon }
            span { "{facility.name}" }
        }
    }
}
