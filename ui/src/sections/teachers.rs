use dioxus::prelude::*;

use crate::components::SectionHeader;
use crate::content::{Teacher, TeachersContent};
use crate::core::carousel::PagedCarousel;
use crate::core::language::Language;
use crate::core::settings::TEACHER_WINDOW;

/// Teacher cards in a three-wide window paged by arrows and dots.
/// The window position survives language switches.
#[component]
pub fn TeachersSection(language: Language) -> Element {
    let content = TeachersContent::for_language(language);
    let mut carousel = use_signal(|| PagedCarousel::new(content.teachers.len(), TEACHER_WINDOW));
    let state = carousel();
    let shift = state.translate_percent();
    let in_window = state.visible();
    let card_width = 100.0 / state.window() as f64;

    rsx! {
        section { class: "section teachers",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                div { class: "carousel",
                    button {
                        r#type: "button",
                        class: "carousel__arrow carousel__arrow--prev",
                        aria_label: "{content.prev_label}",
                        onclick: move |_| carousel.with_mut(|c| c.prev()),
                        "‹"
                    }

                    div { class: "carousel__viewport",
                        div {
                            class: "carousel__track",
                            style: "transform: translateX(-{shift}%);",
                            for (index, teacher) in content.teachers.iter().enumerate() {
                                {render_teacher(teacher, &content.experience_label, card_width, !in_window.contains(&index))}
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "carousel__arrow carousel__arrow--next",
                        aria_label: "{content.next_label}",
                        onclick: move |_| carousel.with_mut(|c| c.next()),
                        "›"
                    }
                }

                div { class: "carousel__dots",
                    for page in 0..state.page_count() {
                        button {
                            key: "{page}",
                            r#type: "button",
                            class: if page == state.offset() { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                            aria_label: TeachersContent::page_label(language, page),
                            onclick: move |_| {
                                carousel.with_mut(|c| c.go_to(page));
                            },
                        }
                    }
                }
            }
        }
    }
}

fn render_teacher(teacher: &Teacher, experience_label: &str, width: f64, off_window: bool) -> Element {
    rsx! {
        div {
            key: "{teacher.name}",
            class: "carousel__slide",
            style: "flex: 0 0 {width}%;",
            aria_hidden: "{off_window}",
            article { class: "card teacher",
                img { class: "teacher__portrait", src: teacher.portrait, alt: "{teacher.name}" }
                h3 { class: "teacher__name", "{teacher.name}" }
                p { class: "teacher__subject", "{teacher.subject}" }
                p { class: "teacher__experience", "{experience_label}: {teacher.experience}" }
            }
        }
    }
}
