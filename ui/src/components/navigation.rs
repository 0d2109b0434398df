use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::content::{NavContent, NavItem};
use crate::core::language::Language;
use crate::core::sections::SectionId;

/// Fixed top navigation with the language toggle.
///
/// The page owns the language signal; this component only reads `language`
/// and reports the requested switch through `on_language_change`. Every
/// render pulls fresh labels for the current language.
///
/// Desktop: hovering a parent item reveals its submenu.
/// Mobile: the menu button opens a drawer; following a link (or switching
/// language) closes it again.
#[component]
pub fn Navigation(language: Language, on_language_change: EventHandler<Language>) -> Element {
    let content = NavContent::for_language(language);
    let mut menu_open = use_signal(|| false);
    let hovered = use_signal(|| Option::<SectionId>::None);

    debug!("[i18n] Navigation render lang={}", language.code());

    let target = language.toggled();
    let is_open = menu_open();
    let menu_label = if is_open {
        content.menu_close.clone()
    } else {
        content.menu_open.clone()
    };

    rsx! {
        nav {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                a { class: "navbar__brand", href: SectionId::Home.href(),
                    span { class: "navbar__brand-mark", aria_hidden: "true", "{content.brand_mark}" }
                    span { class: "navbar__brand-name", "{content.brand_name}" }
                }

                // Desktop menu
                div { class: "navbar__links",
                    for item in content.items.iter() {
                        {render_desktop_item(item, hovered)}
                    }

                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        aria_label: "{content.toggle_label}",
                        onclick: move |_| on_language_change.call(target),
                        span { class: "navbar__locale-icon", aria_hidden: "true", "🌐" }
                        span { "{content.toggle_short}" }
                    }
                }

                // Mobile menu button
                button {
                    r#type: "button",
                    class: "navbar__menu-button",
                    aria_label: "{menu_label}",
                    aria_expanded: "{is_open}",
                    onclick: move |_| menu_open.set(!is_open),
                    if is_open { "✕" } else { "☰" }
                }
            }

            if is_open {
                div { class: "navbar__drawer",
                    for item in content.items.iter() {
                        a {
                            key: "{item.section.anchor()}",
                            class: "navbar__drawer-link",
                            href: item.href(),
                            onclick: move |_| menu_open.set(false),
                            "{item.label}"
                        }
                    }
                    div { class: "navbar__drawer-footer",
                        button {
                            r#type: "button",
                            class: "navbar__locale",
                            onclick: move |_| {
                                on_language_change.call(target);
                                menu_open.set(false);
                            },
                            span { class: "navbar__locale-icon", aria_hidden: "true", "🌐" }
                            span { "{content.toggle_long}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_desktop_item(item: &NavItem, mut hovered: Signal<Option<SectionId>>) -> Element {
    let section = item.section;
    let show_submenu = !item.submenu.is_empty() && hovered() == Some(section);

    rsx! {
        div {
            key: "{section.anchor()}",
            class: "navbar__item",
            onmouseenter: move |_| hovered.set(Some(section)),
            onmouseleave: move |_| hovered.set(None),
            a { class: "navbar__link", href: item.href(),
                "{item.label}"
                if !item.submenu.is_empty() {
                    span { class: "navbar__chevron", aria_hidden: "true", "▾" }
                }
            }
            if show_submenu {
                div { class: "navbar__submenu",
                    for link in item.submenu.iter() {
                        a {
                            key: "{link.href}",
                            class: "navbar__submenu-link",
                            href: "{link.href}",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
