use dioxus::prelude::*;

use crate::components::IconGlyph;
use crate::content::{FooterContent, Icon, NavLink, SocialLink};
use crate::core::language::Language;

#[component]
pub fn Footer(language: Language) -> Element {
    let content = FooterContent::for_language(language);

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__columns",
                    div { class: "footer__column footer__column--brand",
                        div { class: "footer__brand",
                            span { class: "footer__brand-mark", aria_hidden: "true", "{content.brand_mark}" }
                            h3 { class: "footer__brand-name", "{content.school_name}" }
                        }
                        p { class: "footer__description", "{content.description}" }
                        h4 { class: "footer__heading", "{content.social_title}" }
                        div { class: "footer__social",
                            for link in content.social.iter() {
                                {render_social(link)}
                            }
                        }
                    }

                    {render_link_column(&content.quick_links_title, &content.quick_links)}
                    {render_link_column(&content.academics_title, &content.academic_links)}

                    div { class: "footer__column",
                        h4 { class: "footer__heading", "{content.contact_title}" }
                        ul { class: "footer__contact",
                            li { IconGlyph { icon: Icon::Pin } span { "{content.address}" } }
                            li { IconGlyph { icon: Icon::Phone } span { "{content.phone}" } }
                            li { IconGlyph { icon: Icon::Mail } span { "{content.email}" } }
                        }
                    }
                }

                div { class: "footer__newsletter",
                    div {
                        h4 { class: "footer__heading", "{content.newsletter_title}" }
                        p { "{content.newsletter_description}" }
                    }
                    div { class: "footer__newsletter-form",
                        input {
                            class: "footer__newsletter-input",
                            r#type: "email",
                            placeholder: "{content.newsletter_placeholder}",
                        }
                        button { r#type: "button", class: "button button--primary",
                            "{content.newsletter_button}"
                        }
                    }
                }

                div { class: "footer__bottom",
                    p { class: "footer__copyright", "{content.copyright}" }
                }
            }
        }
    }
}

fn render_social(link: &SocialLink) -> Element {
    rsx! {
        a {
            key: "{link.theme}",
            class: "footer__social-link {link.theme}",
            href: link.href,
            IconGlyph { icon: link.icon }
        }
    }
}

fn render_link_column(title: &str, links: &[NavLink]) -> Element {
    rsx! {
        div { class: "footer__column",
            h4 { class: "footer__heading", "{title}" }
            ul { class: "footer__links",
                for link in links.iter() {
                    li { key: "{link.href}",
                        a { class: "footer__link", href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}
