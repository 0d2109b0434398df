use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{IconGlyph, SectionHeader};
use crate::content::{ContactContent, ContactInfo};
use crate::core::contact::{Acknowledgement, ContactField, ContactForm};
use crate::core::language::Language;
use crate::core::sections::SectionId;

/// Contact details, a map placeholder and the enquiry form.
///
/// Submitting never leaves the page: the form resets and the
/// acknowledgement goes to `on_submit` for the page-level toast.
#[component]
pub fn ContactSection(language: Language, on_submit: EventHandler<Acknowledgement>) -> Element {
    let content = ContactContent::for_language(language);
    let mut form = use_signal(ContactForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut sent = None;
        form.with_mut(|f| f.submit(language, |ack| sent = Some(ack)));
        if let Some(ack) = sent {
            info!("[contact] enquiry acknowledged lang={}", language.code());
            on_submit.call(ack);
        }
    };

    rsx! {
        section { id: SectionId::Contact.anchor(), class: "section contact",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                div { class: "contact__layout",
                    div { class: "contact__info",
                        div { class: "contact__intro",
                            h3 { "{content.info_title}" }
                            p { "{content.info_text}" }
                        }
                        div { class: "contact__details",
                            for info in content.info.iter() {
                                {render_info(info)}
                            }
                        }
                        div { class: "contact__map",
                            span { class: "contact__map-icon", aria_hidden: "true", "📍" }
                            p { class: "contact__map-title", "{content.map_title}" }
                            p { class: "contact__map-subtitle", "{content.map_subtitle}" }
                        }
                    }

                    div { class: "card contact__form-card",
                        h3 { class: "contact__form-title", "{content.form_title}" }
                        form { class: "contact__form", onsubmit: handle_submit,
                            div { class: "contact__row",
                                {render_field(ContactField::Name, content.form.placeholder(ContactField::Name), form)}
                                {render_field(ContactField::Email, content.form.placeholder(ContactField::Email), form)}
                            }
                            div { class: "contact__row",
                                {render_field(ContactField::Phone, content.form.placeholder(ContactField::Phone), form)}
                                {render_field(ContactField::Subject, content.form.placeholder(ContactField::Subject), form)}
                            }
                            {render_field(ContactField::Message, content.form.placeholder(ContactField::Message), form)}
                            button { r#type: "submit", class: "button button--primary contact__submit",
                                span { aria_hidden: "true", "➤" }
                                "{content.form.submit}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_info(info: &ContactInfo) -> Element {
    rsx! {
        div { key: "{info.title}", class: "contact__detail",
            div { class: "contact__detail-icon", IconGlyph { icon: info.icon } }
            div {
                h4 { class: "contact__detail-title", "{info.title}" }
                p { class: "contact__detail-text", "{info.details}" }
            }
        }
    }
}

fn render_field(field: ContactField, placeholder: &str, mut form: Signal<ContactForm>) -> Element {
    let value = form.read().get(field).to_string();

    if field == ContactField::Message {
        return rsx! {
            textarea {
                class: "contact__input contact__input--message",
                name: field.name(),
                placeholder: "{placeholder}",
                rows: "5",
                required: field.required(),
                value: "{value}",
                oninput: move |evt: FormEvent| form.with_mut(|f| f.set(field, evt.value())),
            }
        };
    }

    rsx! {
        input {
            class: "contact__input",
            name: field.name(),
            r#type: field.input_type(),
            placeholder: "{placeholder}",
            required: field.required(),
            value: "{value}",
            oninput: move |evt: FormEvent| form.with_mut(|f| f.set(field, evt.value())),
        }
    }
}
