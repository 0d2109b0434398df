use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{Navigation, ToastHost, ToastSlot};
use crate::core::contact::Acknowledgement;
use crate::core::language::Language;
use crate::i18n;
use crate::sections::{
    AboutSection, AcademicsSection, AdmissionsSection, ContactSection, Footer, GallerySection,
    HeroSection, PrincipalSection, TeachersSection,
};
use crate::t;

/// The whole single-page site.
///
/// Owns the two pieces of page-wide state: the active language (Bengali
/// until the visitor switches) and the toast slot fed by the contact form.
/// Every section receives `language` as a prop, so one `set` re-renders the
/// page in the other language while local state (tabs, carousels, the
/// half-typed form) stays where it was.
#[component]
pub fn Home() -> Element {
    use_hook(i18n::init);

    let mut language = use_signal(Language::default);
    let mut toast = use_signal(ToastSlot::default);
    let lang = language();
    let title = t!(lang, "brand-name");

    rsx! {
        document::Title { "{title}" }
        div { class: "site", lang: lang.code(),
            Navigation {
                language: lang,
                on_language_change: move |next: Language| {
                    info!("[i18n] language {} -> {}", language.peek().code(), next.code());
                    language.set(next);
                },
            }
            main { class: "site__main",
                HeroSection { language: lang }
                AboutSection { language: lang }
                AdmissionsSection { language: lang }
                AcademicsSection { language: lang }
                PrincipalSection { language: lang }
                TeachersSection { language: lang }
                GallerySection { language: lang }
                ContactSection {
                    language: lang,
                    on_submit: move |ack: Acknowledgement| {
                        toast.with_mut(|slot| slot.show(ack));
                    },
                }
            }
            Footer { language: lang }
            ToastHost { slot: toast }
        }
    }
}
