use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::SectionHeader;
use crate::content::GalleryContent;
use crate::core::carousel::AutoCarousel;
use crate::core::language::Language;
use crate::core::sections::SectionId;
use crate::core::settings::GALLERY_INTERVAL_MS;
use crate::core::timing;

/// Auto-advancing photo gallery with clickable thumbnails.
///
/// The advance loop is a `use_future` owned by this component, so it stops
/// when the section unmounts. Thumbnail clicks jump straight to a slide
/// without restarting the loop.
#[component]
pub fn GallerySection(language: Language) -> Element {
    let content = GalleryContent::for_language(language);
    let mut carousel = use_signal(|| AutoCarousel::new(content.images.len()));

    use_future(move || async move {
        loop {
            timing::sleep_ms(GALLERY_INTERVAL_MS).await;
            carousel.with_mut(|c| c.tick());
            debug!("[gallery] advanced to {}", carousel.peek().index());
        }
    });

    let state = carousel();
    let current = state.index();

    rsx! {
        section { id: SectionId::Gallery.anchor(), class: "section section--tinted gallery",
            div { class: "section__inner",
                SectionHeader { title: content.title.clone(), subtitle: content.subtitle.clone() }

                div { class: "gallery__stage",
                    for (index, (image, alt)) in content.images.iter().zip(&content.image_alts).enumerate() {
                        img {
                            key: "{index}",
                            class: if state.is_active(index) { "gallery__slide gallery__slide--active" } else { "gallery__slide" },
                            src: *image,
                            alt: "{alt}",
                        }
                    }
                    div { class: "gallery__dots", aria_hidden: "true",
                        for index in 0..state.len() {
                            span {
                                key: "{index}",
                                class: if index == current { "gallery__dot gallery__dot--active" } else { "gallery__dot" },
                            }
                        }
                    }
                }

                div { class: "gallery__thumbnails",
                    for (index, (image, alt)) in content.images.iter().zip(&content.thumbnail_alts).enumerate() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: if index == current { "gallery__thumb gallery__thumb--active" } else { "gallery__thumb" },
                            onclick: move |_| {
                                carousel.with_mut(|c| c.select(index));
                            },
                            img { src: *image, alt: "{alt}" }
                        }
                    }
                }
            }
        }
    }
}
