use super::ImageRef;
use crate::core::language::Language;
use crate::t;

/// Gallery slides, in display order.
pub const GALLERY_IMAGES: [ImageRef; 5] = [
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1580582932707-520aed937b7b?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=500&fit=crop",
];

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryContent {
    pub title: String,
    pub subtitle: String,
    pub images: Vec<ImageRef>,
    pub image_alts: Vec<String>,
    pub thumbnail_alts: Vec<String>,
}

impl GalleryContent {
    pub fn for_language(lang: Language) -> Self {
        let count = GALLERY_IMAGES.len();
        Self {
            title: t!(lang, "gallery-title"),
            subtitle: t!(lang, "gallery-subtitle"),
            images: GALLERY_IMAGES.to_vec(),
            image_alts: (1..=count)
                .map(|index| t!(lang, "gallery-image-alt", index = index))
                .collect(),
            thumbnail_alts: (1..=count)
                .map(|index| t!(lang, "gallery-thumbnail-alt", index = index))
                .collect(),
        }
    }
}
