use super::ImageRef;
use crate::core::language::Language;
use crate::t;

pub const PRINCIPAL_PORTRAIT: ImageRef =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalContent {
    pub title: String,
    pub quote: String,
    pub name: String,
    pub designation: String,
    pub portrait: ImageRef,
    pub portrait_alt: String,
}

impl PrincipalContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "principal-title"),
            quote: t!(lang, "principal-quote"),
            name: t!(lang, "principal-name"),
            designation: t!(lang, "principal-designation"),
            portrait: PRINCIPAL_PORTRAIT,
            portrait_alt: t!(lang, "principal-image-alt"),
        }
    }
}
