use super::{Icon, ImageRef};
use crate::core::language::Language;
use crate::core::sections::SectionId;
use crate::t;

pub const HERO_IMAGE: ImageRef = "/assets/images/hero-campus.jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_apply: String,
    pub cta_apply_href: String,
    pub cta_learn: String,
    pub cta_learn_href: String,
    pub image: ImageRef,
    pub image_alt: String,
    pub stats: Vec<Stat>,
}

impl HeroContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "hero-title"),
            subtitle: t!(lang, "hero-subtitle"),
            description: t!(lang, "hero-description"),
            cta_apply: t!(lang, "hero-cta-apply"),
            cta_apply_href: SectionId::Admissions.href(),
            cta_learn: t!(lang, "hero-cta-learn"),
            cta_learn_href: SectionId::About.href(),
            image: HERO_IMAGE,
            image_alt: t!(lang, "hero-image-alt"),
            stats: vec![
                Stat {
                    label: t!(lang, "hero-stat-students-label"),
                    value: t!(lang, "hero-stat-students-value"),
                    icon: Icon::Users,
                },
                Stat {
                    label: t!(lang, "hero-stat-years-label"),
                    value: t!(lang, "hero-stat-years-value"),
                    icon: Icon::Book,
                },
                Stat {
                    label: t!(lang, "hero-stat-awards-label"),
                    value: t!(lang, "hero-stat-awards-value"),
                    icon: Icon::Award,
                },
            ],
        }
    }
}
