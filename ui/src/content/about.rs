use super::Icon;
use crate::core::language::Language;
use crate::t;

/// Mission / vision / values card.
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    pub title: String,
    pub text: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub count: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub pillars: [Pillar; 3],
    pub history_title: String,
    pub history: String,
    pub cta: String,
    pub achievements: Vec<Achievement>,
}

impl AboutContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "about-title"),
            subtitle: t!(lang, "about-subtitle"),
            pillars: [
                Pillar {
                    title: t!(lang, "about-mission-title"),
                    text: t!(lang, "about-mission-text"),
                    icon: Icon::Target,
                },
                Pillar {
                    title: t!(lang, "about-vision-title"),
                    text: t!(lang, "about-vision-text"),
                    icon: Icon::Eye,
                },
                Pillar {
                    title: t!(lang, "about-values-title"),
                    text: t!(lang, "about-values-text"),
                    icon: Icon::Heart,
                },
            ],
            history_title: t!(lang, "about-history-title"),
            history: t!(lang, "about-history-text"),
            cta: t!(lang, "about-cta"),
            achievements: vec![
                Achievement {
                    title: t!(lang, "about-achievement-awards-title"),
                    count: t!(lang, "about-achievement-awards-count"),
                    icon: Icon::Trophy,
                },
                Achievement {
                    title: t!(lang, "about-achievement-faculty-title"),
                    count: t!(lang, "about-achievement-faculty-count"),
                    icon: Icon::Users,
                },
                Achievement {
                    title: t!(lang, "about-achievement-programs-title"),
                    count: t!(lang, "about-achievement-programs-count"),
                    icon: Icon::Book,
                },
            ],
        }
    }
}
