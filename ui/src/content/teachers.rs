use super::ImageRef;
use crate::core::language::Language;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub name: String,
    pub subject: String,
    pub experience: String,
    pub portrait: ImageRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeachersContent {
    pub title: String,
    pub subtitle: String,
    pub experience_label: String,
    pub prev_label: String,
    pub next_label: String,
    pub teachers: Vec<Teacher>,
}

impl TeachersContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "teachers-title"),
            subtitle: t!(lang, "teachers-subtitle"),
            experience_label: t!(lang, "teachers-experience-label"),
            prev_label: t!(lang, "teachers-prev"),
            next_label: t!(lang, "teachers-next"),
            teachers: vec![
                Teacher {
                    name: t!(lang, "teacher-sabina-name"),
                    subject: t!(lang, "teacher-sabina-subject"),
                    experience: t!(lang, "teacher-sabina-experience"),
                    portrait: "https://images.unsplash.com/photo-1494790108755-2616c96a3fd8?w=300&h=300&fit=crop",
                },
                Teacher {
                    name: t!(lang, "teacher-karim-name"),
                    subject: t!(lang, "teacher-karim-subject"),
                    experience: t!(lang, "teacher-karim-experience"),
                    portrait: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop",
                },
                Teacher {
                    name: t!(lang, "teacher-rahima-name"),
                    subject: t!(lang, "teacher-rahima-subject"),
                    experience: t!(lang, "teacher-rahima-experience"),
                    portrait: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop",
                },
                Teacher {
                    name: t!(lang, "teacher-ahmed-name"),
                    subject: t!(lang, "teacher-ahmed-subject"),
                    experience: t!(lang, "teacher-ahmed-experience"),
                    portrait: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
                },
                Teacher {
                    name: t!(lang, "teacher-nasrin-name"),
                    subject: t!(lang, "teacher-nasrin-subject"),
                    experience: t!(lang, "teacher-nasrin-experience"),
                    portrait: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=300&h=300&fit=crop",
                },
            ],
        }
    }

    /// Accessible label for indicator dot `page` (zero-based).
    pub fn page_label(lang: Language, page: usize) -> String {
        t!(lang, "teachers-page-label", page = (page + 1))
    }
}
