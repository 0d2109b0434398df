//! Typed, language-keyed content bundles.
//!
//! Each section has one bundle struct with a `for_language` constructor that
//! pulls every string from the Fluent catalog via `t!`. Lists (stats,
//! subjects, teachers, links) have a fixed shape in code, so both languages
//! always produce the same structure; only the text differs.

mod about;
mod academics;
mod admissions;
mod contact;
mod footer;
mod gallery;
mod hero;
mod navigation;
mod principal;
mod teachers;

pub use about::{AboutContent, Achievement, Pillar};
pub use academics::{AcademicLevel, AcademicsContent, Facility, Program};
pub use admissions::{AdmissionStep, AdmissionsContent};
pub use contact::{ContactContent, ContactInfo, FormLabels};
pub use footer::{FooterContent, SocialLink};
pub use gallery::{GalleryContent, GALLERY_IMAGES};
pub use hero::{HeroContent, Stat};
pub use navigation::{NavContent, NavItem, NavLink};
pub use principal::PrincipalContent;
pub use teachers::{Teacher, TeachersContent};

use crate::core::language::Language;

/// Opaque image handle, resolved by the hosting environment (path or URL).
pub type ImageRef = &'static str;

/// Decorative icon reference. Rendered as a glyph; the icon set itself is
/// not part of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Book,
    Award,
    Target,
    Eye,
    Heart,
    Trophy,
    Flask,
    Calculator,
    Scroll,
    Microscope,
    Globe,
    Palette,
    Clipboard,
    Check,
    Wallet,
    Star,
    Pin,
    Phone,
    Mail,
    Clock,
    Quote,
    GraduationCap,
    Facebook,
    Twitter,
    Youtube,
    Instagram,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Book => "📖",
            Icon::Award => "🏅",
            Icon::Target => "🎯",
            Icon::Eye => "👁",
            Icon::Heart => "❤",
            Icon::Trophy => "🏆",
            Icon::Flask => "⚗",
            Icon::Calculator => "🧮",
            Icon::Scroll => "📜",
            Icon::Microscope => "🔬",
            Icon::Globe => "🌐",
            Icon::Palette => "🎨",
            Icon::Clipboard => "📋",
            Icon::Check => "✔",
            Icon::Wallet => "💳",
            Icon::Star => "⭐",
            Icon::Pin => "📍",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
            Icon::Clock => "🕗",
            Icon::Quote => "❝",
            Icon::GraduationCap => "🎓",
            Icon::Facebook => "f",
            Icon::Twitter => "𝕏",
            Icon::Youtube => "▶",
            Icon::Instagram => "◎",
        }
    }

    /// CSS modifier, e.g. `icon--users`.
    pub fn class(self) -> String {
        format!("icon icon--{}", format!("{self:?}").to_lowercase())
    }
}

/// Every bundle on the page for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub admissions: AdmissionsContent,
    pub academics: AcademicsContent,
    pub principal: PrincipalContent,
    pub teachers: TeachersContent,
    pub gallery: GalleryContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            nav: NavContent::for_language(lang),
            hero: HeroContent::for_language(lang),
            about: AboutContent::for_language(lang),
            admissions: AdmissionsContent::for_language(lang),
            academics: AcademicsContent::for_language(lang),
            principal: PrincipalContent::for_language(lang),
            teachers: TeachersContent::for_language(lang),
            gallery: GalleryContent::for_language(lang),
            contact: ContactContent::for_language(lang),
            footer: FooterContent::for_language(lang),
        }
    }

    /// `(section, heading, subheading)` for every rendered section.
    pub fn headlines(&self) -> Vec<(&'static str, &str, &str)> {
        vec![
            ("hero", self.hero.title.as_str(), self.hero.subtitle.as_str()),
            ("about", self.about.title.as_str(), self.about.subtitle.as_str()),
            (
                "admissions",
                self.admissions.title.as_str(),
                self.admissions.subtitle.as_str(),
            ),
            ("academics", self.academics.title.as_str(), self.academics.subtitle.as_str()),
            (
                "facilities",
                self.academics.facilities_title.as_str(),
                self.academics.facilities_subtitle.as_str(),
            ),
            (
                "principal",
                self.principal.title.as_str(),
                self.principal.designation.as_str(),
            ),
            ("teachers", self.teachers.title.as_str(), self.teachers.subtitle.as_str()),
            ("gallery", self.gallery.title.as_str(), self.gallery.subtitle.as_str()),
            ("contact", self.contact.title.as_str(), self.contact.subtitle.as_str()),
            (
                "footer",
                self.footer.school_name.as_str(),
                self.footer.description.as_str(),
            ),
        ]
    }
}
