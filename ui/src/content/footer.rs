use super::navigation::{program_links, section_label};
use super::{Icon, NavLink};
use crate::core::language::Language;
use crate::core::sections::{self, SectionId};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    /// Brand colour modifier applied on hover.
    pub theme: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: Icon::Facebook,
        href: "#",
        theme: "social--facebook",
    },
    SocialLink {
        icon: Icon::Twitter,
        href: "#",
        theme: "social--twitter",
    },
    SocialLink {
        icon: Icon::Youtube,
        href: "#",
        theme: "social--youtube",
    },
    SocialLink {
        icon: Icon::Instagram,
        href: "#",
        theme: "social--instagram",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct FooterContent {
    pub brand_mark: String,
    pub school_name: String,
    pub description: String,
    pub social_title: String,
    pub social: Vec<SocialLink>,
    pub quick_links_title: String,
    pub quick_links: Vec<NavLink>,
    pub academics_title: String,
    pub academic_links: Vec<NavLink>,
    pub contact_title: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub newsletter_title: String,
    pub newsletter_description: String,
    pub newsletter_placeholder: String,
    pub newsletter_button: String,
    pub copyright: String,
}

impl FooterContent {
    pub fn for_language(lang: Language) -> Self {
        let quick_links = [
            SectionId::Home,
            SectionId::About,
            SectionId::Admissions,
            SectionId::Academics,
        ]
        .into_iter()
        .map(|section| NavLink {
            label: section_label(lang, section),
            href: section.href(),
        })
        .collect();

        let mut academic_links = program_links(lang);
        academic_links.push(NavLink {
            label: t!(lang, "footer-results"),
            href: sections::href(sections::RESULTS),
        });

        Self {
            brand_mark: t!(lang, "brand-mark"),
            school_name: t!(lang, "brand-name"),
            description: t!(lang, "footer-description"),
            social_title: t!(lang, "footer-social-title"),
            social: SOCIAL_LINKS.to_vec(),
            quick_links_title: t!(lang, "footer-quick-links-title"),
            quick_links,
            academics_title: t!(lang, "footer-academics-title"),
            academic_links,
            contact_title: t!(lang, "footer-contact-title"),
            address: t!(lang, "footer-address"),
            phone: t!(lang, "contact-phone-details"),
            email: t!(lang, "contact-email-details"),
            newsletter_title: t!(lang, "footer-newsletter-title"),
            newsletter_description: t!(lang, "footer-newsletter-description"),
            newsletter_placeholder: t!(lang, "footer-newsletter-placeholder"),
            newsletter_button: t!(lang, "footer-newsletter-button"),
            copyright: t!(lang, "footer-copyright"),
        }
    }
}
