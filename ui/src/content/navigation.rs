use crate::core::language::Language;
use crate::core::sections::{self, SectionId};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// A top-level menu entry, optionally with a hover submenu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: String,
    pub submenu: Vec<NavLink>,
}

impl NavItem {
    pub fn href(&self) -> String {
        self.section.href()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavContent {
    pub brand_mark: String,
    pub brand_name: String,
    pub items: Vec<NavItem>,
    pub toggle_short: String,
    pub toggle_long: String,
    pub toggle_label: String,
    pub menu_open: String,
    pub menu_close: String,
}

fn link(label: String, anchor: &str) -> NavLink {
    NavLink {
        label,
        href: sections::href(anchor),
    }
}

impl NavContent {
    pub fn for_language(lang: Language) -> Self {
        let items = SectionId::NAV_ORDER
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section_label(lang, section),
                submenu: submenu(lang, section),
            })
            .collect();

        Self {
            brand_mark: t!(lang, "brand-mark"),
            brand_name: t!(lang, "brand-name"),
            items,
            toggle_short: t!(lang, "nav-toggle-short"),
            toggle_long: t!(lang, "nav-toggle-long"),
            toggle_label: t!(lang, "nav-language-label"),
            menu_open: t!(lang, "nav-menu-open"),
            menu_close: t!(lang, "nav-menu-close"),
        }
    }
}

/// Menu label for a section; the footer reuses these.
pub(crate) fn section_label(lang: Language, section: SectionId) -> String {
    match section {
        SectionId::Home => t!(lang, "nav-home"),
        SectionId::About => t!(lang, "nav-about"),
        SectionId::Admissions => t!(lang, "nav-admissions"),
        SectionId::Academics => t!(lang, "nav-academics"),
        SectionId::Facilities => t!(lang, "nav-facilities"),
        SectionId::News => t!(lang, "nav-news"),
        SectionId::Gallery => t!(lang, "nav-gallery"),
        SectionId::Contact => t!(lang, "nav-contact"),
    }
}

/// Links to the three secondary programme groups.
pub(crate) fn program_links(lang: Language) -> Vec<NavLink> {
    vec![
        link(t!(lang, "nav-science"), sections::SCIENCE),
        link(t!(lang, "nav-commerce"), sections::COMMERCE),
        link(t!(lang, "nav-humanities"), sections::HUMANITIES),
    ]
}

fn submenu(lang: Language, section: SectionId) -> Vec<NavLink> {
    match section {
        SectionId::Admissions => vec![
            link(t!(lang, "nav-admission-process"), sections::ADMISSION_PROCESS),
            link(t!(lang, "nav-eligibility"), sections::ELIGIBILITY),
            link(t!(lang, "nav-fees"), sections::FEES),
            link(t!(lang, "nav-scholarships"), sections::SCHOLARSHIPS),
        ],
        SectionId::Academics => program_links(lang),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_table_covers_every_section_once() {
        let nav = NavContent::for_language(Language::En);
        let hrefs: Vec<String> = nav.items.iter().map(NavItem::href).collect();
        let expected: Vec<String> = SectionId::NAV_ORDER.iter().map(|s| s.href()).collect();
        assert_eq!(hrefs, expected);
    }

    #[test]
    fn only_admissions_and_academics_have_submenus() {
        let nav = NavContent::for_language(Language::Bn);
        for item in &nav.items {
            let has_submenu = !item.submenu.is_empty();
            let expected = matches!(item.section, SectionId::Admissions | SectionId::Academics);
            assert_eq!(has_submenu, expected, "{:?}", item.section);
        }
    }

    #[test]
    fn toggle_names_the_other_language() {
        assert_eq!(NavContent::for_language(Language::Bn).toggle_short, "EN");
        assert_eq!(NavContent::for_language(Language::En).toggle_short, "বাং");
        assert_eq!(NavContent::for_language(Language::En).toggle_long, "বাংলা");
    }
}
