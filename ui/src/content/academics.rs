use super::{Icon, ImageRef};
use crate::core::language::Language;
use crate::core::sections;
use crate::t;

pub const SCIENCE_LAB_IMAGE: ImageRef = "/assets/images/science-lab.jpg";
pub const CLASSROOM_IMAGE: ImageRef = "/assets/images/classroom.jpg";
pub const LIBRARY_IMAGE: ImageRef = "/assets/images/library.jpg";

/// Selected academics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcademicLevel {
    Primary,
    #[default]
    Secondary,
}

impl AcademicLevel {
    pub const ALL: [AcademicLevel; 2] = [AcademicLevel::Primary, AcademicLevel::Secondary];

    /// Every tab panel with whether it is shown while `self` is selected.
    ///
    /// Inactive panels stay mounted and are only hidden, so the programme
    /// anchors targeted by the navigation resolve under either tab.
    pub fn panels(self) -> [(AcademicLevel, bool); 2] {
        Self::ALL.map(|panel| (panel, panel == self))
    }
}

/// A secondary programme group card.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub anchor: &'static str,
    pub title: String,
    pub description: String,
    pub subjects: Vec<String>,
    pub icon: Icon,
    pub image: ImageRef,
    /// Colour theme modifier for the image overlay.
    pub theme: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcademicsContent {
    pub title: String,
    pub subtitle: String,
    pub tab_primary: String,
    pub tab_secondary: String,
    pub primary_heading: String,
    pub primary_text: String,
    pub primary_subjects: Vec<String>,
    pub programs: Vec<Program>,
    pub cta: String,
    pub facilities_title: String,
    pub facilities_subtitle: String,
    pub facilities: Vec<Facility>,
}

impl AcademicsContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            title: t!(lang, "academics-title"),
            subtitle: t!(lang, "academics-subtitle"),
            tab_primary: t!(lang, "academics-tab-primary"),
            tab_secondary: t!(lang, "academics-tab-secondary"),
            primary_heading: t!(lang, "academics-primary-heading"),
            primary_text: t!(lang, "academics-primary-text"),
            primary_subjects: vec![
                t!(lang, "academics-primary-bangla"),
                t!(lang, "academics-primary-english"),
                t!(lang, "academics-primary-math"),
                t!(lang, "academics-primary-science"),
                t!(lang, "academics-primary-bgs"),
                t!(lang, "academics-primary-religion"),
            ],
            programs: vec![
                Program {
                    anchor: sections::SCIENCE,
                    title: t!(lang, "academics-science-title"),
                    description: t!(lang, "academics-science-description"),
                    subjects: vec![
                        t!(lang, "academics-science-physics"),
                        t!(lang, "academics-science-chemistry"),
                        t!(lang, "academics-science-biology"),
                        t!(lang, "academics-science-higher-math"),
                    ],
                    icon: Icon::Flask,
                    image: SCIENCE_LAB_IMAGE,
                    theme: "program--blue",
                },
                Program {
                    anchor: sections::COMMERCE,
                    title: t!(lang, "academics-commerce-title"),
                    description: t!(lang, "academics-commerce-description"),
                    subjects: vec![
                        t!(lang, "academics-commerce-accounting"),
                        t!(lang, "academics-commerce-business"),
                        t!(lang, "academics-commerce-economics"),
                        t!(lang, "academics-commerce-banking"),
                    ],
                    icon: Icon::Calculator,
                    image: CLASSROOM_IMAGE,
                    theme: "program--green",
                },
                Program {
                    anchor: sections::HUMANITIES,
                    title: t!(lang, "academics-humanities-title"),
                    description: t!(lang, "academics-humanities-description"),
                    subjects: vec![
                        t!(lang, "academics-humanities-history"),
                        t!(lang, "academics-humanities-geography"),
                        t!(lang, "academics-humanities-social-science"),
                        t!(lang, "academics-humanities-literature"),
                    ],
                    icon: Icon::Scroll,
                    image: LIBRARY_IMAGE,
                    theme: "program--orange",
                },
            ],
            cta: t!(lang, "academics-cta"),
            facilities_title: t!(lang, "facilities-title"),
            facilities_subtitle: t!(lang, "facilities-subtitle"),
            facilities: vec![
                Facility {
                    name: t!(lang, "facilities-labs"),
                    icon: Icon::Microscope,
                },
                Facility {
                    name: t!(lang, "facilities-library"),
                    icon: Icon::Globe,
                },
                Facility {
                    name: t!(lang, "facilities-workshops"),
                    icon: Icon::Palette,
                },
            ],
        }
    }

    pub fn tab_label(&self, level: AcademicLevel) -> &str {
        match level {
            AcademicLevel::Primary => &self.tab_primary,
            AcademicLevel::Secondary => &self.tab_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_panel_stays_mounted_and_only_the_selected_one_shows() {
        for active in AcademicLevel::ALL {
            let panels = active.panels();
            let mounted: Vec<_> = panels.iter().map(|(panel, _)| *panel).collect();
            assert_eq!(mounted, AcademicLevel::ALL.to_vec(), "active={active:?}");

            let shown: Vec<_> = panels
                .iter()
                .filter(|(_, shown)| *shown)
                .map(|(panel, _)| *panel)
                .collect();
            assert_eq!(shown, vec![active]);
        }
    }
}
