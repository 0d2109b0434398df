//! In-page anchor identifiers.
//!
//! Navigation builds its link table from [`SectionId::NAV_ORDER`] and each
//! section renders `id: SectionId::X.anchor()`, so an anchor can only be
//! renamed here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Admissions,
    Academics,
    Facilities,
    News,
    Gallery,
    Contact,
}

impl SectionId {
    pub const NAV_ORDER: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Admissions,
        SectionId::Academics,
        SectionId::Facilities,
        SectionId::News,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Admissions => "admissions",
            SectionId::Academics => "academics",
            SectionId::Facilities => "facilities",
            SectionId::News => "news",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Anchors of the admissions cards (targets of the admissions submenu).
pub const ADMISSION_PROCESS: &str = "admission-process";
pub const ELIGIBILITY: &str = "eligibility";
pub const FEES: &str = "fees";
pub const SCHOLARSHIPS: &str = "scholarships";

/// Anchors of the secondary programme cards (targets of the academics submenu).
pub const SCIENCE: &str = "science";
pub const COMMERCE: &str = "commerce";
pub const HUMANITIES: &str = "humanities";

/// Footer-only link with no section on this page yet.
pub const RESULTS: &str = "results";

pub fn href(anchor: &str) -> String {
    format!("#{anchor}")
}
