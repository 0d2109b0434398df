//! Page sections, top to bottom. Each one is a pure function of `language`
//! except for the local UI state noted on the component.

mod about;
mod academics;
mod admissions;
mod contact;
mod footer;
mod gallery;
mod hero;
mod principal;
mod teachers;

pub use about::AboutSection;
pub use academics::AcademicsSection;
pub use admissions::AdmissionsSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use principal::PrincipalSection;
pub use teachers::TeachersSection;
