//! Platform-neutral state and data: language, carousels, contact form, anchors.

pub mod carousel;
pub mod contact;
pub mod language;
pub mod sections;
pub mod settings;
pub mod timing;

pub use language::Language;
