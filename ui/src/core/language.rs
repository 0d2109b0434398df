//! The site-wide language switch.

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported display languages. Bengali is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bn,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Bn, Language::En];

    /// Short code used in markup (`lang` attribute).
    pub fn code(self) -> &'static str {
        match self {
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    /// Locale folder of the Fluent catalog backing this language.
    pub fn locale(self) -> &'static str {
        match self {
            Language::Bn => "bn-BD",
            Language::En => "en-US",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.locale()
            .parse()
            .expect("static locale tags are valid language identifiers")
    }

    /// The language the navigation toggle switches to.
    pub fn toggled(self) -> Self {
        match self {
            Language::Bn => Language::En,
            Language::En => Language::Bn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bengali() {
        assert_eq!(Language::default(), Language::Bn);
    }

    #[test]
    fn locale_starts_with_code() {
        for lang in Language::ALL {
            assert!(lang.locale().starts_with(lang.code()), "{lang:?}");
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn locale_parses_as_langid() {
        assert_eq!(Language::Bn.langid().language.as_str(), "bn");
        assert_eq!(Language::En.langid().to_string(), "en-US");
    }

    #[test]
    fn serializes_as_short_code() {
        let json = serde_json::to_string(&Language::Bn).unwrap();
        assert_eq!(json, "\"bn\"");
    }
}
