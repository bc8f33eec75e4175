//! Bilingual locale selection.
//!
//! Content tables carry a Russian and an English column for every text
//! field. [`Locale`] selects which column set is projected into API
//! responses; editors fill Russian first, so an empty English column
//! falls back to the Russian text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Response locale: which bilingual column set to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Pick the text for this locale from a (russian, english) column pair.
    ///
    /// The Russian column is authoritative; an empty English column falls
    /// back to the Russian text so half-translated content stays readable.
    pub fn pick<'a>(&self, ru: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Ru => ru,
            Locale::En => {
                if en.trim().is_empty() {
                    ru
                } else {
                    en
                }
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(CoreError::Validation(format!(
                "Unknown locale '{other}', expected 'ru' or 'en'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_russian() {
        assert_eq!(Locale::default(), Locale::Ru);
    }

    #[test]
    fn parses_known_locales() {
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn english_falls_back_to_russian_when_empty() {
        assert_eq!(Locale::En.pick("Номер люкс", ""), "Номер люкс");
        assert_eq!(Locale::En.pick("Номер люкс", "  "), "Номер люкс");
        assert_eq!(Locale::En.pick("Номер люкс", "Deluxe room"), "Deluxe room");
    }

    #[test]
    fn russian_never_falls_back() {
        assert_eq!(Locale::Ru.pick("Номер люкс", "Deluxe room"), "Номер люкс");
    }

    #[test]
    fn serde_roundtrip_is_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let parsed: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, Locale::Ru);
    }
}
