// SPDX-License-Identifier: MPL-2.0
//! Static locale catalog.

use crate::config::DEFAULT_LOCALE_CODE;
use chrono::Locale as TimeLocale;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
}

const COMMA_DOT: NumberFormat = NumberFormat {
    group_separator: ",",
    decimal_separator: ".",
};

const DOT_COMMA: NumberFormat = NumberFormat {
    group_separator: ".",
    decimal_separator: ",",
};

#[derive(Debug, Clone, Copy)]
pub struct LocaleConfig {
    /// BCP 47 code, unique across [`LOCALES`].
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub direction: TextDirection,
    pub number_format: NumberFormat,
    /// strftime pattern for calendar dates.
    pub date_pattern: &'static str,
    /// strftime pattern for times of day.
    pub time_pattern: &'static str,
    /// Month and day names used by the patterns.
    pub time_locale: TimeLocale,
}

impl LocaleConfig {
    /// Parsed language identifier, used to select translation tables.
    pub fn language_id(&self) -> Option<LanguageIdentifier> {
        self.code.parse().ok()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }
}

pub static LOCALES: [LocaleConfig; 10] = [
    LocaleConfig {
        code: "en-GB",
        name: "English (UK)",
        native_name: "English (UK)",
        flag: "🇬🇧",
        direction: TextDirection::Ltr,
        number_format: COMMA_DOT,
        date_pattern: "%-d %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::en_GB,
    },
    LocaleConfig {
        code: "en-US",
        name: "English (US)",
        native_name: "English (US)",
        flag: "🇺🇸",
        direction: TextDirection::Ltr,
        number_format: COMMA_DOT,
        date_pattern: "%B %-d, %Y",
        time_pattern: "%-I:%M %p",
        time_locale: TimeLocale::en_US,
    },
    LocaleConfig {
        code: "en-AU",
        name: "English (Australia)",
        native_name: "English (Australia)",
        flag: "🇦🇺",
        direction: TextDirection::Ltr,
        number_format: COMMA_DOT,
        date_pattern: "%-d %B %Y",
        time_pattern: "%-I:%M %p",
        time_locale: TimeLocale::en_AU,
    },
    LocaleConfig {
        code: "en-CA",
        name: "English (Canada)",
        native_name: "English (Canada)",
        flag: "🇨🇦",
        direction: TextDirection::Ltr,
        number_format: COMMA_DOT,
        date_pattern: "%B %-d, %Y",
        time_pattern: "%-I:%M %p",
        time_locale: TimeLocale::en_CA,
    },
    LocaleConfig {
        code: "fr-FR",
        name: "French",
        native_name: "Français",
        flag: "🇫🇷",
        direction: TextDirection::Ltr,
        number_format: NumberFormat {
            group_separator: "\u{202f}",
            decimal_separator: ",",
        },
        date_pattern: "%-d %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::fr_FR,
    },
    LocaleConfig {
        code: "de-DE",
        name: "German",
        native_name: "Deutsch",
        flag: "🇩🇪",
        direction: TextDirection::Ltr,
        number_format: DOT_COMMA,
        date_pattern: "%-d. %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::de_DE,
    },
    LocaleConfig {
        code: "es-ES",
        name: "Spanish",
        native_name: "Español",
        flag: "🇪🇸",
        direction: TextDirection::Ltr,
        number_format: DOT_COMMA,
        date_pattern: "%-d de %B de %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::es_ES,
    },
    LocaleConfig {
        code: "it-IT",
        name: "Italian",
        native_name: "Italiano",
        flag: "🇮🇹",
        direction: TextDirection::Ltr,
        number_format: DOT_COMMA,
        date_pattern: "%-d %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::it_IT,
    },
    LocaleConfig {
        code: "nl-NL",
        name: "Dutch",
        native_name: "Nederlands",
        flag: "🇳🇱",
        direction: TextDirection::Ltr,
        number_format: DOT_COMMA,
        date_pattern: "%-d %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::nl_NL,
    },
    LocaleConfig {
        code: "ar-AE",
        name: "Arabic",
        native_name: "العربية",
        flag: "🇦🇪",
        direction: TextDirection::Rtl,
        number_format: COMMA_DOT,
        date_pattern: "%-d %B %Y",
        time_pattern: "%H:%M",
        time_locale: TimeLocale::ar_AE,
    },
];

/// Looks up a locale by its exact code.
pub fn find_locale(code: &str) -> Option<&'static LocaleConfig> {
    LOCALES.iter().find(|locale| locale.code == code)
}

/// The hardcoded fallback locale (en-GB).
pub fn default_locale() -> &'static LocaleConfig {
    find_locale(DEFAULT_LOCALE_CODE).unwrap_or(&LOCALES[0])
}
