// SPDX-License-Identifier: MPL-2.0
//! Composition root for the localization layer.
//!
//! Mounts the [`CountryProvider`] first and the [`LocaleProvider`] on top of
//! it, both sharing one preference store.

use crate::config::PreferenceStore;
use crate::country::{CountryProvider, TimezoneSource};
use crate::error::Result;
use crate::i18n::{LocaleProvider, Translations};
use std::rc::Rc;

pub struct Localization {
    country: Rc<CountryProvider>,
    locale: LocaleProvider,
}

impl Localization {
    /// Mounts both providers with the embedded translation tables.
    pub fn mount(store: Rc<dyn PreferenceStore>, timezone: &dyn TimezoneSource) -> Result<Self> {
        let translations = Translations::load()?;
        Ok(Self::with_translations(store, timezone, translations))
    }

    /// Mounts both providers with the given translation tables.
    pub fn with_translations(
        store: Rc<dyn PreferenceStore>,
        timezone: &dyn TimezoneSource,
        translations: Translations,
    ) -> Self {
        let country = Rc::new(CountryProvider::init(store.clone(), timezone));
        let locale = LocaleProvider::init(country.clone(), store, translations);
        Self { country, locale }
    }

    /// Country selection and pricing.
    pub fn country_provider(&self) -> &CountryProvider {
        &self.country
    }

    /// Locale selection, translation and date formatting.
    pub fn locale_provider(&self) -> &LocaleProvider {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::country::FixedTimezone;

    #[test]
    fn mount_wires_locale_to_country() {
        let store = Rc::new(MemoryStore::new());
        let app = Localization::mount(store, &FixedTimezone::new("America/Toronto"))
            .expect("embedded tables should parse");

        assert_eq!(app.country_provider().country().code, "CA");
        assert_eq!(app.locale_provider().locale().code, "en-CA");

        app.country_provider().set_country("US");
        assert_eq!(app.locale_provider().locale().code, "en-US");
    }

    #[test]
    fn with_translations_uses_given_tables() {
        let translations = Translations::from_sources("brand = ClubUp\n", &[]).unwrap();
        let app = Localization::with_translations(
            Rc::new(MemoryStore::new()),
            &FixedTimezone::new("Europe/London"),
            translations,
        );
        assert_eq!(app.locale_provider().t("brand"), "ClubUp");
        assert_eq!(app.locale_provider().t("home.hero.title"), "home.hero.title");
    }
}
