// SPDX-License-Identifier: MPL-2.0
//! Active locale state, translation lookup and date formatting.

use super::catalog::{default_locale, find_locale, LocaleConfig, TextDirection, LOCALES};
use super::fluent::Translations;
use super::format::{self, RelativeBucket};
use crate::config::{PreferenceStore, LOCALE_STORAGE_KEY};
use crate::country::{CountryConfig, CountryProvider};
use chrono::{DateTime, TimeZone, Utc};
use fluent_bundle::FluentArgs;
use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;
use tracing::{debug, warn};

/// State container for the display locale.
///
/// Without an explicit user choice the locale follows the active country.
/// Once [`LocaleProvider::set_locale`] succeeds, the persisted choice takes
/// priority on every later read and every later load.
pub struct LocaleProvider {
    country: Rc<CountryProvider>,
    store: Rc<dyn PreferenceStore>,
    translations: Translations,
    explicit: Cell<Option<&'static LocaleConfig>>,
}

impl LocaleProvider {
    pub fn init(
        country: Rc<CountryProvider>,
        store: Rc<dyn PreferenceStore>,
        translations: Translations,
    ) -> Self {
        let explicit = store
            .get(LOCALE_STORAGE_KEY)
            .and_then(|code| find_locale(&code));
        if let Some(locale) = explicit {
            debug!(locale = locale.code, "restored saved locale");
        }

        Self {
            country,
            store,
            translations,
            explicit: Cell::new(explicit),
        }
    }

    /// The active locale.
    pub fn locale(&self) -> &'static LocaleConfig {
        self.explicit
            .get()
            .unwrap_or_else(|| locale_for_country(self.country.country()))
    }

    /// Selects the locale with `code` as an explicit preference.
    ///
    /// Unknown codes are ignored. Returns whether the selection was applied.
    pub fn set_locale(&self, code: &str) -> bool {
        let Some(locale) = find_locale(code) else {
            return false;
        };

        self.explicit.set(Some(locale));
        if let Err(err) = self.store.set(LOCALE_STORAGE_KEY, locale.code) {
            warn!(locale = locale.code, error = %err, "failed to persist locale");
        }
        true
    }

    pub fn has_explicit_locale(&self) -> bool {
        self.explicit.get().is_some()
    }

    pub fn direction(&self) -> TextDirection {
        self.locale().direction
    }

    pub fn available_locales(&self) -> &'static [LocaleConfig] {
        &LOCALES
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Translates `key`, falling back to English and then to the key.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, None, None)
    }

    /// Translates `key`, using `fallback` when no table has it.
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.resolve(key, None, Some(fallback))
    }

    /// Translates `key` with Fluent arguments.
    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        self.resolve(key, Some(args), None)
    }

    fn resolve(&self, key: &str, args: Option<&FluentArgs>, fallback: Option<&str>) -> String {
        let language = self.locale().language_id();
        self.translations
            .resolve(language.as_ref(), key, args, fallback)
    }

    fn t_count(&self, key: &str, count: i64) -> String {
        let mut args = FluentArgs::new();
        args.set("count", count);
        self.t_args(key, &args)
    }

    pub fn format_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        format::format_date(self.locale(), date)
    }

    pub fn format_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        format::format_time(self.locale(), date)
    }

    pub fn format_date_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        format::format_date_time(self.locale(), date)
    }

    /// Describes how long ago `date` was, relative to the current time.
    pub fn format_relative_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        self.format_relative_time_at(date, Utc::now())
    }

    /// Describes how long before `now` the timestamp `date` was.
    pub fn format_relative_time_at<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        now: DateTime<Utc>,
    ) -> String
    where
        Tz::Offset: Display,
    {
        let elapsed = now.signed_duration_since(date.with_timezone(&Utc));
        match format::relative_bucket(elapsed) {
            RelativeBucket::JustNow => self.t("time.justNow"),
            RelativeBucket::Minutes(n) => self.t_count("time.minutesAgo", n),
            RelativeBucket::Hours(n) => self.t_count("time.hoursAgo", n),
            RelativeBucket::Days(n) => self.t_count("time.daysAgo", n),
            RelativeBucket::Calendar => self.format_date(date),
        }
    }
}

/// Default locale for `country`, or en-GB if its code is not in the catalog.
pub fn locale_for_country(country: &CountryConfig) -> &'static LocaleConfig {
    find_locale(country.locale).unwrap_or_else(default_locale)
}
