// SPDX-License-Identifier: MPL-2.0
//! Translation tables backed by Fluent.
//!
//! The base English table (`en.ftl`) holds a default for every key. Each
//! other `.ftl` file is a sparse override table for one locale. The tables
//! stay separate bundles; lookups walk them in order.
//!
//! Keys are dot-namespaced (`home.hero.title`). Fluent identifiers cannot
//! contain dots, so a key maps to the message id with dots replaced by
//! hyphens (`home-hero-title`).

use crate::config::BASE_TRANSLATION_LOCALE;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tracing::debug;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

type Bundle = FluentBundle<FluentResource>;

pub struct Translations {
    base: Bundle,
    overrides: HashMap<LanguageIdentifier, Bundle>,
}

impl Translations {
    /// Loads the tables embedded in the binary.
    pub fn load() -> Result<Self> {
        let mut base = None;
        let mut overrides = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();

            if locale_str == BASE_TRANSLATION_LOCALE {
                base = Some(build_bundle(locale_str, source)?);
            } else {
                let locale = parse_locale(locale_str)?;
                overrides.insert(locale, build_bundle(locale_str, source)?);
            }
        }

        let base = base.ok_or_else(|| {
            Error::Translation(format!("missing base table {BASE_TRANSLATION_LOCALE}.ftl"))
        })?;
        Ok(Self { base, overrides })
    }

    /// Builds tables from in-memory Fluent sources.
    ///
    /// `overrides` pairs a locale code with its override source.
    pub fn from_sources(base: &str, overrides: &[(&str, &str)]) -> Result<Self> {
        let base = build_bundle(BASE_TRANSLATION_LOCALE, base.to_string())?;
        let mut bundles = HashMap::new();
        for (code, source) in overrides {
            bundles.insert(parse_locale(code)?, build_bundle(code, source.to_string())?);
        }
        Ok(Self {
            base,
            overrides: bundles,
        })
    }

    /// Whether `locale` has its own override table.
    pub fn has_override(&self, locale: &LanguageIdentifier) -> bool {
        self.overrides.contains_key(locale)
    }

    /// Looks `key` up in the locale's override table, then the base table.
    pub fn lookup(
        &self,
        locale: Option<&LanguageIdentifier>,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let id = message_id(key);
        locale
            .and_then(|locale| self.overrides.get(locale))
            .and_then(|bundle| format_message(bundle, &id, args))
            .or_else(|| format_message(&self.base, &id, args))
    }

    /// Resolves `key` through the full fallback chain.
    ///
    /// Order: locale override, base English, `fallback` (when non-empty),
    /// then the key itself. Never returns an empty string for a non-empty
    /// key.
    pub fn resolve(
        &self,
        locale: Option<&LanguageIdentifier>,
        key: &str,
        args: Option<&FluentArgs>,
        fallback: Option<&str>,
    ) -> String {
        if let Some(value) = self.lookup(locale, key, args) {
            return value;
        }
        debug!(key, "missing translation");
        match fallback {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => key.to_string(),
        }
    }
}

fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

fn parse_locale(code: &str) -> Result<LanguageIdentifier> {
    code.parse()
        .map_err(|_| Error::Translation(format!("invalid locale code {code}")))
}

fn build_bundle(code: &str, source: String) -> Result<Bundle> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::Translation(format!("{code}.ftl: {} parse error(s)", errors.len()))
    })?;
    let mut bundle = FluentBundle::new(vec![parse_locale(code)?]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| {
        Error::Translation(format!("{code}.ftl: {} duplicate message(s)", errors.len()))
    })?;
    Ok(bundle)
}

/// Formats message `id`, treating formatting errors as a miss.
fn format_message(bundle: &Bundle, id: &str, args: Option<&FluentArgs>) -> Option<String> {
    let message = bundle.get_message(id)?;
    let pattern = message.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        debug!(id, errors = errors.len(), "translation failed to format");
        None
    }
}
