// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the marketplace.
//!
//! This module provides the display-locale half of the localization layer
//! using the Fluent localization system.
//!
//! # Features
//!
//! - Locale derived from the active country until the user picks one
//! - Embedded `.ftl` tables: a base English table plus sparse per-locale overrides
//! - Four-step lookup: locale override, base English, caller fallback, raw key
//! - Locale-aware date, time and relative-time formatting

pub mod catalog;
pub mod fluent;
pub mod format;
pub mod provider;

pub use catalog::{default_locale, find_locale, LocaleConfig, NumberFormat, TextDirection, LOCALES};
pub use fluent::Translations;
pub use fluent_bundle::{FluentArgs, FluentValue};
pub use provider::{locale_for_country, LocaleProvider};
