// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the localization layer.
//!
//! This module serves as the single source of truth for storage keys,
//! fallback codes and formatting thresholds. Constants are organized by
//! category.

// ==========================================================================
// Storage Keys
// ==========================================================================

/// Preference key holding the selected country code.
pub const COUNTRY_STORAGE_KEY: &str = "clubup-country";

/// Preference key holding the explicitly selected locale code.
pub const LOCALE_STORAGE_KEY: &str = "clubup-locale";

// ==========================================================================
// Fallback Codes
// ==========================================================================

/// Country used before detection runs and whenever detection finds nothing.
pub const DEFAULT_COUNTRY_CODE: &str = "GB";

/// Locale used when a country's default locale is not in the catalog.
pub const DEFAULT_LOCALE_CODE: &str = "en-GB";

/// Currency that catalog prices are quoted in when no other is given.
pub const BASE_CURRENCY: &str = "GBP";

/// Name (without extension) of the base English translation table.
pub const BASE_TRANSLATION_LOCALE: &str = "en";

// ==========================================================================
// Relative Time Thresholds
// ==========================================================================

/// Below this many seconds a timestamp reads as "just now".
pub const JUST_NOW_LIMIT_SECS: i64 = 60;

/// Below this many minutes a timestamp is expressed in minutes.
pub const MINUTES_LIMIT: i64 = 60;

/// Below this many hours a timestamp is expressed in hours.
pub const HOURS_LIMIT: i64 = 24;

/// Below this many days a timestamp is expressed in days.
/// Older timestamps are shown as a calendar date.
pub const DAYS_LIMIT: i64 = 7;
