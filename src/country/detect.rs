// SPDX-License-Identifier: MPL-2.0
//! First-run country detection from the runtime timezone.
//!
//! The heuristic is intentionally coarse: a handful of timezone substrings
//! pick a region and everything else falls back to GB. It is not a
//! geolocation service.

use super::catalog::{default_country, find_country, CountryConfig};
use crate::error::{Error, Result};
use std::fs;
use tracing::debug;

/// Something that can report an IANA timezone name such as `Europe/Paris`.
pub trait TimezoneSource {
    fn timezone(&self) -> Result<String>;
}

/// Reads the timezone of the running system.
///
/// Checks `TZ`, then `/etc/timezone`, then the target of the
/// `/etc/localtime` symlink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezone;

impl TimezoneSource for SystemTimezone {
    fn timezone(&self) -> Result<String> {
        if let Ok(tz) = std::env::var("TZ") {
            let tz = tz.trim_start_matches(':').trim();
            if !tz.is_empty() {
                return Ok(tz.to_string());
            }
        }

        if let Ok(content) = fs::read_to_string("/etc/timezone") {
            let tz = content.trim();
            if !tz.is_empty() {
                return Ok(tz.to_string());
            }
        }

        let target = fs::read_link("/etc/localtime")?;
        let target = target.to_string_lossy();
        target
            .split_once("zoneinfo/")
            .map(|(_, tz)| tz.to_string())
            .ok_or_else(|| Error::Timezone(format!("unrecognised localtime target {target}")))
    }
}

/// A timezone fixed up front (CLI `--timezone`, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone(pub String);

impl FixedTimezone {
    pub fn new(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }
}

impl TimezoneSource for FixedTimezone {
    fn timezone(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Maps a timezone name to a catalog country code.
///
/// Rules are checked in order; the first match wins.
pub fn country_code_for_timezone(tz: &str) -> Option<&'static str> {
    if tz.contains("America/New_York") || tz.contains("America/Los_Angeles") {
        Some("US")
    } else if tz.contains("Australia") {
        Some("AU")
    } else if tz.contains("Europe") && !tz.contains("London") {
        Some("EU")
    } else if tz.contains("America/Toronto") {
        Some("CA")
    } else {
        None
    }
}

/// Picks a default country from `source`, falling back to GB.
///
/// Detection never fails: source errors are logged and replaced by the
/// fallback.
pub fn detect_country(source: &dyn TimezoneSource) -> &'static CountryConfig {
    match source.timezone() {
        Ok(tz) => {
            let detected = country_code_for_timezone(&tz).and_then(find_country);
            debug!(timezone = %tz, country = ?detected.map(|c| c.code), "timezone detection");
            detected.unwrap_or_else(default_country)
        }
        Err(err) => {
            debug!(error = %err, "timezone unavailable, using default country");
            default_country()
        }
    }
}
