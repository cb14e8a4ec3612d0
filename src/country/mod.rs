// SPDX-License-Identifier: MPL-2.0
//! Active country state and currency-aware pricing.
//!
//! [`CountryProvider`] owns the single active [`CountryConfig`]. It is the
//! leaf of the localization layer: it knows nothing about the display
//! locale, and the locale layer reads it through a shared handle.

pub mod catalog;
pub mod currency;
pub mod detect;

pub use catalog::{
    default_country, find_country, CountryConfig, Currency, Pricing, Shipping, ShippingMethod,
    SubscriptionTier, SymbolPosition, COUNTRIES,
};
pub use detect::{FixedTimezone, SystemTimezone, TimezoneSource};

use crate::config::{PreferenceStore, COUNTRY_STORAGE_KEY};
use crate::i18n::catalog::{default_locale, find_locale};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

/// State container for the active country.
pub struct CountryProvider {
    store: Rc<dyn PreferenceStore>,
    current: Cell<&'static CountryConfig>,
}

impl CountryProvider {
    /// Mounts the provider.
    ///
    /// A valid stored country code wins; otherwise the timezone heuristic
    /// picks a default (GB when nothing matches). Detection results are not
    /// persisted.
    pub fn init(store: Rc<dyn PreferenceStore>, timezone: &dyn TimezoneSource) -> Self {
        let stored = store
            .get(COUNTRY_STORAGE_KEY)
            .and_then(|code| find_country(&code));

        let current = match stored {
            Some(country) => {
                debug!(country = country.code, "restored saved country");
                country
            }
            None => detect::detect_country(timezone),
        };

        Self {
            store,
            current: Cell::new(current),
        }
    }

    /// The active country.
    pub fn country(&self) -> &'static CountryConfig {
        self.current.get()
    }

    /// Selects the country with `code` and persists the choice.
    ///
    /// Unknown codes are ignored and leave the state untouched. Returns
    /// whether the selection was applied.
    pub fn set_country(&self, code: &str) -> bool {
        let Some(country) = find_country(code) else {
            return false;
        };

        self.current.set(country);
        if let Err(err) = self.store.set(COUNTRY_STORAGE_KEY, country.code) {
            warn!(country = country.code, error = %err, "failed to persist country");
        }
        true
    }

    /// Renders `amount` in the active currency.
    ///
    /// Separators follow the country's default locale, e.g. `£1,000` or
    /// `£99.50`.
    pub fn format_price(&self, amount: f64) -> String {
        let country = self.country();
        let number_format = find_locale(country.locale)
            .unwrap_or_else(default_locale)
            .number_format;
        currency::format_amount(amount, &country.currency, &number_format)
    }

    /// Converts `amount` from `from_currency` into the active currency,
    /// rounded to the nearest whole unit.
    ///
    /// Catalog prices are quoted in [`crate::config::BASE_CURRENCY`].
    #[must_use]
    pub fn convert_price(&self, amount: f64, from_currency: &str) -> f64 {
        currency::convert(amount, from_currency, self.country().currency.code)
    }

    /// Monthly price of `tier` in the active currency.
    #[must_use]
    pub fn tier_price(&self, tier: SubscriptionTier) -> f64 {
        self.country().pricing.price(tier)
    }

    pub fn format_tier_price(&self, tier: SubscriptionTier) -> String {
        self.format_price(self.tier_price(tier))
    }

    /// Shipping charge for an order in the active currency.
    #[must_use]
    pub fn shipping_cost(&self, order_total: f64, method: ShippingMethod) -> f64 {
        self.country().shipping.cost(order_total, method)
    }

    pub fn available_countries(&self) -> &'static [CountryConfig] {
        &COUNTRIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;

    fn provider_with(store: &Rc<MemoryStore>, tz: &str) -> CountryProvider {
        CountryProvider::init(store.clone(), &FixedTimezone::new(tz))
    }

    #[test]
    fn defaults_to_gb_without_hints() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Asia/Tokyo");
        assert_eq!(provider.country().code, "GB");
    }

    #[test]
    fn saved_country_beats_detection() {
        let store = Rc::new(MemoryStore::with_values([(COUNTRY_STORAGE_KEY, "CA")]));
        let provider = provider_with(&store, "Australia/Sydney");
        assert_eq!(provider.country().code, "CA");
    }

    #[test]
    fn unrecognised_saved_country_falls_through_to_detection() {
        let store = Rc::new(MemoryStore::with_values([(COUNTRY_STORAGE_KEY, "ZZ")]));
        let provider = provider_with(&store, "Australia/Sydney");
        assert_eq!(provider.country().code, "AU");
    }

    #[test]
    fn detection_is_not_persisted() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Europe/Madrid");
        assert_eq!(provider.country().code, "EU");
        assert_eq!(store.get(COUNTRY_STORAGE_KEY), None);
    }

    #[test]
    fn set_country_applies_and_persists() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Europe/London");

        assert!(provider.set_country("US"));
        assert_eq!(provider.country().code, "US");
        assert_eq!(store.get(COUNTRY_STORAGE_KEY).as_deref(), Some("US"));

        let reloaded = provider_with(&store, "Europe/London");
        assert_eq!(reloaded.country().code, "US");
    }

    #[test]
    fn set_country_ignores_unknown_codes() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Europe/London");
        provider.set_country("AU");

        assert!(!provider.set_country("XX"));
        assert!(!provider.set_country("au"));
        assert_eq!(provider.country().code, "AU");
        assert_eq!(store.get(COUNTRY_STORAGE_KEY).as_deref(), Some("AU"));
    }

    #[test]
    fn format_price_follows_active_country() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Europe/London");
        assert_eq!(provider.format_price(1000.0), "£1,000");
        assert_eq!(provider.format_price(99.5), "£99.50");

        provider.set_country("US");
        assert_eq!(provider.format_price(1000.0), "$1,000");

        provider.set_country("EU");
        assert_eq!(provider.format_price(1000.0), "1,000 €");
    }

    #[test]
    fn convert_price_targets_active_currency() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "Europe/Paris");
        assert_eq!(provider.country().code, "EU");
        assert_eq!(provider.convert_price(100.0, "GBP"), 115.0);

        provider.set_country("GB");
        assert_eq!(provider.convert_price(100.0, "GBP"), 100.0);
    }

    #[test]
    fn tier_and_shipping_use_active_country() {
        let store = Rc::new(MemoryStore::new());
        let provider = provider_with(&store, "America/New_York");
        assert_eq!(provider.tier_price(SubscriptionTier::Business), 39.99);
        assert_eq!(provider.format_tier_price(SubscriptionTier::Pro), "$12.99");
        assert_eq!(provider.shipping_cost(80.0, ShippingMethod::Standard), 0.0);
        assert_eq!(provider.shipping_cost(80.0, ShippingMethod::Express), 19.99);
    }
}
