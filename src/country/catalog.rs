// SPDX-License-Identifier: MPL-2.0
//! Static country catalog.
//!
//! Each entry controls the currency, subscription pricing and shipping
//! thresholds for a region. The catalog is compiled in and immutable;
//! `code` is the lookup key.

use crate::config::DEFAULT_COUNTRY_CODE;

// =============================================================================
// Currency
// =============================================================================

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: &'static str,
    pub symbol: &'static str,
    pub position: SymbolPosition,
}

// =============================================================================
// Pricing
// =============================================================================

/// Paid subscription tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTier {
    Pro,
    Business,
    PgaPro,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [Self::Pro, Self::Business, Self::PgaPro];

    /// Translation key of the tier's display name.
    pub fn i18n_key(self) -> &'static str {
        match self {
            SubscriptionTier::Pro => "pricing.pro",
            SubscriptionTier::Business => "pricing.business",
            SubscriptionTier::PgaPro => "pricing.pgaPro",
        }
    }
}

/// Monthly tier prices in the country's own currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub pro: f64,
    pub business: f64,
    pub pga_pro: f64,
}

impl Pricing {
    #[must_use]
    pub fn price(&self, tier: SubscriptionTier) -> f64 {
        match tier {
            SubscriptionTier::Pro => self.pro,
            SubscriptionTier::Business => self.business,
            SubscriptionTier::PgaPro => self.pga_pro,
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    Standard,
    Express,
}

/// Shipping rules in the country's own currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shipping {
    /// Order total from which standard shipping is free.
    pub free: f64,
    /// Flat standard shipping fee.
    pub standard: f64,
    /// Flat express shipping fee.
    pub express: f64,
}

impl Shipping {
    /// Shipping charge for an order of `order_total`.
    ///
    /// Standard shipping is waived once the total reaches the free threshold;
    /// express is always charged.
    #[must_use]
    pub fn cost(&self, order_total: f64, method: ShippingMethod) -> f64 {
        match method {
            ShippingMethod::Standard if order_total >= self.free => 0.0,
            ShippingMethod::Standard => self.standard,
            ShippingMethod::Express => self.express,
        }
    }
}

// =============================================================================
// CountryConfig
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryConfig {
    /// Catalog key, unique across [`COUNTRIES`].
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub currency: Currency,
    pub pricing: Pricing,
    pub shipping: Shipping,
    /// Display label of the professional credential in this region.
    pub golf_association: &'static str,
    /// Default locale code for visitors from this country.
    pub locale: &'static str,
}

pub static COUNTRIES: [CountryConfig; 5] = [
    CountryConfig {
        code: "GB",
        name: "United Kingdom",
        flag: "🇬🇧",
        currency: Currency {
            code: "GBP",
            symbol: "£",
            position: SymbolPosition::Before,
        },
        pricing: Pricing {
            pro: 9.99,
            business: 29.99,
            pga_pro: 19.99,
        },
        shipping: Shipping {
            free: 50.0,
            standard: 4.99,
            express: 9.99,
        },
        golf_association: "PGA of Great Britain & Ireland",
        locale: "en-GB",
    },
    CountryConfig {
        code: "US",
        name: "United States",
        flag: "🇺🇸",
        currency: Currency {
            code: "USD",
            symbol: "$",
            position: SymbolPosition::Before,
        },
        pricing: Pricing {
            pro: 12.99,
            business: 39.99,
            pga_pro: 24.99,
        },
        shipping: Shipping {
            free: 75.0,
            standard: 7.99,
            express: 19.99,
        },
        golf_association: "PGA of America",
        locale: "en-US",
    },
    CountryConfig {
        code: "AU",
        name: "Australia",
        flag: "🇦🇺",
        currency: Currency {
            code: "AUD",
            symbol: "A$",
            position: SymbolPosition::Before,
        },
        pricing: Pricing {
            pro: 19.99,
            business: 59.99,
            pga_pro: 39.99,
        },
        shipping: Shipping {
            free: 100.0,
            standard: 12.99,
            express: 24.99,
        },
        golf_association: "PGA of Australia",
        locale: "en-AU",
    },
    CountryConfig {
        code: "CA",
        name: "Canada",
        flag: "🇨🇦",
        currency: Currency {
            code: "CAD",
            symbol: "C$",
            position: SymbolPosition::Before,
        },
        pricing: Pricing {
            pro: 16.99,
            business: 49.99,
            pga_pro: 32.99,
        },
        shipping: Shipping {
            free: 100.0,
            standard: 11.99,
            express: 22.99,
        },
        golf_association: "PGA of Canada",
        locale: "en-CA",
    },
    CountryConfig {
        code: "EU",
        name: "Europe",
        flag: "🇪🇺",
        currency: Currency {
            code: "EUR",
            symbol: "€",
            position: SymbolPosition::After,
        },
        pricing: Pricing {
            pro: 11.99,
            business: 34.99,
            pga_pro: 22.99,
        },
        shipping: Shipping {
            free: 60.0,
            standard: 6.99,
            express: 14.99,
        },
        golf_association: "PGAs of Europe",
        locale: "en-GB",
    },
];

/// Looks up a country by its exact (case-sensitive) code.
pub fn find_country(code: &str) -> Option<&'static CountryConfig> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// The hardcoded fallback country (GB).
pub fn default_country() -> &'static CountryConfig {
    find_country(DEFAULT_COUNTRY_CODE).unwrap_or(&COUNTRIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::find_locale;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = COUNTRIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn every_entry_is_fully_populated() {
        for country in &COUNTRIES {
            assert!(!country.code.is_empty());
            assert!(!country.name.is_empty(), "{} has no name", country.code);
            assert!(!country.flag.is_empty(), "{} has no flag", country.code);
            assert_eq!(country.currency.code.len(), 3, "{}", country.code);
            assert!(!country.currency.symbol.is_empty(), "{}", country.code);
            assert!(!country.golf_association.is_empty(), "{}", country.code);
            for tier in SubscriptionTier::ALL {
                assert!(country.pricing.price(tier) > 0.0, "{} {:?}", country.code, tier);
            }
            assert!(country.shipping.free > 0.0);
            assert!(country.shipping.standard > 0.0);
            assert!(country.shipping.express > country.shipping.standard);
        }
    }

    #[test]
    fn every_default_locale_is_in_locale_catalog() {
        for country in &COUNTRIES {
            assert!(
                find_locale(country.locale).is_some(),
                "{} points at unknown locale {}",
                country.code,
                country.locale
            );
        }
    }

    #[test]
    fn country_locale_mapping_matches_regions() {
        let mapping: Vec<_> = COUNTRIES.iter().map(|c| (c.code, c.locale)).collect();
        assert_eq!(
            mapping,
            vec![
                ("GB", "en-GB"),
                ("US", "en-US"),
                ("AU", "en-AU"),
                ("CA", "en-CA"),
                ("EU", "en-GB"),
            ]
        );
    }

    #[test]
    fn find_country_is_case_sensitive() {
        assert_eq!(find_country("US").map(|c| c.code), Some("US"));
        assert!(find_country("us").is_none());
        assert!(find_country("XX").is_none());
        assert!(find_country("").is_none());
    }

    #[test]
    fn default_country_is_gb() {
        assert_eq!(default_country().code, "GB");
    }

    #[test]
    fn standard_shipping_is_free_from_threshold() {
        let shipping = default_country().shipping;
        assert_eq!(shipping.cost(49.99, ShippingMethod::Standard), 4.99);
        assert_eq!(shipping.cost(50.0, ShippingMethod::Standard), 0.0);
        assert_eq!(shipping.cost(500.0, ShippingMethod::Express), 9.99);
    }

    #[test]
    fn tier_price_reads_matching_field() {
        let pricing = find_country("US").unwrap().pricing;
        assert_eq!(pricing.price(SubscriptionTier::Pro), 12.99);
        assert_eq!(pricing.price(SubscriptionTier::Business), 39.99);
        assert_eq!(pricing.price(SubscriptionTier::PgaPro), 24.99);
    }
}
