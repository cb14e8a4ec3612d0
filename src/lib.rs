// SPDX-License-Identifier: MPL-2.0
//! `clubup_locale` is the country pricing and localization layer of the
//! ClubUp golf equipment marketplace.
//!
//! It provides the active country (currency, subscription pricing, shipping
//! rules) and the active display locale (translations with Fluent, date
//! formatting), persists both preferences, and picks sensible defaults on
//! first run.
//!
//! ```no_run
//! use clubup_locale::config::FileStore;
//! use clubup_locale::country::SystemTimezone;
//! use clubup_locale::Localization;
//! use std::rc::Rc;
//!
//! let store = Rc::new(FileStore::open_default(None).unwrap());
//! let app = Localization::mount(store, &SystemTimezone).unwrap();
//! println!("{}", app.country_provider().format_price(1000.0));
//! println!("{}", app.locale_provider().t("home.hero.title"));
//! ```

pub mod config;
pub mod country;
pub mod error;
pub mod i18n;
pub mod localization;

pub use localization::Localization;
