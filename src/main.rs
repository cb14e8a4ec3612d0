// SPDX-License-Identifier: MPL-2.0
use chrono::{DateTime, FixedOffset, Utc};
use clubup_locale::config::{FileStore, PreferenceStore, BASE_CURRENCY};
use clubup_locale::country::{FixedTimezone, SubscriptionTier, SystemTimezone, TimezoneSource};
use clubup_locale::error::{Error, Result};
use clubup_locale::i18n::FluentArgs;
use clubup_locale::Localization;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
clubup-locale: inspect and change ClubUp country and language preferences

USAGE:
  clubup-locale [OPTIONS] <COMMAND>

OPTIONS:
  --config-dir DIR   Preference directory (default: $CLUBUP_CONFIG_DIR or platform config dir)
  --timezone TZ      Timezone used for first-run country detection
  -h, --help         Print this help

COMMANDS:
  show                    Active country, currency and locale
  countries               List supported countries
  locales                 List supported locales
  price <AMOUNT> [--from CUR]
                          Convert an amount into the active currency and format it
  t <KEY> [FALLBACK]      Translate a key
  date [RFC3339]          Format a timestamp (default: now)
  set-country <CODE>      Save the active country
  set-locale <CODE>       Save an explicit language choice
  reset                   Forget all saved preferences
";

struct Flags {
    config_dir: Option<PathBuf>,
    timezone: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(pico_args::Arguments::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<()> {
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        timezone: args.opt_value_from_str("--timezone")?,
    };

    let store = Rc::new(FileStore::open_default(flags.config_dir)?);
    let timezone: Box<dyn TimezoneSource> = match flags.timezone {
        Some(tz) => Box::new(FixedTimezone::new(tz)),
        None => Box::new(SystemTimezone),
    };
    let app = Localization::mount(store.clone(), timezone.as_ref())?;

    let command = args.subcommand()?.unwrap_or_else(|| "show".to_string());
    match command.as_str() {
        "show" => show(&app),
        "countries" => {
            for country in app.country_provider().available_countries() {
                println!(
                    "{} {}  {}  {} ({})",
                    country.flag,
                    country.code,
                    country.name,
                    country.currency.code,
                    country.golf_association
                );
            }
        }
        "locales" => {
            let translations = app.locale_provider().translations();
            for locale in app.locale_provider().available_locales() {
                let translated = locale
                    .language_id()
                    .is_some_and(|id| translations.has_override(&id));
                println!(
                    "{} {:<6} {} / {}{}",
                    locale.flag,
                    locale.code,
                    locale.name,
                    locale.native_name,
                    if translated { "" } else { "  (English)" }
                );
            }
        }
        "price" => {
            let from: Option<String> = args.opt_value_from_str("--from")?;
            let amount: f64 = args.free_from_str()?;
            let country = app.country_provider();
            let from = from.as_deref().unwrap_or(BASE_CURRENCY);
            let converted = country.convert_price(amount, from);
            println!("{}", country.format_price(converted));
        }
        "t" => {
            let key: String = args.free_from_str()?;
            let fallback: Option<String> = args.opt_free_from_str()?;
            let locale = app.locale_provider();
            let text = match fallback {
                Some(fallback) => locale.t_or(&key, &fallback),
                None => locale.t(&key),
            };
            println!("{text}");
        }
        "date" => {
            let raw: Option<String> = args.opt_free_from_str()?;
            let date = match raw {
                Some(raw) => DateTime::<FixedOffset>::parse_from_rfc3339(&raw)
                    .map_err(|err| Error::Usage(format!("invalid timestamp {raw}: {err}")))?,
                None => Utc::now().fixed_offset(),
            };
            let locale = app.locale_provider();
            println!("{}", locale.format_date(&date));
            println!("{}", locale.format_time(&date));
            println!("{}", locale.format_date_time(&date));
            println!("{}", locale.format_relative_time(&date));
        }
        "set-country" => {
            let code: String = args.free_from_str()?;
            if app.country_provider().set_country(&code) {
                show(&app);
            } else {
                println!("Unknown country {code}; selection unchanged");
            }
        }
        "set-locale" => {
            let code: String = args.free_from_str()?;
            if app.locale_provider().set_locale(&code) {
                show(&app);
            } else {
                println!("Unknown locale {code}; selection unchanged");
            }
        }
        "reset" => {
            store.clear()?;
            println!("Preferences cleared ({})", store.path().display());
        }
        other => return Err(Error::Usage(format!("unknown command {other}; see --help"))),
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!("unexpected arguments: {remaining:?}")));
    }
    Ok(())
}

fn show(app: &Localization) {
    let country = app.country_provider();
    let locale = app.locale_provider();
    let active = country.country();
    let current = locale.locale();

    println!("Country:  {} {} ({})", active.flag, active.name, active.code);
    println!("Currency: {} {}", active.currency.code, active.currency.symbol);
    println!(
        "Locale:   {} {}{}",
        current.code,
        current.native_name,
        if locale.has_explicit_locale() {
            ""
        } else {
            " (from country)"
        }
    );
    for tier in SubscriptionTier::ALL {
        let mut args = FluentArgs::new();
        args.set("price", country.format_tier_price(tier));
        println!(
            "{:<9} {}",
            locale.t(tier.i18n_key()),
            locale.t_args("pricing.perMonth", &args)
        );
    }
}
