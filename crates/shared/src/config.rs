//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
///
/// Every section has defaults, so an empty environment yields the built-in
/// catalog, a succeeding simulated gateway and debug logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Static catalogs offered by the wizard.
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Simulated submission gateway.
    #[serde(default)]
    pub gateway: GatewaySettings,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Catalog configuration: delivery tiers, countries and phone prefixes.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Currency used for tier prices.
    #[serde(default)]
    pub currency: Currency,
    /// Ordered delivery tiers.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierSettings>,
    /// Selectable countries, first entry is the default.
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
    /// Selectable phone prefixes, first entry is the default.
    #[serde(default = "default_phone_prefixes")]
    pub phone_prefixes: Vec<PhonePrefixSettings>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            tiers: default_tiers(),
            countries: default_countries(),
            phone_prefixes: default_phone_prefixes(),
        }
    }
}

/// One delivery tier as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct TierSettings {
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Icon reference understood by the presentation layer.
    #[serde(default)]
    pub icon: String,
    /// Optional indicative price.
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl TierSettings {
    fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            price: None,
        }
    }
}

/// One phone prefix as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct PhonePrefixSettings {
    /// Dialing code including the leading `+`.
    pub code: String,
    /// Country or region label.
    pub country: String,
}

fn default_tiers() -> Vec<TierSettings> {
    vec![
        TierSettings::new(
            "STANDARD",
            "Estimated delivery in 3-6 business days",
            "envelope",
        ),
        TierSettings::new(
            "TRACKED",
            "Estimated delivery in 3-6 business days with tracking",
            "envelope-open",
        ),
        TierSettings::new(
            "INTERNATIONAL",
            "Estimated delivery in 7-20 business days",
            "globe",
        ),
        TierSettings::new(
            "INTERNATIONAL WITH RECEIPT",
            "Estimated delivery in 7-20 business days with confirmation",
            "paper-plane",
        ),
    ]
}

fn default_countries() -> Vec<String> {
    [
        "Italy",
        "Germany",
        "France",
        "Spain",
        "United Kingdom",
        "USA",
        "Canada",
        "Switzerland",
        "San Marino",
        "Other",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_phone_prefixes() -> Vec<PhonePrefixSettings> {
    [
        ("+39", "Italy"),
        ("+1", "USA/Canada"),
        ("+44", "United Kingdom"),
        ("+34", "Spain"),
        ("+49", "Germany"),
        ("+33", "France"),
        ("+378", "San Marino"),
        ("+41", "Switzerland"),
    ]
    .iter()
    .map(|(code, country)| PhonePrefixSettings {
        code: (*code).to_string(),
        country: (*country).to_string(),
    })
    .collect()
}

/// Outcome produced by the simulated gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayOutcome {
    /// Every submission succeeds.
    #[default]
    Succeed,
    /// Every submission fails.
    Fail,
}

/// Simulated gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Artificial latency before the outcome resolves.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Outcome to resolve with.
    #[serde(default)]
    pub outcome: GatewayOutcome,
    /// Message attached to successful submissions.
    #[serde(default = "default_success_message")]
    pub success_message: String,
    /// Message attached to failed submissions.
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            outcome: GatewayOutcome::default(),
            success_message: default_success_message(),
            failure_message: default_failure_message(),
        }
    }
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_success_message() -> String {
    "Payment completed successfully".to_string()
}

fn default_failure_message() -> String {
    "Payment failed, please retry".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "docflow=debug,docflow_core=debug".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DOCFLOW").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.tiers.len(), 4);
        assert_eq!(config.catalog.tiers[0].title, "STANDARD");
        assert!(config.catalog.tiers.iter().all(|t| t.price.is_none()));
        assert_eq!(config.catalog.countries.len(), 10);
        assert_eq!(config.catalog.countries[0], "Italy");
        assert_eq!(config.catalog.phone_prefixes.len(), 8);
        assert_eq!(config.catalog.phone_prefixes[0].code, "+39");
        assert_eq!(config.catalog.currency, Currency::Eur);
    }

    #[test]
    fn test_gateway_defaults() {
        let gateway = GatewaySettings::default();
        assert_eq!(gateway.latency_ms, 1500);
        assert_eq!(gateway.outcome, GatewayOutcome::Succeed);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            ["DOCFLOW__GATEWAY__LATENCY_MS", "DOCFLOW__GATEWAY__OUTCOME"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.gateway.latency_ms, 1500);
                assert_eq!(config.catalog.tiers.len(), 4);
            },
        );
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("DOCFLOW__GATEWAY__LATENCY_MS", Some("25")),
                ("DOCFLOW__GATEWAY__OUTCOME", Some("fail")),
                ("DOCFLOW__LOGGING__FILTER", Some("docflow=trace")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.gateway.latency_ms, 25);
                assert_eq!(config.gateway.outcome, GatewayOutcome::Fail);
                assert_eq!(config.logging.filter, "docflow=trace");
            },
        );
    }
}
