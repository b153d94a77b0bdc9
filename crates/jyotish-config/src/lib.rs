use chrono::{DateTime, Utc};
use jyotish::config::{
    default_retrograde_rules, DashaAnchor, EngineConfig, RetrogradeRule, DEFAULT_AYANAMSA,
    DEFAULT_REFERENCE_LATITUDE, DEFAULT_SYNODIC_MONTH_DAYS,
};
use jyotish::CelestialBody;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the search for `configs/engine.toml` when set.
pub const CONFIG_ENV_VAR: &str = "JYOTISH_CONFIG";

const SEARCH_PATHS: [&str; 2] = ["configs/engine.toml", "../../configs/engine.toml"];

#[derive(Debug, Clone, Deserialize)]
struct EngineToml {
    #[serde(default = "default_ayanamsa")]
    ayanamsa: f64,
    #[serde(default = "default_reference_latitude")]
    reference_latitude: f64,
    /// RFC 3339 string, e.g. "2024-01-11T00:00:00Z"
    #[serde(default)]
    reference_new_moon: Option<DateTime<Utc>>,
    #[serde(default = "default_synodic_month_days")]
    synodic_month_days: f64,
    #[serde(default)]
    dasha_anchor: Option<String>,
}

impl Default for EngineToml {
    fn default() -> Self {
        Self {
            ayanamsa: default_ayanamsa(),
            reference_latitude: default_reference_latitude(),
            reference_new_moon: None,
            synodic_month_days: default_synodic_month_days(),
            dasha_anchor: None,
        }
    }
}

fn default_ayanamsa() -> f64 {
    DEFAULT_AYANAMSA
}

fn default_reference_latitude() -> f64 {
    DEFAULT_REFERENCE_LATITUDE
}

fn default_synodic_month_days() -> f64 {
    DEFAULT_SYNODIC_MONTH_DAYS
}

#[derive(Debug, Clone, Deserialize)]
struct RetrogradeToml {
    body: String,
    synodic_period_days: f64,
    #[serde(default)]
    windows: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: EngineToml,
    /// Replaces the built-in table when present
    #[serde(default)]
    retrograde: Option<Vec<RetrogradeToml>>,
}

/// Path named by `JYOTISH_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Read `engine.toml` from `JYOTISH_CONFIG`, else from the common relative paths.
pub fn read_engine_toml_text() -> anyhow::Result<String> {
    if let Some(path) = config_path_from_env() {
        return fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!(
                "{} points at {} which could not be read: {e}",
                CONFIG_ENV_VAR,
                path.display()
            )
        });
    }
    for p in &SEARCH_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Read engine config from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load engine.toml from {:?}", SEARCH_PATHS);
}

fn parse_anchor(raw: &str) -> anyhow::Result<DashaAnchor> {
    match raw.trim().to_lowercase().replace('-', "_").as_str() {
        "ketu" => Ok(DashaAnchor::Ketu),
        "moon_nakshatra" | "moonnakshatra" => Ok(DashaAnchor::MoonNakshatra),
        other => anyhow::bail!(
            "engine.dasha_anchor must be \"ketu\" or \"moon_nakshatra\", got \"{other}\""
        ),
    }
}

fn parse_retrograde(rules: Vec<RetrogradeToml>) -> anyhow::Result<Vec<RetrogradeRule>> {
    rules
        .into_iter()
        .map(|rule| {
            let body: CelestialBody = rule
                .body
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid [[retrograde]] entry: {e}"))?;
            let windows: Vec<(f64, f64)> = rule.windows.iter().map(|w| (w[0], w[1])).collect();
            Ok(RetrogradeRule::new(body, rule.synodic_period_days, &windows))
        })
        .collect()
}

/// Parse and validate an `engine.toml` document.
///
/// Missing keys fall back to the engine defaults.
pub fn parse_engine_config(text: &str) -> anyhow::Result<EngineConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse engine.toml: {e}"))?;
    let RootConfigToml { engine, retrograde } = root;
    let defaults = EngineConfig::default();

    let config = EngineConfig {
        ayanamsa: engine.ayanamsa,
        reference_latitude: engine.reference_latitude,
        reference_new_moon: engine.reference_new_moon.unwrap_or(defaults.reference_new_moon),
        synodic_month_days: engine.synodic_month_days,
        retrograde_rules: match retrograde {
            Some(rules) => parse_retrograde(rules)?,
            None => default_retrograde_rules(),
        },
        dasha_anchor: match engine.dasha_anchor.as_deref() {
            Some(raw) => parse_anchor(raw)?,
            None => DashaAnchor::default(),
        },
    };
    config.validate()?;
    Ok(config)
}

/// Load the engine configuration from an explicit file.
pub fn load_engine_config_from(path: &Path) -> anyhow::Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let config = parse_engine_config(&text)?;
    log::info!("Loaded engine config from {}", path.display());
    Ok(config)
}

/// Load the engine configuration from the env var or the default search paths.
pub fn load_engine_config() -> anyhow::Result<EngineConfig> {
    let text = read_engine_toml_text()?;
    parse_engine_config(&text)
}
