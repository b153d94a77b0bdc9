//! Calibration knobs for the mean-motion model and the Panchang.

use crate::error::EngineError;
use crate::vedic::types::CelestialBody;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AYANAMSA: f64 = 24.1;
pub const DEFAULT_REFERENCE_LATITUDE: f64 = 28.6;
pub const DEFAULT_SYNODIC_MONTH_DAYS: f64 = 29.530588;
// 2024-01-11T00:00:00Z
const DEFAULT_REFERENCE_NEW_MOON_UNIX: i64 = 1_704_931_200;

/// Retrograde windows for one body, as day offsets into its synodic cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrogradeRule {
    pub body: CelestialBody,
    pub synodic_period_days: f64,
    /// Open intervals (start, end) within [0, synodic_period_days]
    pub windows: Vec<(f64, f64)>,
}

impl RetrogradeRule {
    pub fn new(body: CelestialBody, synodic_period_days: f64, windows: &[(f64, f64)]) -> Self {
        Self {
            body,
            synodic_period_days,
            windows: windows.to_vec(),
        }
    }

    /// Whether the cycle position for `days_since_epoch` falls strictly inside a window.
    pub fn is_active(&self, days_since_epoch: f64) -> bool {
        let cycle_day = days_since_epoch.rem_euclid(self.synodic_period_days);
        self.windows
            .iter()
            .any(|&(start, end)| cycle_day > start && cycle_day < end)
    }
}

/// Where the day-count dasha cycle starts at birth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashaAnchor {
    /// Every chart starts in Ketu Mahadasha
    #[default]
    Ketu,
    /// Start from the lord of the natal Moon's nakshatra
    MoonNakshatra,
}

/// Engine-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Fixed offset subtracted from tropical longitudes, in degrees
    pub ayanamsa: f64,
    /// Latitude used for sunrise/sunset when no birth location is known
    pub reference_latitude: f64,
    pub reference_new_moon: DateTime<Utc>,
    pub synodic_month_days: f64,
    pub retrograde_rules: Vec<RetrogradeRule>,
    #[serde(default)]
    pub dasha_anchor: DashaAnchor,
}

impl EngineConfig {
    pub fn retrograde_rule(&self, body: CelestialBody) -> Option<&RetrogradeRule> {
        self.retrograde_rules.iter().find(|rule| rule.body == body)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.ayanamsa.is_finite() || !(0.0..30.0).contains(&self.ayanamsa) {
            return Err(EngineError::Config(format!(
                "ayanamsa must lie in [0, 30), got {}",
                self.ayanamsa
            )));
        }
        if !self.reference_latitude.is_finite() || self.reference_latitude.abs() >= 90.0 {
            return Err(EngineError::Config(format!(
                "reference latitude must lie strictly between -90 and 90, got {}",
                self.reference_latitude
            )));
        }
        if !self.synodic_month_days.is_finite() || self.synodic_month_days <= 0.0 {
            return Err(EngineError::Config(format!(
                "synodic month must be positive, got {}",
                self.synodic_month_days
            )));
        }
        for rule in &self.retrograde_rules {
            if rule.body.is_node() || matches!(rule.body, CelestialBody::Sun | CelestialBody::Moon) {
                return Err(EngineError::Config(format!(
                    "{} has fixed motion and takes no retrograde windows",
                    rule.body
                )));
            }
            if !rule.synodic_period_days.is_finite() || rule.synodic_period_days <= 0.0 {
                return Err(EngineError::Config(format!(
                    "synodic period for {} must be positive",
                    rule.body
                )));
            }
            for &(start, end) in &rule.windows {
                if start < 0.0 || end > rule.synodic_period_days || start >= end {
                    return Err(EngineError::Config(format!(
                        "retrograde window ({start}, {end}) for {} lies outside its {}-day cycle",
                        rule.body, rule.synodic_period_days
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsa: DEFAULT_AYANAMSA,
            reference_latitude: DEFAULT_REFERENCE_LATITUDE,
            reference_new_moon: Utc
                .timestamp_opt(DEFAULT_REFERENCE_NEW_MOON_UNIX, 0)
                .single()
                .unwrap_or_default(),
            synodic_month_days: DEFAULT_SYNODIC_MONTH_DAYS,
            retrograde_rules: default_retrograde_rules(),
            dasha_anchor: DashaAnchor::Ketu,
        }
    }
}

pub fn default_retrograde_rules() -> Vec<RetrogradeRule> {
    vec![
        RetrogradeRule::new(CelestialBody::Mars, 780.0, &[(700.0, 750.0)]),
        RetrogradeRule::new(
            CelestialBody::Mercury,
            116.0,
            &[(25.0, 35.0), (65.0, 75.0), (100.0, 116.0)],
        ),
        RetrogradeRule::new(CelestialBody::Jupiter, 399.0, &[(280.0, 399.0)]),
        RetrogradeRule::new(CelestialBody::Venus, 584.0, &[(530.0, 584.0)]),
        RetrogradeRule::new(CelestialBody::Saturn, 378.0, &[(240.0, 378.0)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference_new_moon.to_rfc3339(), "2024-01-11T00:00:00+00:00");
    }

    #[test]
    fn test_retrograde_windows_are_open() {
        let rule = RetrogradeRule::new(CelestialBody::Mars, 780.0, &[(700.0, 750.0)]);
        assert!(!rule.is_active(700.0));
        assert!(rule.is_active(700.5));
        assert!(!rule.is_active(750.0));
        assert!(rule.is_active(780.0 + 725.0));
        // pre-epoch days wrap into the cycle
        assert!(rule.is_active(-55.0));
    }

    #[test]
    fn test_window_outside_cycle_rejected() {
        let mut config = EngineConfig::default();
        config.retrograde_rules = vec![RetrogradeRule::new(
            CelestialBody::Venus,
            584.0,
            &[(530.0, 600.0)],
        )];
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_node_rule_rejected() {
        let mut config = EngineConfig::default();
        config.retrograde_rules = vec![RetrogradeRule::new(CelestialBody::Rahu, 100.0, &[])];
        assert!(config.validate().is_err());
    }
}
