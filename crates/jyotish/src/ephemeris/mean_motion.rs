//! Mean-motion ephemeris.
//!
//! Each body advances at a constant angular speed from its J2000 longitude.
//! Accuracy is a few degrees for the slow planets and worse for the Moon,
//! which is enough for sign- and nakshatra-level readings.

use crate::angles::normalize_degrees;
use crate::config::EngineConfig;
use crate::ephemeris::time::days_since_epoch;
use crate::ephemeris::types::Position;
use crate::vedic::types::CelestialBody;
use chrono::{DateTime, Utc};

/// (epoch longitude, mean daily motion) at 2000-01-01T00:00Z
const MEAN_ELEMENTS: &[(CelestialBody, f64, f64)] = &[
    (CelestialBody::Sun, 280.460, 0.9856474),
    (CelestialBody::Moon, 218.316, 13.176396),
    (CelestialBody::Mars, 355.433, 0.524033),
    (CelestialBody::Mercury, 252.251, 4.092385),
    (CelestialBody::Jupiter, 34.351, 0.083056),
    (CelestialBody::Venus, 181.980, 1.602136),
    (CelestialBody::Saturn, 50.077, 0.033585),
    (CelestialBody::Rahu, 125.0, -0.052954),
];

/// Epoch longitude and daily motion for a body. Ketu mirrors Rahu.
pub fn mean_elements(body: CelestialBody) -> (f64, f64) {
    let lookup = if body == CelestialBody::Ketu {
        CelestialBody::Rahu
    } else {
        body
    };
    let (epoch_lon, speed) = MEAN_ELEMENTS
        .iter()
        .find(|(b, _, _)| *b == lookup)
        .map(|(_, lon, speed)| (*lon, *speed))
        .unwrap_or((0.0, 0.0));
    if body == CelestialBody::Ketu {
        (normalize_degrees(epoch_lon + 180.0), speed)
    } else {
        (epoch_lon, speed)
    }
}

/// Sidereal longitude for a tropical longitude and ayanamsa.
pub fn to_sidereal(tropical: f64, ayanamsa: f64) -> f64 {
    normalize_degrees(tropical - ayanamsa)
}

/// Mean-motion ephemeris bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct MeanMotionEphemeris {
    config: EngineConfig,
}

impl MeanMotionEphemeris {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tropical longitude of a body at a UTC instant.
    pub fn tropical_longitude(&self, body: CelestialBody, dt: DateTime<Utc>) -> f64 {
        let days = days_since_epoch(dt);
        if body == CelestialBody::Ketu {
            return normalize_degrees(self.tropical_longitude(CelestialBody::Rahu, dt) + 180.0);
        }
        let (epoch_lon, speed) = mean_elements(body);
        normalize_degrees(epoch_lon + speed * days)
    }

    /// Retrograde flag from the configured synodic windows.
    pub fn is_retrograde(&self, body: CelestialBody, dt: DateTime<Utc>) -> bool {
        match body {
            CelestialBody::Sun | CelestialBody::Moon => false,
            CelestialBody::Rahu | CelestialBody::Ketu => true,
            _ => self
                .config
                .retrograde_rule(body)
                .map(|rule| rule.is_active(days_since_epoch(dt)))
                .unwrap_or(false),
        }
    }

    /// Full sidereal position of a body.
    pub fn position(&self, body: CelestialBody, dt: DateTime<Utc>) -> Position {
        let tropical = self.tropical_longitude(body, dt);
        let is_retrograde = self.is_retrograde(body, dt);
        let (_, mean_speed) = mean_elements(body);
        let speed = if is_retrograde && !body.is_node() {
            -mean_speed
        } else {
            mean_speed
        };
        Position::from_tropical(body, tropical, self.config.ayanamsa, speed, is_retrograde)
    }

    /// Positions of all nine bodies, in canonical order.
    pub fn positions(&self, dt: DateTime<Utc>) -> Vec<Position> {
        CelestialBody::ALL
            .iter()
            .map(|body| self.position(*body, dt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::parse_date;

    #[test]
    fn test_epoch_longitudes() {
        let ephemeris = MeanMotionEphemeris::default();
        let epoch = parse_date(Some("2000-01-01")).unwrap();
        assert!((ephemeris.tropical_longitude(CelestialBody::Sun, epoch) - 280.460).abs() < 1e-9);
        assert!((ephemeris.tropical_longitude(CelestialBody::Rahu, epoch) - 125.0).abs() < 1e-9);
        assert!((ephemeris.tropical_longitude(CelestialBody::Ketu, epoch) - 305.0).abs() < 1e-9);
    }

    #[test]
    fn test_sidereal_subtracts_ayanamsa() {
        let ephemeris = MeanMotionEphemeris::default();
        let epoch = parse_date(Some("2000-01-01")).unwrap();
        let sun = ephemeris.position(CelestialBody::Sun, epoch);
        assert!((sun.sidereal_longitude - 256.36).abs() < 1e-9);
        assert_eq!(sun.sign.number(), 9);
    }

    #[test]
    fn test_pre_epoch_dates_stay_in_range() {
        let ephemeris = MeanMotionEphemeris::default();
        let dt = parse_date(Some("1900-03-01")).unwrap();
        for position in ephemeris.positions(dt) {
            assert!((0.0..360.0).contains(&position.tropical_longitude));
            assert!((0.0..360.0).contains(&position.sidereal_longitude));
        }
    }

    #[test]
    fn test_luminaries_never_retrograde_nodes_always() {
        let ephemeris = MeanMotionEphemeris::default();
        let dt = parse_date(Some("2024-08-31")).unwrap();
        assert!(!ephemeris.position(CelestialBody::Sun, dt).is_retrograde);
        assert!(!ephemeris.position(CelestialBody::Moon, dt).is_retrograde);
        assert!(ephemeris.position(CelestialBody::Rahu, dt).is_retrograde);
        assert!(ephemeris.position(CelestialBody::Ketu, dt).is_retrograde);
    }

    #[test]
    fn test_mars_retrograde_window() {
        let ephemeris = MeanMotionEphemeris::default();
        // day 725 of the first Mars cycle
        let inside = parse_date(Some("2001-12-26")).unwrap();
        let mars = ephemeris.position(CelestialBody::Mars, inside);
        assert!(mars.is_retrograde);
        assert!(mars.speed < 0.0);
        let outside = parse_date(Some("2000-06-01")).unwrap();
        assert!(!ephemeris.position(CelestialBody::Mars, outside).is_retrograde);
    }
}
