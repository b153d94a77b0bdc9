use crate::angles::normalize_degrees;
use crate::error::EngineError;
use crate::vedic::nakshatra::nakshatra_index;
use crate::vedic::types::{CelestialBody, Sign};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

/// Sidereal position of one body at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub body: CelestialBody,
    /// Tropical longitude in degrees (0-360)
    pub tropical_longitude: f64,
    /// Sidereal longitude in degrees (0-360)
    pub sidereal_longitude: f64,
    pub sign: Sign,
    /// Degrees elapsed within the sign (0-30)
    pub degree_in_sign: f64,
    /// Nakshatra index (0-26)
    pub nakshatra_index: usize,
    pub is_retrograde: bool,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

impl Position {
    /// Derive sign, degree and nakshatra from a tropical longitude.
    pub fn from_tropical(
        body: CelestialBody,
        tropical_longitude: f64,
        ayanamsa: f64,
        speed: f64,
        is_retrograde: bool,
    ) -> Self {
        let tropical = normalize_degrees(tropical_longitude);
        let sidereal = normalize_degrees(tropical - ayanamsa);
        let sign = Sign::from_longitude(sidereal);
        Self {
            body,
            tropical_longitude: tropical,
            sidereal_longitude: sidereal,
            sign,
            degree_in_sign: sidereal - sign.index() as f64 * 30.0,
            nakshatra_index: nakshatra_index(sidereal),
            is_retrograde,
            speed,
        }
    }

    /// One-based sign number (1-12)
    pub fn sign_number(&self) -> u8 {
        self.sign.number()
    }
}

/// Where the positions of a natal chart came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartAccuracy {
    /// Supplied by an external ephemeris provider
    Provider,
    /// Internal mean-motion model, no provider configured
    MeanMotion,
    /// Provider failed or returned partial data; mean-motion fallback used
    Degraded,
}

/// Widest civil time offset in use (UTC+14, Line Islands)
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Birth data as entered by the user, in local civil time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
    /// Offset of local civil time from UTC, in hours
    #[serde(default)]
    pub utc_offset_hours: f64,
}

impl BirthDetails {
    /// Reject offsets and coordinates that cannot describe a place on Earth.
    pub fn validate(&self) -> Result<(), EngineError> {
        let offset = self.utc_offset_hours;
        if !offset.is_finite() || offset.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(EngineError::InvalidInput(format!(
                "UTC offset {} h outside ±{} h",
                offset, MAX_UTC_OFFSET_HOURS
            )));
        }
        let GeoLocation { lat, lon } = self.location;
        if !lat.is_finite() || lat.abs() > 90.0 {
            return Err(EngineError::InvalidInput(format!(
                "latitude {} outside ±90°",
                lat
            )));
        }
        if !lon.is_finite() || lon.abs() > 180.0 {
            return Err(EngineError::InvalidInput(format!(
                "longitude {} outside ±180°",
                lon
            )));
        }
        Ok(())
    }

    /// Birth instant in UTC.
    pub fn instant(&self) -> Result<DateTime<Utc>, EngineError> {
        self.validate()?;
        let local = NaiveDateTime::new(self.date, self.time);
        let shifted = TimeDelta::try_seconds((self.utc_offset_hours * 3600.0).round() as i64)
            .and_then(|offset| local.checked_sub_signed(offset))
            .ok_or_else(|| {
                EngineError::InvalidInput(format!(
                    "birth time {} with offset {} h is out of range",
                    local, self.utc_offset_hours
                ))
            })?;
        Ok(Utc.from_utc_datetime(&shifted))
    }
}

/// Natal chart; read-only once built
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub birth: BirthDetails,
    pub ascendant_sign: Sign,
    /// Sidereal ascendant longitude in degrees
    pub ascendant_longitude: f64,
    pub moon_sign: Sign,
    pub moon_nakshatra: usize,
    pub positions: BTreeMap<CelestialBody, Position>,
    pub accuracy: ChartAccuracy,
}

impl NatalChart {
    pub fn position(&self, body: CelestialBody) -> Option<&Position> {
        self.positions.get(&body)
    }

    pub fn birth_instant(&self) -> Result<DateTime<Utc>, EngineError> {
        self.birth.instant()
    }

    /// Natal positions in canonical body order.
    pub fn positions_vec(&self) -> Vec<Position> {
        CelestialBody::ALL
            .iter()
            .filter_map(|body| self.positions.get(body).cloned())
            .collect()
    }
}
