//! Natal chart construction.

use crate::angles::normalize_degrees;
use crate::ephemeris::adapter::{validate_provider_chart, ChartProvider, ProviderChart};
use crate::ephemeris::mean_motion::{to_sidereal, MeanMotionEphemeris};
use crate::ephemeris::time::julian_day;
use crate::ephemeris::types::{BirthDetails, ChartAccuracy, GeoLocation, NatalChart, Position};
use crate::error::EngineError;
use crate::vedic::types::{CelestialBody, Sign};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const J2000_JULIAN_DAY: f64 = 2_451_545.0;
const MEAN_OBLIQUITY: f64 = 23.439_291_1;

/// Greenwich mean sidereal time in degrees.
fn greenwich_sidereal_degrees(jd: f64) -> f64 {
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JULIAN_DAY))
}

/// Tropical ascendant for an instant and place.
pub fn tropical_ascendant(instant: DateTime<Utc>, location: &GeoLocation) -> f64 {
    let ramc = normalize_degrees(greenwich_sidereal_degrees(julian_day(instant)) + location.lon)
        .to_radians();
    let obliquity = MEAN_OBLIQUITY.to_radians();
    // keep tan() finite at the poles
    let latitude = location.lat.clamp(-89.9, 89.9).to_radians();

    let y = ramc.cos();
    let x = -(ramc.sin() * obliquity.cos() + latitude.tan() * obliquity.sin());
    normalize_degrees(y.atan2(x).to_degrees())
}

fn positions_from_provider(chart: &ProviderChart, ayanamsa: f64) -> BTreeMap<CelestialBody, Position> {
    chart
        .placements
        .iter()
        .map(|(body, placement)| {
            let retrograde = body.is_node() || placement.speed < 0.0;
            (
                *body,
                Position::from_tropical(*body, placement.longitude, ayanamsa, placement.speed, retrograde),
            )
        })
        .collect()
}

/// Build a natal chart, preferring `provider` when it returns complete data.
///
/// Provider failures never propagate: the mean-motion model fills in and the
/// chart is marked [`ChartAccuracy::Degraded`]. Invalid birth details do.
pub fn build_natal_chart(
    birth: &BirthDetails,
    ephemeris: &MeanMotionEphemeris,
    provider: Option<&dyn ChartProvider>,
) -> Result<NatalChart, EngineError> {
    let instant = birth.instant()?;
    let ayanamsa = ephemeris.config().ayanamsa;

    let provided = provider.map(|p| {
        p.natal_chart(instant, &birth.location)
            .and_then(|chart| validate_provider_chart(&chart).map(|_| chart))
    });

    let (positions, tropical_asc, accuracy) = match provided {
        Some(Ok(chart)) => {
            log::debug!("Natal chart for {} from external provider", instant);
            let asc = chart
                .ascendant
                .unwrap_or_else(|| tropical_ascendant(instant, &birth.location));
            (positions_from_provider(&chart, ayanamsa), asc, ChartAccuracy::Provider)
        }
        Some(Err(e)) => {
            log::warn!(
                "Ephemeris provider failed for {}, using mean-motion positions (degraded accuracy): {}",
                instant,
                e
            );
            (
                mean_positions(ephemeris, instant),
                tropical_ascendant(instant, &birth.location),
                ChartAccuracy::Degraded,
            )
        }
        None => (
            mean_positions(ephemeris, instant),
            tropical_ascendant(instant, &birth.location),
            ChartAccuracy::MeanMotion,
        ),
    };

    let ascendant_longitude = to_sidereal(tropical_asc, ayanamsa);
    let (moon_sign, moon_nakshatra) = positions
        .get(&CelestialBody::Moon)
        .map(|moon| (moon.sign, moon.nakshatra_index))
        .unwrap_or_else(|| {
            let moon = ephemeris.position(CelestialBody::Moon, instant);
            (moon.sign, moon.nakshatra_index)
        });

    Ok(NatalChart {
        birth: birth.clone(),
        ascendant_sign: Sign::from_longitude(ascendant_longitude),
        ascendant_longitude,
        moon_sign,
        moon_nakshatra,
        positions,
        accuracy,
    })
}

fn mean_positions(
    ephemeris: &MeanMotionEphemeris,
    instant: DateTime<Utc>,
) -> BTreeMap<CelestialBody, Position> {
    ephemeris
        .positions(instant)
        .into_iter()
        .map(|position| (position.body, position))
        .collect()
}
