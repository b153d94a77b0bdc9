use crate::ephemeris::types::GeoLocation;
use crate::vedic::types::CelestialBody;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: String,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Provider chart is missing bodies: {missing:?}")]
    IncompleteChart { missing: Vec<String> },
    #[error("Provider returned an invalid longitude for {body}: {value}")]
    InvalidLongitude { body: String, value: f64 },
}

/// Tropical placement reported by an external provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderPlacement {
    /// Tropical longitude in degrees
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// Raw natal data from an external provider, before validation
#[derive(Debug, Clone, Default)]
pub struct ProviderChart {
    pub placements: HashMap<CelestialBody, ProviderPlacement>,
    /// Tropical ascendant, when the provider computes houses
    pub ascendant: Option<f64>,
}

/// Source of precise natal positions.
///
/// Implementations return tropical longitudes; sidereal conversion happens in the engine.
pub trait ChartProvider {
    fn natal_chart(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<ProviderChart, EphemerisError>;
}

fn valid_longitude(value: f64) -> bool {
    value.is_finite() && (0.0..360.0).contains(&value)
}

/// Reject partial or malformed provider output.
pub fn validate_provider_chart(chart: &ProviderChart) -> Result<(), EphemerisError> {
    let missing: Vec<String> = CelestialBody::ALL
        .iter()
        .filter(|body| !chart.placements.contains_key(body))
        .map(|body| body.as_str().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EphemerisError::IncompleteChart { missing });
    }

    for body in CelestialBody::ALL {
        if let Some(placement) = chart.placements.get(&body) {
            if !valid_longitude(placement.longitude) || !placement.speed.is_finite() {
                return Err(EphemerisError::InvalidLongitude {
                    body: body.as_str().to_string(),
                    value: placement.longitude,
                });
            }
        }
    }

    if let Some(asc) = chart.ascendant {
        if !valid_longitude(asc) {
            return Err(EphemerisError::InvalidLongitude {
                body: "ascendant".to_string(),
                value: asc,
            });
        }
    }
    Ok(())
}

#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemerisAdapter;

#[cfg(feature = "swisseph")]
mod swiss {
    use super::{ChartProvider, EphemerisError, ProviderChart, ProviderPlacement};
    use crate::angles::normalize_degrees;
    use crate::ephemeris::time::julian_day;
    use crate::ephemeris::types::GeoLocation;
    use crate::vedic::types::CelestialBody;
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;
    use swisseph::swe::{calc_ut, houses_ex};

    // Swiss Ephemeris body codes; Rahu uses the true node
    const BODY_CODES: &[(CelestialBody, u32)] = &[
        (CelestialBody::Sun, 0),
        (CelestialBody::Moon, 1),
        (CelestialBody::Mercury, 2),
        (CelestialBody::Venus, 3),
        (CelestialBody::Mars, 4),
        (CelestialBody::Jupiter, 5),
        (CelestialBody::Saturn, 6),
        (CelestialBody::Rahu, 11),
    ];

    // FLG_SWIEPH | FLG_SPEED
    const FLAGS: u32 = 2 | 256;

    /// Swiss Ephemeris adapter.
    ///
    /// Data files are looked up in the library's built-in search path; when
    /// none are present the library falls back to its analytical model.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SwissEphemerisAdapter;

    impl SwissEphemerisAdapter {
        pub fn new() -> Self {
            Self
        }

        fn calc_body(
            &self,
            body: CelestialBody,
            code: u32,
            jd: f64,
            instant: DateTime<Utc>,
        ) -> Result<ProviderPlacement, EphemerisError> {
            let result = calc_ut(jd, code, FLAGS).map_err(|e| EphemerisError::CalculationFailed {
                body: body.as_str().to_string(),
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            })?;
            Ok(ProviderPlacement {
                longitude: normalize_degrees(result.out[0]),
                speed: result.out[3],
            })
        }
    }

    impl ChartProvider for SwissEphemerisAdapter {
        fn natal_chart(
            &self,
            instant: DateTime<Utc>,
            location: &GeoLocation,
        ) -> Result<ProviderChart, EphemerisError> {
            let jd = julian_day(instant);
            let mut placements = HashMap::new();
            for (body, code) in BODY_CODES {
                placements.insert(*body, self.calc_body(*body, *code, jd, instant)?);
            }
            if let Some(rahu) = placements.get(&CelestialBody::Rahu).copied() {
                placements.insert(
                    CelestialBody::Ketu,
                    ProviderPlacement {
                        longitude: normalize_degrees(rahu.longitude + 180.0),
                        speed: rahu.speed,
                    },
                );
            }

            let (_cusps, ascmc) = houses_ex(jd, 2, location.lat, location.lon, b'W' as i32);
            Ok(ProviderChart {
                placements,
                ascendant: Some(normalize_degrees(ascmc[0])),
            })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chart() -> ProviderChart {
        let mut placements = HashMap::new();
        for (i, body) in CelestialBody::ALL.iter().enumerate() {
            placements.insert(
                *body,
                ProviderPlacement {
                    longitude: i as f64 * 40.0,
                    speed: 1.0,
                },
            );
        }
        ProviderChart {
            placements,
            ascendant: Some(12.0),
        }
    }

    #[test]
    fn test_complete_chart_validates() {
        assert!(validate_provider_chart(&full_chart()).is_ok());
    }

    #[test]
    fn test_missing_body_rejected() {
        let mut chart = full_chart();
        chart.placements.remove(&CelestialBody::Ketu);
        match validate_provider_chart(&chart) {
            Err(EphemerisError::IncompleteChart { missing }) => assert_eq!(missing, vec!["ketu"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_longitude_rejected() {
        let mut chart = full_chart();
        chart.placements.insert(
            CelestialBody::Moon,
            ProviderPlacement {
                longitude: f64::NAN,
                speed: 13.0,
            },
        );
        assert!(matches!(
            validate_provider_chart(&chart),
            Err(EphemerisError::InvalidLongitude { .. })
        ));
    }
}
