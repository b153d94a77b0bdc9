use crate::angles::angular_separation;
use crate::aspects::types::{AspectKind, AspectRecord};
use crate::ephemeris::types::Position;

/// Aspect angles in order of frequency (most common first)
const ASPECT_ANGLES: &[AspectKind] = &[
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

/// Exact-angle aspect calculator.
///
/// Separations are rounded to whole degrees and must hit an aspect angle
/// exactly; there is no orb.
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Separation of two longitudes in whole degrees (0-180).
    pub fn separation(&self, lon_a: f64, lon_b: f64) -> u16 {
        angular_separation(lon_a, lon_b).round() as u16
    }

    /// Aspect formed by two longitudes, if any.
    pub fn calculate_aspect(&self, lon_a: f64, lon_b: f64) -> Option<AspectKind> {
        let angle = self.separation(lon_a, lon_b);
        ASPECT_ANGLES.iter().copied().find(|kind| kind.angle() == angle)
    }

    /// Aspects from every transiting body to every natal body.
    ///
    /// A body aspecting its own natal place is included.
    pub fn compute_transit_aspects(
        &self,
        transit: &[Position],
        natal: &[Position],
    ) -> Vec<AspectRecord> {
        let mut records = Vec::new();
        for moving in transit {
            for fixed in natal {
                if let Some(kind) =
                    self.calculate_aspect(moving.sidereal_longitude, fixed.sidereal_longitude)
                {
                    records.push(AspectRecord {
                        transit_body: moving.body,
                        natal_body: fixed.body,
                        kind,
                        angle: kind.angle(),
                        tone: kind.tone(),
                    });
                }
            }
        }
        records
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectTone;
    use crate::vedic::types::CelestialBody;

    fn at(body: CelestialBody, lon: f64) -> Position {
        Position::from_tropical(body, lon, 0.0, 0.0, false)
    }

    #[test]
    fn test_exact_angles_only() {
        let calculator = AspectCalculator::new();
        assert_eq!(calculator.calculate_aspect(100.0, 100.3), Some(AspectKind::Conjunction));
        assert_eq!(calculator.calculate_aspect(100.0, 280.0), Some(AspectKind::Opposition));
        assert_eq!(calculator.calculate_aspect(10.0, 130.4), Some(AspectKind::Trine));
        assert_eq!(calculator.calculate_aspect(10.0, 131.0), None);
        assert_eq!(calculator.calculate_aspect(350.0, 50.0), Some(AspectKind::Sextile));
    }

    #[test]
    fn test_transit_to_natal_includes_same_body() {
        let calculator = AspectCalculator::new();
        let transit = vec![at(CelestialBody::Jupiter, 40.0)];
        let natal = vec![at(CelestialBody::Jupiter, 130.0), at(CelestialBody::Venus, 41.0)];
        let records = calculator.compute_transit_aspects(&transit, &natal);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].natal_body, CelestialBody::Jupiter);
        assert_eq!(records[0].kind, AspectKind::Square);
        assert_eq!(records[0].tone, AspectTone::Tense);
    }
}
