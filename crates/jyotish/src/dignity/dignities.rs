//! Dignity and influence analysis.
//!
//! Classifies each body as strong, weak or neutral by sign placement and
//! folds the result into a benefic/malefic score per body.

use crate::ephemeris::types::Position;
use crate::vedic::types::{CelestialBody, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityType {
    /// Exalted or in own sign
    Strong,
    /// Debilitated
    Weak,
    Neutral,
}

/// Retrograde planets lose part of their influence; the nodes are always retrograde.
const RETROGRADE_FACTOR: f64 = 0.7;

/// Exaltation sign, debilitation sign, own signs
pub fn dignity_table(body: CelestialBody) -> (Sign, Sign, &'static [Sign]) {
    match body {
        CelestialBody::Sun => (Sign::Mesh, Sign::Tula, &[Sign::Simha]),
        CelestialBody::Moon => (Sign::Vrishabh, Sign::Vrishchik, &[Sign::Kark]),
        CelestialBody::Mars => (Sign::Makar, Sign::Kark, &[Sign::Mesh, Sign::Vrishchik]),
        CelestialBody::Mercury => (Sign::Kanya, Sign::Meen, &[Sign::Mithun, Sign::Kanya]),
        CelestialBody::Jupiter => (Sign::Kark, Sign::Makar, &[Sign::Dhanu, Sign::Meen]),
        CelestialBody::Venus => (Sign::Meen, Sign::Kanya, &[Sign::Vrishabh, Sign::Tula]),
        CelestialBody::Saturn => (Sign::Tula, Sign::Mesh, &[Sign::Makar, Sign::Kumbh]),
        CelestialBody::Rahu => (Sign::Vrishabh, Sign::Vrishchik, &[Sign::Kumbh]),
        CelestialBody::Ketu => (Sign::Vrishchik, Sign::Vrishabh, &[Sign::Vrishchik]),
    }
}

/// Inherent benefic (+) or malefic (-) nature
pub fn base_nature(body: CelestialBody) -> f64 {
    match body {
        CelestialBody::Jupiter => 2.0,
        CelestialBody::Sun | CelestialBody::Moon | CelestialBody::Venus => 1.0,
        CelestialBody::Mercury => 0.0,
        CelestialBody::Mars | CelestialBody::Saturn | CelestialBody::Ketu => -1.0,
        CelestialBody::Rahu => -2.0,
    }
}

/// Dignity of a body placed in a sign.
pub fn dignity_of(body: CelestialBody, sign: Sign) -> DignityType {
    let (exaltation, debilitation, own) = dignity_table(body);
    if sign == exaltation || own.contains(&sign) {
        DignityType::Strong
    } else if sign == debilitation {
        DignityType::Weak
    } else {
        DignityType::Neutral
    }
}

/// Adjusted influence score for one position.
pub fn influence_score(position: &Position) -> f64 {
    let adjustment = match dignity_of(position.body, position.sign) {
        DignityType::Strong => 1.0,
        DignityType::Weak => -1.0,
        DignityType::Neutral => 0.0,
    };
    let score = base_nature(position.body) + adjustment;
    if position.is_retrograde && !position.body.is_node() {
        score * RETROGRADE_FACTOR
    } else {
        score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyInfluence {
    pub body: CelestialBody,
    pub sign: Sign,
    pub dignity: DignityType,
    pub score: f64,
}

/// Influence summary for a target sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceReport {
    pub sign: Sign,
    pub lord: CelestialBody,
    pub lord_strength: DignityType,
    pub benefic_bodies: Vec<CelestialBody>,
    pub malefic_bodies: Vec<CelestialBody>,
    pub net_energy: f64,
    pub influences: Vec<BodyInfluence>,
}

impl InfluenceReport {
    pub fn is_benefic(&self, body: CelestialBody) -> bool {
        self.benefic_bodies.contains(&body)
    }

    pub fn is_malefic(&self, body: CelestialBody) -> bool {
        self.malefic_bodies.contains(&body)
    }

    /// Bodies currently exalted or in own sign.
    pub fn strong_bodies(&self) -> impl Iterator<Item = CelestialBody> + '_ {
        self.influences
            .iter()
            .filter(|i| i.dignity == DignityType::Strong)
            .map(|i| i.body)
    }
}

/// Analyze how the current positions act on `target`.
pub fn analyze_sign(target: Sign, positions: &[Position]) -> InfluenceReport {
    let lord = target.lord();
    let lord_strength = positions
        .iter()
        .find(|p| p.body == lord)
        .map(|p| dignity_of(lord, p.sign))
        .unwrap_or(DignityType::Neutral);

    let influences: Vec<BodyInfluence> = positions
        .iter()
        .map(|position| BodyInfluence {
            body: position.body,
            sign: position.sign,
            dignity: dignity_of(position.body, position.sign),
            score: influence_score(position),
        })
        .collect();

    let benefic_bodies = influences
        .iter()
        .filter(|i| i.score > 0.0)
        .map(|i| i.body)
        .collect();
    let malefic_bodies = influences
        .iter()
        .filter(|i| i.score < 0.0)
        .map(|i| i.body)
        .collect();
    let net_energy = influences.iter().map(|i| i.score).sum();

    InfluenceReport {
        sign: target,
        lord,
        lord_strength,
        benefic_bodies,
        malefic_bodies,
        net_energy,
        influences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(body: CelestialBody, sign: Sign, retrograde: bool) -> Position {
        // middle of the sign, tropical = sidereal when ayanamsa is zero
        Position::from_tropical(body, sign.index() as f64 * 30.0 + 15.0, 0.0, 0.0, retrograde)
    }

    #[test]
    fn test_mars_exalted_in_makar() {
        assert_eq!(dignity_of(CelestialBody::Mars, Sign::Makar), DignityType::Strong);
        let report = analyze_sign(Sign::Mesh, &[placed(CelestialBody::Mars, Sign::Makar, false)]);
        assert_eq!(report.lord, CelestialBody::Mars);
        assert_eq!(report.lord_strength, DignityType::Strong);
        // -1 base, +1 strong
        assert_eq!(report.net_energy, 0.0);
        assert!(report.benefic_bodies.is_empty() && report.malefic_bodies.is_empty());
    }

    #[test]
    fn test_debilitation_never_strong() {
        for body in CelestialBody::ALL {
            let (exaltation, debilitation, own) = dignity_table(body);
            assert_ne!(exaltation, debilitation);
            assert!(!own.contains(&debilitation));
            assert_eq!(dignity_of(body, debilitation), DignityType::Weak);
        }
    }

    #[test]
    fn test_retrograde_damping_skips_nodes() {
        let jupiter = placed(CelestialBody::Jupiter, Sign::Kark, true);
        assert!((influence_score(&jupiter) - 2.1).abs() < 1e-9);
        let rahu = placed(CelestialBody::Rahu, Sign::Simha, true);
        assert_eq!(influence_score(&rahu), -2.0);
    }

    #[test]
    fn test_benefic_and_malefic_partition() {
        let positions = vec![
            placed(CelestialBody::Jupiter, Sign::Dhanu, false),
            placed(CelestialBody::Saturn, Sign::Mesh, false),
            placed(CelestialBody::Mercury, Sign::Simha, false),
        ];
        let report = analyze_sign(Sign::Simha, &positions);
        assert_eq!(report.benefic_bodies, vec![CelestialBody::Jupiter]);
        assert_eq!(report.malefic_bodies, vec![CelestialBody::Saturn]);
        assert_eq!(report.net_energy, 3.0 - 2.0);
        assert_eq!(report.lord_strength, DignityType::Neutral);
        assert_eq!(report.strong_bodies().collect::<Vec<_>>(), vec![CelestialBody::Jupiter]);
    }
}
