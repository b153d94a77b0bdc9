//! House-based transit evaluation relative to a target sign.

use crate::aspects::types::{Intensity, Significance, TransitEffect, TransitRecord};
use crate::ephemeris::types::Position;
use crate::vedic::types::{CelestialBody, Sign};

const BENEFICIAL_HOUSES: &[u8] = &[1, 3, 5, 9, 10, 11];
const BENEFICIAL_HIGH: &[u8] = &[1, 5, 9, 10];
const CHALLENGING_HOUSES: &[u8] = &[6, 8, 12];
const CHALLENGING_HIGH: &[u8] = &[8, 12];

/// House (1-12) occupied by `body_sign` counted from `target`.
pub fn house_from(target: Sign, body_sign: Sign) -> u8 {
    ((body_sign.index() + 12 - target.index()) % 12) as u8 + 1
}

/// Effect and intensity of a transit through a house.
pub fn classify_house(house: u8) -> (TransitEffect, Intensity) {
    if BENEFICIAL_HOUSES.contains(&house) {
        let intensity = if BENEFICIAL_HIGH.contains(&house) {
            Intensity::High
        } else {
            Intensity::Medium
        };
        (TransitEffect::Beneficial, intensity)
    } else if CHALLENGING_HOUSES.contains(&house) {
        let intensity = if CHALLENGING_HIGH.contains(&house) {
            Intensity::High
        } else {
            Intensity::Medium
        };
        (TransitEffect::Challenging, intensity)
    } else {
        (TransitEffect::Neutral, Intensity::Medium)
    }
}

pub fn significance(body: CelestialBody) -> Significance {
    match body {
        CelestialBody::Jupiter | CelestialBody::Saturn | CelestialBody::Rahu | CelestialBody::Ketu => {
            Significance::Major
        }
        _ => Significance::Minor,
    }
}

/// Transit record for every position relative to `target`.
pub fn compute_transits(target: Sign, positions: &[Position]) -> Vec<TransitRecord> {
    positions
        .iter()
        .map(|position| {
            let house = house_from(target, position.sign);
            let (effect, intensity) = classify_house(house);
            TransitRecord {
                body: position.body,
                house,
                effect,
                intensity,
                significance: significance(position.body),
                is_retrograde: position.is_retrograde,
            }
        })
        .collect()
}

/// Major transits only; these feed the headline and warning.
pub fn major_transits(records: &[TransitRecord]) -> impl Iterator<Item = &TransitRecord> {
    records
        .iter()
        .filter(|record| record.significance == Significance::Major)
}
