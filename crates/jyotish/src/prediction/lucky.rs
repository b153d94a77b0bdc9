use crate::dignity::dignities::InfluenceReport;
use crate::dignity::profiles::{lord_deity, SignProfile};
use crate::prediction::remedies::remedy_bundle;
use serde::{Deserialize, Serialize};

// Sunday first
const DIRECTIONS: &[&str] = &["North", "North-East", "East", "South-East", "South", "South-West", "West"];

const AUSPICIOUS_TIMES: &[&str] = &[
    "06:00-08:00",
    "08:00-10:00",
    "12:00-14:00",
    "16:00-18:00",
    "18:00-20:00",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyElements {
    pub numbers: Vec<u8>,
    pub colors: Vec<String>,
    pub direction: String,
    pub time: String,
    pub deity: String,
    pub gemstones: Vec<String>,
}

/// Lucky elements for a sign on a weekday (0 = Sunday).
///
/// Gemstones start with the sign stone, followed by those of any strong bodies.
pub fn lucky_elements(
    profile: &SignProfile,
    weekday_index: u8,
    influence: &InfluenceReport,
) -> LuckyElements {
    let mut gemstones = vec![profile.gemstone.to_string()];
    for body in influence.strong_bodies() {
        let stone = remedy_bundle(body).gemstone.to_string();
        if !gemstones.contains(&stone) {
            gemstones.push(stone);
        }
    }

    LuckyElements {
        numbers: profile.lucky_numbers.to_vec(),
        colors: profile.lucky_colors.iter().map(|c| c.to_string()).collect(),
        direction: DIRECTIONS[weekday_index as usize % DIRECTIONS.len()].to_string(),
        time: AUSPICIOUS_TIMES[weekday_index as usize % AUSPICIOUS_TIMES.len()].to_string(),
        deity: lord_deity(profile.lord).to_string(),
        gemstones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dignity::dignities::{BodyInfluence, DignityType};
    use crate::dignity::profiles::sign_profile;
    use crate::vedic::types::{CelestialBody, Sign};

    #[test]
    fn test_lucky_elements_for_saturday() {
        let influence = InfluenceReport {
            sign: Sign::Simha,
            lord: CelestialBody::Sun,
            lord_strength: DignityType::Neutral,
            benefic_bodies: vec![CelestialBody::Jupiter],
            malefic_bodies: vec![],
            net_energy: 3.0,
            influences: vec![BodyInfluence {
                body: CelestialBody::Jupiter,
                sign: Sign::Dhanu,
                dignity: DignityType::Strong,
                score: 3.0,
            }],
        };
        let lucky = lucky_elements(sign_profile(Sign::Simha), 6, &influence);
        assert_eq!(lucky.numbers, vec![1, 4, 13]);
        assert_eq!(lucky.direction, "West");
        assert_eq!(lucky.time, "08:00-10:00");
        assert_eq!(lucky.deity, "Surya Dev");
        assert_eq!(lucky.gemstones, vec!["Ruby".to_string(), "Yellow Sapphire".to_string()]);
    }
}
