use crate::vedic::types::CelestialBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitEffect {
    Beneficial,
    Challenging,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intensity {
    High,
    Medium,
}

/// Major transits (slow bodies) drive the headline; minor ones only colour categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Significance {
    Major,
    Minor,
}

/// A body's placement counted in houses from a target sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitRecord {
    pub body: CelestialBody,
    /// 1-12, the target sign itself being house 1
    pub house: u8,
    pub effect: TransitEffect,
    pub intensity: Intensity,
    pub significance: Significance,
    pub is_retrograde: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectTone {
    Harmonious,
    Tense,
    /// Conjunctions take the colour of the bodies involved
    Variable,
}

impl AspectKind {
    pub fn angle(&self) -> u16 {
        match self {
            AspectKind::Conjunction => 0,
            AspectKind::Sextile => 60,
            AspectKind::Square => 90,
            AspectKind::Trine => 120,
            AspectKind::Opposition => 180,
        }
    }

    pub fn tone(&self) -> AspectTone {
        match self {
            AspectKind::Conjunction => AspectTone::Variable,
            AspectKind::Sextile | AspectKind::Trine => AspectTone::Harmonious,
            AspectKind::Square | AspectKind::Opposition => AspectTone::Tense,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

/// A transit-to-natal aspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRecord {
    pub transit_body: CelestialBody,
    pub natal_body: CelestialBody,
    pub kind: AspectKind,
    /// Separation in whole degrees
    pub angle: u16,
    pub tone: AspectTone,
}
