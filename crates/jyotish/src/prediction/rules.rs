//! Ordered rule chains turning the analysis into prose.
//!
//! Each category walks its rules top to bottom and the first match wins.
//! Output depends only on the inputs.

use crate::aspects::types::{AspectRecord, AspectTone, TransitEffect, TransitRecord};
use crate::aspects::transits::major_transits;
use crate::dignity::dignities::InfluenceReport;
use crate::prediction::remedies::{select_remedies, transit_warning, Remedies};
use crate::vedic::dashas::DashaPeriod;
use crate::vedic::panchang::PanchangSnapshot;
use crate::vedic::types::CelestialBody;
use serde::{Deserialize, Serialize};

const NET_ENERGY_AUSPICIOUS: f64 = 2.0;
const NET_ENERGY_CAUTION: f64 = -1.0;

/// Everything the synthesizer reads
#[derive(Debug, Clone, Copy)]
pub struct PredictionInput<'a> {
    pub panchang: &'a PanchangSnapshot,
    pub influence: &'a InfluenceReport,
    pub transits: &'a [TransitRecord],
    pub aspects: &'a [AspectRecord],
    pub dasha: Option<&'a DashaPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub overall: String,
    pub love: String,
    pub career: String,
    pub health: String,
    pub finance: String,
    pub remedies: Remedies,
}

fn house_of(transits: &[TransitRecord], body: CelestialBody) -> Option<u8> {
    transits.iter().find(|t| t.body == body).map(|t| t.house)
}

fn in_houses(transits: &[TransitRecord], body: CelestialBody, houses: &[u8]) -> bool {
    house_of(transits, body).is_some_and(|house| houses.contains(&house))
}

pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// First challenging transit of a major body.
pub fn headline_challenge(transits: &[TransitRecord]) -> Option<&TransitRecord> {
    major_transits(transits).find(|t| t.effect == TransitEffect::Challenging)
}

/// Tone score of a Mahadasha lord
fn dasha_score(body: CelestialBody) -> i8 {
    match body {
        CelestialBody::Jupiter => 2,
        CelestialBody::Venus | CelestialBody::Sun | CelestialBody::Moon => 1,
        _ => 0,
    }
}

/// "Saturn (Shani)"; the nodes keep their single name
fn body_label(body: CelestialBody) -> String {
    if body.is_node() {
        body.to_string()
    } else {
        format!("{} ({})", body, body.sanskrit_name())
    }
}

fn dasha_sentence(dasha: &DashaPeriod) -> String {
    let tone = match (dasha_score(dasha.mahadasha_body), dasha.mahadasha_body) {
        (2, _) => "favours learning, growth and good counsel",
        (1, _) => "lends steady support to your efforts",
        (_, CelestialBody::Saturn) => "asks for discipline and rewards persistence",
        _ => "brings mixed results that reward careful choices",
    };
    format!(
        " Your {}-year {} Mahadasha with {} Antardasha {}.",
        dasha.mahadasha_length_years,
        body_label(dasha.mahadasha_body),
        dasha.antardasha_body,
        tone
    )
}

fn overall(input: &PredictionInput) -> String {
    let energy = input.influence.net_energy;
    let mut text = if energy > NET_ENERGY_AUSPICIOUS {
        String::from("An auspicious day: planetary support is strong and new beginnings are favoured.")
    } else if energy < NET_ENERGY_CAUTION {
        String::from("A day for caution: move slowly and avoid major commitments.")
    } else {
        String::from("A mixed day: steady effort brings results while haste does not.")
    };
    text.push_str(&format!(
        " The Moon transits {} nakshatra, ruled by {}.",
        input.panchang.nakshatra.name, input.panchang.nakshatra.lord
    ));
    if let Some(dasha) = input.dasha {
        text.push_str(&dasha_sentence(dasha));
    }
    if let Some(challenge) = headline_challenge(input.transits) {
        text.push_str(&format!(
            " {} in your {} house calls for care.",
            challenge.body,
            ordinal(challenge.house)
        ));
    }
    text
}

fn love(input: &PredictionInput) -> String {
    let venus_supportive = input.influence.is_benefic(CelestialBody::Venus)
        || in_houses(input.transits, CelestialBody::Venus, &[1, 5, 7, 11]);
    let harmonious_heart = input.aspects.iter().any(|a| {
        a.tone == AspectTone::Harmonious
            && [a.transit_body, a.natal_body]
                .iter()
                .any(|b| matches!(b, CelestialBody::Venus | CelestialBody::Moon))
    });

    if venus_supportive {
        "Venus favours romance; a good day to express affection and deepen bonds.".to_string()
    } else if harmonious_heart {
        "A gentle current supports understanding with your partner; listen closely.".to_string()
    } else if in_houses(input.transits, CelestialBody::Mars, &[6, 8, 12]) {
        "Mars stirs friction in relationships; choose patience over argument.".to_string()
    } else {
        "Relationships stay steady; small gestures of care go a long way.".to_string()
    }
}

fn career(input: &PredictionInput) -> String {
    if in_houses(input.transits, CelestialBody::Jupiter, &[1, 5, 9, 10, 11]) {
        "Jupiter opens doors for growth and recognition at work.".to_string()
    } else if in_houses(input.transits, CelestialBody::Saturn, &[6, 10, 11]) {
        "Saturn rewards hard work; disciplined effort now builds lasting results.".to_string()
    } else if let Some(dasha) = input.dasha.filter(|d| {
        matches!(
            d.mahadasha_body,
            CelestialBody::Saturn | CelestialBody::Jupiter | CelestialBody::Sun | CelestialBody::Mercury
        )
    }) {
        format!(
            "Your {} Mahadasha keeps professional matters in focus; act on long-term plans.",
            dasha.mahadasha_body
        )
    } else {
        "Work proceeds at an even pace; attend to pending tasks.".to_string()
    }
}

fn health(input: &PredictionInput) -> String {
    if in_houses(input.transits, CelestialBody::Mars, &[6, 8, 12]) {
        "Mars warns against strain and injury; rest well and avoid risks.".to_string()
    } else if input.influence.is_benefic(CelestialBody::Sun) {
        "The Sun supports vitality; a good day for exercise and fresh routines.".to_string()
    } else {
        "Health stays balanced; keep regular meals and sleep.".to_string()
    }
}

fn finance(input: &PredictionInput) -> String {
    if in_houses(input.transits, CelestialBody::Jupiter, &[2, 5, 9, 11]) {
        "Jupiter brings prospects of gain; sound investments are favoured.".to_string()
    } else if input.influence.is_benefic(CelestialBody::Mercury) {
        "Mercury sharpens judgement in trade and negotiation.".to_string()
    } else {
        "Finances hold steady; avoid impulsive spending.".to_string()
    }
}

/// Produce the full prediction for one set of inputs.
pub fn synthesize(input: &PredictionInput) -> PredictionResult {
    PredictionResult {
        overall: overall(input),
        love: love(input),
        career: career(input),
        health: health(input),
        finance: finance(input),
        remedies: select_remedies(input.influence, input.transits),
    }
}

/// Caution for the day: a challenging major transit, else Rahu Kaal.
pub fn daily_warning(panchang: &PanchangSnapshot, transits: &[TransitRecord]) -> String {
    match headline_challenge(transits) {
        Some(record) => transit_warning(record.body).to_string(),
        None => format!(
            "Avoid starting important work during Rahu Kaal ({}).",
            panchang.rahu_kaal
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
    }

    #[test]
    fn test_dasha_sentence_names_period() {
        let saturn = crate::vedic::dashas::dasha_for_age(CelestialBody::Saturn, 0);
        assert_eq!(
            dasha_sentence(&saturn),
            " Your 19-year Saturn (Shani) Mahadasha with Saturn Antardasha asks for discipline and rewards persistence."
        );

        let rahu = crate::vedic::dashas::dasha_for_age(CelestialBody::Rahu, 0);
        assert!(dasha_sentence(&rahu).starts_with(" Your 18-year Rahu Mahadasha"));
    }
}
