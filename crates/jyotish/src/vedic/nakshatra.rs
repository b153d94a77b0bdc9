//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::angles::normalize_degrees;
use crate::vedic::types::CelestialBody;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_COUNT: usize = 27;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guna {
    Sattva,
    Rajas,
    Tamas,
}

use CelestialBody::*;
use Guna::*;

// (slug, display name, lord, deity, guna)
const NAKSHATRA_ORDER: &[(&str, &str, CelestialBody, &str, Guna)] = &[
    ("ashwini", "Ashwini", Ketu, "Ashwini Kumaras", Rajas),
    ("bharani", "Bharani", Venus, "Yama", Rajas),
    ("krittika", "Krittika", Sun, "Agni", Rajas),
    ("rohini", "Rohini", Moon, "Brahma", Rajas),
    ("mrigashira", "Mrigashira", Mars, "Soma", Tamas),
    ("ardra", "Ardra", Rahu, "Rudra", Tamas),
    ("punarvasu", "Punarvasu", Jupiter, "Aditi", Rajas),
    ("pushya", "Pushya", Saturn, "Brihaspati", Rajas),
    ("ashlesha", "Ashlesha", Mercury, "Nagas", Tamas),
    ("magha", "Magha", Ketu, "Pitris", Tamas),
    ("purva_phalguni", "Purva Phalguni", Venus, "Bhaga", Rajas),
    ("uttara_phalguni", "Uttara Phalguni", Sun, "Aryaman", Rajas),
    ("hasta", "Hasta", Moon, "Savitr", Rajas),
    ("chitra", "Chitra", Mars, "Tvashtar", Tamas),
    ("swati", "Swati", Rahu, "Vayu", Tamas),
    ("vishakha", "Vishakha", Jupiter, "Indragni", Rajas),
    ("anuradha", "Anuradha", Saturn, "Mitra", Tamas),
    ("jyeshtha", "Jyeshtha", Mercury, "Indra", Rajas),
    ("mula", "Mula", Ketu, "Nirriti", Tamas),
    ("purva_ashadha", "Purva Ashadha", Venus, "Apas", Rajas),
    ("uttara_ashadha", "Uttara Ashadha", Sun, "Vishvedevas", Rajas),
    ("shravana", "Shravana", Moon, "Vishnu", Rajas),
    ("dhanishta", "Dhanishta", Mars, "Vasus", Tamas),
    ("shatabhisha", "Shatabhisha", Rahu, "Varuna", Tamas),
    ("purva_bhadrapada", "Purva Bhadrapada", Jupiter, "Aja Ekapada", Rajas),
    ("uttara_bhadrapada", "Uttara Bhadrapada", Saturn, "Ahir Budhnya", Tamas),
    ("revati", "Revati", Mercury, "Pushan", Sattva),
];

/// Nakshatras favourable for new undertakings
const AUSPICIOUS_NAKSHATRAS: &[usize] = &[0, 3, 6, 10, 12, 15, 21, 26];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraRecord {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub lord: CelestialBody,
    pub deity: String,
    pub guna: Guna,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraMetadata {
    #[serde(flatten)]
    pub base: NakshatraRecord,
    pub offset: f64,
    pub progress: f64,
    pub pada: u8,
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, display_name, lord, deity, guna))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            NakshatraRecord {
                index: idx,
                id: slug.to_string(),
                name: display_name.to_string(),
                lord: *lord,
                deity: deity.to_string(),
                guna: *guna,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

/// Index (0-26) of the nakshatra containing a sidereal longitude.
pub fn nakshatra_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / NAKSHATRA_SEGMENT_SIZE) as usize).min(NAKSHATRA_COUNT - 1)
}

/// Static record for a nakshatra index; indices wrap modulo 27.
pub fn nakshatra(index: usize) -> &'static NakshatraRecord {
    &NAKSHATRA_TABLE[index % NAKSHATRA_COUNT]
}

pub fn is_auspicious_nakshatra(index: usize) -> bool {
    AUSPICIOUS_NAKSHATRAS.contains(&(index % NAKSHATRA_COUNT))
}

/// Return metadata for the nakshatra containing the given longitude.
///
/// Includes the within-nakshatra offset, pada number and pada fraction.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let entry = nakshatra(nakshatra_index(lon));

    let offset = lon - entry.start;
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;
    let pada_offset = offset - (pada - 1) as f64 * PADA_SIZE;

    NakshatraMetadata {
        base: entry.clone(),
        offset,
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}
