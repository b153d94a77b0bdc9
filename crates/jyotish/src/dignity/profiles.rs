//! Static sign profiles: lord, element, modality and lucky attributes.

use crate::vedic::types::{CelestialBody, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Fire
    Agni,
    /// Earth
    Prithvi,
    /// Air
    Vayu,
    /// Water
    Jal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Movable
    Chara,
    /// Fixed
    Sthira,
    /// Dual
    Dwiswa,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignProfile {
    pub sign: Sign,
    pub lord: CelestialBody,
    pub element: Element,
    pub modality: Modality,
    pub lucky_numbers: [u8; 3],
    pub lucky_colors: [&'static str; 2],
    pub gemstone: &'static str,
}

macro_rules! profile {
    ($sign:ident, $element:ident, $modality:ident, $numbers:expr, $colors:expr, $gem:expr) => {
        SignProfile {
            sign: Sign::$sign,
            lord: Sign::$sign.lord(),
            element: Element::$element,
            modality: Modality::$modality,
            lucky_numbers: $numbers,
            lucky_colors: $colors,
            gemstone: $gem,
        }
    };
}

fn build_profiles() -> Vec<SignProfile> {
    vec![
        profile!(Mesh, Agni, Chara, [1, 8, 17], ["Red", "Orange"], "Red Coral"),
        profile!(Vrishabh, Prithvi, Sthira, [2, 6, 9], ["Green", "Pink"], "Diamond"),
        profile!(Mithun, Vayu, Dwiswa, [5, 14, 23], ["Yellow", "Light Green"], "Emerald"),
        profile!(Kark, Jal, Chara, [2, 7, 16], ["White", "Silver"], "Pearl"),
        profile!(Simha, Agni, Sthira, [1, 4, 13], ["Gold", "Orange"], "Ruby"),
        profile!(Kanya, Prithvi, Dwiswa, [6, 15, 24], ["Green", "Brown"], "Emerald"),
        profile!(Tula, Vayu, Chara, [6, 15, 24], ["Blue", "Pink"], "Diamond"),
        profile!(Vrishchik, Jal, Sthira, [4, 13, 22], ["Red", "Maroon"], "Red Coral"),
        profile!(Dhanu, Agni, Dwiswa, [3, 12, 21], ["Yellow", "Orange"], "Yellow Sapphire"),
        profile!(Makar, Prithvi, Chara, [8, 17, 26], ["Black", "Dark Blue"], "Blue Sapphire"),
        profile!(Kumbh, Vayu, Sthira, [4, 13, 22], ["Blue", "Purple"], "Blue Sapphire"),
        profile!(Meen, Jal, Dwiswa, [3, 9, 12], ["Sea Green", "Yellow"], "Yellow Sapphire"),
    ]
}

lazy_static::lazy_static! {
    static ref SIGN_PROFILES: Vec<SignProfile> = build_profiles();
}

pub fn sign_profile(sign: Sign) -> &'static SignProfile {
    &SIGN_PROFILES[sign.index()]
}

/// Presiding deity worshipped for a sign lord.
pub fn lord_deity(lord: CelestialBody) -> &'static str {
    match lord {
        CelestialBody::Sun => "Surya Dev",
        CelestialBody::Moon => "Chandra Dev",
        CelestialBody::Mars => "Hanuman",
        CelestialBody::Mercury => "Ganesha",
        CelestialBody::Jupiter => "Brihaspati",
        CelestialBody::Venus => "Lakshmi",
        CelestialBody::Saturn => "Shani Dev",
        CelestialBody::Rahu | CelestialBody::Ketu => "Vishnu",
    }
}
