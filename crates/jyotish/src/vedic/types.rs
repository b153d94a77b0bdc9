use crate::angles::normalize_degrees;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine grahas used in Vedic astrology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 9] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mars,
        CelestialBody::Mercury,
        CelestialBody::Jupiter,
        CelestialBody::Venus,
        CelestialBody::Saturn,
        CelestialBody::Rahu,
        CelestialBody::Ketu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mars => "mars",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Venus => "venus",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Rahu => "rahu",
            CelestialBody::Ketu => "ketu",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mars => "Mars",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Venus => "Venus",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Rahu => "Rahu",
            CelestialBody::Ketu => "Ketu",
        }
    }

    pub fn sanskrit_name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Surya",
            CelestialBody::Moon => "Chandra",
            CelestialBody::Mars => "Mangal",
            CelestialBody::Mercury => "Budh",
            CelestialBody::Jupiter => "Guru",
            CelestialBody::Venus => "Shukra",
            CelestialBody::Saturn => "Shani",
            CelestialBody::Rahu => "Rahu",
            CelestialBody::Ketu => "Ketu",
        }
    }

    /// Rahu and Ketu, the lunar nodes
    pub fn is_node(&self) -> bool {
        matches!(self, CelestialBody::Rahu | CelestialBody::Ketu)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => CelestialBody::Sun,
            "moon" | "chandra" => CelestialBody::Moon,
            "mars" | "mangal" => CelestialBody::Mars,
            "mercury" | "budh" => CelestialBody::Mercury,
            "jupiter" | "guru" => CelestialBody::Jupiter,
            "venus" | "shukra" => CelestialBody::Venus,
            "saturn" | "shani" => CelestialBody::Saturn,
            "rahu" | "north_node" => CelestialBody::Rahu,
            "ketu" | "south_node" => CelestialBody::Ketu,
            _ => return Err(EngineError::InvalidBody(s.to_string())),
        };
        Ok(body)
    }
}

/// The twelve sidereal signs (raashi), numbered 1..=12 from Mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Mesh,
    Vrishabh,
    Mithun,
    Kark,
    Simha,
    Kanya,
    Tula,
    Vrishchik,
    Dhanu,
    Makar,
    Kumbh,
    Meen,
}

// (slug, english name, lord)
const SIGN_TABLE: &[(&str, &str, CelestialBody)] = &[
    ("mesh", "Aries", CelestialBody::Mars),
    ("vrishabh", "Taurus", CelestialBody::Venus),
    ("mithun", "Gemini", CelestialBody::Mercury),
    ("kark", "Cancer", CelestialBody::Moon),
    ("simha", "Leo", CelestialBody::Sun),
    ("kanya", "Virgo", CelestialBody::Mercury),
    ("tula", "Libra", CelestialBody::Venus),
    ("vrishchik", "Scorpio", CelestialBody::Mars),
    ("dhanu", "Sagittarius", CelestialBody::Jupiter),
    ("makar", "Capricorn", CelestialBody::Saturn),
    ("kumbh", "Aquarius", CelestialBody::Saturn),
    ("meen", "Pisces", CelestialBody::Jupiter),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Mesh,
        Sign::Vrishabh,
        Sign::Mithun,
        Sign::Kark,
        Sign::Simha,
        Sign::Kanya,
        Sign::Tula,
        Sign::Vrishchik,
        Sign::Dhanu,
        Sign::Makar,
        Sign::Kumbh,
        Sign::Meen,
    ];

    /// Zero-based index (Mesh = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-based sign number (Mesh = 1)
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Sign> {
        match number {
            1..=12 => Some(Sign::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Sign containing a sidereal longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        let index = (normalize_degrees(longitude) / 30.0) as usize;
        Sign::ALL[index.min(11)]
    }

    pub fn as_str(&self) -> &'static str {
        SIGN_TABLE[self.index()].0
    }

    pub fn english_name(&self) -> &'static str {
        SIGN_TABLE[self.index()].1
    }

    pub fn lord(&self) -> CelestialBody {
        SIGN_TABLE[self.index()].2
    }

    /// Sign reached after moving `steps` signs forward.
    pub fn offset(&self, steps: usize) -> Sign {
        Sign::ALL[(self.index() + steps) % 12]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let sign = match key.as_str() {
            "mesh" | "mesha" | "aries" => Sign::Mesh,
            "vrishabh" | "vrishabha" | "taurus" => Sign::Vrishabh,
            "mithun" | "mithuna" | "gemini" => Sign::Mithun,
            "kark" | "karka" | "cancer" => Sign::Kark,
            "simha" | "leo" => Sign::Simha,
            "kanya" | "virgo" => Sign::Kanya,
            "tula" | "libra" => Sign::Tula,
            "vrishchik" | "vrishchika" | "scorpio" => Sign::Vrishchik,
            "dhanu" | "dhanus" | "sagittarius" => Sign::Dhanu,
            "makar" | "makara" | "capricorn" => Sign::Makar,
            "kumbh" | "kumbha" | "aquarius" => Sign::Kumbh,
            "meen" | "meena" | "pisces" => Sign::Meen,
            _ => {
                return Err(EngineError::InvalidSign {
                    input: s.to_string(),
                    valid: SIGN_TABLE.iter().map(|(slug, _, _)| slug.to_string()).collect(),
                })
            }
        };
        Ok(sign)
    }
}
