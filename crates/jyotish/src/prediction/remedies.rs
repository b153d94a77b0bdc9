//! Per-body remedies and transit cautions.

use crate::aspects::types::{TransitEffect, TransitRecord};
use crate::dignity::dignities::{DignityType, InfluenceReport};
use crate::vedic::types::CelestialBody;
use serde::{Deserialize, Serialize};

/// Traditional propitiation for one body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemedyBundle {
    pub mantra: &'static str,
    pub gemstone: &'static str,
    pub donation: &'static str,
    pub ritual: &'static str,
}

pub fn remedy_bundle(body: CelestialBody) -> RemedyBundle {
    match body {
        CelestialBody::Sun => RemedyBundle {
            mantra: "Om Ghrini Suryaya Namah",
            gemstone: "Ruby",
            donation: "Wheat and jaggery on Sunday",
            ritual: "Offer water to the rising Sun on Sunday",
        },
        CelestialBody::Moon => RemedyBundle {
            mantra: "Om Som Somaya Namah",
            gemstone: "Pearl",
            donation: "Rice and milk on Monday",
            ritual: "Offer milk to Shiva on Monday",
        },
        CelestialBody::Mars => RemedyBundle {
            mantra: "Om Ang Angarakaya Namah",
            gemstone: "Red Coral",
            donation: "Red lentils on Tuesday",
            ritual: "Recite the Hanuman Chalisa on Tuesday",
        },
        CelestialBody::Mercury => RemedyBundle {
            mantra: "Om Bum Budhaya Namah",
            gemstone: "Emerald",
            donation: "Green moong dal on Wednesday",
            ritual: "Worship Ganesha on Wednesday",
        },
        CelestialBody::Jupiter => RemedyBundle {
            mantra: "Om Brim Brihaspataye Namah",
            gemstone: "Yellow Sapphire",
            donation: "Turmeric and chana dal on Thursday",
            ritual: "Seek the blessings of elders and teachers on Thursday",
        },
        CelestialBody::Venus => RemedyBundle {
            mantra: "Om Shum Shukraya Namah",
            gemstone: "Diamond",
            donation: "White sweets and curd on Friday",
            ritual: "Worship Lakshmi on Friday",
        },
        CelestialBody::Saturn => RemedyBundle {
            mantra: "Om Sham Shanicharaya Namah",
            gemstone: "Blue Sapphire",
            donation: "Black sesame and mustard oil on Saturday",
            ritual: "Light a mustard-oil lamp under a peepal tree on Saturday",
        },
        CelestialBody::Rahu => RemedyBundle {
            mantra: "Om Ram Rahave Namah",
            gemstone: "Hessonite",
            donation: "Black urad and a blanket on Saturday",
            ritual: "Worship Durga on Saturday",
        },
        CelestialBody::Ketu => RemedyBundle {
            mantra: "Om Kem Ketave Namah",
            gemstone: "Cat's Eye",
            donation: "A multicoloured blanket on Tuesday",
            ritual: "Feed stray dogs and worship Ganesha on Tuesday",
        },
    }
}

/// Caution attached to a challenging transit of `body`.
pub fn transit_warning(body: CelestialBody) -> &'static str {
    match body {
        CelestialBody::Sun => "Be humble in dealings with authorities.",
        CelestialBody::Moon => "Avoid making decisions on emotional impulse.",
        CelestialBody::Mars => "Control anger and take care to avoid accidents.",
        CelestialBody::Mercury => "Beware of misinformation and double-check agreements.",
        CelestialBody::Jupiter => "Avoid overconfidence in financial matters.",
        CelestialBody::Venus => "Be patient in relationships.",
        CelestialBody::Saturn => "Patience and hard work will carry you through delays.",
        CelestialBody::Rahu => "Beware of deception and shortcuts.",
        CelestialBody::Ketu => "Focus on spiritual practice over material pursuits.",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remedies {
    pub mantra: Option<String>,
    pub gemstone: Option<String>,
    pub donation: Option<String>,
    pub general_actions: Vec<String>,
}

impl Remedies {
    pub fn is_empty(&self) -> bool {
        self.mantra.is_none() && self.general_actions.is_empty()
    }
}

/// Remedies for a weak sign lord or challenging malefic transits.
///
/// The weak lord takes the primary slots; otherwise the first challenging
/// malefic does. Every qualifying body contributes its weekday ritual.
pub fn select_remedies(influence: &InfluenceReport, transits: &[TransitRecord]) -> Remedies {
    let mut qualifying: Vec<CelestialBody> = Vec::new();
    if influence.lord_strength == DignityType::Weak {
        qualifying.push(influence.lord);
    }
    for record in transits {
        if record.effect == TransitEffect::Challenging
            && influence.is_malefic(record.body)
            && !qualifying.contains(&record.body)
        {
            qualifying.push(record.body);
        }
    }

    let primary = match qualifying.first() {
        Some(body) => remedy_bundle(*body),
        None => return Remedies::default(),
    };

    Remedies {
        mantra: Some(primary.mantra.to_string()),
        gemstone: Some(primary.gemstone.to_string()),
        donation: Some(primary.donation.to_string()),
        general_actions: qualifying
            .iter()
            .map(|body| remedy_bundle(*body).ritual.to_string())
            .collect(),
    }
}
