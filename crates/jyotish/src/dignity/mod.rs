pub mod dignities;
pub mod profiles;

pub use dignities::{analyze_sign, dignity_of, BodyInfluence, DignityType, InfluenceReport};
pub use profiles::{lord_deity, sign_profile, Element, Modality, SignProfile};
