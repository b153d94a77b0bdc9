pub mod dashas;
pub mod nakshatra;
pub mod panchang;
pub mod types;

pub use dashas::{
    active_periods, current_dasha, current_dasha_from, vimshottari_timeline, DashaLevel,
    DashaPeriod, TimelinePeriod,
};
pub use nakshatra::{get_nakshatra_for_longitude, nakshatra, Guna, NakshatraMetadata, NakshatraRecord};
pub use panchang::{panchang, Karana, MoonPhase, Paksha, PanchangSnapshot, Tithi, TimeWindow, Yoga};
pub use types::{CelestialBody, Sign};
