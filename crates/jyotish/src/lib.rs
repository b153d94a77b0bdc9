
pub mod angles;
pub mod config;
pub mod error;

pub mod ephemeris;
pub mod aspects;

pub mod vedic;
pub mod dignity;
pub mod prediction;

pub mod horoscope;

pub use config::{DashaAnchor, EngineConfig, RetrogradeRule};
pub use error::{EngineError, EngineResult};
pub use ephemeris::{BirthDetails, ChartAccuracy, ChartProvider, GeoLocation, NatalChart, Position};
pub use horoscope::{
    ChartStore, Geocoder, Horoscope, HoroscopeComparison, HoroscopeEngine, HoroscopeMode,
    MissingChart, WeeklyHoroscope,
};
pub use vedic::{CelestialBody, Sign};
