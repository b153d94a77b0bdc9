pub mod adapter;
pub mod chart;
pub mod mean_motion;
pub mod time;
pub mod types;

pub use adapter::{ChartProvider, EphemerisError, ProviderChart, ProviderPlacement};
#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use chart::{build_natal_chart, tropical_ascendant};
pub use mean_motion::MeanMotionEphemeris;
pub use time::{days_since_epoch, julian_day, parse_date};
pub use types::{BirthDetails, ChartAccuracy, GeoLocation, NatalChart, Position};
