pub mod calculator;
pub mod transits;
pub mod types;

pub use calculator::AspectCalculator;
pub use transits::{classify_house, compute_transits, house_from, major_transits, significance};
pub use types::{
    AspectKind, AspectRecord, AspectTone, Intensity, Significance, TransitEffect, TransitRecord,
};
