pub mod lucky;
pub mod remedies;
pub mod rules;

pub use lucky::{lucky_elements, LuckyElements};
pub use remedies::{remedy_bundle, select_remedies, transit_warning, Remedies, RemedyBundle};
pub use rules::{daily_warning, synthesize, PredictionInput, PredictionResult};
