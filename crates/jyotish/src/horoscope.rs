//! Horoscope pipeline.
//!
//! General horoscopes read the sky against a zodiac sign. Personalized ones
//! read it against a stored natal chart, adding natal aspects and the running
//! dasha.

use crate::aspects::calculator::AspectCalculator;
use crate::aspects::transits::compute_transits;
use crate::aspects::types::{AspectRecord, TransitRecord};
use crate::config::{DashaAnchor, EngineConfig};
use crate::dignity::dignities::{analyze_sign, InfluenceReport};
use crate::dignity::profiles::{sign_profile, SignProfile};
use crate::ephemeris::adapter::ChartProvider;
use crate::ephemeris::chart::build_natal_chart;
use crate::ephemeris::mean_motion::MeanMotionEphemeris;
use crate::ephemeris::time::parse_date;
use crate::ephemeris::types::{BirthDetails, ChartAccuracy, GeoLocation, NatalChart, Position};
use crate::error::EngineError;
use crate::prediction::lucky::{lucky_elements, LuckyElements};
use crate::prediction::rules::{daily_warning, synthesize, PredictionInput, PredictionResult};
use crate::vedic::dashas::{current_dasha_from, DashaPeriod};
use crate::vedic::nakshatra::nakshatra;
use crate::vedic::panchang::{panchang, PanchangSnapshot};
use crate::vedic::types::{CelestialBody, Sign};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

/// Resolves free-text places to coordinates.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<GeoLocation, EngineError>;
}

/// Persistence for natal charts and usage counters.
pub trait ChartStore {
    fn load_chart_by_user_id(&self, user_id: &str) -> Option<NatalChart>;
    /// Called once per personalized horoscope served by
    /// [`HoroscopeEngine::personalized`].
    fn increment_usage(&self, user_id: &str);
}

/// What to do when a personalized request has no stored chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingChart {
    Fail,
    /// Serve the general horoscope for this sign instead
    General(Sign),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HoroscopeMode {
    General,
    Personalized,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horoscope {
    pub mode: HoroscopeMode,
    pub sign: Sign,
    pub date: NaiveDate,
    pub profile: SignProfile,
    pub panchang: PanchangSnapshot,
    pub positions: Vec<Position>,
    pub influence: InfluenceReport,
    pub transits: Vec<TransitRecord>,
    pub aspects: Vec<AspectRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dasha: Option<DashaPeriod>,
    pub prediction: PredictionResult,
    pub lucky: LuckyElements,
    pub warning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_accuracy: Option<ChartAccuracy>,
}

impl Horoscope {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Seven consecutive daily horoscopes for one sign
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHoroscope {
    pub sign: Sign,
    pub sign_name: &'static str,
    pub week_starting: NaiveDate,
    pub days: Vec<Horoscope>,
}

impl WeeklyHoroscope {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

const PERSONALIZED_RECOMMENDATION: &str =
    "The personalized reading is the more precise one: it follows your exact birth details.";
const CREATE_CHART_RECOMMENDATION: &str = "Create your birth chart for a more precise reading.";

/// General and personalized readings for the same day, side by side
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeComparison {
    pub general: Horoscope,
    /// `None` when the user has no natal chart
    pub personalized: Option<Horoscope>,
    pub recommendation: String,
}

impl HoroscopeComparison {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stateless horoscope engine; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct HoroscopeEngine {
    ephemeris: MeanMotionEphemeris,
    aspects: AspectCalculator,
}

impl HoroscopeEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            ephemeris: MeanMotionEphemeris::new(config),
            aspects: AspectCalculator::new(),
        })
    }

    pub fn ephemeris(&self) -> &MeanMotionEphemeris {
        &self.ephemeris
    }

    pub fn config(&self) -> &EngineConfig {
        self.ephemeris.config()
    }

    /// Panchang for a date string (`None` means now).
    pub fn panchang(&self, date: Option<&str>) -> Result<PanchangSnapshot, EngineError> {
        let date = parse_date(date)?;
        Ok(panchang(&self.ephemeris, date, None))
    }

    /// Sidereal positions of all bodies for a date string.
    pub fn positions(&self, date: Option<&str>) -> Result<Vec<Position>, EngineError> {
        Ok(self.ephemeris.positions(parse_date(date)?))
    }

    /// General horoscope for a sign name such as `"simha"` or `"leo"`.
    pub fn general(&self, raashi: &str, date: Option<&str>) -> Result<Horoscope, EngineError> {
        let sign: Sign = raashi.parse()?;
        let date = parse_date(date)?;
        Ok(self.general_for(sign, date))
    }

    pub fn general_for(&self, sign: Sign, date: DateTime<Utc>) -> Horoscope {
        log::info!("General horoscope for {} on {}", sign, date.date_naive());
        let positions = self.ephemeris.positions(date);
        let panchang = panchang(&self.ephemeris, date, None);
        self.assemble(
            HoroscopeMode::General,
            sign,
            panchang,
            positions,
            Vec::new(),
            None,
            None,
        )
    }

    /// General horoscopes for all twelve signs, Mesh first.
    pub fn all_signs(&self, date: Option<&str>) -> Result<Vec<Horoscope>, EngineError> {
        let date = parse_date(date)?;
        Ok(Sign::ALL
            .iter()
            .map(|sign| self.general_for(*sign, date))
            .collect())
    }

    /// General horoscopes for seven consecutive days starting at `start`.
    pub fn weekly(&self, raashi: &str, start: Option<&str>) -> Result<WeeklyHoroscope, EngineError> {
        let sign: Sign = raashi.parse()?;
        let start = parse_date(start)?;
        let days = (0..7)
            .map(|offset| {
                start
                    .checked_add_signed(TimeDelta::days(offset))
                    .map(|day| self.general_for(sign, day))
                    .ok_or_else(|| {
                        EngineError::InvalidInput(format!(
                            "Week starting {} runs past the calendar",
                            start.date_naive()
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WeeklyHoroscope {
            sign,
            sign_name: sign.english_name(),
            week_starting: start.date_naive(),
            days,
        })
    }

    /// General and personalized horoscopes for the same day.
    ///
    /// A user without a stored chart gets `personalized: None` and a prompt
    /// to create one. Comparisons are not counted as usage.
    pub fn compare(
        &self,
        store: &dyn ChartStore,
        user_id: &str,
        raashi: &str,
        date: Option<&str>,
    ) -> Result<HoroscopeComparison, EngineError> {
        let sign: Sign = raashi.parse()?;
        let date = parse_date(date)?;
        let chart = store.load_chart_by_user_id(user_id);
        if chart.is_none() {
            log::info!("No chart for user {}, comparison has general reading only", user_id);
        }
        self.compare_chart(chart.as_ref(), sign, date)
    }

    pub fn compare_chart(
        &self,
        chart: Option<&NatalChart>,
        sign: Sign,
        date: DateTime<Utc>,
    ) -> Result<HoroscopeComparison, EngineError> {
        let general = self.general_for(sign, date);
        let personalized = chart
            .map(|chart| self.personalized_for(chart, date))
            .transpose()?;
        let recommendation = match personalized {
            Some(_) => PERSONALIZED_RECOMMENDATION,
            None => CREATE_CHART_RECOMMENDATION,
        };

        Ok(HoroscopeComparison {
            general,
            personalized,
            recommendation: recommendation.to_string(),
        })
    }

    /// Personalized horoscope from the user's stored chart.
    ///
    /// Usage is only counted when a personalized horoscope is produced.
    pub fn personalized(
        &self,
        store: &dyn ChartStore,
        user_id: &str,
        date: Option<&str>,
        missing: MissingChart,
    ) -> Result<Horoscope, EngineError> {
        let date = parse_date(date)?;
        let chart = match store.load_chart_by_user_id(user_id) {
            Some(chart) => chart,
            None => {
                return match missing {
                    MissingChart::General(sign) => {
                        log::info!("No chart for user {}, serving general {}", user_id, sign);
                        Ok(self.general_for(sign, date))
                    }
                    MissingChart::Fail => Err(EngineError::ChartNotFound {
                        user_id: user_id.to_string(),
                    }),
                };
            }
        };

        let horoscope = self.personalized_for(&chart, date)?;
        store.increment_usage(user_id);
        Ok(horoscope)
    }

    /// Personalized horoscope for an in-memory chart.
    pub fn personalized_for(
        &self,
        chart: &NatalChart,
        date: DateTime<Utc>,
    ) -> Result<Horoscope, EngineError> {
        let first_lord = match self.config().dasha_anchor {
            DashaAnchor::Ketu => CelestialBody::Ketu,
            DashaAnchor::MoonNakshatra => nakshatra(chart.moon_nakshatra).lord,
        };
        let dasha = current_dasha_from(first_lord, chart.birth_instant()?, date)?;

        log::info!(
            "Personalized horoscope for ascendant {} on {} ({} / {})",
            chart.ascendant_sign,
            date.date_naive(),
            dasha.mahadasha_body,
            dasha.antardasha_body
        );

        let positions = self.ephemeris.positions(date);
        let aspects = self
            .aspects
            .compute_transit_aspects(&positions, &chart.positions_vec());
        let panchang = panchang(&self.ephemeris, date, Some(chart.birth.location.lat));

        Ok(self.assemble(
            HoroscopeMode::Personalized,
            chart.ascendant_sign,
            panchang,
            positions,
            aspects,
            Some(dasha),
            Some(chart.accuracy),
        ))
    }

    /// Build a natal chart, using `provider` when one is available.
    pub fn natal_chart(
        &self,
        birth: &BirthDetails,
        provider: Option<&dyn ChartProvider>,
    ) -> Result<NatalChart, EngineError> {
        build_natal_chart(birth, &self.ephemeris, provider)
    }

    /// Build a natal chart for a birth place given as text.
    pub fn natal_chart_for_place(
        &self,
        geocoder: &dyn Geocoder,
        place: &str,
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_hours: f64,
        provider: Option<&dyn ChartProvider>,
    ) -> Result<NatalChart, EngineError> {
        let location = geocoder.resolve(place)?;
        let birth = BirthDetails {
            date,
            time,
            location,
            utc_offset_hours,
        };
        self.natal_chart(&birth, provider)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        mode: HoroscopeMode,
        sign: Sign,
        panchang: PanchangSnapshot,
        positions: Vec<Position>,
        aspects: Vec<AspectRecord>,
        dasha: Option<DashaPeriod>,
        chart_accuracy: Option<ChartAccuracy>,
    ) -> Horoscope {
        let influence = analyze_sign(sign, &positions);
        let transits = compute_transits(sign, &positions);
        let prediction = synthesize(&PredictionInput {
            panchang: &panchang,
            influence: &influence,
            transits: &transits,
            aspects: &aspects,
            dasha: dasha.as_ref(),
        });
        let profile = sign_profile(sign).clone();
        let lucky = lucky_elements(&profile, panchang.weekday_index, &influence);
        let warning = daily_warning(&panchang, &transits);

        Horoscope {
            mode,
            sign,
            date: panchang.date,
            profile,
            panchang,
            positions,
            influence,
            transits,
            aspects,
            dasha,
            prediction,
            lucky,
            warning,
            chart_accuracy,
        }
    }
}
