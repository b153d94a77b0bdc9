//! Vimshottari dasha calculations.
//!
//! Two readings are offered. [`current_dasha`] walks a fixed 120-year cycle from
//! birth in whole days and splits each Mahadasha into flat 30-day Antardasha
//! buckets. [`vimshottari_timeline`] builds the classical proportional timeline
//! anchored on the Moon's nakshatra.

use crate::error::EngineError;
use crate::vedic::nakshatra::get_nakshatra_for_longitude;
use crate::vedic::types::CelestialBody;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
/// Year length used by the day-count cycle
pub const CYCLE_YEAR_DAYS: i64 = 365;
pub const CYCLE_DAYS: i64 = 120 * CYCLE_YEAR_DAYS;
pub const ANTARDASHA_BUCKET_DAYS: i64 = 30;
/// Year length used by the proportional timeline
pub const TIMELINE_YEAR_DAYS: f64 = 365.25;

const VIMSHOTTARI_SEQUENCE: &[(CelestialBody, u32)] = &[
    (CelestialBody::Ketu, 7),
    (CelestialBody::Venus, 20),
    (CelestialBody::Sun, 6),
    (CelestialBody::Moon, 10),
    (CelestialBody::Mars, 7),
    (CelestialBody::Rahu, 18),
    (CelestialBody::Jupiter, 16),
    (CelestialBody::Saturn, 19),
    (CelestialBody::Mercury, 17),
];

fn sequence_index(body: CelestialBody) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(b, _)| *b == body)
        .unwrap_or(0)
}

/// Mahadasha/Antardasha active on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub mahadasha_body: CelestialBody,
    pub mahadasha_length_years: u32,
    pub antardasha_body: CelestialBody,
    /// Zero-based 30-day bucket within the Mahadasha
    pub antardasha_index: u32,
    /// Mahadasha start, in days since birth
    pub start_offset_days: i64,
    /// Mahadasha end (exclusive), in days since birth
    pub end_offset_days: i64,
    /// Completed 120-year cycles since birth
    pub cycle: u32,
}

/// Current dasha for a birth instant, starting the cycle at Ketu.
pub fn current_dasha(birth: DateTime<Utc>, as_of: DateTime<Utc>) -> Result<DashaPeriod, EngineError> {
    current_dasha_from(CelestialBody::Ketu, birth, as_of)
}

/// Current dasha with the cycle starting at `first_lord` on the birth day.
pub fn current_dasha_from(
    first_lord: CelestialBody,
    birth: DateTime<Utc>,
    as_of: DateTime<Utc>,
) -> Result<DashaPeriod, EngineError> {
    if as_of < birth {
        return Err(EngineError::InvalidInput(format!(
            "Dasha requested for {} which precedes birth at {}",
            as_of, birth
        )));
    }
    let age_in_days = (as_of - birth).num_days();
    Ok(dasha_for_age(first_lord, age_in_days))
}

/// Dasha for a non-negative age in whole days.
pub fn dasha_for_age(first_lord: CelestialBody, age_in_days: i64) -> DashaPeriod {
    let age_in_days = age_in_days.max(0);
    let cycle = age_in_days / CYCLE_DAYS;
    let cycle_position = age_in_days % CYCLE_DAYS;
    let first = sequence_index(first_lord);
    let len = VIMSHOTTARI_SEQUENCE.len();

    let mut segment_start = 0;
    let mut maha_index = first;
    for offset in 0..len {
        maha_index = (first + offset) % len;
        let segment_len = VIMSHOTTARI_SEQUENCE[maha_index].1 as i64 * CYCLE_YEAR_DAYS;
        if cycle_position < segment_start + segment_len {
            break;
        }
        segment_start += segment_len;
    }

    let (mahadasha_body, years) = VIMSHOTTARI_SEQUENCE[maha_index];
    let antardasha_index = ((cycle_position - segment_start) / ANTARDASHA_BUCKET_DAYS) as u32;
    let antardasha_body = VIMSHOTTARI_SEQUENCE[(maha_index + antardasha_index as usize) % len].0;
    let cycle_start = cycle * CYCLE_DAYS;

    DashaPeriod {
        mahadasha_body,
        mahadasha_length_years: years,
        antardasha_body,
        antardasha_index,
        start_offset_days: cycle_start + segment_start,
        end_offset_days: cycle_start + segment_start + years as i64 * CYCLE_YEAR_DAYS,
        cycle: cycle as u32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

const DEPTH_LEVELS: &[DashaLevel] = &[
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
];

/// One node of the proportional timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePeriod {
    pub body: CelestialBody,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: f64,
    pub level: DashaLevel,
    pub children: Vec<TimelinePeriod>,
}

/// Proportional Vimshottari timeline from the Moon's sidereal longitude.
///
/// The first Mahadasha belongs to the Moon's nakshatra lord and is shortened by
/// the part of the nakshatra the Moon has already traversed.
pub fn vimshottari_timeline(
    birth: DateTime<Utc>,
    moon_longitude: f64,
    depth: DashaLevel,
) -> Vec<TimelinePeriod> {
    let moon_meta = get_nakshatra_for_longitude(moon_longitude);
    let start_index = sequence_index(moon_meta.base.lord);
    let target_depth_index = DEPTH_LEVELS.iter().position(|&d| d == depth).unwrap_or(0);

    let mut current_start = birth;
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let seq_index = (start_index + offset) % VIMSHOTTARI_SEQUENCE.len();
        let years = VIMSHOTTARI_SEQUENCE[seq_index].1 as f64;
        let effective_years = if offset == 0 {
            years * (1.0 - moon_meta.progress)
        } else {
            years
        };
        let period = build_period(seq_index, current_start, effective_years, 0, target_depth_index);
        current_start = period.end;
        periods.push(period);
    }
    periods
}

fn build_period(
    seq_index: usize,
    start: DateTime<Utc>,
    duration_years: f64,
    level_index: usize,
    target_depth_index: usize,
) -> TimelinePeriod {
    let duration_days = duration_years * TIMELINE_YEAR_DAYS;
    let end = start + Duration::milliseconds((duration_days * 86_400_000.0).round() as i64);

    let mut period = TimelinePeriod {
        body: VIMSHOTTARI_SEQUENCE[seq_index].0,
        start,
        end,
        duration_days,
        level: DEPTH_LEVELS[level_index.min(DEPTH_LEVELS.len() - 1)],
        children: Vec::new(),
    };
    if level_index >= target_depth_index {
        return period;
    }

    let mut child_start = start;
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let child_index = (seq_index + offset) % VIMSHOTTARI_SEQUENCE.len();
        let child_years =
            duration_years * (VIMSHOTTARI_SEQUENCE[child_index].1 as f64 / VIMSHOTTARI_TOTAL_YEARS);
        let child = build_period(child_index, child_start, child_years, level_index + 1, target_depth_index);
        child_start = child.end;
        period.children.push(child);
    }
    period
}

/// Chain of periods (Mahadasha first) containing `as_of`.
pub fn active_periods(timeline: &[TimelinePeriod], as_of: DateTime<Utc>) -> Vec<&TimelinePeriod> {
    let mut chain = Vec::new();
    let mut level = timeline;
    while let Some(period) = level.iter().find(|p| p.start <= as_of && as_of < p.end) {
        chain.push(period);
        level = &period.children;
    }
    chain
}
