//! Daily Panchang: the five limbs of the Hindu calendar plus the
//! inauspicious day segments and approximate solar times.

use crate::ephemeris::mean_motion::MeanMotionEphemeris;
use crate::vedic::nakshatra::{is_auspicious_nakshatra, nakshatra, Guna, NakshatraRecord};
use crate::vedic::types::CelestialBody;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TITHI_COUNT: u8 = 30;
pub const YOGA_COUNT: usize = 27;
pub const KARANA_COUNT: usize = 11;

/// Lunar fortnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Waxing (bright) half
    Shukla,
    /// Waning (dark) half
    Krishna,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonPhase {
    WaxingCrescent,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    WaningCrescent,
    NewMoon,
}

impl MoonPhase {
    /// Phase label for a tithi. Purnima closes the waxing half, Amavasya the waning one.
    pub fn from_tithi(tithi: u8) -> MoonPhase {
        match tithi {
            1..=7 => MoonPhase::WaxingCrescent,
            8..=14 => MoonPhase::WaxingGibbous,
            15 => MoonPhase::FullMoon,
            16..=22 => MoonPhase::WaningGibbous,
            23..=29 => MoonPhase::WaningCrescent,
            _ => MoonPhase::NewMoon,
        }
    }

    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::WaxingGibbous | MoonPhase::FullMoon
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::WaningCrescent => "Waning Crescent",
            MoonPhase::NewMoon => "New Moon",
        }
    }
}

const TITHI_NAMES: &[&str] = &[
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tithi {
    /// 1-30; 1-15 Shukla, 16-30 Krishna
    pub index: u8,
    pub paksha: Paksha,
    pub name: String,
}

impl Tithi {
    pub fn from_index(index: u8) -> Tithi {
        let index = index.clamp(1, TITHI_COUNT);
        let paksha = if index <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        };
        let name = match index {
            15 => "Purnima",
            30 => "Amavasya",
            _ => TITHI_NAMES[((index - 1) % 15) as usize],
        };
        Tithi {
            index,
            paksha,
            name: name.to_string(),
        }
    }
}

const YOGA_NAMES: &[&str] = &[
    "Vishkumbha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda", "Sukarma",
    "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra",
    "Siddhi", "Vyatipata", "Variyan", "Parigha", "Shiva", "Siddha", "Sadhya", "Shubha",
    "Shukla", "Brahma", "Indra", "Vaidhriti",
];

const AUSPICIOUS_YOGAS: &[usize] = &[1, 2, 3, 4, 6, 7, 11, 13, 15, 20, 21, 22, 23, 24];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yoga {
    /// 0-26
    pub index: usize,
    pub name: String,
    pub auspicious: bool,
}

impl Yoga {
    pub fn from_index(index: usize) -> Yoga {
        let index = index % YOGA_COUNT;
        Yoga {
            index,
            name: YOGA_NAMES[index].to_string(),
            auspicious: AUSPICIOUS_YOGAS.contains(&index),
        }
    }
}

const KARANA_NAMES: &[&str] = &[
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti", "Shakuni",
    "Chatushpada", "Naga", "Kimstughna",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KaranaKind {
    /// Chara
    Movable,
    /// Sthira
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Karana {
    /// 0-10
    pub index: usize,
    pub name: String,
    pub kind: KaranaKind,
}

impl Karana {
    pub fn from_index(index: usize) -> Karana {
        let index = index % KARANA_COUNT;
        Karana {
            index,
            name: KARANA_NAMES[index].to_string(),
            kind: if index < 7 {
                KaranaKind::Movable
            } else {
                KaranaKind::Fixed
            },
        }
    }
}

/// Clock-time window within a civil day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn from_minutes(start: u32, end: u32) -> TimeWindow {
        TimeWindow {
            start: minutes_to_time(start),
            end: minutes_to_time(end),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

fn minutes_to_time(minutes: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt((minutes % 1440) * 60, 0).unwrap_or_default()
}

fn hours_to_time(hours: f64) -> NaiveTime {
    let seconds = (hours.rem_euclid(24.0) * 3600.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds.min(86_399), 0).unwrap_or_default()
}

// Start/end in minutes from midnight, indexed Sunday..Saturday
const RAHU_KAAL: [(u32, u32); 7] = [
    (990, 1080),
    (450, 540),
    (900, 990),
    (720, 810),
    (810, 900),
    (630, 720),
    (540, 630),
];

const YAMA_GANDA: [(u32, u32); 7] = [
    (720, 810),
    (630, 720),
    (540, 630),
    (450, 540),
    (360, 450),
    (900, 990),
    (810, 900),
];

const GULIKA: [(u32, u32); 7] = [
    (900, 990),
    (810, 900),
    (720, 810),
    (630, 720),
    (540, 630),
    (450, 540),
    (360, 450),
];

const MUHURAT_WINDOW: (u32, u32) = (630, 720);

const WEEKDAY_NAMES: &[&str] = &[
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

fn window_for(table: &[(u32, u32); 7], weekday_index: u8) -> TimeWindow {
    let (start, end) = table[weekday_index as usize % 7];
    TimeWindow::from_minutes(start, end)
}

pub fn rahu_kaal(weekday_index: u8) -> TimeWindow {
    window_for(&RAHU_KAAL, weekday_index)
}

pub fn yama_ganda(weekday_index: u8) -> TimeWindow {
    window_for(&YAMA_GANDA, weekday_index)
}

pub fn gulika(weekday_index: u8) -> TimeWindow {
    window_for(&GULIKA, weekday_index)
}

/// Auspicious muhurat for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Muhurat {
    pub available: bool,
    pub window: Option<TimeWindow>,
}

/// Sunrise and sunset in local solar hours from the day-of-year declination model.
pub fn sunrise_sunset_hours(day_of_year: u32, latitude: f64) -> (f64, f64) {
    let declination = 23.45 * (360.0 * (284.0 + day_of_year as f64) / 365.0).to_radians().sin();
    // polar day and night saturate instead of producing NaN
    let cos_hour_angle =
        (-latitude.to_radians().tan() * declination.to_radians().tan()).clamp(-1.0, 1.0);
    let hour_angle = cos_hour_angle.acos().to_degrees();
    (12.0 - hour_angle / 15.0, 12.0 + hour_angle / 15.0)
}

/// Fraction (0-1) of the synodic month elapsed since the reference new moon.
pub fn moon_phase_fraction(ephemeris: &MeanMotionEphemeris, date: DateTime<Utc>) -> f64 {
    let config = ephemeris.config();
    let elapsed_days = (date - config.reference_new_moon).num_milliseconds() as f64 / 86_400_000.0;
    elapsed_days.rem_euclid(config.synodic_month_days) / config.synodic_month_days
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangSnapshot {
    pub date: NaiveDate,
    /// 0 = Sunday
    pub weekday_index: u8,
    pub weekday: String,
    pub tithi: Tithi,
    pub nakshatra: NakshatraRecord,
    pub yoga: Yoga,
    pub karana: Karana,
    pub rahu_kaal: TimeWindow,
    pub yama_ganda: TimeWindow,
    pub gulika: TimeWindow,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    pub moonrise: NaiveTime,
    pub moon_phase: MoonPhase,
    pub moon_phase_fraction: f64,
    pub muhurat: Muhurat,
}

/// Compute the Panchang for a date.
///
/// `latitude` overrides the configured reference latitude for sunrise and sunset.
pub fn panchang(
    ephemeris: &MeanMotionEphemeris,
    date: DateTime<Utc>,
    latitude: Option<f64>,
) -> PanchangSnapshot {
    let fraction = moon_phase_fraction(ephemeris, date);
    let tithi_index = ((fraction * TITHI_COUNT as f64) as u8 + 1).min(TITHI_COUNT);
    let tithi = Tithi::from_index(tithi_index);

    let moon = ephemeris.position(CelestialBody::Moon, date);
    let nakshatra_record = nakshatra(moon.nakshatra_index).clone();
    let yoga = Yoga::from_index((tithi_index as usize + moon.nakshatra_index) % YOGA_COUNT);
    let karana = Karana::from_index((tithi_index as usize / 2) % KARANA_COUNT);

    let weekday_index = date.weekday().num_days_from_sunday() as u8;
    let latitude = latitude.unwrap_or(ephemeris.config().reference_latitude);
    let (sunrise, sunset) = sunrise_sunset_hours(date.ordinal(), latitude);

    let muhurat_open = nakshatra_record.guna == Guna::Rajas
        && yoga.auspicious
        && karana.kind == KaranaKind::Movable;
    let muhurat = Muhurat {
        available: muhurat_open,
        window: muhurat_open.then(|| TimeWindow::from_minutes(MUHURAT_WINDOW.0, MUHURAT_WINDOW.1)),
    };

    log::debug!(
        "Panchang {}: tithi {} nakshatra {} yoga {} karana {}",
        date.date_naive(),
        tithi.index,
        nakshatra_record.name,
        yoga.name,
        karana.name
    );

    PanchangSnapshot {
        date: date.date_naive(),
        weekday_index,
        weekday: WEEKDAY_NAMES[weekday_index as usize].to_string(),
        moon_phase: MoonPhase::from_tithi(tithi.index),
        tithi,
        nakshatra: nakshatra_record,
        yoga,
        karana,
        rahu_kaal: rahu_kaal(weekday_index),
        yama_ganda: yama_ganda(weekday_index),
        gulika: gulika(weekday_index),
        sunrise: hours_to_time(sunrise),
        sunset: hours_to_time(sunset),
        moonrise: hours_to_time(6.0 + fraction * 24.0),
        moon_phase_fraction: fraction,
        muhurat,
    }
}

impl PanchangSnapshot {
    pub fn is_auspicious_nakshatra(&self) -> bool {
        is_auspicious_nakshatra(self.nakshatra.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::parse_date;

    #[test]
    fn test_tithi_paksha_boundaries() {
        assert_eq!(Tithi::from_index(15).paksha, Paksha::Shukla);
        assert_eq!(Tithi::from_index(15).name, "Purnima");
        assert_eq!(Tithi::from_index(16).paksha, Paksha::Krishna);
        assert_eq!(Tithi::from_index(16).name, "Pratipada");
        assert_eq!(Tithi::from_index(30).name, "Amavasya");
    }

    #[test]
    fn test_phase_agrees_with_paksha() {
        for index in 1..=TITHI_COUNT {
            let tithi = Tithi::from_index(index);
            let phase = MoonPhase::from_tithi(index);
            assert_eq!(phase.is_waxing(), tithi.paksha == Paksha::Shukla, "tithi {}", index);
        }
    }

    #[test]
    fn test_rahu_kaal_table() {
        assert_eq!(rahu_kaal(0).to_string(), "16:30-18:00");
        assert_eq!(rahu_kaal(1).to_string(), "07:30-09:00");
        assert_eq!(rahu_kaal(6).to_string(), "09:00-10:30");
        assert_eq!(yama_ganda(4).to_string(), "06:00-07:30");
        assert_eq!(gulika(6).to_string(), "06:00-07:30");
    }

    #[test]
    fn test_sunrise_before_sunset() {
        for doy in [1, 80, 172, 266, 355] {
            let (rise, set) = sunrise_sunset_hours(doy, 28.6);
            assert!(rise < 12.0 && set > 12.0);
            assert!((rise + set - 24.0).abs() < 1e-9);
        }
        // midsummer inside the arctic circle: sun never sets
        let (rise, set) = sunrise_sunset_hours(172, 80.0);
        assert!(rise.abs() < 1e-9);
        assert!((set - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_panchang_for_known_saturday() {
        let ephemeris = MeanMotionEphemeris::default();
        let date = parse_date(Some("2024-08-31")).unwrap();
        let snapshot = panchang(&ephemeris, date, None);
        assert_eq!(snapshot.weekday_index, 6);
        assert_eq!(snapshot.weekday, "Saturday");
        assert_eq!(snapshot.rahu_kaal.to_string(), "09:00-10:30");
        assert_eq!(snapshot.tithi.index, 27);
        assert_eq!(snapshot.tithi.paksha, Paksha::Krishna);
        assert_eq!(snapshot.moon_phase, MoonPhase::WaningCrescent);
        assert!(snapshot.yoga.index < YOGA_COUNT);
        assert!(snapshot.karana.index < KARANA_COUNT);
    }

    #[test]
    fn test_reference_new_moon_is_first_tithi() {
        let ephemeris = MeanMotionEphemeris::default();
        let date = parse_date(Some("2024-01-11")).unwrap();
        let snapshot = panchang(&ephemeris, date, None);
        assert_eq!(snapshot.tithi.index, 1);
        assert_eq!(snapshot.karana.index, 0);
        assert_eq!(snapshot.moonrise.format("%H:%M").to_string(), "06:00");
    }
}
