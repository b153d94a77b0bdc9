use chrono::Duration;
use jyotish::ephemeris::parse_date;
use jyotish::vedic::{active_periods, current_dasha, current_dasha_from, vimshottari_timeline, DashaLevel};
use jyotish::{CelestialBody, EngineError};

#[test]
fn test_ketu_mahadasha_ends_after_seven_years() {
    let birth = parse_date(Some("1990-05-15T05:00:00Z")).unwrap();

    let last_ketu = current_dasha(birth, birth + Duration::days(2554)).unwrap();
    assert_eq!(last_ketu.mahadasha_body, CelestialBody::Ketu);
    assert_eq!(last_ketu.antardasha_body, CelestialBody::Mars);

    let first_venus = current_dasha(birth, birth + Duration::days(2555)).unwrap();
    assert_eq!(first_venus.mahadasha_body, CelestialBody::Venus);
    assert_eq!(first_venus.antardasha_body, CelestialBody::Venus);
    assert_eq!(first_venus.mahadasha_length_years, 20);
}

#[test]
fn test_birth_day_starts_first_lord() {
    let birth = parse_date(Some("1990-05-15")).unwrap();
    let period = current_dasha_from(CelestialBody::Moon, birth, birth).unwrap();
    assert_eq!(period.mahadasha_body, CelestialBody::Moon);
    assert_eq!(period.antardasha_index, 0);
    assert_eq!(period.start_offset_days, 0);
    assert_eq!(period.end_offset_days, 10 * 365);
}

#[test]
fn test_date_before_birth_rejected() {
    let birth = parse_date(Some("1990-05-15")).unwrap();
    let before = parse_date(Some("1990-05-14")).unwrap();
    assert!(matches!(
        current_dasha(birth, before),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_periods_tile_the_cycle() {
    let birth = parse_date(Some("1990-05-15")).unwrap();
    let mut day = 0;
    let mut lords = Vec::new();
    while day < 43_800 {
        let period = current_dasha(birth, birth + Duration::days(day)).unwrap();
        assert_eq!(period.start_offset_days, day);
        assert!(period.end_offset_days > day);
        lords.push(period.mahadasha_body);
        day = period.end_offset_days;
    }
    assert_eq!(day, 43_800);
    assert_eq!(
        lords,
        vec![
            CelestialBody::Ketu,
            CelestialBody::Venus,
            CelestialBody::Sun,
            CelestialBody::Moon,
            CelestialBody::Mars,
            CelestialBody::Rahu,
            CelestialBody::Jupiter,
            CelestialBody::Saturn,
            CelestialBody::Mercury,
        ]
    );
}

#[test]
fn test_timeline_starts_from_moon_nakshatra_lord() {
    let birth = parse_date(Some("1990-05-15")).unwrap();
    // 1 degree into Ashwini, ruled by Ketu
    let timeline = vimshottari_timeline(birth, 1.0, DashaLevel::Antardasha);
    assert_eq!(timeline.len(), 9);
    assert_eq!(timeline[0].body, CelestialBody::Ketu);
    assert_eq!(timeline[0].start, birth);
    assert!(timeline[0].duration_days < 7.0 * 365.25);
    for pair in timeline.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for period in &timeline {
        assert_eq!(period.children.len(), 9);
        assert_eq!(period.children[0].body, period.body);
    }

    let chain = active_periods(&timeline, birth + Duration::days(1));
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].level, DashaLevel::Mahadasha);
    assert_eq!(chain[1].level, DashaLevel::Antardasha);
}
