use chrono::{NaiveDate, NaiveTime};
use jyotish::angles::angular_separation;
use jyotish::ephemeris::{
    build_natal_chart, parse_date, BirthDetails, ChartAccuracy, GeoLocation, MeanMotionEphemeris,
};
use jyotish::{CelestialBody, EngineError, Sign};

fn sample_dates() -> Vec<&'static str> {
    vec![
        "1899-12-31",
        "1969-07-20",
        "2000-01-01",
        "2001-12-26",
        "2024-08-31",
        "2050-06-15T18:45:00Z",
    ]
}

#[test]
fn test_positions_stay_in_range() {
    let ephemeris = MeanMotionEphemeris::default();
    for date in sample_dates() {
        let dt = parse_date(Some(date)).unwrap();
        let positions = ephemeris.positions(dt);
        assert_eq!(positions.len(), 9);
        for position in positions {
            assert!((0.0..360.0).contains(&position.tropical_longitude), "{date}");
            assert!((0.0..360.0).contains(&position.sidereal_longitude), "{date}");
            assert!((0.0..30.0).contains(&position.degree_in_sign), "{date}");
            assert!(position.nakshatra_index < 27, "{date}");
            assert_eq!(position.sign, Sign::from_longitude(position.sidereal_longitude));
        }
    }
}

#[test]
fn test_nodes_are_opposite_and_retrograde() {
    let ephemeris = MeanMotionEphemeris::default();
    for date in sample_dates() {
        let dt = parse_date(Some(date)).unwrap();
        let rahu = ephemeris.position(CelestialBody::Rahu, dt);
        let ketu = ephemeris.position(CelestialBody::Ketu, dt);
        assert!((angular_separation(rahu.sidereal_longitude, ketu.sidereal_longitude) - 180.0).abs() < 1e-6);
        assert!(rahu.is_retrograde && ketu.is_retrograde);
        assert_eq!(rahu.sign.offset(6), ketu.sign);
    }
}

#[test]
fn test_luminaries_never_retrograde() {
    let ephemeris = MeanMotionEphemeris::default();
    for date in sample_dates() {
        let dt = parse_date(Some(date)).unwrap();
        assert!(!ephemeris.position(CelestialBody::Sun, dt).is_retrograde);
        assert!(!ephemeris.position(CelestialBody::Moon, dt).is_retrograde);
    }
}

#[test]
fn test_mars_retrograde_window() {
    let ephemeris = MeanMotionEphemeris::default();
    // day 725 of Mars' 780-day cycle
    let inside = parse_date(Some("2001-12-26")).unwrap();
    let mars = ephemeris.position(CelestialBody::Mars, inside);
    assert!(mars.is_retrograde);
    assert!(mars.speed < 0.0);

    // day 10
    let outside = parse_date(Some("2000-01-11")).unwrap();
    let mars = ephemeris.position(CelestialBody::Mars, outside);
    assert!(!mars.is_retrograde);
    assert!(mars.speed > 0.0);
}

#[test]
fn test_unparseable_date_rejected() {
    let err = parse_date(Some("31/08/2024")).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn test_natal_chart_without_provider() {
    let ephemeris = MeanMotionEphemeris::default();
    let birth = BirthDetails {
        date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        location: GeoLocation {
            lat: 19.076,
            lon: 72.8777,
        },
        utc_offset_hours: 5.5,
    };
    let chart = build_natal_chart(&birth, &ephemeris, None).unwrap();

    assert_eq!(chart.accuracy, ChartAccuracy::MeanMotion);
    assert_eq!(chart.positions.len(), 9);
    assert!((0.0..360.0).contains(&chart.ascendant_longitude));
    assert_eq!(chart.ascendant_sign, Sign::from_longitude(chart.ascendant_longitude));

    let moon = chart.position(CelestialBody::Moon).unwrap();
    assert_eq!(chart.moon_sign, moon.sign);
    assert_eq!(chart.moon_nakshatra, moon.nakshatra_index);
    assert_eq!(
        chart.birth_instant().unwrap().to_rfc3339(),
        "1990-05-15T05:00:00+00:00"
    );
}

#[test]
fn test_natal_chart_rejects_out_of_range_birth() {
    let ephemeris = MeanMotionEphemeris::default();
    let valid = BirthDetails {
        date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        location: GeoLocation {
            lat: 19.076,
            lon: 72.8777,
        },
        utc_offset_hours: 5.5,
    };

    let cases = [
        BirthDetails { utc_offset_hours: 1e10, ..valid.clone() },
        BirthDetails { utc_offset_hours: 1e18, ..valid.clone() },
        BirthDetails { utc_offset_hours: -14.5, ..valid.clone() },
        BirthDetails { location: GeoLocation { lat: 95.0, lon: 72.8777 }, ..valid.clone() },
        BirthDetails { location: GeoLocation { lat: 19.076, lon: -181.0 }, ..valid.clone() },
    ];
    for birth in &cases {
        let result = build_natal_chart(birth, &ephemeris, None);
        assert!(
            matches!(result, Err(EngineError::InvalidInput(_))),
            "accepted {:?}",
            birth
        );
    }

    // Widest real offsets still work
    let kiribati = BirthDetails { utc_offset_hours: 14.0, ..valid };
    let chart = build_natal_chart(&kiribati, &ephemeris, None).unwrap();
    assert_eq!(
        chart.birth_instant().unwrap().to_rfc3339(),
        "1990-05-14T20:30:00+00:00"
    );
}
