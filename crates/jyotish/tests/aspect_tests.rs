use jyotish::aspects::{
    compute_transits, house_from, major_transits, AspectCalculator, AspectKind, AspectTone,
    Intensity, Significance, TransitEffect,
};
use jyotish::ephemeris::{parse_date, MeanMotionEphemeris, Position};
use jyotish::{CelestialBody, Sign};

fn placed(body: CelestialBody, sidereal: f64) -> Position {
    Position::from_tropical(body, sidereal, 0.0, 0.0, false)
}

#[test]
fn test_calculate_aspect_exact_angles() {
    let calculator = AspectCalculator::new();
    assert_eq!(calculator.calculate_aspect(100.0, 100.4), Some(AspectKind::Conjunction));
    assert_eq!(calculator.calculate_aspect(10.0, 190.0), Some(AspectKind::Opposition));
    assert_eq!(calculator.calculate_aspect(350.0, 110.0), Some(AspectKind::Trine));
    assert_eq!(calculator.calculate_aspect(0.0, 90.0), Some(AspectKind::Square));
    assert_eq!(calculator.calculate_aspect(0.0, 300.0), Some(AspectKind::Sextile));
    // no orb: one degree off misses
    assert_eq!(calculator.calculate_aspect(0.0, 91.0), None);
}

#[test]
fn test_compute_transit_aspects_includes_same_body() {
    let calculator = AspectCalculator::new();
    let transit = vec![
        placed(CelestialBody::Jupiter, 95.0),
        placed(CelestialBody::Venus, 215.0),
    ];
    let natal = vec![
        placed(CelestialBody::Jupiter, 95.0),
        placed(CelestialBody::Moon, 335.0),
    ];
    let aspects = calculator.compute_transit_aspects(&transit, &natal);

    assert!(aspects.iter().any(|a| a.transit_body == CelestialBody::Jupiter
        && a.natal_body == CelestialBody::Jupiter
        && a.kind == AspectKind::Conjunction));
    let venus_moon = aspects
        .iter()
        .find(|a| a.transit_body == CelestialBody::Venus && a.natal_body == CelestialBody::Moon)
        .unwrap();
    assert_eq!(venus_moon.kind, AspectKind::Trine);
    assert_eq!(venus_moon.angle, 120);
    assert_eq!(venus_moon.tone, AspectTone::Harmonious);
}

#[test]
fn test_house_formula_relative_to_simha() {
    // Jupiter in Kark counted from Simha is the 12th house
    let transits = compute_transits(Sign::Simha, &[placed(CelestialBody::Jupiter, 95.0)]);
    assert_eq!(transits[0].house, 12);
    assert_eq!(transits[0].effect, TransitEffect::Challenging);
    assert_eq!(transits[0].intensity, Intensity::High);
    assert_eq!(transits[0].significance, Significance::Major);

    // and in Mithun it is the 11th
    let transits = compute_transits(Sign::Simha, &[placed(CelestialBody::Jupiter, 65.0)]);
    assert_eq!(transits[0].house, 11);
    assert_eq!(transits[0].effect, TransitEffect::Beneficial);
    assert_eq!(transits[0].intensity, Intensity::Medium);
}

#[test]
fn test_houses_cover_every_sign() {
    for target in Sign::ALL {
        let mut houses: Vec<u8> = Sign::ALL.iter().map(|s| house_from(target, *s)).collect();
        houses.sort_unstable();
        assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
        assert_eq!(house_from(target, target), 1);
    }
}

#[test]
fn test_major_transits_for_live_positions() {
    let ephemeris = MeanMotionEphemeris::default();
    let positions = ephemeris.positions(parse_date(Some("2024-08-31")).unwrap());
    let transits = compute_transits(Sign::Mesh, &positions);
    assert_eq!(transits.len(), 9);

    let majors: Vec<CelestialBody> = major_transits(&transits).map(|t| t.body).collect();
    assert_eq!(
        majors,
        vec![
            CelestialBody::Jupiter,
            CelestialBody::Saturn,
            CelestialBody::Rahu,
            CelestialBody::Ketu
        ]
    );
    // nodes are always six houses apart
    let rahu = transits.iter().find(|t| t.body == CelestialBody::Rahu).unwrap();
    let ketu = transits.iter().find(|t| t.body == CelestialBody::Ketu).unwrap();
    assert_eq!((rahu.house + 5) % 12 + 1, ketu.house);
}
