use approx::assert_relative_eq;
use astral_core::{
    angular_separation, detect_aspects, house_of, AscMc, AspectDetector, AspectKind, BodyPosition,
    CelestialBody, ChartConfig, ChartEngine, EphemerisSnapshot, House, HouseCusps, ZodiacSign,
    STANDARD_ORB, WIDE_ORB,
};

fn snapshot(bodies: &[(CelestialBody, f64)], cusps: Vec<f64>) -> EphemerisSnapshot {
    EphemerisSnapshot {
        julian_day: 2_451_545.0,
        bodies: bodies
            .iter()
            .map(|(body, longitude)| BodyPosition {
                body: *body,
                longitude: *longitude,
                speed: 1.0,
            })
            .collect(),
        ascmc: AscMc {
            ascendant: cusps[0],
            midheaven: cusps[9],
        },
        cusps,
        north_node: None,
    }
}

#[test]
fn test_sun_moon_trine() {
    let aspects = detect_aspects(
        &[(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 130.0)],
        STANDARD_ORB,
    )
    .unwrap();
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Trine);
    assert_relative_eq!(aspects[0].separation, 120.0);
    assert_eq!(ZodiacSign::from_longitude(10.0), ZodiacSign::Aries);
    assert_eq!(ZodiacSign::from_longitude(130.0), ZodiacSign::Leo);
}

#[test]
fn test_evenly_spaced_cusps() {
    let cusps = HouseCusps::new(&(0..12).map(|i| i as f64 * 30.0).collect::<Vec<_>>()).unwrap();
    assert_eq!(house_of(95.0, &cusps), House::Fourth);
}

#[test]
fn test_twelfth_house_wraps_past_zero() {
    let raw: Vec<f64> = (0..12).map(|i| (10.0 + i as f64 * 30.0) % 360.0).collect();
    assert_relative_eq!(raw[11], 340.0);
    let cusps = HouseCusps::new(&raw).unwrap();
    assert_eq!(house_of(350.0, &cusps), House::Twelfth);
}

#[test]
fn test_wraparound_separation() {
    assert_relative_eq!(angular_separation(1.0, 359.0), 2.0);
    assert_relative_eq!(angular_separation(359.0, 1.0), 2.0);
    assert_relative_eq!(angular_separation(-179.0, 181.0), 0.0);
}

#[test]
fn test_orb_cutoff() {
    let detector = AspectDetector::new(6.0).unwrap();
    assert_eq!(detector.match_pair(0.0, 95.0).map(|m| m.0), Some(AspectKind::Square));
    assert_eq!(detector.match_pair(0.0, 96.0).map(|m| m.0), Some(AspectKind::Square));
    assert_eq!(detector.match_pair(0.0, 96.01), None);
}

#[test]
fn test_wide_orb_catches_more() {
    let positions = [(CelestialBody::Venus, 0.0), (CelestialBody::Mars, 127.5)];
    assert!(detect_aspects(&positions, STANDARD_ORB).unwrap().is_empty());
    let wide = detect_aspects(&positions, WIDE_ORB).unwrap();
    assert_eq!(wide[0].kind, AspectKind::Trine);
}

#[test]
fn test_full_chart() {
    let cusps = vec![
        340.0, 15.5, 42.0, 63.25, 88.0, 118.0, 160.0, 195.5, 222.0, 243.25, 268.0, 298.0,
    ];
    let bodies = [
        (CelestialBody::Sun, 86.9),
        (CelestialBody::Moon, 203.4),
        (CelestialBody::Mercury, 72.1),
        (CelestialBody::Venus, 125.8),
        (CelestialBody::Mars, 130.2),
        (CelestialBody::Jupiter, 121.0),
        (CelestialBody::Saturn, 304.6),
        (CelestialBody::Uranus, 281.9),
        (CelestialBody::Neptune, 285.6),
        (CelestialBody::Pluto, 227.9),
    ];
    let engine = ChartEngine::new(&ChartConfig::default()).unwrap();
    let chart = engine.compute(&snapshot(&bodies, cusps)).unwrap();

    assert_eq!(chart.placements.len(), 10);
    assert_eq!(chart.ascendant.sign, ZodiacSign::Pisces);
    assert_eq!(chart.midheaven.sign, ZodiacSign::Sagittarius);
    assert_eq!(chart.sign_of_body(CelestialBody::Sun), Some(ZodiacSign::Gemini));
    assert_eq!(chart.house_of_body(CelestialBody::Sun), Some(House::Fourth));
    assert_eq!(chart.house_of_body(CelestialBody::Saturn), Some(House::Twelfth));

    // every unordered pair at most once
    for (i, a) in chart.aspects.iter().enumerate() {
        for b in chart.aspects.iter().skip(i + 1) {
            let same = (a.first == b.first && a.second == b.second)
                || (a.first == b.second && a.second == b.first);
            assert!(!same);
        }
        assert!(a.deviation <= STANDARD_ORB);
    }
    let venus_mars = chart
        .aspects_involving(CelestialBody::Venus)
        .find(|a| a.involves(CelestialBody::Mars))
        .unwrap();
    assert_eq!(venus_mars.kind, AspectKind::Conjunction);
}

#[test]
fn test_chart_is_deterministic() {
    let bodies = [
        (CelestialBody::Sun, 280.4),
        (CelestialBody::Moon, 223.3),
        (CelestialBody::Mars, 327.9),
    ];
    let cusps: Vec<f64> = (0..12).map(|i| 100.0 + i as f64 * 30.0).collect();
    let engine = ChartEngine::new(&ChartConfig::default()).unwrap();
    let first = engine.compute(&snapshot(&bodies, cusps.clone())).unwrap();
    let second = engine.compute(&snapshot(&bodies, cusps)).unwrap();
    let (first, second) = (
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
    );
    assert_eq!(first, second);
}
