use serde::{Deserialize, Serialize};

use crate::aspects::{Aspect, AspectDetector};
use crate::config::{ChartConfig, HouseLabelStyle};
use crate::ephemeris::EphemerisSnapshot;
use crate::error::Result;
use crate::houses::HouseCusps;
use crate::{degree_in_sign, normalize_degrees, CelestialBody, House, JulianDay, ZodiacSign};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

impl SignPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        SignPosition {
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            degree_in_sign: degree_in_sign(longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub body: CelestialBody,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
    pub house: House,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseInfo {
    pub house: House,
    pub cusp: f64,
    pub sign: ZodiacSign,
}

/// A computed natal chart. Built once by [`ChartEngine::compute`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub julian_day: JulianDay,
    /// In snapshot order.
    pub placements: Vec<PlanetPlacement>,
    pub houses: Vec<HouseInfo>,
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
    pub aspects: Vec<Aspect>,
    pub house_labels: HouseLabelStyle,
}

impl Chart {
    pub fn placement(&self, body: CelestialBody) -> Option<&PlanetPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    pub fn sign_of_body(&self, body: CelestialBody) -> Option<ZodiacSign> {
        self.placement(body).map(|p| p.sign)
    }

    pub fn house_of_body(&self, body: CelestialBody) -> Option<House> {
        self.placement(body).map(|p| p.house)
    }

    pub fn aspects_involving(&self, body: CelestialBody) -> impl Iterator<Item = &Aspect> {
        self.aspects.iter().filter(move |a| a.involves(body))
    }

    pub fn house_label(&self, house: House) -> String {
        house.label(self.house_labels)
    }
}

/// Sign, house and aspect classification over ephemeris output.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    detector: AspectDetector,
    house_labels: HouseLabelStyle,
}

impl ChartEngine {
    pub fn new(config: &ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(ChartEngine {
            detector: AspectDetector::with_table(config.orb, config.aspects.clone())?,
            house_labels: config.house_labels,
        })
    }

    pub fn detector(&self) -> &AspectDetector {
        &self.detector
    }

    pub fn compute(&self, snapshot: &EphemerisSnapshot) -> Result<Chart> {
        snapshot.validate()?;
        let cusps = HouseCusps::new(&snapshot.cusps)?;
        if !cusps.is_circular_order() {
            log::warn!(
                "house cusps for jd {} are not in zodiacal order: {:?}",
                snapshot.julian_day,
                cusps.as_slice()
            );
        }

        let placements: Vec<PlanetPlacement> = snapshot
            .bodies
            .iter()
            .map(|position| {
                let sign = SignPosition::from_longitude(position.longitude);
                PlanetPlacement {
                    body: position.body,
                    longitude: sign.longitude,
                    sign: sign.sign,
                    degree_in_sign: sign.degree_in_sign,
                    house: cusps.house_of(sign.longitude),
                    retrograde: position.speed < 0.0,
                }
            })
            .collect();

        let houses = House::all()
            .map(|house| {
                let cusp = cusps.cusp(house);
                HouseInfo {
                    house,
                    cusp,
                    sign: ZodiacSign::from_longitude(cusp),
                }
            })
            .collect();

        let positions: Vec<(CelestialBody, f64)> =
            placements.iter().map(|p| (p.body, p.longitude)).collect();
        let aspects = self.detector.detect(&positions);

        let ascendant = SignPosition::from_longitude(cusps.cusp(House::First));
        let midheaven = SignPosition::from_longitude(snapshot.ascmc.midheaven);

        log::debug!(
            "chart for jd {}: {} placements, {} aspects, ascendant {} midheaven {}",
            snapshot.julian_day,
            placements.len(),
            aspects.len(),
            ascendant.sign,
            midheaven.sign
        );

        Ok(Chart {
            julian_day: snapshot.julian_day,
            placements,
            houses,
            ascendant,
            midheaven,
            aspects,
            house_labels: self.house_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectKind;
    use crate::ephemeris::{AscMc, BodyPosition};
    use crate::error::AstrologyError;
    use approx::assert_relative_eq;

    fn body(body: CelestialBody, longitude: f64, speed: f64) -> BodyPosition {
        BodyPosition { body, longitude, speed }
    }

    fn snapshot() -> EphemerisSnapshot {
        EphemerisSnapshot {
            julian_day: 2_448_425.7986,
            bodies: vec![
                body(CelestialBody::Sun, 10.0, 0.98),
                body(CelestialBody::Moon, 130.0, 13.2),
                body(CelestialBody::Mercury, 95.0, -0.4),
                body(CelestialBody::Venus, 350.0, 1.1),
            ],
            cusps: vec![
                10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
            ],
            ascmc: AscMc {
                ascendant: 10.0,
                midheaven: 282.5,
            },
            north_node: None,
        }
    }

    #[test]
    fn test_placements() {
        let chart = ChartEngine::new(&ChartConfig::default())
            .unwrap()
            .compute(&snapshot())
            .unwrap();
        let sun = chart.placement(CelestialBody::Sun).unwrap();
        assert_eq!(sun.sign, ZodiacSign::Aries);
        assert_eq!(sun.house, House::First);
        assert!(!sun.retrograde);

        let mercury = chart.placement(CelestialBody::Mercury).unwrap();
        assert_eq!(mercury.sign, ZodiacSign::Cancer);
        assert_relative_eq!(mercury.degree_in_sign, 5.0);
        assert_eq!(mercury.house, House::Third);
        assert!(mercury.retrograde);

        assert_eq!(chart.house_of_body(CelestialBody::Venus), Some(House::Twelfth));
        let order: Vec<_> = chart.placements.iter().map(|p| p.body).collect();
        assert_eq!(
            order,
            vec![
                CelestialBody::Sun,
                CelestialBody::Moon,
                CelestialBody::Mercury,
                CelestialBody::Venus
            ]
        );
    }

    #[test]
    fn test_angles_and_houses() {
        let chart = ChartEngine::new(&ChartConfig::default())
            .unwrap()
            .compute(&snapshot())
            .unwrap();
        assert_eq!(chart.ascendant.sign, ZodiacSign::Aries);
        assert_relative_eq!(chart.ascendant.degree_in_sign, 10.0);
        assert_eq!(chart.midheaven.sign, ZodiacSign::Capricorn);
        assert_relative_eq!(chart.midheaven.degree_in_sign, 12.5);
        assert_eq!(chart.houses.len(), 12);
        assert_eq!(chart.houses[11].sign, ZodiacSign::Pisces);
    }

    #[test]
    fn test_ascendant_follows_first_cusp() {
        let mut snapshot = snapshot();
        snapshot.cusps = (0..12).map(|i| 100.0 + i as f64 * 30.0).collect();
        snapshot.ascmc.ascendant = 200.0;
        let chart = ChartEngine::new(&ChartConfig::default())
            .unwrap()
            .compute(&snapshot)
            .unwrap();
        assert_eq!(chart.ascendant.sign, ZodiacSign::Cancer);
        assert_relative_eq!(chart.ascendant.longitude, 100.0);
        assert_relative_eq!(chart.ascendant.degree_in_sign, 10.0);
    }

    #[test]
    fn test_chart_without_luminaries() {
        let mut snapshot = snapshot();
        snapshot.bodies = vec![
            body(CelestialBody::Mars, 10.0, 0.6),
            body(CelestialBody::Venus, 130.0, 1.2),
        ];
        let chart = ChartEngine::new(&ChartConfig::default())
            .unwrap()
            .compute(&snapshot)
            .unwrap();
        assert_eq!(chart.placements.len(), 2);
        assert_eq!(chart.sign_of_body(CelestialBody::Sun), None);
        assert_eq!(chart.house_of_body(CelestialBody::Venus), Some(House::Fifth));
        assert_eq!(chart.aspects.len(), 1);
        assert_eq!(chart.aspects[0].kind, AspectKind::Trine);
        assert!(chart.aspects[0].involves(CelestialBody::Mars));
    }

    #[test]
    fn test_aspects() {
        let chart = ChartEngine::new(&ChartConfig::default())
            .unwrap()
            .compute(&snapshot())
            .unwrap();
        let sun_moon = chart
            .aspects_involving(CelestialBody::Moon)
            .find(|a| a.involves(CelestialBody::Sun))
            .unwrap();
        assert_eq!(sun_moon.kind, AspectKind::Trine);
        // Sun 10, Venus 350: 20 deg apart, nothing within 6
        assert!(chart
            .aspects_involving(CelestialBody::Venus)
            .all(|a| !a.involves(CelestialBody::Sun)));
    }

    #[test]
    fn test_recompute_is_identical() {
        let engine = ChartEngine::new(&ChartConfig::default()).unwrap();
        let first = engine.compute(&snapshot()).unwrap();
        let second = engine.compute(&snapshot()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_invalid_snapshot_is_rejected() {
        let engine = ChartEngine::new(&ChartConfig::default()).unwrap();
        let mut bad = snapshot();
        bad.cusps.truncate(11);
        assert!(matches!(engine.compute(&bad), Err(AstrologyError::CuspCount(11))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ChartConfig::default().with_orb(31.0);
        assert!(matches!(ChartEngine::new(&config), Err(AstrologyError::InvalidOrb(_))));
    }
}
