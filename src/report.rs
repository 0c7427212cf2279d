//! Descriptive report layered over a computed chart: dominant traits, moon
//! phase, lunar nodes, lucky number and the sign-keyed suggestions from
//! [`crate::tables`].

use std::fmt;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartEngine, SignPosition};
use crate::config::{ChartConfig, HouseLabelStyle};
use crate::ephemeris::EphemerisProvider;
use crate::error::{AstrologyError, Result};
use crate::tables;
use crate::{normalize_degrees, BirthInfo, CelestialBody, Element, House, Modality, ZodiacSign};

// ---------------------------
// ## Moon phase
// ---------------------------

/// Phase of the natal moon, binned in 45 degree steps of the Sun-Moon
/// elongation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    WaxingGibbous,
    Full,
    Disseminating,
    LastQuarter,
    Balsamic,
}

impl MoonPhase {
    /// Phase for an elongation `(moon - sun) mod 360`. The last bin,
    /// [315, 360), counts as new again.
    pub fn from_elongation(elongation: f64) -> Self {
        let elongation = normalize_degrees(elongation);
        match (elongation / 45.0).floor() as usize {
            0 => MoonPhase::New,
            1 => MoonPhase::WaxingCrescent,
            2 => MoonPhase::WaxingGibbous,
            3 => MoonPhase::Full,
            4 => MoonPhase::Disseminating,
            5 => MoonPhase::LastQuarter,
            6 => MoonPhase::Balsamic,
            _ => MoonPhase::New,
        }
    }

    pub fn from_longitudes(sun: f64, moon: f64) -> Self {
        Self::from_elongation(moon - sun)
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::Disseminating => "Disseminating Moon",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::Balsamic => "Balsamic Moon",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            MoonPhase::New => {
                "An excellent time to start projects, set intentions and open new cycles."
            }
            MoonPhase::WaxingCrescent => {
                "A great moment to put ideas into practice and build momentum."
            }
            MoonPhase::Full => {
                "Peak energy for harvesting results, holding rituals or celebrating achievements."
            }
            MoonPhase::Disseminating => {
                "A good period for introspection, clearing out and closing cycles."
            }
            _ => "A neutral moment. Observe and sense what needs adjusting on your path.",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------
// ## Lunar nodes
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarNodes {
    pub north: SignPosition,
    pub south: SignPosition,
}

impl LunarNodes {
    /// The south node sits opposite the north node.
    pub fn from_north(longitude: f64) -> Self {
        LunarNodes {
            north: SignPosition::from_longitude(longitude),
            south: SignPosition::from_longitude(longitude + 180.0),
        }
    }

    pub fn reading(&self) -> String {
        format!(
            "Your spiritual growth and life purpose point to lessons tied to {}. \
             Embracing those qualities can unlock a deeper sense of fulfilment.",
            self.north.sign
        )
    }

    pub fn mission(&self, sun: ZodiacSign, midheaven: ZodiacSign) -> String {
        let node = self.north.sign;
        if node == sun {
            "Your life mission is closely aligned with your solar essence, a clear and direct path toward fulfilment."
                .to_string()
        } else if node == midheaven {
            "Your purpose is tied to your career and public image. Following that calling fulfils your destiny."
                .to_string()
        } else {
            format!(
                "Your mission is to develop the qualities of {} even if they do not feel natural at first. \
                 Doing so brings balance and purpose.",
                node
            )
        }
    }
}

// ---------------------------
// ## Lucky number
// ---------------------------

/// Digit sum of `input`, reduced mod 99, plus one. Input without any digit
/// draws a number in 1..=99 from `rng` instead.
pub fn lucky_number_from_digits<R: Rng + ?Sized>(input: &str, rng: &mut R) -> u32 {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return rng.gen_range(1..=99);
    }
    digits.iter().sum::<u32>() % 99 + 1
}

/// Lucky number for a birth date, from its `ddmmYYYY` rendering.
pub fn lucky_number(date: NaiveDate) -> u32 {
    lucky_number_from_digits(&date.format("%d%m%Y").to_string(), &mut rand::thread_rng())
}

// ---------------------------
// ## Dominants
// ---------------------------

/// Most frequent value, ties going to the earliest entry of `order`.
fn most_frequent<T: Copy + PartialEq>(order: &[T], values: impl Iterator<Item = T>) -> T {
    let mut counts = vec![0usize; order.len()];
    for value in values {
        if let Some(i) = order.iter().position(|candidate| *candidate == value) {
            counts[i] += 1;
        }
    }
    let mut best = 0;
    for (i, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = i;
        }
    }
    order[best]
}

pub fn dominant_element(chart: &Chart) -> Element {
    most_frequent(&Element::ALL, chart.placements.iter().map(|p| p.sign.element()))
}

pub fn dominant_modality(chart: &Chart) -> Modality {
    most_frequent(&Modality::ALL, chart.placements.iter().map(|p| p.sign.modality()))
}

/// First placement that is not a luminary, Mars when there is none.
pub fn dominant_planet(chart: &Chart) -> CelestialBody {
    chart
        .placements
        .iter()
        .map(|p| p.body)
        .find(|body| !body.is_luminary())
        .unwrap_or(CelestialBody::Mars)
}

// ---------------------------
// ## Report
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub career: String,
    pub love: String,
    pub spirituality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub birth_info: BirthInfo,
    pub chart: Chart,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub ascendant: ZodiacSign,
    pub midheaven: ZodiacSign,
    pub dominant_element: Element,
    pub dominant_modality: Modality,
    pub dominant_planet: CelestialBody,
    /// Traditional ruler of the ascendant sign.
    pub chart_ruler: CelestialBody,
    pub moon_phase: MoonPhase,
    pub lunar_nodes: Option<LunarNodes>,
    pub mission: Option<String>,
    pub lucky_number: u32,
    pub suggested_names: Vec<String>,
    pub profile: String,
    pub suggestions: Suggestions,
    pub compatible_signs: Vec<ZodiacSign>,
    pub colors: Vec<String>,
    pub stones: Vec<String>,
    pub favorable_days: Vec<String>,
    pub daily_forecast: String,
    pub talents: Vec<String>,
    pub alerts: Vec<String>,
    pub overview: String,
}

impl Report {
    pub fn calculate(
        birth_info: &BirthInfo,
        ephemeris: &dyn EphemerisProvider,
        config: &ChartConfig,
    ) -> Result<Self> {
        let engine = ChartEngine::new(config)?;
        let snapshot = ephemeris.compute(birth_info)?;
        let chart = engine.compute(&snapshot)?;
        Self::from_chart(birth_info, chart, snapshot.north_node)
    }

    pub fn from_chart(
        birth_info: &BirthInfo,
        chart: Chart,
        north_node: Option<f64>,
    ) -> Result<Self> {
        let sun = chart
            .placement(CelestialBody::Sun)
            .ok_or(AstrologyError::MissingBody(CelestialBody::Sun))?;
        let moon = chart
            .placement(CelestialBody::Moon)
            .ok_or(AstrologyError::MissingBody(CelestialBody::Moon))?;
        let sun_sign = sun.sign;
        let moon_sign = moon.sign;
        let moon_phase = MoonPhase::from_longitudes(sun.longitude, moon.longitude);

        let ascendant = chart.ascendant.sign;
        let midheaven = chart.midheaven.sign;
        let dominant_element = dominant_element(&chart);
        let dominant_modality = dominant_modality(&chart);
        let dominant_planet = dominant_planet(&chart);

        let lunar_nodes = north_node.map(LunarNodes::from_north);
        let mission = lunar_nodes
            .as_ref()
            .map(|nodes| nodes.mission(sun_sign, midheaven));

        let profile = format!(
            "{} With the ascendant in {} and a strong influence from {}, you express these qualities in your own way.",
            tables::profile(sun_sign),
            ascendant,
            dominant_planet
        );

        let talents = talents(&chart);
        let alerts = alerts(&chart);
        let overview = overview(&chart, sun_sign, ascendant, midheaven, dominant_planet);

        Ok(Report {
            birth_info: birth_info.clone(),
            sun_sign,
            moon_sign,
            ascendant,
            midheaven,
            dominant_element,
            dominant_modality,
            dominant_planet,
            chart_ruler: ascendant.ruler(),
            moon_phase,
            lunar_nodes,
            mission,
            lucky_number: lucky_number(birth_info.date_time.date_naive()),
            suggested_names: to_strings(&tables::suggested_names(sun_sign)),
            profile,
            suggestions: Suggestions {
                career: tables::career(sun_sign).to_string(),
                love: tables::love(sun_sign).to_string(),
                spirituality: tables::spirituality(sun_sign).to_string(),
            },
            compatible_signs: tables::compatible_signs(sun_sign).to_vec(),
            colors: to_strings(&tables::colors(sun_sign)),
            stones: to_strings(&tables::stones(sun_sign)),
            favorable_days: tables::favorable_days(sun_sign.element())
                .iter()
                .map(|day| tables::weekday_name(*day).to_string())
                .collect(),
            daily_forecast: tables::daily_forecast(sun_sign).to_string(),
            talents,
            alerts,
            overview,
            chart,
        })
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn talents(chart: &Chart) -> Vec<String> {
    let mut talents: Vec<String> = chart
        .aspects
        .iter()
        .filter(|a| a.kind.is_harmonious())
        .map(|a| {
            format!(
                "A natural ease with matters ruled by {}, thanks to harmonious aspects.",
                a.first
            )
        })
        .collect();

    for info in &chart.houses {
        match info.sign {
            ZodiacSign::Leo => {
                talents.push("A gift for standing out in leadership and visible roles.".to_string())
            }
            ZodiacSign::Pisces => talents
                .push("A bond with the mystical, well suited to art and spirituality.".to_string()),
            _ => {}
        }
    }

    if talents.is_empty() {
        talents.push(
            "Your potential is still taking shape, and every discovery is part of the journey."
                .to_string(),
        );
    }
    talents
}

fn alerts(chart: &Chart) -> Vec<String> {
    let mut alerts: Vec<String> = chart
        .aspects
        .iter()
        .filter(|a| a.kind.is_tense())
        .map(|a| {
            format!(
                "Mind the challenges between {} and {}: this {} can bring tension and needed growth.",
                a.first, a.second, a.kind
            )
        })
        .collect();

    if alerts.is_empty() {
        alerts.push("No critical alerts at the moment. Stay centred.".to_string());
    }
    alerts
}

fn overview(
    chart: &Chart,
    sun: ZodiacSign,
    ascendant: ZodiacSign,
    midheaven: ZodiacSign,
    dominant: CelestialBody,
) -> String {
    let first_aspect = chart
        .aspects
        .first()
        .map(|a| a.kind.name())
        .unwrap_or("unique aspects");
    format!(
        "Your chart reveals a {} soul, with a social presence guided by {} and professional ambitions \
         turned toward {}. {} drives much of your inner life, and aspects such as {} between planets \
         shape your experience. The houses show where these energies play out.",
        sun.name().to_lowercase(),
        ascendant,
        midheaven,
        dominant,
        first_aspect
    )
}

/// House label for running text. Numeric labels get a "House" prefix here,
/// named labels already carry one.
fn house_text(chart: &Chart, house: House) -> String {
    let label = chart.house_label(house);
    match chart.house_labels {
        HouseLabelStyle::Number => format!("House {}", label),
        HouseLabelStyle::Named => label,
    }
}

/// Plain-text rendering of a report.
pub fn generate_interpretation(report: &Report) -> String {
    let mut interpretation = String::new();
    let chart = &report.chart;

    let subject = if report.birth_info.name.is_empty() {
        String::new()
    } else {
        format!("{}, ", report.birth_info.name)
    };
    interpretation.push_str(&format!(
        "Birth Chart Interpretation for {}{} UTC\n\n",
        subject,
        report.birth_info.date_time.format("%Y-%m-%d %H:%M:%S")
    ));

    interpretation.push_str(&format!(
        "Sun: {}\nMoon: {}\nAscendant: {} ({:.2}°)\nMidheaven: {} ({:.2}°)\n",
        report.sun_sign,
        report.moon_sign,
        report.ascendant,
        chart.ascendant.degree_in_sign,
        report.midheaven,
        chart.midheaven.degree_in_sign
    ));

    interpretation.push_str("\nPlanetary Positions:\n");
    for placement in &chart.placements {
        let reading = match placement.body {
            CelestialBody::Sun => tables::sun_reading(placement.sign),
            CelestialBody::Moon => tables::moon_reading(placement.sign),
            _ => tables::house_meaning(placement.house),
        };
        interpretation.push_str(&format!(
            "{}: {:.2}° {}{} ({}) - {}\n",
            placement.body,
            placement.degree_in_sign,
            placement.sign,
            if placement.retrograde { " R" } else { "" },
            house_text(chart, placement.house),
            reading
        ));
    }

    interpretation.push_str("\nAspects:\n");
    if chart.aspects.is_empty() {
        interpretation.push_str("None within orb\n");
    }
    for aspect in &chart.aspects {
        interpretation.push_str(&format!(
            "{} {} {} (orb {:.2}°) - {}\n",
            aspect.first,
            aspect.kind,
            aspect.second,
            aspect.deviation,
            tables::aspect_reading(aspect.first, aspect.second, aspect.kind)
        ));
    }

    let ruler = match report.ascendant.modern_ruler() {
        Some(modern) => format!("{} (modern: {})", report.chart_ruler, modern),
        None => report.chart_ruler.to_string(),
    };
    interpretation.push_str(&format!(
        "\nDominant element: {}\nDominant modality: {}\nDominant planet: {}\nChart ruler: {}\n",
        report.dominant_element, report.dominant_modality, report.dominant_planet, ruler
    ));
    interpretation.push_str(&format!(
        "Moon phase: {} - {}\n",
        report.moon_phase,
        report.moon_phase.guidance()
    ));

    if let Some(nodes) = &report.lunar_nodes {
        interpretation.push_str(&format!(
            "\nNorth Node: {} ({:.2}°)\nSouth Node: {} ({:.2}°)\n{}\n",
            nodes.north.sign,
            nodes.north.degree_in_sign,
            nodes.south.sign,
            nodes.south.degree_in_sign,
            nodes.reading()
        ));
    }
    if let Some(mission) = &report.mission {
        interpretation.push_str(&format!("Mission: {}\n", mission));
    }

    interpretation.push_str(&format!("\nOverview:\n{}\n", report.overview));
    interpretation.push_str(&format!("\nProfile:\n{}\n", report.profile));
    interpretation.push_str(&format!(
        "\nCareer: {}\nLove: {}\nSpirituality: {}\n",
        report.suggestions.career, report.suggestions.love, report.suggestions.spirituality
    ));

    interpretation.push_str("\nTalents:\n");
    for talent in &report.talents {
        interpretation.push_str(&format!("- {}\n", talent));
    }
    interpretation.push_str("\nAlerts:\n");
    for alert in &report.alerts {
        interpretation.push_str(&format!("- {}\n", alert));
    }

    let compatible: Vec<&str> = report.compatible_signs.iter().map(|s| s.name()).collect();
    interpretation.push_str(&format!(
        "\nLucky number: {}\nSuggested names: {}\nCompatible signs: {}\n\
         Colors: {}\nStones: {}\nFavorable days: {}\n",
        report.lucky_number,
        report.suggested_names.join(", "),
        compatible.join(", "),
        report.colors.join(", "),
        report.stones.join(", "),
        report.favorable_days.join(", ")
    ));
    interpretation.push_str(&format!("\nToday: {}\n", report.daily_forecast));

    interpretation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{AscMc, BodyPosition, EphemerisSnapshot, FixedEphemeris};
    use crate::Location;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn birth() -> BirthInfo {
        BirthInfo::new(
            Utc.with_ymd_and_hms(1991, 6, 18, 1, 40, 0).unwrap(),
            Location::new(11.2588, 75.7804),
        )
        .with_name("Asha")
    }

    fn snapshot(bodies: &[(CelestialBody, f64)], north_node: Option<f64>) -> EphemerisSnapshot {
        EphemerisSnapshot {
            julian_day: birth().julian_day(),
            bodies: bodies
                .iter()
                .map(|(body, longitude)| BodyPosition {
                    body: *body,
                    longitude: *longitude,
                    speed: 1.0,
                })
                .collect(),
            cusps: (0..12).map(|i| 10.0 + i as f64 * 30.0).collect(),
            ascmc: AscMc {
                ascendant: 10.0,
                midheaven: 280.0,
            },
            north_node,
        }
    }

    fn report(bodies: &[(CelestialBody, f64)], north_node: Option<f64>) -> Report {
        let provider = FixedEphemeris::new(snapshot(bodies, north_node));
        Report::calculate(&birth(), &provider, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn test_moon_phase_bins() {
        assert_eq!(MoonPhase::from_elongation(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_elongation(44.9), MoonPhase::New);
        assert_eq!(MoonPhase::from_elongation(45.0), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_elongation(179.0), MoonPhase::Full);
        assert_eq!(MoonPhase::from_elongation(200.0), MoonPhase::Disseminating);
        assert_eq!(MoonPhase::from_elongation(300.0), MoonPhase::Balsamic);
        assert_eq!(MoonPhase::from_elongation(330.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_longitudes(350.0, 20.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_longitudes(20.0, 350.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_longitudes(110.0, 10.0), MoonPhase::LastQuarter);
    }

    #[test]
    fn test_phase_guidance_falls_back_to_neutral() {
        assert!(MoonPhase::New.guidance().starts_with("An excellent time"));
        assert_eq!(MoonPhase::Balsamic.guidance(), MoonPhase::WaxingGibbous.guidance());
    }

    #[test]
    fn test_lucky_number() {
        let date = NaiveDate::from_ymd_opt(1991, 6, 18).unwrap();
        // 1+8+0+6+1+9+9+1 = 35
        assert_eq!(lucky_number(date), 36);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(lucky_number_from_digits("18/06/1991", &mut rng), 36);
    }

    #[test]
    fn test_lucky_number_without_digits_is_random_in_range() {
        let first = lucky_number_from_digits("no digits", &mut StdRng::seed_from_u64(42));
        let second = lucky_number_from_digits("no digits", &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert!((1..=99).contains(&first));
    }

    #[test]
    fn test_lunar_nodes() {
        let nodes = LunarNodes::from_north(270.0);
        assert_eq!(nodes.north.sign, ZodiacSign::Capricorn);
        assert_eq!(nodes.south.sign, ZodiacSign::Cancer);
        let wrapped = LunarNodes::from_north(350.0);
        assert_eq!(wrapped.south.sign, ZodiacSign::Virgo);
        assert!(nodes.mission(ZodiacSign::Capricorn, ZodiacSign::Leo).contains("solar essence"));
        assert!(nodes.mission(ZodiacSign::Leo, ZodiacSign::Capricorn).contains("career"));
        assert!(nodes.mission(ZodiacSign::Leo, ZodiacSign::Aries).contains("Capricorn"));
    }

    #[test]
    fn test_dominants_and_ties() {
        // one fire, one water: tie goes to fire
        let tied = report(&[(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 100.0)], None);
        assert_eq!(tied.dominant_element, Element::Fire);
        assert_eq!(tied.dominant_modality, Modality::Cardinal);
        assert_eq!(tied.dominant_planet, CelestialBody::Mars);

        let watery = report(
            &[
                (CelestialBody::Sun, 10.0),
                (CelestialBody::Moon, 100.0),
                (CelestialBody::Venus, 230.0),
                (CelestialBody::Jupiter, 40.0),
            ],
            None,
        );
        assert_eq!(watery.dominant_element, Element::Water);
        assert_eq!(watery.dominant_planet, CelestialBody::Venus);
    }

    #[test]
    fn test_report_fields() {
        let report = report(
            &[
                (CelestialBody::Sun, 10.0),
                (CelestialBody::Moon, 130.0),
                (CelestialBody::Mars, 100.0),
            ],
            Some(15.0),
        );
        assert_eq!(report.sun_sign, ZodiacSign::Aries);
        assert_eq!(report.moon_sign, ZodiacSign::Leo);
        assert_eq!(report.ascendant, ZodiacSign::Aries);
        assert_eq!(report.midheaven, ZodiacSign::Capricorn);
        assert_eq!(report.moon_phase, MoonPhase::WaxingGibbous);
        assert_eq!(report.favorable_days, vec!["Tuesday", "Sunday"]);
        assert_eq!(report.compatible_signs[0], ZodiacSign::Leo);
        assert!(report.mission.as_deref().unwrap().contains("solar essence"));
        // Sun-Moon trine gives a talent, Sun-Mars square an alert
        assert!(report.talents[0].contains("Sun"));
        assert!(report.alerts[0].contains("Sun and Mars"));
        assert!(report.overview.contains("aries soul"));
    }

    #[test]
    fn test_fallback_talents_and_alerts() {
        let report = report(&[(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 30.0)], None);
        assert!(report.chart.aspects.is_empty());
        assert_eq!(report.alerts, vec!["No critical alerts at the moment. Stay centred."]);
        assert!(report.overview.contains("unique aspects"));
        assert!(report.mission.is_none());
    }

    #[test]
    fn test_interpretation_text() {
        let report = report(
            &[(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 130.0)],
            Some(200.0),
        );
        let text = generate_interpretation(&report);
        assert!(text.starts_with("Birth Chart Interpretation for Asha, 1991-06-18 01:40:00 UTC"));
        assert!(text.contains("Sun: 10.00° Aries (House 1)"));
        assert!(text.contains("Sun trine Moon"));
        assert!(text.contains("North Node: Libra"));
        assert!(text.contains("Lucky number: 36"));
        assert!(text.contains("Chart ruler: Mars"));
    }

    #[test]
    fn test_house_text_follows_label_style() {
        let bodies = [(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 130.0)];
        let mut chart = report(&bodies, None).chart;
        assert_eq!(chart.house_label(House::Tenth), "10");
        assert_eq!(house_text(&chart, House::Tenth), "House 10");
        chart.house_labels = HouseLabelStyle::Named;
        assert_eq!(house_text(&chart, House::Tenth), chart.house_label(House::Tenth));
    }

    #[test]
    fn test_report_requires_luminaries() {
        let provider = FixedEphemeris::new(snapshot(
            &[(CelestialBody::Mars, 10.0), (CelestialBody::Venus, 130.0)],
            None,
        ));
        let config = ChartConfig::default();
        let chart = ChartEngine::new(&config)
            .unwrap()
            .compute(&provider.compute(&birth()).unwrap())
            .unwrap();
        assert_eq!(chart.aspects.len(), 1);
        assert!(matches!(
            Report::from_chart(&birth(), chart, None),
            Err(AstrologyError::MissingBody(CelestialBody::Sun))
        ));
        assert!(matches!(
            Report::calculate(&birth(), &provider, &config),
            Err(AstrologyError::MissingBody(CelestialBody::Sun))
        ));
    }

    #[test]
    fn test_named_house_labels_in_text() {
        let provider = FixedEphemeris::new(snapshot(
            &[(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 130.0)],
            None,
        ));
        let config = ChartConfig::default().with_house_labels(HouseLabelStyle::Named);
        let report = Report::calculate(&birth(), &provider, &config).unwrap();
        let text = generate_interpretation(&report);
        assert!(text.contains("(House 1 (Ascendant))"));
    }
}
