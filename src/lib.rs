//! Natal chart geometry: zodiac signs, houses and aspects computed from
//! longitudes supplied by an external ephemeris, plus the descriptive report
//! layered on top of a chart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod aspects;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod geocode;
pub mod houses;
pub mod report;
pub mod tables;

pub use aspects::{angular_separation, detect_aspects, Aspect, AspectDetector, AspectKind};
pub use chart::{Chart, ChartEngine, HouseInfo, PlanetPlacement, SignPosition};
pub use config::{ChartConfig, HouseLabelStyle, STANDARD_ORB, WIDE_ORB};
pub use ephemeris::{
    AscMc, BodyPosition, EphemerisProvider, EphemerisSnapshot, FixedEphemeris, SnapshotFile,
};
pub use error::{AstrologyError, EphemerisError, GeocodeError};
pub use geocode::{Gazetteer, Geocoder};
pub use houses::{house_of, HouseCusps};
pub use report::{generate_interpretation, LunarNodes, MoonPhase, Report};

// ---------------------------
// ## Enumerations
// ---------------------------

/// Bodies tracked in a natal chart. Discriminants follow Swiss Ephemeris
/// body numbering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum CelestialBody {
    Sun = 0,
    Moon = 1,
    Mercury = 2,
    Venus = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        Self::ALL.iter().copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
        }
    }

    /// Sun and Moon.
    pub fn is_luminary(self) -> bool {
        matches!(self, CelestialBody::Sun | CelestialBody::Moon)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the twelve houses. Serialized as its number, 1 through 12.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).filter_map(House::from_index)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position of this house's opening cusp.
    pub fn cusp_index(self) -> usize {
        self as usize - 1
    }

    pub fn label(self, style: HouseLabelStyle) -> String {
        match style {
            HouseLabelStyle::Number => self.number().to_string(),
            HouseLabelStyle::Named => match self {
                House::First => "House 1 (Ascendant)".to_string(),
                House::Tenth => "House 10 (Midheaven)".to_string(),
                other => format!("House {}", other.number()),
            },
        }
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.number()
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        House::from_index(value as usize)
            .ok_or_else(|| format!("house number out of range: {}", value))
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing `longitude`. Total over every real input: the value is
    /// normalized into [0, 360) first and the slice index reduced mod 12.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = normalize_degrees(longitude);
        let sign_index = (normalized_longitude / 30.0).floor() as usize % 12;
        Self::ALL[sign_index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Traditional ruler.
    pub fn ruler(self) -> CelestialBody {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => CelestialBody::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => CelestialBody::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => CelestialBody::Mercury,
            ZodiacSign::Cancer => CelestialBody::Moon,
            ZodiacSign::Leo => CelestialBody::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => CelestialBody::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => CelestialBody::Saturn,
        }
    }

    /// Modern co-ruler, for the three signs given an outer planet.
    pub fn modern_ruler(self) -> Option<CelestialBody> {
        match self {
            ZodiacSign::Scorpio => Some(CelestialBody::Pluto),
            ZodiacSign::Aquarius => Some(CelestialBody::Uranus),
            ZodiacSign::Pisces => Some(CelestialBody::Neptune),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

pub type JulianDay = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    #[serde(default)]
    pub name: String,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub place: String,
    pub location: Location,
}

impl BirthInfo {
    pub fn new(date_time: DateTime<Utc>, location: Location) -> Self {
        BirthInfo {
            name: String::new(),
            date_time,
            place: String::new(),
            location,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn julian_day(&self) -> JulianDay {
        date_to_julian_day(self.date_time)
    }
}

// ---------------------------
// ## Utility Functions
// ---------------------------

const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Normalize any degree value into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Offset of `longitude` inside its sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

pub fn sign_of(longitude: f64) -> ZodiacSign {
    ZodiacSign::from_longitude(longitude)
}

pub fn date_to_julian_day(date_time: DateTime<Utc>) -> JulianDay {
    date_time.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JULIAN_DAY
}

/// Inverse of [`date_to_julian_day`], to millisecond precision.
pub fn julian_day_to_date(jd: JulianDay) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - UNIX_EPOCH_JULIAN_DAY) * MILLIS_PER_DAY).round() as i64;
    DateTime::from_timestamp_millis(millis)
}
