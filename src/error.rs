use std::path::PathBuf;

use thiserror::Error;

use crate::CelestialBody;

/// Errors surfaced by chart construction and its collaborators.
#[derive(Error, Debug)]
pub enum AstrologyError {
    #[error("Invalid input: expected 12 house cusps, got {0}")]
    CuspCount(usize),
    #[error("Invalid input: {what} is not a finite number ({value})")]
    NonFinite {
        what: String,
        value: f64,
    },
    #[error("Invalid input: orb must be finite and within [0, 30) degrees, got {0}")]
    InvalidOrb(f64),
    #[error("Invalid input: aspect table is empty")]
    EmptyAspectTable,
    #[error("Invalid input: no position supplied for {0}")]
    MissingBody(CelestialBody),
    #[error("Invalid input: {0} appears more than once")]
    DuplicateBody(CelestialBody),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error("Config error in {path}: {message}")]
    Config {
        path: String,
        message: String,
    },
}

/// Failures of the ephemeris provider.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris snapshot could not be read from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Ephemeris snapshot is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Ephemeris snapshot is for julian day {found}, requested {expected}")]
    MomentMismatch {
        expected: f64,
        found: f64,
    },
    #[error("Ephemeris unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the geocoder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Unknown place: {0}")]
    UnknownPlace(String),
}

pub type Result<T> = std::result::Result<T, AstrologyError>;
