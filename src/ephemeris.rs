//! Boundary to the external ephemeris. Longitudes, house cusps and the
//! ascendant/midheaven pair are consumed here, never computed.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AstrologyError, EphemerisError, Result};
use crate::{BirthInfo, CelestialBody, JulianDay};

/// Largest accepted gap between a snapshot's moment and the requested one.
const MOMENT_TOLERANCE_DAYS: f64 = 1.0 / 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: CelestialBody,
    /// Ecliptic longitude in degrees.
    pub longitude: f64,
    /// Speed in longitude, degrees per day. Negative while retrograde.
    #[serde(default)]
    pub speed: f64,
}

/// Ascendant and midheaven as the provider reports them (`ascmc[0]`,
/// `ascmc[1]` in Swiss Ephemeris terms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscMc {
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Everything the chart needs from the ephemeris for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub julian_day: JulianDay,
    pub bodies: Vec<BodyPosition>,
    /// Twelve cusps, house 1 first.
    pub cusps: Vec<f64>,
    pub ascmc: AscMc,
    /// Mean north node longitude, when the provider tracks it.
    #[serde(default)]
    pub north_node: Option<f64>,
}

impl EphemerisSnapshot {
    pub fn longitude_of(&self, body: CelestialBody) -> Option<f64> {
        self.bodies
            .iter()
            .find(|position| position.body == body)
            .map(|position| position.longitude)
    }

    /// Checks the shape of the snapshot before any classification runs:
    /// twelve finite cusps, finite angles and positions, each body at most
    /// once. Any subset of bodies is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.cusps.len() != 12 {
            return Err(AstrologyError::CuspCount(self.cusps.len()));
        }
        check_finite("julian day", self.julian_day)?;
        for (i, cusp) in self.cusps.iter().enumerate() {
            check_finite(&format!("house cusp {}", i + 1), *cusp)?;
        }
        check_finite("ascendant", self.ascmc.ascendant)?;
        check_finite("midheaven", self.ascmc.midheaven)?;
        if let Some(node) = self.north_node {
            check_finite("north node", node)?;
        }

        let mut seen = HashSet::new();
        for position in &self.bodies {
            if !seen.insert(position.body) {
                return Err(AstrologyError::DuplicateBody(position.body));
            }
            check_finite(&format!("{} longitude", position.body), position.longitude)?;
            check_finite(&format!("{} speed", position.body), position.speed)?;
        }
        Ok(())
    }

    pub fn from_json_str(source: &str) -> std::result::Result<Self, EphemerisError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn write_json(&self, path: &Path) -> std::result::Result<(), EphemerisError> {
        let io_error = |source| EphemerisError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(io_error)
    }
}

fn check_finite(what: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AstrologyError::NonFinite {
            what: what.to_string(),
            value,
        })
    }
}

/// Source of raw positions for a birth moment and place.
pub trait EphemerisProvider {
    fn compute(&self, birth: &BirthInfo) -> std::result::Result<EphemerisSnapshot, EphemerisError>;
}

/// Provider backed by a JSON snapshot on disk, typically exported from an
/// ephemeris run elsewhere.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> std::result::Result<EphemerisSnapshot, EphemerisError> {
        let source = fs::read_to_string(&self.path).map_err(|source| EphemerisError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot = EphemerisSnapshot::from_json_str(&source)?;
        log::debug!(
            "read ephemeris snapshot for jd {} from {}",
            snapshot.julian_day,
            self.path.display()
        );
        Ok(snapshot)
    }
}

impl EphemerisProvider for SnapshotFile {
    fn compute(&self, birth: &BirthInfo) -> std::result::Result<EphemerisSnapshot, EphemerisError> {
        let snapshot = self.load()?;
        let expected = birth.julian_day();
        if (snapshot.julian_day - expected).abs() > MOMENT_TOLERANCE_DAYS {
            return Err(EphemerisError::MomentMismatch {
                expected,
                found: snapshot.julian_day,
            });
        }
        Ok(snapshot)
    }
}

/// Provider that hands back one stored snapshot whatever the request.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    snapshot: EphemerisSnapshot,
}

impl FixedEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        FixedEphemeris { snapshot }
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn compute(
        &self,
        _birth: &BirthInfo,
    ) -> std::result::Result<EphemerisSnapshot, EphemerisError> {
        Ok(self.snapshot.clone())
    }
}
