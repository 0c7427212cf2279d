use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::validate_orb;
use crate::error::{AstrologyError, Result};
use crate::{normalize_degrees, CelestialBody};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Canonical table, in the order pairs are tested against it.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn is_harmonious(self) -> bool {
        matches!(self, AspectKind::Trine | AspectKind::Sextile)
    }

    pub fn is_tense(self) -> bool {
        matches!(self, AspectKind::Square | AspectKind::Opposition)
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: CelestialBody,
    pub second: CelestialBody,
    pub kind: AspectKind,
    /// Minor-arc separation in degrees, [0, 180].
    pub separation: f64,
    /// |separation - canonical angle|.
    pub deviation: f64,
}

impl Aspect {
    pub fn involves(&self, body: CelestialBody) -> bool {
        self.first == body || self.second == body
    }
}

/// Minor-arc distance between two longitudes.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let separation = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if separation > 180.0 {
        360.0 - separation
    } else {
        separation
    }
}

/// Pairwise aspect detection over a fixed orb and canonical-angle table.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectDetector {
    orb: f64,
    table: Vec<AspectKind>,
}

impl AspectDetector {
    pub fn new(orb: f64) -> Result<Self> {
        Self::with_table(orb, AspectKind::ALL.to_vec())
    }

    pub fn with_table(orb: f64, table: Vec<AspectKind>) -> Result<Self> {
        validate_orb(orb)?;
        if table.is_empty() {
            return Err(AstrologyError::EmptyAspectTable);
        }
        Ok(AspectDetector { orb, table })
    }

    pub fn orb(&self) -> f64 {
        self.orb
    }

    pub fn table(&self) -> &[AspectKind] {
        &self.table
    }

    /// First canonical aspect within the orb of the pair's separation.
    /// The cutoff is inclusive.
    pub fn match_pair(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64, f64)> {
        let separation = angular_separation(lon1, lon2);
        self.table.iter().find_map(|kind| {
            let deviation = (separation - kind.angle()).abs();
            (deviation <= self.orb).then_some((*kind, separation, deviation))
        })
    }

    /// Every aspect between the given positions. Each unordered pair is
    /// evaluated once, labelled in input order.
    pub fn detect(&self, positions: &[(CelestialBody, f64)]) -> Vec<Aspect> {
        let mut aspects = Vec::new();

        for (i, (body1, lon1)) in positions.iter().enumerate() {
            for (body2, lon2) in positions.iter().skip(i + 1) {
                if let Some((kind, separation, deviation)) = self.match_pair(*lon1, *lon2) {
                    aspects.push(Aspect {
                        first: *body1,
                        second: *body2,
                        kind,
                        separation,
                        deviation,
                    });
                }
            }
        }

        aspects
    }
}

pub fn detect_aspects(positions: &[(CelestialBody, f64)], orb: f64) -> Result<Vec<Aspect>> {
    Ok(AspectDetector::new(orb)?.detect(positions))
}
