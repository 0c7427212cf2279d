use serde::{Deserialize, Serialize};

use crate::error::{AstrologyError, Result};
use crate::{normalize_degrees, House};

/// Twelve house cusps, each normalized into [0, 360). Cusps need not be evenly
/// spaced and may wrap past 0 Aries anywhere in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    pub fn new(cusps: &[f64]) -> Result<Self> {
        if cusps.len() != 12 {
            return Err(AstrologyError::CuspCount(cusps.len()));
        }
        let mut normalized = [0.0; 12];
        for (i, cusp) in cusps.iter().enumerate() {
            if !cusp.is_finite() {
                return Err(AstrologyError::NonFinite {
                    what: format!("house cusp {}", i + 1),
                    value: *cusp,
                });
            }
            normalized[i] = normalize_degrees(*cusp);
        }
        Ok(HouseCusps(normalized))
    }

    /// Equal-house cusps, 30 degrees apart starting at `start`.
    pub fn equal(start: f64) -> Result<Self> {
        let cusps: Vec<f64> = (0..12).map(|i| start + i as f64 * 30.0).collect();
        Self::new(&cusps)
    }

    pub fn cusp(&self, house: House) -> f64 {
        self.0[house.cusp_index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Half-open interval `[start, end)` covered by `house`. `end` is lifted
    /// by 360 when the house crosses 0 Aries, so `start <= end` always holds.
    pub fn interval(&self, house: House) -> (f64, f64) {
        let i = house.cusp_index();
        let start = self.0[i];
        let mut end = self.0[(i + 1) % 12];
        if end < start {
            end += 360.0;
        }
        (start, end)
    }

    /// Whether the cusps run once around the circle in zodiacal order.
    pub fn is_circular_order(&self) -> bool {
        let total: f64 = (0..12)
            .map(|i| (self.0[(i + 1) % 12] - self.0[i]).rem_euclid(360.0))
            .sum();
        (total - 360.0).abs() < 1e-9
    }

    /// House containing `longitude`. Houses are tried in order and the first
    /// interval holding the longitude wins. When none does (only possible for
    /// cusps that do not partition the circle) the first house is returned.
    pub fn house_of(&self, longitude: f64) -> House {
        let longitude = normalize_degrees(longitude);

        for house in House::all() {
            let (start, end) = self.interval(house);
            let candidate = if longitude < start {
                longitude + 360.0
            } else {
                longitude
            };
            if candidate >= start && candidate < end {
                return house;
            }
        }

        log::warn!(
            "longitude {:.4} fell outside every house interval {:?}; assigning house 1",
            longitude,
            self.0
        );
        House::First
    }
}

impl TryFrom<Vec<f64>> for HouseCusps {
    type Error = AstrologyError;

    fn try_from(cusps: Vec<f64>) -> Result<Self> {
        HouseCusps::new(&cusps)
    }
}

impl From<HouseCusps> for Vec<f64> {
    fn from(cusps: HouseCusps) -> Vec<f64> {
        cusps.0.to_vec()
    }
}

pub fn house_of(longitude: f64, cusps: &HouseCusps) -> House {
    cusps.house_of(longitude)
}
