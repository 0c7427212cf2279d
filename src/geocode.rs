use std::collections::HashMap;

use crate::error::GeocodeError;
use crate::Location;

/// Resolves a place name to coordinates.
pub trait Geocoder {
    fn locate(&self, place: &str) -> Result<Location, GeocodeError>;
}

/// Place used when a birth record names none.
pub const DEFAULT_PLACE: &str = "São Paulo";

/// Built-in table of named places, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: HashMap<String, Location>,
}

impl Gazetteer {
    pub fn empty() -> Self {
        Gazetteer {
            places: HashMap::new(),
        }
    }

    pub fn with_place(mut self, name: &str, location: Location) -> Self {
        self.places.insert(key(name), location);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Gazetteer::empty().with_place(DEFAULT_PLACE, Location::new(-23.5505, -46.6333))
    }
}

impl Geocoder for Gazetteer {
    fn locate(&self, place: &str) -> Result<Location, GeocodeError> {
        self.places
            .get(&key(place))
            .copied()
            .ok_or_else(|| GeocodeError::UnknownPlace(place.trim().to_string()))
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
