use super::location::Location;
use crate::error::{Result, SprinklerError};
use serde::{Deserialize, Serialize};

/// Every top-level location the host hands to the daily pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl World {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Interiors may only hang off outdoor locations, one level deep.
    pub fn validate(&self) -> Result<()> {
        for location in &self.locations {
            for interior in location.indoor_locations() {
                if !location.outdoors {
                    return Err(SprinklerError::InvalidData(format!(
                        "indoor location '{}' owns interior '{}'",
                        location.name, interior.name
                    )));
                }
                if let Some(nested) = interior.indoor_locations().next() {
                    return Err(SprinklerError::InvalidData(format!(
                        "interior '{}' of '{}' owns another interior '{}'",
                        interior.name, location.name, nested.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }
}
