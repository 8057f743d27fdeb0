use super::location::Location;
use super::tile::Tile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BuildingKind {
    PetBowl {
        #[serde(default)]
        watered: bool,
    },
    /// Shed, barn, coop, ... Interiors the host never generated stay `None`.
    Structure {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indoors: Option<Box<Location>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub tile_x: i32,
    pub tile_y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles_wide: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles_high: Option<u32>,
    pub kind: BuildingKind,
}

impl Building {
    pub fn pet_bowl(tile_x: i32, tile_y: i32) -> Self {
        Self {
            tile_x,
            tile_y,
            tiles_wide: None,
            tiles_high: None,
            kind: BuildingKind::PetBowl { watered: false },
        }
    }

    pub fn structure(name: impl Into<String>, tile_x: i32, tile_y: i32) -> Self {
        Self {
            tile_x,
            tile_y,
            tiles_wide: None,
            tiles_high: None,
            kind: BuildingKind::Structure {
                name: name.into(),
                indoors: None,
            },
        }
    }

    pub fn with_footprint(mut self, tiles_wide: u32, tiles_high: u32) -> Self {
        self.tiles_wide = Some(tiles_wide);
        self.tiles_high = Some(tiles_high);
        self
    }

    pub fn with_indoors(mut self, interior: Location) -> Self {
        if let BuildingKind::Structure { indoors, .. } = &mut self.kind {
            *indoors = Some(Box::new(interior));
        }
        self
    }

    pub fn anchor(&self) -> Tile {
        Tile::new(self.tile_x, self.tile_y)
    }

    /// Width and height in tiles. Pet bowls default to 2x2, everything else to 1x1.
    pub fn footprint(&self) -> (u32, u32) {
        let fallback = match self.kind {
            BuildingKind::PetBowl { .. } => 2,
            BuildingKind::Structure { .. } => 1,
        };
        (
            self.tiles_wide.unwrap_or(fallback),
            self.tiles_high.unwrap_or(fallback),
        )
    }

    pub fn occupies(&self, tile: Tile) -> bool {
        let (wide, high) = self.footprint();
        let dx = i64::from(tile.x) - i64::from(self.tile_x);
        let dy = i64::from(tile.y) - i64::from(self.tile_y);
        (0..i64::from(wide)).contains(&dx) && (0..i64::from(high)).contains(&dy)
    }

    /// One tile east of the anchor; only pet bowls have one.
    pub fn drinking_tile(&self) -> Option<Tile> {
        match self.kind {
            BuildingKind::PetBowl { .. } => Some(self.anchor().offset(Tile::new(1, 0))),
            BuildingKind::Structure { .. } => None,
        }
    }

    pub fn is_watered(&self) -> bool {
        matches!(self.kind, BuildingKind::PetBowl { watered: true })
    }

    pub fn indoors(&self) -> Option<&Location> {
        match &self.kind {
            BuildingKind::Structure { indoors, .. } => indoors.as_deref(),
            BuildingKind::PetBowl { .. } => None,
        }
    }

    pub fn indoors_mut(&mut self) -> Option<&mut Location> {
        match &mut self.kind {
            BuildingKind::Structure { indoors, .. } => indoors.as_deref_mut(),
            BuildingKind::PetBowl { .. } => None,
        }
    }
}
