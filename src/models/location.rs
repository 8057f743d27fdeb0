use super::building::Building;
use super::placed_object::{PlacedObject, Pot};
use super::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub outdoors: bool,
    #[serde(default, with = "tile_map")]
    pub objects: BTreeMap<Tile, PlacedObject>,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl Location {
    pub fn new(name: impl Into<String>, outdoors: bool) -> Self {
        Self {
            name: name.into(),
            outdoors,
            objects: BTreeMap::new(),
            buildings: Vec::new(),
        }
    }

    pub fn with_object(mut self, tile: impl Into<Tile>, object: PlacedObject) -> Self {
        self.objects.insert(tile.into(), object);
        self
    }

    pub fn with_building(mut self, building: Building) -> Self {
        self.buildings.push(building);
        self
    }

    /// Tiles holding a sprinkler, in map order.
    pub fn sprinkler_tiles(&self) -> Vec<Tile> {
        self.objects
            .iter()
            .filter(|(_, object)| object.is_sprinkler())
            .map(|(tile, _)| *tile)
            .collect()
    }

    pub fn pot_at(&self, tile: impl Into<Tile>) -> Option<&Pot> {
        match self.objects.get(&tile.into()) {
            Some(PlacedObject::Pot(pot)) => Some(pot),
            _ => None,
        }
    }

    /// Interiors of structures sited here. Structures without one are skipped.
    pub fn indoor_locations_mut(&mut self) -> impl Iterator<Item = &mut Location> {
        self.buildings.iter_mut().filter_map(Building::indoors_mut)
    }

    pub fn indoor_locations(&self) -> impl Iterator<Item = &Location> {
        self.buildings.iter().filter_map(Building::indoors)
    }
}

/// Serializes the tile map as a list of `{ tile, object }` entries, since
/// neither YAML nor JSON has struct map keys.
mod tile_map {
    use super::{PlacedObject, Tile};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct EntryRef<'a> {
        tile: Tile,
        object: &'a PlacedObject,
    }

    #[derive(Deserialize)]
    struct Entry {
        tile: Tile,
        object: PlacedObject,
    }

    pub fn serialize<S>(
        map: &BTreeMap<Tile, PlacedObject>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            map.iter()
                .map(|(tile, object)| EntryRef { tile: *tile, object }),
        )
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<BTreeMap<Tile, PlacedObject>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for Entry { tile, object } in entries {
            if map.insert(tile, object).is_some() {
                return Err(D::Error::custom(format!(
                    "more than one object placed on tile {}",
                    tile
                )));
            }
        }
        Ok(map)
    }
}
