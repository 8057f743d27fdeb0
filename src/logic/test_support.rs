//! Fixtures shared by the rule tests.

use crate::models::{Attachment, ItemStack, Location, PlacedObject, Pot, Sprinkler, Tile};

/// Basic sprinkler pattern: the four orthogonal neighbours.
pub fn cardinal_coverage(origin: Tile, _sprinkler: &Sprinkler) -> Vec<Tile> {
    [(-1, 0), (0, -1), (0, 1), (1, 0)]
        .into_iter()
        .map(|(dx, dy)| origin.offset(Tile::new(dx, dy)))
        .collect()
}

pub fn plain_sprinkler() -> PlacedObject {
    PlacedObject::Sprinkler(Sprinkler::new("Sprinkler"))
}

pub fn enriched_sprinkler(items: Vec<ItemStack>) -> PlacedObject {
    PlacedObject::Sprinkler(
        Sprinkler::new("Quality Sprinkler").with_attachment(Attachment::enricher(items)),
    )
}

pub fn pot() -> PlacedObject {
    PlacedObject::Pot(Pot::default())
}

/// Quantity left in the first Enricher slot of the sprinkler at `tile`.
pub fn enricher_stack(location: &Location, tile: (i32, i32)) -> Option<u32> {
    location
        .objects
        .get(&Tile::from(tile))?
        .as_sprinkler()?
        .held_object
        .as_ref()?
        .inventory
        .as_ref()?
        .items
        .first()
        .map(|stack| stack.stack)
}
