use super::tile::Tile;
use serde::{Deserialize, Serialize};

/// Name the host gives the fertilizer-holding sprinkler attachment.
pub const ENRICHER_NAME: &str = "Enricher";

/// Anything the host has placed on a location tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlacedObject {
    Sprinkler(Sprinkler),
    Pot(Pot),
    Other { name: String },
}

impl PlacedObject {
    pub fn kind(&self) -> &'static str {
        match self {
            PlacedObject::Sprinkler(_) => "Sprinkler",
            PlacedObject::Pot(_) => "Pot",
            PlacedObject::Other { .. } => "Other",
        }
    }

    pub fn is_sprinkler(&self) -> bool {
        matches!(self, PlacedObject::Sprinkler(_))
    }

    pub fn as_sprinkler(&self) -> Option<&Sprinkler> {
        match self {
            PlacedObject::Sprinkler(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pot_mut(&mut self) -> Option<&mut Pot> {
        match self {
            PlacedObject::Pot(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprinkler {
    pub name: String,
    /// Attachment slot (pressure nozzle, Enricher, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_object: Option<Attachment>,
    /// Tiles the host says this sprinkler waters today, relative to its own tile.
    #[serde(default)]
    pub coverage: Vec<Tile>,
}

impl Sprinkler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            held_object: None,
            coverage: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.held_object = Some(attachment);
        self
    }

    pub fn with_coverage(mut self, offsets: impl IntoIterator<Item = Tile>) -> Self {
        self.coverage = offsets.into_iter().collect();
        self
    }

    /// The attached device, but only when it is an Enricher.
    pub fn enricher_mut(&mut self) -> Option<&mut Attachment> {
        self.held_object
            .as_mut()
            .filter(|attachment| attachment.is_enricher())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}

impl Attachment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: None,
        }
    }

    pub fn enricher(items: Vec<ItemStack>) -> Self {
        Self {
            name: ENRICHER_NAME.to_string(),
            inventory: Some(Inventory { items }),
        }
    }

    pub fn is_enricher(&self) -> bool {
        self.name == ENRICHER_NAME
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<ItemStack>,
}

impl Inventory {
    /// The active slot. Only this stack is ever drawn from.
    pub fn first_mut(&mut self) -> Option<&mut ItemStack> {
        self.items.first_mut()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Qualified item id, e.g. `(O)368` for basic fertilizer.
    pub item_id: String,
    pub stack: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, stack: u32) -> Self {
        Self {
            item_id: item_id.into(),
            stack,
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.stack == 0
    }

    /// Remove one unit. Returns false when the stack is already empty.
    pub fn consume_one(&mut self) -> bool {
        match self.stack.checked_sub(1) {
            Some(remaining) => {
                self.stack = remaining;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    #[serde(default)]
    pub soil: Soil,
}

impl Pot {
    pub fn water(&mut self) {
        self.soil.watered = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soil {
    #[serde(default)]
    pub watered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
}

impl Soil {
    pub fn is_fertilized(&self) -> bool {
        self.fertilizer.is_some()
    }
}
