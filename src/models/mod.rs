pub mod building;
pub mod location;
pub mod placed_object;
pub mod tile;
pub mod world;

pub use building::*;
pub use location::*;
pub use placed_object::*;
pub use tile::*;
pub use world::*;
