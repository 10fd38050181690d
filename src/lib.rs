//! Procedural dungeon generation: rooms placed at random, connected by corridors ("passes"),
//! pruned of redundant connections, populated with elements and rasterized into a tile grid.
//!
//! ```rust
//! use dungeon_generator::{DungeonGenerator, MapKey};
//!
//! let generator = DungeonGenerator::default();
//! if let Some(dungeon) = generator.generate_with_key(MapKey::from(42u64)) {
//!     let grid = dungeon.grid();
//!     assert!(grid.width() > 0 && grid.height() > 0);
//! }
//! ```

#![deny(unused_must_use)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod map;
pub mod generator;
pub mod search;

pub use crate::generator::{
    Bounds,
    ConfigError,
    Dungeon,
    DungeonGenerator,
    InvalidMapKey,
    MapKey,
};
pub use crate::map::{
    Element,
    ElementRate,
    ElementType,
    Pass,
    Room,
    RoomId,
    Tile,
    TileGrid,
    TilePos,
    TileRect,
    TileType,
};
