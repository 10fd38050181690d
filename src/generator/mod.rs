// The dungeon generator is split across modules because there are a lot of methods (out of
// necessity) but many of those methods can be easily grouped because they do not actually interact
// with one another. These groups of methods usually correspond to the phases of dungeon generation
// that take place. The code was designed this way to make sharing the configuration as easy as
// possible (via &self).
mod rooms;
mod passes;
mod pruning;
mod place_items;
mod rasterize;

mod attempts;
mod map_key;
mod bounds;

pub use self::map_key::*;
pub use self::bounds::*;

use rand::random;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::map::*;

/// Represents when we have run out of attempts to generate the dungeon from a given key
/// This can happen if a loop trying to generate something runs too many times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RanOutOfAttempts;

/// A configuration that cannot be used to generate dungeons
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` has a minimum that is greater than its maximum")]
    EmptyRange {
        field: &'static str,
    },
    #[error("`{field}` must be at least {min}")]
    TooSmall {
        field: &'static str,
        min: i64,
    },
    #[error("`{field}` must be at most {max}")]
    TooLarge {
        field: &'static str,
        max: i64,
    },
}

/// Configuration of the dungeon generator
///
/// Every field can be omitted when loading from JSON, in which case the default is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonGenerator {
    /// The number of attempts before giving up on placing something randomly
    ///
    /// Running out of attempts while placing rooms means that no dungeon can be generated with
    /// the current key. Running out while looking for a room to hold an element only skips that
    /// one element.
    pub attempts: usize,
    /// The minimum and maximum number of rooms to generate
    pub rooms: Bounds<usize>,
    /// The minimum and maximum width (in tiles) of a room
    pub room_width: Bounds<i32>,
    /// The minimum and maximum height (in tiles) of a room
    pub room_height: Bounds<i32>,
    /// Every room must be at least `min` tiles away from all other rooms and at most `max` tiles
    /// away from at least one other room. Rooms within `max` tiles of each other are "near" and
    /// get connected by passes.
    pub room_distance: Bounds<i32>,
    /// The minimum and maximum width (in tiles) of a pass
    pub pass_width: Bounds<i32>,
    /// A pass with bends is removed if going around it is at most this many percent longer than
    /// the shortest path that may use it
    pub long_path_difference: u32,
    /// The number of tiles a path search may expand before deciding the target is unreachable
    pub path_search_nodes: usize,
    /// The elements to scatter around the rooms
    pub element_rates: Vec<ElementRate>,
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self {
            attempts: 100_000,
            rooms: Bounds {min: 5, max: 10},
            room_width: Bounds {min: 15, max: 30},
            room_height: Bounds {min: 15, max: 30},
            room_distance: Bounds {min: 0, max: 30},
            pass_width: Bounds {min: 1, max: 3},
            long_path_difference: 50,
            path_search_nodes: 1000,
            element_rates: Vec::new(),
        }
    }
}

/// A generated dungeon
#[derive(Debug, Clone)]
pub struct Dungeon {
    key: MapKey,
    /// The RoomId is the index into this field
    rooms: Vec<Room>,
    passes: Vec<Pass>,
    grid: TileGrid,
}

impl Dungeon {
    /// The key that generated this dungeon. Generating again with this key and the same
    /// configuration produces an identical dungeon.
    pub fn key(&self) -> MapKey {
        self.key
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Returns the pass connecting the two rooms (in either order), if any
    pub fn pass_between(&self, a: RoomId, b: RoomId) -> Option<&Pass> {
        self.passes.iter().find(|pass| pass.connects(a, b))
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn into_grid(self) -> TileGrid {
        self.grid
    }
}

impl DungeonGenerator {
    /// Loads a configuration from JSON and checks that it can be used
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let generator: Self = serde_json::from_str(json)?;
        generator.validate()?;
        Ok(generator)
    }

    /// Checks that every range in the configuration is non-empty and within sensible limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn ordered<T: PartialOrd>(field: &'static str, bounds: &Bounds<T>) -> Result<(), ConfigError> {
            if bounds.is_ordered() { Ok(()) } else { Err(ConfigError::EmptyRange {field}) }
        }

        fn at_least(field: &'static str, value: i64, min: i64) -> Result<(), ConfigError> {
            if value >= min { Ok(()) } else { Err(ConfigError::TooSmall {field, min}) }
        }

        at_least("attempts", self.attempts as i64, 1)?;
        at_least("path_search_nodes", self.path_search_nodes as i64, 1)?;

        ordered("rooms", &self.rooms)?;
        at_least("rooms", self.rooms.min as i64, 1)?;
        ordered("room_width", &self.room_width)?;
        at_least("room_width", self.room_width.min as i64, 1)?;
        ordered("room_height", &self.room_height)?;
        at_least("room_height", self.room_height.min as i64, 1)?;
        ordered("room_distance", &self.room_distance)?;
        at_least("room_distance", self.room_distance.min as i64, 0)?;
        ordered("pass_width", &self.pass_width)?;
        at_least("pass_width", self.pass_width.min as i64, 1)?;

        for rate in &self.element_rates {
            ordered("element_rates.per_map", &rate.per_map)?;
            ordered("element_rates.per_room", &rate.per_room)?;
            if rate.per_room.max > 100 {
                return Err(ConfigError::TooLarge {field: "element_rates.per_room", max: 100});
            }
        }

        Ok(())
    }

    /// Generates a dungeon from a fresh random key
    ///
    /// Returns None if the rooms could not be placed. Trying again (or loosening the room
    /// constraints) may succeed.
    pub fn generate(&self) -> Option<Dungeon> {
        self.generate_with_key(random())
    }

    /// Generates the dungeon identified by the given key
    ///
    /// The same key and configuration always produce the same dungeon. Returns None if the
    /// configuration does not pass `validate` or if the rooms could not be placed.
    ///
    /// # Panics
    ///
    /// Panics if an element cannot find a free tile in the room chosen for it. This only happens
    /// when more elements are configured than rooms can hold.
    pub fn generate_with_key(&self, key: MapKey) -> Option<Dungeon> {
        if let Err(err) = self.validate() {
            error!("Refusing to generate map key `{}` with an invalid configuration: {}", key, err);
            return None;
        }

        // Dungeons are generated in "phases". The following calls run each of those in succession.
        // The order matters since every phase after the first draws from the same rng.
        let mut rng = key.to_rng();

        let mut rooms = match self.generate_rooms(&mut rng) {
            Ok(rooms) => rooms,
            Err(RanOutOfAttempts) => {
                warn!("Ran out of attempts while placing rooms for map key `{}`", key);
                return None;
            },
        };
        debug!("Placed {} rooms for map key `{}`", rooms.len(), key);

        let mut passes = self.generate_passes(&mut rng, &rooms);
        debug!("Routed {} passes", passes.len());

        let removed = self.prune_passes(&rooms, &mut passes);
        debug!("Pruned {} passes, {} remaining", removed.len(), passes.len());

        let placed = self.place_elements(&mut rng, &mut rooms);
        debug!("Placed {} elements", placed);

        let grid = rasterize::rasterize(&rooms, &passes);

        Some(Dungeon {key, rooms, passes, grid})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rayon::prelude::*;

    fn small_generator() -> DungeonGenerator {
        DungeonGenerator {
            rooms: Bounds {min: 3, max: 3},
            room_width: Bounds {min: 5, max: 5},
            room_height: Bounds {min: 5, max: 5},
            room_distance: Bounds {min: 2, max: 10},
            ..DungeonGenerator::default()
        }
    }

    /// Checks everything that must hold for any dungeon generated with the given configuration
    fn check_dungeon(generator: &DungeonGenerator, dungeon: &Dungeon) {
        let rooms = dungeon.rooms();
        assert!(generator.rooms.contains(&rooms.len()));

        for (i, room) in rooms.iter().enumerate() {
            let rect = room.rect();
            assert_eq!(room.id().index(), i);
            assert!(generator.room_width.contains(&rect.width()));
            assert!(generator.room_height.contains(&rect.height()));
            assert!(rect.left() >= 0 && rect.top() >= 0);

            for other in &rooms[..i] {
                assert!(!rect.has_intersection(other.rect()), "rooms {} and {} overlap", room.id(), other.id());
                assert!(rect.distance(other.rect()) >= generator.room_distance.min as f32);
            }
            if i > 0 {
                let near = rooms.iter()
                    .filter(|other| other.id() != room.id())
                    .any(|other| rect.distance(other.rect()) <= generator.room_distance.max as f32);
                assert!(near, "room {} is not near any other room", room.id());
            }

            for (j, element) in room.elements().iter().enumerate() {
                assert!(element.pos.x >= 0 && element.pos.x < rect.width());
                assert!(element.pos.y >= 0 && element.pos.y < rect.height());
                assert!(room.elements()[..j].iter().all(|e| e.pos != element.pos));
            }
        }

        let passes = dungeon.passes();
        for (i, pass) in passes.iter().enumerate() {
            let (a, b) = pass.rooms();
            assert!(passes[..i].iter().all(|p| !p.connects(a, b)), "two passes between {} and {}", a, b);
            for &seg in pass.segments() {
                assert!(rooms.iter().all(|room| !room.rect().has_intersection(seg)));
                assert!(passes.iter().filter(|p| *p != pass).all(|p| !p.has_intersection(seg)));
            }
        }

        let max_right = rooms.iter().map(|r| r.rect().right()).max().unwrap();
        let max_bottom = rooms.iter().map(|r| r.rect().bottom()).max().unwrap();
        let grid = dungeon.grid();
        assert_eq!(grid.width(), max_right as usize + 1);
        assert_eq!(grid.height(), max_bottom as usize + 1);
    }

    #[test]
    fn three_small_rooms() {
        let generator = small_generator();
        let dungeon = generator.generate_with_key(MapKey::from(42u64))
            .expect("three small rooms should always fit");
        assert_eq!(dungeon.rooms().len(), 3);
        check_dungeon(&generator, &dungeon);

        for pass in dungeon.passes() {
            let (a, b) = pass.rooms();
            assert_eq!(dungeon.pass_between(b, a), Some(pass));
        }

        assert!(dungeon.passes().len() >= 2);
        assert_eq!(connected_rooms(&dungeon, RoomId(0)).len(), 3, "pass graph is not connected");
    }

    /// Returns every room reachable from the given room by following passes
    fn connected_rooms(dungeon: &Dungeon, start: RoomId) -> Vec<RoomId> {
        let mut seen = vec![start];
        let mut stack = vec![start];
        while let Some(room) = stack.pop() {
            for pass in dungeon.passes() {
                if let Some(next) = pass.other_room(room) {
                    if !seen.contains(&next) {
                        seen.push(next);
                        stack.push(next);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn same_key_same_dungeon() {
        let generator = DungeonGenerator {
            element_rates: vec![
                ElementRate::new(ElementType::StartPoint, Bounds {min: 100, max: 100}, Bounds {min: 100, max: 100}),
                ElementRate::new(ElementType::Chest1, Bounds {min: 150, max: 400}, Bounds {min: 10, max: 60}),
                ElementRate::new(ElementType::StatusTrap, Bounds {min: 0, max: 300}, Bounds {min: 30, max: 90}),
            ],
            ..DungeonGenerator::default()
        };

        let key = MapKey::from(1234u64);
        let first = generator.generate_with_key(key).expect("default configuration should succeed");
        let second = generator.generate_with_key(key).expect("default configuration should succeed");
        assert_eq!(first.key(), key);
        assert_eq!(first.rooms(), second.rooms());
        assert_eq!(first.passes(), second.passes());
        assert!(first.grid() == second.grid());
        check_dungeon(&generator, &first);
    }

    #[test]
    fn invalid_configuration_gives_up() {
        let zero_width = DungeonGenerator {
            room_width: Bounds {min: 0, max: 4},
            element_rates: vec![
                ElementRate::new(ElementType::Rune, Bounds {min: 500, max: 500}, Bounds {min: 100, max: 100}),
            ],
            ..small_generator()
        };
        assert!(zero_width.validate().is_err());
        assert!(zero_width.generate_with_key(MapKey::from(42u64)).is_none());

        let reversed_distance = DungeonGenerator {
            room_distance: Bounds {min: 50, max: 10},
            ..small_generator()
        };
        assert!(reversed_distance.generate_with_key(MapKey::from(42u64)).is_none());
    }

    #[test]
    fn single_room_single_element() {
        let generator = DungeonGenerator {
            rooms: Bounds {min: 1, max: 1},
            room_width: Bounds {min: 6, max: 6},
            room_height: Bounds {min: 4, max: 4},
            element_rates: vec![
                ElementRate::new(ElementType::EndPoint, Bounds {min: 100, max: 100}, Bounds {min: 50, max: 50}),
            ],
            ..DungeonGenerator::default()
        };

        for seed in 0..20u64 {
            let dungeon = generator.generate_with_key(MapKey::from(seed)).unwrap();
            assert!(dungeon.passes().is_empty());
            let room = &dungeon.rooms()[0];
            assert_eq!(room.elements().len(), 1);
            let element = room.elements()[0];
            assert_eq!(element.etype, ElementType::EndPoint);
            assert!(room.rect().offset(-room.rect().left(), -room.rect().top()).contains(element.pos));

            let tile = &dungeon.grid()[element.pos.x as usize][element.pos.y as usize];
            assert_eq!(tile.element(), Some(&element));
            check_dungeon(&generator, &dungeon);
        }
    }

    #[test]
    fn rasterized_rooms_are_floor() {
        let generator = DungeonGenerator::default();
        let dungeon = generator.generate_with_key(MapKey::from(7u64)).unwrap();
        let grid = dungeon.grid();

        for pos in grid.tile_positions() {
            let tile = &grid[pos.x as usize][pos.y as usize];
            let in_room = dungeon.rooms().iter().any(|room| room.rect().contains(pos));
            let in_pass = dungeon.passes().iter()
                .any(|pass| pass.segments().iter().any(|seg| seg.contains(pos)));

            if in_room {
                assert_eq!(tile.tile_type(), TileType::Floor, "room tile {} is not floor", pos);
            } else if in_pass {
                assert_eq!(tile.tile_type(), TileType::Floor, "pass tile {} is not floor", pos);
            } else {
                assert_eq!(tile.tile_type(), TileType::Wall, "tile {} should be a wall", pos);
            }
        }
    }

    #[test]
    fn configuration_from_json() {
        let generator = DungeonGenerator::from_json(r#"{
            "rooms": {"min": 2, "max": 4},
            "pass_width": {"min": 1, "max": 1},
            "element_rates": [
                {"etype": "Rune", "per_map": {"min": 50, "max": 120}, "per_room": {"min": 10, "max": 20}}
            ]
        }"#).unwrap();
        assert_eq!(generator.rooms, Bounds {min: 2, max: 4});
        assert_eq!(generator.room_width, DungeonGenerator::default().room_width);
        assert_eq!(generator.element_rates.len(), 1);

        match DungeonGenerator::from_json(r#"{"room_width": {"min": 10, "max": 3}}"#) {
            Err(ConfigError::EmptyRange {field: "room_width"}) => {},
            other => panic!("expected an empty range error, got {:?}", other),
        }
        match DungeonGenerator::from_json(r#"{"pass_width": {"min": 0, "max": 3}}"#) {
            Err(ConfigError::TooSmall {field: "pass_width", min: 1}) => {},
            other => panic!("expected a too small error, got {:?}", other),
        }
        match DungeonGenerator::from_json(r#"{"rooms": 5}"#) {
            Err(ConfigError::Json(_)) => {},
            other => panic!("expected a JSON error, got {:?}", other),
        }
        assert!(DungeonGenerator::default().validate().is_ok());
    }

    #[test]
    fn parallel_generation_matches_sequential() {
        let generator = DungeonGenerator::default();
        let keys: Vec<MapKey> = (0..8u64).map(MapKey::from).collect();

        let sequential: Vec<_> = keys.iter()
            .map(|&key| generator.generate_with_key(key).map(|d| (d.rooms().to_vec(), d.passes().to_vec())))
            .collect();
        let parallel: Vec<_> = keys.par_iter()
            .map(|&key| generator.generate_with_key(key).map(|d| (d.rooms().to_vec(), d.passes().to_vec())))
            .collect();
        assert_eq!(sequential, parallel);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn generated_dungeons_are_valid(seed in any::<u64>()) {
            let generator = DungeonGenerator {
                rooms: Bounds {min: 3, max: 6},
                room_width: Bounds {min: 5, max: 12},
                room_height: Bounds {min: 5, max: 12},
                room_distance: Bounds {min: 1, max: 12},
                ..DungeonGenerator::default()
            };
            if let Some(dungeon) = generator.generate_with_key(MapKey::from(seed)) {
                check_dungeon(&generator, &dungeon);
            }
        }
    }
}
