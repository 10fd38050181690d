use std::fmt;

use serde::{Serialize, Deserialize};

use crate::generator::Bounds;

use super::TilePos;

/// The kinds of gameplay elements that can be placed inside rooms
///
/// Each variant has a stable byte code that renderers and save files can rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ElementType {
    StartPoint = 0x00,

    Chest1 = 0x10,
    Chest2 = 0x11,
    Chest3 = 0x12,
    Mimic = 0x13,

    Mirror = 0x20,

    DebuffTrap = 0x32,
    EnemyBuffTrap = 0x33,
    StatusTrap = 0x34,

    HpCrystal = 0x40,
    MpCrystal = 0x41,
    HpMpCrystal = 0x42,
    FreezeCrystal = 0x43,

    DefenseStatue = 0x50,

    RandomPortal = 0x60,
    SafeRoomPortal = 0x61,

    Rune = 0x70,

    Lever = 0xf0,
    FakeLever = 0xf1,

    EndPoint = 0xff,
}

impl ElementType {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true if a character can walk over a tile containing this element
    ///
    /// Chests, mirrors, crystals and statues are solid objects. Everything else is something
    /// that is stepped on or activated from the tile itself.
    pub fn is_passable(self) -> bool {
        use ElementType::*;
        match self {
            Chest1 | Chest2 | Chest3 | Mimic | Mirror | HpCrystal | MpCrystal | HpMpCrystal |
            FreezeCrystal | DefenseStatue => false,

            StartPoint | DebuffTrap | EnemyBuffTrap | StatusTrap | RandomPortal | SafeRoomPortal |
            Rune | Lever | FakeLever | EndPoint => true,
        }
    }

    /// A single character used when printing a map to the terminal
    pub fn glyph(self) -> char {
        use ElementType::*;
        match self {
            StartPoint => 'S',
            EndPoint => 'E',
            Chest1 | Chest2 | Chest3 => 'C',
            Mimic => 'M',
            Mirror => 'm',
            DebuffTrap | EnemyBuffTrap | StatusTrap => '^',
            HpCrystal | MpCrystal | HpMpCrystal | FreezeCrystal => '*',
            DefenseStatue => '&',
            RandomPortal | SafeRoomPortal => 'O',
            Rune => 'R',
            Lever | FakeLever => '/',
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// An element placed in a room, positioned relative to the room's top left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub etype: ElementType,
    pub pos: TilePos,
}

impl Element {
    pub fn new(etype: ElementType, pos: TilePos) -> Self {
        Self {etype, pos}
    }

    pub fn is_passable(self) -> bool {
        self.etype.is_passable()
    }
}

/// How often an element type should appear
///
/// Both rates are percentages. The per-map rate may exceed 100 to guarantee more than one
/// placement (250 means two placements and a 50% chance of a third). The per-room rate is the
/// chance that a visited room accepts the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRate {
    pub etype: ElementType,
    pub per_map: Bounds<u32>,
    pub per_room: Bounds<u32>,
}

impl ElementRate {
    pub fn new(etype: ElementType, per_map: Bounds<u32>, per_room: Bounds<u32>) -> Self {
        Self {etype, per_map, per_room}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_codes() {
        assert_eq!(ElementType::StartPoint.code(), 0x00);
        assert_eq!(ElementType::Mimic.code(), 0x13);
        assert_eq!(ElementType::StatusTrap.code(), 0x34);
        assert_eq!(ElementType::FakeLever.code(), 0xf1);
        assert_eq!(ElementType::EndPoint.code(), 0xff);
    }

    #[test]
    fn rate_from_json() {
        let rate: ElementRate = serde_json::from_str(r#"{
            "etype": "Chest2",
            "per_map": {"min": 100, "max": 250},
            "per_room": {"min": 20, "max": 40}
        }"#).unwrap();
        assert_eq!(rate, ElementRate::new(
            ElementType::Chest2,
            Bounds {min: 100, max: 250},
            Bounds {min: 20, max: 40},
        ));
    }
}
