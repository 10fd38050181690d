use std::fmt;

use super::{TileRect, TilePos, Element};

/// Identifies a room by the order in which it was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rectangular room. Rooms never overlap each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    rect: TileRect,
    /// Elements positioned relative to the top left corner of the room
    elements: Vec<Element>,
}

impl Room {
    pub(crate) fn new(id: RoomId, rect: TileRect) -> Self {
        Self {id, rect, elements: Vec::new()}
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The rectangular boundary of the room
    pub fn rect(&self) -> TileRect {
        self.rect
    }

    pub fn midpoint(&self) -> TilePos {
        self.rect.midpoint()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns true if an element already occupies the given room-local position
    pub fn is_occupied(&self, pos: TilePos) -> bool {
        self.elements.iter().any(|e| e.pos == pos)
    }

    /// Converts a room-local position into a position on the map
    pub fn to_map_pos(&self, local: TilePos) -> TilePos {
        self.rect.top_left() + local
    }

    /// Moves the room without changing its size
    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.rect = self.rect.offset(dx, dy);
    }

    pub(crate) fn add_element(&mut self, element: Element) {
        assert!(!self.is_occupied(element.pos),
            "bug: two elements placed at {} in room {}", element.pos, self.id);
        self.elements.push(element);
    }
}
