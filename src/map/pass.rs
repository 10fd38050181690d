use super::{RoomId, TileRect};

/// A corridor connecting exactly two rooms
///
/// The corridor is made up of one to three rectangular segments that already have their final
/// width. A straight corridor has one segment, an L-shaped corridor has two and a Z-shaped
/// corridor has three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    rooms: (RoomId, RoomId),
    segments: Vec<TileRect>,
}

impl Pass {
    pub(crate) fn new(start: RoomId, end: RoomId, segments: Vec<TileRect>) -> Self {
        assert!(start != end, "bug: a pass cannot connect room {} to itself", start);
        assert!((1..=3).contains(&segments.len()),
            "bug: a pass must have between 1 and 3 segments, found {}", segments.len());
        Self {rooms: (start, end), segments}
    }

    /// The two rooms connected by this pass, in the order they were routed
    pub fn rooms(&self) -> (RoomId, RoomId) {
        self.rooms
    }

    pub fn segments(&self) -> &[TileRect] {
        &self.segments
    }

    /// Returns true if this pass is a single straight segment
    pub fn is_straight(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns true if this pass connects the two given rooms, in either order
    pub fn connects(&self, a: RoomId, b: RoomId) -> bool {
        self.rooms == (a, b) || self.rooms == (b, a)
    }

    /// Given one of the rooms connected by this pass, returns the other one
    pub fn other_room(&self, room: RoomId) -> Option<RoomId> {
        match self.rooms {
            (start, end) if start == room => Some(end),
            (start, end) if end == room => Some(start),
            _ => None,
        }
    }

    /// Returns true if any segment of this pass shares a tile with the given area
    pub fn has_intersection(&self, area: TileRect) -> bool {
        self.segments.iter().any(|&seg| seg.has_intersection(area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_rooms() {
        let pass = Pass::new(RoomId(2), RoomId(5), vec![TileRect::new(3, 4, 4, 9)]);
        assert!(pass.is_straight());
        assert!(pass.connects(RoomId(2), RoomId(5)));
        assert!(pass.connects(RoomId(5), RoomId(2)));
        assert!(!pass.connects(RoomId(2), RoomId(3)));
        assert_eq!(pass.other_room(RoomId(5)), Some(RoomId(2)));
        assert_eq!(pass.other_room(RoomId(1)), None);
    }

    #[test]
    fn segment_intersection() {
        let pass = Pass::new(RoomId(0), RoomId(1), vec![
            TileRect::new(0, 0, 5, 1),
            TileRect::new(4, 0, 5, 6),
        ]);
        assert!(!pass.is_straight());
        assert!(pass.has_intersection(TileRect::new(3, 5, 8, 8)));
        assert!(!pass.has_intersection(TileRect::new(0, 1, 4, 5)));
    }
}
