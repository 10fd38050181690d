use rand::rngs::StdRng;

use super::{DungeonGenerator, RanOutOfAttempts, gen_between};
use super::attempts::attempt;
use crate::map::*;

impl DungeonGenerator {
    pub(in super) fn generate_rooms(&self, rng: &mut StdRng) -> Result<Vec<Room>, RanOutOfAttempts> {
        let nrooms = self.rooms.gen(rng);

        let mut rooms: Vec<Room> = Vec::with_capacity(nrooms);
        while rooms.len() < nrooms {
            let rect = if rooms.is_empty() {
                let width = self.room_width.gen(rng);
                let height = self.room_height.gen(rng);
                TileRect::with_size(TilePos::new(0, 0), width, height)

            } else {
                let area = self.generation_area(&rooms);
                attempt(self.attempts, || self.random_room(rng, area, &rooms))?
            };

            rooms.push(Room::new(RoomId(rooms.len()), rect));
            normalize_rooms(&mut rooms);
        }

        Ok(rooms)
    }

    /// Returns true if the two rooms are close enough to be connected by a pass
    pub(in super) fn is_near(&self, a: TileRect, b: TileRect) -> bool {
        a.distance(b) <= self.room_distance.max as f32
    }

    /// The area that the top left corner of a new room may be placed in
    ///
    /// Any room placed further away than this could not possibly be near any existing room.
    fn generation_area(&self, rooms: &[Room]) -> TileRect {
        let occupied = rooms.iter()
            .map(|room| room.rect())
            .fold(rooms[0].rect(), TileRect::union);

        occupied
            .expand_all(self.room_distance.max)
            .expand(self.room_width.max, self.room_height.max, 0, 0)
    }

    // Generates and validates a random room for placement on the map
    // Only returns the room if it could be placed
    fn random_room(&self, rng: &mut StdRng, area: TileRect, rooms: &[Room]) -> Option<TileRect> {
        let left = gen_between(rng, area.left(), area.right());
        let top = gen_between(rng, area.top(), area.bottom());
        let width = self.room_width.gen(rng);
        let height = self.room_height.gen(rng);
        let rect = TileRect::with_size(TilePos::new(left, top), width, height);

        let mut near = 0;
        for room in rooms {
            let other = room.rect();
            if rect.has_intersection(other) {
                return None;
            }

            let distance = rect.distance(other);
            if distance < self.room_distance.min as f32 {
                return None;
            }
            if self.is_near(rect, other) {
                near += 1;
            }
        }

        // Once there are a few rooms, a new room must be near at least two of them. Otherwise
        // rooms tend to form long chains that can only be reached one way.
        let required = if rooms.len() < 3 { 1 } else { 2 };
        if near < required {
            return None;
        }

        Some(rect)
    }
}

/// Shifts every room so that the smallest left and top coordinates are both zero
fn normalize_rooms(rooms: &mut [Room]) {
    let min_x = rooms.iter().map(|room| room.rect().left()).min().unwrap_or(0);
    let min_y = rooms.iter().map(|room| room.rect().top()).min().unwrap_or(0);
    if min_x == 0 && min_y == 0 {
        return;
    }

    for room in rooms {
        room.translate(-min_x, -min_y);
    }
}
