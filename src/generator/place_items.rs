use rand::{rngs::StdRng, Rng};

use super::{DungeonGenerator, RanOutOfAttempts, shuffled_indices};
use super::attempts::attempt;
use crate::map::*;

impl DungeonGenerator {
    /// Scatters the configured elements across the rooms. Returns the number of elements placed.
    pub(in super) fn place_elements(&self, rng: &mut StdRng, rooms: &mut [Room]) -> usize {
        if rooms.is_empty() {
            return 0;
        }

        let mut placed = 0;
        for rate in &self.element_rates {
            placed += self.place_element_type(rng, rooms, rate);
        }
        placed
    }

    fn place_element_type(&self, rng: &mut StdRng, rooms: &mut [Room], rate: &ElementRate) -> usize {
        // Rates of 100% or more guarantee some placements, the remainder is a chance of one more
        let map_rate = rate.per_map.gen(rng);
        let mut count = map_rate / 100;
        if rng.gen_range(0, 100) < map_rate % 100 {
            count += 1;
        }

        // Rooms are offered the element in a random order that continues from one placement to
        // the next
        let order = shuffled_indices(rng, rooms.len());
        let mut visit = 0;

        let mut placed = 0;
        for _ in 0..count {
            let room_rate = rate.per_room.gen(rng);
            let accepted = attempt(self.attempts, || {
                if rng.gen_range(0, 100) < room_rate {
                    Some(())
                } else {
                    visit += 1;
                    None
                }
            });
            if let Err(RanOutOfAttempts) = accepted {
                debug!("No room accepted a {:?} element after {} attempts", rate.etype, self.attempts);
                continue;
            }

            let room = &mut rooms[order[visit % order.len()]];
            let pos = self.random_free_pos(rng, room);
            room.add_element(Element::new(rate.etype, pos));
            placed += 1;
        }

        placed
    }

    /// Picks a random room-local position that no element occupies yet
    fn random_free_pos(&self, rng: &mut StdRng, room: &Room) -> TilePos {
        let rect = room.rect();
        let pos = attempt(self.attempts, || {
            let pos = TilePos::new(rng.gen_range(0, rect.width()), rng.gen_range(0, rect.height()));
            if room.is_occupied(pos) { None } else { Some(pos) }
        });

        match pos {
            Ok(pos) => pos,
            Err(RanOutOfAttempts) => panic!(
                "bug: could not find a free tile in room {} after {} attempts ({} elements in {} tiles)",
                room.id(), self.attempts, room.elements().len(), rect.area(),
            ),
        }
    }
}
