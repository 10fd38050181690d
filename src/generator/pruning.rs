use super::DungeonGenerator;
use super::rasterize::floor_plan;
use crate::map::*;

impl DungeonGenerator {
    /// Removes passes with bends that do not shorten the trip between their rooms by much
    ///
    /// A pass is only removed if its rooms are still reachable from each other without it.
    /// Straight passes are always kept. Returns the passes that were removed.
    pub(in super) fn prune_passes(&self, rooms: &[Room], passes: &mut Vec<Pass>) -> Vec<Pass> {
        let mut removed = Vec::new();

        let mut i = 0;
        while i < passes.len() {
            if passes[i].is_straight() {
                i += 1;
                continue;
            }

            let (start, end) = passes[i].rooms();
            let start = rooms[start.index()].midpoint();
            let end = rooms[end.index()].midpoint();

            let base_path = floor_plan(rooms, passes, None)
                .path_distance(start, end, self.path_search_nodes);
            let long_path = base_path.and_then(|_| {
                floor_plan(rooms, passes, Some(i)).path_distance(start, end, self.path_search_nodes)
            });

            match (base_path, long_path) {
                (Some(base), Some(long)) if self.is_redundant(base, long) => {
                    trace!("Removing pass between rooms {:?}: {:.2} without it, {:.2} with it",
                        passes[i].rooms(), long, base);
                    removed.push(passes.remove(i));
                },
                _ => i += 1,
            }
        }

        removed
    }

    /// Returns true if going around a pass (`long`) is not meaningfully longer than the shortest
    /// path that may use it (`base`)
    fn is_redundant(&self, base: f64, long: f64) -> bool {
        base + base * self.long_path_difference as f64 / 100.0 > long
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::generator::MapKey;
    use crate::search;

    /// Two rooms connected by a straight pass and by a pass that takes a detour
    fn rooms_and_passes() -> (Vec<Room>, Vec<Pass>) {
        let rooms = vec![
            Room::new(RoomId(0), TileRect::new(0, 0, 6, 6)),
            Room::new(RoomId(1), TileRect::new(10, 0, 16, 6)),
        ];
        let passes = vec![
            Pass::new(RoomId(0), RoomId(1), vec![TileRect::new(6, 2, 10, 3)]),
            Pass::new(RoomId(0), RoomId(1), vec![
                TileRect::new(2, 6, 3, 9),
                TileRect::new(2, 8, 14, 9),
                TileRect::new(13, 6, 14, 9),
            ]),
        ];
        (rooms, passes)
    }

    #[test]
    fn detour_is_removed() {
        let generator = DungeonGenerator::default();
        let (rooms, mut passes) = rooms_and_passes();
        let removed = generator.prune_passes(&rooms, &mut passes);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].segments().len(), 3);
        assert_eq!(passes.len(), 1);
        assert!(passes[0].is_straight());
    }

    #[test]
    fn only_connection_is_kept() {
        let generator = DungeonGenerator::default();
        let (rooms, mut passes) = rooms_and_passes();
        passes.remove(0);
        let removed = generator.prune_passes(&rooms, &mut passes);
        assert!(removed.is_empty());
        assert_eq!(passes.len(), 1);
    }

    #[test]
    fn tolerance_of_zero_keeps_equal_routes() {
        let generator = DungeonGenerator {
            long_path_difference: 0,
            ..DungeonGenerator::default()
        };
        assert!(!generator.is_redundant(10.0, 10.0));
        assert!(generator.is_redundant(10.0, 9.5));

        let generator = DungeonGenerator::default();
        assert!(generator.is_redundant(10.0, 14.9));
        assert!(!generator.is_redundant(10.0, 15.0));
    }

    #[test]
    fn pruning_preserves_connectivity() {
        let generator = DungeonGenerator::default();
        for seed in 0..4u64 {
            let key = MapKey::from(seed);
            let mut rng = key.to_rng();
            let rooms = match generator.generate_rooms(&mut rng) {
                Ok(rooms) => rooms,
                Err(_) => continue,
            };
            let mut passes = generator.generate_passes(&mut rng, &rooms);
            let removed = generator.prune_passes(&rooms, &mut passes);

            let grid = floor_plan(&rooms, &passes, None);
            for pass in &removed {
                let (a, b) = pass.rooms();
                let start = rooms[a.index()].midpoint();
                let end = rooms[b.index()].midpoint();
                let reachable = search::path_distance(start, end, 1_000_000, |pos| grid.is_passable(pos));
                assert!(reachable.is_some(), "rooms {} and {} were disconnected", a, b);
            }
        }
    }
}
