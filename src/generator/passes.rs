use std::cmp;

use rand::{rngs::StdRng, Rng};

use super::{DungeonGenerator, gen_between};
use super::rasterize::map_extent;
use crate::map::*;

impl DungeonGenerator {
    /// Connects every pair of near rooms with a pass, skipping pairs whose pass would run into a
    /// room or another pass
    pub(in super) fn generate_passes(&self, rng: &mut StdRng, rooms: &[Room]) -> Vec<Pass> {
        let extent = map_extent(rooms);

        let mut passes: Vec<Pass> = Vec::new();
        for room in rooms {
            let near_rooms = rooms.iter()
                .filter(|other| other.id() != room.id() && self.is_near(room.rect(), other.rect()));

            for other in near_rooms {
                if passes.iter().any(|pass| pass.connects(room.id(), other.id())) {
                    continue;
                }

                let mut segments = route(rng, room.rect(), other.rect());
                for seg in &mut segments {
                    *seg = seg.clamp_tiles(extent.x, extent.y);
                }
                self.widen(rng, &mut segments, room.midpoint(), other.midpoint());

                if is_obstructed(&segments, rooms, &passes) {
                    trace!("Pass between room {} and room {} is obstructed", room.id(), other.id());
                    continue;
                }

                passes.push(Pass::new(room.id(), other.id(), segments));
            }
        }

        passes
    }

    /// Grows each segment of a pass perpendicular to its direction until the pass has a
    /// randomly chosen width
    fn widen(&self, rng: &mut StdRng, segments: &mut [TileRect], start_mid: TilePos, end_mid: TilePos) {
        let extra = self.pass_width.gen(rng) - 1;
        if extra <= 0 {
            return;
        }
        // Decides which side of a segment gets the extra tile when the width is uneven
        let side = rng.gen_range(0, 2) == 1;

        // Passes whose first segment runs horizontally are widened as their mirror image
        if segments[0].width() == 1 {
            widen_vertical(segments, extra, side, start_mid, end_mid);
        } else {
            for seg in segments.iter_mut() {
                *seg = seg.transpose();
            }
            widen_vertical(segments, extra, side, start_mid.transpose(), end_mid.transpose());
            for seg in segments.iter_mut() {
                *seg = seg.transpose();
            }
        }
    }
}

/// Computes the segments of a pass between two rooms, each exactly one tile wide
fn route(rng: &mut StdRng, start: TileRect, end: TileRect) -> Vec<TileRect> {
    // Rooms that share enough columns get a straight vertical pass
    if end.right() > start.left() + 2 && end.left() < start.right() - 2 {
        let x = gen_between(rng,
            cmp::max(start.left(), end.left()) + 1,
            cmp::min(start.right(), end.right()) - 1);

        let seg = if start.bottom() < end.top() {
            TileRect::spanning(TilePos::new(x, start.bottom()), TilePos::new(x, end.top() - 1))
        } else {
            TileRect::spanning(TilePos::new(x, start.top() - 1), TilePos::new(x, end.bottom()))
        };
        return vec![seg];
    }

    // Rooms that share enough rows get a straight horizontal pass
    if end.bottom() > start.top() + 2 && end.top() < start.bottom() - 2 {
        let y = gen_between(rng,
            cmp::max(start.top(), end.top()) + 1,
            cmp::min(start.bottom(), end.bottom()) - 1);

        let seg = if start.right() < end.left() {
            TileRect::spanning(TilePos::new(start.right(), y), TilePos::new(end.left() - 1, y))
        } else {
            TileRect::spanning(TilePos::new(start.left() - 1, y), TilePos::new(end.right(), y))
        };
        return vec![seg];
    }

    let line = Segment::new(start.midpoint(), end.midpoint());
    let start_crossing = start.crossing(line)
        .expect("bug: line between room midpoints never left the first room");
    let end_crossing = end.crossing(line)
        .expect("bug: line between room midpoints never left the second room");

    let output = exit_offset(rng, start, start_crossing);
    let input = exit_offset(rng, end, end_crossing);

    if start_crossing.exit.is_opposite(end_crossing.exit) {
        // Z-shaped: leave the first room, turn at the bridge, turn again into the second room
        let bridge = bridge_offset(rng, start, end, start_crossing.exit);
        let horizontal = start_crossing.exit.is_vertical();
        let pos = |along, across| if horizontal {
            TilePos::new(along, across)
        } else {
            TilePos::new(across, along)
        };

        vec![
            TileRect::spanning(pos(exit_tile(start, start_crossing.exit), output), pos(bridge, output)),
            TileRect::spanning(pos(bridge, output), pos(bridge, input)),
            TileRect::spanning(pos(bridge, input), pos(exit_tile(end, end_crossing.exit), input)),
        ]

    } else {
        // L-shaped: each room sends out one segment and they meet at a single corner
        let leg = |rect: TileRect, exit: Side, own: i32, other: i32| {
            let (from, to) = (exit_tile(rect, exit), other);
            if exit.is_vertical() {
                TileRect::spanning(TilePos::new(from, own), TilePos::new(to, own))
            } else {
                TileRect::spanning(TilePos::new(own, from), TilePos::new(own, to))
            }
        };

        vec![
            leg(start, start_crossing.exit, output, input),
            leg(end, end_crossing.exit, input, output),
        ]
    }
}

/// The coordinate just outside of the given side of the room
fn exit_tile(rect: TileRect, side: Side) -> i32 {
    if side.is_leading() {
        rect.side_pos(side) - 1
    } else {
        rect.side_pos(side)
    }
}

/// Picks where along its exit side a pass leaves the room: somewhere between the middle of the
/// room and the side nearest to where the line between the rooms crosses
fn exit_offset(rng: &mut StdRng, rect: TileRect, crossing: Crossing) -> i32 {
    let inset = match crossing.output {
        Side::Left => rect.left() + 1,
        Side::Top => rect.top() + 1,
        Side::Right => rect.right() - 1,
        Side::Bottom => rect.bottom() - 1,
    };

    let mid = rect.midpoint();
    let middle = if crossing.exit.is_vertical() { mid.y } else { mid.x };
    gen_between(rng, inset, middle)
}

/// Picks the coordinate where a Z-shaped pass turns: between one and two thirds of the way
/// across the gap between the two rooms
///
/// In a gap of one or two tiles the bridge runs right alongside a room. Widening it then pushes
/// it into that room and the whole pass is rejected as obstructed, which can leave a room with
/// only one near neighbour unconnected.
fn bridge_offset(rng: &mut StdRng, start: TileRect, end: TileRect, exit: Side) -> i32 {
    let (near, far) = if exit.is_leading() { (end, start) } else { (start, end) };
    let (a, b) = if exit.is_vertical() {
        (near.right(), far.left())
    } else {
        (near.bottom(), far.top())
    };

    let gap = (b - a) as f32;
    gen_between(rng, (a as f32 + gap / 3.0) as i32, (a as f32 + gap * 2.0 / 3.0) as i32)
}

/// Widens a pass whose first segment runs vertically by `extra` tiles
///
/// `side` decides which side gets the extra tile when `extra` is odd.
fn widen_vertical(segments: &mut [TileRect], extra: i32, side: bool, start_mid: TilePos, end_mid: TilePos) {
    let half = extra / 2;
    let more = |cond: bool| if cond { extra % 2 } else { 0 };

    match segments.len() {
        1 => {
            segments[0] = segments[0].expand(half + more(!side), 0, half + more(side), 0);
        },

        2 => {
            segments[0] = segments[0].expand(
                half + more(start_mid.x > end_mid.x),
                0,
                half + more(start_mid.x < end_mid.x),
                0,
            );
            segments[1] = segments[1].expand(
                0,
                half + more(start_mid.y > end_mid.y),
                0,
                half + more(start_mid.y < end_mid.y),
            );
        },

        3 => {
            // The end segments only grow along their length at the end that meets the bridge
            let (first, last) = (segments[0], segments[2]);
            let bridge_end = |cond: bool, remainder: bool| if cond { half + more(remainder) } else { 0 };

            segments[0] = first.expand(
                half + more(first.left() > last.left()),
                bridge_end(first.top() > last.top(), !side),
                half + more(first.right() < last.right()),
                bridge_end(first.top() < last.top(), side),
            );
            segments[1] = segments[1].expand(0, half + more(!side), 0, half + more(side));
            segments[2] = last.expand(
                half + more(first.left() < last.left()),
                bridge_end(first.top() < last.top(), !side),
                half + more(first.right() > last.right()),
                bridge_end(first.top() > last.top(), side),
            );
        },

        n => unreachable!("bug: a pass cannot have {} segments", n),
    }
}

/// Returns true if any of the segments overlaps a room or an existing pass
fn is_obstructed(segments: &[TileRect], rooms: &[Room], passes: &[Pass]) -> bool {
    segments.iter().any(|&seg| {
        rooms.iter().any(|room| room.rect().has_intersection(seg)) ||
        passes.iter().any(|pass| pass.has_intersection(seg))
    })
}
