//! Shortest path distances over a grid of passable and blocked tiles
//!
//! Movement is allowed in all eight directions. Orthogonal steps cost 1 and diagonal steps cost
//! the square root of 2. A diagonal step is only allowed when both of the orthogonal tiles it
//! passes between are also passable, so paths never squeeze through the corner between two walls.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::f64::consts::SQRT_2;

use crate::map::TilePos;

/// A tile waiting to be expanded, ordered so that `BinaryHeap` pops the lowest estimated total
/// distance first
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    pos: TilePos,
    /// The distance travelled from the start to reach this tile
    traversed: f64,
    /// The estimated remaining distance to the target (never an overestimate)
    heuristic: f64,
}

impl SearchNode {
    fn total(&self) -> f64 {
        self.traversed + self.heuristic
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour. Among equal totals, prefer the node closer to the
        // target so the search keeps heading towards it.
        other.total().partial_cmp(&self.total()).unwrap_or(Ordering::Equal)
            .then_with(|| other.heuristic.partial_cmp(&self.heuristic).unwrap_or(Ordering::Equal))
    }
}

/// The distance between two tiles on an open grid with the movement rules of this module
pub fn octile_distance(a: TilePos, b: TilePos) -> f64 {
    let (dx, dy) = a.difference(b);
    let (dx, dy) = (dx.abs() as f64, dy.abs() as f64);
    let (short, long) = if dx < dy { (dx, dy) } else { (dy, dx) };
    (long - short) + short * SQRT_2
}

/// Returns the length of the shortest path from `start` to `target`, or None if the target
/// cannot be reached
///
/// The start tile is always considered to be standing room. Every other tile on the path must
/// satisfy `passable`, which is also responsible for rejecting positions outside of the grid.
///
/// At most `max_nodes` tiles are expanded. A search that exceeds this budget gives up and
/// reports the target as unreachable.
pub fn path_distance<F>(start: TilePos, target: TilePos, max_nodes: usize, passable: F) -> Option<f64>
    where F: Fn(TilePos) -> bool,
{
    if start == target {
        return Some(0.0);
    }

    let mut open = BinaryHeap::new();
    let mut best_traversed = HashMap::new();
    let mut closed = HashSet::new();

    best_traversed.insert(start, 0.0);
    open.push(SearchNode {pos: start, traversed: 0.0, heuristic: octile_distance(start, target)});

    let mut expanded = 0;
    while let Some(node) = open.pop() {
        if node.pos == target {
            return Some(node.traversed);
        }

        // A tile may be queued several times, only the first (shortest) visit counts
        if !closed.insert(node.pos) {
            continue;
        }

        expanded += 1;
        if expanded > max_nodes {
            trace!("Gave up searching from {} to {} after {} nodes", start, target, max_nodes);
            return None;
        }

        for (next, cost) in moves(node.pos, &passable) {
            if closed.contains(&next) {
                continue;
            }

            let traversed = node.traversed + cost;
            let improved = best_traversed.get(&next).map_or(true, |&prev| traversed < prev);
            if improved {
                best_traversed.insert(next, traversed);
                open.push(SearchNode {pos: next, traversed, heuristic: octile_distance(next, target)});
            }
        }
    }

    None
}

/// Returns each tile reachable in a single step from the given tile along with the cost of
/// that step
fn moves<'a, F>(pos: TilePos, passable: &'a F) -> impl Iterator<Item=(TilePos, f64)> + 'a
    where F: Fn(TilePos) -> bool,
{
    pos.neighbours().filter_map(move |next| {
        let (dx, dy) = next.difference(pos);
        if !passable(next) {
            return None;
        }

        if dx != 0 && dy != 0 {
            if !passable(pos.offset(dx, 0)) || !passable(pos.offset(0, dy)) {
                return None;
            }
            Some((next, SQRT_2))
        } else {
            Some((next, 1.0))
        }
    })
}
