use std::fmt;
use std::ops::{Add, Sub};

/// Represents the location of a single tile in a 2D grid of tiles
///
/// Coordinates are signed because rooms may be sampled above or to the left of the existing
/// rooms before the layout is shifted back to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self {x, y}
    }

    /// Returns the position offset by the given amounts in each direction
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Swaps the x and y coordinates
    pub fn transpose(self) -> Self {
        Self {x: self.y, y: self.x}
    }

    /// Returns the difference between this position and another position
    /// Returns (delta x, delta y)
    pub fn difference(self, other: Self) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }

    /// Returns the straight line (euclidean) distance between the two positions
    pub fn distance(self, other: Self) -> f32 {
        let (dx, dy) = self.difference(other);
        ((dx * dx + dy * dy) as f32).sqrt()
    }

    /// Returns the eight positions surrounding this position. The four orthogonal positions
    /// come first.
    pub fn neighbours(self) -> impl Iterator<Item=TilePos> {
        const OFFSETS: [(i32, i32); 8] = [
            (0, -1), (1, 0), (0, 1), (-1, 0),
            (1, -1), (1, 1), (-1, 1), (-1, -1),
        ];
        OFFSETS.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for TilePos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

// Subtraction makes sense to implement since you can have points relative to other points
impl Sub for TilePos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
