use std::cmp;

use super::{TilePos, Segment, Side, Crossing};

/// A 2D span of tiles
///
/// The rectangle covers columns `left..right` and rows `top..bottom`. The right and bottom
/// coordinates are therefore one past the last tile inside the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl TileRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {left, top, right, bottom}
    }

    /// Create a new rectangle with the given top left and dimensions
    pub fn with_size(top_left: TilePos, width: i32, height: i32) -> Self {
        Self::new(top_left.x, top_left.y, top_left.x + width, top_left.y + height)
    }

    /// Returns the smallest rectangle containing the tiles at both positions
    pub fn spanning(a: TilePos, b: TilePos) -> Self {
        Self::new(
            cmp::min(a.x, b.x),
            cmp::min(a.y, b.y),
            cmp::max(a.x, b.x) + 1,
            cmp::max(a.y, b.y) + 1,
        )
    }

    pub fn left(self) -> i32 {
        self.left
    }

    pub fn top(self) -> i32 {
        self.top
    }

    pub fn right(self) -> i32 {
        self.right
    }

    pub fn bottom(self) -> i32 {
        self.bottom
    }

    pub fn width(self) -> i32 {
        self.right - self.left
    }

    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Returns the area of this rectangle in tiles^2
    pub fn area(self) -> i32 {
        self.width() * self.height()
    }

    pub fn top_left(self) -> TilePos {
        TilePos::new(self.left, self.top)
    }

    /// Returns the four corner points of this rectangle: top left, top right, bottom right,
    /// bottom left
    pub fn corners(self) -> [TilePos; 4] {
        [
            TilePos::new(self.left, self.top),
            TilePos::new(self.right, self.top),
            TilePos::new(self.right, self.bottom),
            TilePos::new(self.left, self.bottom),
        ]
    }

    /// Returns the tile position that is considered the "center" of this rectangle.
    ///
    /// If the exact center is not a valid tile position (i.e. it is between 4 tiles), then this
    /// will bias towards the bottom right of the center tile.
    pub fn midpoint(self) -> TilePos {
        TilePos::new(self.left + self.width() / 2, self.top + self.height() / 2)
    }

    /// Returns the coordinate of the given side of this rectangle
    pub fn side_pos(self, side: Side) -> i32 {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// Returns the line segment running along the given side
    pub fn edge(self, side: Side) -> Segment {
        let [tl, tr, br, bl] = self.corners();
        match side {
            Side::Left => Segment::new(tl, bl),
            Side::Top => Segment::new(tl, tr),
            Side::Right => Segment::new(tr, br),
            Side::Bottom => Segment::new(bl, br),
        }
    }

    /// Returns the smallest rectangle containing both rectangles
    pub fn union(self, other: Self) -> Self {
        Self::new(
            cmp::min(self.left, other.left),
            cmp::min(self.top, other.top),
            cmp::max(self.right, other.right),
            cmp::max(self.bottom, other.bottom),
        )
    }

    /// Returns true if the two rectangles share at least one tile
    pub fn has_intersection(self, other: Self) -> bool {
        self.left < other.right && other.left < self.right &&
        self.top < other.bottom && other.top < self.bottom
    }

    pub fn contains(self, pos: TilePos) -> bool {
        self.left <= pos.x && pos.x < self.right && self.top <= pos.y && pos.y < self.bottom
    }

    /// Moves each side outwards by the given amount. Negative amounts move the side inwards.
    pub fn expand(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(self.left - left, self.top - top, self.right + right, self.bottom + bottom)
    }

    /// Expands the rectangle to have an additional margin on all sides
    pub fn expand_all(self, margin: i32) -> Self {
        self.expand(margin, margin, margin, margin)
    }

    /// Translates the rectangle without changing its size
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Mirrors the rectangle across the diagonal, swapping its x and y coordinates
    pub fn transpose(self) -> Self {
        Self::new(self.top, self.left, self.bottom, self.right)
    }

    /// Restricts the tiles covered by this rectangle to columns `0..=max_x` and rows
    /// `0..=max_y`. Always covers at least one tile.
    pub fn clamp_tiles(self, max_x: i32, max_y: i32) -> Self {
        let left = self.left.clamp(0, max_x);
        let top = self.top.clamp(0, max_y);
        let right = (self.right - 1).clamp(0, max_x) + 1;
        let bottom = (self.bottom - 1).clamp(0, max_y) + 1;
        Self::new(left, top, cmp::max(left + 1, right), cmp::max(top + 1, bottom))
    }

    /// Returns the distance between this rectangle and another rectangle
    ///
    /// When the rectangles overlap by more than two tiles along one axis, this is the gap between
    /// their nearest edges on the other axis. Otherwise it is the shortest straight line distance
    /// between any of their corners.
    pub fn distance(self, other: Self) -> f32 {
        if other.right > self.left + 2 && other.left < self.right - 2 {
            cmp::min((self.top - other.bottom).abs(), (other.top - self.bottom).abs()) as f32

        } else if other.bottom > self.top + 2 && other.top < self.bottom - 2 {
            cmp::min((self.left - other.right).abs(), (other.left - self.right).abs()) as f32

        } else {
            let others = other.corners();
            self.corners().iter()
                .flat_map(|&a| others.iter().map(move |&b| a.distance(b)))
                .fold(f32::INFINITY, f32::min)
        }
    }

    /// Finds where the given line leaves this rectangle
    ///
    /// Edges are tested in the order left, top, right, bottom and the first one crossed by the
    /// line is the exit side.
    pub fn crossing(self, line: Segment) -> Option<Crossing> {
        let mid = self.midpoint();
        Side::ALL.iter()
            .find_map(|&side| self.edge(side).intersection(line).map(|point| (side, point)))
            .map(|(exit, (px, py))| {
                let output = if exit.is_vertical() {
                    if (mid.y as f64) > py { Side::Top } else { Side::Bottom }
                } else {
                    if (mid.x as f64) > px { Side::Left } else { Side::Right }
                };

                Crossing {exit, output}
            })
    }

    /// Returns an iterator over the positions of all tiles contained within this rectangle
    pub fn tile_positions(self) -> impl Iterator<Item=TilePos> {
        (self.top..self.bottom)
            .flat_map(move |y| (self.left..self.right).map(move |x| TilePos::new(x, y)))
    }
}
