use super::TilePos;

/// A line segment between two tile positions (both ends included)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: TilePos,
    pub end: TilePos,
}

impl Segment {
    pub fn new(start: TilePos, end: TilePos) -> Self {
        Self {start, end}
    }

    /// Returns the point where the two segments cross, if they do
    ///
    /// Parallel segments (including overlapping collinear segments) never have a single crossing
    /// point and always return None.
    pub fn intersection(self, other: Segment) -> Option<(f64, f64)> {
        let (x1, y1) = (self.start.x as f64, self.start.y as f64);
        let (x2, y2) = (self.end.x as f64, self.end.y as f64);
        let (x3, y3) = (other.start.x as f64, other.start.y as f64);
        let (x4, y4) = (other.end.x as f64, other.end.y as f64);

        let det = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if det == 0.0 {
            return None;
        }

        // Position of the crossing along each segment, in 0.0..=1.0 if it lies on the segment
        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / det;
        let u = ((x1 - x3) * (y1 - y2) - (y1 - y3) * (x1 - x2)) / det;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        Some((x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    }
}
