/// One of the four edges of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Every side in the order that edges are tested when classifying a crossing
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    /// Returns true if this side is a vertical edge (left or right). A corridor leaving through
    /// a vertical edge travels horizontally.
    pub fn is_vertical(self) -> bool {
        match self {
            Side::Left | Side::Right => true,
            Side::Top | Side::Bottom => false,
        }
    }

    /// Returns true if this side faces towards negative coordinates (left or top)
    pub fn is_leading(self) -> bool {
        match self {
            Side::Left | Side::Top => true,
            Side::Right | Side::Bottom => false,
        }
    }

    /// Returns true if both sides are on the same axis but face in different directions
    pub fn is_opposite(self, other: Side) -> bool {
        self.opposite() == other
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
        }
    }
}

/// Where a line leaves a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// The edge of the rectangle that the line crosses
    pub exit: Side,
    /// The side perpendicular to `exit` that is nearer to the crossing point. Corridors leave
    /// the room somewhere between this side and the middle of the room.
    pub output: Side,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_sides() {
        assert!(Side::Left.is_opposite(Side::Right));
        assert!(Side::Bottom.is_opposite(Side::Top));
        assert!(!Side::Left.is_opposite(Side::Left));
        assert!(!Side::Left.is_opposite(Side::Top));
        for &side in &Side::ALL {
            assert!(side.is_opposite(side.opposite()));
            assert_eq!(side.opposite().opposite(), side);
        }
    }
}
