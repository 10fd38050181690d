use super::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// A tile that cannot be traversed
    Wall,
    /// A tile inside a room or a passage
    Floor,
    /// A tile holding an element. Whether it can be traversed depends on the element.
    Element,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    ttype: TileType,
    element: Option<Element>,
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}

impl Tile {
    /// Creates a new wall tile
    pub fn wall() -> Self {
        Self {ttype: TileType::Wall, element: None}
    }

    pub fn tile_type(&self) -> TileType {
        self.ttype
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Returns true if a character can walk over this tile
    pub fn is_passable(&self) -> bool {
        match self.element {
            Some(element) => element.is_passable(),
            None => self.ttype != TileType::Wall,
        }
    }

    /// Turns this tile into floor, unless it already holds an element
    pub fn make_floor(&mut self) {
        if self.element.is_none() {
            self.ttype = TileType::Floor;
        }
    }

    /// Places the given element on this tile, replacing any element already here
    pub fn place_element(&mut self, element: Element) {
        self.ttype = TileType::Element;
        self.element = Some(element);
    }
}
