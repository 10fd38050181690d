use std::fmt;
use std::ops::{Index, IndexMut};

use crate::search;

use super::{Tile, TileType, TilePos, TileRect};

/// Represents a 2D grid of tiles, indexed as `grid[x][y]`
#[derive(Clone, PartialEq, Eq)]
pub struct TileGrid(Vec<Vec<Tile>>);

impl Index<usize> for TileGrid {
    type Output = [Tile];

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl IndexMut<usize> for TileGrid {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.index_mut(index)
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use colored::*;

        for y in 0..self.height() {
            for x in 0..self.width() {
                let tile = &self[x][y];
                write!(f, "{}", match (tile.tile_type(), tile.element()) {
                    (_, Some(element)) if element.is_passable() => {
                        element.etype.to_string().black().on_yellow()
                    },
                    (_, Some(element)) => element.etype.to_string().white().on_red(),
                    (TileType::Wall, None) => " ".on_black(),
                    (_, None) => " ".on_blue(),
                })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl TileGrid {
    /// Create a new TileGrid of walls with the given number of columns and rows
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Cannot create a grid with zero rows or zero columns");
        TileGrid(vec![vec![Tile::wall(); height]; width])
    }

    /// Returns the number of columns in this grid
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of rows in this grid
    pub fn height(&self) -> usize {
        self[0].len()
    }

    /// Returns the tile at the given position, or None if the position is outside of the grid
    pub fn get(&self, pos: TilePos) -> Option<&Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.0.get(pos.x as usize).and_then(|col| col.get(pos.y as usize))
    }

    /// Returns the tile at the given position, or None if the position is outside of the grid
    pub fn get_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.0.get_mut(pos.x as usize).and_then(|col| col.get_mut(pos.y as usize))
    }

    /// Returns true if the given position is inside the grid and can be walked over
    pub fn is_passable(&self, pos: TilePos) -> bool {
        self.get(pos).map(|tile| tile.is_passable()).unwrap_or(false)
    }

    /// Turns every tile of the given area into floor. Parts of the area outside of the grid
    /// are ignored.
    pub fn paint_floor(&mut self, area: TileRect) {
        for pos in area.tile_positions() {
            if let Some(tile) = self.get_mut(pos) {
                tile.make_floor();
            }
        }
    }

    /// Returns an iterator over the positions of all tiles contained within this grid
    pub fn tile_positions(&self) -> impl Iterator<Item=TilePos> {
        let height = self.height() as i32;
        (0..self.width() as i32).flat_map(move |x| (0..height).map(move |y| TilePos::new(x, y)))
    }

    /// Returns the length of the shortest walkable path between the two positions, or None if
    /// there is no such path within the given search budget
    pub fn path_distance(&self, start: TilePos, target: TilePos, max_nodes: usize) -> Option<f64> {
        search::path_distance(start, target, max_nodes, |pos| self.is_passable(pos))
    }
}
