mod tile_pos;
mod tile_rect;
mod segment;
mod side;
mod tile;
mod grid;
mod room;
mod pass;
mod element;

pub use self::tile_pos::*;
pub use self::tile_rect::*;
pub use self::segment::*;
pub use self::side::*;
pub use self::tile::*;
pub use self::grid::*;
pub use self::room::*;
pub use self::pass::*;
pub use self::element::*;
