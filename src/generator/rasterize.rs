use crate::map::*;

/// The largest right and bottom coordinates of all the rooms
pub(in super) fn map_extent(rooms: &[Room]) -> TilePos {
    rooms.iter().fold(TilePos::new(0, 0), |extent, room| {
        let rect = room.rect();
        TilePos::new(extent.x.max(rect.right()), extent.y.max(rect.bottom()))
    })
}

/// Paints the rooms and passes onto a grid of walls, leaving out the pass at index `exclude`
///
/// The grid covers every room and has one extra column and row of walls beyond the right and
/// bottom sides of the rooms.
pub(in super) fn floor_plan(rooms: &[Room], passes: &[Pass], exclude: Option<usize>) -> TileGrid {
    let extent = map_extent(rooms);
    let mut grid = TileGrid::new(extent.x as usize + 1, extent.y as usize + 1);

    for room in rooms {
        grid.paint_floor(room.rect());
    }

    let painted = passes.iter().enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .flat_map(|(_, pass)| pass.segments());
    for &seg in painted {
        grid.paint_floor(seg);
    }

    grid
}

/// Produces the final tile grid with every room, pass and element
pub(in super) fn rasterize(rooms: &[Room], passes: &[Pass]) -> TileGrid {
    let mut grid = floor_plan(rooms, passes, None);

    for room in rooms {
        for &element in room.elements() {
            let pos = room.to_map_pos(element.pos);
            grid.get_mut(pos)
                .unwrap_or_else(|| unreachable!("bug: element at {} is outside of the grid", pos))
                .place_element(element);
        }
    }

    grid
}
