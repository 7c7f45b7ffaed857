pub const WIDTH: u16 = 40;
pub const HEIGHT: u16 = 25;
pub const CELLS: usize = WIDTH as usize * HEIGHT as usize;

/// First row the snake may occupy. Row 0 holds the status line.
pub const PLAYFIELD_TOP: u16 = 1;

pub type CellIndex = u16;
pub type Coords = (u16, u16);

/// Row-major index of `(x, y)`. Out-of-range coordinates are not checked.
pub fn to_index(x: u16, y: u16) -> CellIndex {
    y * WIDTH + x
}

pub fn from_index(index: CellIndex) -> Coords {
    (index % WIDTH, index / WIDTH)
}

/// The cell one step away from `index` along `(dx, dy)`, or `None` when that
/// step leaves the playfield.
pub fn offset(index: CellIndex, dx: i16, dy: i16) -> Option<CellIndex> {
    let (x, y) = from_index(index);
    let (x, y) = (x as i16 + dx, y as i16 + dy);

    if x < 0 || x >= WIDTH as i16 || y < PLAYFIELD_TOP as i16 || y >= HEIGHT as i16 {
        return None;
    }

    Some(to_index(x as u16, y as u16))
}
