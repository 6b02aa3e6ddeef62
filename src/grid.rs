use rand::Rng;

/// A grid cell. Coordinates are 1-indexed: `1 <= x, y <= grid_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Raw step, no wrapping. The result may lie outside the grid.
    pub fn step(&self, delta: PosDelta) -> Position {
        Position {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

pub fn random_position(grid_size: i32, rng: &mut impl Rng) -> Position {
    Position {
        x: rng.gen_range(1..=grid_size),
        y: rng.gen_range(1..=grid_size),
    }
}

/// Brings a position that stepped off the board back onto the opposite edge.
///
/// Only the first out-of-bounds axis is corrected, checked in the order
/// x < 1, x > grid_size, y < 1, y > grid_size. A single directional step only
/// ever leaves the board along one axis, so in play this is never visible.
pub fn wrap_boundary(pos: Position, grid_size: i32) -> Position {
    if pos.x < 1 {
        return Position { x: grid_size, ..pos };
    }
    if pos.x > grid_size {
        return Position { x: 1, ..pos };
    }
    if pos.y < 1 {
        return Position { y: grid_size, ..pos };
    }
    if pos.y > grid_size {
        return Position { y: 1, ..pos };
    }
    pos
}
