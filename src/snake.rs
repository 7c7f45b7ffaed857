use crate::deque::BoundedDeque;
use crate::grid::{self, to_index, CellIndex, CELLS, HEIGHT, WIDTH};
use crate::input::Stick;
use Heading::*;

/// Room for the snake covering every cell once.
pub const BODY_CAPACITY: usize = CELLS;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    fn from_axis(reading: i8) -> Option<Sign> {
        match reading {
            r if r < 0 => Some(Sign::Minus),
            r if r > 0 => Some(Sign::Plus),
            _ => None,
        }
    }

    fn unit(self) -> i16 {
        match self {
            Sign::Minus => -1,
            Sign::Plus => 1,
        }
    }
}

/// Direction of travel, tagged by the axis the snake is locked to. A turn is
/// only ever onto the other axis, which rules out reversing into the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    AlongX(Sign),
    AlongY(Sign),
}

impl Heading {
    pub fn delta(self) -> (i16, i16) {
        match self {
            AlongX(s) => (s.unit(), 0),
            AlongY(s) => (0, s.unit()),
        }
    }

    /// The heading after reading the stick. Only a deflection on the axis
    /// at rest turns the snake.
    pub fn steer(self, stick: Stick) -> Heading {
        match self {
            AlongX(_) => Sign::from_axis(stick.y).map_or(self, AlongY),
            AlongY(_) => Sign::from_axis(stick.x).map_or(self, AlongX),
        }
    }
}

pub struct Snake {
    heading: Heading,
    body: BoundedDeque<BODY_CAPACITY>,
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Snake { heading: AlongX(Sign::Plus), body: BoundedDeque::new() };
        snake.reset();
        snake
    }

    /// Back to a single cell at a third of the width, half the height, heading right.
    pub fn reset(&mut self) {
        self.heading = AlongX(Sign::Plus);
        self.body.clear();
        self.body.push_front(Self::start_cell());
    }

    pub fn start_cell() -> CellIndex {
        to_index(WIDTH / 3, HEIGHT / 2)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn steer(&mut self, stick: Stick) {
        self.heading = self.heading.steer(stick);
    }

    pub fn head(&self) -> CellIndex {
        self.body.front()
    }

    pub fn tail(&self) -> CellIndex {
        self.body.back()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_full(&self) -> bool {
        self.body.is_full()
    }

    /// Head to tail.
    pub fn body(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.body.iter()
    }

    /// Where the head goes next, or `None` if that is through a wall.
    pub fn next_head(&self) -> Option<CellIndex> {
        let (dx, dy) = self.heading.delta();
        grid::offset(self.head(), dx, dy)
    }

    pub fn push_head(&mut self, cell: CellIndex) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> CellIndex {
        self.body.pop_back()
    }

    #[cfg(test)]
    pub fn placed(heading: Heading, head_to_tail: &[CellIndex]) -> Self {
        let mut body = BoundedDeque::new();
        for cell in head_to_tail {
            body.push_back(*cell);
        }
        Snake { heading, body }
    }
}
