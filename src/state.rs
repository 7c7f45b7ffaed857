use tracing::{debug, info, warn};

use crate::board::{Board, Cell};
use crate::food::Spawner;
use crate::grid::CellIndex;
use crate::input::Stick;
use crate::score::Score;
use crate::snake::Snake;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// `vacated` is the old tail when the snake did not grow, `food` the new
    /// food cell when it did.
    Moved { new_head: CellIndex, vacated: Option<CellIndex>, food: Option<CellIndex> },
    Crashed,
}

impl MoveResult {
    pub fn is_alive(&self) -> bool {
        matches!(self, Moved { .. })
    }
}

/// Everything one game keeps between ticks. The snake's body buffer and the
/// board are allocated once and reused by every round.
pub struct GameState<S> {
    board: Board,
    snake: Snake,
    food: CellIndex,
    score: Score,
    spawner: S,
}

impl<S: Spawner> GameState<S> {
    pub fn new(spawner: S) -> Self {
        GameState { board: Board::new(), snake: Snake::new(), food: 0, score: Score::new(), spawner }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> CellIndex {
        self.food
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Fresh board, snake and food. The score carries over from `end_round`.
    pub fn begin_round(&mut self) {
        self.board.clear_playfield();
        self.snake.reset();
        self.board.set(self.snake.head(), Cell::Snake);
        self.respawn_food();
        info!(food = self.food, "round started");
    }

    /// Reads the stick and moves the snake one cell.
    pub fn tick(&mut self, stick: Stick) -> MoveResult {
        self.snake.steer(stick);
        self.advance()
    }

    /// Moves the snake one cell along its heading. Only walls are fatal; the
    /// snake may cross its own body.
    pub fn advance(&mut self) -> MoveResult {
        let new_head = match self.snake.next_head() {
            Some(cell) => cell,
            None => return Crashed,
        };

        if self.snake.is_full() {
            warn!(len = self.snake.len(), "snake body at capacity, head push dropped");
        }
        self.snake.push_head(new_head);
        self.board.set(new_head, Cell::Snake);

        if new_head == self.food {
            self.score.add();
            let food = self.respawn_food();
            debug!(score = self.score.current(), len = self.snake.len(), food, "ate food");
            Moved { new_head, vacated: None, food: Some(food) }
        } else {
            let old_tail = self.snake.pop_tail();
            self.board.set(old_tail, Cell::Empty);
            Moved { new_head, vacated: Some(old_tail), food: None }
        }
    }

    /// Moves the current score into the high slot.
    pub fn end_round(&mut self) {
        info!(score = self.score.current(), len = self.snake.len(), "snake died");
        self.score.reset();
    }

    fn respawn_food(&mut self) -> CellIndex {
        self.food = self.spawner.pick();
        self.board.set(self.food, Cell::Food);
        self.food
    }

    #[cfg(test)]
    fn place(&mut self, snake: Snake, food: CellIndex) {
        self.board.clear_playfield();
        for cell in snake.body() {
            self.board.set(cell, Cell::Snake);
        }
        self.snake = snake;
        self.food = food;
        self.board.set(food, Cell::Food);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::to_index;
    use crate::snake::{Heading, Sign};
    use std::collections::VecDeque;

    /// Hands out queued cells and counts how often it was asked.
    struct Scripted {
        cells: VecDeque<CellIndex>,
        calls: usize,
    }

    impl Scripted {
        fn new(cells: &[CellIndex]) -> Self {
            Scripted { cells: cells.iter().copied().collect(), calls: 0 }
        }
    }

    impl Spawner for Scripted {
        fn pick(&mut self) -> CellIndex {
            self.calls += 1;
            self.cells.pop_front().unwrap_or(0)
        }
    }

    fn right() -> Heading {
        Heading::AlongX(Sign::Plus)
    }

    fn state_with(snake: Snake, food: CellIndex, spawns: &[CellIndex]) -> GameState<Scripted> {
        let mut state = GameState::new(Scripted::new(spawns));
        state.place(snake, food);
        state
    }

    #[test]
    fn begin_round_sets_up_snake_and_food() {
        let food = to_index(30, 20);
        let mut state = GameState::new(Scripted::new(&[food]));
        state.begin_round();

        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Snake::start_cell());
        assert_eq!(state.food(), food);
        assert_eq!(state.board().get(food), Cell::Food);
        assert_eq!(state.board().get(Snake::start_cell()), Cell::Snake);
        assert_eq!(state.spawner.calls, 1);
    }

    #[test]
    fn eating_grows_and_respawns() {
        let head = to_index(9, 9);
        let tail = to_index(8, 9);
        let next_food = to_index(20, 3);
        let mut state = state_with(Snake::placed(right(), &[head, tail]), to_index(10, 9), &[next_food]);

        let res = state.advance();

        assert_eq!(res, Moved { new_head: to_index(10, 9), vacated: None, food: Some(next_food) });
        assert!(res.is_alive());
        assert_eq!(state.score().current(), 1);
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.spawner.calls, 1);
        assert_eq!(state.food(), next_food);
        assert_eq!(state.board().get(tail), Cell::Snake);
        assert_eq!(state.board().get(next_food), Cell::Food);
    }

    #[test]
    fn plain_move_keeps_length_and_clears_tail() {
        let head = to_index(9, 9);
        let tail = to_index(8, 9);
        let food = to_index(30, 20);
        let mut state = state_with(Snake::placed(right(), &[head, tail]), food, &[]);

        let res = state.advance();

        assert_eq!(res, Moved { new_head: to_index(10, 9), vacated: Some(tail), food: None });
        assert_eq!(state.score().current(), 0);
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.snake().head(), to_index(10, 9));
        assert_eq!(state.snake().tail(), head);
        assert_eq!(state.board().get(tail), Cell::Empty);
        assert_eq!(state.board().get(to_index(10, 9)), Cell::Snake);
        assert_eq!(state.food(), food);
        assert_eq!(state.spawner.calls, 0);
    }

    #[test]
    fn left_wall_kills() {
        let snake = Snake::placed(Heading::AlongX(Sign::Minus), &[to_index(0, 5)]);
        let mut state = state_with(snake, to_index(30, 20), &[]);

        assert_eq!(state.advance(), Crashed);
        assert!(!Crashed.is_alive());
        assert_eq!(state.snake().len(), 1);
    }

    #[test]
    fn status_row_kills() {
        let snake = Snake::placed(Heading::AlongY(Sign::Minus), &[to_index(5, 1)]);
        let mut state = state_with(snake, to_index(30, 20), &[]);

        assert_eq!(state.advance(), Crashed);
    }

    #[test]
    fn tick_steers_before_moving() {
        let snake = Snake::placed(right(), &[to_index(9, 9)]);
        let mut state = state_with(snake, to_index(30, 20), &[]);

        let res = state.tick(Stick { x: 0, y: 1, fire: false });

        assert_eq!(res, Moved { new_head: to_index(9, 10), vacated: Some(to_index(9, 9)), food: None });
    }

    #[test]
    fn tick_ignores_reversal() {
        let snake = Snake::placed(right(), &[to_index(9, 9)]);
        let mut state = state_with(snake, to_index(30, 20), &[]);

        state.tick(Stick { x: -1, y: 0, fire: false });

        assert_eq!(state.snake().head(), to_index(10, 9));
    }

    #[test]
    fn snake_passes_through_itself() {
        // head at (5,5) moving up into (5,4), which the body already covers
        let body = [to_index(5, 5), to_index(4, 5), to_index(4, 4), to_index(5, 4), to_index(6, 4)];
        let snake = Snake::placed(Heading::AlongY(Sign::Minus), &body);
        let mut state = state_with(snake, to_index(30, 20), &[]);

        let res = state.advance();

        assert!(res.is_alive());
        assert_eq!(state.snake().head(), to_index(5, 4));
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn end_round_moves_score_to_high() {
        let snake = Snake::placed(right(), &[to_index(9, 9)]);
        let mut state = state_with(snake, to_index(10, 9), &[to_index(11, 9), to_index(30, 20)]);
        state.advance();
        state.advance();
        assert_eq!(state.score().current(), 2);

        state.end_round();

        assert_eq!(state.score().current(), 0);
        assert_eq!(state.score().high(), 2);
    }

    #[test]
    fn next_round_keeps_high_slot() {
        let mut state = GameState::new(Scripted::new(&[to_index(14, 12), to_index(1, 1), to_index(2, 2)]));
        state.begin_round();
        state.advance();
        state.end_round();
        state.begin_round();

        assert_eq!(state.score().high(), 1);
        assert_eq!(state.score().current(), 0);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.board().count(Cell::Snake), 1);
        assert_eq!(state.board().count(Cell::Food), 1);
    }
}
