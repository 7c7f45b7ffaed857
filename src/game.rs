use anyhow::Result;
use tracing::debug;

use crate::clock::FrameClock;
use crate::food::Spawner;
use crate::grid::{HEIGHT, WIDTH};
use crate::input::{is_ctrl_c, Stick};
use crate::state::{GameState, MoveResult::{self, *}};
use crate::term::TermManager;

const MSG_PROMPT: &str = "-- fire to begin --";
const MSG_DIED: &str = "-- you died. fire to try again. --";

/// Where the game is between rounds. There is no final phase: `Died` always
/// leads back to `Playing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Died,
}

impl Phase {
    pub fn on_fire(self) -> Phase {
        match self {
            Phase::Idle | Phase::Died => Phase::Playing,
            Phase::Playing => Phase::Playing,
        }
    }

    pub fn on_crash(self) -> Phase {
        match self {
            Phase::Playing => Phase::Died,
            other => other,
        }
    }
}

/// Ctrl+C seen while waiting for input.
struct Quit;

pub struct SnakeGame<S> {
    term: TermManager,
    clock: FrameClock,
    state: GameState<S>,
    phase: Phase,
}

impl<S: Spawner> SnakeGame<S> {
    pub fn new(clock: FrameClock, spawner: S) -> Self {
        SnakeGame { term: TermManager::new(), clock, state: GameState::new(spawner), phase: Phase::Idle }
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.cls()?;
        self.draw_status()
    }

    /// Runs rounds until Ctrl+C.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let next = match self.phase {
                Phase::Idle => {
                    self.show_centered(MSG_PROMPT)?;
                    match self.wait_fire()? {
                        Ok(()) => self.phase.on_fire(),
                        Err(Quit) => return Ok(()),
                    }
                }
                Phase::Playing => match self.play()? {
                    Ok(()) => self.phase.on_crash(),
                    Err(Quit) => return Ok(()),
                },
                Phase::Died => {
                    self.state.end_round();
                    self.draw_status()?;
                    self.show_centered(MSG_DIED)?;
                    match self.wait_fire()? {
                        Ok(()) => self.phase.on_fire(),
                        Err(Quit) => return Ok(()),
                    }
                }
            };

            debug!(from = ?self.phase, to = ?next, "phase change");
            self.phase = next;
        }
    }

    pub fn clean_exit(&mut self) -> Result<()> {
        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    /// One round, returning once the snake hits a wall.
    fn play(&mut self) -> Result<Result<(), Quit>> {
        self.state.begin_round();
        self.term.draw_board(self.state.board())?;

        loop {
            let keys = self.term.read_key_events_queue()?;
            if keys.iter().any(is_ctrl_c) {
                return Ok(Err(Quit));
            }

            let move_res = self.state.tick(Stick::from_keys(&keys));
            if !move_res.is_alive() {
                return Ok(Ok(()));
            }
            self.print_move(&move_res)?;

            self.clock.wait();
        }
    }

    fn wait_fire(&mut self) -> Result<Result<(), Quit>> {
        loop {
            let key = self.term.read_key_blocking()?;
            if is_ctrl_c(&key) {
                return Ok(Err(Quit));
            }
            if Stick::from_keys(&[key]).fire {
                return Ok(Ok(()));
            }
        }
    }

    fn print_move(&mut self, mov: &MoveResult) -> Result<()> {
        if let Moved { new_head, vacated, food } = *mov {
            let board = self.state.board();
            if let Some(old_tail) = vacated {
                self.term.print_cell(old_tail, board.get(old_tail))?;
            }
            self.term.print_cell(new_head, board.get(new_head))?;

            if let Some(food) = food {
                self.term.print_cell(food, board.get(food))?;
                self.draw_status()?;
            }

            self.term.flush()?;
        }
        Ok(())
    }

    fn draw_status(&mut self) -> Result<()> {
        let line = self.state.score().status_line();
        self.term.put_str_at(&line, 0, 0)?;
        self.term.flush()
    }

    fn show_centered(&mut self, msg: &str) -> Result<()> {
        self.term.put_str_at(msg, (WIDTH - msg.len() as u16) / 2, HEIGHT / 3)?;
        self.term.flush()
    }
}
