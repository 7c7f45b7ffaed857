use crate::board::{Board, Cell};
use crate::grid::{from_index, CellIndex, Coords, HEIGHT, WIDTH};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const SNAKE_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const BACKGROUND_CHAR: char = ' ';

const BORDER_COLOR: Color = Color::DarkGreen;
const BACKGROUND_COLOR: Color = Color::Green;
const CELL_COLOR: Color = Color::DarkYellow;

/// The game's `WIDTH` x `HEIGHT` character surface, drawn inside a one-cell
/// border at the top left of the terminal.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        let (w, h) = terminal::size().context("reading terminal size")?;
        if w < WIDTH + 2 || h < HEIGHT + 2 {
            bail!("terminal is {}x{}, need at least {}x{}", w, h, WIDTH + 2, HEIGHT + 2);
        }

        execute!(self.stdout, EnterAlternateScreen).context("entering alt screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("leaving alt screen")?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("reading key")? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("polling keys")? {
            if let Event::Key(ev) = read().context("reading key")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Clears the terminal and paints the border and an empty surface.
    pub fn cls(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All)).context("clearing")?;

        let (end_x, end_y) = (WIDTH + 1, HEIGHT + 1);
        queue!(self.stdout, style::SetBackgroundColor(BORDER_COLOR))?;
        for x in 0..=end_x {
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(' '))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(' '))?;
        }
        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print(' '))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print(' '))?;
        }

        for y in 0..HEIGHT {
            self.put_str_at(&" ".repeat(WIDTH as usize), 0, y)?;
        }

        self.flush()
    }

    /// Repaints every playfield cell from the board.
    pub fn draw_board(&mut self, board: &Board) -> Result<()> {
        for (index, cell) in board.playfield() {
            self.print_cell(index, cell)?;
        }
        self.flush()
    }

    pub fn print_cell(&mut self, index: CellIndex, cell: Cell) -> Result<()> {
        let ch = match cell {
            Cell::Empty => BACKGROUND_CHAR,
            Cell::Snake => SNAKE_CHAR,
            Cell::Food => FOOD_CHAR,
        };
        self.print_at(from_index(index), ch)
    }

    /// Writes `text` left to right from `(x, y)` on the surface. No wrapping.
    pub fn put_str_at(&mut self, text: &str, x: u16, y: u16) -> Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.print_at((x + i as u16, y), ch)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        // surface (0,0) sits just inside the border
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0 + 1, pos.1 + 1),
            style::SetBackgroundColor(BACKGROUND_COLOR),
            style::SetForegroundColor(CELL_COLOR),
            style::Print(ch)
        )?;
        Ok(())
    }
}
