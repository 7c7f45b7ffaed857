use crate::grid::WIDTH;

/// Digits the counter keeps. Adding past the largest value wraps to zero.
pub const SCORE_DIGITS: u32 = 5;
const SCORE_LIMIT: u32 = 10u32.pow(SCORE_DIGITS);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    current: u32,
    high: u32,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// The "high" slot. It holds whatever the last round ended on, higher or not.
    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn add(&mut self) {
        self.current = (self.current + 1) % SCORE_LIMIT;
    }

    pub fn reset(&mut self) {
        self.high = self.current;
        self.current = 0;
    }

    /// Row 0 of the screen. Each field has a fixed trailing zero after the
    /// counted digits, so one food reads as 10 points.
    pub fn status_line(&self) -> String {
        let line = format!(" score: {:05}0  high: {:05}0", self.current, self.high);
        format!("{:<width$}", line, width = WIDTH as usize)
    }
}
