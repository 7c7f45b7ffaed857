use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One sample of the joystick: a reading per axis in `-1..=1` and the fire button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stick {
    pub x: i8,
    pub y: i8,
    pub fire: bool,
}

impl Stick {
    pub fn neutral() -> Self {
        Stick::default()
    }

    /// Folds a key press into this sample. Direction keys set one axis and
    /// centre the other, so the last direction pressed during a tick wins.
    pub fn apply(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('w') | KeyCode::Up => self.deflect(0, -1),
            KeyCode::Char('a') | KeyCode::Left => self.deflect(-1, 0),
            KeyCode::Char('s') | KeyCode::Down => self.deflect(0, 1),
            KeyCode::Char('d') | KeyCode::Right => self.deflect(1, 0),
            KeyCode::Char(' ') | KeyCode::Enter => self.fire = true,
            _ => {}
        }
    }

    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a KeyEvent>) -> Self {
        let mut stick = Stick::neutral();
        for key in keys {
            stick.apply(key);
        }
        stick
    }

    fn deflect(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
