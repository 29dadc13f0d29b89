//! The mailbox value type threaded between an embedding tick loop and the
//! core. Modeled as a single value passed by the caller rather than a
//! process-global, per the design notes on UI/core communication.

use crate::regs;

/// One of the eight physical keys a guest program can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    Start,
    Select,
    Up,
    Down,
    Left,
    Right,
}

/// Snapshot of which keys are currently held down.
///
/// Passed into [`crate::Machine::set_buttons`] each time the embedder's
/// input layer observes a change; the core never polls for input itself.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub a: bool,
    pub b: bool,
    pub select: bool,
    pub start: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn set(&mut self, key: Key, pressed: bool) {
        let field = match key {
            Key::A => &mut self.a,
            Key::B => &mut self.b,
            Key::Start => &mut self.start,
            Key::Select => &mut self.select,
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
        };
        *field = pressed;
    }

    pub(crate) fn to_internal_repr(self) -> (regs::DPad, regs::ActionButtons) {
        let dpad = regs::DPad {
            right: self.right as u8,
            left: self.left as u8,
            up: self.up as u8,
            down: self.down as u8,
        };

        let btns = regs::ActionButtons {
            a: self.a as u8,
            b: self.b as u8,
            select: self.select as u8,
            start: self.start as u8,
        };

        (dpad, btns)
    }
}
