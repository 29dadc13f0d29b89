mod apu;
mod cartridge;
mod config;
mod counter;
mod cpu;
mod disasm;
mod error;
mod frame;
mod info;
mod machine;
mod macros;
mod mem;
mod msg;
mod ppu;
mod regs;
mod serial;
mod timer;

pub use config::Config;
pub use disasm::{DecodedInstr, Disassembler};
pub use error::{EmulatorError, Result};
pub use frame::{Color, Frame};
pub use info::{FREQUENCY, FREQUENCY_2X, SCREEN_RESOLUTION};
pub use machine::Machine;
pub use mem::Breakpoint;
pub use msg::{ButtonState, Key};
