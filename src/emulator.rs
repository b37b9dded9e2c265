//! The machine and its parts, leaves first: memory, registers and stack,
//! timers, keypad, framebuffer, and the interpreter that drives them.

pub mod emulator;
pub mod error;
pub mod input;
pub mod instruction;
pub mod memory;
pub mod output;
pub mod registers;
pub mod timers;

pub use self::emulator::Emulator;
pub use self::error::{Error, LoadError, StackError};
