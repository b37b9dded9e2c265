//! The register file and the call stack.

use crate::emulator::error::StackError;
use crate::emulator::memory::{ADDR_MASK, PROGRAM_START};

pub const NUM_REGISTERS: usize = 16;
pub const STACK_SIZE: usize = 16;
/// Register `VF`, written by arithmetic, shift and draw instructions.
pub const FLAG: u8 = 0xF;

/// `V0` to `VF`, the address register `I` and the program counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    v: [u8; NUM_REGISTERS],
    i: u16,
    pc: u16,
}

impl Registers {
    pub fn new() -> Registers {
        Registers {
            v: [0; NUM_REGISTERS],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    /// Read `Vx`. Only the low nibble of `x` selects the register.
    pub fn get(&self, x: u8) -> u8 {
        self.v[(x & 0xF) as usize]
    }

    pub fn set(&mut self, x: u8, value: u8) {
        self.v[(x & 0xF) as usize] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.set(FLAG, flag as u8);
    }

    pub fn all(&self) -> &[u8; NUM_REGISTERS] {
        &self.v
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    pub fn set_i(&mut self, addr: u16) {
        self.i = addr & ADDR_MASK;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn jump(&mut self, addr: u16) {
        self.pc = addr & ADDR_MASK;
    }

    /// Move past the next instruction word.
    pub fn advance(&mut self) {
        self.jump(self.pc.wrapping_add(2));
    }

    /// Move back to the previous instruction word.
    pub fn rewind(&mut self) {
        self.jump(self.pc.wrapping_sub(2));
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// Return addresses for subroutine calls, up to `STACK_SIZE` deep.
///
/// The pointer counts the saved addresses, so it stays within `0..=STACK_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    slots: [u16; STACK_SIZE],
    pointer: u8,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            slots: [0; STACK_SIZE],
            pointer: 0,
        }
    }

    pub fn push(&mut self, return_addr: u16) -> Result<(), StackError> {
        if self.pointer as usize == STACK_SIZE {
            return Err(StackError::Overflow);
        }
        self.slots[self.pointer as usize] = return_addr;
        self.pointer += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, StackError> {
        if self.pointer == 0 {
            return Err(StackError::Underflow);
        }
        self.pointer -= 1;
        Ok(self.slots[self.pointer as usize])
    }

    pub fn pointer(&self) -> u8 {
        self.pointer
    }

    pub fn is_empty(&self) -> bool {
        self.pointer == 0
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
