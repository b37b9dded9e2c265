//! The CHIP-8 emulator as described at https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description.

use crate::emulator::error::Error;
use crate::emulator::input::Keypad;
use crate::emulator::instruction::*;
use crate::emulator::memory::Memory;
use crate::emulator::output::{EmulatorOutput, Framebuffer};
use crate::emulator::registers::{Registers, Stack};
use crate::emulator::timers::Timers;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A complete machine: memory, registers, stack, timers, screen and keypad.
///
/// All state is owned by the value, so any number of machines can run
/// side by side. Nothing here is synchronised; a machine shared between
/// threads should sit behind a single lock.
pub struct Emulator {
    memory: Memory,
    registers: Registers,
    stack: Stack,
    timers: Timers,
    framebuffer: Framebuffer,
    keypad: Keypad,
    rng: StdRng,
    /// Memory as it was right after the last `load`, restored by `reset`.
    loaded: Memory,
}

impl Emulator {
    /// Create a new emulator with an empty program and a random seed.
    pub fn new() -> Emulator {
        Emulator::with_rng(StdRng::from_entropy())
    }

    /// Create a new emulator whose random instruction is reproducible.
    pub fn with_seed(seed: u64) -> Emulator {
        Emulator::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Emulator {
        Emulator {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: Stack::new(),
            timers: Timers::new(),
            framebuffer: Framebuffer::new(),
            keypad: Keypad::new(),
            rng,
            loaded: Memory::new(),
        }
    }

    /// Reset the machine and copy a program into memory at 0x200.
    ///
    /// A program that does not fit is rejected and the machine is left as it was.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Error> {
        self.loaded = Memory::with_program(program)?;
        self.power_on();
        log::debug!("Loaded {} byte program", program.len());
        Ok(())
    }

    /// Return to the state right after the last `load`.
    pub fn reset(&mut self) {
        self.power_on();
        log::debug!("Reset");
    }

    fn power_on(&mut self) {
        self.memory = self.loaded.clone();
        self.registers = Registers::new();
        self.stack = Stack::new();
        self.timers = Timers::new();
        self.framebuffer = Framebuffer::new();
        self.keypad = Keypad::new();
    }

    /// Perform a single step: fetch the instruction at the program counter,
    /// move past it, execute it and then count the timers down.
    ///
    /// A stack fault skips the offending call or return and is returned,
    /// but the machine stays consistent and may keep stepping.
    pub fn step(&mut self) -> Result<(), Error> {
        // Each opcode is two bytes
        let pc = self.registers.pc();
        let (left, right) = self.memory.read_word(pc);
        let instruction = Instruction::from_two_u8(left, right);

        log::trace!("{:#05x}: {}", pc, instruction);

        self.registers.advance();
        let result = self.execute_single(instruction);
        self.timers.tick();
        result
    }

    /// Execute many instructions in order, stopping at the first fault.
    /// Timers are not touched.
    pub fn execute_many(&mut self, instructions: &[Instruction]) -> Result<(), Error> {
        for instruction in instructions {
            self.execute_single(*instruction)?;
        }
        Ok(())
    }

    /// Execute a single instruction without fetching it or ticking the timers.
    pub fn execute_single(&mut self, instruction: Instruction) -> Result<(), Error> {
        let regs = &mut self.registers;
        match instruction {
            Instruction::ClearScreen => {
                self.framebuffer.clear();
            }

            // Return to the previous call site via the stack.
            Instruction::Return => match self.stack.pop() {
                Ok(addr) => regs.jump(addr),
                Err(e) => {
                    log::warn!("Skipping return at {:#05x}: {}", regs.pc(), e);
                    return Err(e.into());
                }
            },

            Instruction::Goto(Addr(addr)) => {
                regs.jump(addr);
            }

            // Store the current address on the stack, then jump to the specified address
            Instruction::Call(Addr(addr)) => {
                if let Err(e) = self.stack.push(regs.pc()) {
                    log::warn!("Skipping call to {:#05x}: {}", addr, e);
                    return Err(e.into());
                }
                regs.jump(addr);
            }

            Instruction::IfRegEqConst(Reg(x), Const(n)) => {
                if regs.get(x) == n {
                    regs.advance();
                }
            }

            Instruction::IfRegNeqConst(Reg(x), Const(n)) => {
                if regs.get(x) != n {
                    regs.advance();
                }
            }

            Instruction::IfRegEqReg(Reg(x), Reg(y)) => {
                if regs.get(x) == regs.get(y) {
                    regs.advance();
                }
            }

            Instruction::SetRegToConst(Reg(x), Const(n)) => {
                regs.set(x, n);
            }

            Instruction::IncRegByConst(Reg(x), Const(n)) => {
                regs.set(x, regs.get(x).wrapping_add(n));
            }

            Instruction::SetRegToReg(Reg(x), Reg(y)) => {
                regs.set(x, regs.get(y));
            }

            Instruction::BitwiseOr(Reg(x), Reg(y)) => {
                regs.set(x, regs.get(x) | regs.get(y));
            }

            Instruction::BitwiseAnd(Reg(x), Reg(y)) => {
                regs.set(x, regs.get(x) & regs.get(y));
            }

            Instruction::BitwiseXor(Reg(x), Reg(y)) => {
                regs.set(x, regs.get(x) ^ regs.get(y));
            }

            // The flag is written after the result, so VF holds the flag even when x is F.
            Instruction::IncRegByReg(Reg(x), Reg(y)) => {
                let (sum, carry) = regs.get(x).overflowing_add(regs.get(y));
                regs.set(x, sum);
                regs.set_flag(carry);
            }

            Instruction::DecRegByReg(Reg(x), Reg(y)) => {
                let (vx, vy) = (regs.get(x), regs.get(y));
                regs.set(x, vx.wrapping_sub(vy));
                regs.set_flag(vx > vy);
            }

            Instruction::BitshiftRight(Reg(x)) => {
                let vx = regs.get(x);
                regs.set(x, vx >> 1);
                regs.set_flag(vx & 0x01 == 1);
            }

            Instruction::SetVxVyMinusVx(Reg(x), Reg(y)) => {
                let (vx, vy) = (regs.get(x), regs.get(y));
                regs.set(x, vy.wrapping_sub(vx));
                regs.set_flag(vy > vx);
            }

            Instruction::BitshiftLeft(Reg(x)) => {
                let vx = regs.get(x);
                regs.set(x, vx << 1);
                regs.set_flag(vx >> 7 == 1);
            }

            Instruction::IfRegNeqReg(Reg(x), Reg(y)) => {
                if regs.get(x) != regs.get(y) {
                    regs.advance();
                }
            }

            Instruction::SetI(Addr(addr)) => {
                regs.set_i(addr);
            }

            Instruction::SetPcToV0PlusAddr(Addr(addr)) => {
                regs.jump(addr + regs.get(0) as u16);
            }

            Instruction::SetVxRand(Reg(x), Const(n)) => {
                regs.set(x, self.rng.gen::<u8>() & n);
            }

            // Sprite rows are read from I onwards, one byte per row.
            Instruction::Draw(Reg(x), Reg(y), Const(height)) => {
                let (i, memory) = (regs.i(), &self.memory);
                let rows: Vec<u8> = (0..height as u16)
                    .map(|row| memory.read(i.wrapping_add(row)))
                    .collect();
                let collision = self.framebuffer.draw_sprite(regs.get(x), regs.get(y), &rows);
                regs.set_flag(collision);
            }

            Instruction::IfKeyEqVx(Reg(x)) => {
                if self.keypad.is_pressed(regs.get(x)) {
                    regs.advance();
                }
            }

            Instruction::IfKeyNeqVx(Reg(x)) => {
                if self.keypad.is_released(regs.get(x)) {
                    regs.advance();
                }
            }

            Instruction::SetRegToDelayTimer(Reg(x)) => {
                regs.set(x, self.timers.delay());
            }

            // Without a key held, step back onto this instruction so it runs again.
            Instruction::SetRegToGetKey(Reg(x)) => match self.keypad.first_pressed() {
                Some(key) => regs.set(x, key),
                None => regs.rewind(),
            },

            Instruction::SetDelayTimerToReg(Reg(x)) => {
                self.timers.set_delay(regs.get(x));
            }

            Instruction::SetSoundTimerToReg(Reg(x)) => {
                self.timers.set_sound(regs.get(x));
            }

            Instruction::AddRegToI(Reg(x)) => {
                regs.set_i(regs.i() + regs.get(x) as u16);
            }

            // Set i to character address. Each font element is 5 bytes wide.
            Instruction::SetIToSpriteAddrVx(Reg(x)) => {
                regs.set_i(Memory::font_addr(regs.get(x)));
            }

            Instruction::SetIToBcdOfReg(Reg(x)) => {
                let (i, value) = (regs.i(), regs.get(x));
                self.memory.write(i, value / 100);
                self.memory.write(i.wrapping_add(1), value / 10 % 10);
                self.memory.write(i.wrapping_add(2), value % 10);
            }

            // Dump register values up to Vx, I stays where it is
            Instruction::RegDump(Reg(x)) => {
                let i = regs.i();
                for reg_no in 0..=x {
                    self.memory.write(i.wrapping_add(reg_no as u16), regs.get(reg_no));
                }
            }

            // Load register values up to Vx, I stays where it is
            Instruction::RegLoad(Reg(x)) => {
                let i = regs.i();
                for reg_no in 0..=x {
                    regs.set(reg_no, self.memory.read(i.wrapping_add(reg_no as u16)));
                }
            }

            Instruction::Unknown(word) => {
                log::warn!("Ignoring unknown opcode {:#06x}", word);
            }
        };

        Ok(())
    }

    /// Press or release a key on the keypad.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keypad.set_key(key, pressed);
    }

    /// Hand the screen to `output` if it changed since the last call.
    /// Returns whether a frame was drawn.
    pub fn present<O: EmulatorOutput>(&mut self, output: &mut O) -> bool {
        if self.framebuffer.take_dirty() {
            output.draw(&self.framebuffer);
            true
        } else {
            false
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the tone should currently be playing.
    pub fn is_sounding(&self) -> bool {
        self.timers.is_sounding()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
