//! The 4096 byte address space of the machine.

use crate::emulator::error::LoadError;

pub const MEM_SIZE: usize = 4096;
/// Every computed address is truncated to 12 bits.
pub const ADDR_MASK: u16 = 0x0FFF;
pub const PROGRAM_START: u16 = 0x200;
pub const FONT_START: u16 = 0x050;
/// Bytes per glyph in the built-in font.
pub const FONT_GLYPH_SIZE: u16 = 5;
/// The largest program image that fits above `PROGRAM_START`.
pub const MAX_PROGRAM_SIZE: usize = MEM_SIZE - PROGRAM_START as usize;

pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Byte-addressable memory with the font preloaded.
///
/// Addresses passed in are masked to 12 bits, so reads and writes
/// past `0xFFF` wrap around to the bottom of memory instead of panicking.
#[derive(Clone)]
pub struct Memory {
    cells: [u8; MEM_SIZE],
}

impl Memory {
    /// Zeroed memory with the font loaded at `FONT_START`.
    pub fn new() -> Memory {
        let mut cells = [0; MEM_SIZE];
        let font_start = FONT_START as usize;
        cells[font_start..font_start + FONT.len()].copy_from_slice(&FONT);
        Memory { cells }
    }

    /// Fresh memory holding `program` at `PROGRAM_START`.
    pub fn with_program(program: &[u8]) -> Result<Memory, LoadError> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(LoadError::ProgramTooLarge {
                len: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let mut memory = Memory::new();
        let start = PROGRAM_START as usize;
        memory.cells[start..start + program.len()].copy_from_slice(program);
        Ok(memory)
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.cells[(addr & ADDR_MASK) as usize]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.cells[(addr & ADDR_MASK) as usize] = value;
    }

    /// Read the big-endian instruction word at `addr`.
    /// The second byte wraps to `0x000` when `addr` is `0xFFF`.
    pub fn read_word(&self, addr: u16) -> (u8, u8) {
        (self.read(addr), self.read(addr.wrapping_add(1)))
    }

    /// Address of the glyph for the low nibble of `digit`.
    pub fn font_addr(digit: u8) -> u16 {
        FONT_START + (digit & 0x0F) as u16 * FONT_GLYPH_SIZE
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn font_is_loaded_at_0x50() {
        let memory = Memory::new();
        assert_eq!(&memory.as_slice()[0x50..0xA0], &FONT[..]);
        assert!(memory.as_slice()[..0x50].iter().all(|&b| b == 0));
        assert!(memory.as_slice()[0xA0..].iter().all(|&b| b == 0));
    }

    #[test]
    fn program_is_copied_verbatim() {
        let memory = Memory::with_program(&[0x60, 0x05, 0x61, 0x03]).unwrap();
        assert_eq!(&memory.as_slice()[0x200..0x204], &[0x60, 0x05, 0x61, 0x03]);
        assert_eq!(memory.read(0x204), 0);
    }

    #[test]
    fn largest_program_fits() {
        let program = vec![0xAB; MAX_PROGRAM_SIZE];
        let memory = Memory::with_program(&program).unwrap();
        assert_eq!(memory.read(0xFFF), 0xAB);
    }

    #[test]
    fn oversized_program_is_rejected() {
        let program = vec![0; MAX_PROGRAM_SIZE + 1];
        match Memory::with_program(&program) {
            Err(LoadError::ProgramTooLarge { len, max }) => {
                assert_eq!(len, MAX_PROGRAM_SIZE + 1);
                assert_eq!(max, 3584);
            }
            _ => panic!("expected the program to be rejected"),
        }
    }

    #[test]
    fn addresses_wrap_to_12_bits() {
        let mut memory = Memory::new();
        memory.write(0x1005, 0x42);
        assert_eq!(memory.read(0x005), 0x42);
        assert_eq!(memory.read(0xF005), 0x42);
    }

    #[test]
    fn word_read_wraps_at_top_of_memory() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0x12);
        memory.write(0x000, 0x34);
        assert_eq!(memory.read_word(0xFFF), (0x12, 0x34));
    }

    #[test]
    fn font_addr_uses_low_nibble() {
        assert_eq!(Memory::font_addr(0x0), 0x50);
        assert_eq!(Memory::font_addr(0xA), 0x50 + 50);
        assert_eq!(Memory::font_addr(0x1F), 0x55);
    }
}
