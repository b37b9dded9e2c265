//! The framebuffer and the seam to whatever shows it.

use std::fmt;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const RESOLUTION: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// A 64x32 monochrome screen stored row-major.
///
/// Pixels are only ever flipped by XOR. The dirty flag is raised by every
/// change and lowered by the renderer through [`Framebuffer::take_dirty`].
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [bool; RESOLUTION],
    dirty: bool,
}

impl Framebuffer {
    pub fn new() -> Framebuffer {
        Framebuffer {
            pixels: [false; RESOLUTION],
            dirty: false,
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [false; RESOLUTION];
        self.dirty = true;
    }

    /// XOR an 8 pixel wide sprite onto the screen, one byte per row,
    /// wrapping at both edges. Returns whether any pixel was switched off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut collision = false;
        for (dy, row) in rows.iter().enumerate() {
            let py = (y as usize + dy) % SCREEN_HEIGHT;
            for dx in 0..8 {
                if row & (0x80 >> dx) == 0 {
                    continue;
                }
                let px = (x as usize + dx) % SCREEN_WIDTH;
                let pixel = &mut self.pixels[py * SCREEN_WIDTH + px];
                collision |= *pixel;
                *pixel = !*pixel;
                self.dirty = true;
            }
        }
        collision
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[(y % SCREEN_HEIGHT) * SCREEN_WIDTH + x % SCREEN_WIDTH]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(SCREEN_WIDTH)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and lower the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for on in row {
                write!(f, "{}", if *on { "#" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.pixels.iter().filter(|p| **p).count();
        f.debug_struct("Framebuffer")
            .field("lit", &lit)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Represents an output device that can show a frame.
pub trait EmulatorOutput {
    fn draw(&mut self, frame: &Framebuffer);
}

/// An output device that only counts the frames it was given.
#[derive(Debug, Default)]
pub struct DummyOutput {
    pub frames: usize,
}

impl DummyOutput {
    pub fn new() -> DummyOutput {
        DummyOutput::default()
    }
}

impl EmulatorOutput for DummyOutput {
    fn draw(&mut self, _: &Framebuffer) {
        self.frames += 1;
    }
}
