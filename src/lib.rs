/*!

A CHIP-8 virtual machine as specified at https://en.wikipedia.org/wiki/CHIP-8.

The crate is only the machine: loading files, drawing the screen, playing the
tone and reading a keyboard are left to whoever drives it. A headless driver
is included and can be run with `cargo run --release --bin chip8_run -- <program>`.

# Library

The main way of running a program is to load instructions as bytes
and call `step` once per tick.

```rust
use chip8_vm::emulator::Emulator;

let mut emulator = Emulator::new();

// Load a program at address 0x200.
let program = [
    0x60, 0x05, // LD V0, 5
    0x61, 0x03, // LD V1, 3
    0x80, 0x14, // ADD V0, V1
];
emulator.load(&program).unwrap();
for _ in 0..3 {
    emulator.step().unwrap();
}
assert_eq!(emulator.registers().get(0), 8);
assert_eq!(emulator.registers().get(0xF), 0);
```

Alternatively, you can experiment by executing instructions manually.
This does not touch the timers, which only count down in `step`.

```rust
use chip8_vm::emulator::Emulator;
use chip8_vm::emulator::instruction::{Instruction, Reg, Const, Addr};

let mut emulator = Emulator::new();

// Execute instructions manually
emulator.execute_single(Instruction::ClearScreen).unwrap();

// Or many sequentially
emulator.execute_many(&[
    Instruction::Goto(Addr(0x250)),
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA))
]).unwrap();
assert_eq!(emulator.registers().pc(), 0x250);
assert_eq!(emulator.registers().get(0xB), 35);
```

## Input and output

Keys are pressed and released with `Emulator::set_key`. The screen is handed to
anything implementing `EmulatorOutput`, and only when it changed:

```rust
use chip8_vm::emulator::Emulator;
use chip8_vm::emulator::output::{EmulatorOutput, Framebuffer};

struct Printer;

impl EmulatorOutput for Printer {
    fn draw(&mut self, frame: &Framebuffer) {
        print!("{}", frame);
    }
}

let mut emulator = Emulator::new();
emulator.load(&[0x00, 0xE0]).unwrap();
emulator.step().unwrap();
assert!(emulator.present(&mut Printer));
assert!(!emulator.present(&mut Printer));
```
*/

pub mod emulator;
pub mod util;
