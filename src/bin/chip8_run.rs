use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use chip8_vm::emulator::input::key_for_char;
use chip8_vm::emulator::output::{EmulatorOutput, Framebuffer};
use chip8_vm::emulator::Emulator;

/// Run a CHIP-8 program without a window.
#[derive(StructOpt, Debug)]
#[structopt(name = "chip8_run")]
struct Opt {
    /// Instructions executed per second
    #[structopt(long, default_value = "500")]
    hz: u64,

    /// Stop after this many instructions
    #[structopt(long)]
    cycles: Option<u64>,

    /// Keys held down for the whole run, using the 1234/qwer/asdf/zxcv layout
    #[structopt(long, default_value = "")]
    hold: String,

    /// Seed for the random instruction
    #[structopt(long)]
    seed: Option<u64>,

    /// Print every frame to stdout as it changes
    #[structopt(long)]
    show: bool,

    /// Print the final frame to stdout before exiting
    #[structopt(long)]
    dump: bool,

    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

/// Writes frames to stdout as text.
struct TextOutput;

impl EmulatorOutput for TextOutput {
    fn draw(&mut self, frame: &Framebuffer) {
        println!("{}", frame);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);
    let program = std::fs::read(&opt.input)?;

    // Load instructions into emulator memory
    let mut emulator = match opt.seed {
        Some(seed) => Emulator::with_seed(seed),
        None => Emulator::new(),
    };
    emulator.load(&program)?;

    for c in opt.hold.chars() {
        match key_for_char(c) {
            Some(key) => emulator.set_key(key, true),
            None => log::warn!("{:?} is not bound to any key", c),
        }
    }

    // Start execution
    let interval = Duration::from_micros(1_000_000 / opt.hz.max(1));
    let mut output = TextOutput;
    let mut executed = 0u64;
    let mut faults = 0u64;
    while opt.cycles.map_or(true, |cycles| executed < cycles) {
        if emulator.step().is_err() {
            faults += 1;
        }
        executed += 1;
        if opt.show {
            emulator.present(&mut output);
        }
        std::thread::sleep(interval);
    }

    log::info!("Executed {} instructions, {} stack faults", executed, faults);
    if opt.dump {
        output.draw(emulator.framebuffer());
    }

    Ok(())
}
