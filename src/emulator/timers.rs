/// The delay and sound countdown registers.
///
/// Both count down once per executed instruction rather than at a
/// fixed 60 Hz, so their real-time rate follows the step rate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Timers {
        Timers::default()
    }

    /// Count both timers down by one, stopping at zero.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    /// The tone plays for as long as the sound timer is positive.
    pub fn is_sounding(&self) -> bool {
        self.sound > 0
    }
}
