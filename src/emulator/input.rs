pub const NUM_KEYS: usize = 16;

/// The default binding from a QWERTY keyboard to the hex keypad.
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// q w e r        4 5 6 D
/// a s d f   ->   7 8 9 E
/// z x c v        A 0 B F
/// ```
pub const DEFAULT_BINDING: [(char, u8); NUM_KEYS] = [
    ('1', 0x1),
    ('2', 0x2),
    ('3', 0x3),
    ('4', 0xC),
    ('q', 0x4),
    ('w', 0x5),
    ('e', 0x6),
    ('r', 0xD),
    ('a', 0x7),
    ('s', 0x8),
    ('d', 0x9),
    ('f', 0xE),
    ('z', 0xA),
    ('x', 0x0),
    ('c', 0xB),
    ('v', 0xF),
];

/// Look up the keypad key bound to a keyboard character.
pub fn key_for_char(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    DEFAULT_BINDING
        .iter()
        .find(|(bound, _)| *bound == c)
        .map(|(_, key)| *key)
}

/// The state of the 16 key hex keypad.
///
/// Indices outside `0..16` name no key: they are never pressed
/// and never released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS],
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad::default()
    }

    /// Press or release a key. Indices outside the keypad are ignored.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        match self.keys.get_mut(key as usize) {
            Some(slot) => *slot = pressed,
            None => log::warn!("Ignoring state change of unknown key {:#x}", key),
        }
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    pub fn is_released(&self, key: u8) -> bool {
        self.keys.get(key as usize).map(|down| !down).unwrap_or(false)
    }

    /// The lowest numbered key currently held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|down| *down).map(|key| key as u8)
    }

    pub fn keys(&self) -> &[bool; NUM_KEYS] {
        &self.keys
    }
}
