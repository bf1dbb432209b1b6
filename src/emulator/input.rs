use std::sync::{Arc, RwLock};

pub const NUM_KEYS: usize = 16;

/// Represents an input device that knows which of the keys 0..=0xF are down.
pub trait EmulatorInput {
    /// Keys outside 0..=0xF are never pressed.
    fn is_pressed(&self, key: u8) -> bool;
}

/// An input device that never provides any input
pub struct DummyInput;

impl EmulatorInput for DummyInput {
    fn is_pressed(&self, _: u8) -> bool {
        false
    }
}

/// A snapshot of the keypad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyboard {
    keys: [bool; NUM_KEYS],
}

impl Keyboard {
    pub fn new() -> Keyboard {
        Keyboard::default()
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    /// Out of range keys are ignored.
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(state) = self.keys.get_mut(key as usize) {
            *state = pressed;
        }
    }

    pub fn clear(&mut self) {
        self.keys = [false; NUM_KEYS];
    }
}

impl EmulatorInput for Keyboard {
    fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }
}

/// A keyboard that one thread refreshes while the emulator reads it.
#[derive(Debug, Clone, Default)]
pub struct SharedKeyboard {
    keys: Arc<RwLock<Keyboard>>,
}

impl SharedKeyboard {
    pub fn new() -> SharedKeyboard {
        SharedKeyboard::default()
    }

    /// Replace the whole snapshot.
    pub fn store(&self, keyboard: Keyboard) {
        match self.keys.write() {
            Ok(mut guard) => *guard = keyboard,
            Err(_) => log::warn!("Keyboard lock poisoned, dropping update"),
        }
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> Keyboard {
        self.keys.read().map(|guard| *guard).unwrap_or_default()
    }
}

impl EmulatorInput for SharedKeyboard {
    fn is_pressed(&self, key: u8) -> bool {
        self.snapshot().is_pressed(key)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::thread;

    #[test]
    fn pressed_keys_are_reported() {
        let mut keyboard = Keyboard::new();
        keyboard.press(0xA);
        assert!(keyboard.is_pressed(0xA));
        assert!(!keyboard.is_pressed(0xB));
        keyboard.release(0xA);
        assert!(!keyboard.is_pressed(0xA));
    }

    #[test]
    fn keys_out_of_range_are_never_pressed() {
        let mut keyboard = Keyboard::new();
        keyboard.press(0x10);
        assert!(!keyboard.is_pressed(0x10));
        assert!(!keyboard.is_pressed(0xFF));
        assert_eq!(keyboard, Keyboard::new());
    }

    #[test]
    fn shared_keyboard_sees_updates_from_other_threads() {
        let shared = SharedKeyboard::new();
        let writer = shared.clone();

        thread::spawn(move || {
            let mut keyboard = Keyboard::new();
            keyboard.press(3);
            writer.store(keyboard);
        })
        .join()
        .unwrap();

        assert!(shared.is_pressed(3));
        assert!(!shared.is_pressed(4));
    }
}
