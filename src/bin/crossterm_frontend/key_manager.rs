use chip_8_cpu::emulator::input::{Keyboard, SharedKeyboard, NUM_KEYS};
use crossterm::event::{poll, read, Event, KeyCode};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long a key counts as held after the terminal reports it.
/// Terminals only send presses, never releases.
const HOLD_TIME: Duration = Duration::from_millis(250);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A struct for managing keypresses that will automatically
/// start a thread that grabs keypresses.
pub struct KeyManager {
    stop: Arc<AtomicBool>,
    event_listener: Option<JoinHandle<()>>,
}

impl KeyManager {
    /// Start the event listener thread. It keeps `keyboard` up to date
    /// and sets `stop` when the user quits.
    pub fn new(keyboard: SharedKeyboard, stop: Arc<AtomicBool>) -> KeyManager {
        let event_listener = event_listener(keyboard, stop.clone());
        KeyManager {
            stop,
            event_listener: Some(event_listener),
        }
    }
}

impl Drop for KeyManager {
    fn drop(&mut self) {
        // Tell the event listener to stop, and wait for it
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.event_listener.take() {
            if handle.join().is_err() {
                log::warn!("Key listener panicked");
            }
        }
    }
}

/// Starts a thread that listens for key events and refreshes the keyboard snapshot.
fn event_listener(keyboard: SharedKeyboard, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut pressed_at: [Option<Instant>; NUM_KEYS] = [None; NUM_KEYS];

        while !stop.load(Ordering::Relaxed) {
            match poll(POLL_INTERVAL) {
                Ok(true) => match read() {
                    Ok(Event::Key(key_event)) => {
                        log::debug!("Got key {:?}", key_event);
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Esc => stop.store(true, Ordering::Relaxed),
                            code => {
                                if let Some(key) = key_to_u8(code) {
                                    pressed_at[key as usize] = Some(Instant::now());
                                }
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("Could not read event: {}", e),
                },
                Ok(false) => {}
                Err(e) => log::warn!("Could not poll events: {}", e),
            }

            let mut snapshot = Keyboard::new();
            for (key, timestamp) in pressed_at.iter().enumerate() {
                let held = timestamp.map_or(false, |t| t.elapsed() < HOLD_TIME);
                snapshot.set(key as u8, held);
            }
            keyboard.store(snapshot);
        }
    })
}

/// Keys 0-9 and a-f map to the hexadecimal keypad.
fn key_to_u8(key: KeyCode) -> Option<u8> {
    match key {
        KeyCode::Char(c) => c.to_digit(16).map(|c| c as u8),
        _ => None,
    }
}
