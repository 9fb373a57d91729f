//! Input thread: crossterm polling + timer ticks.
//!
//! One producer thread translates terminal events into engine messages and
//! emits `TimerTick` whenever the poll window elapses, so the consumer loop
//! can block on `recv` without ever starving the busy-indicator animation.

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::warn;

use crate::core::message::{Key, Message};

/// Spawns the polling thread. Returns a sender for other producers
/// (launched operations) plus the single consumer receiver.
pub fn spawn_input_thread(
    tick_rate: Duration,
) -> (mpsc::Sender<Message>, mpsc::Receiver<Message>) {
    let (tx, rx) = mpsc::channel();
    let poll_tx = tx.clone();

    std::thread::spawn(move || {
        loop {
            match event::poll(tick_rate) {
                Ok(true) => {
                    let ev = match event::read() {
                        Ok(ev) => ev,
                        Err(e) => {
                            warn!("input read failed: {e}");
                            break;
                        }
                    };
                    let message = match ev {
                        // Only forward Press events — Windows sends Release
                        // and Repeat too, which causes double input.
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            map_key(key.code, key.modifiers).map(Message::KeyPressed)
                        }
                        Event::Resize(w, h) => Some(Message::Resized(w, h)),
                        _ => None,
                    };
                    if let Some(message) = message {
                        if poll_tx.send(message).is_err() {
                            break;
                        }
                    }
                }
                // No event within the tick window → send a timer tick.
                Ok(false) => {
                    if poll_tx.send(Message::TimerTick).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("input poll failed: {e}");
                    break;
                }
            }
        }
    });

    (tx, rx)
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::CtrlC),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Esc) => Some(Key::Escape),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Backspace) => Some(Key::Backspace),
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_basics() {
        assert_eq!(
            map_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(Key::Enter)
        );
        assert_eq!(map_key(KeyCode::Esc, KeyModifiers::NONE), Some(Key::Escape));
        assert_eq!(
            map_key(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Key::Char('x'))
        );
        assert_eq!(map_key(KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_ctrl_c_is_not_a_plain_char() {
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::CtrlC)
        );
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::NONE),
            Some(Key::Char('c'))
        );
    }
}
