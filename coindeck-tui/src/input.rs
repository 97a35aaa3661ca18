//! Keyboard input dispatch — overlay keys first, then global keys.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Windows terminals emit Press and Release; act on Press only.
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Overlays consume input first: any key dismisses.
    if app.overlay != Overlay::None {
        app.overlay = Overlay::None;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('r') => {
            app.request_refresh(Instant::now());
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
            app.select_next();
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
            app.select_prev();
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_index(digit as usize - 1);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::worker::WorkerResponse;
    use coindeck_core::feed::{QuoteProvider, SampleProvider};
    use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};
    use std::sync::mpsc;
    use std::time::Duration;

    fn test_app() -> AppState {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let mut app = AppState::new(
            cmd_tx,
            resp_rx,
            Duration::from_secs(60),
            "usd".into(),
            "sample".into(),
        );
        let ids: Vec<String> = vec!["bitcoin".into(), "ethereum".into(), "solana".into()];
        app.handle_response(WorkerResponse::RefreshDone {
            outcome: SampleProvider::new(7).fetch(&ids, "usd"),
        });
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        let mut ev = KeyEvent::new(code, KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        ev
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        handle_key(&mut app, release(KeyCode::Char('q')));
        assert!(app.running);
    }

    #[test]
    fn arrows_move_selection() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.selected, 1);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn digits_select_directly() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.selected, 2);
        // Out of range digit leaves the cursor alone.
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn help_overlay_opens_and_any_key_closes() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);

        // While the overlay is up, keys only dismiss it.
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }
}
