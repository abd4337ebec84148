use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Up,
    Down,
    Select,
    Quit,

    // TUI-local events (handled directly in TUI)
    Resize,
}

impl TuiEvent {
    /// The core action this event maps to, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Up => Some(Action::Up),
            TuiEvent::Down => Some(Action::Down),
            TuiEvent::Select => Some(Action::Select),
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Resize => None,
        }
    }
}

/// Maps a key press to an event. Unknown keys map to `None`.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Enhanced keyboard protocols also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Select),
        _ => None,
    }
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let mapped = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(mapped)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}
