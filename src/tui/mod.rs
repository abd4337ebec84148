//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` and only redraws after an
//! event (key press or terminal resize). All pending events are drained
//! before the next draw.

mod component;
mod components;
mod event;
mod ui;

pub use event::{TuiEvent, map_key};

use log::{debug, info};
use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::state::{App, SessionSettings};
use crate::core::view;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user quit.
    Quit,
    /// The result was computed with `exit_on_result` set. Carries the final frame.
    Finished(String),
}

pub fn run(settings: SessionSettings) -> std::io::Result<Outcome> {
    let mut app = App::new(settings);
    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialized");

    let result = event_loop(&mut terminal, &mut app);

    ratatui::restore();
    info!("Terminal restored");

    let outcome = result?;
    if let Outcome::Finished(ref frame) = outcome {
        print!("{frame}");
    }
    Ok(outcome)
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<Outcome> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if let Some(action) = event.action() {
                match update(app, action) {
                    Effect::None => {}
                    Effect::Quit => {
                        info!("Quit requested on {:?}", app.kind());
                        return Ok(Outcome::Quit);
                    }
                    Effect::Finish => {
                        terminal.draw(|f| ui::draw_ui(f, app))?;
                        info!("Result computed, finishing");
                        return Ok(Outcome::Finished(view::render(app).to_string()));
                    }
                }
            } else {
                debug!("Redraw for {:?}", event);
            }
            next = poll_event_immediate()?;
        }
    }
}
