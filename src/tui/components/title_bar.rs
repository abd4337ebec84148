//! # TitleBar Component
//!
//! Top status bar showing the app name and which screen the user is on.
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"Felsius v0.1.0 | Choose a conversion"`
//! 2. **Default**: `"Felsius v0.1.0"`

use crate::core::state::ScreenKind;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: short description of the current screen (may be empty)
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    /// Title bar for the given screen.
    pub fn for_screen(kind: ScreenKind) -> Self {
        let status = match kind {
            ScreenKind::SelectingConversion => "Choose a conversion",
            ScreenKind::EditingInput => "Adjust the measurement",
            ScreenKind::ShowingResult => "Done",
        };
        Self::new(status.to_string())
    }

    pub fn text(&self) -> String {
        let name = format!("Felsius v{}", env!("CARGO_PKG_VERSION"));
        if self.status_message.is_empty() {
            name
        } else {
            format!("{} | {}", name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
