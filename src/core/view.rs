//! # View
//!
//! Turns the session state into a complete frame of plain text. The TUI
//! draws this frame as-is (adding only colour), so every screen has exactly
//! one textual rendering and it can be asserted on without a terminal.
//!
//! ```text
//! What conversion do you want to do?     <- title
//!
//! > 1. Celsius to Felsius                <- lines (cursor row highlighted)
//!   2. Fahrenheit to Felsius
//!   ...
//!
//! Press q to quit.                       <- footer
//! ```

use std::fmt;

use crate::core::convert::ConversionOption;
use crate::core::state::{App, Screen};

pub const QUIT_HINT: &str = "Press q to quit.";
pub const INPUT_HINT: &str = "up/down to adjust, enter to convert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    /// The line the user is acting on: the cursor row, the input, or the result.
    pub highlighted: bool,
}

impl ViewLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub lines: Vec<ViewLine>,
    pub footer: String,
}

pub fn render(app: &App) -> View {
    let (title, lines) = match &app.screen {
        Screen::SelectingConversion { cursor } => {
            let lines: Vec<ViewLine> = ConversionOption::ALL
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    if i == *cursor {
                        ViewLine::highlighted(format!("> {}. {}", i + 1, option.label()))
                    } else {
                        ViewLine::plain(format!("  {}. {}", i + 1, option.label()))
                    }
                })
                .collect();
            ("What conversion do you want to do?".to_string(), lines)
        }
        Screen::EditingInput { option, input } => (
            format!("Enter measurement for conversion (from {})", option.label()),
            vec![
                ViewLine::highlighted(input.to_string()),
                ViewLine::plain(""),
                ViewLine::plain(INPUT_HINT),
            ],
        ),
        Screen::ShowingResult { option, output, .. } => (
            format!("Result of {}", option.label()),
            vec![ViewLine::highlighted(output.clone())],
        ),
    };

    View {
        title,
        lines,
        footer: QUIT_HINT.to_string(),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.footer)
    }
}
