//! # Session State
//!
//! All state for one run of the converter. No TUI types in here; the TUI
//! reads it through `view::render`.
//!
//! ```text
//! App
//! ├── settings: SessionSettings     // start value + result policies
//! └── screen: Screen                // the authoritative phase
//!     ├── SelectingConversion { cursor }
//!     ├── EditingInput { option, input }
//!     └── ShowingResult { option, input, output }
//! ```
//!
//! Each phase carries only the fields that are meaningful in it, so "an
//! output without a result screen" or "an input screen without a chosen
//! conversion" can't be built. The accessors below expose the logical
//! fields for callers that don't care about the phase.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::SymbolStyle;
use crate::core::convert::ConversionOption;

/// Policies that differ between observed variants of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Input value shown when the input screen opens.
    pub start_value: i64,
    /// Ignore up/down once the result is shown. When false, up/down reopen the input
    /// screen rather than editing behind a result that stays up, so the output never
    /// disagrees with the input shown next to it.
    pub freeze_result: bool,
    /// Leave the program as soon as the result has been drawn.
    pub exit_on_result: bool,
    pub symbols: SymbolStyle,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            start_value: 0,
            freeze_result: true,
            exit_on_result: false,
            symbols: SymbolStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    SelectingConversion {
        cursor: usize,
    },
    EditingInput {
        option: ConversionOption,
        input: i64,
    },
    ShowingResult {
        option: ConversionOption,
        input: i64,
        /// Formatted once, when the conversion is computed.
        output: String,
    },
}

/// Discriminant of [`Screen`], for logging and matching without fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    SelectingConversion,
    EditingInput,
    ShowingResult,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::SelectingConversion { .. } => ScreenKind::SelectingConversion,
            Screen::EditingInput { .. } => ScreenKind::EditingInput,
            Screen::ShowingResult { .. } => ScreenKind::ShowingResult,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub settings: SessionSettings,
    pub screen: Screen,
}

impl App {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            screen: Screen::SelectingConversion { cursor: 0 },
        }
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Menu cursor. `None` once a conversion has been chosen.
    pub fn cursor_index(&self) -> Option<usize> {
        match self.screen {
            Screen::SelectingConversion { cursor } => Some(cursor),
            _ => None,
        }
    }

    pub fn chosen_option(&self) -> Option<ConversionOption> {
        match self.screen {
            Screen::SelectingConversion { .. } => None,
            Screen::EditingInput { option, .. } | Screen::ShowingResult { option, .. } => {
                Some(option)
            }
        }
    }

    pub fn input_value(&self) -> Option<i64> {
        match self.screen {
            Screen::SelectingConversion { .. } => None,
            Screen::EditingInput { input, .. } | Screen::ShowingResult { input, .. } => {
                Some(input)
            }
        }
    }

    pub fn output_text(&self) -> Option<&str> {
        match &self.screen {
            Screen::ShowingResult { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Computes the result for `option` at `input` using this session's symbol style.
    pub fn conversion_text(&self, option: ConversionOption, input: i64) -> String {
        option.convert(input).format(self.settings.symbols)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
