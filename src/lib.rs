//! Felsius library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

/// Which degree symbol a conversion result carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolStyle {
    /// Results carry the target scale's own symbol.
    #[default]
    Scale,
    /// Celsius and Fahrenheit results are both suffixed with `°c`.
    LegacyCelsius,
}
