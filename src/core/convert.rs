//! # Conversions
//!
//! Pure arithmetic between Celsius, Fahrenheit and Felsius.
//!
//! Felsius is the mean of the Celsius and Fahrenheit readings of the same
//! temperature, which works out to `1.4 * c + 16`. The two inverse formulas
//! below are the algebraic inverses of that chain:
//!
//! ```text
//! fe = (c + (1.8c + 32)) / 2      =>  c = (fe - 16) * 5 / 7
//! fe = ((f - 32) / 1.8 + f) / 2   =>  f = (fe * 9 + 80) / 7
//! ```

use std::fmt;

use crate::SymbolStyle;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Felsius reading from a Celsius and a Fahrenheit reading of one temperature.
pub fn felsius(celsius: f64, fahrenheit: f64) -> f64 {
    (celsius + fahrenheit) / 2.0
}

pub fn felsius_to_celsius(felsius: f64) -> f64 {
    (felsius - 16.0) * 5.0 / 7.0
}

pub fn felsius_to_fahrenheit(felsius: f64) -> f64 {
    (felsius * 9.0 + 80.0) / 7.0
}

/// Truncates toward zero for display, saturating at the `i64` limits.
pub fn truncate(value: f64) -> i64 {
    value as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Felsius,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°c",
            Scale::Fahrenheit => "°f",
            Scale::Felsius => "°ϵ",
        }
    }

    /// Symbol printed after a converted value under the given style.
    pub fn result_symbol(self, style: SymbolStyle) -> &'static str {
        match (style, self) {
            (SymbolStyle::LegacyCelsius, Scale::Celsius | Scale::Fahrenheit) => {
                Scale::Celsius.symbol()
            }
            _ => self.symbol(),
        }
    }
}

/// One of the four conversions offered in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOption {
    CelsiusToFelsius,
    FahrenheitToFelsius,
    FelsiusToCelsius,
    FelsiusToFahrenheit,
}

impl ConversionOption {
    /// Menu order.
    pub const ALL: [ConversionOption; 4] = [
        ConversionOption::CelsiusToFelsius,
        ConversionOption::FahrenheitToFelsius,
        ConversionOption::FelsiusToCelsius,
        ConversionOption::FelsiusToFahrenheit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConversionOption::CelsiusToFelsius => "Celsius to Felsius",
            ConversionOption::FahrenheitToFelsius => "Fahrenheit to Felsius",
            ConversionOption::FelsiusToCelsius => "Felsius to Celsius",
            ConversionOption::FelsiusToFahrenheit => "Felsius to Fahrenheit",
        }
    }

    pub fn source(self) -> Scale {
        match self {
            ConversionOption::CelsiusToFelsius => Scale::Celsius,
            ConversionOption::FahrenheitToFelsius => Scale::Fahrenheit,
            ConversionOption::FelsiusToCelsius | ConversionOption::FelsiusToFahrenheit => {
                Scale::Felsius
            }
        }
    }

    pub fn target(self) -> Scale {
        match self {
            ConversionOption::CelsiusToFelsius | ConversionOption::FahrenheitToFelsius => {
                Scale::Felsius
            }
            ConversionOption::FelsiusToCelsius => Scale::Celsius,
            ConversionOption::FelsiusToFahrenheit => Scale::Fahrenheit,
        }
    }

    /// Converts a reading on the source scale to the target scale.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ConversionOption::CelsiusToFelsius => felsius(value, celsius_to_fahrenheit(value)),
            ConversionOption::FahrenheitToFelsius => felsius(fahrenheit_to_celsius(value), value),
            ConversionOption::FelsiusToCelsius => felsius_to_celsius(value),
            ConversionOption::FelsiusToFahrenheit => felsius_to_fahrenheit(value),
        }
    }

    /// Runs the conversion on an integer input and returns the displayable result.
    pub fn convert(self, input: i64) -> Conversion {
        Conversion {
            option: self,
            input,
            output: truncate(self.apply(input as f64)),
        }
    }
}

impl fmt::Display for ConversionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed conversion, ready to be formatted as `"<in><src> = <out><dst>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub option: ConversionOption,
    pub input: i64,
    pub output: i64,
}

impl Conversion {
    pub fn format(&self, style: SymbolStyle) -> String {
        format!(
            "{}{} = {}{}",
            self.input,
            self.option.source().symbol(),
            self.output,
            self.option.target().result_symbol(style)
        )
    }
}
