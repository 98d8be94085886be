//! Celsius / Fahrenheit conversion with water phase hints.

use std::fmt;

pub const FREEZING_C: f64 = 0.0;
pub const BOILING_C: f64 = 100.0;
pub const FREEZING_F: f64 = 32.0;
pub const BOILING_F: f64 = 212.0;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Temperature scale of an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
        }
    }

    /// The scale a value in `self` is converted into.
    pub fn other(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }

    pub fn freezing_point(self) -> f64 {
        match self {
            Scale::Celsius => FREEZING_C,
            Scale::Fahrenheit => FREEZING_F,
        }
    }

    pub fn boiling_point(self) -> f64 {
        match self {
            Scale::Celsius => BOILING_C,
            Scale::Fahrenheit => BOILING_F,
        }
    }
}

/// Whether water freezes or boils at a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterPhase {
    Freezing,
    Boiling,
}

/// Classifies `value` against the freezing and boiling points of `scale`.
/// Both thresholds are inclusive.
pub fn water_phase(scale: Scale, value: f64) -> Option<WaterPhase> {
    if value <= scale.freezing_point() {
        Some(WaterPhase::Freezing)
    } else if value >= scale.boiling_point() {
        Some(WaterPhase::Boiling)
    } else {
        None
    }
}

/// One converted temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub from: Scale,
    pub input: f64,
    pub output: f64,
}

impl Conversion {
    pub fn phase(&self) -> Option<WaterPhase> {
        water_phase(self.from, self.input)
    }

    /// Formats as `"{input}°C = {output}°F"` with `precision` decimal places.
    pub fn display(&self, precision: usize) -> ConversionDisplay<'_> {
        ConversionDisplay {
            conversion: self,
            precision,
        }
    }
}

pub struct ConversionDisplay<'a> {
    conversion: &'a Conversion,
    precision: usize,
}

impl fmt::Display for ConversionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.conversion;
        write!(
            f,
            "{:.p$}{} = {:.p$}{}",
            c.input,
            c.from.symbol(),
            c.output,
            c.from.other().symbol(),
            p = self.precision
        )
    }
}

/// Converts `value`, given in `from`, into the other scale.
pub fn convert(from: Scale, value: f64) -> Conversion {
    let output = match from {
        Scale::Celsius => celsius_to_fahrenheit(value),
        Scale::Fahrenheit => fahrenheit_to_celsius(value),
    };
    Conversion {
        from,
        input: value,
        output,
    }
}
