use crate::menu::mvi::Intent;
use crate::menu::state::MenuState;
use crate::temperature::Scale;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuIntent {
    /// Menu item 1 or 2: convert from the given scale.
    Select(Scale),
    /// Menu item 3.
    Exit,
    /// Anything else typed at the menu prompt, including non-numbers.
    InvalidChoice(String),
    /// A parsed temperature value.
    Temperature(f64),
    /// Input at the temperature prompt that is not a number.
    InvalidTemperature(String),
    /// Input stream closed.
    EndOfInput,
}

impl Intent for MenuIntent {}

impl MenuIntent {
    /// Interprets one input line in the context of `state`.
    ///
    /// `None` means the input stream is exhausted.
    pub fn from_line(state: &MenuState, line: Option<&str>) -> Self {
        let Some(line) = line else {
            return MenuIntent::EndOfInput;
        };
        let raw = line.trim();

        match state {
            MenuState::AwaitingTemperature { .. } => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => MenuIntent::Temperature(value),
                _ => MenuIntent::InvalidTemperature(raw.to_string()),
            },
            MenuState::AwaitingChoice | MenuState::Exited => match raw.parse::<u32>() {
                Ok(1) => MenuIntent::Select(Scale::Celsius),
                Ok(2) => MenuIntent::Select(Scale::Fahrenheit),
                Ok(3) => MenuIntent::Exit,
                _ => MenuIntent::InvalidChoice(raw.to_string()),
            },
        }
    }
}
