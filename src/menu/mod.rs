//! Interactive temperature converter menu.
//!
//! The loop reads one line per step, turns it into a [`MenuIntent`],
//! prints whatever that intent produces and hands it to [`MenuReducer`]
//! for the next state. It stops on menu item 3 or end of input.

mod intent;
pub mod mvi;
mod reducer;
mod state;

use std::io::{BufRead, Write};

pub use intent::MenuIntent;
pub use reducer::MenuReducer;
pub use state::MenuState;

use crate::error::AppError;
use crate::messages::Messages;
use crate::temperature::{self, Conversion, Scale, WaterPhase};
use mvi::Reducer;

/// How a menu session ended and what it converted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuOutcome {
    pub conversions: Vec<Conversion>,
    /// `true` when the user picked "exit", `false` when input ran out.
    pub exited_by_user: bool,
}

/// Runs the menu until the user exits or `input` is exhausted.
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    messages: &Messages,
    precision: usize,
) -> Result<MenuOutcome, AppError> {
    let mut state = MenuState::default();
    let mut outcome = MenuOutcome::default();
    let mut buf = Vec::new();

    while !state.is_exited() {
        render_prompt(output, messages, &state)?;
        output.flush()?;

        // Invalid UTF-8 is bad input for the current prompt, not a stream error
        buf.clear();
        let read = input.read_until(b'\n', &mut buf)?;
        let line = String::from_utf8_lossy(&buf);
        let intent = MenuIntent::from_line(&state, (read > 0).then_some(line.as_ref()));
        tracing::debug!(?state, ?intent, "Menu input");

        match &intent {
            MenuIntent::Exit => {
                writeln!(output, "{}", messages.goodbye())?;
                outcome.exited_by_user = true;
            }
            MenuIntent::InvalidChoice(_) => {
                writeln!(output, "{}", messages.invalid_choice())?;
            }
            MenuIntent::InvalidTemperature(raw) => {
                writeln!(output, "{}", messages.invalid_temperature(raw))?;
            }
            MenuIntent::Temperature(value) => {
                if let MenuState::AwaitingTemperature { scale } = state {
                    let conversion = temperature::convert(scale, *value);
                    render_conversion(output, messages, &conversion, precision)?;
                    outcome.conversions.push(conversion);
                }
            }
            MenuIntent::EndOfInput => writeln!(output)?,
            MenuIntent::Select(_) => {}
        }

        state = MenuReducer::reduce(state, intent);
    }

    tracing::debug!(
        conversions = outcome.conversions.len(),
        exited_by_user = outcome.exited_by_user,
        "Menu finished"
    );
    Ok(outcome)
}

fn render_prompt<W: Write>(
    output: &mut W,
    messages: &Messages,
    state: &MenuState,
) -> std::io::Result<()> {
    match state {
        MenuState::AwaitingChoice => {
            writeln!(output)?;
            writeln!(output, "{}", messages.menu_title())?;
            for option in messages.menu_options() {
                writeln!(output, "{option}")?;
            }
            write!(output, "{}", messages.choose_action())
        }
        MenuState::AwaitingTemperature { scale: Scale::Celsius } => {
            write!(output, "{}", messages.enter_celsius())
        }
        MenuState::AwaitingTemperature {
            scale: Scale::Fahrenheit,
        } => write!(output, "{}", messages.enter_fahrenheit()),
        MenuState::Exited => Ok(()),
    }
}

fn render_conversion<W: Write>(
    output: &mut W,
    messages: &Messages,
    conversion: &Conversion,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(output, "{}", conversion.display(precision))?;
    match conversion.phase() {
        Some(WaterPhase::Freezing) => writeln!(output, "{}", messages.freezing()),
        Some(WaterPhase::Boiling) => writeln!(output, "{}", messages.boiling()),
        None => Ok(()),
    }
}
