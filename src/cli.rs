//! Command-line interface and the per-command drivers.
//!
//! Drivers take their input and output streams as parameters so the
//! binary and the tests run exactly the same code.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::analyzer::{self, TextReport};
use crate::config::Config;
use crate::error::AppError;
use crate::menu::{self, MenuOutcome};
use crate::messages::{Language, Messages};
use crate::numbers::{self, NumbersReport};

/// Basic types: text analysis, temperature conversion and numeric demos
#[derive(Parser, Debug)]
#[command(name = "basic-types")]
#[command(version)]
#[command(about = "Text analysis, temperature conversion and numeric type demos", long_about = None)]
pub struct Cli {
    /// Path to config file (default: <config_dir>/basic-types/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output language
    #[arg(long, value_enum, global = true)]
    pub lang: Option<Language>,

    /// Decimal places for temperatures
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report length, reversed form and vowel count of a string
    ///
    /// Reads one line from stdin when TEXT is omitted.
    Strings {
        /// Text to analyze
        text: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive Celsius / Fahrenheit converter
    Temperature,

    /// Arithmetic, circle area and u8 overflow demonstration
    Numbers {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(lang) = self.lang {
            config.display.language = lang;
        }
        if let Some(precision) = self.precision {
            config.display.precision = precision;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Analyzes `text`, or the first line of `input` when `text` is `None`.
pub fn run_strings<R: BufRead, W: Write>(
    text: Option<&str>,
    json: bool,
    mut input: R,
    output: &mut W,
    messages: &Messages,
) -> Result<TextReport, AppError> {
    let owned;
    let text = match text {
        Some(text) => text,
        None => {
            if !json {
                write!(output, "{}", messages.enter_string())?;
                output.flush()?;
            }
            let mut line = String::new();
            input.read_line(&mut line)?;
            owned = line.trim_end_matches(['\r', '\n']).to_string();
            owned.as_str()
        }
    };

    let report = analyzer::analyze(text);

    if json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        writeln!(output)?;
        writeln!(output, "{}", messages.string_length(report.length))?;
        writeln!(output, "{}", messages.reversed_string(&report.reversed))?;
        writeln!(output, "{}", messages.vowel_count(report.vowels))?;
    }

    Ok(report)
}

pub fn run_temperature<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    messages: &Messages,
    precision: usize,
) -> Result<MenuOutcome, AppError> {
    menu::run_menu(input, output, messages, precision)
}

pub fn run_numbers<W: Write>(
    json: bool,
    output: &mut W,
    messages: &Messages,
) -> Result<NumbersReport, AppError> {
    let report = numbers::demo();
    if json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        write!(output, "{}", numbers::render(&report, messages))?;
    }
    Ok(report)
}
