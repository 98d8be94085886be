//! Numeric types demonstration: mixed arithmetic, circle area and
//! `u8` overflow.
//!
//! Rust never mixes numeric types implicitly, so every operand is widened
//! to `f64` with `as` before the arithmetic happens. Overflow is spelled
//! out with `wrapping_add` / `checked_add`; a bare `+= 1` on `255u8`
//! panics in debug builds.

use std::f64::consts::PI;
use std::fmt::Write as _;

use serde::Serialize;

use crate::messages::Messages;

const A: i64 = 10;
#[allow(clippy::approx_constant)]
const B: f64 = 3.14;
const C: i32 = 5;
const RADIUS: f64 = 5.0;

/// One line of the arithmetic demonstration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub expression: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverflowDemo {
    pub before: u8,
    pub wrapped: u8,
    pub checked: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumbersReport {
    pub operations: Vec<Operation>,
    pub radius: f64,
    pub area: f64,
    pub overflow: OverflowDemo,
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Increments `value` by one, wrapping at `u8::MAX`.
pub fn overflow_increment(value: u8) -> OverflowDemo {
    OverflowDemo {
        before: value,
        wrapped: value.wrapping_add(1),
        checked: value.checked_add(1),
    }
}

pub fn demo() -> NumbersReport {
    let operations = vec![
        Operation {
            expression: "a as f64 + c as f64",
            value: A as f64 + C as f64,
        },
        Operation {
            expression: "b * a as f64",
            value: B * A as f64,
        },
        Operation {
            expression: "a as f64 / b",
            value: A as f64 / B,
        },
    ];

    NumbersReport {
        operations,
        radius: RADIUS,
        area: circle_area(RADIUS),
        overflow: overflow_increment(u8::MAX),
    }
}

/// Renders `report` as the console text of the demo.
pub fn render(report: &NumbersReport, messages: &Messages) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", messages.arithmetic_header());
    for op in &report.operations {
        let _ = writeln!(out, "{} = {:.2}", op.expression, op.value);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", messages.circle_area(report.radius, report.area));

    let overflow = &report.overflow;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", messages.overflow_header());
    let _ = writeln!(out, "x = {}", overflow.before);
    let _ = writeln!(out, "{} = {}", messages.after_increment(), overflow.wrapped);
    if overflow.checked.is_none() {
        let _ = writeln!(out, "{}", messages.checked_overflow());
    }

    out
}
