//! Display formatting
//!
//! Turns raw operand text into what a keypad shows: digit grouping on the
//! integer part, fraction digits kept exactly as typed so a trailing `.` or
//! `0` stays visible while the user is entering it.

use crate::engine::{CalculatorEngine, ERROR_SENTINEL};
use serde::Serialize;
use std::fmt;

const GROUP_SEPARATOR: char = ',';

/// Format operand text for display
///
/// ```
/// use keypad_calc::display::format_operand;
///
/// assert_eq!(format_operand("1234567.50", true), "1,234,567.50");
/// assert_eq!(format_operand("1234567.50", false), "1234567.50");
/// assert_eq!(format_operand("Error", true), "Error");
/// ```
pub fn format_operand(operand: &str, grouping: bool) -> String {
    if operand == ERROR_SENTINEL {
        return ERROR_SENTINEL.to_string();
    }

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let mut out = format_integer(integer, grouping);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn format_integer(integer: &str, grouping: bool) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.is_empty() {
        return sign.to_string();
    }

    let trimmed = digits.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if grouping && i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// One rendered frame: the optional "previous operand + operator" line and
/// the main line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayView {
    pub previous: Option<String>,
    pub current: String,
}

impl DisplayView {
    pub fn from_engine(engine: &CalculatorEngine, grouping: bool) -> Self {
        let previous = engine.pending_operator().map(|op| {
            format!(
                "{} {}",
                format_operand(engine.previous_operand(), grouping),
                op.symbol()
            )
        });

        Self {
            previous,
            current: format_operand(&engine.display_text(), grouping),
        }
    }
}

impl fmt::Display for DisplayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.previous {
            Some(previous) => write!(f, "{} | {}", previous, self.current),
            None => write!(f, "{}", self.current),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::token::{DigitToken, Operator};

    #[test]
    fn test_grouping() {
        let cases = [
            ("0", "0"),
            ("12", "12"),
            ("123", "123"),
            ("1234", "1,234"),
            ("123456", "123,456"),
            ("1234567.891", "1,234,567.891"),
            ("-1234", "-1,234"),
            ("-123", "-123"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_operand(input, true), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_partial_input_preserved() {
        assert_eq!(format_operand("12.", true), "12.");
        assert_eq!(format_operand(".5", true), ".5");
        assert_eq!(format_operand("1000.000", true), "1,000.000");
        assert_eq!(format_operand(".", true), ".");
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(format_operand("007", true), "7");
        assert_eq!(format_operand("0001234", true), "1,234");
        assert_eq!(format_operand("00.5", true), "0.5");
        assert_eq!(format_operand("-0", true), "-0");
    }

    #[test]
    fn test_without_grouping() {
        assert_eq!(format_operand("9876543", false), "9876543");
    }

    #[test]
    fn test_view_initial() {
        let engine = CalculatorEngine::new();
        let view = DisplayView::from_engine(&engine, true);
        assert_eq!(view.previous, None);
        assert_eq!(view.current, "0");
        assert_eq!(view.to_string(), "0");
    }

    #[test]
    fn test_view_with_pending_operator() {
        let mut engine = CalculatorEngine::new();
        for c in "1500".chars() {
            engine.enter_digit(DigitToken::new(c).unwrap());
        }
        engine.choose_operator(Operator::Multiply);
        engine.enter_digit(DigitToken::new('2').unwrap());

        let view = DisplayView::from_engine(&engine, true);
        assert_eq!(view.previous.as_deref(), Some("1,500 *"));
        assert_eq!(view.current, "2");
        assert_eq!(view.to_string(), "1,500 * | 2");
    }

    #[test]
    fn test_view_pending_operator_empty_current() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit(DigitToken::new('4').unwrap());
        engine.choose_operator(Operator::Divide);

        let view = DisplayView::from_engine(&engine, false);
        assert_eq!(view.previous.as_deref(), Some("4 /"));
        assert_eq!(view.current, "0");
    }
}
