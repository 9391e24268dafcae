//! Input tokens: operators and digit keys
//!
//! Both are closed types so the engine never sees free-form strings.

use crate::error::{KeypadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol shown next to the previous operand
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator with plain IEEE semantics.
    ///
    /// Division by zero is not guarded here; see `CalculatorEngine::evaluate`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = KeypadError;

    /// Accepts ASCII symbols and the usual button glyphs (`×`, `÷`, `−`)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "×" | "x" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(KeypadError::unknown_operator(other)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = KeypadError;

    fn try_from(c: char) -> Result<Self> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// A single digit key: `0`-`9` or the decimal separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitToken(char);

impl DigitToken {
    pub const SEPARATOR: DigitToken = DigitToken('.');

    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(DigitToken(c))
        } else {
            Err(KeypadError::invalid_digit(c.to_string()))
        }
    }

    pub fn is_separator(self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for DigitToken {
    type Error = KeypadError;

    fn try_from(c: char) -> Result<Self> {
        DigitToken::new(c)
    }
}

impl FromStr for DigitToken {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DigitToken::new(c),
            _ => Err(KeypadError::invalid_digit(s)),
        }
    }
}

impl fmt::Display for DigitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
