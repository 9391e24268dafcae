//! CalculatorEngine - four-function state machine
//!
//! Holds the operand being typed, the operand captured when an operator was
//! chosen, and the pending operator. Four transitions mutate it:
//! `enter_digit`, `choose_operator`, `evaluate` and `reset`.
//!
//! Evaluation is immediate and left-to-right: choosing a second operator
//! resolves the pending one first, so `5 + 3 * 2` yields `16`.

use crate::token::{DigitToken, Operator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Sentinel value of `current_operand` after a failed evaluation
pub const ERROR_SENTINEL: &str = "Error";

/// Glyph shown when nothing has been entered
pub const ZERO_GLYPH: &str = "0";

/// What digit input does while the engine shows `Error`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Reset, then accept the digit as the start of a fresh operand
    #[default]
    ClearOnInput,
    /// Drop digits until `reset()` is called
    IgnoreInput,
}

/// Raw calculator state
///
/// `pending_operator` is set exactly when `previous_operand` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_operand: String,
    pub previous_operand: String,
    pub pending_operator: Option<Operator>,
}

impl CalculatorState {
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_SENTINEL
    }
}

/// Calculator engine
///
/// # Example
/// ```
/// use keypad_calc::{CalculatorEngine, DigitToken, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.enter_digit(DigitToken::new('5').unwrap());
/// engine.choose_operator(Operator::Add);
/// engine.enter_digit(DigitToken::new('3').unwrap());
/// engine.evaluate();
/// assert_eq!(engine.display_text(), "8");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    policy: ErrorPolicy,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self {
            state: CalculatorState::default(),
            policy,
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn current_operand(&self) -> &str {
        &self.state.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.state.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Append a digit or the decimal separator to the current operand
    ///
    /// A second separator is ignored.
    pub fn enter_digit(&mut self, token: DigitToken) {
        if self.is_error() {
            match self.policy {
                ErrorPolicy::ClearOnInput => {
                    debug!(token = %token, "clearing error on input");
                    self.reset();
                },
                ErrorPolicy::IgnoreInput => {
                    debug!(token = %token, "digit ignored in error state");
                    return;
                },
            }
        }

        if token.is_separator() && self.state.current_operand.contains('.') {
            return;
        }

        self.state.current_operand.push(token.as_char());
        debug!(current = %self.state.current_operand, "enter_digit");
    }

    /// Capture the current operand and remember `op` for the next evaluation
    ///
    /// Resolves an already pending operation first.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.current_operand.is_empty() || self.is_error() {
            return;
        }

        if !self.state.previous_operand.is_empty() {
            self.evaluate();
            if self.is_error() {
                return;
            }
        }

        self.state.pending_operator = Some(op);
        self.state.previous_operand = std::mem::take(&mut self.state.current_operand);
        debug!(previous = %self.state.previous_operand, op = %op, "choose_operator");
    }

    /// Apply the pending operator to the previous and current operands
    ///
    /// Does nothing when either operand is missing or not a finite number.
    /// Division by zero (and overflow) leaves the `Error` sentinel.
    pub fn evaluate(&mut self) {
        let Some(op) = self.state.pending_operator else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) else {
            return;
        };

        if op == Operator::Divide && rhs == 0.0 {
            warn!(dividend = lhs, "division by zero");
            self.fail();
            return;
        }

        let result = op.apply(lhs, rhs);
        if !result.is_finite() {
            warn!(lhs, rhs, op = %op, "result out of range");
            self.fail();
            return;
        }

        self.state.current_operand = canonical(result);
        self.state.previous_operand.clear();
        self.state.pending_operator = None;
        debug!(lhs, rhs, op = %op, result, "evaluate");
    }

    /// Return to the initial empty state
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
        debug!("reset");
    }

    /// Text for the main display line
    pub fn display_text(&self) -> String {
        if self.state.current_operand.is_empty() {
            ZERO_GLYPH.to_string()
        } else {
            self.state.current_operand.clone()
        }
    }

    fn fail(&mut self) {
        self.state.current_operand = ERROR_SENTINEL.to_string();
        self.state.previous_operand.clear();
        self.state.pending_operator = None;
    }
}

/// Parse an operand as a finite decimal number
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest round-trip text for a result, without negative zero
fn canonical(value: f64) -> String {
    if value == 0.0 {
        return ZERO_GLYPH.to_string();
    }
    value.to_string()
}
