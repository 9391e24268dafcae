//! keypad-calc - Four-function calculator engine
//!
//! A small state machine behind a calculator keypad: operand entry,
//! operator selection with left-to-right chaining, and a sentinel `Error`
//! state for division by zero.
//!
//! # Features
//!
//! - **Engine**: [`CalculatorEngine`] with `enter_digit`, `choose_operator`,
//!   `evaluate` and `reset`
//! - **Tokens**: closed [`Operator`] enum and validated [`DigitToken`]
//! - **Display**: digit grouping and a two-line [`DisplayView`]
//! - **Keypad**: [`Keypad`] maps button text to actions and drives a [`Renderer`]
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::{Keypad, MemoryRenderer};
//!
//! let mut keypad = Keypad::new(MemoryRenderer::new());
//! keypad.press_sequence("5 + 3 * 2 =").unwrap();
//! assert_eq!(keypad.engine().display_text(), "16");
//!
//! keypad.press_sequence("AC 1000 * 1000 =").unwrap();
//! assert_eq!(keypad.view().current, "1,000,000");
//! ```
//!
//! # Error state
//!
//! | Input after `Error` | `ErrorPolicy::ClearOnInput` | `ErrorPolicy::IgnoreInput` |
//! |---------------------|-----------------------------|----------------------------|
//! | digit or `.`        | starts a fresh operand      | ignored                    |
//! | operator, `=`       | ignored                     | ignored                    |
//! | clear               | reset                       | reset                      |

pub mod display;
pub mod engine;
pub mod error;
pub mod keypad;
pub mod token;

// Re-exports for convenience
pub use display::{format_operand, DisplayView};
pub use engine::{CalculatorEngine, CalculatorState, ErrorPolicy, ERROR_SENTINEL, ZERO_GLYPH};
pub use error::{KeypadError, Result};
pub use keypad::{Action, Keypad, MemoryRenderer, NullRenderer, Renderer};
pub use token::{DigitToken, Operator};
