//! Keypad adapter
//!
//! Maps button presses to engine transitions and pushes a fresh
//! [`DisplayView`] to a [`Renderer`] after every press.

use crate::display::DisplayView;
use crate::engine::{CalculatorEngine, ErrorPolicy};
use crate::error::{KeypadError, Result};
use crate::token::{DigitToken, Operator};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A logical button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(DigitToken),
    Operator(Operator),
    Equals,
    Clear,
}

impl Action {
    /// Split a key string into actions
    ///
    /// Accepts compact input (`"5+3="`) and whitespace separated keys
    /// (`"12 * 3 ="`, `"AC"`). Nothing is returned unless every key parses.
    pub fn parse_sequence(input: &str) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        for word in input.split_whitespace() {
            if let Ok(action) = word.parse::<Action>() {
                actions.push(action);
                continue;
            }
            for c in word.chars() {
                let mut buf = [0u8; 4];
                actions.push(c.encode_utf8(&mut buf).parse::<Action>()?);
            }
        }
        Ok(actions)
    }
}

impl FromStr for Action {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "=" | "enter" => return Ok(Action::Equals),
            "c" | "ac" | "clear" => return Ok(Action::Clear),
            _ => {},
        }
        if let Ok(digit) = key.parse::<DigitToken>() {
            return Ok(Action::Digit(digit));
        }
        key.parse::<Operator>()
            .map(Action::Operator)
            .map_err(|_| KeypadError::unknown_key(key))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Digit(digit) => write!(f, "{}", digit),
            Action::Operator(op) => write!(f, "{}", op),
            Action::Equals => write!(f, "="),
            Action::Clear => write!(f, "AC"),
        }
    }
}

/// Rendering collaborator, called once per press
pub trait Renderer {
    fn render(&mut self, view: &DisplayView);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &DisplayView) {
        (**self).render(view);
    }
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &DisplayView) {}
}

/// Records frames in order, for tests and replays
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    frames: Vec<DisplayView>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DisplayView] {
        &self.frames
    }

    pub fn last(&self) -> Option<&DisplayView> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, view: &DisplayView) {
        self.frames.push(view.clone());
    }
}

/// Engine plus renderer, driven by button presses
pub struct Keypad<R: Renderer = NullRenderer> {
    engine: CalculatorEngine,
    renderer: R,
    grouping: bool,
}

impl<R: Renderer> Keypad<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            renderer,
            grouping: true,
        }
    }

    /// Enable or disable digit grouping in rendered frames
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Replace the engine with a fresh one using `policy`
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.engine = CalculatorEngine::with_policy(policy);
        self
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn view(&self) -> DisplayView {
        DisplayView::from_engine(&self.engine, self.grouping)
    }

    /// Render the current state without a press
    pub fn refresh(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    pub fn press(&mut self, action: Action) {
        debug!(action = %action, "press");
        match action {
            Action::Digit(digit) => self.engine.enter_digit(digit),
            Action::Operator(op) => self.engine.choose_operator(op),
            Action::Equals => self.engine.evaluate(),
            Action::Clear => self.engine.reset(),
        }
        self.refresh();
    }

    pub fn press_key(&mut self, key: &str) -> Result<()> {
        let action = key.parse::<Action>()?;
        self.press(action);
        Ok(())
    }

    /// Press every key in `input`, returning how many actions ran
    ///
    /// An unknown key rejects the whole sequence before anything is pressed.
    pub fn press_sequence(&mut self, input: &str) -> Result<usize> {
        let actions = Action::parse_sequence(input)?;
        for action in &actions {
            self.press(*action);
        }
        Ok(actions.len())
    }
}
