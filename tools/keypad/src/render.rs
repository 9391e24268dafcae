//! Terminal rendering of keypad frames

use colored::Colorize;
use keypad_calc::{DisplayView, Renderer, ERROR_SENTINEL};

/// Prints frames to stdout
///
/// With `trace` off, frames are only remembered; callers print the final
/// one themselves.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    trace: bool,
    frames: usize,
}

impl TerminalRenderer {
    pub fn new(trace: bool) -> Self {
        Self { trace, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &DisplayView) {
        self.frames += 1;
        if self.trace {
            println!("{:>4}  {}", self.frames, format_frame(view));
        }
    }
}

/// One-line colored frame: dimmed previous operand, bold current operand
pub fn format_frame(view: &DisplayView) -> String {
    let current = if view.current == ERROR_SENTINEL {
        view.current.red().bold()
    } else {
        view.current.bold()
    };

    match &view.previous {
        Some(previous) => format!("{}  {}", previous.dimmed(), current),
        None => current.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frame_plain() {
        colored::control::set_override(false);

        let view = DisplayView {
            previous: Some("1,200 +".to_string()),
            current: "34".to_string(),
        };
        assert_eq!(format_frame(&view), "1,200 +  34");

        let view = DisplayView {
            previous: None,
            current: "Error".to_string(),
        };
        assert_eq!(format_frame(&view), "Error");
    }

    #[test]
    fn test_counts_frames() {
        let mut renderer = TerminalRenderer::new(false);
        let view = DisplayView {
            previous: None,
            current: "0".to_string(),
        };
        renderer.render(&view);
        renderer.render(&view);
        assert_eq!(renderer.frames(), 2);
    }
}
