//! Interactive keypad
//!
//! Each line is a key sequence (`12 + 3`, `=`, `AC`). The display is printed
//! after every line.

use anyhow::{Context, Result};
use colored::Colorize;
use keypad_calc::Keypad;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render::{format_frame, TerminalRenderer};

/// Outcome of one REPL line
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

pub fn run_repl(mut keypad: Keypad<TerminalRenderer>, prompt: &str) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;

    println!("{}", "keypad".bright_cyan().bold());
    println!(
        "Type keys like {} then {}; {} clears, {} shows help\n",
        "12 + 3".bright_yellow(),
        "=".bright_yellow(),
        "AC".bright_yellow(),
        "help".bright_yellow()
    );
    keypad.refresh();
    println!("{}", format_frame(&keypad.view()));

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                match execute_line(&mut keypad, line) {
                    Ok(LineOutcome::Continue) => continue,
                    Ok(LineOutcome::Quit) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute one REPL line against the keypad
pub fn execute_line(keypad: &mut Keypad<TerminalRenderer>, line: &str) -> Result<LineOutcome> {
    match line.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(LineOutcome::Quit),
        "help" => {
            print_help();
            return Ok(LineOutcome::Continue);
        },
        _ => {},
    }

    keypad.press_sequence(line)?;
    println!("{}", format_frame(&keypad.view()));
    Ok(LineOutcome::Continue)
}

fn print_help() {
    println!("  {}  digits and decimal point", "0-9 .".bright_cyan());
    println!("  {}  operators (also × ÷ −)", "+ - * /".bright_cyan());
    println!("  {}  evaluate", "= | enter".bright_cyan());
    println!("  {}  clear", "c | ac | clear".bright_cyan());
    println!("  {}  leave", "quit | exit".bright_cyan());
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_execute_line_keys_and_quit() {
        let mut keypad = Keypad::new(TerminalRenderer::new(false));
        assert_eq!(
            execute_line(&mut keypad, "7 * 6").unwrap(),
            LineOutcome::Continue
        );
        assert_eq!(execute_line(&mut keypad, "=").unwrap(), LineOutcome::Continue);
        assert_eq!(keypad.engine().display_text(), "42");
        assert_eq!(execute_line(&mut keypad, "EXIT").unwrap(), LineOutcome::Quit);
    }

    #[test]
    fn test_execute_line_unknown_key() {
        let mut keypad = Keypad::new(TerminalRenderer::new(false));
        assert!(execute_line(&mut keypad, "sqrt 9").is_err());
        assert_eq!(keypad.renderer().frames(), 0);
    }
}
