//! keypad - terminal front end for the keypad-calc engine
//!
//! Replays key sequences (`keypad eval 5 + 3 =`) or runs an interactive
//! keypad (`keypad repl`).

mod config;
mod render;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keypad_calc::{ErrorPolicy, Keypad};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::KeypadConfig;
use crate::render::{format_frame, TerminalRenderer};

#[derive(Parser)]
#[command(name = "keypad")]
#[command(about = "Four-function calculator keypad")]
#[command(long_about = "Four-function calculator keypad

Keys:
  0-9 .          digits and decimal point
  + - * /        operators (also × ÷ −), evaluated left to right
  = | enter      evaluate
  c | ac | clear reset

Examples:
  keypad eval 5 + 3 =               # 8
  keypad eval '5+3*2='              # 16
  keypad eval --trace 12 / 0 = 7    # show every frame
  keypad repl                       # interactive keypad")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./keypad.yaml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Show plain digits without thousands separators
    #[arg(long, global = true)]
    no_grouping: bool,

    /// What digits do after an `Error`
    #[arg(long, value_enum, global = true)]
    error_policy: Option<PolicyArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Press a key sequence and print the display
    Eval {
        /// Keys, compact (`5+3=`) or separated (`5 + 3 =`)
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,

        /// Print state and display as JSON
        #[arg(long)]
        json: bool,

        /// Print every rendered frame
        #[arg(long)]
        trace: bool,
    },

    /// Interactive keypad
    Repl,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    ClearOnInput,
    IgnoreInput,
}

impl From<PolicyArg> for ErrorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ClearOnInput => ErrorPolicy::ClearOnInput,
            PolicyArg::IgnoreInput => ErrorPolicy::IgnoreInput,
        }
    }
}

#[derive(Serialize)]
struct EvalReport<'a> {
    state: &'a keypad_calc::CalculatorState,
    display: keypad_calc::DisplayView,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging (RUST_LOG wins when set)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = KeypadConfig::load(cli.config_path.as_deref())?;
    if cli.no_grouping {
        config.grouping = false;
    }
    if let Some(policy) = cli.error_policy {
        config.error_policy = policy.into();
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Eval { keys, json, trace } => {
            let trace = trace && !json;
            run_eval(build_keypad(&config, trace), &keys.join(" "), json, trace)
        },
        Commands::Repl => repl::run_repl(build_keypad(&config, false), &config.prompt),
    }
}

fn build_keypad(config: &KeypadConfig, trace: bool) -> Keypad<TerminalRenderer> {
    Keypad::new(TerminalRenderer::new(trace))
        .with_grouping(config.grouping)
        .with_policy(config.error_policy)
}

fn run_eval(
    mut keypad: Keypad<TerminalRenderer>,
    keys: &str,
    json: bool,
    trace: bool,
) -> Result<()> {
    keypad.refresh();
    let pressed = keypad
        .press_sequence(keys)
        .with_context(|| format!("Cannot replay keys {:?}", keys))?;
    debug!(pressed, frames = keypad.renderer().frames(), "replayed key sequence");

    if json {
        let report = EvalReport {
            state: keypad.engine().state(),
            display: keypad.view(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else if !trace {
        println!("{}", format_frame(&keypad.view()));
    }
    Ok(())
}
