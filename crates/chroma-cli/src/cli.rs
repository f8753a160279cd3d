//! CLI argument definitions for the palette accessibility auditor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use chroma_model::VisionMode;

#[derive(Parser)]
#[command(
    name = "chroma-audit",
    version,
    about = "Score extracted color palettes for WCAG accessibility",
    long_about = "Score extracted color palettes for WCAG accessibility.\n\n\
                  Compares palette colors against a brand palette, checks text contrast,\n\
                  simulates color vision deficiencies, and grades the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a palette and print the accessibility report.
    Analyze(AnalyzeArgs),

    /// Show how colors appear under a color vision deficiency.
    Simulate(SimulateArgs),

    /// List supported vision modes.
    Modes,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Palette colors, most dominant (background) first.
    #[arg(long = "palette", value_name = "HEX", value_delimiter = ',')]
    pub palette: Vec<String>,

    /// JSON analysis request (palette, text, text_blocks, simulation_modes).
    ///
    /// Command-line values replace the matching fields of the file.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// OCR text extracted from the image.
    #[arg(long = "text", value_name = "TEXT", conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read OCR text from a file.
    #[arg(long = "text-file", value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Simulate a color vision deficiency (repeatable).
    #[arg(long = "simulate", value_name = "MODE")]
    pub simulate: Vec<VisionMode>,

    /// Simulate every color vision deficiency.
    #[arg(long = "all-modes")]
    pub all_modes: bool,

    /// Image path or URL the palette was extracted from.
    #[arg(long = "image-name", value_name = "SOURCE")]
    pub image_name: Option<String>,

    /// Write the full report as JSON.
    #[arg(long = "json", value_name = "OUT")]
    pub json: Option<PathBuf>,

    /// Configuration file (default: $CHROMA_CONFIG, then built-in defaults).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Vision mode to simulate.
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: VisionMode,

    /// Colors to transform.
    #[arg(value_name = "HEX", required = true)]
    pub colors: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
