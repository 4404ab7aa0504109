use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Verbosity accepted by `--debug-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Failed loads and writes only
    Error,
    /// Also scene-file oddities, such as a `-1` specular
    Warn,
    /// Also scene summary and render timings
    Info,
    /// Also scene construction and ray totals
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "phong-tracer")]
#[command(about = "A recursive ray tracer for spheres with shadows and mirror reflections")]
pub struct Args {
    /// YAML scene description (renders the built-in demo scene when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Log verbosity; `RUST_LOG` can refine it per module
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Maximum number of mirror bounces
    #[arg(long, short = 'd', default_value = "3")]
    pub depth: u32,

    /// Trace image columns in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Output file path (.png, .ppm or .bmp)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}
