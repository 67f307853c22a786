//! glyphgrid CLI - Print an image as ASCII art

use clap::Parser;
use glyphgrid::{Converter, GlyphError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "glyphgrid", about = "Print an image as ASCII art")]
struct Args {
    /// Path of the image to convert
    #[arg(short, long)]
    path: PathBuf,
    /// Output width in characters (accepted, not applied)
    #[arg(short, long, default_value = "0")]
    width: u32,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run(args: &Args) -> Result<(), GlyphError> {
    let text = Converter::new().with_width(args.width).convert_file(&args.path)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
