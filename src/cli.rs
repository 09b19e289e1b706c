/// CLI argument parsing and command handling.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::{Color, ResetColor, SetBackgroundColor};
use crossterm::queue;

use crate::palette;

#[derive(Parser, Debug)]
#[command(
    name = "swatch",
    version,
    about = "Swatch - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Write diagnostics to this file instead of the default location.
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a freshly generated palette, one hex value per line.
    Generate {
        /// Prefix each value with a true-color block.
        #[arg(short = 's', long = "swatch")]
        swatch: bool,
    },
}

/// Execute a non-interactive command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate { swatch } => handle_generate(swatch, &mut io::stdout().lock())?,
    }
    Ok(())
}

fn handle_generate(swatch: bool, out: &mut impl Write) -> Result<()> {
    let palette = palette::generate();
    tracing::debug!(?palette, "generated palette for stdout");
    for color in palette.iter() {
        if swatch {
            let (r, g, b) = color.rgb();
            queue!(out, SetBackgroundColor(Color::Rgb { r, g, b }))?;
            write!(out, "    ")?;
            queue!(out, ResetColor)?;
            write!(out, " ")?;
        }
        writeln!(out, "{color}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;

    #[test]
    fn generate_prints_five_hex_lines() {
        let mut out = Vec::new();
        handle_generate(false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), palette::PALETTE_SIZE);
        assert!(lines.iter().all(|line| is_valid_hex(line)));
    }

    #[test]
    fn swatch_output_ends_each_line_with_hex() {
        let mut out = Vec::new();
        handle_generate(true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for line in text.lines() {
            assert!(line.contains("\u{1b}["));
            let hex = line.rsplit(' ').next().unwrap();
            assert!(is_valid_hex(hex), "{line:?}");
        }
    }

    #[test]
    fn parses_global_flags_with_subcommand() {
        let cli = Cli::parse_from(["swatch", "generate", "--swatch", "--log-file", "/tmp/x.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/x.log")));
        assert!(matches!(cli.command, Some(Command::Generate { swatch: true })));
        assert!(!cli.verbose);
    }
}
