mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod logging;
mod palette;
mod slots;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let _log_guard = logging::init(cli_opts.log_file.as_deref(), cli_opts.verbose);
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let (width, height) = crossterm::terminal::size()?;
    let mut app = app::App::new(
        Box::new(palette::RandomGenerator),
        Box::new(clipboard::SystemClipboard::default()),
    )
    .with_terminal_size(width, height);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    tracing::info!("swatch exited");

    result
}
