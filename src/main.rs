mod app;
mod cli;
mod commands;
mod config;
mod console;
mod constants;
mod edit_dialog;
mod finder;
mod host;
mod input;
mod parsers;
mod state;
mod types;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use host::SessionHost;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    config::load_config(args.config_file)?;

    let host = match args.scene_file {
        Some(path) => match SessionHost::from_scene_file(&path) {
            Ok(host) => host,
            Err(e) => {
                eprintln!("Error loading scene session file: {}", e);
                return Err(e.into());
            }
        },
        None => SessionHost::sample(),
    };

    let mut app = App::new(Box::new(host));

    let terminal = ratatui::init();
    let app_result = app.run(terminal);
    ratatui::restore();

    app_result.map_err(Into::into)
}
