mod app;
mod color;
mod config;
mod data;
mod render;
mod state;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::{Args, Config};
use data::model::ErrorRateSeries;
use render::{ChartView, WindowSink};

fn load_series(config: &Config) -> Result<ErrorRateSeries> {
    log::info!("Reading error rates from {}", config.input_path.display());

    // LoadError already names the file.
    let series = data::loader::load(&config.input_path)?;
    match series.summary() {
        Some(summary) => log::info!("Loaded {summary}"),
        None => log::warn!("{} contains no values", config.input_path.display()),
    }
    Ok(series)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_args(Args::parse())?;
    let series = load_series(&config)?;

    let view = ChartView::new(series).with_source(&config.input_path);
    render::render(&mut WindowSink::default(), view)
}
