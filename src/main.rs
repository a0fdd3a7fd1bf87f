use std::io;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::error;
use crate::forecast::run_forecast;
use crate::initialization::init;
use crate::models::observation::Observation;
use crate::report::{render_forecast, render_tips, TITLE};
use crate::session::Session;

mod config;
mod errors;
mod features;
mod forecast;
mod initialization;
mod logging;
mod manager_model;
mod models;
mod report;
mod session;
mod timeline;

#[derive(Parser)]
#[command(name = "skycast", version, about = "SkyCast: Rain Frequency Predictor")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, env = "SKYCAST_CONFIG", default_value = "config.toml")]
    config: String,

    /// Model file to use instead of the one given in the configuration
    #[arg(long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict once from the given observations, missing values are taken from configuration
    Predict {
        /// 9am relative humidity (%), 0-100
        #[arg(long = "humidity-9am")]
        humidity_9am: Option<u8>,

        /// 3pm relative humidity (%), 0-100
        #[arg(long = "humidity-3pm")]
        humidity_3pm: Option<u8>,

        /// 9am max wind speed (mph), 0.0-25.0
        #[arg(long = "wind-speed-9am")]
        wind_speed_9am: Option<f64>,

        /// 9am air pressure (hPa), 908.0-930.0
        #[arg(long = "pressure-9am")]
        pressure_9am: Option<f64>,

        /// Print the forecast as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Adjust controls and predict interactively
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, model) = init(&cli.config, cli.model)
        .context("failed to start skycast")?;

    match cli.command {
        Command::Predict { humidity_9am, humidity_3pm, wind_speed_9am, pressure_9am, json } => {
            let defaults = config.controls;
            let observation = Observation::new(
                humidity_9am.unwrap_or(defaults.humidity_9am()),
                humidity_3pm.unwrap_or(defaults.humidity_3pm()),
                wind_speed_9am.unwrap_or(defaults.wind_speed_9am()),
                pressure_9am.unwrap_or(defaults.pressure_9am()),
            ).inspect_err(|e| error!("rejected input: {}", e))?;

            let forecast = run_forecast(&model, &observation)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                println!("{}\n", TITLE);
                println!("{}", render_forecast(&forecast, config.chart.width));
                println!("{}", render_tips());
            }
        }
        Command::Interactive => {
            let mut session = Session::new(&model, config.controls, config.chart.width);
            session.run(io::stdin().lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}
