use anyhow::Result;
use clap::{Parser, Subcommand};

use dashboard_core::{Config, DashboardError, OpenWeatherProvider, WeatherProvider, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current weather and render the dashboard image.
    Render,

    /// Store the OpenWeatherMap API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or(Command::Render) {
            Command::Render => render_command().await,
            Command::Configure => configure_command(),
        }
    }
}

async fn render_command() -> Result<()> {
    let config = Config::load()?;

    println!("Fetching {} weather data...", config.display_name);

    if let Err(err) = fetch_and_render(&config).await {
        report_failure(&err);
        std::process::exit(1);
    }

    println!("Dashboard created: '{}'", config.output_path.display());
    Ok(())
}

async fn fetch_and_render(config: &Config) -> Result<(), DashboardError> {
    let provider = OpenWeatherProvider::new(config)?;
    let reading = provider.current().await?;
    println!("Data fetched successfully!");

    render::render_dashboard(&reading, &config.display_name, config.units, &config.output_path)?;

    if config.open_viewer {
        render::present_image(&config.output_path);
    }

    Ok(())
}

fn report_failure(err: &DashboardError) {
    match err {
        DashboardError::Shape(_) => {
            eprintln!("{}: {err} - check API response structure", err.category());
        }
        _ => eprintln!("{}: {err}", err.category()),
    }
}

fn configure_command() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}
