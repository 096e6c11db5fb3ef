use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use weather_skill::{
    DarkSkyClient, ForecastRenderer, LocationTable, SecretChain, Skill, SkillConfig, SkillRequest,
    telemetry, web,
};

#[derive(Parser)]
#[command(name = "weather-skill", version, about = "Speaks the local weather forecast")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the skill over HTTP
    Serve {
        /// Address to bind, overrides `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
    /// Handle a single request envelope read from a JSON file
    Invoke {
        /// Request envelope, `-` reads stdin
        event: PathBuf,
    },
}

fn build_skill(config: &SkillConfig) -> Result<Skill> {
    let secret = SecretChain::from_config(&config.secrets).resolve()?;
    let locations = LocationTable::load(&config.skill.locations_file).with_context(|| {
        format!("Failed to load locations from {}", config.skill.locations_file)
    })?;
    let fetcher = DarkSkyClient::new(&config.weather, secret)?;
    let renderer = ForecastRenderer::new(config.timezone()?);

    Ok(Skill::new(
        locations,
        renderer,
        fetcher,
        &config.skill.default_location,
    )?)
}

fn read_event(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin())
            .context("Failed to read event from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read event {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SkillConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging)?;
    info!("weather-skill {}", weather_skill::VERSION);

    let skill = Arc::new(build_skill(&config)?);

    match cli.command {
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(web::run(Arc::clone(&skill), &host, port))?;
        }
        Command::Invoke { event } => {
            let event = read_event(&event)?;
            let request: SkillRequest =
                serde_json::from_str(&event).context("Invalid request envelope")?;

            if let Some(response) = skill.respond(request) {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}
