use std::error::Error;
use std::path::PathBuf;

use astral_core::geocode::DEFAULT_PLACE;
use astral_core::{
    generate_interpretation, BirthInfo, ChartConfig, Gazetteer, Geocoder, Location, Report,
    SnapshotFile,
};
use chrono::{DateTime, Utc};
use clap::Parser;

#[derive(Parser)]
#[command(name = "astral", about = "Natal chart from an ephemeris snapshot")]
struct Cli {
    /// JSON ephemeris snapshot for the birth moment
    #[arg(long)]
    snapshot: PathBuf,
    /// Local birth date and time, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    date: String,
    /// UTC offset of the local time, e.g. +05:30
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    offset: String,
    #[arg(long)]
    name: Option<String>,
    /// Birth place, looked up in the built-in gazetteer
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Orb in degrees, overriding the config file
    #[arg(long)]
    orb: Option<f64>,
    /// TOML chart config; falls back to $ASTRAL_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_local_time(date: &str, offset: &str) -> Result<DateTime<Utc>, Box<dyn Error>> {
    let with_offset = format!("{} {}", date, offset);
    let local = DateTime::parse_from_str(&with_offset, "%Y-%m-%d %H:%M %z")
        .map_err(|e| format!("Error parsing date '{}': {}", with_offset, e))?;
    Ok(local.with_timezone(&Utc))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::from_env()?,
    };
    if let Some(orb) = cli.orb {
        config = config.with_orb(orb);
        config.validate()?;
    }

    let (place, location) = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => (String::new(), Location::new(lat, lon)),
        _ => {
            let place = cli.place.as_deref().unwrap_or(DEFAULT_PLACE);
            (place.to_string(), Gazetteer::default().locate(place)?)
        }
    };

    let date_time = parse_local_time(&cli.date, &cli.offset)?;
    let mut birth_info = BirthInfo::new(date_time, location).with_place(place);
    if let Some(name) = cli.name {
        birth_info = birth_info.with_name(name);
    }
    log::info!(
        "computing chart for {} at {:.4}, {:.4}",
        birth_info.date_time,
        location.latitude,
        location.longitude
    );

    let ephemeris = SnapshotFile::new(cli.snapshot);
    let report = Report::calculate(&birth_info, &ephemeris, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", generate_interpretation(&report));
    }
    Ok(())
}
