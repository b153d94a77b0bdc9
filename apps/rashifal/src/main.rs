use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use jyotish::ephemeris::{parse_date, ChartProvider};
use jyotish::{BirthDetails, EngineConfig, GeoLocation, HoroscopeEngine, Sign};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rashifal", author, version, about = "Vedic horoscope and Panchang")]
struct Cli {
    /// Engine calibration file (defaults to $JYOTISH_CONFIG or configs/engine.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Daily horoscope for a zodiac sign
    Sign {
        /// Sign name, Sanskrit or English (e.g. simha, leo)
        raashi: String,
        /// YYYY-MM-DD or RFC 3339; defaults to now
        #[arg(long)]
        date: Option<String>,
    },
    /// Daily horoscopes for all twelve signs
    All {
        #[arg(long)]
        date: Option<String>,
    },
    /// Seven daily horoscopes for a sign
    Weekly {
        raashi: String,
        /// First day of the week; defaults to today
        #[arg(long)]
        start: Option<String>,
    },
    /// General and personalized horoscopes side by side
    Compare {
        raashi: String,
        #[arg(long)]
        date: Option<String>,
        /// Birth date, YYYY-MM-DD; without it only the general reading is shown
        #[arg(long, requires_all = ["birth_time", "lat", "lon"])]
        birth_date: Option<NaiveDate>,
        #[arg(long)]
        birth_time: Option<NaiveTime>,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        utc_offset: f64,
    },
    /// Panchang for a date
    Panchang {
        #[arg(long)]
        date: Option<String>,
        /// Latitude for sunrise and sunset
        #[arg(long)]
        lat: Option<f64>,
    },
    /// Natal chart, optionally with a personalized horoscope
    Natal {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Local birth time, HH:MM:SS
        #[arg(long)]
        time: NaiveTime,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Hours east of UTC at the birth place
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        utc_offset: f64,
        /// Also print the personalized horoscope for this date
        #[arg(long)]
        horoscope_for: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => jyotish_config::load_engine_config_from(path),
        None => match jyotish_config::load_engine_config() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("{e}; using built-in calibration");
                Ok(EngineConfig::default())
            }
        },
    }
}

#[cfg(feature = "swisseph")]
fn chart_provider() -> Option<Box<dyn ChartProvider>> {
    Some(Box::new(jyotish::ephemeris::SwissEphemerisAdapter::new()))
}

#[cfg(not(feature = "swisseph"))]
fn chart_provider() -> Option<Box<dyn ChartProvider>> {
    None
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let engine = HoroscopeEngine::new(load_config(cli.config.as_ref())?)?;

    match cli.command {
        Commands::Sign { raashi, date } => {
            let horoscope = engine.general(&raashi, date.as_deref())?;
            println!("{}", horoscope.to_json()?);
        }
        Commands::All { date } => {
            let horoscopes = engine.all_signs(date.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&horoscopes)?);
        }
        Commands::Weekly { raashi, start } => {
            let week = engine.weekly(&raashi, start.as_deref())?;
            println!("{}", week.to_json()?);
        }
        Commands::Compare {
            raashi,
            date,
            birth_date,
            birth_time,
            lat,
            lon,
            utc_offset,
        } => {
            let sign: Sign = raashi.parse()?;
            let chart = match (birth_date, birth_time, lat, lon) {
                (Some(date), Some(time), Some(lat), Some(lon)) => {
                    let birth = BirthDetails {
                        date,
                        time,
                        location: GeoLocation { lat, lon },
                        utc_offset_hours: utc_offset,
                    };
                    let provider = chart_provider();
                    Some(engine.natal_chart(&birth, provider.as_deref())?)
                }
                _ => None,
            };
            let comparison =
                engine.compare_chart(chart.as_ref(), sign, parse_date(date.as_deref())?)?;
            println!("{}", comparison.to_json()?);
        }
        Commands::Panchang { date, lat } => {
            let date = parse_date(date.as_deref())?;
            let snapshot = jyotish::vedic::panchang(engine.ephemeris(), date, lat);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Natal {
            date,
            time,
            lat,
            lon,
            utc_offset,
            horoscope_for,
        } => {
            let birth = BirthDetails {
                date,
                time,
                location: GeoLocation { lat, lon },
                utc_offset_hours: utc_offset,
            };
            let provider = chart_provider();
            let chart = engine.natal_chart(&birth, provider.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&chart)?);

            if let Some(on) = horoscope_for {
                let horoscope = engine.personalized_for(&chart, parse_date(Some(&on))?)?;
                println!("{}", horoscope.to_json()?);
            }
        }
    }
    Ok(())
}
