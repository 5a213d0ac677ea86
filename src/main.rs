//! Command-line front end: prints sunrise and sunset for one location and date.
//!
//! Values not given as flags are asked for on stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use env_logger::Env;
use log::debug;
use subsolar::{CalendarDate, GeographicCoordinate, simulation::sunrise_sunset_for};

/// Sunrise and sunset times (UTC) from a simulated subsolar point
#[derive(Parser, Debug)]
#[command(name = "subsolar", version, about, long_about = None)]
struct Cli {
    /// Latitude in degrees, north positive (-90 to 90)
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Longitude in degrees, east positive (-180 to 180)
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Date as YYYY-MM-DD, no earlier than 2008-12-21
    #[arg(long)]
    date: Option<CalendarDate>,

    /// Enable debug log level
    #[arg(short, long)]
    verbose: bool,
}

/// Prompts on stdout and parses one line from `input`.
fn prompt<T, R>(input: &mut R, label: &str) -> Result<T, Box<dyn std::error::Error>>
where
    R: BufRead,
    T: FromStr,
    T::Err: std::error::Error + 'static,
{
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(format!("no value given for {label}").into());
    }
    Ok(line.trim().parse::<T>()?)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let latitude = match cli.latitude {
        Some(value) => value,
        None => prompt(&mut input, "Latitude (degrees)")?,
    };
    let longitude = match cli.longitude {
        Some(value) => value,
        None => prompt(&mut input, "Longitude (degrees)")?,
    };
    let location = GeographicCoordinate::new(latitude, longitude)?;

    let date = match cli.date {
        Some(date) => date,
        None => {
            let day: u32 = prompt(&mut input, "Day")?;
            let month: u32 = prompt(&mut input, "Month")?;
            let year: i32 = prompt(&mut input, "Year")?;
            CalendarDate::new(year, month, day)?
        }
    };

    debug!("computing {date} at ({latitude}, {longitude})");
    let result = sunrise_sunset_for(date, location)?;
    println!("{date} ({latitude}, {longitude}): {result}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if cli.verbose {
        "debug"
    } else {
        "warn"
    }))
    .format_timestamp_secs()
    .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so a silenced logger still shows it
            debug!("run failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
