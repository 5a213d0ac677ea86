//! Basic sunrise/sunset calculation example.

use chrono::NaiveDate;
use subsolar::{GeographicCoordinate, SubsolarState, SunriseResult, simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Numeric API, no chrono types involved
    let result = simulation::sunrise_sunset_utc(
        2023,
        6,
        21,
        37.7749,   // San Francisco latitude
        -122.4194, // San Francisco longitude
    )?;

    println!("San Francisco, June 21, 2023 (UTC):");
    match result {
        SunriseResult::RegularDay { sunrise, sunset } => {
            println!("  Sunrise: {sunrise} ({:.2} hours)", sunrise.hours());
            println!("  Sunset:  {sunset} ({:.2} hours)", sunset.hours());
        }
        SunriseResult::AllDay => println!("  Midnight sun - the sun never sets"),
        SunriseResult::AllNight => println!("  Polar night - the sun never rises"),
    }

    // Example 2: chrono date in, UTC date-times out
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;
    let tromso = simulation::sunrise_sunset(date, 69.6496, 18.956)?;
    println!("\nTromsø, {date}: {tromso}");

    if let SunriseResult::RegularDay { sunrise, sunset } =
        simulation::sunrise_sunset(date, -33.8688, 151.2093)?
    {
        println!("Sydney, {date}: sunrise {sunrise}, sunset {sunset}");
    }

    // Example 3: propagate once, scan several locations
    let state = SubsolarState::on_date("2024-03-20".parse()?)?;
    println!(
        "\nSubsolar declination on 2024-03-20: {:.2}°",
        state.declination().to_degrees()
    );
    for (name, latitude, longitude) in [
        ("Quito", -0.1807, -78.4678),
        ("Oslo", 59.9139, 10.7522),
        ("Cape Town", -33.9249, 18.4241),
    ] {
        let location = GeographicCoordinate::new(latitude, longitude)?;
        println!("  {name}: {}", state.scan_rotation(location.to_spherical())?);
    }

    Ok(())
}
