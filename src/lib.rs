//! # Subsolar
//!
//! Sunrise and sunset times from a simulated subsolar point.
//!
//! The model keeps things deliberately simple: a spherical Earth on a circular
//! orbit, a subsolar point that moves between the tropics in equal daily steps,
//! and an Earth that turns in one-minute increments. For any location and any
//! date from 2008-12-21 onwards it reports the UTC minute of sunrise and sunset,
//! or that the location has midnight sun or polar night.
//!
//! ## Features
//!
//! - Pure computation: no I/O, no global state, no allocation in the core
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Tagged results: regular day, midnight sun or polar night
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `Datelike` input and `DateTime<Utc>` output
//! - `cli` (default): Build the `subsolar` command-line tool
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Library only, no command-line tool
//! subsolar = { version = "0.1", default-features = false, features = ["std", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! subsolar = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use subsolar::{simulation, SunriseResult};
//!
//! // Equator, Greenwich meridian, close to the March equinox
//! let result = simulation::sunrise_sunset_utc(2009, 3, 20, 0.0, 0.0).unwrap();
//!
//! match result {
//!     SunriseResult::RegularDay { sunrise, sunset } => {
//!         println!("Sunrise: {sunrise} UTC");
//!         println!("Sunset: {sunset} UTC");
//!     }
//!     other => println!("{other}"),
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use subsolar::{simulation, SunriseResult};
//!
//! let date = NaiveDate::from_ymd_opt(2009, 12, 21).unwrap();
//! let result = simulation::sunrise_sunset(date, 80.0, 0.0).unwrap();
//! assert_eq!(result, SunriseResult::AllNight);
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **θ (polar angle)**: 0 = south pole, π/2 = equator, π = north pole
//! - **φ (azimuthal angle)**: longitude measured eastwards, in [0, 2π)
//! - **Times**: minutes after 00:00 UTC on the requested date

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of wrapped angles in tests
)]

// Public API exports
pub use crate::calendar::CalendarDate;
pub use crate::coordinate::{GeographicCoordinate, SphericalCoordinate};
pub use crate::error::{Error, Result};
pub use crate::simulation::SubsolarState;
pub use crate::types::{MinuteOfDay, SunriseResult};

// Simulation
pub mod simulation;

// Core modules
pub mod calendar;
pub mod coordinate;
pub mod error;
pub mod types;

// Internal modules
mod math;
