//! Ephemeris oracle for the panchang generator.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: Sun/Moon ecliptic longitude at an instant and
//!   sunrise/sunset events for a civil day
//! - [`ObserverConfig`]: the fixed observer location and timezone
//! - [`AnalyticEphemeris`]: an offline implementation built on low-precision
//!   solar and lunar theories and an iterative rise/set search
//!
//! Longitudes are geocentric, referred to the J2000 ecliptic, in [0, 360).

pub mod analytic;
pub mod error;
pub mod moon;
pub mod observer;
pub mod oracle;
pub mod riseset;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use error::EphemError;
pub use moon::moon_longitude_of_date_deg;
pub use observer::{
    DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, DEFAULT_TIMEZONE, GeoLocation, ObserverConfig,
};
pub use oracle::{Ephemeris, Longitudes, SunEvent};
pub use riseset::{
    RiseSetConfig, RiseSetEvent, RiseSetResult, approximate_local_noon_jd, compute_rise_set,
};
pub use sun::{mean_obliquity_deg, sun_apparent_ra_dec_deg, sun_longitude_of_date_deg};
