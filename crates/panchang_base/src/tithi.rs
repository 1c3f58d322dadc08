//! Tithi (lunar day) and paksha (lunar fortnight).
//!
//! A tithi is each 12° step of the Moon's elongation from the Sun. Tithis
//! 1-15 make up the waxing fortnight (Shukla), 16-30 the waning one
//! (Krishna); tithi 15 is the full moon and tithi 30 the new moon.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a lunar month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight, tithi 1-15.
    #[default]
    Shukla,
    /// Waning fortnight, tithi 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Paksha of a 1-based tithi number.
    pub const fn from_tithi(tithi: u8) -> Self {
        if tithi <= 15 { Self::Shukla } else { Self::Krishna }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moon-Sun elongation in [0, 360).
pub fn elongation_deg(moon_deg: f64, sun_deg: f64) -> f64 {
    normalize_360(normalize_360(moon_deg) - normalize_360(sun_deg))
}

/// 1-based tithi number for an elongation, clamped to [1, 30].
///
/// Non-finite input maps to tithi 1.
pub fn tithi_from_elongation(elongation_deg: f64) -> u8 {
    if !elongation_deg.is_finite() {
        return 1;
    }
    let idx = (normalize_360(elongation_deg) / TITHI_SEGMENT_DEG).floor() as i64 + 1;
    clamp_tithi(idx)
}

/// Clamp any integer into the valid tithi range.
pub fn clamp_tithi(tithi: i64) -> u8 {
    tithi.clamp(1, i64::from(TITHI_COUNT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_is_first_tithi() {
        assert_eq!(tithi_from_elongation(0.0), 1);
        assert_eq!(tithi_from_elongation(11.999), 1);
    }

    #[test]
    fn boundaries() {
        assert_eq!(tithi_from_elongation(12.0), 2);
        assert_eq!(tithi_from_elongation(60.0), 6);
        assert_eq!(tithi_from_elongation(179.9), 15);
        assert_eq!(tithi_from_elongation(180.0), 16);
        assert_eq!(tithi_from_elongation(359.99), 30);
    }

    #[test]
    fn elongation_wraps() {
        assert!((elongation_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((elongation_deg(350.0, 10.0) - 340.0).abs() < 1e-12);
        assert!((elongation_deg(-20.0, 0.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn nan_is_first_tithi() {
        assert_eq!(tithi_from_elongation(f64::NAN), 1);
    }

    #[test]
    fn paksha_split() {
        assert_eq!(Paksha::from_tithi(1), Paksha::Shukla);
        assert_eq!(Paksha::from_tithi(15), Paksha::Shukla);
        assert_eq!(Paksha::from_tithi(16), Paksha::Krishna);
        assert_eq!(Paksha::from_tithi(30), Paksha::Krishna);
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_tithi(0), 1);
        assert_eq!(clamp_tithi(31), 30);
        assert_eq!(clamp_tithi(-5), 1);
        assert_eq!(clamp_tithi(17), 17);
    }

    #[test]
    fn paksha_serializes_as_name() {
        assert_eq!(Paksha::Krishna.to_string(), "Krishna");
        assert_eq!(Paksha::default(), Paksha::Shukla);
    }
}
