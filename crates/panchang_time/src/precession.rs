//! General precession in ecliptic longitude.
//!
//! The solar and lunar theories give longitudes referred to the mean equinox
//! of date. Subtracting the accumulated precession refers them to the fixed
//! J2000 ecliptic, which is the frame the longitudes are reported in.
//!
//! Source: IAU 2006 p_A (Capitaine, Wallace & Chapront 2003), truncated
//! after the quadratic term.

/// Accumulated general precession in longitude since J2000.0, in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn general_precession_deg(t: f64) -> f64 {
    (5028.796_195 * t + 1.105_434_8 * t * t) / 3600.0
}
