//! Nakshatra (lunar mansion) of the Moon.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13°20′
//! (13.3333...°) each, numbered 1 (Ashwini) to 27 (Revati).

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati, Sanskrit-named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (index 0 = Ashwini).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Tamil name of the nakshatra.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Ashwini => "அசுவினி",
            Self::Bharani => "பரணி",
            Self::Krittika => "கிருத்திகை",
            Self::Rohini => "ரோகிணி",
            Self::Mrigashira => "மிருகசீரிடம்",
            Self::Ardra => "திருவாதிரை",
            Self::Punarvasu => "புனர்பூசம்",
            Self::Pushya => "பூசம்",
            Self::Ashlesha => "ஆயில்யம்",
            Self::Magha => "மகம்",
            Self::PurvaPhalguni => "பூரம்",
            Self::UttaraPhalguni => "உத்திரம்",
            Self::Hasta => "ஹஸ்தம்",
            Self::Chitra => "சித்திரை",
            Self::Swati => "சுவாதி",
            Self::Vishakha => "விசாகம்",
            Self::Anuradha => "அனுஷம்",
            Self::Jyeshtha => "கேட்டை",
            Self::Mula => "மூலம்",
            Self::PurvaAshadha => "பூராடம்",
            Self::UttaraAshadha => "உத்திராடம்",
            Self::Shravana => "திருவோணம்",
            Self::Dhanishtha => "அவிட்டம்",
            Self::Shatabhisha => "சதயம்",
            Self::PurvaBhadrapada => "பூரட்டாதி",
            Self::UttaraBhadrapada => "உத்திரட்டாதி",
            Self::Revati => "ரேவதி",
        }
    }

    /// Nakshatra for a 1-based number, `None` outside [1, 27].
    pub fn from_number(number: u8) -> Option<Self> {
        let idx = usize::from(number).checked_sub(1)?;
        ALL_NAKSHATRAS.get(idx).copied()
    }
}

/// 1-based nakshatra number of the Moon's longitude, clamped to [1, 27].
///
/// Non-finite input maps to nakshatra 1.
pub fn nakshatra_from_longitude(moon_deg: f64) -> u8 {
    if !moon_deg.is_finite() {
        return 1;
    }
    let idx = (normalize_360(moon_deg) / NAKSHATRA_SPAN_27).floor() as i64 + 1;
    clamp_nakshatra(idx)
}

/// Clamp any integer into the valid nakshatra range.
pub fn clamp_nakshatra(nakshatra: i64) -> u8 {
    nakshatra.clamp(1, 27) as u8
}
