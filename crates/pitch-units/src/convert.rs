//! Primitive unit converters
//!
//! Pairwise conversions among Hz, semitones, cents, and frequency ratio.
//! Everything reduces to the semitone/ratio log-exponential pair; cents
//! and Hz are linear and exponential reparametrizations of it, so every
//! function shares one fixed point: A4 = 440 Hz = 0 st = 0 cents = ratio 1.

use crate::{A4, Cents, Hz, Ratio, Semitones};

/// Convert a semitone offset from A4 to frequency.
///
/// ```rust
/// use pitch_units::semitones_to_hz;
/// assert_eq!(semitones_to_hz(12.0), 880.0);
/// ```
pub fn semitones_to_hz(semitones: Semitones) -> Hz {
    semitones_to_hz_from(semitones, A4)
}

/// Convert a semitone offset from `base_hz` to frequency.
pub fn semitones_to_hz_from(semitones: Semitones, base_hz: Hz) -> Hz {
    base_hz * (semitones / 12.0).exp2()
}

/// Convert a semitone offset to cents.
pub fn semitones_to_cents(semitones: Semitones) -> Cents {
    100.0 * semitones
}

/// Convert a semitone offset to a frequency ratio.
pub fn semitones_to_ratio(semitones: Semitones) -> Ratio {
    (semitones / 12.0).exp2()
}

/// Convert a cent offset to semitones.
pub fn cents_to_semitones(cents: Cents) -> Semitones {
    cents / 100.0
}

/// Convert a cent offset to a frequency ratio.
pub fn cents_to_ratio(cents: Cents) -> Ratio {
    semitones_to_ratio(cents_to_semitones(cents))
}

/// Convert a cent offset from A4 to frequency.
pub fn cents_to_hz(cents: Cents) -> Hz {
    cents_to_hz_from(cents, A4)
}

/// Convert a cent offset from `base_hz` to frequency.
pub fn cents_to_hz_from(cents: Cents, base_hz: Hz) -> Hz {
    semitones_to_hz_from(cents_to_semitones(cents), base_hz)
}

/// Convert a frequency ratio to semitones.
///
/// Non-positive ratios are not validated: `0` yields negative infinity
/// and negative values yield NaN, both of which propagate silently
/// through downstream conversions.
pub fn ratio_to_semitones(ratio: Ratio) -> Semitones {
    12.0 * ratio.log2()
}

/// Convert a frequency ratio applied to A4 to frequency.
pub fn ratio_to_hz(ratio: Ratio) -> Hz {
    ratio_to_hz_from(ratio, A4)
}

/// Convert a frequency ratio applied to `base_hz` to frequency.
pub fn ratio_to_hz_from(ratio: Ratio, base_hz: Hz) -> Hz {
    ratio * base_hz
}

/// Convert a frequency ratio to cents.
pub fn ratio_to_cents(ratio: Ratio) -> Cents {
    semitones_to_cents(ratio_to_semitones(ratio))
}

/// Frequency ratio of `target_hz` over A4.
pub fn hz_to_ratio(target_hz: Hz) -> Ratio {
    hz_to_ratio_from(target_hz, A4)
}

/// Frequency ratio of `target_hz` over `base_hz`.
pub fn hz_to_ratio_from(target_hz: Hz, base_hz: Hz) -> Ratio {
    target_hz / base_hz
}

/// Semitone offset of `target_hz` relative to A4.
///
/// ```rust
/// use pitch_units::hz_to_semitones;
/// assert_eq!(hz_to_semitones(220.0), -12.0);
/// ```
pub fn hz_to_semitones(target_hz: Hz) -> Semitones {
    hz_to_semitones_from(target_hz, A4)
}

/// Semitone offset of `target_hz` relative to `base_hz`.
///
/// Non-positive frequencies are not validated; see [`ratio_to_semitones`].
pub fn hz_to_semitones_from(target_hz: Hz, base_hz: Hz) -> Semitones {
    12.0 * (target_hz / base_hz).log2()
}

/// Cent offset of `target_hz` relative to A4.
pub fn hz_to_cents(target_hz: Hz) -> Cents {
    hz_to_cents_from(target_hz, A4)
}

/// Cent offset of `target_hz` relative to `base_hz`.
pub fn hz_to_cents_from(target_hz: Hz, base_hz: Hz) -> Cents {
    semitones_to_cents(hz_to_semitones_from(target_hz, base_hz))
}
