//! Conversions between musical pitch units
//!
//! Pure translations between the equivalent representations of pitch:
//! frequency (Hz), semitone offsets, cents, frequency ratios, and named
//! notes such as `"C4"` or `"A♯3"`.
//!
//! ## Features
//! - **Primitive converters**: every pairwise conversion among Hz,
//!   semitones, cents, and ratio, anchored at A4 = 440 Hz or an explicit
//!   caller-supplied base
//! - **Named notes**: normalization and parsing of note names with ASCII
//!   or unicode accidentals, enharmonic spellings, and negative octaves
//! - **Quantization**: continuous frequency to discrete note name, octave,
//!   and signed cent detune
//! - **`Pitch`**: a chainable wrapper around a single frequency value
//!
//! ## Conversion overview
//!
//! |              | → hz               | → ratio               | → semitones               | → cents               |
//! | :----------- | :----------------- | :-------------------- | :------------------------ | :-------------------- |
//! | hz →         | _N/A_              | [`hz_to_ratio`]       | [`hz_to_semitones`]       | [`hz_to_cents`]       |
//! | ratio →      | [`ratio_to_hz`]    | _N/A_                 | [`ratio_to_semitones`]    | [`ratio_to_cents`]    |
//! | semitones →  | [`semitones_to_hz`]| [`semitones_to_ratio`]| _N/A_                     | [`semitones_to_cents`]|
//! | cents →      | [`cents_to_hz`]    | [`cents_to_ratio`]    | [`cents_to_semitones`]    | _N/A_                 |
//! | named →      | [`named_note_to_hz`]| [`named_note_to_ratio`]| [`named_note_to_semitones`]| [`named_note_to_cents`]|
//!
//! Plus [`hz_to_note_name`] and [`hz_to_note_object`] for the named
//! direction from Hz.
//!
//! ## Usage
//!
//! ```rust
//! use pitch_units::{hz_to_semitones, named_note_to_hz, Pitch};
//!
//! assert_eq!(hz_to_semitones(880.0), 12.0);
//! assert!((named_note_to_hz("c#4").unwrap() - 277.183).abs() < 1e-3);
//!
//! let mut pitch = Pitch::new(440.0);
//! pitch.transpose(3.0);
//! assert_eq!(pitch.note_object().note, "C");
//! assert_eq!(pitch.note_object().octave, 5);
//! ```

mod convert;
mod error;
mod format;
mod note;
mod pitch;

pub use convert::*;
pub use error::{PitchError, PitchResult};
pub use format::*;
pub use note::*;
pub use pitch::Pitch;

use serde::{Deserialize, Serialize};

/// Frequency in cycles per second, e.g. `440.0`, `523.2511`.
pub type Hz = f64;

/// Semitone pitch offset, e.g. `+3.0`, `-5.0`. Twelve per octave.
pub type Semitones = f64;

/// Fine-grained pitch offset; 100 cents = 1 semitone.
pub type Cents = f64;

/// Multiplicative frequency factor, e.g. `1.5`, `2.0`, `0.5`.
pub type Ratio = f64;

/// Integer pitch grouping, e.g. `-1`, `4`, `10`. Octave 4 contains A4.
pub type Octave = i32;

/// A note name, optionally with accidental and octave, e.g. `C4`, `A♯3`.
pub type NoteName = String;

/// A4 reference frequency in Hz; semitone 0, ratio 1, 0 cents.
pub const A4: Hz = 440.0;

/// Normalized note names of the chromatic scale, spelled with sharps.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// The same pitch classes spelled with flats.
pub const CHROMATIC_SCALE_FLAT: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// Valid spellings per pitch class, sharp spelling first.
pub const ENHARMONIC_CHROMATIC_SCALE: [&[&str]; 12] = [
    &["C", "B♯"],
    &["C♯", "D♭"],
    &["D"],
    &["D♯", "E♭"],
    &["E", "F♭"],
    &["F", "E♯"],
    &["F♯", "G♭"],
    &["G"],
    &["G♯", "A♭"],
    &["A"],
    &["A♯", "B♭"],
    &["B", "C♭"],
];

/// Rounding strategy for converting continuous pitch to discrete notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMethod {
    /// Round to the nearest semitone
    #[default]
    Nearest,
    /// Round up (ceiling)
    Up,
    /// Round down (floor)
    Down,
}

impl RoundingMethod {
    /// Apply the corresponding rounding to `value`.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Nearest => value.round(),
            Self::Up => value.ceil(),
            Self::Down => value.floor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_tables_are_parallel() {
        for (sharp, flat) in CHROMATIC_SCALE.iter().zip(CHROMATIC_SCALE_FLAT) {
            // Same pitch class: both spellings live in the same enharmonic group.
            let group = ENHARMONIC_CHROMATIC_SCALE
                .iter()
                .find(|spellings| spellings.contains(sharp))
                .unwrap();
            assert!(group.contains(&flat));
        }
    }

    #[test]
    fn test_enharmonic_groups_lead_with_sharp_spelling() {
        for (i, group) in ENHARMONIC_CHROMATIC_SCALE.iter().enumerate() {
            assert_eq!(group[0], CHROMATIC_SCALE[i]);
            assert!(!group.is_empty() && group.len() <= 2);
        }
    }

    #[test]
    fn test_rounding_method() {
        assert_eq!(RoundingMethod::Nearest.apply(2.5), 3.0);
        assert_eq!(RoundingMethod::Nearest.apply(2.4), 2.0);
        assert_eq!(RoundingMethod::Up.apply(2.1), 3.0);
        assert_eq!(RoundingMethod::Down.apply(2.9), 2.0);
        assert_eq!(RoundingMethod::Down.apply(-9.1), -10.0);
        assert_eq!(RoundingMethod::default(), RoundingMethod::Nearest);
    }
}
