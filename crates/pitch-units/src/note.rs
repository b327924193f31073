//! Named notes and frequency quantization
//!
//! Provides:
//! - Note-name normalization (`"eb4"` → `"E♭4"`)
//! - Enharmonic pitch-class lookup
//! - Named note to semitones/Hz/cents/ratio conversion
//! - Continuous frequency to discrete note name, octave, and detune

use serde::{Deserialize, Serialize};

use crate::{
    A4, CHROMATIC_SCALE, Cents, ENHARMONIC_CHROMATIC_SCALE, Hz, NoteName, Octave, PitchError,
    PitchResult, Ratio, RoundingMethod, Semitones, semitones_to_cents, semitones_to_hz,
};

/// A frequency broken down into note properties for flexible formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteObject {
    /// Source frequency in Hz
    pub hz: Hz,
    /// Nearest pitch class, sharp-spelled, without octave
    pub note: NoteName,
    /// Octave of the nearest note; octave 4 contains A4
    pub octave: Octave,
    /// Signed deviation from the nearest note in cents, in (-50, 50]
    pub detune: i32,
}

/// Normalize a note name: keyboard-accessible accidentals become their
/// unicode equivalents and letters are upper-cased.
///
/// The flat substitution (letter followed by lowercase `b`) runs before
/// case normalization, so a trailing `b` note letter is left alone.
///
/// ```rust
/// use pitch_units::clean_note_name;
/// assert_eq!(clean_note_name("c#4"), "C♯4");
/// assert_eq!(clean_note_name("bb4"), "B♭4");
/// ```
pub fn clean_note_name(dirty_note: &str) -> NoteName {
    let mut cleaned = String::with_capacity(dirty_note.len());
    let mut chars = dirty_note.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() && chars.peek() == Some(&'b') {
            chars.next();
            cleaned.push(c.to_ascii_uppercase());
            cleaned.push('♭');
        } else if c == '#' {
            cleaned.push('♯');
        } else {
            cleaned.push(c.to_ascii_uppercase());
        }
    }
    cleaned
}

/// Look up a bare pitch-class spelling (no octave digits) and return its
/// offset from A, centered so the 12-tone cycle spans -9..=+2.
///
/// Expects normalized input; accidentals must already be unicode
/// (see [`clean_note_name`]).
pub fn note_index_in_octave(note: &str) -> PitchResult<i32> {
    ENHARMONIC_CHROMATIC_SCALE
        .iter()
        .position(|spellings| spellings.contains(&note))
        .map(|index| index as i32 - 9)
        .ok_or_else(|| PitchError::InvalidNoteName(note.to_string()))
}

/// Split a cleaned note name into its pitch-class prefix and octave.
/// A missing or unparsable octave defaults to 4.
fn split_octave(cleaned: &str) -> (&str, Octave) {
    let octave_at = cleaned.char_indices().find_map(|(i, c)| {
        (c.is_ascii_digit()
            || (c == '-' && cleaned[i + 1..].starts_with(|d: char| d.is_ascii_digit())))
        .then_some(i)
    });
    match octave_at {
        Some(start) => (&cleaned[..start], cleaned[start..].parse().unwrap_or(4)),
        None => (cleaned, 4),
    }
}

/// Semitone offset of a named note relative to A4.
///
/// ```rust
/// use pitch_units::named_note_to_semitones;
/// assert_eq!(named_note_to_semitones("C4").unwrap(), -9.0);
/// assert_eq!(named_note_to_semitones("A♯3").unwrap(), -11.0);
/// ```
pub fn named_note_to_semitones(note: &str) -> PitchResult<Semitones> {
    let cleaned = clean_note_name(note);
    let (pitch_class, octave) = split_octave(&cleaned);
    let index = note_index_in_octave(pitch_class)?;
    Ok(f64::from(index + (octave - 4) * 12))
}

/// Frequency of a named note.
pub fn named_note_to_hz(note: &str) -> PitchResult<Hz> {
    Ok(semitones_to_hz(named_note_to_semitones(note)?))
}

/// Cent offset of a named note relative to A4.
pub fn named_note_to_cents(note: &str) -> PitchResult<Cents> {
    Ok(semitones_to_cents(named_note_to_semitones(note)?))
}

/// Frequency ratio of a named note over A4.
pub fn named_note_to_ratio(note: &str) -> PitchResult<Ratio> {
    named_note_to_ratio_from(note, "A4")
}

/// Frequency ratio of a named note over another named note.
/// Both names are resolved to Hz and divided.
pub fn named_note_to_ratio_from(note: &str, base_note: &str) -> PitchResult<Ratio> {
    Ok(named_note_to_hz(note)? / named_note_to_hz(base_note)?)
}

/// Bare pitch-class name (no octave) nearest to a frequency, rounded per
/// `rounding`.
///
/// ```rust
/// use pitch_units::{hz_to_note_name, RoundingMethod};
/// assert_eq!(hz_to_note_name(260.0, RoundingMethod::Nearest), "C");
/// assert_eq!(hz_to_note_name(260.0, RoundingMethod::Down), "B");
/// ```
pub fn hz_to_note_name(hz: Hz, rounding: RoundingMethod) -> NoteName {
    let note = rounding.apply(12.0 * (hz / A4).log2()) as i64 + 69;
    // Large multiple of 12 keeps the modulo positive for sub-range input.
    CHROMATIC_SCALE[((note + 12 * 1000) % 12) as usize].to_string()
}

/// Break a frequency into its nearest note, octave, and signed detune.
///
/// Classification always rounds to the nearest semitone; the detune is
/// the true deviation in cents, wrapped into (-50, 50] so a slightly
/// flat note reports a small negative value instead of almost +100.
pub fn hz_to_note_object(hz: Hz) -> NoteObject {
    let semitone = 12.0 * (hz / A4).log2() + 69.0;
    let rounded = semitone.round();
    let fraction = semitone % 1.0;
    let wrapped = if fraction > 0.5 { fraction - 1.0 } else { fraction };
    NoteObject {
        hz,
        note: hz_to_note_name(hz, RoundingMethod::Nearest),
        octave: (rounded / 12.0 - 1.0).floor() as Octave,
        detune: (wrapped * 100.0).round() as i32,
    }
}
