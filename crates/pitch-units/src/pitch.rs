//! Stateful pitch wrapper
//!
//! [`Pitch`] bundles a single frequency with derived read-only views and
//! chainable in-place edits, built entirely from the primitive converters.

use serde::{Deserialize, Serialize};

use crate::{
    A4, Cents, Hz, NoteObject, PitchResult, Ratio, RoundingMethod, Semitones, cents_to_hz_from,
    hz_to_cents, hz_to_note_object, hz_to_ratio, hz_to_semitones, named_note_to_hz, ratio_to_hz_from,
    semitones_to_hz, semitones_to_hz_from,
};

/// A single frequency with derived views and chainable edits.
///
/// The only state is the current frequency; every derived view is
/// computed on access. Mutators return `&mut Self` for chaining.
///
/// ```rust
/// use pitch_units::Pitch;
///
/// let mut pitch = Pitch::new(440.0);
/// pitch.mod_ratio(3.0);
/// assert_eq!(pitch.note_object().note, "E");
/// assert_eq!(pitch.note_object().octave, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Current frequency in Hz
    pub hz: Hz,
}

impl Default for Pitch {
    fn default() -> Self {
        Self { hz: A4 }
    }
}

impl Pitch {
    /// Create a pitch at the given frequency.
    pub fn new(hz: Hz) -> Self {
        Self { hz }
    }

    /// Create a pitch from a named note, e.g. `"C4"` or `"eb3"`.
    pub fn from_named_note(note: &str) -> PitchResult<Self> {
        Ok(Self {
            hz: named_note_to_hz(note)?,
        })
    }

    /// Semitone offset relative to A4.
    pub fn semitones(&self) -> Semitones {
        hz_to_semitones(self.hz)
    }

    /// Cent offset relative to A4.
    pub fn cents(&self) -> Cents {
        hz_to_cents(self.hz)
    }

    /// Frequency ratio relative to A4.
    pub fn ratio(&self) -> Ratio {
        hz_to_ratio(self.hz)
    }

    /// Note, octave, and detune of the current frequency.
    pub fn note_object(&self) -> NoteObject {
        hz_to_note_object(self.hz)
    }

    /// The exact note at or below the current frequency.
    pub fn closest_note_below(&self) -> NoteObject {
        hz_to_note_object(semitones_to_hz(self.semitones().floor()))
    }

    /// The exact note at or above the current frequency.
    pub fn closest_note_above(&self) -> NoteObject {
        hz_to_note_object(semitones_to_hz(self.semitones().ceil()))
    }

    /// Snap the frequency to an exact semitone relative to A4.
    pub fn quantize(&mut self, rounding: RoundingMethod) -> &mut Self {
        self.hz = semitones_to_hz(rounding.apply(self.semitones()));
        self
    }

    /// Transpose by a semitone offset relative to the current frequency.
    pub fn transpose(&mut self, semitones: Semitones) -> &mut Self {
        self.hz = semitones_to_hz_from(semitones, self.hz);
        self
    }

    /// Add a raw frequency delta.
    pub fn shift(&mut self, hz: Hz) -> &mut Self {
        self.hz += hz;
        self
    }

    /// Detune by a cent offset relative to the current frequency.
    pub fn detune(&mut self, cents: Cents) -> &mut Self {
        self.hz = cents_to_hz_from(cents, self.hz);
        self
    }

    /// Multiply the current frequency by a ratio.
    pub fn mod_ratio(&mut self, ratio: Ratio) -> &mut Self {
        self.hz = ratio_to_hz_from(ratio, self.hz);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_is_a4() {
        let pitch = Pitch::default();
        assert_eq!(pitch.hz, 440.0);
        assert_eq!(pitch.semitones(), 0.0);
        assert_eq!(pitch.cents(), 0.0);
        assert_eq!(pitch.ratio(), 1.0);
    }

    #[test]
    fn test_from_named_note() {
        let pitch = Pitch::from_named_note("C4").unwrap();
        assert_abs_diff_eq!(pitch.hz, 261.626, epsilon = 5e-3);
        assert!(Pitch::from_named_note("H4").is_err());
    }

    #[test]
    fn test_transpose_chain() {
        let mut pitch = Pitch::new(440.0);
        pitch.transpose(3.0);
        let object = pitch.note_object();
        assert_eq!(object.note, "C");
        assert_eq!(object.octave, 5);

        // Transposition is relative to the current value, not A4
        pitch.transpose(-3.0);
        assert_relative_eq!(pitch.hz, 440.0, max_relative = 1e-12);
    }

    #[test]
    fn test_shift() {
        let mut pitch = Pitch::new(440.0);
        pitch.shift(60.0).shift(-100.0);
        assert_eq!(pitch.hz, 400.0);
    }

    #[test]
    fn test_detune() {
        let mut pitch = Pitch::new(440.0);
        pitch.detune(1200.0);
        assert_relative_eq!(pitch.hz, 880.0, max_relative = 1e-12);
        pitch.detune(-1200.0).detune(50.0);
        assert_relative_eq!(pitch.hz, semitones_to_hz(0.5), max_relative = 1e-12);
    }

    #[test]
    fn test_mod_ratio() {
        let mut pitch = Pitch::new(440.0);
        pitch.mod_ratio(3.0);
        assert_eq!(pitch.hz, 1320.0);
        assert_eq!(pitch.note_object().note, "E");
    }

    #[test]
    fn test_quantize() {
        let mut pitch = Pitch::new(450.0);
        pitch.quantize(RoundingMethod::Nearest);
        assert_relative_eq!(pitch.hz, 440.0, max_relative = 1e-12);

        let mut sharp = Pitch::new(450.0);
        sharp.quantize(RoundingMethod::Up);
        assert_relative_eq!(sharp.hz, semitones_to_hz(1.0), max_relative = 1e-12);

        let mut flat = Pitch::new(450.0);
        flat.quantize(RoundingMethod::Down);
        assert_relative_eq!(flat.hz, 440.0, max_relative = 1e-12);
    }

    #[test]
    fn test_closest_notes() {
        let pitch = Pitch::new(450.0);
        let below = pitch.closest_note_below();
        let above = pitch.closest_note_above();
        assert_eq!(below.note, "A");
        assert_eq!(below.octave, 4);
        assert_eq!(below.detune, 0);
        assert_eq!(above.note, "A♯");
        assert_eq!(above.octave, 4);
        assert_eq!(above.detune, 0);
    }

    #[test]
    fn test_closest_notes_on_exact_semitone() {
        // floor == ceil when already on an exact semitone
        let pitch = Pitch::new(440.0);
        assert_eq!(pitch.closest_note_below().note, "A");
        assert_eq!(pitch.closest_note_above().note, "A");
    }

    #[test]
    fn test_serde_round_trip() {
        let pitch = Pitch::new(523.2511);
        let json = serde_json::to_string(&pitch).unwrap();
        let back: Pitch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pitch);
    }
}
