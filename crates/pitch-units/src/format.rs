//! Human-readable frequency formatting

use crate::Hz;

/// Format a frequency with the default settings: two decimal places, no
/// forced sign.
///
/// ```rust
/// use pitch_units::format_hz;
/// assert_eq!(format_hz(232.5), "232.50Hz");
/// assert_eq!(format_hz(2325.0), "2.33kHz");
/// ```
pub fn format_hz(hz: Hz) -> String {
    format_hz_with(hz, 2, false)
}

/// Format a frequency as `Hz` below 1000 and `kHz` from 1000 up.
///
/// Fixed-point with trailing zeros for tabular alignment, never
/// scientific notation. With `always_include_sign`, non-negative values
/// get a leading `+`.
pub fn format_hz_with(hz: Hz, precision: usize, always_include_sign: bool) -> String {
    let sign = if always_include_sign && hz >= 0.0 { "+" } else { "" };
    if hz >= 1000.0 {
        format!("{sign}{:.precision$}kHz", hz / 1000.0)
    } else {
        format!("{sign}{:.precision$}Hz", hz)
    }
}
