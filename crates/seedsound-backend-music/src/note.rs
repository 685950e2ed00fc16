//! MIDI note number and frequency conversion utilities.

use seedsound_spec::PITCH_CLASS_NAMES;

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12)
/// where n is the MIDI note number and 69 is A4.
///
/// # Examples
/// ```
/// use seedsound_backend_music::note::midi_to_freq;
///
/// let a4 = midi_to_freq(69);
/// assert!((a4 - 440.0).abs() < 0.001);
///
/// let c4 = midi_to_freq(60);
/// assert!((c4 - 261.626).abs() < 0.01);
/// ```
pub fn midi_to_freq(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// Scientific pitch name of a MIDI note, e.g. `"C4"` for 60.
///
/// # Examples
/// ```
/// use seedsound_backend_music::note::note_name;
///
/// assert_eq!(note_name(60), "C4");
/// assert_eq!(note_name(69), "A4");
/// assert_eq!(note_name(37), "C#2");
/// ```
pub fn note_name(midi_note: u8) -> String {
    let pitch_class = PITCH_CLASS_NAMES[(midi_note % 12) as usize];
    let octave = (midi_note / 12) as i32 - 1;
    format!("{pitch_class}{octave}")
}

/// Applies a signed semitone offset, clamping to the MIDI range.
pub fn transpose(midi_note: u8, semitones: i32) -> u8 {
    (midi_note as i32 + semitones).clamp(0, 127) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octaves_double_frequency() {
        for note in 24..100 {
            let ratio = midi_to_freq(note + 12) / midi_to_freq(note);
            assert!((ratio - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_note_name_low_octaves() {
        assert_eq!(note_name(0), "C-1");
        assert_eq!(note_name(12), "C0");
        assert_eq!(note_name(127), "G9");
    }

    #[test]
    fn test_transpose_clamps() {
        assert_eq!(transpose(60, 12), 72);
        assert_eq!(transpose(60, -12), 48);
        assert_eq!(transpose(5, -12), 0);
        assert_eq!(transpose(120, 12), 127);
    }
}
