//! Braille octave marking
//!
//! A note carries an octave sign unless the previous reference note is
//! close enough for the reader to infer the octave:
//!
//! | diatonic distance | octave sign                        |
//! |-------------------|------------------------------------|
//! | 0 to 2 steps      | never                              |
//! | 3 or 4 steps      | only when the octave numbers differ |
//! | 5 steps or more   | always                             |
//!
//! No reference (first note of a line, or after a word or number sign)
//! always needs a sign.

use crate::msr::DiatonicPitch;

/// Position of a note on the diatonic scale, octave included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctaveReference {
    /// `octave * 7 + steps above C`
    pub ordinal: i32,
    pub octave: i32,
}

impl OctaveReference {
    pub fn of(step: DiatonicPitch, octave: i32) -> Self {
        Self {
            ordinal: diatonic_ordinal(step, octave),
            octave,
        }
    }
}

pub fn diatonic_ordinal(step: DiatonicPitch, octave: i32) -> i32 {
    octave * 7 + step.offset_from_c()
}

pub fn octave_sign_needed(previous: Option<OctaveReference>, current: OctaveReference) -> bool {
    let Some(previous) = previous else {
        return true;
    };
    match (current.ordinal - previous.ordinal).abs() {
        0..=2 => false,
        3 | 4 => current.octave != previous.octave,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c4() -> Option<OctaveReference> {
        Some(OctaveReference::of(DiatonicPitch::C, 4))
    }

    #[test]
    fn test_ordinal_of_middle_c() {
        assert_eq!(diatonic_ordinal(DiatonicPitch::C, 4), 28);
        assert_eq!(diatonic_ordinal(DiatonicPitch::F, 4), 31);
    }

    #[test]
    fn test_fourth_in_same_octave_needs_no_sign() {
        assert!(!octave_sign_needed(c4(), OctaveReference::of(DiatonicPitch::F, 4)));
    }

    #[test]
    fn test_eleventh_needs_a_sign() {
        assert!(octave_sign_needed(c4(), OctaveReference::of(DiatonicPitch::F, 5)));
    }

    #[test]
    fn test_fourth_across_octaves_needs_a_sign() {
        let b3 = Some(OctaveReference::of(DiatonicPitch::B, 3));
        assert!(octave_sign_needed(b3, OctaveReference::of(DiatonicPitch::E, 4)));
    }

    #[test]
    fn test_third_below_needs_no_sign() {
        assert!(!octave_sign_needed(c4(), OctaveReference::of(DiatonicPitch::A, 3)));
    }

    #[test]
    fn test_first_note_always_needs_a_sign() {
        assert!(octave_sign_needed(None, OctaveReference::of(DiatonicPitch::C, 4)));
    }
}
