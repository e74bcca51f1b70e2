//! MSR to BSR mapping tables
//!
//! `None` means the source value has no braille counterpart; the caller
//! reports it and drops the construct.

use crate::bsr::*;
use crate::msr::{
    AccidentalKind, Alteration, BarlineCategory, BarlineStyle, ClefKind, DiatonicPitch,
    DurationKind, DynamicsKind, KeyMode, Pitch, TimeSymbolKind,
};

pub fn braille_clef_kind(kind: ClefKind) -> Option<BrailleClefKind> {
    let braille = match kind {
        ClefKind::Treble => BrailleClefKind::GTreble,
        ClefKind::TrebleLine1 => BrailleClefKind::GFrenchViolin,
        ClefKind::TrebleMinus8 => BrailleClefKind::GOttavaBassa,
        ClefKind::TreblePlus8 => BrailleClefKind::GOttavaAlta,
        ClefKind::Soprano => BrailleClefKind::CSoprano,
        ClefKind::MezzoSoprano => BrailleClefKind::CMezzoSoprano,
        ClefKind::Alto => BrailleClefKind::CAlto,
        ClefKind::Tenor => BrailleClefKind::CTenor,
        ClefKind::Baritone => BrailleClefKind::CBaritone,
        ClefKind::VarBaritone => BrailleClefKind::FBaritone,
        ClefKind::Bass => BrailleClefKind::FBass,
        ClefKind::BassMinus8 => BrailleClefKind::FOttavaBassa,
        ClefKind::BassPlus8 => BrailleClefKind::FOttavaAlta,

        ClefKind::None
        | ClefKind::TrebleMinus15
        | ClefKind::TreblePlus15
        | ClefKind::BassMinus15
        | ClefKind::BassPlus15
        | ClefKind::Tablature4
        | ClefKind::Tablature5
        | ClefKind::Tablature6
        | ClefKind::Tablature7
        | ClefKind::Percussion
        | ClefKind::Jianpu => return None,
    };
    Some(braille)
}

// ============================================================================
// KEYS
// ============================================================================

/// Key signature of a tonic in a mode, as the repeated accidental and count.
///
/// Major and minor (and ionian, aeolian) cover the flat, natural and sharp
/// tonics up to seven accidentals. The other modes only cover natural
/// tonics.
pub fn braille_key(tonic: Pitch, mode: KeyMode) -> Option<(BrailleKeyKind, u8)> {
    match mode {
        KeyMode::Major | KeyMode::Ionian => major_key(tonic),
        KeyMode::Minor | KeyMode::Aeolian => minor_key(tonic),
        KeyMode::Dorian
        | KeyMode::Phrygian
        | KeyMode::Lydian
        | KeyMode::Mixolydian
        | KeyMode::Locrian => {
            if tonic.alteration != Alteration::Natural {
                return None;
            }
            Some(church_mode_key(tonic.step, mode))
        }
    }
}

fn major_key(tonic: Pitch) -> Option<(BrailleKeyKind, u8)> {
    use Alteration::{Flat, Natural, Sharp};
    use BrailleKeyKind::{Flats, Naturals, Sharps};
    use DiatonicPitch::*;

    let key = match (tonic.step, tonic.alteration) {
        (C, Flat) => (Flats, 7),
        (C, Natural) => (Naturals, 0),
        (C, Sharp) => (Sharps, 7),
        (D, Flat) => (Flats, 5),
        (D, Natural) => (Sharps, 2),
        (E, Flat) => (Flats, 3),
        (E, Natural) => (Sharps, 4),
        (F, Natural) => (Flats, 1),
        (F, Sharp) => (Sharps, 6),
        (G, Flat) => (Flats, 6),
        (G, Natural) => (Sharps, 1),
        (A, Flat) => (Flats, 4),
        (A, Natural) => (Sharps, 3),
        (B, Flat) => (Flats, 2),
        (B, Natural) => (Sharps, 5),
        _ => return None,
    };
    Some(key)
}

fn minor_key(tonic: Pitch) -> Option<(BrailleKeyKind, u8)> {
    use Alteration::{Flat, Natural, Sharp};
    use BrailleKeyKind::{Flats, Naturals, Sharps};
    use DiatonicPitch::*;

    let key = match (tonic.step, tonic.alteration) {
        (A, Flat) => (Flats, 7),
        (A, Natural) => (Naturals, 0),
        (A, Sharp) => (Sharps, 7),
        (B, Flat) => (Flats, 5),
        (B, Natural) => (Sharps, 2),
        (C, Natural) => (Flats, 3),
        (C, Sharp) => (Sharps, 4),
        (D, Natural) => (Flats, 1),
        (D, Sharp) => (Sharps, 6),
        (E, Flat) => (Flats, 6),
        (E, Natural) => (Sharps, 1),
        (F, Natural) => (Flats, 4),
        (F, Sharp) => (Sharps, 3),
        (G, Natural) => (Flats, 2),
        (G, Sharp) => (Sharps, 5),
        _ => return None,
    };
    Some(key)
}

fn church_mode_key(step: DiatonicPitch, mode: KeyMode) -> (BrailleKeyKind, u8) {
    use BrailleKeyKind::{Flats, Naturals, Sharps};
    use DiatonicPitch::*;

    match (mode, step) {
        (KeyMode::Dorian, C) => (Flats, 2),
        (KeyMode::Dorian, D) => (Naturals, 0),
        (KeyMode::Dorian, E) => (Sharps, 2),
        (KeyMode::Dorian, F) => (Flats, 3),
        (KeyMode::Dorian, G) => (Flats, 1),
        (KeyMode::Dorian, A) => (Sharps, 1),
        (KeyMode::Dorian, B) => (Sharps, 3),

        (KeyMode::Phrygian, C) => (Flats, 4),
        (KeyMode::Phrygian, D) => (Flats, 2),
        (KeyMode::Phrygian, E) => (Naturals, 0),
        (KeyMode::Phrygian, F) => (Flats, 5),
        (KeyMode::Phrygian, G) => (Flats, 3),
        (KeyMode::Phrygian, A) => (Flats, 1),
        (KeyMode::Phrygian, B) => (Sharps, 1),

        (KeyMode::Lydian, C) => (Sharps, 1),
        (KeyMode::Lydian, D) => (Sharps, 3),
        (KeyMode::Lydian, E) => (Sharps, 5),
        (KeyMode::Lydian, F) => (Naturals, 0),
        (KeyMode::Lydian, G) => (Sharps, 2),
        (KeyMode::Lydian, A) => (Sharps, 4),
        (KeyMode::Lydian, B) => (Sharps, 6),

        (KeyMode::Mixolydian, C) => (Flats, 1),
        (KeyMode::Mixolydian, D) => (Sharps, 1),
        (KeyMode::Mixolydian, E) => (Sharps, 3),
        (KeyMode::Mixolydian, F) => (Flats, 2),
        (KeyMode::Mixolydian, G) => (Naturals, 0),
        (KeyMode::Mixolydian, A) => (Sharps, 2),
        (KeyMode::Mixolydian, B) => (Sharps, 4),

        (KeyMode::Locrian, C) => (Flats, 5),
        (KeyMode::Locrian, D) => (Flats, 3),
        (KeyMode::Locrian, E) => (Flats, 1),
        (KeyMode::Locrian, F) => (Flats, 6),
        (KeyMode::Locrian, G) => (Flats, 4),
        (KeyMode::Locrian, A) => (Flats, 2),
        (KeyMode::Locrian, B) => (Naturals, 0),

        // major and minor modes are routed elsewhere
        (KeyMode::Major | KeyMode::Ionian | KeyMode::Minor | KeyMode::Aeolian, _) => (Naturals, 0),
    }
}

// ============================================================================
// TIMES, BARLINES
// ============================================================================

/// `TimeSymbolKind::None` is a plain numerical signature
pub fn braille_time_kind(symbol: TimeSymbolKind) -> Option<BrailleTimeKind> {
    let kind = match symbol {
        TimeSymbolKind::None => BrailleTimeKind::Numerical,
        TimeSymbolKind::Common => BrailleTimeKind::Common,
        TimeSymbolKind::Cut => BrailleTimeKind::Cut,
        TimeSymbolKind::Note => BrailleTimeKind::NumberAndNote,
        TimeSymbolKind::DottedNote => BrailleTimeKind::NumberAndDottedNote,
        TimeSymbolKind::SingleNumber => BrailleTimeKind::UpperNumberOnly,
        TimeSymbolKind::SenzaMisura => return None,
    };
    Some(kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarlineMapping {
    Sign(BrailleBarlineKind),
    /// Ordinary barlines are the space between measures
    Implicit,
}

pub fn braille_barline(style: BarlineStyle, category: BarlineCategory) -> Option<BarlineMapping> {
    match category {
        BarlineCategory::RepeatStart => return Some(BarlineMapping::Sign(BrailleBarlineKind::RepeatStart)),
        BarlineCategory::RepeatEnd => return Some(BarlineMapping::Sign(BrailleBarlineKind::RepeatEnd)),
        BarlineCategory::Standalone
        | BarlineCategory::HookedEndingStart
        | BarlineCategory::HookedEndingEnd
        | BarlineCategory::HooklessEndingStart
        | BarlineCategory::HooklessEndingEnd => {}
    }

    let mapping = match style {
        BarlineStyle::None | BarlineStyle::Regular => BarlineMapping::Implicit,
        BarlineStyle::Dotted => BarlineMapping::Sign(BrailleBarlineKind::Special),
        BarlineStyle::Dashed => BarlineMapping::Sign(BrailleBarlineKind::Unusual),
        BarlineStyle::LightLight => BarlineMapping::Sign(BrailleBarlineKind::SectionalDouble),
        BarlineStyle::LightHeavy => BarlineMapping::Sign(BrailleBarlineKind::FinalDouble),
        BarlineStyle::Heavy
        | BarlineStyle::HeavyLight
        | BarlineStyle::HeavyHeavy
        | BarlineStyle::Tick
        | BarlineStyle::Short => return None,
    };
    Some(mapping)
}

// ============================================================================
// NOTES
// ============================================================================

/// Callers skip `AccidentalKind::None` before the lookup
pub fn braille_accidental_kind(kind: AccidentalKind) -> Option<BrailleAccidentalKind> {
    let braille = match kind {
        AccidentalKind::Sharp => BrailleAccidentalKind::Sharp,
        AccidentalKind::Natural => BrailleAccidentalKind::Natural,
        AccidentalKind::Flat => BrailleAccidentalKind::Flat,
        AccidentalKind::DoubleSharp | AccidentalKind::SharpSharp => BrailleAccidentalKind::DoubleSharp,
        AccidentalKind::FlatFlat => BrailleAccidentalKind::DoubleFlat,
        AccidentalKind::QuarterSharp => BrailleAccidentalKind::QuarterSharp,
        AccidentalKind::QuarterFlat => BrailleAccidentalKind::QuarterFlat,
        AccidentalKind::ThreeQuartersSharp => BrailleAccidentalKind::ThreeQuartersSharp,
        AccidentalKind::ThreeQuartersFlat => BrailleAccidentalKind::ThreeQuartersFlat,

        AccidentalKind::None
        | AccidentalKind::NaturalSharp
        | AccidentalKind::NaturalFlat
        | AccidentalKind::SharpDown
        | AccidentalKind::SharpUp
        | AccidentalKind::NaturalDown
        | AccidentalKind::NaturalUp
        | AccidentalKind::FlatDown
        | AccidentalKind::FlatUp
        | AccidentalKind::TripleSharp
        | AccidentalKind::TripleFlat
        | AccidentalKind::SlashQuarterSharp
        | AccidentalKind::SlashSharp
        | AccidentalKind::SlashFlat
        | AccidentalKind::DoubleSlashFlat
        | AccidentalKind::Sharp1
        | AccidentalKind::Sharp2
        | AccidentalKind::Sharp3
        | AccidentalKind::Sharp5
        | AccidentalKind::Flat1
        | AccidentalKind::Flat2
        | AccidentalKind::Flat3
        | AccidentalKind::Flat4
        | AccidentalKind::Sori
        | AccidentalKind::Koron
        | AccidentalKind::Other => return None,
    };
    Some(braille)
}

pub fn braille_dynamics_kind(kind: DynamicsKind) -> Option<BrailleDynamicsKind> {
    let braille = match kind {
        DynamicsKind::PPP => BrailleDynamicsKind::PPP,
        DynamicsKind::PP => BrailleDynamicsKind::PP,
        DynamicsKind::P => BrailleDynamicsKind::P,
        DynamicsKind::MP => BrailleDynamicsKind::MP,
        DynamicsKind::MF => BrailleDynamicsKind::MF,
        DynamicsKind::F => BrailleDynamicsKind::F,
        DynamicsKind::FF => BrailleDynamicsKind::FF,
        DynamicsKind::FFF => BrailleDynamicsKind::FFF,
        DynamicsKind::FP => BrailleDynamicsKind::FP,
        DynamicsKind::FZ => BrailleDynamicsKind::FZ,
        DynamicsKind::RF => BrailleDynamicsKind::RF,
        DynamicsKind::RFZ => BrailleDynamicsKind::RFZ,
        DynamicsKind::SF => BrailleDynamicsKind::SF,
        DynamicsKind::SFZ => BrailleDynamicsKind::SFZ,
        DynamicsKind::SFP => BrailleDynamicsKind::SFP,
        DynamicsKind::SFFZ => BrailleDynamicsKind::SFFZ,

        DynamicsKind::FFFF
        | DynamicsKind::FFFFF
        | DynamicsKind::FFFFFF
        | DynamicsKind::PPPP
        | DynamicsKind::PPPPP
        | DynamicsKind::PPPPPP
        | DynamicsKind::PF
        | DynamicsKind::SFPP
        | DynamicsKind::SFZP
        | DynamicsKind::N => return None,
    };
    Some(braille)
}

/// Octave 4 starts at middle C; 0 and 8 use the extension marks
pub fn braille_octave_kind(octave: i32) -> Option<BrailleOctaveKind> {
    let kind = match octave {
        0 => BrailleOctaveKind::Below1,
        1 => BrailleOctaveKind::O1,
        2 => BrailleOctaveKind::O2,
        3 => BrailleOctaveKind::O3,
        4 => BrailleOctaveKind::O4,
        5 => BrailleOctaveKind::O5,
        6 => BrailleOctaveKind::O6,
        7 => BrailleOctaveKind::O7,
        8 => BrailleOctaveKind::Above7,
        _ => return None,
    };
    Some(kind)
}

pub fn note_value_size(duration: DurationKind) -> NoteValueSize {
    match duration {
        DurationKind::Maxima
        | DurationKind::Long
        | DurationKind::Breve
        | DurationKind::Whole
        | DurationKind::Half
        | DurationKind::Quarter
        | DurationKind::Eighth => NoteValueSize::Larger,
        DurationKind::D16th
        | DurationKind::D32nd
        | DurationKind::D64th
        | DurationKind::D128th
        | DurationKind::D256th
        | DurationKind::D512th
        | DurationKind::D1024th => NoteValueSize::Smaller,
    }
}

/// Interval sign for a diatonic distance; unisons and octaves share a sign
pub fn braille_interval_kind(distance: i32) -> BrailleIntervalKind {
    match distance.abs() % 7 {
        1 => BrailleIntervalKind::Second,
        2 => BrailleIntervalKind::Third,
        3 => BrailleIntervalKind::Fourth,
        4 => BrailleIntervalKind::Fifth,
        5 => BrailleIntervalKind::Sixth,
        6 => BrailleIntervalKind::Seventh,
        _ => BrailleIntervalKind::Octave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unsupported<T: Copy, U>(all: &[T], map: impl Fn(T) -> Option<U>) -> Vec<T> {
        all.iter().copied().filter(|&value| map(value).is_none()).collect()
    }

    #[test]
    fn test_a_natural_major_and_minor() {
        let a = Pitch::natural(DiatonicPitch::A);
        assert_eq!(braille_key(a, KeyMode::Major), Some((BrailleKeyKind::Sharps, 3)));
        assert_eq!(braille_key(a, KeyMode::Minor), Some((BrailleKeyKind::Naturals, 0)));
    }

    #[test]
    fn test_relative_keys_agree() {
        let pairs = [
            (Pitch::new(DiatonicPitch::E, Alteration::Flat), Pitch::natural(DiatonicPitch::C)),
            (Pitch::natural(DiatonicPitch::E), Pitch::new(DiatonicPitch::C, Alteration::Sharp)),
            (Pitch::new(DiatonicPitch::F, Alteration::Sharp), Pitch::new(DiatonicPitch::D, Alteration::Sharp)),
        ];
        for (major, minor) in pairs {
            assert_eq!(braille_key(major, KeyMode::Major), braille_key(minor, KeyMode::Minor));
        }
    }

    #[test]
    fn test_key_table_is_total() {
        let mut mapped = 0;
        for &mode in KeyMode::ALL {
            for &step in DiatonicPitch::ALL {
                for &alteration in Alteration::ALL {
                    if let Some((_, count)) = braille_key(Pitch::new(step, alteration), mode) {
                        assert!(count <= 7);
                        mapped += 1;
                    }
                }
            }
        }
        // 15 tonics per major/minor mode, 7 per other mode
        assert_eq!(mapped, 4 * 15 + 5 * 7);
    }

    #[test]
    fn test_chromatic_church_mode_tonics_are_unsupported() {
        let f_sharp = Pitch::new(DiatonicPitch::F, Alteration::Sharp);
        assert_eq!(braille_key(f_sharp, KeyMode::Dorian), None);
        assert_eq!(braille_key(f_sharp, KeyMode::Major), Some((BrailleKeyKind::Sharps, 6)));
    }

    #[test]
    fn test_unsupported_clefs() {
        assert_eq!(
            unsupported(ClefKind::ALL, braille_clef_kind),
            vec![
                ClefKind::None,
                ClefKind::TrebleMinus15,
                ClefKind::TreblePlus15,
                ClefKind::BassMinus15,
                ClefKind::BassPlus15,
                ClefKind::Tablature4,
                ClefKind::Tablature5,
                ClefKind::Tablature6,
                ClefKind::Tablature7,
                ClefKind::Percussion,
                ClefKind::Jianpu,
            ]
        );
    }

    #[test]
    fn test_time_symbols() {
        assert_eq!(braille_time_kind(TimeSymbolKind::None), Some(BrailleTimeKind::Numerical));
        assert_eq!(braille_time_kind(TimeSymbolKind::Common), Some(BrailleTimeKind::Common));
        assert_eq!(unsupported(TimeSymbolKind::ALL, braille_time_kind), vec![TimeSymbolKind::SenzaMisura]);
    }

    #[test]
    fn test_barlines() {
        assert_eq!(
            braille_barline(BarlineStyle::Regular, BarlineCategory::Standalone),
            Some(BarlineMapping::Implicit)
        );
        assert_eq!(
            braille_barline(BarlineStyle::HeavyLight, BarlineCategory::RepeatStart),
            Some(BarlineMapping::Sign(BrailleBarlineKind::RepeatStart))
        );
        assert_eq!(braille_barline(BarlineStyle::Tick, BarlineCategory::Standalone), None);
        for &style in BarlineStyle::ALL {
            for &category in BarlineCategory::ALL {
                let _ = braille_barline(style, category);
            }
        }
    }

    #[test]
    fn test_octaves() {
        assert_eq!(braille_octave_kind(4), Some(BrailleOctaveKind::O4));
        assert_eq!(braille_octave_kind(0), Some(BrailleOctaveKind::Below1));
        assert_eq!(braille_octave_kind(8), Some(BrailleOctaveKind::Above7));
        assert_eq!(braille_octave_kind(9), None);
        assert_eq!(braille_octave_kind(-1), None);
    }

    #[test]
    fn test_value_sizes_split_at_the_eighth() {
        assert_eq!(note_value_size(DurationKind::Eighth), NoteValueSize::Larger);
        assert_eq!(note_value_size(DurationKind::D16th), NoteValueSize::Smaller);
    }

    #[test]
    fn test_intervals() {
        assert_eq!(braille_interval_kind(2), BrailleIntervalKind::Third);
        assert_eq!(braille_interval_kind(-4), BrailleIntervalKind::Fifth);
        assert_eq!(braille_interval_kind(7), BrailleIntervalKind::Octave);
        assert_eq!(braille_interval_kind(9), BrailleIntervalKind::Third);
    }

    #[test]
    fn test_accidentals_and_dynamics() {
        assert_eq!(braille_accidental_kind(AccidentalKind::SharpSharp), Some(BrailleAccidentalKind::DoubleSharp));
        assert_eq!(braille_accidental_kind(AccidentalKind::Koron), None);
        assert_eq!(unsupported(AccidentalKind::ALL, braille_accidental_kind).len(), 26);
        assert_eq!(braille_dynamics_kind(DynamicsKind::N), None);
        assert_eq!(
            DynamicsKind::ALL.len() - unsupported(DynamicsKind::ALL, braille_dynamics_kind).len(),
            BrailleDynamicsKind::ALL.len()
        );
    }
}
