//! Braille note values
//!
//! Braille writes the step and the value in one cell, so the value kind is
//! looked up from both: rest or step, by written duration. Only breve to
//! 256th have braille values.

use crate::bsr::NoteValueKind;
use crate::msr::{DiatonicPitch, DurationKind};

/// Value kind of a note (`step` is `None` for rests), or `None` when the
/// written duration has no braille value
pub fn braille_note_value(step: Option<DiatonicPitch>, duration: DurationKind) -> Option<NoteValueKind> {
    use DurationKind::*;
    let value = match (step, duration) {
        (None, Breve) => NoteValueKind::RestBreve,
        (None, Whole) => NoteValueKind::RestWhole,
        (None, Half) => NoteValueKind::RestHalf,
        (None, Quarter) => NoteValueKind::RestQuarter,
        (None, Eighth) => NoteValueKind::Rest8th,
        (None, D16th) => NoteValueKind::Rest16th,
        (None, D32nd) => NoteValueKind::Rest32nd,
        (None, D64th) => NoteValueKind::Rest64th,
        (None, D128th) => NoteValueKind::Rest128th,
        (None, D256th) => NoteValueKind::Rest256th,

        (Some(DiatonicPitch::C), Breve) => NoteValueKind::CBreve,
        (Some(DiatonicPitch::C), Whole) => NoteValueKind::CWhole,
        (Some(DiatonicPitch::C), Half) => NoteValueKind::CHalf,
        (Some(DiatonicPitch::C), Quarter) => NoteValueKind::CQuarter,
        (Some(DiatonicPitch::C), Eighth) => NoteValueKind::C8th,
        (Some(DiatonicPitch::C), D16th) => NoteValueKind::C16th,
        (Some(DiatonicPitch::C), D32nd) => NoteValueKind::C32nd,
        (Some(DiatonicPitch::C), D64th) => NoteValueKind::C64th,
        (Some(DiatonicPitch::C), D128th) => NoteValueKind::C128th,
        (Some(DiatonicPitch::C), D256th) => NoteValueKind::C256th,

        (Some(DiatonicPitch::D), Breve) => NoteValueKind::DBreve,
        (Some(DiatonicPitch::D), Whole) => NoteValueKind::DWhole,
        (Some(DiatonicPitch::D), Half) => NoteValueKind::DHalf,
        (Some(DiatonicPitch::D), Quarter) => NoteValueKind::DQuarter,
        (Some(DiatonicPitch::D), Eighth) => NoteValueKind::D8th,
        (Some(DiatonicPitch::D), D16th) => NoteValueKind::D16th,
        (Some(DiatonicPitch::D), D32nd) => NoteValueKind::D32nd,
        (Some(DiatonicPitch::D), D64th) => NoteValueKind::D64th,
        (Some(DiatonicPitch::D), D128th) => NoteValueKind::D128th,
        (Some(DiatonicPitch::D), D256th) => NoteValueKind::D256th,

        (Some(DiatonicPitch::E), Breve) => NoteValueKind::EBreve,
        (Some(DiatonicPitch::E), Whole) => NoteValueKind::EWhole,
        (Some(DiatonicPitch::E), Half) => NoteValueKind::EHalf,
        (Some(DiatonicPitch::E), Quarter) => NoteValueKind::EQuarter,
        (Some(DiatonicPitch::E), Eighth) => NoteValueKind::E8th,
        (Some(DiatonicPitch::E), D16th) => NoteValueKind::E16th,
        (Some(DiatonicPitch::E), D32nd) => NoteValueKind::E32nd,
        (Some(DiatonicPitch::E), D64th) => NoteValueKind::E64th,
        (Some(DiatonicPitch::E), D128th) => NoteValueKind::E128th,
        (Some(DiatonicPitch::E), D256th) => NoteValueKind::E256th,

        (Some(DiatonicPitch::F), Breve) => NoteValueKind::FBreve,
        (Some(DiatonicPitch::F), Whole) => NoteValueKind::FWhole,
        (Some(DiatonicPitch::F), Half) => NoteValueKind::FHalf,
        (Some(DiatonicPitch::F), Quarter) => NoteValueKind::FQuarter,
        (Some(DiatonicPitch::F), Eighth) => NoteValueKind::F8th,
        (Some(DiatonicPitch::F), D16th) => NoteValueKind::F16th,
        (Some(DiatonicPitch::F), D32nd) => NoteValueKind::F32nd,
        (Some(DiatonicPitch::F), D64th) => NoteValueKind::F64th,
        (Some(DiatonicPitch::F), D128th) => NoteValueKind::F128th,
        (Some(DiatonicPitch::F), D256th) => NoteValueKind::F256th,

        (Some(DiatonicPitch::G), Breve) => NoteValueKind::GBreve,
        (Some(DiatonicPitch::G), Whole) => NoteValueKind::GWhole,
        (Some(DiatonicPitch::G), Half) => NoteValueKind::GHalf,
        (Some(DiatonicPitch::G), Quarter) => NoteValueKind::GQuarter,
        (Some(DiatonicPitch::G), Eighth) => NoteValueKind::G8th,
        (Some(DiatonicPitch::G), D16th) => NoteValueKind::G16th,
        (Some(DiatonicPitch::G), D32nd) => NoteValueKind::G32nd,
        (Some(DiatonicPitch::G), D64th) => NoteValueKind::G64th,
        (Some(DiatonicPitch::G), D128th) => NoteValueKind::G128th,
        (Some(DiatonicPitch::G), D256th) => NoteValueKind::G256th,

        (Some(DiatonicPitch::A), Breve) => NoteValueKind::ABreve,
        (Some(DiatonicPitch::A), Whole) => NoteValueKind::AWhole,
        (Some(DiatonicPitch::A), Half) => NoteValueKind::AHalf,
        (Some(DiatonicPitch::A), Quarter) => NoteValueKind::AQuarter,
        (Some(DiatonicPitch::A), Eighth) => NoteValueKind::A8th,
        (Some(DiatonicPitch::A), D16th) => NoteValueKind::A16th,
        (Some(DiatonicPitch::A), D32nd) => NoteValueKind::A32nd,
        (Some(DiatonicPitch::A), D64th) => NoteValueKind::A64th,
        (Some(DiatonicPitch::A), D128th) => NoteValueKind::A128th,
        (Some(DiatonicPitch::A), D256th) => NoteValueKind::A256th,

        (Some(DiatonicPitch::B), Breve) => NoteValueKind::BBreve,
        (Some(DiatonicPitch::B), Whole) => NoteValueKind::BWhole,
        (Some(DiatonicPitch::B), Half) => NoteValueKind::BHalf,
        (Some(DiatonicPitch::B), Quarter) => NoteValueKind::BQuarter,
        (Some(DiatonicPitch::B), Eighth) => NoteValueKind::B8th,
        (Some(DiatonicPitch::B), D16th) => NoteValueKind::B16th,
        (Some(DiatonicPitch::B), D32nd) => NoteValueKind::B32nd,
        (Some(DiatonicPitch::B), D64th) => NoteValueKind::B64th,
        (Some(DiatonicPitch::B), D128th) => NoteValueKind::B128th,
        (Some(DiatonicPitch::B), D256th) => NoteValueKind::B256th,
        (_, D1024th | D512th | Long | Maxima) => return None,
    };
    Some(value)
}
