//! Music elements of the LilyPond Score Representation
//!
//! These mirror the MSR measure contents, with every enumerated value
//! already mapped to its LilyPond counterpart.

use serde::Serialize;

use super::kinds::*;
use crate::msr::{
    Beam, GlissandoKind, GraceNotesGroupKind, KeyItem, MeasureKind,
    NoteKind, Pitch, Placement, RehearsalEnclosure, Slur, TieKind, TimeItem, TupletLineShape,
};
use crate::Rational;

// ============================================================================
// DURATIONS
// ============================================================================

/// A written LilyPond duration, e.g. `4.` or `\breve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LilypondDuration {
    pub kind: LilypondDurationKind,
    pub dots: u8,
}

impl LilypondDuration {
    pub fn new(kind: LilypondDurationKind, dots: u8) -> Self {
        Self { kind, dots }
    }

    /// LilyPond source spelling
    pub fn to_lilypond(&self) -> String {
        format!("{}{}", self.kind.name(), ".".repeat(self.dots as usize))
    }
}

// ============================================================================
// ATTRIBUTES AND DIRECTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrClef {
    pub input_line: usize,
    pub kind: LilypondClefKind,
    /// Line count for tablature clefs
    pub tablature_lines: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrKeyKind {
    Traditional { tonic: Pitch, mode: LilypondKeyMode },
    /// Set through `\set Staff.keyAlterations`
    Custom { alterations: Vec<KeyItem> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrKey {
    pub input_line: usize,
    pub kind: LpsrKeyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrTime {
    pub input_line: usize,
    pub style: LilypondTimeStyle,
    pub items: Vec<TimeItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrBarline {
    pub input_line: usize,
    pub bar_type: LilypondBarType,
}

/// `|` bar check, followed by a comment with the next measure number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LpsrBarCheck {
    pub input_line: usize,
    pub next_measure_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrTempo {
    pub input_line: usize,
    pub kind: LilypondTempoKind,
    pub words: Option<String>,
    pub beat_unit: Option<LilypondDuration>,
    pub per_minute: Option<String>,
    pub equivalent_beat_unit: Option<LilypondDuration>,
    pub parentheses: bool,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrRehearsalMark {
    pub input_line: usize,
    pub text: String,
    pub enclosure: RehearsalEnclosure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrLineBreak {
    pub input_line: usize,
    pub next_bar_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrPageBreak {
    pub input_line: usize,
}

/// A chord name, in `\chordmode`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrHarmony {
    pub input_line: usize,
    pub root: Pitch,
    pub modifier: LilypondChordModifier,
    pub bass: Option<Pitch>,
    pub inversion: u8,
    pub sounding: Rational,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrFigure {
    pub prefix: Option<LilypondFigureAffix>,
    pub number: Option<u8>,
    pub suffix: Option<LilypondFigureAffix>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrFiguredBass {
    pub input_line: usize,
    pub parentheses: bool,
    pub figures: Vec<LpsrFigure>,
    pub sounding: Rational,
}

// ============================================================================
// NOTE ATTACHMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrArticulation {
    pub kind: LilypondArticulationKind,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrTechnical {
    pub kind: LilypondTechnicalKind,
    pub placement: Option<Placement>,
    /// Fingering, fret, string number or markup text
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrOrnament {
    pub kind: LilypondOrnamentKind,
    pub placement: Option<Placement>,
    pub accidental: Option<LilypondAccidentalKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrDynamicsText {
    /// One of the MSR dynamics, by name
    Mark(&'static str),
    /// Free text from an `<other-dynamics>`
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrDynamics {
    pub text: LpsrDynamicsText,
    pub command: LilypondDynamicsCommand,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrWords {
    pub text: String,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrWedge {
    pub kind: LilypondWedgeKind,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrGlissando {
    pub kind: GlissandoKind,
    pub number: u8,
    pub text: Option<String>,
}

// ============================================================================
// NOTES, CHORDS, TUPLETS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrNote {
    pub input_line: usize,
    pub kind: NoteKind,
    pub pitch: Pitch,
    pub octave: i32,
    pub duration: LilypondDuration,
    pub sounding: Rational,
    pub accidental: LilypondAccidentalKind,
    /// `!` after the pitch
    pub forced_accidental: bool,
    /// `?` after the pitch
    pub cautionary_accidental: bool,
    pub editorial_accidental: bool,
    pub full_measure_rest: bool,
    pub ties: Vec<TieKind>,
    pub slurs: Vec<Slur>,
    pub beams: Vec<Beam>,
    pub articulations: Vec<LpsrArticulation>,
    pub technicals: Vec<LpsrTechnical>,
    pub ornaments: Vec<LpsrOrnament>,
    pub dynamics: Vec<LpsrDynamics>,
    pub words: Vec<LpsrWords>,
    pub wedges: Vec<LpsrWedge>,
    pub glissandos: Vec<LpsrGlissando>,
    pub grace_before: Option<Box<LpsrGraceNotesGroup>>,
    pub grace_after: Option<Box<LpsrGraceNotesGroup>>,
    /// Grace notes rendered with `\afterGrace`
    pub after_grace: Option<Box<LpsrGraceNotesGroup>>,
}

impl LpsrNote {
    pub fn has_trill(&self) -> bool {
        self.ornaments
            .iter()
            .any(|ornament| ornament.kind == LilypondOrnamentKind::Trill)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrChord {
    pub input_line: usize,
    pub notes: Vec<LpsrNote>,
    pub duration: LilypondDuration,
    pub sounding: Rational,
    pub grace_before: Option<Box<LpsrGraceNotesGroup>>,
    pub grace_after: Option<Box<LpsrGraceNotesGroup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrTupletElement {
    Note(LpsrNote),
    Chord(LpsrChord),
    Tuplet(LpsrTuplet),
}

/// `\tuplet actual/normal { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrTuplet {
    pub input_line: usize,
    pub number: u32,
    pub actual: u32,
    pub normal: u32,
    pub line_shape: TupletLineShape,
    pub show_bracket: bool,
    pub elements: Vec<LpsrTupletElement>,
}

impl LpsrTuplet {
    fn last_note_mut(&mut self) -> Option<&mut LpsrNote> {
        match self.elements.last_mut()? {
            LpsrTupletElement::Note(note) => Some(note),
            LpsrTupletElement::Chord(chord) => chord.notes.first_mut(),
            LpsrTupletElement::Tuplet(nested) => nested.last_note_mut(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrGraceElement {
    Note(LpsrNote),
    Chord(LpsrChord),
    Tuplet(LpsrTuplet),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrGraceNotesGroup {
    pub input_line: usize,
    pub kind: GraceNotesGroupKind,
    pub slashed: bool,
    pub beamed: bool,
    /// Spacer copy keeping other voices aligned (rendered with `s`)
    pub skip: bool,
    pub elements: Vec<LpsrGraceElement>,
}

impl LpsrGraceNotesGroup {
    /// The same group with every note turned into a skip of equal duration
    pub fn to_skip_group(&self) -> Self {
        fn skip_note(note: &LpsrNote) -> LpsrNote {
            let mut skip = note.clone();
            skip.kind = NoteKind::Skip;
            skip.ornaments.clear();
            skip.articulations.clear();
            skip.technicals.clear();
            skip.dynamics.clear();
            skip.words.clear();
            skip.wedges.clear();
            skip.glissandos.clear();
            skip.slurs.clear();
            skip.ties.clear();
            skip
        }

        let elements = self
            .elements
            .iter()
            .map(|element| match element {
                LpsrGraceElement::Note(note) => LpsrGraceElement::Note(skip_note(note)),
                // a chord only needs one spacer
                LpsrGraceElement::Chord(chord) => match chord.notes.first() {
                    Some(note) => LpsrGraceElement::Note(skip_note(note)),
                    None => LpsrGraceElement::Chord(chord.clone()),
                },
                LpsrGraceElement::Tuplet(tuplet) => LpsrGraceElement::Tuplet(tuplet.clone()),
            })
            .collect();

        Self {
            input_line: self.input_line,
            kind: self.kind,
            slashed: self.slashed,
            beamed: false,
            skip: true,
            elements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrTremoloElement {
    Note(LpsrNote),
    Chord(LpsrChord),
}

/// `\repeat tremolo`, with its two slots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrDoubleTremolo {
    pub input_line: usize,
    pub marks: u8,
    pub first: Option<LpsrTremoloElement>,
    pub second: Option<LpsrTremoloElement>,
}

// ============================================================================
// MEASURES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Music {
    Clef(LpsrClef),
    Key(LpsrKey),
    Time(LpsrTime),
    Note(LpsrNote),
    Chord(LpsrChord),
    Tuplet(LpsrTuplet),
    DoubleTremolo(LpsrDoubleTremolo),
    /// Grace notes standing on their own, e.g. a prepended skip group
    GraceNotes(LpsrGraceNotesGroup),
    Barline(LpsrBarline),
    BarCheck(LpsrBarCheck),
    Tempo(LpsrTempo),
    RehearsalMark(LpsrRehearsalMark),
    LineBreak(LpsrLineBreak),
    PageBreak(LpsrPageBreak),
    Harmony(LpsrHarmony),
    FiguredBass(LpsrFiguredBass),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrMeasure {
    pub input_line: usize,
    pub number: String,
    pub purist_number: u32,
    pub kind: MeasureKind,
    pub full_length: Rational,
    pub elements: Vec<Music>,
}

impl LpsrMeasure {
    /// True when the only content is one rest filling the measure. Clef,
    /// key, time, tempo and rehearsal mark events keep a measure out of a
    /// rest-measures run.
    pub fn is_full_measure_rest(&self) -> bool {
        let mut rests = 0;
        for element in &self.elements {
            match element {
                Music::Note(note) if note.kind == NoteKind::Rest => {
                    if !note.full_measure_rest && note.sounding != self.full_length {
                        return false;
                    }
                    rests += 1;
                }
                Music::Clef(_)
                | Music::Key(_)
                | Music::Time(_)
                | Music::Tempo(_)
                | Music::RehearsalMark(_)
                | Music::Note(_)
                | Music::Chord(_)
                | Music::Tuplet(_)
                | Music::DoubleTremolo(_)
                | Music::GraceNotes(_)
                | Music::Harmony(_)
                | Music::FiguredBass(_) => return false,
                _ => {}
            }
        }
        rests == 1
    }

    pub fn notes(&self) -> impl Iterator<Item = &LpsrNote> {
        self.elements.iter().filter_map(|element| match element {
            Music::Note(note) => Some(note),
            _ => None,
        })
    }

    /// The last note appended, looking inside chords and tuplets
    pub fn last_note_mut(&mut self) -> Option<&mut LpsrNote> {
        self.elements.iter_mut().rev().find_map(|element| match element {
            Music::Note(note) => Some(note),
            Music::Chord(chord) => chord.notes.first_mut(),
            Music::Tuplet(tuplet) => tuplet.last_note_mut(),
            _ => None,
        })
    }
}

/// A run of full-measure rests compressed into `R1*n`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrRestMeasures {
    pub input_line: usize,
    pub count: usize,
    pub measures: Vec<LpsrMeasure>,
}

impl LpsrRestMeasures {
    pub fn first_measure_number(&self) -> Option<&str> {
        self.measures.first().map(|measure| measure.number.as_str())
    }
}
