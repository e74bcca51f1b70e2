//! Musical events and note attachments of the Music Score Representation
//!
//! Leaf events (clefs, keys, barlines...) and the note-level nodes
//! (notes, chords, tuplets, grace notes groups, double tremolos).

use serde::{Deserialize, Serialize};

use super::kinds::*;
use crate::Rational;

/// Pitch spelled as a diatonic step plus an alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub step: DiatonicPitch,
    pub alteration: Alteration,
}

impl Pitch {
    pub fn new(step: DiatonicPitch, alteration: Alteration) -> Self {
        Self { step, alteration }
    }

    pub fn natural(step: DiatonicPitch) -> Self {
        Self::new(step, Alteration::Natural)
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clef {
    pub input_line: usize,
    pub kind: ClefKind,
}

impl Clef {
    pub fn new(input_line: usize, kind: ClefKind) -> Self {
        Self { input_line, kind }
    }
}

/// One alteration of a non-traditional key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyItem {
    pub step: DiatonicPitch,
    pub alteration: Alteration,
    pub octave: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyKind {
    /// Tonic and mode, as in `<fifths>` + `<mode>`
    Traditional { tonic: Pitch, mode: KeyMode },
    /// Explicit list of altered steps
    HumdrumScot { items: Vec<KeyItem> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub input_line: usize,
    pub kind: KeyKind,
}

impl Key {
    pub fn traditional(input_line: usize, tonic: Pitch, mode: KeyMode) -> Self {
        Self {
            input_line,
            kind: KeyKind::Traditional { tonic, mode },
        }
    }
}

/// A `beats / beat-type` pair; several beats values are summed (3+2/8)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeItem {
    pub beats: Vec<u32>,
    pub beat_type: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Time {
    pub input_line: usize,
    pub symbol: TimeSymbolKind,
    pub items: Vec<TimeItem>,
}

impl Time {
    /// A plain numerical time signature
    pub fn new(input_line: usize, beats: u32, beat_type: u32) -> Self {
        Self {
            input_line,
            symbol: TimeSymbolKind::None,
            items: vec![TimeItem {
                beats: vec![beats],
                beat_type,
            }],
        }
    }

    pub fn with_symbol(mut self, symbol: TimeSymbolKind) -> Self {
        self.symbol = symbol;
        self
    }

    /// Length of a full measure in whole notes
    pub fn whole_notes_per_measure(&self) -> Rational {
        self.items
            .iter()
            .filter(|item| item.beat_type > 0)
            .map(|item| {
                let beats: u32 = item.beats.iter().sum();
                Rational::new(beats as i32, item.beat_type as i32)
            })
            .fold(Rational::new(0, 1), |acc, r| acc + r)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barline {
    pub input_line: usize,
    pub location: BarlineLocation,
    pub style: BarlineStyle,
    pub category: BarlineCategory,
    pub repeat_times: Option<u32>,
    pub ending_number: Option<String>,
}

impl Barline {
    pub fn new(input_line: usize, location: BarlineLocation, style: BarlineStyle) -> Self {
        Self {
            input_line,
            location,
            style,
            category: BarlineCategory::Standalone,
            repeat_times: None,
            ending_number: None,
        }
    }

    pub fn with_category(mut self, category: BarlineCategory) -> Self {
        self.category = category;
        self
    }
}

// ============================================================================
// DIRECTIONS
// ============================================================================

/// Beat unit of a metronome mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatUnit {
    pub duration: DurationKind,
    pub dots: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    pub input_line: usize,
    pub kind: TempoKind,
    pub words: Option<String>,
    pub beat_unit: Option<BeatUnit>,
    pub per_minute: Option<String>,
    pub equivalent_beat_unit: Option<BeatUnit>,
    pub parentheses: bool,
    pub placement: Placement,
}

impl Tempo {
    /// A `beat-unit = per-minute` metronome mark
    pub fn per_minute(input_line: usize, beat_unit: BeatUnit, per_minute: &str) -> Self {
        Self {
            input_line,
            kind: TempoKind::BeatUnitsPerMinute,
            words: None,
            beat_unit: Some(beat_unit),
            per_minute: Some(per_minute.to_string()),
            equivalent_beat_unit: None,
            parentheses: false,
            placement: Placement::Above,
        }
    }

    pub fn words(input_line: usize, text: &str) -> Self {
        Self {
            input_line,
            kind: TempoKind::Words,
            words: Some(text.to_string()),
            beat_unit: None,
            per_minute: None,
            equivalent_beat_unit: None,
            parentheses: false,
            placement: Placement::Above,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehearsalMark {
    pub input_line: usize,
    pub text: String,
    pub enclosure: RehearsalEnclosure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreak {
    pub input_line: usize,
    pub next_bar_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBreak {
    pub input_line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmony {
    pub input_line: usize,
    pub root: Pitch,
    pub kind: HarmonyKind,
    pub bass: Option<Pitch>,
    pub inversion: u8,
    pub sounding: Rational,
}

/// One figure of a figured bass, e.g. `#6`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub prefix: Option<AccidentalKind>,
    pub number: Option<u8>,
    pub suffix: Option<AccidentalKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiguredBass {
    pub input_line: usize,
    pub parentheses: bool,
    pub figures: Vec<Figure>,
    pub sounding: Rational,
}

// ============================================================================
// NOTE ATTACHMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Articulation {
    pub input_line: usize,
    pub kind: ArticulationKind,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technical {
    pub input_line: usize,
    pub kind: TechnicalKind,
    pub placement: Option<Placement>,
    /// Fingering, fret or string number, or free text
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ornament {
    pub input_line: usize,
    pub kind: OrnamentKind,
    pub placement: Option<Placement>,
    pub accidental: Option<AccidentalKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dynamics {
    pub input_line: usize,
    pub kind: DynamicsKind,
    pub placement: Placement,
}

impl Dynamics {
    pub fn new(input_line: usize, kind: DynamicsKind) -> Self {
        Self {
            input_line,
            kind,
            placement: Placement::Below,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherDynamics {
    pub input_line: usize,
    pub text: String,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Words {
    pub input_line: usize,
    pub text: String,
    pub placement: Placement,
}

impl Words {
    pub fn new(input_line: usize, text: &str) -> Self {
        Self {
            input_line,
            text: text.to_string(),
            placement: Placement::Above,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub input_line: usize,
    pub kind: WedgeKind,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glissando {
    pub input_line: usize,
    pub kind: GlissandoKind,
    pub number: u8,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slur {
    pub kind: SlurKind,
    pub number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beam {
    pub kind: BeamKind,
    pub number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllable {
    pub input_line: usize,
    pub stanza_number: String,
    pub kind: SyllableKind,
    pub texts: Vec<String>,
    pub extend: SyllableExtend,
}

impl Syllable {
    pub fn new(input_line: usize, stanza_number: &str, kind: SyllableKind, text: &str) -> Self {
        Self {
            input_line,
            stanza_number: stanza_number.to_string(),
            kind,
            texts: vec![text.to_string()],
            extend: SyllableExtend::Single,
        }
    }

    /// All text fragments joined (elisions are stored separately)
    pub fn text(&self) -> String {
        self.texts.join(" ")
    }
}

// ============================================================================
// NOTES, CHORDS, TUPLETS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub input_line: usize,
    pub kind: NoteKind,
    pub pitch: Pitch,
    /// Octave number, 4 being the octave starting at middle C
    pub octave: i32,
    pub duration: DurationKind,
    pub dots: u8,
    /// Sounding length in whole notes (tuplets scale it)
    pub sounding: Rational,
    pub accidental: AccidentalKind,
    pub editorial_accidental: bool,
    pub cautionary_accidental: bool,
    pub full_measure_rest: bool,
    pub tremolo_position: Option<TremoloPosition>,
    pub ties: Vec<TieKind>,
    pub slurs: Vec<Slur>,
    pub beams: Vec<Beam>,
    pub articulations: Vec<Articulation>,
    pub technicals: Vec<Technical>,
    pub ornaments: Vec<Ornament>,
    pub dynamics: Vec<Dynamics>,
    pub other_dynamics: Vec<OtherDynamics>,
    pub words: Vec<Words>,
    pub wedges: Vec<Wedge>,
    pub glissandos: Vec<Glissando>,
    pub syllables: Vec<Syllable>,
    pub grace_before: Option<Box<GraceNotesGroup>>,
    pub grace_after: Option<Box<GraceNotesGroup>>,
}

impl Note {
    pub fn new(
        input_line: usize,
        kind: NoteKind,
        pitch: Pitch,
        octave: i32,
        duration: DurationKind,
    ) -> Self {
        Self {
            input_line,
            kind,
            pitch,
            octave,
            duration,
            dots: 0,
            sounding: duration.whole_notes(),
            accidental: AccidentalKind::None,
            editorial_accidental: false,
            cautionary_accidental: false,
            full_measure_rest: false,
            tremolo_position: None,
            ties: Vec::new(),
            slurs: Vec::new(),
            beams: Vec::new(),
            articulations: Vec::new(),
            technicals: Vec::new(),
            ornaments: Vec::new(),
            dynamics: Vec::new(),
            other_dynamics: Vec::new(),
            words: Vec::new(),
            wedges: Vec::new(),
            glissandos: Vec::new(),
            syllables: Vec::new(),
            grace_before: None,
            grace_after: None,
        }
    }

    /// A regular pitched note
    pub fn regular(input_line: usize, step: DiatonicPitch, octave: i32, duration: DurationKind) -> Self {
        Self::new(input_line, NoteKind::Regular, Pitch::natural(step), octave, duration)
    }

    pub fn rest(input_line: usize, duration: DurationKind) -> Self {
        Self::new(input_line, NoteKind::Rest, Pitch::natural(DiatonicPitch::C), 4, duration)
    }

    /// A rest filling a whole measure of the given length
    pub fn full_measure_rest(input_line: usize, full_length: Rational) -> Self {
        let mut rest = Self::rest(input_line, DurationKind::Whole);
        rest.sounding = full_length;
        rest.full_measure_rest = true;
        rest
    }

    pub fn with_kind(mut self, kind: NoteKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_dots(mut self, dots: u8) -> Self {
        self.dots = dots;
        self.sounding = self.duration.dotted_whole_notes(dots);
        self
    }

    pub fn with_alteration(mut self, alteration: Alteration, accidental: AccidentalKind) -> Self {
        self.pitch.alteration = alteration;
        self.accidental = accidental;
        self
    }

    pub fn is_rest(&self) -> bool {
        self.kind.is_rest()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub input_line: usize,
    pub notes: Vec<Note>,
    pub duration: DurationKind,
    pub dots: u8,
    pub sounding: Rational,
    pub tremolo_position: Option<TremoloPosition>,
    pub grace_before: Option<Box<GraceNotesGroup>>,
    pub grace_after: Option<Box<GraceNotesGroup>>,
}

impl Chord {
    /// Build a chord from its members; member kinds are left as given
    pub fn new(input_line: usize, notes: Vec<Note>) -> Self {
        let (duration, dots, sounding) = notes
            .first()
            .map(|n| (n.duration, n.dots, n.sounding))
            .unwrap_or((DurationKind::Quarter, 0, DurationKind::Quarter.whole_notes()));
        Self {
            input_line,
            notes,
            duration,
            dots,
            sounding,
            tremolo_position: None,
            grace_before: None,
            grace_after: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TupletElement {
    Note(Note),
    Chord(Chord),
    Tuplet(Tuplet),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuplet {
    pub input_line: usize,
    pub number: u32,
    /// Notes actually played (3 for a triplet)
    pub actual: u32,
    /// Notes normally played in the same time (2 for a triplet)
    pub normal: u32,
    pub line_shape: TupletLineShape,
    pub show_bracket: bool,
    pub elements: Vec<TupletElement>,
}

impl Tuplet {
    pub fn new(input_line: usize, actual: u32, normal: u32, elements: Vec<TupletElement>) -> Self {
        Self {
            input_line,
            number: 1,
            actual,
            normal,
            line_shape: TupletLineShape::Straight,
            show_bracket: true,
            elements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraceElement {
    Note(Note),
    Chord(Chord),
    /// Members are `GraceTupletMember` notes
    Tuplet(Tuplet),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraceNotesGroup {
    pub input_line: usize,
    pub kind: GraceNotesGroupKind,
    pub slashed: bool,
    pub beamed: bool,
    pub elements: Vec<GraceElement>,
}

impl GraceNotesGroup {
    pub fn new(input_line: usize, kind: GraceNotesGroupKind, elements: Vec<GraceElement>) -> Self {
        Self {
            input_line,
            kind,
            slashed: false,
            beamed: false,
            elements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TremoloElement {
    Note(Note),
    Chord(Chord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleTremolo {
    pub input_line: usize,
    pub marks: u8,
    pub first: TremoloElement,
    pub second: TremoloElement,
}

// ============================================================================
// MEASURE CONTENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeasureElement {
    Clef(Clef),
    Key(Key),
    Time(Time),
    Note(Note),
    Chord(Chord),
    Tuplet(Tuplet),
    DoubleTremolo(DoubleTremolo),
    Barline(Barline),
    Tempo(Tempo),
    RehearsalMark(RehearsalMark),
    LineBreak(LineBreak),
    PageBreak(PageBreak),
    Harmony(Harmony),
    FiguredBass(FiguredBass),
}
