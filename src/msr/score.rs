//! Structural nodes of the Music Score Representation
//!
//! ```text
//! Score
//! └── PartGroup (recursive)
//!     └── Part
//!         └── Staff
//!             └── Voice
//!                 ├── Segment ── Measure ── MeasureElement
//!                 ├── Repeat (common part + endings, recursive)
//!                 └── Stanza ── Syllable
//! ```

use serde::{Deserialize, Serialize};

use super::elements::{MeasureElement, Syllable};
use super::kinds::*;
use crate::Rational;

/// Bibliographic data used to seed target headers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    pub work_number: Option<String>,
    pub work_title: Option<String>,
    pub movement_number: Option<String>,
    pub movement_title: Option<String>,
    pub composers: Vec<String>,
    pub arrangers: Vec<String>,
    pub lyricists: Vec<String>,
    pub poets: Vec<String>,
    pub translators: Vec<String>,
    pub rights: Vec<String>,
    pub software: Vec<String>,
    pub encoding_date: Option<String>,
}

impl Identification {
    /// Title to display: the work title, or else the movement title
    pub fn display_title(&self) -> Option<&str> {
        self.work_title
            .as_deref()
            .or(self.movement_title.as_deref())
    }
}

/// Page layout data, in tenths unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    pub millimeters: f32,
    pub tenths: f32,
    pub page_height: Option<f32>,
    pub page_width: Option<f32>,
}

impl Scaling {
    /// Convert a length in tenths to millimeters
    pub fn tenths_to_millimeters(&self, tenths: f32) -> f32 {
        if self.tenths == 0.0 {
            0.0
        } else {
            tenths * self.millimeters / self.tenths
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub identification: Identification,
    pub scaling: Option<Scaling>,
    pub part_groups: Vec<PartGroup>,
}

impl Score {
    pub fn new(identification: Identification, part_groups: Vec<PartGroup>) -> Self {
        Self {
            identification,
            scaling: None,
            part_groups,
        }
    }

    /// Load a score handed over as JSON by an upstream builder
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// All parts, depth-first in score order
    pub fn parts(&self) -> Vec<&Part> {
        fn collect<'a>(group: &'a PartGroup, parts: &mut Vec<&'a Part>) {
            for element in &group.elements {
                match element {
                    PartGroupElement::Part(part) => parts.push(part),
                    PartGroupElement::PartGroup(nested) => collect(nested, parts),
                }
            }
        }

        let mut parts = Vec::new();
        for group in &self.part_groups {
            collect(group, &mut parts);
        }
        parts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartGroupElement {
    Part(Part),
    PartGroup(PartGroup),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartGroup {
    pub input_line: usize,
    pub number: u32,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub symbol: PartGroupSymbol,
    /// Whether barlines are drawn across the staves of the group
    pub barline: bool,
    pub elements: Vec<PartGroupElement>,
}

impl PartGroup {
    pub fn new(input_line: usize, number: u32, elements: Vec<PartGroupElement>) -> Self {
        Self {
            input_line,
            number,
            name: None,
            abbreviation: None,
            symbol: PartGroupSymbol::None,
            barline: true,
            elements,
        }
    }

    /// Name used when displaying the group, e.g. `PartGroup_1 "Strings"`
    pub fn combined_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => format!("PartGroup_{} \"{}\"", self.number, name),
            _ => format!("PartGroup_{}", self.number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub input_line: usize,
    pub id: String,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub instrument_name: Option<String>,
    pub staves: Vec<Staff>,
}

impl Part {
    pub fn new(input_line: usize, id: &str, staves: Vec<Staff>) -> Self {
        Self {
            input_line,
            id: id.to_string(),
            name: None,
            abbreviation: None,
            instrument_name: None,
            staves,
        }
    }
}

/// Tuning of one tablature line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffTuning {
    pub input_line: usize,
    pub line: u8,
    pub step: DiatonicPitch,
    pub alteration: Alteration,
    pub octave: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub input_line: usize,
    pub number: u32,
    pub kind: StaffKind,
    pub tunings: Vec<StaffTuning>,
    pub voices: Vec<Voice>,
}

impl Staff {
    pub fn new(input_line: usize, number: u32, kind: StaffKind, voices: Vec<Voice>) -> Self {
        Self {
            input_line,
            number,
            kind,
            tunings: Vec::new(),
            voices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoiceElement {
    Segment(Segment),
    Repeat(Repeat),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub input_line: usize,
    pub number: u32,
    pub kind: VoiceKind,
    pub elements: Vec<VoiceElement>,
    pub stanzas: Vec<Stanza>,
}

impl Voice {
    pub fn new(input_line: usize, number: u32, kind: VoiceKind, elements: Vec<VoiceElement>) -> Self {
        Self {
            input_line,
            number,
            kind,
            elements,
            stanzas: Vec::new(),
        }
    }

    /// A regular voice made of a single segment
    pub fn with_measures(input_line: usize, number: u32, measures: Vec<Measure>) -> Self {
        Self::new(
            input_line,
            number,
            VoiceKind::Regular,
            vec![VoiceElement::Segment(Segment::new(input_line, measures))],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub input_line: usize,
    pub measures: Vec<Measure>,
}

impl Segment {
    pub fn new(input_line: usize, measures: Vec<Measure>) -> Self {
        Self { input_line, measures }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatCommonPart {
    pub input_line: usize,
    pub elements: Vec<VoiceElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatEnding {
    pub input_line: usize,
    /// Ending number as written, e.g. "1" or "1, 2"
    pub number: String,
    pub kind: RepeatEndingKind,
    pub elements: Vec<VoiceElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    pub input_line: usize,
    pub times: u32,
    /// The repeat has an end barline but no start barline in the source
    pub implicit_start: bool,
    pub common_part: RepeatCommonPart,
    pub endings: Vec<RepeatEnding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub input_line: usize,
    /// Measure number as displayed
    pub number: String,
    /// Strictly sequential measure count
    pub purist_number: u32,
    pub kind: MeasureKind,
    /// Nominal measure length in whole notes
    pub full_length: Rational,
    pub elements: Vec<MeasureElement>,
}

impl Measure {
    pub fn new(input_line: usize, number: &str, purist_number: u32, elements: Vec<MeasureElement>) -> Self {
        Self {
            input_line,
            number: number.to_string(),
            purist_number,
            kind: MeasureKind::Regular,
            full_length: Rational::new(1, 1),
            elements,
        }
    }

    pub fn with_full_length(mut self, full_length: Rational) -> Self {
        self.full_length = full_length;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stanza {
    pub input_line: usize,
    pub number: String,
    pub name: Option<String>,
    pub syllables: Vec<Syllable>,
}
