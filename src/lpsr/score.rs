//! LPSR score root and LilyPond blocks
//!
//! The score owns two parallel trees: the cloned part groups holding the
//! music, and the book blocks telling the renderer how to lay the music
//! out (which score blocks, which part group / part / staff contexts).

use std::collections::BTreeSet;

use serde::Serialize;

use super::kinds::*;
use super::voice::LpsrVoice;
use crate::msr::{self, PartGroupSymbol, StaffKind, StaffTuning};

/// `\header { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LpsrHeader {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub work_number: Option<String>,
    pub movement_number: Option<String>,
    pub composers: Vec<String>,
    pub arrangers: Vec<String>,
    pub lyricists: Vec<String>,
    pub poets: Vec<String>,
    pub translators: Vec<String>,
    pub rights: Vec<String>,
    pub software: Vec<String>,
    pub encoding_date: Option<String>,
}

impl LpsrHeader {
    pub fn from_identification(identification: &msr::Identification) -> Self {
        let title = identification.display_title().map(str::to_string);
        // the movement title only becomes a subtitle under a work title
        let subtitle = match (&identification.work_title, &identification.movement_title) {
            (Some(_), Some(movement)) => Some(movement.clone()),
            _ => None,
        };

        Self {
            title,
            subtitle,
            work_number: identification.work_number.clone(),
            movement_number: identification.movement_number.clone(),
            composers: identification.composers.clone(),
            arrangers: identification.arrangers.clone(),
            lyricists: identification.lyricists.clone(),
            poets: identification.poets.clone(),
            translators: identification.translators.clone(),
            rights: identification.rights.clone(),
            software: identification.software.clone(),
            encoding_date: identification.encoding_date.clone(),
        }
    }
}

/// `\paper { ... }`, sizes in millimeters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LpsrPaper {
    pub paper_height: Option<f32>,
    pub paper_width: Option<f32>,
}

impl LpsrPaper {
    pub fn from_scaling(scaling: Option<&msr::Scaling>) -> Self {
        match scaling {
            Some(scaling) => Self {
                paper_height: scaling.page_height.map(|h| scaling.tenths_to_millimeters(h)),
                paper_width: scaling.page_width.map(|w| scaling.tenths_to_millimeters(w)),
            },
            None => Self::default(),
        }
    }
}

const POINTS_PER_MILLIMETER: f32 = 72.27 / 25.4;

/// `\layout { ... }` and the global staff size
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LpsrLayout {
    /// `#(set-global-staff-size n)`, in points
    pub global_staff_size: Option<f32>,
}

impl LpsrLayout {
    pub fn from_scaling(scaling: Option<&msr::Scaling>) -> Self {
        // MusicXML scaling gives the millimeters of 40 tenths, one staff height
        let global_staff_size = scaling
            .filter(|scaling| scaling.tenths > 0.0)
            .map(|scaling| scaling.tenths_to_millimeters(40.0) * POINTS_PER_MILLIMETER);
        Self { global_staff_size }
    }
}

// ============================================================================
// CLONED TREE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrStaff {
    pub input_line: usize,
    pub name: String,
    pub number: u32,
    pub kind: StaffKind,
    pub context: LilypondStaffContext,
    pub tunings: Vec<StaffTuning>,
    pub voices: Vec<LpsrVoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrPart {
    pub input_line: usize,
    pub id: String,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub instrument_name: Option<String>,
    pub staves: Vec<LpsrStaff>,
}

impl LpsrPart {
    pub fn voices(&self) -> impl Iterator<Item = &LpsrVoice> {
        self.staves.iter().flat_map(|staff| staff.voices.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LpsrPartGroupElement {
    Part(LpsrPart),
    PartGroup(LpsrPartGroup),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrPartGroup {
    pub input_line: usize,
    pub number: u32,
    pub combined_name: String,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub symbol: PartGroupSymbol,
    pub barline: bool,
    pub elements: Vec<LpsrPartGroupElement>,
}

// ============================================================================
// BLOCKS
// ============================================================================

/// `\new Lyrics \lyricsto voice_name \stanza`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricsReference {
    pub voice_name: String,
    pub lyrics_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffBlock {
    pub staff_name: String,
    pub context: LilypondStaffContext,
    pub instrument_name: Option<String>,
    pub short_instrument_name: Option<String>,
    pub voice_names: Vec<String>,
    pub lyrics: Vec<LyricsReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartBlockElement {
    Staff(StaffBlock),
    /// `\new ChordNames` fed by a harmony voice
    ChordNames { voice_name: String },
    /// `\new FiguredBass` fed by a figured bass voice
    FiguredBass { voice_name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartBlock {
    pub part_id: String,
    pub part_name: Option<String>,
    /// Set for parts with several staves
    pub context: Option<LilypondGroupContext>,
    pub elements: Vec<PartBlockElement>,
}

impl PartBlock {
    pub fn staff_blocks(&self) -> impl Iterator<Item = &StaffBlock> {
        self.elements.iter().filter_map(|element| match element {
            PartBlockElement::Staff(staff) => Some(staff),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartGroupBlockElement {
    Part(PartBlock),
    PartGroup(PartGroupBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartGroupBlock {
    pub name: String,
    pub context: LilypondGroupContext,
    pub elements: Vec<PartGroupBlockElement>,
}

impl PartGroupBlock {
    /// Part blocks, depth-first in score order
    pub fn part_blocks(&self) -> Vec<&PartBlock> {
        let mut parts = Vec::new();
        for element in &self.elements {
            match element {
                PartGroupBlockElement::Part(part) => parts.push(part),
                PartGroupBlockElement::PartGroup(nested) => parts.extend(nested.part_blocks()),
            }
        }
        parts
    }
}

/// `\score { << ... >> \layout {} }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBlock {
    pub part_groups: Vec<PartGroupBlock>,
}

/// `\bookpart { \score { ... } }`, or a stand-alone part score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPartBlock {
    /// Part shown in this book part, `None` for the full score
    pub part_id: Option<String>,
    pub part: Option<PartBlock>,
    pub score: Option<ScoreBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BookBlockElement {
    Score(ScoreBlock),
    BookPart(BookPartBlock),
}

/// `\book { ... }`, one output file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookBlock {
    pub elements: Vec<BookBlockElement>,
}

// ============================================================================
// SCORE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrScore {
    pub header: LpsrHeader,
    pub paper: LpsrPaper,
    pub layout: LpsrLayout,
    pub features: BTreeSet<ScoreFeature>,
    pub part_groups: Vec<LpsrPartGroup>,
    pub book_blocks: Vec<BookBlock>,
}

impl LpsrScore {
    pub fn new(header: LpsrHeader, paper: LpsrPaper, layout: LpsrLayout) -> Self {
        Self {
            header,
            paper,
            layout,
            features: BTreeSet::new(),
            part_groups: Vec::new(),
            book_blocks: Vec::new(),
        }
    }

    /// Mark support code as needed; repeated calls have no further effect
    pub fn set_feature(&mut self, feature: ScoreFeature) {
        if self.features.insert(feature) {
            log::debug!("LPSR score needs {}", feature);
        }
    }

    pub fn has_feature(&self, feature: ScoreFeature) -> bool {
        self.features.contains(&feature)
    }

    /// All parts, depth-first in score order
    pub fn parts(&self) -> Vec<&LpsrPart> {
        fn collect<'a>(group: &'a LpsrPartGroup, parts: &mut Vec<&'a LpsrPart>) {
            for element in &group.elements {
                match element {
                    LpsrPartGroupElement::Part(part) => parts.push(part),
                    LpsrPartGroupElement::PartGroup(nested) => collect(nested, parts),
                }
            }
        }

        let mut parts = Vec::new();
        for group in &self.part_groups {
            collect(group, &mut parts);
        }
        parts
    }

    pub fn voices(&self) -> Vec<&LpsrVoice> {
        self.parts().into_iter().flat_map(|part| part.voices()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
