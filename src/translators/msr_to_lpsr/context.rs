//! Context state of the MSR to LPSR translator
//!
//! Every "current" element is owned here while it is open and moved into
//! its parent when its end event arrives.

use crate::lpsr::*;
use crate::msr::TremoloPosition;
use crate::translators::errors::{StructuralError, TranslationError};
use crate::translators::skipped::SkipReport;

/// What an open grace notes group will be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GraceOwner {
    Note,
    Chord,
}

#[derive(Debug)]
pub(super) struct OpenGraceGroup {
    pub group: LpsrGraceNotesGroup,
    pub owner: GraceOwner,
    /// Decorates the first non-grace note of its voice
    pub decorates_first_note: bool,
    /// Becomes the `\afterGrace` of the previous, trilled note
    pub after_grace: bool,
}

pub(super) struct LpsrContext {
    pub score: LpsrScore,
    pub score_visited: bool,
    pub skipped: SkipReport,

    pub part_groups: Vec<LpsrPartGroup>,
    pub part_group_blocks: Vec<PartGroupBlock>,
    pub finished_group_blocks: Vec<PartGroupBlock>,
    pub part: Option<LpsrPart>,
    pub part_block: Option<PartBlock>,
    pub staff: Option<LpsrStaff>,
    pub staff_block: Option<StaffBlock>,
    pub voice: Option<LpsrVoice>,
    /// Non-grace notes finished in the current voice
    pub voice_note_count: usize,
    pub stanza: Option<LpsrStanza>,

    pub measure: Option<LpsrMeasure>,
    pub pending_rest_measures: Vec<LpsrMeasure>,
    pub pending_start_repeat_barline: bool,

    pub notes: Vec<LpsrNote>,
    pub chord: Option<LpsrChord>,
    /// Chord inside a grace notes group
    pub grace_chord: Option<LpsrChord>,
    pub tuplets: Vec<LpsrTuplet>,
    /// Tuplets inside the open grace notes group
    pub grace_tuplets: Vec<LpsrTuplet>,
    pub grace_group: Option<OpenGraceGroup>,
    pub double_tremolo: Option<LpsrDoubleTremolo>,

    /// Skip copies of first-note grace groups, keyed by the owning voice name
    pub skip_groups: Vec<(String, LpsrGraceNotesGroup)>,
}

impl LpsrContext {
    pub fn new() -> Self {
        Self {
            score: LpsrScore::new(LpsrHeader::default(), LpsrPaper::default(), LpsrLayout::default()),
            score_visited: false,
            skipped: SkipReport::new("LPSR"),
            part_groups: Vec::new(),
            part_group_blocks: Vec::new(),
            finished_group_blocks: Vec::new(),
            part: None,
            part_block: None,
            staff: None,
            staff_block: None,
            voice: None,
            voice_note_count: 0,
            stanza: None,
            measure: None,
            pending_rest_measures: Vec::new(),
            pending_start_repeat_barline: false,
            notes: Vec::new(),
            chord: None,
            grace_chord: None,
            tuplets: Vec::new(),
            grace_tuplets: Vec::new(),
            grace_group: None,
            double_tremolo: None,
            skip_groups: Vec::new(),
        }
    }

    pub fn set_feature(&mut self, feature: ScoreFeature) {
        self.score.set_feature(feature);
    }

    pub fn skip(&mut self, element_type: &str, value: &str, input_line: usize, reason: &str) {
        self.skipped.add_skipped(element_type, value, input_line, reason);
    }

    pub fn measure_mut(
        &mut self,
        element: &'static str,
        input_line: usize,
    ) -> Result<&mut LpsrMeasure, TranslationError> {
        self.measure
            .as_mut()
            .ok_or_else(|| StructuralError::OutsideMeasure { element, input_line }.into())
    }

    pub fn append_to_measure(
        &mut self,
        music: Music,
        element: &'static str,
        input_line: usize,
    ) -> Result<(), TranslationError> {
        self.measure_mut(element, input_line)?.elements.push(music);
        Ok(())
    }

    pub fn voice_mut(
        &mut self,
        element: &'static str,
        input_line: usize,
    ) -> Result<&mut LpsrVoice, TranslationError> {
        self.voice
            .as_mut()
            .ok_or_else(|| StructuralError::OutsideVoice { element, input_line }.into())
    }

    pub fn require_note(&self, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        if self.notes.is_empty() {
            return Err(StructuralError::AttachmentOutsideNote { element, input_line }.into());
        }
        Ok(())
    }

    pub fn note_mut(
        &mut self,
        element: &'static str,
        input_line: usize,
    ) -> Result<&mut LpsrNote, TranslationError> {
        self.notes
            .last_mut()
            .ok_or_else(|| StructuralError::AttachmentOutsideNote { element, input_line }.into())
    }

    /// Hand the pending full-measure rests to the voice as one run
    pub fn flush_rest_measures(&mut self) -> Result<(), TranslationError> {
        if self.pending_rest_measures.is_empty() {
            return Ok(());
        }
        let run = std::mem::take(&mut self.pending_rest_measures);
        let input_line = run[0].input_line;
        self.voice_mut("rest measures", input_line)?.append_rest_measures(run);
        Ok(())
    }

    pub fn install_tremolo_element(
        &mut self,
        position: Option<TremoloPosition>,
        element: LpsrTremoloElement,
        input_line: usize,
    ) -> Result<(), TranslationError> {
        let tremolo = self
            .double_tremolo
            .as_mut()
            .ok_or(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line })?;

        let (slot, name) = match position {
            Some(TremoloPosition::First) => (&mut tremolo.first, "first"),
            Some(TremoloPosition::Second) => (&mut tremolo.second, "second"),
            None => return Err(StructuralError::TremoloMemberWithoutSlot { input_line }.into()),
        };
        if slot.is_some() {
            return Err(StructuralError::TremoloSlotFilledTwice { input_line, slot: name }.into());
        }
        *slot = Some(element);
        Ok(())
    }
}
