//! Context state of the MSR to BSR translator

use crate::bsr::*;
use crate::msr::{AccidentalKind, DiatonicPitch, DurationKind, NoteKind, TieKind, TremoloPosition};
use crate::translators::errors::{StructuralError, TranslationError};
use crate::translators::options::BrailleLayout;
use crate::translators::skipped::SkipReport;

use super::octave::OctaveReference;

/// What is kept of an open note until its sign is written
#[derive(Debug, Clone)]
pub(super) struct PendingNote {
    pub input_line: usize,
    pub kind: NoteKind,
    pub step: DiatonicPitch,
    pub octave: i32,
    pub duration: DurationKind,
    pub dots: u8,
    pub accidental: AccidentalKind,
    pub tie_start: bool,
    /// Written early, before a grace-after group
    pub written: bool,
}

impl PendingNote {
    pub fn of(note: &crate::msr::Note) -> Self {
        Self {
            input_line: note.input_line,
            kind: note.kind,
            step: note.pitch.step,
            octave: note.octave,
            duration: note.duration,
            dots: note.dots,
            accidental: note.accidental,
            tie_start: note.ties.contains(&TieKind::Start),
            written: false,
        }
    }
}

/// An open chord; intervals are counted from its first written member
#[derive(Debug, Default)]
pub(super) struct OpenChord {
    pub base: Option<OctaveReference>,
}

pub(super) struct BsrContext {
    pub score: BsrScore,
    pub score_visited: bool,
    pub skipped: SkipReport,
    pub layout: BrailleLayout,

    pub part_group_depth: usize,
    pub part_open: bool,
    pub staff_open: bool,
    pub voice_open: bool,
    /// Only regular voices are written out
    pub transcribing: bool,
    pub stanza_open: bool,
    pub measure: Option<BsrMeasure>,

    pub octave_reference: Option<OctaveReference>,
    pub previous_value_size: Option<NoteValueSize>,

    pub notes: Vec<PendingNote>,
    pub chords: Vec<OpenChord>,
    pub tuplet_depth: usize,
    pub grace_open: bool,
    /// Filled first and second slots of the open double tremolo
    pub double_tremolo: Option<[bool; 2]>,

    pub key_in_heading: bool,
    pub time_in_heading: bool,
    pub tempo_in_heading: bool,
    pub pending_line_break: bool,
    pub pending_page_break: bool,
}

impl BsrContext {
    pub fn new(layout: BrailleLayout) -> Self {
        Self {
            score: BsrScore::default(),
            score_visited: false,
            skipped: SkipReport::new("BSR"),
            layout,
            part_group_depth: 0,
            part_open: false,
            staff_open: false,
            voice_open: false,
            transcribing: false,
            stanza_open: false,
            measure: None,
            octave_reference: None,
            previous_value_size: None,
            notes: Vec::new(),
            chords: Vec::new(),
            tuplet_depth: 0,
            grace_open: false,
            double_tremolo: None,
            key_in_heading: false,
            time_in_heading: false,
            tempo_in_heading: false,
            pending_line_break: false,
            pending_page_break: false,
        }
    }

    /// Record an unsupported construct, with a transcriber's note
    pub fn skip(&mut self, element_type: &str, value: &str, input_line: usize, reason: &str) {
        self.skipped.add_skipped(element_type, value, input_line, reason);
        self.score
            .transcription_notes
            .append(input_line, format!("{} '{}' not transcribed: {}", element_type, value, reason));
    }

    pub fn reset_octave_reference(&mut self) {
        self.octave_reference = None;
    }

    pub fn require_measure(&self, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        if self.measure.is_none() {
            return Err(StructuralError::OutsideMeasure { element, input_line }.into());
        }
        Ok(())
    }

    pub fn require_note(&self, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        if self.notes.is_empty() {
            return Err(StructuralError::AttachmentOutsideNote { element, input_line }.into());
        }
        Ok(())
    }

    /// Append a sign to the current measure when the voice is transcribed
    pub fn push_sign(&mut self, sign: Sign, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        let measure = self
            .measure
            .as_mut()
            .ok_or(StructuralError::OutsideMeasure { element, input_line })?;
        if self.transcribing {
            measure.signs.push(sign);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pages and lines
    // ------------------------------------------------------------------

    pub fn start_first_page(&mut self, heading: Option<PageHeading>) {
        let mut page = BsrPage::new(1, self.layout.lines_per_page);
        page.heading = heading;
        page.music_heading = Some(MusicHeading::default());
        page.lines.push(BsrLine::new(1, self.layout.cells_per_line));
        self.score.pages.push(page);
    }

    fn page_mut(&mut self) -> Result<&mut BsrPage, TranslationError> {
        self.score
            .pages
            .last_mut()
            .ok_or_else(|| TranslationError::InternalError("braille score has no page".to_string()))
    }

    pub fn line_mut(&mut self) -> Result<&mut BsrLine, TranslationError> {
        self.page_mut()?
            .lines
            .last_mut()
            .ok_or_else(|| TranslationError::InternalError("braille page has no line".to_string()))
    }

    pub fn heading_mut(&mut self) -> Result<&mut MusicHeading, TranslationError> {
        let page = self
            .score
            .pages
            .first_mut()
            .ok_or_else(|| TranslationError::InternalError("braille score has no page".to_string()))?;
        Ok(page.music_heading.get_or_insert_with(MusicHeading::default))
    }

    /// Start a new line, on a new page when the current one is full
    pub fn new_line(&mut self) -> Result<(), TranslationError> {
        let cells_per_line = self.layout.cells_per_line;
        let page = self.page_mut()?;
        if page.is_full() {
            return self.new_page();
        }
        let number = page.lines.len() + 1;
        page.lines.push(BsrLine::new(number, cells_per_line));
        Ok(())
    }

    pub fn new_page(&mut self) -> Result<(), TranslationError> {
        let number = self.page_mut()?.number + 1;
        log::debug!("BSR: page {} starts", number);
        let mut page = BsrPage::new(number, self.layout.lines_per_page);
        page.lines.push(BsrLine::new(1, self.layout.cells_per_line));
        self.score.pages.push(page);
        Ok(())
    }

    /// Place a finished measure, wrapping to a new line when it does not fit.
    /// A pending break opens the next line after it, so the first note of
    /// the following measure gets an octave sign.
    pub fn place_measure(&mut self, mut measure: BsrMeasure) -> Result<(), TranslationError> {
        if !self.line_mut()?.fits(&measure) {
            self.new_line()?;
            if let Some(note) = measure.first_note_mut() {
                note.octave_sign = true;
            }
        }
        self.line_mut()?.measures.push(measure);

        if std::mem::take(&mut self.pending_page_break) {
            self.pending_line_break = false;
            self.new_page()?;
            self.reset_octave_reference();
        } else if std::mem::take(&mut self.pending_line_break) {
            self.new_line()?;
            self.reset_octave_reference();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Double tremolos
    // ------------------------------------------------------------------

    pub fn fill_tremolo_slot(
        &mut self,
        position: Option<TremoloPosition>,
        input_line: usize,
    ) -> Result<(), TranslationError> {
        let slots = self
            .double_tremolo
            .as_mut()
            .ok_or(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line })?;
        let (index, name) = match position {
            Some(TremoloPosition::First) => (0, "first"),
            Some(TremoloPosition::Second) => (1, "second"),
            None => return Err(StructuralError::TremoloMemberWithoutSlot { input_line }.into()),
        };
        if slots[index] {
            return Err(StructuralError::TremoloSlotFilledTwice { input_line, slot: name }.into());
        }
        slots[index] = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(lines_per_page: usize) -> BsrContext {
        let mut ctx = BsrContext::new(BrailleLayout {
            cells_per_line: 40,
            lines_per_page,
            page_heading: false,
        });
        ctx.start_first_page(None);
        ctx
    }

    #[test]
    fn test_full_page_starts_a_new_page() {
        let mut ctx = context(2);
        ctx.new_line().unwrap();
        assert_eq!(ctx.score.pages.len(), 1);
        ctx.new_line().unwrap();
        assert_eq!(ctx.score.pages.len(), 2);
        assert_eq!(ctx.score.pages[1].number, 2);
    }

    #[test]
    fn test_pending_line_break_applies_after_the_measure() {
        let mut ctx = context(25);
        ctx.pending_line_break = true;
        ctx.place_measure(BsrMeasure::new(3, "1")).unwrap();

        assert_eq!(ctx.score.pages[0].lines.len(), 2);
        assert_eq!(ctx.score.pages[0].lines[0].measures.len(), 1);
        assert!(!ctx.pending_line_break);
    }

    #[test]
    fn test_break_resets_the_octave_reference_when_the_line_opens() {
        let mut ctx = context(25);
        ctx.octave_reference = Some(OctaveReference::of(DiatonicPitch::C, 4));
        ctx.pending_page_break = true;
        ctx.place_measure(BsrMeasure::new(3, "1")).unwrap();

        assert_eq!(ctx.score.pages.len(), 2);
        assert!(ctx.octave_reference.is_none());
    }

    #[test]
    fn test_skip_adds_a_transcription_note() {
        let mut ctx = context(25);
        ctx.skip("clef", "percussion", 12, "no braille clef");
        assert_eq!(ctx.skipped.len(), 1);
        assert_eq!(ctx.score.transcription_notes.notes[0].input_line, 12);
    }
}
