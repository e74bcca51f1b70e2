//! MSR to BSR translator
//!
//! Walks the Score Model once and writes the braille signs of its regular
//! voices into pages, lines and measures. Harmony and figured bass voices
//! are walked for their structure only.
//!
//! # Modules
//!
//! - **context**: pages, lines, open notes and chords of one translation
//! - **octave**: the octave sign rule

mod context;
pub mod octave;

use crate::bsr::*;
use crate::msr::{self, DiatonicPitch, KeyKind, MsrNode, MsrVisitor, NoteKind, VoiceKind};
use crate::tables::braille::*;
use crate::tables::braille_values::braille_note_value;
use crate::translators::errors::{StructuralError, TranslationError};
use crate::translators::options::TranslationOptions;
use crate::translators::skipped::ConversionResult;
use crate::translators::ContextProbe;

use context::{BsrContext, OpenChord, PendingNote};
use octave::{octave_sign_needed, OctaveReference};

/// One MSR to BSR translation; build a fresh instance per score
pub struct BsrTranslator<'a> {
    options: &'a TranslationOptions,
    ctx: BsrContext,
}

impl<'a> BsrTranslator<'a> {
    pub fn new(options: &'a TranslationOptions) -> Self {
        Self {
            options,
            ctx: BsrContext::new(options.braille),
        }
    }

    pub fn finish(self) -> Result<ConversionResult<BsrScore>, TranslationError> {
        if !self.ctx.score_visited {
            return Err(TranslationError::InternalError(
                "BSR translator finished without visiting a score".to_string(),
            ));
        }
        Ok(ConversionResult {
            score: self.ctx.score,
            skipped_elements: self.ctx.skipped.into_elements(),
        })
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    fn start_score(&mut self, score: &msr::Score) {
        log::debug!("BSR: score start, {} part groups", score.part_groups.len());
        let heading = self.options.braille.page_heading.then(|| PageHeading {
            title: score.identification.display_title().map(str::to_string),
            composers: score.identification.composers.clone(),
            page_number: 1,
        });
        self.ctx.start_first_page(heading);
        self.ctx.score_visited = true;
    }

    fn end_score(&mut self) {
        if let Some(page) = self.ctx.score.pages.first_mut() {
            if page.music_heading.as_ref().map_or(false, MusicHeading::is_empty) {
                page.music_heading = None;
            }
        }
        log::info!(
            "BSR: transcribed {} measures on {} pages, {} skipped elements",
            self.ctx.score.measures().count(),
            self.ctx.score.pages.len(),
            self.ctx.skipped.len()
        );
    }

    fn start_part(&mut self, part: &msr::Part) -> Result<(), TranslationError> {
        if self.ctx.part_group_depth == 0 {
            return Err(StructuralError::PartOutsidePartGroup {
                input_line: part.input_line,
            }
            .into());
        }
        log::debug!("BSR: part start {}", part.id);
        self.ctx.part_open = true;
        self.ctx.skipped.set_part(Some(&part.id));
        Ok(())
    }

    fn start_staff(&mut self, staff: &msr::Staff) -> Result<(), TranslationError> {
        if !self.ctx.part_open {
            return Err(StructuralError::StaffOutsidePart {
                input_line: staff.input_line,
            }
            .into());
        }
        log::debug!("BSR: staff start {}", staff.number);
        self.ctx.staff_open = true;
        Ok(())
    }

    fn start_voice(&mut self, voice: &msr::Voice) -> Result<(), TranslationError> {
        if !self.ctx.staff_open {
            return Err(StructuralError::VoiceOutsideStaff {
                input_line: voice.input_line,
            }
            .into());
        }
        log::debug!("BSR: voice start {} ({})", voice.number, voice.kind);
        self.ctx.voice_open = true;
        self.ctx.transcribing = voice.kind == VoiceKind::Regular;

        if self.ctx.transcribing && !self.ctx.line_mut()?.is_empty() {
            self.ctx.new_line()?;
        }
        self.ctx.reset_octave_reference();
        self.ctx.previous_value_size = None;
        Ok(())
    }

    fn end_voice(&mut self) {
        self.ctx.voice_open = false;
        self.ctx.transcribing = false;
    }

    fn start_measure(&mut self, measure: &msr::Measure) -> Result<(), TranslationError> {
        if !self.ctx.voice_open {
            return Err(StructuralError::OutsideVoice {
                element: "measure",
                input_line: measure.input_line,
            }
            .into());
        }
        log::debug!("BSR: measure start {} (line {})", measure.number, measure.input_line);
        self.ctx.skipped.set_measure(Some(&measure.number));
        self.ctx.measure = Some(BsrMeasure::new(measure.input_line, &measure.number));
        Ok(())
    }

    fn end_measure(&mut self, measure: &msr::Measure) -> Result<(), TranslationError> {
        let finished = self.ctx.measure.take().ok_or(StructuralError::OutsideMeasure {
            element: "measure",
            input_line: measure.input_line,
        })?;
        self.ctx.skipped.set_measure(None);
        if self.ctx.transcribing {
            self.ctx.place_measure(finished)?;
        }
        Ok(())
    }

    fn require_voice(&self, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        if !self.ctx.voice_open {
            return Err(StructuralError::OutsideVoice { element, input_line }.into());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------

    fn start_note(&mut self, note: &msr::Note) -> Result<(), TranslationError> {
        let input_line = note.input_line;
        match note.kind {
            NoteKind::ChordMember | NoteKind::GraceChordMember if self.ctx.chords.is_empty() => {
                return Err(StructuralError::ChordMemberOutsideChord { input_line }.into())
            }
            NoteKind::Grace if !self.ctx.grace_open => {
                return Err(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line }.into())
            }
            NoteKind::GraceTupletMember if !self.ctx.grace_open => {
                return Err(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line }.into())
            }
            NoteKind::TupletMember | NoteKind::TupletRestMember | NoteKind::GraceTupletMember
                if self.ctx.tuplet_depth == 0 =>
            {
                return Err(StructuralError::TupletMemberOutsideTuplet { input_line }.into())
            }
            NoteKind::DoubleTremoloMember if self.ctx.double_tremolo.is_none() => {
                return Err(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line }.into())
            }
            _ => {}
        }
        self.ctx.require_measure("note", input_line)?;
        self.ctx.notes.push(PendingNote::of(note));
        Ok(())
    }

    fn end_note(&mut self, note: &msr::Note) -> Result<(), TranslationError> {
        let pending = self.ctx.notes.pop().ok_or_else(|| {
            TranslationError::InternalError(format!("note end at line {} without a start", note.input_line))
        })?;
        if note.kind == NoteKind::DoubleTremoloMember {
            self.ctx.fill_tremolo_slot(note.tremolo_position, note.input_line)?;
        }
        if !pending.written {
            self.write_note(&pending)?;
        }
        Ok(())
    }

    /// Write the open note now, so that its grace-after notes follow it
    fn write_open_note_early(&mut self) -> Result<(), TranslationError> {
        let Some(pending) = self.ctx.notes.last().filter(|pending| !pending.written).cloned() else {
            return Ok(());
        };
        self.write_note(&pending)?;
        if let Some(open) = self.ctx.notes.last_mut() {
            open.written = true;
        }
        Ok(())
    }

    fn write_note(&mut self, note: &PendingNote) -> Result<(), TranslationError> {
        if !self.ctx.transcribing || note.kind == NoteKind::Skip {
            return Ok(());
        }
        let input_line = note.input_line;
        let rest = note.kind.is_rest();

        let step = if rest { None } else { Some(note.step) };
        let Some(value) = braille_note_value(step, note.duration) else {
            self.ctx
                .skip("note", note.duration.name(), input_line, "no braille note value");
            return Ok(());
        };

        let current = OctaveReference::of(note.step, note.octave);
        let octave = if rest {
            None
        } else {
            match braille_octave_kind(note.octave) {
                Some(kind) => Some(kind),
                None => {
                    self.ctx
                        .skip("note", &note.octave.to_string(), input_line, "octave out of braille range");
                    return Ok(());
                }
            }
        };

        let accidental = match note.accidental {
            msr::AccidentalKind::None => None,
            kind => {
                let mapped = braille_accidental_kind(kind);
                if mapped.is_none() {
                    self.ctx.skip("accidental", kind.name(), input_line, "no braille accidental");
                }
                mapped
            }
        };

        // chord members after the first are intervals
        if matches!(note.kind, NoteKind::ChordMember | NoteKind::GraceChordMember) {
            if let Some(chord) = self.ctx.chords.last_mut() {
                match chord.base {
                    Some(base) => {
                        let distance = current.ordinal - base.ordinal;
                        let Some(octave) = octave else {
                            return Ok(());
                        };
                        let interval = BsrInterval {
                            input_line,
                            interval: braille_interval_kind(distance),
                            octave,
                            octave_sign: distance == 0 || distance.abs() > 7,
                            accidental,
                        };
                        return self.ctx.push_sign(Sign::Interval(interval), "note", input_line);
                    }
                    None => chord.base = Some(current),
                }
            }
        }

        let octave_sign = !rest && octave_sign_needed(self.ctx.octave_reference, current);
        if !rest {
            self.ctx.octave_reference = Some(current);
        }

        let value_size = note_value_size(note.duration);
        let value_size_sign = self.ctx.previous_value_size != Some(value_size);
        self.ctx.previous_value_size = Some(value_size);

        self.ctx.push_sign(
            Sign::Note(BsrNote {
                input_line,
                value,
                value_size,
                dots: note.dots,
                octave,
                octave_sign,
                value_size_sign,
                accidental,
                grace: note.kind.is_grace(),
                tie: note.tie_start,
            }),
            "note",
            input_line,
        )
    }

    fn start_chord(&mut self, chord: &msr::Chord) -> Result<(), TranslationError> {
        let input_line = chord.input_line;
        if !self.ctx.chords.is_empty() && !self.ctx.grace_open {
            return Err(StructuralError::NestedChord { input_line }.into());
        }
        if chord.tremolo_position.is_some() && self.ctx.double_tremolo.is_none() {
            return Err(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line }.into());
        }
        self.ctx.chords.push(OpenChord::default());
        Ok(())
    }

    fn end_chord(&mut self, chord: &msr::Chord) -> Result<(), TranslationError> {
        self.ctx.chords.pop().ok_or_else(|| {
            TranslationError::InternalError(format!("chord end at line {} without a start", chord.input_line))
        })?;
        if chord.tremolo_position.is_some() {
            self.ctx.fill_tremolo_slot(chord.tremolo_position, chord.input_line)?;
        }
        Ok(())
    }

    fn start_tuplet(&mut self, tuplet: &msr::Tuplet) -> Result<(), TranslationError> {
        self.ctx.tuplet_depth += 1;
        self.ctx.push_sign(
            Sign::TupletIndicator(BsrTupletIndicator {
                input_line: tuplet.input_line,
                actual: tuplet.actual,
            }),
            "tuplet",
            tuplet.input_line,
        )
    }

    fn end_tuplet(&mut self, tuplet: &msr::Tuplet) -> Result<(), TranslationError> {
        if self.ctx.tuplet_depth == 0 {
            return Err(StructuralError::UnbalancedTuplet {
                input_line: tuplet.input_line,
            }
            .into());
        }
        self.ctx.tuplet_depth -= 1;
        Ok(())
    }

    fn start_grace_notes_group(&mut self, group: &msr::GraceNotesGroup) -> Result<(), TranslationError> {
        let input_line = group.input_line;
        if self.ctx.grace_open {
            return Err(StructuralError::NestedGraceNotesGroup { input_line }.into());
        }
        if self.ctx.notes.is_empty() && self.ctx.chords.is_empty() {
            return Err(StructuralError::GraceNotesGroupWithoutNote { input_line }.into());
        }
        if group.kind == msr::GraceNotesGroupKind::After {
            self.write_open_note_early()?;
        }
        self.ctx.grace_open = true;
        Ok(())
    }

    fn start_double_tremolo(&mut self, tremolo: &msr::DoubleTremolo) -> Result<(), TranslationError> {
        let input_line = tremolo.input_line;
        if self.ctx.double_tremolo.is_some() {
            return Err(StructuralError::NestedDoubleTremolo { input_line }.into());
        }
        self.ctx.double_tremolo = Some([false, false]);
        if self.ctx.transcribing {
            self.ctx.skip(
                "double tremolo",
                &tremolo.marks.to_string(),
                input_line,
                "tremolo marks are not transcribed, its notes are",
            );
        }
        Ok(())
    }

    fn end_double_tremolo(&mut self, tremolo: &msr::DoubleTremolo) -> Result<(), TranslationError> {
        let input_line = tremolo.input_line;
        match self.ctx.double_tremolo.take() {
            Some([true, true]) => Ok(()),
            Some(_) => Err(StructuralError::IncompleteDoubleTremolo { input_line }.into()),
            None => Err(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line }.into()),
        }
    }

    // ------------------------------------------------------------------
    // Attributes and directions
    // ------------------------------------------------------------------

    fn visit_clef(&mut self, clef: &msr::Clef) -> Result<(), TranslationError> {
        if !self.options.include_clefs {
            return Ok(());
        }
        self.ctx.require_measure("clef", clef.input_line)?;
        match braille_clef_kind(clef.kind) {
            Some(kind) => self.ctx.push_sign(
                Sign::Clef(BsrClef {
                    input_line: clef.input_line,
                    kind,
                }),
                "clef",
                clef.input_line,
            ),
            None => {
                if self.ctx.transcribing {
                    self.ctx.skip("clef", clef.kind.name(), clef.input_line, "no braille clef");
                }
                Ok(())
            }
        }
    }

    fn visit_key(&mut self, key: &msr::Key) -> Result<(), TranslationError> {
        let input_line = key.input_line;
        self.ctx.require_measure("key", input_line)?;
        if !self.ctx.transcribing {
            return Ok(());
        }

        let (kind, count) = match &key.kind {
            KeyKind::Traditional { tonic, mode } => match braille_key(*tonic, *mode) {
                Some(mapping) => mapping,
                None => {
                    let value = format!("{}{} {}", tonic.step.name(), tonic.alteration.name(), mode.name());
                    self.ctx.skip("key", &value, input_line, "no braille key");
                    return Ok(());
                }
            },
            KeyKind::HumdrumScot { .. } => {
                self.ctx
                    .skip("key", "humdrum-scot", input_line, "custom key alterations have no braille key");
                return Ok(());
            }
        };
        let sign = BsrKey {
            input_line,
            kind,
            count,
        };

        if !self.ctx.key_in_heading {
            self.ctx.key_in_heading = true;
            self.ctx.heading_mut()?.key = Some(sign);
            return Ok(());
        }
        if sign.uses_number_sign() {
            self.ctx.reset_octave_reference();
        }
        self.ctx.push_sign(Sign::Key(sign), "key", input_line)
    }

    fn visit_time(&mut self, time: &msr::Time) -> Result<(), TranslationError> {
        let input_line = time.input_line;
        self.ctx.require_measure("time", input_line)?;
        if !self.ctx.transcribing {
            return Ok(());
        }

        let Some(kind) = braille_time_kind(time.symbol) else {
            self.ctx.skip("time", time.symbol.name(), input_line, "no braille time signature");
            return Ok(());
        };
        let sign = BsrTime {
            input_line,
            kind,
            items: time.items.clone(),
        };

        if !self.ctx.time_in_heading {
            self.ctx.time_in_heading = true;
            self.ctx.heading_mut()?.time = Some(sign);
            return Ok(());
        }
        if sign.uses_number_sign() {
            self.ctx.reset_octave_reference();
        }
        self.ctx.push_sign(Sign::Time(sign), "time", input_line)
    }

    fn visit_barline(&mut self, barline: &msr::Barline) -> Result<(), TranslationError> {
        let input_line = barline.input_line;
        self.ctx.require_measure("barline", input_line)?;
        match braille_barline(barline.style, barline.category) {
            Some(BarlineMapping::Sign(kind)) => {
                self.ctx
                    .push_sign(Sign::Barline(BsrBarline { input_line, kind }), "barline", input_line)
            }
            Some(BarlineMapping::Implicit) => Ok(()),
            None => {
                if self.ctx.transcribing {
                    self.ctx.skip("barline", barline.style.name(), input_line, "no braille barline");
                }
                Ok(())
            }
        }
    }

    fn visit_tempo(&mut self, tempo: &msr::Tempo) -> Result<(), TranslationError> {
        let input_line = tempo.input_line;
        self.ctx.require_measure("tempo", input_line)?;
        if self.options.no_tempos || !self.ctx.transcribing {
            return Ok(());
        }

        if self.options.convert_tempos_to_rehearsal_marks {
            let text = match (&tempo.words, &tempo.per_minute) {
                (Some(words), _) => words.clone(),
                (None, Some(per_minute)) => per_minute.clone(),
                (None, None) => tempo.kind.name().to_string(),
            };
            return self.push_words(text, "tempo", input_line);
        }

        let (beat_unit, dots) = match tempo.beat_unit {
            Some(unit) => match braille_note_value(Some(DiatonicPitch::C), unit.duration) {
                Some(value) => (Some(value), unit.dots),
                None => {
                    self.ctx
                        .skip("tempo beat unit", unit.duration.name(), input_line, "no braille note value");
                    (None, 0)
                }
            },
            None => (None, 0),
        };
        let sign = BsrTempo {
            input_line,
            words: tempo.words.clone(),
            beat_unit,
            dots,
            per_minute: tempo.per_minute.clone(),
        };

        if !self.ctx.tempo_in_heading {
            self.ctx.tempo_in_heading = true;
            self.ctx.heading_mut()?.tempo = Some(sign);
            return Ok(());
        }
        self.ctx.reset_octave_reference();
        self.ctx.push_sign(Sign::Tempo(sign), "tempo", input_line)
    }

    /// Words interrupt the music, the next note needs an octave sign
    fn push_words(&mut self, text: String, element: &'static str, input_line: usize) -> Result<(), TranslationError> {
        self.ctx.reset_octave_reference();
        self.ctx
            .push_sign(Sign::Words(BsrWords { input_line, text }), element, input_line)
    }

    fn visit_dynamics(&mut self, dynamics: &msr::Dynamics) -> Result<(), TranslationError> {
        let input_line = dynamics.input_line;
        self.ctx.require_note("dynamics", input_line)?;
        match braille_dynamics_kind(dynamics.kind) {
            Some(kind) => self
                .ctx
                .push_sign(Sign::Dynamics(BsrDynamics { input_line, kind }), "dynamics", input_line),
            None => {
                if self.ctx.transcribing {
                    self.ctx.skip("dynamics", dynamics.kind.name(), input_line, "no braille dynamics");
                }
                Ok(())
            }
        }
    }

    fn visit_syllable(&mut self, syllable: &msr::Syllable) -> Result<(), TranslationError> {
        if self.ctx.stanza_open || !self.ctx.notes.is_empty() {
            return Ok(());
        }
        Err(StructuralError::SyllableOutsideVoice {
            input_line: syllable.input_line,
        }
        .into())
    }
}

impl MsrVisitor for BsrTranslator<'_> {
    fn visit_start(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        match node {
            MsrNode::Score(score) => {
                self.start_score(score);
                Ok(())
            }
            MsrNode::PartGroup(_) => {
                self.ctx.part_group_depth += 1;
                Ok(())
            }
            MsrNode::Part(part) => self.start_part(part),
            MsrNode::Staff(staff) => self.start_staff(staff),
            MsrNode::StaffTuning(_) | MsrNode::Segment(_) => Ok(()),
            MsrNode::Voice(voice) => self.start_voice(voice),
            MsrNode::Repeat(repeat) => self.require_voice("repeat", repeat.input_line),
            MsrNode::RepeatCommonPart(common) => self.require_voice("repeat common part", common.input_line),
            MsrNode::RepeatEnding { ending, .. } => self.require_voice("repeat ending", ending.input_line),
            MsrNode::Measure(measure) => self.start_measure(measure),
            MsrNode::Clef(clef) => self.visit_clef(clef),
            MsrNode::Key(key) => self.visit_key(key),
            MsrNode::Time(time) => self.visit_time(time),
            MsrNode::Note(note) => self.start_note(note),
            MsrNode::Chord(chord) => self.start_chord(chord),
            MsrNode::Tuplet(tuplet) => self.start_tuplet(tuplet),
            MsrNode::GraceNotesGroup(group) => self.start_grace_notes_group(group),
            MsrNode::DoubleTremolo(tremolo) => self.start_double_tremolo(tremolo),
            MsrNode::Barline(barline) => self.visit_barline(barline),
            MsrNode::Tempo(tempo) => self.visit_tempo(tempo),
            MsrNode::RehearsalMark(mark) => {
                self.ctx.require_measure("rehearsal mark", mark.input_line)?;
                self.push_words(mark.text.clone(), "rehearsal mark", mark.input_line)
            }
            MsrNode::LineBreak(line_break) => {
                self.ctx.require_measure("line break", line_break.input_line)?;
                if self.ctx.transcribing {
                    self.ctx.pending_line_break = true;
                }
                Ok(())
            }
            MsrNode::PageBreak(page_break) => {
                self.ctx.require_measure("page break", page_break.input_line)?;
                if self.ctx.transcribing {
                    self.ctx.pending_page_break = true;
                }
                Ok(())
            }
            MsrNode::Harmony(harmony) => {
                if !self.ctx.voice_open {
                    return Err(StructuralError::HarmonyOutsideVoice {
                        input_line: harmony.input_line,
                    }
                    .into());
                }
                Ok(())
            }
            MsrNode::FiguredBass(figured_bass) => {
                if !self.ctx.voice_open {
                    return Err(StructuralError::FiguredBassOutsideVoice {
                        input_line: figured_bass.input_line,
                    }
                    .into());
                }
                Ok(())
            }
            MsrNode::Dynamics(dynamics) => self.visit_dynamics(dynamics),
            MsrNode::OtherDynamics(other) => {
                self.ctx.require_note("other dynamics", other.input_line)?;
                self.push_words(other.text.clone(), "other dynamics", other.input_line)
            }
            MsrNode::Words(words) => {
                self.ctx.require_note("words", words.input_line)?;
                self.push_words(words.text.clone(), "words", words.input_line)
            }
            MsrNode::Articulation(articulation) => self.ctx.require_note("articulation", articulation.input_line),
            MsrNode::Technical(technical) => self.ctx.require_note("technical", technical.input_line),
            MsrNode::Ornament(ornament) => self.ctx.require_note("ornament", ornament.input_line),
            MsrNode::Wedge(wedge) => self.ctx.require_note("wedge", wedge.input_line),
            MsrNode::Glissando(glissando) => self.ctx.require_note("glissando", glissando.input_line),
            MsrNode::Stanza(stanza) => {
                if !self.ctx.voice_open {
                    return Err(StructuralError::StanzaOutsideVoice {
                        input_line: stanza.input_line,
                    }
                    .into());
                }
                self.ctx.stanza_open = true;
                Ok(())
            }
            MsrNode::Syllable(syllable) => self.visit_syllable(syllable),
        }
    }

    fn visit_end(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        match node {
            MsrNode::Score(_) => {
                self.end_score();
                Ok(())
            }
            MsrNode::PartGroup(_) => {
                self.ctx.part_group_depth = self.ctx.part_group_depth.saturating_sub(1);
                Ok(())
            }
            MsrNode::Part(_) => {
                self.ctx.part_open = false;
                self.ctx.skipped.set_part(None);
                Ok(())
            }
            MsrNode::Staff(_) => {
                self.ctx.staff_open = false;
                Ok(())
            }
            MsrNode::Voice(_) => {
                self.end_voice();
                Ok(())
            }
            MsrNode::Measure(measure) => self.end_measure(measure),
            MsrNode::Note(note) => self.end_note(note),
            MsrNode::Chord(chord) => self.end_chord(chord),
            MsrNode::Tuplet(tuplet) => self.end_tuplet(tuplet),
            MsrNode::GraceNotesGroup(_) => {
                self.ctx.grace_open = false;
                Ok(())
            }
            MsrNode::DoubleTremolo(tremolo) => self.end_double_tremolo(tremolo),
            MsrNode::Stanza(_) => {
                self.ctx.stanza_open = false;
                Ok(())
            }
            MsrNode::StaffTuning(_)
            | MsrNode::Segment(_)
            | MsrNode::Repeat(_)
            | MsrNode::RepeatCommonPart(_)
            | MsrNode::RepeatEnding { .. }
            | MsrNode::Clef(_)
            | MsrNode::Key(_)
            | MsrNode::Time(_)
            | MsrNode::Barline(_)
            | MsrNode::Tempo(_)
            | MsrNode::RehearsalMark(_)
            | MsrNode::LineBreak(_)
            | MsrNode::PageBreak(_)
            | MsrNode::Harmony(_)
            | MsrNode::FiguredBass(_)
            | MsrNode::Articulation(_)
            | MsrNode::Technical(_)
            | MsrNode::Ornament(_)
            | MsrNode::Dynamics(_)
            | MsrNode::OtherDynamics(_)
            | MsrNode::Words(_)
            | MsrNode::Wedge(_)
            | MsrNode::Glissando(_)
            | MsrNode::Syllable(_) => Ok(()),
        }
    }
}

impl ContextProbe for BsrTranslator<'_> {
    fn tuplet_depth(&self) -> usize {
        self.ctx.tuplet_depth
    }

    fn chord_open(&self) -> bool {
        !self.ctx.chords.is_empty()
    }

    fn grace_notes_group_open(&self) -> bool {
        self.ctx.grace_open
    }

    fn double_tremolo_open(&self) -> bool {
        self.ctx.double_tremolo.is_some()
    }

    fn note_depth(&self) -> usize {
        self.ctx.notes.len()
    }
}
