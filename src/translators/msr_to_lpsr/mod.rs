//! MSR to LPSR translator
//!
//! Walks the Score Model once and builds the LilyPond Score Representation:
//! a cloned part group tree holding the music, plus the book blocks the
//! renderer lays it out with.
//!
//! # Modules
//!
//! - **context**: the open elements and bookkeeping of one translation
//! - **notes**: notes, chords, tuplets, grace notes, tremolos, attachments
//! - **blocks**: book block assembly per score output kind

mod blocks;
mod context;
mod notes;

use crate::lpsr::*;
use crate::msr::{self, BarlineCategory, KeyKind, MsrNode, MsrVisitor, StaffKind, VoiceKind};
use crate::tables::lilypond::*;
use crate::translators::errors::{StructuralError, TranslationError};
use crate::translators::options::TranslationOptions;
use crate::translators::skipped::ConversionResult;
use crate::translators::ContextProbe;

use context::LpsrContext;

/// One MSR to LPSR translation; build a fresh instance per score
pub struct LpsrTranslator<'a> {
    options: &'a TranslationOptions,
    ctx: LpsrContext,
}

impl<'a> LpsrTranslator<'a> {
    pub fn new(options: &'a TranslationOptions) -> Self {
        Self {
            options,
            ctx: LpsrContext::new(),
        }
    }

    /// Hand over the finished score and the skip report
    pub fn finish(self) -> Result<ConversionResult<LpsrScore>, TranslationError> {
        if !self.ctx.score_visited {
            return Err(TranslationError::InternalError(
                "LPSR translator finished without visiting a score".to_string(),
            ));
        }
        Ok(ConversionResult {
            score: self.ctx.score,
            skipped_elements: self.ctx.skipped.into_elements(),
        })
    }

    // ------------------------------------------------------------------
    // Score and part groups
    // ------------------------------------------------------------------

    fn start_score(&mut self, score: &msr::Score) {
        log::debug!("LPSR: score start, {} part groups", score.part_groups.len());
        self.ctx.score = LpsrScore::new(
            LpsrHeader::from_identification(&score.identification),
            LpsrPaper::from_scaling(score.scaling.as_ref()),
            LpsrLayout::from_scaling(score.scaling.as_ref()),
        );
        self.ctx.score_visited = true;
    }

    fn end_score(&mut self) {
        let part_groups = std::mem::take(&mut self.ctx.finished_group_blocks);
        self.ctx.score.book_blocks =
            blocks::assemble_book_blocks(self.options.score_output_kind, &part_groups);

        let parts = self.ctx.score.parts().len();
        let measures: usize = self
            .ctx
            .score
            .voices()
            .iter()
            .map(|voice| voice.measures().len())
            .sum();
        log::info!(
            "LPSR: translated {} parts, {} measures, {} skipped elements",
            parts,
            measures,
            self.ctx.skipped.len()
        );
    }

    fn start_part_group(&mut self, group: &msr::PartGroup) {
        log::debug!("LPSR: part group start {}", group.combined_name());
        self.ctx.part_groups.push(LpsrPartGroup {
            input_line: group.input_line,
            number: group.number,
            combined_name: group.combined_name(),
            name: group.name.clone(),
            abbreviation: group.abbreviation.clone(),
            symbol: group.symbol,
            barline: group.barline,
            elements: Vec::new(),
        });
        self.ctx.part_group_blocks.push(PartGroupBlock {
            name: group.combined_name(),
            context: lilypond_group_context(group.symbol, group.barline),
            elements: Vec::new(),
        });
    }

    fn end_part_group(&mut self, group: &msr::PartGroup) -> Result<(), TranslationError> {
        log::debug!("LPSR: part group end {}", group.combined_name());
        let (clone, block) = match (self.ctx.part_groups.pop(), self.ctx.part_group_blocks.pop()) {
            (Some(clone), Some(block)) => (clone, block),
            _ => {
                return Err(TranslationError::InternalError(format!(
                    "part group end at line {} without a start",
                    group.input_line
                )))
            }
        };

        match (self.ctx.part_groups.last_mut(), self.ctx.part_group_blocks.last_mut()) {
            (Some(parent), Some(parent_block)) => {
                parent.elements.push(LpsrPartGroupElement::PartGroup(clone));
                parent_block.elements.push(PartGroupBlockElement::PartGroup(block));
            }
            _ => {
                self.ctx.score.part_groups.push(clone);
                self.ctx.finished_group_blocks.push(block);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Parts, staves, voices
    // ------------------------------------------------------------------

    fn start_part(&mut self, part: &msr::Part) -> Result<(), TranslationError> {
        if self.ctx.part_groups.is_empty() {
            return Err(StructuralError::PartOutsidePartGroup {
                input_line: part.input_line,
            }
            .into());
        }
        log::debug!("LPSR: part start {}", part.id);

        self.ctx.skipped.set_part(Some(&part.id));
        self.ctx.skip_groups.clear();
        self.ctx.part = Some(LpsrPart {
            input_line: part.input_line,
            id: part.id.clone(),
            name: part.name.clone(),
            abbreviation: part.abbreviation.clone(),
            instrument_name: part.instrument_name.clone(),
            staves: Vec::new(),
        });
        self.ctx.part_block = Some(PartBlock {
            part_id: part.id.clone(),
            part_name: part.name.clone(),
            context: None,
            elements: Vec::new(),
        });
        Ok(())
    }

    fn end_part(&mut self, part: &msr::Part) -> Result<(), TranslationError> {
        log::debug!("LPSR: part end {}", part.id);
        let missing = || TranslationError::InternalError(format!("part end at line {} without a start", part.input_line));
        let mut clone = self.ctx.part.take().ok_or_else(missing)?;
        let mut block = self.ctx.part_block.take().ok_or_else(missing)?;

        // keep the other voices aligned with a first note's grace notes
        for (owner, group) in std::mem::take(&mut self.ctx.skip_groups) {
            for voice in clone.staves.iter_mut().flat_map(|staff| staff.voices.iter_mut()) {
                if voice.name == owner || voice.kind != VoiceKind::Regular {
                    continue;
                }
                let prepended = match voice.first_measure_mut() {
                    Some(measure) => {
                        measure.elements.insert(0, Music::GraceNotes(group.clone()));
                        true
                    }
                    None => false,
                };
                if prepended {
                    log::debug!("LPSR: grace skip group prepended to {}", voice.name);
                }
            }
        }

        if block.staff_blocks().count() > 1 {
            block.context = Some(LilypondGroupContext::PianoStaff);
        }

        match (self.ctx.part_groups.last_mut(), self.ctx.part_group_blocks.last_mut()) {
            (Some(group), Some(group_block)) => {
                group.elements.push(LpsrPartGroupElement::Part(clone));
                group_block.elements.push(PartGroupBlockElement::Part(block));
            }
            _ => {
                return Err(StructuralError::PartOutsidePartGroup {
                    input_line: part.input_line,
                }
                .into())
            }
        }
        self.ctx.skipped.set_part(None);
        Ok(())
    }

    fn start_staff(&mut self, staff: &msr::Staff) -> Result<(), TranslationError> {
        let part = self.ctx.part.as_ref().ok_or(StructuralError::StaffOutsidePart {
            input_line: staff.input_line,
        })?;
        let name = format!("Part_{}_Staff_{}", sanitize_name(&part.id), staff.number);
        log::debug!("LPSR: staff start {}", name);

        let context = lilypond_staff_context(staff.kind);
        self.ctx.staff_block = match staff.kind {
            StaffKind::Harmony | StaffKind::FiguredBass => None,
            _ => Some(StaffBlock {
                staff_name: name.clone(),
                context,
                instrument_name: part.name.clone(),
                short_instrument_name: part.abbreviation.clone(),
                voice_names: Vec::new(),
                lyrics: Vec::new(),
            }),
        };
        self.ctx.staff = Some(LpsrStaff {
            input_line: staff.input_line,
            name,
            number: staff.number,
            kind: staff.kind,
            context,
            tunings: Vec::new(),
            voices: Vec::new(),
        });
        Ok(())
    }

    fn end_staff(&mut self, staff: &msr::Staff) -> Result<(), TranslationError> {
        let clone = self.ctx.staff.take().ok_or_else(|| {
            TranslationError::InternalError(format!("staff end at line {} without a start", staff.input_line))
        })?;
        log::debug!("LPSR: staff end {}", clone.name);

        let regular_voices = clone
            .voices
            .iter()
            .filter(|voice| voice.kind == VoiceKind::Regular)
            .count();
        if regular_voices > 1 {
            self.ctx.set_feature(ScoreFeature::MergeRests);
        }

        if let Some(block) = self.ctx.staff_block.take() {
            if let Some(part_block) = self.ctx.part_block.as_mut() {
                part_block.elements.push(PartBlockElement::Staff(block));
            }
        }
        let part = self.ctx.part.as_mut().ok_or(StructuralError::StaffOutsidePart {
            input_line: staff.input_line,
        })?;
        part.staves.push(clone);
        Ok(())
    }

    fn start_voice(&mut self, voice: &msr::Voice) -> Result<(), TranslationError> {
        let staff = self.ctx.staff.as_ref().ok_or(StructuralError::VoiceOutsideStaff {
            input_line: voice.input_line,
        })?;
        let part_id = self.ctx.part.as_ref().map(|part| part.id.as_str()).unwrap_or_default();
        let clone = LpsrVoice::new(
            voice.input_line,
            part_id,
            staff.number,
            voice.number,
            voice.kind,
            lilypond_voice_context(voice.kind, staff.kind),
        );
        log::debug!("LPSR: voice start {}", clone.name);

        self.ctx.voice = Some(clone);
        self.ctx.voice_note_count = 0;
        self.ctx.pending_start_repeat_barline = false;
        Ok(())
    }

    fn end_voice(&mut self, voice: &msr::Voice) -> Result<(), TranslationError> {
        self.ctx.flush_rest_measures()?;
        let clone = self.ctx.voice.take().ok_or_else(|| {
            TranslationError::InternalError(format!("voice end at line {} without a start", voice.input_line))
        })?;
        log::debug!("LPSR: voice end {}", clone.name);

        match clone.kind {
            VoiceKind::Regular => {
                if let Some(block) = self.ctx.staff_block.as_mut() {
                    block.voice_names.push(clone.name.clone());
                    for stanza in &clone.stanzas {
                        block.lyrics.push(LyricsReference {
                            voice_name: clone.name.clone(),
                            lyrics_name: stanza.lyrics_name.clone(),
                        });
                    }
                }
            }
            VoiceKind::Harmony => {
                if let Some(part_block) = self.ctx.part_block.as_mut() {
                    part_block.elements.push(PartBlockElement::ChordNames {
                        voice_name: clone.name.clone(),
                    });
                }
            }
            VoiceKind::FiguredBass => {
                if let Some(part_block) = self.ctx.part_block.as_mut() {
                    part_block.elements.push(PartBlockElement::FiguredBass {
                        voice_name: clone.name.clone(),
                    });
                }
            }
        }

        let staff = self.ctx.staff.as_mut().ok_or(StructuralError::VoiceOutsideStaff {
            input_line: voice.input_line,
        })?;
        staff.voices.push(clone);
        Ok(())
    }

    fn start_stanza(&mut self, stanza: &msr::Stanza) -> Result<(), TranslationError> {
        let voice = self.ctx.voice.as_ref().ok_or(StructuralError::StanzaOutsideVoice {
            input_line: stanza.input_line,
        })?;
        self.ctx.stanza = Some(LpsrStanza::new(
            stanza.input_line,
            &voice.name,
            &stanza.number,
            stanza.name.clone(),
        ));
        Ok(())
    }

    fn end_stanza(&mut self, stanza: &msr::Stanza) -> Result<(), TranslationError> {
        let clone = self.ctx.stanza.take().ok_or(StructuralError::StanzaOutsideVoice {
            input_line: stanza.input_line,
        })?;
        let voice = self.ctx.voice.as_mut().ok_or(StructuralError::StanzaOutsideVoice {
            input_line: stanza.input_line,
        })?;
        voice.stanzas.push(clone);
        Ok(())
    }

    fn visit_syllable(&mut self, syllable: &msr::Syllable) -> Result<(), TranslationError> {
        if let Some(stanza) = self.ctx.stanza.as_mut() {
            stanza.append_syllable(
                syllable.input_line,
                lilypond_lyric_kind(syllable.kind),
                syllable.text(),
                syllable.extend,
            );
            return Ok(());
        }

        if let Some(note) = self.ctx.notes.last_mut() {
            if self.options.add_words_from_lyrics {
                note.words.push(LpsrWords {
                    text: syllable.text(),
                    placement: msr::Placement::Below,
                });
            }
            return Ok(());
        }

        Err(StructuralError::SyllableOutsideVoice {
            input_line: syllable.input_line,
        }
        .into())
    }

    // ------------------------------------------------------------------
    // Repeats
    // ------------------------------------------------------------------

    fn start_repeat(&mut self, repeat: &msr::Repeat) -> Result<(), TranslationError> {
        self.ctx.flush_rest_measures()?;
        self.ctx.voice_mut("repeat", repeat.input_line)?.handle_repeat_start(repeat.input_line);
        if repeat.implicit_start && self.options.create_implicit_initial_repeat_barline {
            self.ctx.pending_start_repeat_barline = true;
        }
        Ok(())
    }

    fn end_repeat(&mut self, repeat: &msr::Repeat) -> Result<(), TranslationError> {
        self.ctx.flush_rest_measures()?;
        self.ctx
            .voice_mut("repeat", repeat.input_line)?
            .handle_repeat_end(repeat.input_line, repeat.times)
    }

    fn visit_repeat_common_part(
        &mut self,
        common: &msr::RepeatCommonPart,
        start: bool,
    ) -> Result<(), TranslationError> {
        self.ctx.flush_rest_measures()?;
        let voice = self.ctx.voice_mut("repeat common part", common.input_line)?;
        if start {
            voice.handle_repeat_common_part_start(common.input_line)
        } else {
            voice.handle_repeat_common_part_end(common.input_line)
        }
    }

    fn visit_repeat_ending(
        &mut self,
        ending: &msr::RepeatEnding,
        last_in_sequence: bool,
        start: bool,
    ) -> Result<(), TranslationError> {
        self.ctx.flush_rest_measures()?;
        let voice = self.ctx.voice_mut("repeat ending", ending.input_line)?;
        if start {
            voice.handle_repeat_ending_start(ending.input_line, &ending.number, ending.kind, last_in_sequence)
        } else {
            voice.handle_repeat_ending_end(ending.input_line)
        }
    }

    // ------------------------------------------------------------------
    // Measures
    // ------------------------------------------------------------------

    fn start_measure(&mut self, measure: &msr::Measure) -> Result<(), TranslationError> {
        self.ctx.voice_mut("measure", measure.input_line)?;
        log::debug!("LPSR: measure start {} (line {})", measure.number, measure.input_line);

        let mut clone = LpsrMeasure {
            input_line: measure.input_line,
            number: measure.number.clone(),
            purist_number: measure.purist_number,
            kind: measure.kind,
            full_length: measure.full_length,
            elements: Vec::new(),
        };
        if std::mem::take(&mut self.ctx.pending_start_repeat_barline) {
            clone.elements.push(Music::Barline(LpsrBarline {
                input_line: measure.input_line,
                bar_type: LilypondBarType::StartRepeat,
            }));
        }
        self.ctx.skipped.set_measure(Some(&measure.number));
        self.ctx.measure = Some(clone);
        Ok(())
    }

    fn end_measure(&mut self, measure: &msr::Measure) -> Result<(), TranslationError> {
        let mut clone = self.ctx.measure.take().ok_or(StructuralError::OutsideMeasure {
            element: "measure",
            input_line: measure.input_line,
        })?;

        if self.options.insert_bar_checks {
            clone.elements.push(Music::BarCheck(LpsrBarCheck {
                input_line: measure.input_line,
                next_measure_number: (measure.purist_number + 1).to_string(),
            }));
        }

        if self.options.compress_full_measure_rests && clone.is_full_measure_rest() {
            self.ctx.pending_rest_measures.push(clone);
        } else {
            self.ctx.flush_rest_measures()?;
            self.ctx.voice_mut("measure", measure.input_line)?.append_measure(clone);
        }
        self.ctx.skipped.set_measure(None);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Attributes and directions
    // ------------------------------------------------------------------

    fn visit_clef(&mut self, clef: &msr::Clef) -> Result<(), TranslationError> {
        if !self.options.include_clefs {
            return Ok(());
        }
        self.ctx.measure_mut("clef", clef.input_line)?;

        match lilypond_clef(clef.kind) {
            Some((kind, tablature_lines)) => {
                if let Some(feature) = clef_feature(kind) {
                    self.ctx.set_feature(feature);
                }
                self.ctx.append_to_measure(
                    Music::Clef(LpsrClef {
                        input_line: clef.input_line,
                        kind,
                        tablature_lines,
                    }),
                    "clef",
                    clef.input_line,
                )
            }
            None => {
                self.ctx.skip("clef", clef.kind.name(), clef.input_line, "no LilyPond clef");
                Ok(())
            }
        }
    }

    fn visit_key(&mut self, key: &msr::Key) -> Result<(), TranslationError> {
        self.ctx.measure_mut("key", key.input_line)?;

        let kind = match &key.kind {
            KeyKind::Traditional { tonic, mode } => {
                if !lilypond_supports_alteration(tonic.alteration) {
                    self.ctx.skip(
                        "key",
                        tonic.alteration.name(),
                        key.input_line,
                        "LilyPond has no triple alterations",
                    );
                    return Ok(());
                }
                LpsrKeyKind::Traditional {
                    tonic: *tonic,
                    mode: lilypond_key_mode(*mode),
                }
            }
            KeyKind::HumdrumScot { items } => {
                if let Some(item) = items.iter().find(|item| !lilypond_supports_alteration(item.alteration)) {
                    self.ctx.skip(
                        "key",
                        item.alteration.name(),
                        key.input_line,
                        "LilyPond has no triple alterations",
                    );
                    return Ok(());
                }
                self.ctx.set_feature(ScoreFeature::CustomKeyAlterations);
                LpsrKeyKind::Custom {
                    alterations: items.clone(),
                }
            }
        };

        self.ctx.append_to_measure(
            Music::Key(LpsrKey {
                input_line: key.input_line,
                kind,
            }),
            "key",
            key.input_line,
        )
    }

    fn visit_time(&mut self, time: &msr::Time) -> Result<(), TranslationError> {
        self.ctx.measure_mut("time", time.input_line)?;

        match lilypond_time_style(time.symbol) {
            Some(style) => self.ctx.append_to_measure(
                Music::Time(LpsrTime {
                    input_line: time.input_line,
                    style,
                    items: time.items.clone(),
                }),
                "time",
                time.input_line,
            ),
            None => {
                self.ctx.skip("time", time.symbol.name(), time.input_line, "no LilyPond time style");
                Ok(())
            }
        }
    }

    fn visit_barline(&mut self, barline: &msr::Barline) -> Result<(), TranslationError> {
        self.ctx.measure_mut("barline", barline.input_line)?;

        // repeat and ending barlines come back as repeat events
        if barline.category != BarlineCategory::Standalone {
            return Ok(());
        }

        let (bar_type, feature) = lilypond_bar_type(barline.style);
        if let Some(feature) = feature {
            self.ctx.set_feature(feature);
        }
        self.ctx.append_to_measure(
            Music::Barline(LpsrBarline {
                input_line: barline.input_line,
                bar_type,
            }),
            "barline",
            barline.input_line,
        )
    }

    fn visit_tempo(&mut self, tempo: &msr::Tempo) -> Result<(), TranslationError> {
        self.ctx.measure_mut("tempo", tempo.input_line)?;
        if self.options.no_tempos {
            return Ok(());
        }

        if self.options.convert_tempos_to_rehearsal_marks {
            let text = match (&tempo.words, &tempo.beat_unit, &tempo.per_minute) {
                (Some(words), _, _) => words.clone(),
                (None, Some(unit), Some(per_minute)) => {
                    format!("{} = {}", lilypond_duration(unit.duration, unit.dots).to_lilypond(), per_minute)
                }
                _ => tempo.kind.name().to_string(),
            };
            return self.ctx.append_to_measure(
                Music::RehearsalMark(LpsrRehearsalMark {
                    input_line: tempo.input_line,
                    text,
                    enclosure: msr::RehearsalEnclosure::None,
                }),
                "tempo",
                tempo.input_line,
            );
        }

        let (kind, feature) = lilypond_tempo_kind(tempo.kind);
        if let Some(feature) = feature {
            self.ctx.set_feature(feature);
        }
        self.ctx.append_to_measure(
            Music::Tempo(LpsrTempo {
                input_line: tempo.input_line,
                kind,
                words: tempo.words.clone(),
                beat_unit: tempo.beat_unit.map(|unit| lilypond_duration(unit.duration, unit.dots)),
                per_minute: tempo.per_minute.clone(),
                equivalent_beat_unit: tempo
                    .equivalent_beat_unit
                    .map(|unit| lilypond_duration(unit.duration, unit.dots)),
                parentheses: tempo.parentheses,
                placement: tempo.placement,
            }),
            "tempo",
            tempo.input_line,
        )
    }

    fn visit_harmony(&mut self, harmony: &msr::Harmony) -> Result<(), TranslationError> {
        if self.ctx.voice.is_none() {
            return Err(StructuralError::HarmonyOutsideVoice {
                input_line: harmony.input_line,
            }
            .into());
        }
        self.ctx.measure_mut("harmony", harmony.input_line)?;

        match lilypond_chord_modifier(harmony.kind) {
            Some(modifier) => self.ctx.append_to_measure(
                Music::Harmony(LpsrHarmony {
                    input_line: harmony.input_line,
                    root: harmony.root,
                    modifier,
                    bass: harmony.bass,
                    inversion: harmony.inversion,
                    sounding: harmony.sounding,
                }),
                "harmony",
                harmony.input_line,
            ),
            None => {
                self.ctx
                    .skip("harmony", harmony.kind.name(), harmony.input_line, "no LilyPond chord modifier");
                Ok(())
            }
        }
    }

    fn visit_figured_bass(&mut self, figured_bass: &msr::FiguredBass) -> Result<(), TranslationError> {
        if self.ctx.voice.is_none() {
            return Err(StructuralError::FiguredBassOutsideVoice {
                input_line: figured_bass.input_line,
            }
            .into());
        }
        self.ctx.measure_mut("figured bass", figured_bass.input_line)?;

        let mut figures = Vec::with_capacity(figured_bass.figures.len());
        for figure in &figured_bass.figures {
            let prefix = self.figure_affix(figure.prefix, figured_bass.input_line);
            let suffix = self.figure_affix(figure.suffix, figured_bass.input_line);
            figures.push(LpsrFigure {
                prefix,
                number: figure.number,
                suffix,
            });
        }

        self.ctx.append_to_measure(
            Music::FiguredBass(LpsrFiguredBass {
                input_line: figured_bass.input_line,
                parentheses: figured_bass.parentheses,
                figures,
                sounding: figured_bass.sounding,
            }),
            "figured bass",
            figured_bass.input_line,
        )
    }

    fn figure_affix(&mut self, affix: Option<msr::AccidentalKind>, input_line: usize) -> Option<LilypondFigureAffix> {
        let affix = affix?;
        let mapped = lilypond_figure_affix(affix);
        if mapped.is_none() {
            self.ctx.skip("figure affix", affix.name(), input_line, "no figured bass alteration");
        }
        mapped
    }
}

impl MsrVisitor for LpsrTranslator<'_> {
    fn visit_start(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        match node {
            MsrNode::Score(score) => {
                self.start_score(score);
                Ok(())
            }
            MsrNode::PartGroup(group) => {
                self.start_part_group(group);
                Ok(())
            }
            MsrNode::Part(part) => self.start_part(part),
            MsrNode::Staff(staff) => self.start_staff(staff),
            MsrNode::StaffTuning(tuning) => {
                let staff = self.ctx.staff.as_mut().ok_or(StructuralError::StaffOutsidePart {
                    input_line: tuning.input_line,
                })?;
                staff.tunings.push(*tuning);
                Ok(())
            }
            MsrNode::Voice(voice) => self.start_voice(voice),
            MsrNode::Segment(_) => Ok(()),
            MsrNode::Repeat(repeat) => self.start_repeat(repeat),
            MsrNode::RepeatCommonPart(common) => self.visit_repeat_common_part(common, true),
            MsrNode::RepeatEnding {
                ending,
                last_in_sequence,
            } => self.visit_repeat_ending(ending, last_in_sequence, true),
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
            MsrNode::RehearsalMark(mark) => self.ctx.append_to_measure(
                Music::RehearsalMark(LpsrRehearsalMark {
                    input_line: mark.input_line,
                    text: mark.text.clone(),
                    enclosure: mark.enclosure,
                }),
                "rehearsal mark",
                mark.input_line,
            ),
            MsrNode::LineBreak(line_break) => self.ctx.append_to_measure(
                Music::LineBreak(LpsrLineBreak {
                    input_line: line_break.input_line,
                    next_bar_number: line_break.next_bar_number.clone(),
                }),
                "line break",
                line_break.input_line,
            ),
            MsrNode::PageBreak(page_break) => self.ctx.append_to_measure(
                Music::PageBreak(LpsrPageBreak {
                    input_line: page_break.input_line,
                }),
                "page break",
                page_break.input_line,
            ),
            MsrNode::Harmony(harmony) => self.visit_harmony(harmony),
            MsrNode::FiguredBass(figured_bass) => self.visit_figured_bass(figured_bass),
            MsrNode::Articulation(articulation) => self.visit_articulation(articulation),
            MsrNode::Technical(technical) => self.visit_technical(technical),
            MsrNode::Ornament(ornament) => self.visit_ornament(ornament),
            MsrNode::Dynamics(dynamics) => self.visit_dynamics(dynamics),
            MsrNode::OtherDynamics(other) => self.visit_other_dynamics(other),
            MsrNode::Words(words) => self.visit_words(words),
            MsrNode::Wedge(wedge) => self.visit_wedge(wedge),
            MsrNode::Glissando(glissando) => self.visit_glissando(glissando),
            MsrNode::Stanza(stanza) => self.start_stanza(stanza),
            MsrNode::Syllable(syllable) => self.visit_syllable(syllable),
        }
    }

    fn visit_end(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        match node {
            MsrNode::Score(_) => {
                self.end_score();
                Ok(())
            }
            MsrNode::PartGroup(group) => self.end_part_group(group),
            MsrNode::Part(part) => self.end_part(part),
            MsrNode::Staff(staff) => self.end_staff(staff),
            MsrNode::Voice(voice) => self.end_voice(voice),
            MsrNode::Repeat(repeat) => self.end_repeat(repeat),
            MsrNode::RepeatCommonPart(common) => self.visit_repeat_common_part(common, false),
            MsrNode::RepeatEnding {
                ending,
                last_in_sequence,
            } => self.visit_repeat_ending(ending, last_in_sequence, false),
            MsrNode::Measure(measure) => self.end_measure(measure),
            MsrNode::Note(note) => self.end_note(note),
            MsrNode::Chord(chord) => self.end_chord(chord),
            MsrNode::Tuplet(tuplet) => self.end_tuplet(tuplet),
            MsrNode::GraceNotesGroup(group) => self.end_grace_notes_group(group),
            MsrNode::DoubleTremolo(tremolo) => self.end_double_tremolo(tremolo),
            MsrNode::Stanza(stanza) => self.end_stanza(stanza),
            // leaves are fully handled at their start
            MsrNode::StaffTuning(_)
            | MsrNode::Segment(_)
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

impl ContextProbe for LpsrTranslator<'_> {
    fn tuplet_depth(&self) -> usize {
        self.ctx.tuplets.len() + self.ctx.grace_tuplets.len()
    }

    fn chord_open(&self) -> bool {
        self.ctx.chord.is_some() || self.ctx.grace_chord.is_some()
    }

    fn grace_notes_group_open(&self) -> bool {
        self.ctx.grace_group.is_some()
    }

    fn double_tremolo_open(&self) -> bool {
        self.ctx.double_tremolo.is_some()
    }

    fn note_depth(&self) -> usize {
        self.ctx.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msr::*;
    use crate::Rational;

    fn score_of(measures: Vec<Measure>) -> Score {
        let voice = Voice::with_measures(4, 1, measures);
        let staff = Staff::new(3, 1, StaffKind::Regular, vec![voice]);
        let part = Part::new(2, "P1", vec![staff]);
        Score::new(
            Identification::default(),
            vec![PartGroup::new(1, 1, vec![PartGroupElement::Part(part)])],
        )
    }

    fn translate(score: &Score, options: &TranslationOptions) -> ConversionResult<LpsrScore> {
        let mut translator = LpsrTranslator::new(options);
        msr::browse(MsrNode::Score(score), &mut translator).unwrap();
        translator.finish().unwrap()
    }

    #[test]
    fn test_bar_check_carries_next_measure_number() {
        let measure = Measure::new(
            5,
            "1",
            1,
            vec![MeasureElement::Note(Note::regular(6, DiatonicPitch::C, 4, DurationKind::Whole))],
        );
        let result = translate(&score_of(vec![measure]), &TranslationOptions::default());

        let voices = result.score.voices();
        let measures = voices[0].measures();
        assert!(matches!(
            measures[0].elements.last(),
            Some(Music::BarCheck(check)) if check.next_measure_number == "2"
        ));
    }

    #[test]
    fn test_clefs_dropped_when_excluded() {
        let measure = Measure::new(5, "1", 1, vec![MeasureElement::Clef(Clef::new(6, ClefKind::Bass))]);
        let options = TranslationOptions {
            include_clefs: false,
            insert_bar_checks: false,
            ..Default::default()
        };
        let result = translate(&score_of(vec![measure]), &options);

        assert!(result.score.voices()[0].measures()[0].elements.is_empty());
        assert!(result.skipped_elements.is_empty());
    }

    #[test]
    fn test_short_barline_sets_feature() {
        let measure = Measure::new(
            5,
            "1",
            1,
            vec![MeasureElement::Barline(Barline::new(6, BarlineLocation::Right, BarlineStyle::Short))],
        );
        let result = translate(&score_of(vec![measure]), &TranslationOptions::default());
        assert!(result.score.has_feature(ScoreFeature::CustomShortBarline));
    }

    #[test]
    fn test_implicit_repeat_gets_start_barline() {
        let repeat = Repeat {
            input_line: 7,
            times: 2,
            implicit_start: true,
            common_part: RepeatCommonPart {
                input_line: 7,
                elements: vec![VoiceElement::Segment(Segment::new(
                    7,
                    vec![Measure::new(8, "1", 1, Vec::new()).with_full_length(Rational::new(1, 1))],
                ))],
            },
            endings: Vec::new(),
        };
        let voice = Voice::new(4, 1, VoiceKind::Regular, vec![VoiceElement::Repeat(repeat)]);
        let staff = Staff::new(3, 1, StaffKind::Regular, vec![voice]);
        let score = Score::new(
            Identification::default(),
            vec![PartGroup::new(1, 1, vec![PartGroupElement::Part(Part::new(2, "P1", vec![staff]))])],
        );
        let options = TranslationOptions {
            create_implicit_initial_repeat_barline: true,
            ..Default::default()
        };
        let result = translate(&score, &options);

        let voices = result.score.voices();
        let first = voices[0].measures()[0];
        assert!(matches!(
            first.elements.first(),
            Some(Music::Barline(barline)) if barline.bar_type == LilypondBarType::StartRepeat
        ));
    }

    #[test]
    fn test_finish_without_score_is_internal_error() {
        let options = TranslationOptions::default();
        let translator = LpsrTranslator::new(&options);
        assert!(matches!(translator.finish(), Err(TranslationError::InternalError(_))));
    }
}
