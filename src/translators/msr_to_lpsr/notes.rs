//! Notes and the containers around them
//!
//! A note is cloned at its start event, collects its attachments while it
//! sits on the note stack, and is routed to its container at its end event:
//! chord, grace notes group, tuplet, double tremolo slot or measure.

use crate::lpsr::*;
use crate::msr::{self, GraceNotesGroupKind, NoteKind, TupletLineShape};
use crate::tables::lilypond::*;
use crate::translators::errors::{StructuralError, TranslationError};

use super::context::{GraceOwner, LpsrContext, OpenGraceGroup};
use super::LpsrTranslator;

impl LpsrTranslator<'_> {
    // ------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------

    pub(super) fn start_note(&mut self, note: &msr::Note) -> Result<(), TranslationError> {
        let input_line = note.input_line;
        match note.kind {
            NoteKind::ChordMember if self.ctx.chord.is_none() => {
                return Err(StructuralError::ChordMemberOutsideChord { input_line }.into())
            }
            NoteKind::GraceChordMember if self.ctx.grace_chord.is_none() => {
                return Err(StructuralError::ChordMemberOutsideChord { input_line }.into())
            }
            NoteKind::Grace if self.ctx.grace_group.is_none() => {
                return Err(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line }.into())
            }
            NoteKind::GraceTupletMember if self.ctx.grace_group.is_none() => {
                return Err(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line }.into())
            }
            NoteKind::GraceTupletMember if self.ctx.grace_tuplets.is_empty() => {
                return Err(StructuralError::TupletMemberOutsideTuplet { input_line }.into())
            }
            NoteKind::TupletMember | NoteKind::TupletRestMember if self.ctx.tuplets.is_empty() => {
                return Err(StructuralError::TupletMemberOutsideTuplet { input_line }.into())
            }
            NoteKind::DoubleTremoloMember if self.ctx.double_tremolo.is_none() => {
                return Err(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line }.into())
            }
            _ => {}
        }

        let clone = self.clone_note(note);
        self.ctx.notes.push(clone);
        Ok(())
    }

    fn clone_note(&mut self, note: &msr::Note) -> LpsrNote {
        let accidental = match lilypond_accidental(note.accidental) {
            Some(accidental) => accidental,
            None => {
                self.ctx.skip(
                    "accidental",
                    note.accidental.name(),
                    note.input_line,
                    "no LilyPond accidental, default accidental used",
                );
                LilypondAccidentalKind::Default
            }
        };
        if note.editorial_accidental {
            self.ctx.set_feature(ScoreFeature::EditorialAccidental);
        }
        if note.cautionary_accidental {
            self.ctx.set_feature(ScoreFeature::CautionaryAccidental);
        }

        LpsrNote {
            input_line: note.input_line,
            kind: note.kind,
            pitch: note.pitch,
            octave: note.octave,
            duration: lilypond_duration(note.duration, note.dots),
            sounding: note.sounding,
            accidental,
            forced_accidental: note.accidental == msr::AccidentalKind::Natural,
            cautionary_accidental: note.cautionary_accidental,
            editorial_accidental: note.editorial_accidental,
            full_measure_rest: note.full_measure_rest,
            ties: note.ties.clone(),
            slurs: note.slurs.clone(),
            beams: note.beams.clone(),
            articulations: Vec::new(),
            technicals: Vec::new(),
            ornaments: Vec::new(),
            dynamics: Vec::new(),
            words: Vec::new(),
            wedges: Vec::new(),
            glissandos: Vec::new(),
            grace_before: None,
            grace_after: None,
            after_grace: None,
        }
    }

    pub(super) fn end_note(&mut self, note: &msr::Note) -> Result<(), TranslationError> {
        let input_line = note.input_line;
        let clone = self.ctx.notes.pop().ok_or_else(|| {
            TranslationError::InternalError(format!("note end at line {} without a start", input_line))
        })?;
        if !note.kind.is_grace() {
            self.ctx.voice_note_count += 1;
        }

        match note.kind {
            NoteKind::ChordMember => {
                let chord = self
                    .ctx
                    .chord
                    .as_mut()
                    .ok_or(StructuralError::ChordMemberOutsideChord { input_line })?;
                chord.notes.push(clone);
            }
            NoteKind::GraceChordMember => {
                let chord = self
                    .ctx
                    .grace_chord
                    .as_mut()
                    .ok_or(StructuralError::ChordMemberOutsideChord { input_line })?;
                chord.notes.push(clone);
            }
            NoteKind::Grace => {
                let open = self
                    .ctx
                    .grace_group
                    .as_mut()
                    .ok_or(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line })?;
                open.group.elements.push(LpsrGraceElement::Note(clone));
            }
            NoteKind::GraceTupletMember => {
                let tuplet = self
                    .ctx
                    .grace_tuplets
                    .last_mut()
                    .ok_or(StructuralError::TupletMemberOutsideTuplet { input_line })?;
                tuplet.elements.push(LpsrTupletElement::Note(clone));
            }
            NoteKind::TupletMember | NoteKind::TupletRestMember => {
                let tuplet = self
                    .ctx
                    .tuplets
                    .last_mut()
                    .ok_or(StructuralError::TupletMemberOutsideTuplet { input_line })?;
                tuplet.elements.push(LpsrTupletElement::Note(clone));
            }
            NoteKind::DoubleTremoloMember => {
                self.ctx.install_tremolo_element(
                    note.tremolo_position,
                    LpsrTremoloElement::Note(clone),
                    input_line,
                )?;
            }
            NoteKind::Regular | NoteKind::Rest | NoteKind::Skip | NoteKind::Unpitched => {
                match self.ctx.tuplets.last_mut() {
                    Some(tuplet) => tuplet.elements.push(LpsrTupletElement::Note(clone)),
                    None => self.ctx.append_to_measure(Music::Note(clone), "note", input_line)?,
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Chords and tuplets
    // ------------------------------------------------------------------

    pub(super) fn start_chord(&mut self, chord: &msr::Chord) -> Result<(), TranslationError> {
        let input_line = chord.input_line;
        if chord.tremolo_position.is_some() && self.ctx.double_tremolo.is_none() {
            return Err(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line }.into());
        }

        let clone = LpsrChord {
            input_line,
            notes: Vec::with_capacity(chord.notes.len()),
            duration: lilypond_duration(chord.duration, chord.dots),
            sounding: chord.sounding,
            grace_before: None,
            grace_after: None,
        };

        let slot = if self.ctx.grace_group.is_some() {
            &mut self.ctx.grace_chord
        } else {
            &mut self.ctx.chord
        };
        if slot.is_some() {
            return Err(StructuralError::NestedChord { input_line }.into());
        }
        *slot = Some(clone);
        Ok(())
    }

    pub(super) fn end_chord(&mut self, chord: &msr::Chord) -> Result<(), TranslationError> {
        let input_line = chord.input_line;

        // a grace chord is always the innermost one
        if let Some(grace_chord) = self.ctx.grace_chord.take() {
            if let Some(tuplet) = self.ctx.grace_tuplets.last_mut() {
                tuplet.elements.push(LpsrTupletElement::Chord(grace_chord));
                return Ok(());
            }
            let open = self
                .ctx
                .grace_group
                .as_mut()
                .ok_or(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line })?;
            open.group.elements.push(LpsrGraceElement::Chord(grace_chord));
            return Ok(());
        }

        let clone = self.ctx.chord.take().ok_or_else(|| {
            TranslationError::InternalError(format!("chord end at line {} without a start", input_line))
        })?;
        if let Some(tuplet) = self.ctx.tuplets.last_mut() {
            tuplet.elements.push(LpsrTupletElement::Chord(clone));
        } else if chord.tremolo_position.is_some() {
            self.ctx.install_tremolo_element(
                chord.tremolo_position,
                LpsrTremoloElement::Chord(clone),
                input_line,
            )?;
        } else {
            self.ctx.append_to_measure(Music::Chord(clone), "chord", input_line)?;
        }
        Ok(())
    }

    pub(super) fn start_tuplet(&mut self, tuplet: &msr::Tuplet) -> Result<(), TranslationError> {
        if tuplet.line_shape == TupletLineShape::Curved {
            self.ctx.set_feature(ScoreFeature::TupletsCurvedBrackets);
        }
        let clone = LpsrTuplet {
            input_line: tuplet.input_line,
            number: tuplet.number,
            actual: tuplet.actual,
            normal: tuplet.normal,
            line_shape: tuplet.line_shape,
            show_bracket: tuplet.show_bracket,
            elements: Vec::with_capacity(tuplet.elements.len()),
        };
        if self.ctx.grace_group.is_some() {
            self.ctx.grace_tuplets.push(clone);
        } else {
            self.ctx.tuplets.push(clone);
        }
        Ok(())
    }

    pub(super) fn end_tuplet(&mut self, tuplet: &msr::Tuplet) -> Result<(), TranslationError> {
        let input_line = tuplet.input_line;

        // grace tuplets are innermost while their group is open
        if let Some(clone) = self.ctx.grace_tuplets.pop() {
            if let Some(parent) = self.ctx.grace_tuplets.last_mut() {
                parent.elements.push(LpsrTupletElement::Tuplet(clone));
                return Ok(());
            }
            let open = self
                .ctx
                .grace_group
                .as_mut()
                .ok_or(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line })?;
            open.group.elements.push(LpsrGraceElement::Tuplet(clone));
            return Ok(());
        }

        let clone = self
            .ctx
            .tuplets
            .pop()
            .ok_or(StructuralError::UnbalancedTuplet { input_line })?;

        if let Some(parent) = self.ctx.tuplets.last_mut() {
            parent.elements.push(LpsrTupletElement::Tuplet(clone));
        } else {
            self.ctx.append_to_measure(Music::Tuplet(clone), "tuplet", input_line)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Grace notes
    // ------------------------------------------------------------------

    pub(super) fn start_grace_notes_group(&mut self, group: &msr::GraceNotesGroup) -> Result<(), TranslationError> {
        let input_line = group.input_line;
        if self.ctx.grace_group.is_some() {
            return Err(StructuralError::NestedGraceNotesGroup { input_line }.into());
        }
        let owner = if !self.ctx.notes.is_empty() {
            GraceOwner::Note
        } else if self.ctx.chord.is_some() {
            GraceOwner::Chord
        } else {
            return Err(StructuralError::GraceNotesGroupWithoutNote { input_line }.into());
        };

        let before = group.kind == GraceNotesGroupKind::Before;
        let decorates_first_note = before && self.ctx.voice_note_count == 0;
        let after_grace = before
            && self.options.convert_trailing_grace_notes_to_after_grace
            && self.ctx.tuplets.is_empty()
            && previous_trilled_note(&mut self.ctx).is_some();

        self.ctx.grace_group = Some(OpenGraceGroup {
            group: LpsrGraceNotesGroup {
                input_line,
                kind: group.kind,
                slashed: group.slashed,
                beamed: group.beamed,
                skip: false,
                elements: Vec::with_capacity(group.elements.len()),
            },
            owner,
            decorates_first_note,
            after_grace,
        });
        Ok(())
    }

    pub(super) fn end_grace_notes_group(&mut self, group: &msr::GraceNotesGroup) -> Result<(), TranslationError> {
        let input_line = group.input_line;
        let mut open = self.ctx.grace_group.take().ok_or_else(|| {
            TranslationError::InternalError(format!("grace notes group end at line {} without a start", input_line))
        })?;

        if open.after_grace {
            open.group.kind = GraceNotesGroupKind::After;
            if let Some(note) = previous_trilled_note(&mut self.ctx) {
                log::debug!("LPSR: grace notes at line {} become after-grace notes", input_line);
                note.after_grace = Some(Box::new(open.group));
                self.ctx.set_feature(ScoreFeature::AfterGrace);
                return Ok(());
            }
            open.group.kind = GraceNotesGroupKind::Before;
        }

        if open.decorates_first_note {
            if let Some(voice) = self.ctx.voice.as_ref() {
                let skip_group = open.group.to_skip_group();
                self.ctx.skip_groups.push((voice.name.clone(), skip_group));
            }
        }

        let kind = open.group.kind;
        let boxed = Some(Box::new(open.group));
        let (grace_before, grace_after) = match open.owner {
            GraceOwner::Note => {
                let note = self
                    .ctx
                    .notes
                    .last_mut()
                    .ok_or(StructuralError::GraceNotesGroupWithoutNote { input_line })?;
                (&mut note.grace_before, &mut note.grace_after)
            }
            GraceOwner::Chord => {
                let chord = self
                    .ctx
                    .chord
                    .as_mut()
                    .ok_or(StructuralError::GraceNotesGroupWithoutNote { input_line })?;
                (&mut chord.grace_before, &mut chord.grace_after)
            }
        };
        match kind {
            GraceNotesGroupKind::Before => *grace_before = boxed,
            GraceNotesGroupKind::After => *grace_after = boxed,
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Double tremolos
    // ------------------------------------------------------------------

    pub(super) fn start_double_tremolo(&mut self, tremolo: &msr::DoubleTremolo) -> Result<(), TranslationError> {
        if self.ctx.double_tremolo.is_some() {
            return Err(StructuralError::NestedDoubleTremolo {
                input_line: tremolo.input_line,
            }
            .into());
        }
        self.ctx.double_tremolo = Some(LpsrDoubleTremolo {
            input_line: tremolo.input_line,
            marks: tremolo.marks,
            first: None,
            second: None,
        });
        Ok(())
    }

    pub(super) fn end_double_tremolo(&mut self, tremolo: &msr::DoubleTremolo) -> Result<(), TranslationError> {
        let input_line = tremolo.input_line;
        let clone = self
            .ctx
            .double_tremolo
            .take()
            .ok_or(StructuralError::TremoloMemberOutsideDoubleTremolo { input_line })?;
        if clone.first.is_none() || clone.second.is_none() {
            return Err(StructuralError::IncompleteDoubleTremolo { input_line }.into());
        }
        self.ctx
            .append_to_measure(Music::DoubleTremolo(clone), "double tremolo", input_line)
    }

    // ------------------------------------------------------------------
    // Note attachments
    // ------------------------------------------------------------------

    pub(super) fn visit_articulation(&mut self, articulation: &msr::Articulation) -> Result<(), TranslationError> {
        let input_line = articulation.input_line;
        self.ctx.require_note("articulation", input_line)?;

        match lilypond_articulation(articulation.kind) {
            Some(kind) => self.ctx.note_mut("articulation", input_line)?.articulations.push(LpsrArticulation {
                kind,
                placement: articulation.placement,
            }),
            None => self.ctx.skip(
                "articulation",
                articulation.kind.name(),
                input_line,
                "no LilyPond articulation",
            ),
        }
        Ok(())
    }

    pub(super) fn visit_technical(&mut self, technical: &msr::Technical) -> Result<(), TranslationError> {
        let input_line = technical.input_line;
        self.ctx.require_note("technical", input_line)?;

        match lilypond_technical(technical.kind, technical.text.is_some()) {
            Some((kind, feature)) => {
                if let Some(feature) = feature {
                    self.ctx.set_feature(feature);
                }
                self.ctx.note_mut("technical", input_line)?.technicals.push(LpsrTechnical {
                    kind,
                    placement: technical.placement,
                    text: technical.text.clone(),
                });
            }
            None => self.ctx.skip("technical", technical.kind.name(), input_line, "no LilyPond technical"),
        }
        Ok(())
    }

    pub(super) fn visit_ornament(&mut self, ornament: &msr::Ornament) -> Result<(), TranslationError> {
        let input_line = ornament.input_line;
        self.ctx.require_note("ornament", input_line)?;

        let Some(kind) = lilypond_ornament(ornament.kind) else {
            self.ctx.skip("ornament", ornament.kind.name(), input_line, "no LilyPond ornament");
            return Ok(());
        };
        let accidental = match ornament.accidental {
            Some(accidental) => {
                let mapped = lilypond_accidental(accidental);
                if mapped.is_none() {
                    self.ctx.skip(
                        "ornament accidental",
                        accidental.name(),
                        input_line,
                        "no LilyPond accidental",
                    );
                }
                mapped
            }
            None => None,
        };

        self.ctx.note_mut("ornament", input_line)?.ornaments.push(LpsrOrnament {
            kind,
            placement: ornament.placement,
            accidental,
        });
        Ok(())
    }

    pub(super) fn visit_dynamics(&mut self, dynamics: &msr::Dynamics) -> Result<(), TranslationError> {
        let input_line = dynamics.input_line;
        self.ctx.require_note("dynamics", input_line)?;

        let command = lilypond_dynamics_command(dynamics.kind);
        if command == LilypondDynamicsCommand::MakeDynamicScript {
            self.ctx.set_feature(ScoreFeature::CustomDynamics);
        }
        self.ctx.note_mut("dynamics", input_line)?.dynamics.push(LpsrDynamics {
            text: LpsrDynamicsText::Mark(dynamics.kind.name()),
            command,
            placement: dynamics.placement,
        });
        Ok(())
    }

    pub(super) fn visit_other_dynamics(&mut self, other: &msr::OtherDynamics) -> Result<(), TranslationError> {
        let input_line = other.input_line;
        self.ctx.require_note("other dynamics", input_line)?;

        self.ctx.set_feature(ScoreFeature::OtherDynamic);
        self.ctx.note_mut("other dynamics", input_line)?.dynamics.push(LpsrDynamics {
            text: LpsrDynamicsText::Other(other.text.clone()),
            command: LilypondDynamicsCommand::MakeDynamicScript,
            placement: other.placement,
        });
        Ok(())
    }

    pub(super) fn visit_words(&mut self, words: &msr::Words) -> Result<(), TranslationError> {
        let input_line = words.input_line;
        self.ctx.require_note("words", input_line)?;

        if self.options.convert_words_to_tempo {
            return self.ctx.append_to_measure(
                Music::Tempo(LpsrTempo {
                    input_line,
                    kind: LilypondTempoKind::Text,
                    words: Some(words.text.clone()),
                    beat_unit: None,
                    per_minute: None,
                    equivalent_beat_unit: None,
                    parentheses: false,
                    placement: words.placement,
                }),
                "words",
                input_line,
            );
        }
        if self.options.convert_words_to_rehearsal_marks {
            return self.ctx.append_to_measure(
                Music::RehearsalMark(LpsrRehearsalMark {
                    input_line,
                    text: words.text.clone(),
                    enclosure: msr::RehearsalEnclosure::None,
                }),
                "words",
                input_line,
            );
        }

        self.ctx.note_mut("words", input_line)?.words.push(LpsrWords {
            text: words.text.clone(),
            placement: words.placement,
        });
        Ok(())
    }

    pub(super) fn visit_wedge(&mut self, wedge: &msr::Wedge) -> Result<(), TranslationError> {
        self.ctx.note_mut("wedge", wedge.input_line)?.wedges.push(LpsrWedge {
            kind: lilypond_wedge(wedge.kind),
            placement: wedge.placement,
        });
        Ok(())
    }

    pub(super) fn visit_glissando(&mut self, glissando: &msr::Glissando) -> Result<(), TranslationError> {
        self.ctx.require_note("glissando", glissando.input_line)?;
        if glissando.text.is_some() {
            self.ctx.set_feature(ScoreFeature::GlissandoWithText);
        }
        self.ctx.note_mut("glissando", glissando.input_line)?.glissandos.push(LpsrGlissando {
            kind: glissando.kind,
            number: glissando.number,
            text: glissando.text.clone(),
        });
        Ok(())
    }
}

/// The last finished note of the voice, when it carries a trill
fn previous_trilled_note(ctx: &mut LpsrContext) -> Option<&mut LpsrNote> {
    let in_measure = ctx.measure.as_mut().and_then(LpsrMeasure::last_note_mut);
    let note = match in_measure {
        Some(note) => Some(note),
        None => ctx
            .voice
            .as_mut()
            .and_then(LpsrVoice::last_measure_mut)
            .and_then(LpsrMeasure::last_note_mut),
    };
    note.filter(|note| note.has_trill())
}
