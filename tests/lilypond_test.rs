use notation_translator::lpsr::*;
use notation_translator::msr::*;
use notation_translator::{
    build_lpsr_from_msr, ConversionResult, Rational, ScoreOutputKind, StructuralError, TranslationError,
    TranslationOptions,
};

fn part_of(id: &str, voices: Vec<Voice>) -> Part {
    Part::new(2, id, vec![Staff::new(3, 1, StaffKind::Regular, voices)])
}

fn score_of_parts(parts: Vec<Part>) -> Score {
    let elements = parts.into_iter().map(PartGroupElement::Part).collect();
    Score::new(Identification::default(), vec![PartGroup::new(1, 1, elements)])
}

fn score_of(measures: Vec<Measure>) -> Score {
    score_of_parts(vec![part_of("P1", vec![Voice::with_measures(4, 1, measures)])])
}

fn measure(input_line: usize, number: u32, elements: Vec<MeasureElement>) -> Measure {
    Measure::new(input_line, &number.to_string(), number, elements)
}

fn whole(input_line: usize, step: DiatonicPitch) -> MeasureElement {
    MeasureElement::Note(Note::regular(input_line, step, 4, DurationKind::Whole))
}

fn no_bar_checks() -> TranslationOptions {
    TranslationOptions {
        insert_bar_checks: false,
        ..Default::default()
    }
}

fn translate(score: &Score, options: &TranslationOptions) -> ConversionResult<LpsrScore> {
    build_lpsr_from_msr(Some(score), options).expect("translation succeeds")
}

#[test]
fn test_chord_member_outside_chord_is_fatal() {
    let stray = Note::regular(6, DiatonicPitch::C, 4, DurationKind::Quarter).with_kind(NoteKind::ChordMember);
    let score = score_of(vec![measure(5, 1, vec![MeasureElement::Note(stray)])]);

    let result = build_lpsr_from_msr(Some(&score), &TranslationOptions::default());
    assert!(matches!(
        result,
        Err(TranslationError::Structural(StructuralError::ChordMemberOutsideChord { input_line: 6 }))
    ));
}

#[test]
fn test_feature_flag_set_twice_equals_set_once() {
    let tongued = |count: usize| {
        let mut note = Note::regular(6, DiatonicPitch::C, 4, DurationKind::Whole);
        for _ in 0..count {
            note.technicals.push(Technical {
                input_line: 6,
                kind: TechnicalKind::DoubleTongue,
                placement: None,
                text: None,
            });
        }
        score_of(vec![measure(5, 1, vec![MeasureElement::Note(note)])])
    };

    let once = translate(&tongued(1), &TranslationOptions::default());
    let twice = translate(&tongued(2), &TranslationOptions::default());
    assert!(once.score.has_feature(ScoreFeature::Tongue));
    assert_eq!(once.score.features, twice.score.features);
}

#[test]
fn test_full_measure_rests_are_compressed() {
    let rest = |line| MeasureElement::Note(Note::full_measure_rest(line, Rational::new(1, 1)));
    let score = score_of(vec![
        measure(5, 1, vec![rest(6)]),
        measure(7, 2, vec![rest(8)]),
        measure(9, 3, vec![rest(10)]),
        measure(11, 4, vec![whole(12, DiatonicPitch::G)]),
    ]);
    let options = TranslationOptions {
        compress_full_measure_rests: true,
        ..Default::default()
    };
    let result = translate(&score, &options);

    let voices = result.score.voices();
    let elements = &voices[0].elements;
    assert_eq!(elements.len(), 2, "{:?}", elements);
    match &elements[0] {
        VoiceContent::RestMeasures(run) => {
            assert_eq!(run.count, 3);
            assert_eq!(run.first_measure_number(), Some("1"));
        }
        other => panic!("expected a rest measures run, got {:?}", other),
    }
    assert!(matches!(&elements[1], VoiceContent::Measure(m) if m.number == "4"));
}

#[test]
fn test_time_change_breaks_a_rest_measures_run() {
    let rest = |line| MeasureElement::Note(Note::full_measure_rest(line, Rational::new(1, 1)));
    let score = score_of(vec![
        measure(5, 1, vec![rest(6)]),
        measure(7, 2, vec![rest(8)]),
        measure(9, 3, vec![MeasureElement::Time(Time::new(10, 3, 4)), rest(11)]),
        measure(12, 4, vec![rest(13)]),
        measure(14, 5, vec![rest(15)]),
    ]);
    let options = TranslationOptions {
        compress_full_measure_rests: true,
        ..Default::default()
    };
    let result = translate(&score, &options);

    let voices = result.score.voices();
    let elements = &voices[0].elements;
    assert_eq!(elements.len(), 3, "{:?}", elements);
    assert!(matches!(&elements[0], VoiceContent::RestMeasures(run) if run.count == 2));
    match &elements[1] {
        VoiceContent::Measure(m) => {
            assert_eq!(m.number, "3");
            assert!(m.elements.iter().any(|element| matches!(element, Music::Time(_))));
        }
        other => panic!("expected measure 3 on its own, got {:?}", other),
    }
    assert!(matches!(&elements[2], VoiceContent::RestMeasures(run) if run.count == 2));
}

#[test]
fn test_rest_measures_not_compressed_by_default() {
    let rest = |line| MeasureElement::Note(Note::full_measure_rest(line, Rational::new(1, 1)));
    let score = score_of(vec![measure(5, 1, vec![rest(6)]), measure(7, 2, vec![rest(8)])]);
    let result = translate(&score, &TranslationOptions::default());

    let voices = result.score.voices();
    assert!(voices[0]
        .elements
        .iter()
        .all(|element| matches!(element, VoiceContent::Measure(_))));
}

#[test]
fn test_repeat_with_two_endings() {
    let segment = |line: usize, number: u32| {
        let bar = measure(line, number, vec![whole(line + 1, DiatonicPitch::C)]);
        VoiceElement::Segment(Segment::new(line, vec![bar]))
    };
    let ending = |line, number: &str, bar| RepeatEnding {
        input_line: line,
        number: number.to_string(),
        kind: RepeatEndingKind::Hooked,
        elements: vec![segment(line, bar)],
    };
    let repeat = Repeat {
        input_line: 20,
        times: 2,
        implicit_start: false,
        common_part: RepeatCommonPart {
            input_line: 20,
            elements: vec![segment(20, 2)],
        },
        endings: vec![ending(30, "1", 3), ending(40, "2", 4)],
    };
    let voice = Voice::new(4, 1, VoiceKind::Regular, vec![segment(10, 1), VoiceElement::Repeat(repeat)]);
    let result = translate(&score_of_parts(vec![part_of("P1", vec![voice])]), &no_bar_checks());

    let voices = result.score.voices();
    let elements = &voices[0].elements;
    assert_eq!(elements.len(), 2);
    let VoiceContent::Repeat(repeat) = &elements[1] else {
        panic!("expected a repeat, got {:?}", elements[1]);
    };
    assert_eq!(repeat.times, 2);
    assert_eq!(repeat.common_part.len(), 1);
    let endings: Vec<(&str, bool)> = repeat
        .endings
        .iter()
        .map(|ending| (ending.number.as_str(), ending.last_in_sequence))
        .collect();
    assert_eq!(endings, vec![("1", false), ("2", true)]);

    let numbers: Vec<&str> = voices[0].measures().iter().map(|m| m.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_double_tremolo_fills_both_slots() {
    let member = |line, step, position| {
        let mut note = Note::regular(line, step, 4, DurationKind::Half).with_kind(NoteKind::DoubleTremoloMember);
        note.tremolo_position = Some(position);
        note
    };
    let tremolo = DoubleTremolo {
        input_line: 6,
        marks: 3,
        first: TremoloElement::Note(member(6, DiatonicPitch::C, TremoloPosition::First)),
        second: TremoloElement::Note(member(7, DiatonicPitch::E, TremoloPosition::Second)),
    };
    let result = translate(
        &score_of(vec![measure(5, 1, vec![MeasureElement::DoubleTremolo(tremolo)])]),
        &no_bar_checks(),
    );

    let voices = result.score.voices();
    let Some(Music::DoubleTremolo(tremolo)) = voices[0].measures()[0].elements.first() else {
        panic!("expected a double tremolo");
    };
    assert_eq!(tremolo.marks, 3);
    assert!(matches!(&tremolo.first, Some(LpsrTremoloElement::Note(n)) if n.pitch.step == DiatonicPitch::C));
    assert!(matches!(&tremolo.second, Some(LpsrTremoloElement::Note(n)) if n.pitch.step == DiatonicPitch::E));
}

#[test]
fn test_tremolo_member_outside_tremolo_is_fatal() {
    let stray = Note::regular(6, DiatonicPitch::C, 4, DurationKind::Half).with_kind(NoteKind::DoubleTremoloMember);
    let score = score_of(vec![measure(5, 1, vec![MeasureElement::Note(stray)])]);

    assert!(matches!(
        build_lpsr_from_msr(Some(&score), &TranslationOptions::default()),
        Err(TranslationError::Structural(StructuralError::TremoloMemberOutsideDoubleTremolo { .. }))
    ));
}

#[test]
fn test_first_note_grace_notes_add_a_skip_group_to_other_voices() {
    let mut first = Note::regular(6, DiatonicPitch::C, 5, DurationKind::Whole);
    first.grace_before = Some(Box::new(GraceNotesGroup::new(
        6,
        GraceNotesGroupKind::Before,
        vec![GraceElement::Note(
            Note::regular(6, DiatonicPitch::D, 5, DurationKind::Eighth).with_kind(NoteKind::Grace),
        )],
    )));
    let upper = Voice::with_measures(4, 1, vec![measure(5, 1, vec![MeasureElement::Note(first)])]);
    let lower = Voice::with_measures(10, 2, vec![measure(11, 1, vec![whole(12, DiatonicPitch::C)])]);
    let result = translate(&score_of_parts(vec![part_of("P1", vec![upper, lower])]), &no_bar_checks());

    let voices = result.score.voices();
    assert_eq!(voices.len(), 2);

    let upper = voices[0].measures()[0];
    let Some(Music::Note(note)) = upper.elements.first() else {
        panic!("expected the decorated note first");
    };
    assert!(note.grace_before.is_some());

    let lower = voices[1].measures()[0];
    match lower.elements.first() {
        Some(Music::GraceNotes(group)) => {
            assert!(group.skip);
            assert_eq!(group.elements.len(), 1);
        }
        other => panic!("expected a skip grace group, got {:?}", other),
    }
    assert!(result.score.has_feature(ScoreFeature::MergeRests));
}

fn tuplet_note(input_line: usize, step: DiatonicPitch, duration: DurationKind, kind: NoteKind) -> TupletElement {
    TupletElement::Note(Note::regular(input_line, step, 4, duration).with_kind(kind))
}

#[test]
fn test_grace_tuplet_stays_inside_its_grace_group() {
    let grace_tuplet = Tuplet::new(
        7,
        3,
        2,
        vec![
            tuplet_note(7, DiatonicPitch::G, DurationKind::D16th, NoteKind::GraceTupletMember),
            tuplet_note(7, DiatonicPitch::A, DurationKind::D16th, NoteKind::GraceTupletMember),
            tuplet_note(7, DiatonicPitch::B, DurationKind::D16th, NoteKind::GraceTupletMember),
        ],
    );
    let mut first = Note::regular(8, DiatonicPitch::C, 4, DurationKind::Eighth).with_kind(NoteKind::TupletMember);
    first.grace_before = Some(Box::new(GraceNotesGroup::new(
        7,
        GraceNotesGroupKind::Before,
        vec![GraceElement::Tuplet(grace_tuplet)],
    )));
    let tuplet = Tuplet::new(
        6,
        3,
        2,
        vec![
            TupletElement::Note(first),
            tuplet_note(9, DiatonicPitch::D, DurationKind::Eighth, NoteKind::TupletMember),
            tuplet_note(10, DiatonicPitch::E, DurationKind::Eighth, NoteKind::TupletMember),
        ],
    );
    let score = score_of(vec![measure(5, 1, vec![MeasureElement::Tuplet(tuplet)])]);
    let result = translate(&score, &no_bar_checks());

    let voices = result.score.voices();
    let measure = voices[0].measures()[0];
    let Some(Music::Tuplet(outer)) = measure.elements.first() else {
        panic!("expected a tuplet: {:?}", measure.elements);
    };
    assert_eq!(outer.elements.len(), 3);

    let LpsrTupletElement::Note(first) = &outer.elements[0] else {
        panic!("expected a note: {:?}", outer.elements[0]);
    };
    let grace = first.grace_before.as_ref().expect("grace notes before the first note");
    assert_eq!(grace.elements.len(), 1);
    assert!(matches!(&grace.elements[0], LpsrGraceElement::Tuplet(inner) if inner.elements.len() == 3));
}

#[test]
fn test_grace_tuplet_member_outside_grace_group_is_fatal() {
    let tuplet = Tuplet::new(
        6,
        3,
        2,
        vec![
            tuplet_note(7, DiatonicPitch::C, DurationKind::Eighth, NoteKind::GraceTupletMember),
            tuplet_note(8, DiatonicPitch::D, DurationKind::Eighth, NoteKind::TupletMember),
            tuplet_note(9, DiatonicPitch::E, DurationKind::Eighth, NoteKind::TupletMember),
        ],
    );
    let score = score_of(vec![measure(5, 1, vec![MeasureElement::Tuplet(tuplet)])]);

    let result = build_lpsr_from_msr(Some(&score), &TranslationOptions::default());
    assert!(matches!(
        result,
        Err(TranslationError::Structural(StructuralError::GraceNoteOutsideGraceNotesGroup { input_line: 7 }))
    ));
}

#[test]
fn test_score_output_kinds() {
    let score = score_of_parts(vec![
        part_of("P1", vec![Voice::with_measures(4, 1, vec![measure(5, 1, vec![whole(6, DiatonicPitch::C)])])]),
        part_of("P2", vec![Voice::with_measures(7, 1, vec![measure(8, 1, vec![whole(9, DiatonicPitch::E)])])]),
    ]);
    let books = |kind| {
        let options = TranslationOptions {
            score_output_kind: kind,
            ..Default::default()
        };
        translate(&score, &options).score.book_blocks
    };

    assert_eq!(books(ScoreOutputKind::Score).len(), 1);
    assert_eq!(books(ScoreOutputKind::Parts).len(), 2);
    assert_eq!(books(ScoreOutputKind::ScoreAndParts).len(), 3);

    let parts_and_score = books(ScoreOutputKind::PartsAndScore);
    assert_eq!(parts_and_score.len(), 3);
    assert!(matches!(parts_and_score[2].elements[0], BookBlockElement::Score(_)));

    let one_file = books(ScoreOutputKind::ScoreAndPartsOneFile);
    assert_eq!(one_file.len(), 1);
    assert_eq!(one_file[0].elements.len(), 3);
}

#[test]
fn test_stanza_gets_a_lyrics_reference() {
    let mut voice = Voice::with_measures(4, 1, vec![measure(5, 1, vec![whole(6, DiatonicPitch::C)])]);
    voice.stanzas.push(Stanza {
        input_line: 20,
        number: "1".to_string(),
        name: None,
        syllables: vec![Syllable::new(21, "1", SyllableKind::Single, "la")],
    });
    let result = translate(&score_of_parts(vec![part_of("P1", vec![voice])]), &TranslationOptions::default());

    let voices = result.score.voices();
    assert_eq!(voices[0].stanzas.len(), 1);
    assert_eq!(voices[0].stanzas[0].syllables[0].text, "la");

    let ScoreBlock { part_groups } = match &result.score.book_blocks[0].elements[0] {
        BookBlockElement::Score(block) => block.clone(),
        other => panic!("expected a score block, got {:?}", other),
    };
    let parts = part_groups[0].part_blocks();
    let staff = parts[0].staff_blocks().next().expect("one staff block");
    assert_eq!(staff.voice_names, vec!["Part_P1_Staff_1_Voice_1".to_string()]);
    assert_eq!(staff.lyrics.len(), 1);
    assert_eq!(staff.lyrics[0].lyrics_name, "Part_P1_Staff_1_Voice_1_Stanza_1");
}

#[test]
fn test_header_comes_from_identification() {
    let mut score = score_of(vec![measure(5, 1, vec![whole(6, DiatonicPitch::C)])]);
    score.identification.work_title = Some("Sonatina".to_string());
    score.identification.composers.push("Clementi".to_string());
    let result = translate(&score, &TranslationOptions::default());

    assert_eq!(result.score.header.title.as_deref(), Some("Sonatina"));
    assert_eq!(result.score.header.composers, vec!["Clementi".to_string()]);
}
