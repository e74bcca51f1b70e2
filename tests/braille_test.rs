use notation_translator::bsr::*;
use notation_translator::msr::*;
use notation_translator::tables::braille::braille_key;
use notation_translator::translators::msr_to_bsr::octave::{octave_sign_needed, OctaveReference};
use notation_translator::translators::BrailleLayout;
use notation_translator::{build_bsr_from_msr, ConversionResult, StructuralError, TranslationError, TranslationOptions};

fn score_of(measures: Vec<Measure>) -> Score {
    let voice = Voice::with_measures(4, 1, measures);
    let staff = Staff::new(3, 1, StaffKind::Regular, vec![voice]);
    Score::new(
        Identification {
            work_title: Some("Etude".to_string()),
            composers: vec!["Anonymous".to_string()],
            ..Default::default()
        },
        vec![PartGroup::new(1, 1, vec![PartGroupElement::Part(Part::new(2, "P1", vec![staff]))])],
    )
}

fn quarter(input_line: usize, step: DiatonicPitch, octave: i32) -> MeasureElement {
    MeasureElement::Note(Note::regular(input_line, step, octave, DurationKind::Quarter))
}

fn transcribe(score: &Score, options: &TranslationOptions) -> ConversionResult<BsrScore> {
    build_bsr_from_msr(Some(score), options).expect("transcription succeeds")
}

fn note_signs(measure: &BsrMeasure) -> Vec<&BsrNote> {
    measure
        .signs
        .iter()
        .filter_map(|sign| match sign {
            Sign::Note(note) => Some(note),
            _ => None,
        })
        .collect()
}

#[test]
fn test_octave_rule_from_middle_c() {
    let c4 = Some(OctaveReference::of(DiatonicPitch::C, 4));
    assert_eq!(c4.map(|r| r.ordinal), Some(28));

    assert!(!octave_sign_needed(c4, OctaveReference::of(DiatonicPitch::E, 4)));
    assert!(!octave_sign_needed(c4, OctaveReference::of(DiatonicPitch::F, 4)));
    assert!(octave_sign_needed(c4, OctaveReference::of(DiatonicPitch::F, 5)));
    assert!(octave_sign_needed(c4, OctaveReference::of(DiatonicPitch::G, 3)));
    assert!(octave_sign_needed(c4, OctaveReference::of(DiatonicPitch::A, 4)));
}

#[test]
fn test_octave_signs_in_a_melody() {
    let measure = Measure::new(
        5,
        "1",
        1,
        vec![
            quarter(6, DiatonicPitch::C, 4),
            quarter(7, DiatonicPitch::F, 4),
            quarter(8, DiatonicPitch::F, 5),
            quarter(9, DiatonicPitch::E, 5),
        ],
    );
    let result = transcribe(&score_of(vec![measure]), &TranslationOptions::default());
    let measure = result.score.measures().next().expect("one measure");

    let signs: Vec<bool> = note_signs(measure).iter().map(|note| note.octave_sign).collect();
    assert_eq!(signs, vec![true, false, true, false]);
}

#[test]
fn test_key_mapping_depends_on_mode() {
    let a = Pitch::natural(DiatonicPitch::A);
    assert_eq!(braille_key(a, KeyMode::Major), Some((BrailleKeyKind::Sharps, 3)));
    assert_eq!(braille_key(a, KeyMode::Minor), Some((BrailleKeyKind::Naturals, 0)));
}

#[test]
fn test_percussion_clef_is_dropped_with_one_warning() {
    let measure = Measure::new(
        5,
        "1",
        1,
        vec![
            MeasureElement::Clef(Clef::new(6, ClefKind::Percussion)),
            quarter(7, DiatonicPitch::C, 4),
        ],
    );
    let result = transcribe(&score_of(vec![measure]), &TranslationOptions::default());

    assert_eq!(result.skipped_elements.len(), 1, "{:?}", result.skipped_elements);
    let skipped = &result.skipped_elements[0];
    assert_eq!(skipped.element_type, "clef");
    assert_eq!(skipped.value, "percussion");
    assert_eq!(skipped.input_line, 6);

    let measure = result.score.measures().next().expect("one measure");
    assert!(!measure.signs.iter().any(|sign| matches!(sign, Sign::Clef(_))));
    assert_eq!(result.score.transcription_notes.notes.len(), 1);
}

#[test]
fn test_chord_member_outside_chord_is_fatal() {
    let stray = Note::regular(6, DiatonicPitch::C, 4, DurationKind::Quarter).with_kind(NoteKind::ChordMember);
    let score = score_of(vec![Measure::new(5, "1", 1, vec![MeasureElement::Note(stray)])]);

    let result = build_bsr_from_msr(Some(&score), &TranslationOptions::default());
    assert!(matches!(
        result,
        Err(TranslationError::Structural(StructuralError::ChordMemberOutsideChord { input_line: 6 }))
    ));
}

#[test]
fn test_page_heading_and_music_heading() {
    let measure = Measure::new(
        5,
        "1",
        1,
        vec![
            MeasureElement::Key(Key::traditional(6, Pitch::natural(DiatonicPitch::A), KeyMode::Minor)),
            MeasureElement::Time(Time::new(7, 6, 8)),
            quarter(8, DiatonicPitch::A, 4),
        ],
    );
    let result = transcribe(&score_of(vec![measure]), &TranslationOptions::default());

    let page = &result.score.pages[0];
    let heading = page.heading.as_ref().expect("page heading");
    assert_eq!(heading.title.as_deref(), Some("Etude"));
    assert_eq!(heading.composers, vec!["Anonymous".to_string()]);

    let music_heading = result.score.music_heading().expect("music heading");
    assert_eq!(music_heading.key.as_ref().map(|key| key.count), Some(0));
    assert_eq!(
        music_heading.time.as_ref().map(|time| time.kind),
        Some(BrailleTimeKind::Numerical)
    );
}

#[test]
fn test_empty_music_heading_is_dropped() {
    let measure = Measure::new(5, "1", 1, vec![quarter(6, DiatonicPitch::C, 4)]);
    let result = transcribe(&score_of(vec![measure]), &TranslationOptions::default());
    assert!(result.score.music_heading().is_none());
}

#[test]
fn test_measure_wider_than_the_rest_of_the_line_wraps() {
    let measures = vec![
        Measure::new(5, "1", 1, vec![quarter(6, DiatonicPitch::C, 4)]),
        Measure::new(7, "2", 2, vec![quarter(8, DiatonicPitch::D, 4)]),
        Measure::new(9, "3", 3, vec![quarter(10, DiatonicPitch::E, 4)]),
    ];
    let options = TranslationOptions {
        braille: BrailleLayout {
            cells_per_line: 6,
            lines_per_page: 25,
            page_heading: false,
        },
        ..Default::default()
    };
    let result = transcribe(&score_of(measures), &options);

    let lines: Vec<&BsrLine> = result.score.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].measures.len(), 2);
    assert!(!note_signs(&lines[0].measures[1])[0].octave_sign);
    assert!(
        note_signs(&lines[1].measures[0])[0].octave_sign,
        "first note of a new line carries an octave sign"
    );
}

#[test]
fn test_line_break_resets_the_octave_reference() {
    let measures = vec![
        Measure::new(
            5,
            "1",
            1,
            vec![
                quarter(6, DiatonicPitch::C, 4),
                MeasureElement::LineBreak(LineBreak {
                    input_line: 7,
                    next_bar_number: "2".to_string(),
                }),
            ],
        ),
        Measure::new(8, "2", 2, vec![quarter(9, DiatonicPitch::D, 4)]),
    ];
    let result = transcribe(&score_of(measures), &TranslationOptions::default());

    let lines: Vec<&BsrLine> = result.score.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(note_signs(&lines[1].measures[0])[0].octave_sign);
}

#[test]
fn test_unsupported_duration_is_skipped() {
    let measure = Measure::new(
        5,
        "1",
        1,
        vec![MeasureElement::Note(Note::regular(6, DiatonicPitch::C, 4, DurationKind::Maxima))],
    );
    let result = transcribe(&score_of(vec![measure]), &TranslationOptions::default());

    assert_eq!(result.skipped_elements.len(), 1);
    assert_eq!(result.skipped_elements[0].value, "maxima");
    assert!(result.score.measures().next().expect("one measure").signs.is_empty());
}

#[test]
fn test_notes_after_a_line_break_stay_on_the_old_line() {
    let measures = vec![
        Measure::new(
            5,
            "1",
            1,
            vec![
                quarter(6, DiatonicPitch::C, 4),
                MeasureElement::LineBreak(LineBreak {
                    input_line: 7,
                    next_bar_number: "2".to_string(),
                }),
                quarter(8, DiatonicPitch::D, 4),
            ],
        ),
        Measure::new(9, "2", 2, vec![quarter(10, DiatonicPitch::E, 4)]),
    ];
    let result = transcribe(&score_of(measures), &TranslationOptions::default());

    let lines: Vec<&BsrLine> = result.score.lines().collect();
    assert_eq!(lines.len(), 2);
    let first_line: Vec<bool> = note_signs(&lines[0].measures[0]).iter().map(|note| note.octave_sign).collect();
    assert_eq!(first_line, vec![true, false]);
    assert!(
        note_signs(&lines[1].measures[0])[0].octave_sign,
        "first note of the new line carries an octave sign"
    );
}
