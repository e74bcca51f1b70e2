use notation_translator::lpsr::{Music, VoiceContent};
use notation_translator::msr::*;
use notation_translator::translators::{BsrTranslator, LpsrTranslator};
use notation_translator::{ContextProbe, TranslationError, TranslationOptions};

/// Open-container state of a translator at one point of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    tuplet_depth: usize,
    chord_open: bool,
    grace_open: bool,
    tremolo_open: bool,
    note_depth: usize,
}

fn snapshot<T: ContextProbe>(translator: &T) -> Snapshot {
    Snapshot {
        tuplet_depth: translator.tuplet_depth(),
        chord_open: translator.chord_open(),
        grace_open: translator.grace_notes_group_open(),
        tremolo_open: translator.double_tremolo_open(),
        note_depth: translator.note_depth(),
    }
}

/// Wraps a translator and checks that each container pair leaves its
/// context state as it found it
struct BalanceChecker<T> {
    inner: T,
    before: Vec<(&'static str, Snapshot)>,
    checked_pairs: usize,
}

impl<T> BalanceChecker<T> {
    fn new(inner: T) -> Self {
        Self {
            inner,
            before: Vec::new(),
            checked_pairs: 0,
        }
    }
}

fn is_container(node: &MsrNode<'_>) -> bool {
    matches!(
        node,
        MsrNode::Note(_) | MsrNode::Chord(_) | MsrNode::Tuplet(_) | MsrNode::GraceNotesGroup(_) | MsrNode::DoubleTremolo(_)
    )
}

impl<T: MsrVisitor + ContextProbe> MsrVisitor for BalanceChecker<T> {
    fn visit_start(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        if is_container(&node) {
            self.before.push((node.kind_name(), snapshot(&self.inner)));
        }
        self.inner.visit_start(node)
    }

    fn visit_end(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
        self.inner.visit_end(node)?;
        if is_container(&node) {
            let (kind, before) = self.before.pop().expect("container end without start");
            assert_eq!(kind, node.kind_name());
            assert_eq!(
                before,
                snapshot(&self.inner),
                "{} at line {} left its context changed",
                kind,
                node.input_line()
            );
            self.checked_pairs += 1;
        }
        Ok(())
    }
}

fn chord_member(input_line: usize, step: DiatonicPitch) -> Note {
    Note::regular(input_line, step, 4, DurationKind::Eighth).with_kind(NoteKind::ChordMember)
}

fn tremolo_member(input_line: usize, step: DiatonicPitch, position: TremoloPosition) -> Note {
    let mut note = Note::regular(input_line, step, 4, DurationKind::Eighth).with_kind(NoteKind::DoubleTremoloMember);
    note.tremolo_position = Some(position);
    note
}

/// One measure holding a nested tuplet, a chord with grace notes and a
/// double tremolo
fn nested_score() -> Score {
    let inner = Tuplet::new(
        11,
        3,
        2,
        vec![
            TupletElement::Note(Note::regular(12, DiatonicPitch::D, 4, DurationKind::D16th).with_kind(NoteKind::TupletMember)),
            TupletElement::Note(Note::regular(13, DiatonicPitch::E, 4, DurationKind::D16th).with_kind(NoteKind::TupletMember)),
            TupletElement::Note(Note::regular(14, DiatonicPitch::F, 4, DurationKind::D16th).with_kind(NoteKind::TupletMember)),
        ],
    );
    let outer = Tuplet::new(
        10,
        3,
        2,
        vec![
            TupletElement::Note(Note::regular(10, DiatonicPitch::C, 4, DurationKind::Eighth).with_kind(NoteKind::TupletMember)),
            TupletElement::Tuplet(inner),
            TupletElement::Note(Note::regular(15, DiatonicPitch::G, 4, DurationKind::Eighth).with_kind(NoteKind::TupletMember)),
        ],
    );

    let mut chord = Chord::new(20, vec![chord_member(20, DiatonicPitch::C), chord_member(20, DiatonicPitch::E)]);
    chord.grace_before = Some(Box::new(GraceNotesGroup::new(
        19,
        GraceNotesGroupKind::Before,
        vec![GraceElement::Note(
            Note::regular(19, DiatonicPitch::B, 3, DurationKind::D16th).with_kind(NoteKind::Grace),
        )],
    )));

    let tremolo = DoubleTremolo {
        input_line: 30,
        marks: 2,
        first: TremoloElement::Note(tremolo_member(30, DiatonicPitch::C, TremoloPosition::First)),
        second: TremoloElement::Note(tremolo_member(31, DiatonicPitch::G, TremoloPosition::Second)),
    };

    let measure = Measure::new(
        5,
        "1",
        1,
        vec![
            MeasureElement::Tuplet(outer),
            MeasureElement::Chord(chord),
            MeasureElement::DoubleTremolo(tremolo),
        ],
    );
    single_voice_score(vec![measure])
}

fn single_voice_score(measures: Vec<Measure>) -> Score {
    let voice = Voice::with_measures(4, 1, measures);
    let staff = Staff::new(3, 1, StaffKind::Regular, vec![voice]);
    Score::new(
        Identification::default(),
        vec![PartGroup::new(1, 1, vec![PartGroupElement::Part(Part::new(2, "P1", vec![staff]))])],
    )
}

#[test]
fn test_lpsr_container_pairs_are_balanced() {
    let options = TranslationOptions::default();
    let score = nested_score();
    let mut checker = BalanceChecker::new(LpsrTranslator::new(&options));

    browse(MsrNode::Score(&score), &mut checker).expect("translation succeeds");
    assert!(checker.checked_pairs >= 12, "only {} pairs checked", checker.checked_pairs);
    assert_eq!(snapshot(&checker.inner), snapshot(&LpsrTranslator::new(&options)));
    checker.inner.finish().expect("score built");
}

#[test]
fn test_bsr_container_pairs_are_balanced() {
    let options = TranslationOptions::default();
    let score = nested_score();
    let mut checker = BalanceChecker::new(BsrTranslator::new(&options));

    browse(MsrNode::Score(&score), &mut checker).expect("translation succeeds");
    assert!(checker.checked_pairs >= 12, "only {} pairs checked", checker.checked_pairs);
    checker.inner.finish().expect("score built");
}

#[test]
fn test_measure_and_note_order_is_preserved() {
    let steps = [DiatonicPitch::E, DiatonicPitch::C, DiatonicPitch::G, DiatonicPitch::D];
    let measures: Vec<Measure> = (1..=3)
        .map(|n| {
            let notes = steps
                .iter()
                .enumerate()
                .map(|(i, &step)| MeasureElement::Note(Note::regular(n * 10 + i, step, 4, DurationKind::Quarter)))
                .collect();
            Measure::new(n * 10, &n.to_string(), n as u32, notes)
        })
        .collect();
    let score = single_voice_score(measures);

    let result = notation_translator::build_lpsr_from_msr(Some(&score), &TranslationOptions::default())
        .expect("translation succeeds");
    let voices = result.score.voices();
    let numbers: Vec<&str> = voices[0].measures().iter().map(|m| m.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
    for measure in voices[0].measures() {
        let got: Vec<DiatonicPitch> = measure.notes().map(|note| note.pitch.step).collect();
        assert_eq!(got, steps.to_vec(), "measure {}", measure.number);
    }
    assert!(matches!(voices[0].elements[0], VoiceContent::Measure(_)));

    let braille = notation_translator::build_bsr_from_msr(Some(&score), &TranslationOptions::default())
        .expect("translation succeeds");
    let numbers: Vec<&str> = braille.score.measures().map(|m| m.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
}

#[test]
fn test_nested_tuplet_lands_in_its_parent() {
    let result = notation_translator::build_lpsr_from_msr(Some(&nested_score()), &TranslationOptions::default())
        .expect("translation succeeds");
    let voices = result.score.voices();
    let measure = voices[0].measures()[0];

    let Some(Music::Tuplet(outer)) = measure.elements.first() else {
        panic!("first element should be the outer tuplet: {:?}", measure.elements.first());
    };
    assert_eq!(outer.elements.len(), 3);
    assert!(matches!(
        &outer.elements[1],
        notation_translator::lpsr::LpsrTupletElement::Tuplet(inner) if inner.elements.len() == 3
    ));
}
