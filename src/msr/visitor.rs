//! Depth-first traversal of the Score Model
//!
//! Every visitable node kind is one variant of [`MsrNode`]. [`browse`]
//! brackets each node with `visit_start` / `visit_end`, visiting the
//! children in between in their stored order. Leaf nodes get the same
//! pair with nothing in between.

use super::elements::*;
use super::score::*;
use crate::translators::errors::TranslationError;

/// Borrowed view of one visitable Score Model node
#[derive(Debug, Clone, Copy)]
pub enum MsrNode<'a> {
    Score(&'a Score),
    PartGroup(&'a PartGroup),
    Part(&'a Part),
    Staff(&'a Staff),
    StaffTuning(&'a StaffTuning),
    Voice(&'a Voice),
    Segment(&'a Segment),
    Repeat(&'a Repeat),
    RepeatCommonPart(&'a RepeatCommonPart),
    RepeatEnding {
        ending: &'a RepeatEnding,
        last_in_sequence: bool,
    },
    Measure(&'a Measure),
    Clef(&'a Clef),
    Key(&'a Key),
    Time(&'a Time),
    Note(&'a Note),
    Chord(&'a Chord),
    Tuplet(&'a Tuplet),
    GraceNotesGroup(&'a GraceNotesGroup),
    DoubleTremolo(&'a DoubleTremolo),
    Barline(&'a Barline),
    Tempo(&'a Tempo),
    RehearsalMark(&'a RehearsalMark),
    LineBreak(&'a LineBreak),
    PageBreak(&'a PageBreak),
    Harmony(&'a Harmony),
    FiguredBass(&'a FiguredBass),
    Articulation(&'a Articulation),
    Technical(&'a Technical),
    Ornament(&'a Ornament),
    Dynamics(&'a Dynamics),
    OtherDynamics(&'a OtherDynamics),
    Words(&'a Words),
    Wedge(&'a Wedge),
    Glissando(&'a Glissando),
    Stanza(&'a Stanza),
    Syllable(&'a Syllable),
}

impl<'a> MsrNode<'a> {
    /// Node kind name, for logs and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            MsrNode::Score(_) => "score",
            MsrNode::PartGroup(_) => "part group",
            MsrNode::Part(_) => "part",
            MsrNode::Staff(_) => "staff",
            MsrNode::StaffTuning(_) => "staff tuning",
            MsrNode::Voice(_) => "voice",
            MsrNode::Segment(_) => "segment",
            MsrNode::Repeat(_) => "repeat",
            MsrNode::RepeatCommonPart(_) => "repeat common part",
            MsrNode::RepeatEnding { .. } => "repeat ending",
            MsrNode::Measure(_) => "measure",
            MsrNode::Clef(_) => "clef",
            MsrNode::Key(_) => "key",
            MsrNode::Time(_) => "time",
            MsrNode::Note(_) => "note",
            MsrNode::Chord(_) => "chord",
            MsrNode::Tuplet(_) => "tuplet",
            MsrNode::GraceNotesGroup(_) => "grace notes group",
            MsrNode::DoubleTremolo(_) => "double tremolo",
            MsrNode::Barline(_) => "barline",
            MsrNode::Tempo(_) => "tempo",
            MsrNode::RehearsalMark(_) => "rehearsal mark",
            MsrNode::LineBreak(_) => "line break",
            MsrNode::PageBreak(_) => "page break",
            MsrNode::Harmony(_) => "harmony",
            MsrNode::FiguredBass(_) => "figured bass",
            MsrNode::Articulation(_) => "articulation",
            MsrNode::Technical(_) => "technical",
            MsrNode::Ornament(_) => "ornament",
            MsrNode::Dynamics(_) => "dynamics",
            MsrNode::OtherDynamics(_) => "other dynamics",
            MsrNode::Words(_) => "words",
            MsrNode::Wedge(_) => "wedge",
            MsrNode::Glissando(_) => "glissando",
            MsrNode::Stanza(_) => "stanza",
            MsrNode::Syllable(_) => "syllable",
        }
    }

    /// Source line the node was built from (0 for the score root)
    pub fn input_line(&self) -> usize {
        match self {
            MsrNode::Score(_) => 0,
            MsrNode::PartGroup(n) => n.input_line,
            MsrNode::Part(n) => n.input_line,
            MsrNode::Staff(n) => n.input_line,
            MsrNode::StaffTuning(n) => n.input_line,
            MsrNode::Voice(n) => n.input_line,
            MsrNode::Segment(n) => n.input_line,
            MsrNode::Repeat(n) => n.input_line,
            MsrNode::RepeatCommonPart(n) => n.input_line,
            MsrNode::RepeatEnding { ending, .. } => ending.input_line,
            MsrNode::Measure(n) => n.input_line,
            MsrNode::Clef(n) => n.input_line,
            MsrNode::Key(n) => n.input_line,
            MsrNode::Time(n) => n.input_line,
            MsrNode::Note(n) => n.input_line,
            MsrNode::Chord(n) => n.input_line,
            MsrNode::Tuplet(n) => n.input_line,
            MsrNode::GraceNotesGroup(n) => n.input_line,
            MsrNode::DoubleTremolo(n) => n.input_line,
            MsrNode::Barline(n) => n.input_line,
            MsrNode::Tempo(n) => n.input_line,
            MsrNode::RehearsalMark(n) => n.input_line,
            MsrNode::LineBreak(n) => n.input_line,
            MsrNode::PageBreak(n) => n.input_line,
            MsrNode::Harmony(n) => n.input_line,
            MsrNode::FiguredBass(n) => n.input_line,
            MsrNode::Articulation(n) => n.input_line,
            MsrNode::Technical(n) => n.input_line,
            MsrNode::Ornament(n) => n.input_line,
            MsrNode::Dynamics(n) => n.input_line,
            MsrNode::OtherDynamics(n) => n.input_line,
            MsrNode::Words(n) => n.input_line,
            MsrNode::Wedge(n) => n.input_line,
            MsrNode::Glissando(n) => n.input_line,
            MsrNode::Stanza(n) => n.input_line,
            MsrNode::Syllable(n) => n.input_line,
        }
    }

    /// Children in visiting order
    pub fn children(&self) -> Vec<MsrNode<'a>> {
        match *self {
            MsrNode::Score(score) => score.part_groups.iter().map(MsrNode::PartGroup).collect(),
            MsrNode::PartGroup(group) => group
                .elements
                .iter()
                .map(|element| match element {
                    PartGroupElement::Part(part) => MsrNode::Part(part),
                    PartGroupElement::PartGroup(nested) => MsrNode::PartGroup(nested),
                })
                .collect(),
            MsrNode::Part(part) => part.staves.iter().map(MsrNode::Staff).collect(),
            MsrNode::Staff(staff) => staff
                .tunings
                .iter()
                .map(MsrNode::StaffTuning)
                .chain(staff.voices.iter().map(MsrNode::Voice))
                .collect(),
            MsrNode::Voice(voice) => voice_elements(&voice.elements)
                .chain(voice.stanzas.iter().map(MsrNode::Stanza))
                .collect(),
            MsrNode::Segment(segment) => segment.measures.iter().map(MsrNode::Measure).collect(),
            MsrNode::Repeat(repeat) => {
                let count = repeat.endings.len();
                std::iter::once(MsrNode::RepeatCommonPart(&repeat.common_part))
                    .chain(repeat.endings.iter().enumerate().map(|(i, ending)| {
                        MsrNode::RepeatEnding {
                            ending,
                            last_in_sequence: i + 1 == count,
                        }
                    }))
                    .collect()
            }
            MsrNode::RepeatCommonPart(common) => voice_elements(&common.elements).collect(),
            MsrNode::RepeatEnding { ending, .. } => voice_elements(&ending.elements).collect(),
            MsrNode::Measure(measure) => measure.elements.iter().map(measure_element).collect(),
            MsrNode::Note(note) => note_children(note),
            MsrNode::Chord(chord) => {
                let mut children = Vec::new();
                if let Some(group) = &chord.grace_before {
                    children.push(MsrNode::GraceNotesGroup(group));
                }
                children.extend(chord.notes.iter().map(MsrNode::Note));
                if let Some(group) = &chord.grace_after {
                    children.push(MsrNode::GraceNotesGroup(group));
                }
                children
            }
            MsrNode::Tuplet(tuplet) => tuplet
                .elements
                .iter()
                .map(|element| match element {
                    TupletElement::Note(note) => MsrNode::Note(note),
                    TupletElement::Chord(chord) => MsrNode::Chord(chord),
                    TupletElement::Tuplet(nested) => MsrNode::Tuplet(nested),
                })
                .collect(),
            MsrNode::GraceNotesGroup(group) => group
                .elements
                .iter()
                .map(|element| match element {
                    GraceElement::Note(note) => MsrNode::Note(note),
                    GraceElement::Chord(chord) => MsrNode::Chord(chord),
                    GraceElement::Tuplet(tuplet) => MsrNode::Tuplet(tuplet),
                })
                .collect(),
            MsrNode::DoubleTremolo(tremolo) => [&tremolo.first, &tremolo.second]
                .into_iter()
                .map(|element| match element {
                    TremoloElement::Note(note) => MsrNode::Note(note),
                    TremoloElement::Chord(chord) => MsrNode::Chord(chord),
                })
                .collect(),
            MsrNode::Stanza(stanza) => stanza.syllables.iter().map(MsrNode::Syllable).collect(),
            MsrNode::StaffTuning(_)
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
            | MsrNode::Syllable(_) => Vec::new(),
        }
    }
}

fn voice_elements(elements: &[VoiceElement]) -> impl Iterator<Item = MsrNode<'_>> {
    elements.iter().map(|element| match element {
        VoiceElement::Segment(segment) => MsrNode::Segment(segment),
        VoiceElement::Repeat(repeat) => MsrNode::Repeat(repeat),
    })
}

fn measure_element(element: &MeasureElement) -> MsrNode<'_> {
    match element {
        MeasureElement::Clef(clef) => MsrNode::Clef(clef),
        MeasureElement::Key(key) => MsrNode::Key(key),
        MeasureElement::Time(time) => MsrNode::Time(time),
        MeasureElement::Note(note) => MsrNode::Note(note),
        MeasureElement::Chord(chord) => MsrNode::Chord(chord),
        MeasureElement::Tuplet(tuplet) => MsrNode::Tuplet(tuplet),
        MeasureElement::DoubleTremolo(tremolo) => MsrNode::DoubleTremolo(tremolo),
        MeasureElement::Barline(barline) => MsrNode::Barline(barline),
        MeasureElement::Tempo(tempo) => MsrNode::Tempo(tempo),
        MeasureElement::RehearsalMark(mark) => MsrNode::RehearsalMark(mark),
        MeasureElement::LineBreak(line_break) => MsrNode::LineBreak(line_break),
        MeasureElement::PageBreak(page_break) => MsrNode::PageBreak(page_break),
        MeasureElement::Harmony(harmony) => MsrNode::Harmony(harmony),
        MeasureElement::FiguredBass(figured_bass) => MsrNode::FiguredBass(figured_bass),
    }
}

fn note_children(note: &Note) -> Vec<MsrNode<'_>> {
    let mut children = Vec::new();
    if let Some(group) = &note.grace_before {
        children.push(MsrNode::GraceNotesGroup(group));
    }
    children.extend(note.articulations.iter().map(MsrNode::Articulation));
    children.extend(note.technicals.iter().map(MsrNode::Technical));
    children.extend(note.ornaments.iter().map(MsrNode::Ornament));
    children.extend(note.dynamics.iter().map(MsrNode::Dynamics));
    children.extend(note.other_dynamics.iter().map(MsrNode::OtherDynamics));
    children.extend(note.words.iter().map(MsrNode::Words));
    children.extend(note.wedges.iter().map(MsrNode::Wedge));
    children.extend(note.glissandos.iter().map(MsrNode::Glissando));
    children.extend(note.syllables.iter().map(MsrNode::Syllable));
    if let Some(group) = &note.grace_after {
        children.push(MsrNode::GraceNotesGroup(group));
    }
    children
}

/// Start/end callbacks invoked by [`browse`]
pub trait MsrVisitor {
    fn visit_start(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError>;
    fn visit_end(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError>;
}

/// Walk `node` and its subtree exactly once, depth-first.
///
/// The first error returned by the visitor aborts the walk.
pub fn browse<V: MsrVisitor + ?Sized>(node: MsrNode<'_>, visitor: &mut V) -> Result<(), TranslationError> {
    log::trace!("--> start {} (line {})", node.kind_name(), node.input_line());
    visitor.visit_start(node)?;

    for child in node.children() {
        browse(child, visitor)?;
    }

    log::trace!("<-- end {} (line {})", node.kind_name(), node.input_line());
    visitor.visit_end(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msr::kinds::*;

    /// Records the bracketing of every visited node
    struct Recorder {
        events: Vec<String>,
    }

    impl MsrVisitor for Recorder {
        fn visit_start(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
            self.events.push(format!("+{}", node.kind_name()));
            Ok(())
        }

        fn visit_end(&mut self, node: MsrNode<'_>) -> Result<(), TranslationError> {
            self.events.push(format!("-{}", node.kind_name()));
            Ok(())
        }
    }

    #[test]
    fn test_leaf_nodes_get_start_then_end() {
        let clef = Clef::new(3, ClefKind::Treble);
        let mut recorder = Recorder { events: Vec::new() };
        browse(MsrNode::Clef(&clef), &mut recorder).unwrap();
        assert_eq!(recorder.events, vec!["+clef", "-clef"]);
    }

    #[test]
    fn test_note_children_are_bracketed_inside_the_note() {
        let mut note = Note::regular(10, DiatonicPitch::C, 4, DurationKind::Quarter);
        note.dynamics.push(Dynamics::new(10, DynamicsKind::P));
        note.grace_before = Some(Box::new(GraceNotesGroup::new(
            9,
            GraceNotesGroupKind::Before,
            vec![GraceElement::Note(
                Note::regular(9, DiatonicPitch::D, 4, DurationKind::Eighth).with_kind(NoteKind::Grace),
            )],
        )));

        let mut recorder = Recorder { events: Vec::new() };
        browse(MsrNode::Note(&note), &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec![
                "+note",
                "+grace notes group",
                "+note",
                "-note",
                "-grace notes group",
                "+dynamics",
                "-dynamics",
                "-note",
            ]
        );
    }

    #[test]
    fn test_last_repeat_ending_is_flagged() {
        let ending = |number: &str| RepeatEnding {
            input_line: 1,
            number: number.to_string(),
            kind: RepeatEndingKind::Hooked,
            elements: Vec::new(),
        };
        let repeat = Repeat {
            input_line: 1,
            times: 2,
            implicit_start: false,
            common_part: RepeatCommonPart {
                input_line: 1,
                elements: Vec::new(),
            },
            endings: vec![ending("1"), ending("2")],
        };

        let flags: Vec<bool> = MsrNode::Repeat(&repeat)
            .children()
            .into_iter()
            .filter_map(|child| match child {
                MsrNode::RepeatEnding { last_in_sequence, .. } => Some(last_in_sequence),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![false, true]);
    }
}
