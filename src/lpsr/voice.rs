//! LPSR voices and their builder
//!
//! A voice receives finished measures in order. Repeats arrive as
//! start/end events; nested repeats are kept on a stack until they end,
//! then land in whatever container encloses them.

use serde::Serialize;

use super::kinds::{LilypondLyricKind, LilypondVoiceContext};
use super::music::{LpsrMeasure, LpsrRestMeasures};
use crate::msr::{RepeatEndingKind, SyllableExtend, VoiceKind};
use crate::translators::errors::{StructuralError, TranslationError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VoiceContent {
    Measure(LpsrMeasure),
    RestMeasures(LpsrRestMeasures),
    Repeat(LpsrRepeat),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrRepeatEnding {
    pub input_line: usize,
    pub number: String,
    pub kind: RepeatEndingKind,
    pub last_in_sequence: bool,
    pub elements: Vec<VoiceContent>,
}

/// `\repeat volta n { common part } \alternative { endings }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrRepeat {
    pub input_line: usize,
    pub times: u32,
    pub common_part: Vec<VoiceContent>,
    pub endings: Vec<LpsrRepeatEnding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatPhase {
    Started,
    CommonPart,
    BetweenParts,
    Ending,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingRepeat {
    repeat: LpsrRepeat,
    phase: RepeatPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrSyllable {
    pub input_line: usize,
    pub kind: LilypondLyricKind,
    pub text: String,
    /// `__` extender follows the syllable
    pub extender: bool,
    /// Sung under an extender opened by an earlier syllable
    pub held: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrStanza {
    pub input_line: usize,
    pub number: String,
    pub name: Option<String>,
    /// Name of the `\lyricmode` variable
    pub lyrics_name: String,
    pub syllables: Vec<LpsrSyllable>,
    /// An extender is running until a stop or single syllable
    #[serde(skip)]
    extend_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LpsrVoice {
    pub input_line: usize,
    /// LilyPond variable name, e.g. `Part_P1_Staff_1_Voice_1`
    pub name: String,
    pub number: u32,
    pub kind: VoiceKind,
    pub context: LilypondVoiceContext,
    pub elements: Vec<VoiceContent>,
    pub stanzas: Vec<LpsrStanza>,
    #[serde(skip)]
    pending_repeats: Vec<PendingRepeat>,
}

impl LpsrVoice {
    pub fn new(
        input_line: usize,
        part_id: &str,
        staff_number: u32,
        number: u32,
        kind: VoiceKind,
        context: LilypondVoiceContext,
    ) -> Self {
        let suffix = match kind {
            VoiceKind::Regular => "Voice",
            VoiceKind::Harmony => "HarmonyVoice",
            VoiceKind::FiguredBass => "FiguredBassVoice",
        };
        Self {
            input_line,
            name: format!(
                "Part_{}_Staff_{}_{}_{}",
                sanitize_name(part_id),
                staff_number,
                suffix,
                number
            ),
            number,
            kind,
            context,
            elements: Vec::new(),
            stanzas: Vec::new(),
            pending_repeats: Vec::new(),
        }
    }

    fn current_container(&mut self) -> &mut Vec<VoiceContent> {
        match self.pending_repeats.last_mut() {
            Some(pending) => match pending.phase {
                RepeatPhase::Ending => match pending.repeat.endings.last_mut() {
                    Some(ending) => &mut ending.elements,
                    None => &mut pending.repeat.common_part,
                },
                _ => &mut pending.repeat.common_part,
            },
            None => &mut self.elements,
        }
    }

    pub fn append_measure(&mut self, measure: LpsrMeasure) {
        self.current_container().push(VoiceContent::Measure(measure));
    }

    /// Append a full-measure rests run; a run of one stays a plain measure
    pub fn append_rest_measures(&mut self, mut measures: Vec<LpsrMeasure>) {
        match measures.len() {
            0 => {}
            1 => {
                if let Some(measure) = measures.pop() {
                    self.append_measure(measure);
                }
            }
            count => {
                let input_line = measures[0].input_line;
                log::debug!("Voice {}: {} rest measures compressed", self.name, count);
                self.current_container()
                    .push(VoiceContent::RestMeasures(LpsrRestMeasures {
                        input_line,
                        count,
                        measures,
                    }));
            }
        }
    }

    pub fn handle_repeat_start(&mut self, input_line: usize) {
        log::debug!("Voice {}: repeat start at line {}", self.name, input_line);
        self.pending_repeats.push(PendingRepeat {
            repeat: LpsrRepeat {
                input_line,
                times: 2,
                common_part: Vec::new(),
                endings: Vec::new(),
            },
            phase: RepeatPhase::Started,
        });
    }

    pub fn handle_repeat_common_part_start(&mut self, input_line: usize) -> Result<(), TranslationError> {
        self.pending_mut("repeat common part", input_line)?.phase = RepeatPhase::CommonPart;
        Ok(())
    }

    pub fn handle_repeat_common_part_end(&mut self, input_line: usize) -> Result<(), TranslationError> {
        self.pending_mut("repeat common part", input_line)?.phase = RepeatPhase::BetweenParts;
        Ok(())
    }

    pub fn handle_repeat_ending_start(
        &mut self,
        input_line: usize,
        number: &str,
        kind: RepeatEndingKind,
        last_in_sequence: bool,
    ) -> Result<(), TranslationError> {
        let pending = self.pending_mut("repeat ending", input_line)?;
        pending.repeat.endings.push(LpsrRepeatEnding {
            input_line,
            number: number.to_string(),
            kind,
            last_in_sequence,
            elements: Vec::new(),
        });
        pending.phase = RepeatPhase::Ending;
        Ok(())
    }

    pub fn handle_repeat_ending_end(&mut self, input_line: usize) -> Result<(), TranslationError> {
        self.pending_mut("repeat ending", input_line)?.phase = RepeatPhase::BetweenParts;
        Ok(())
    }

    /// Close the innermost repeat and append it to its enclosing container
    pub fn handle_repeat_end(&mut self, input_line: usize, times: u32) -> Result<(), TranslationError> {
        let mut pending = self.pending_repeats.pop().ok_or(StructuralError::OutsideRepeat {
            element: "repeat end",
            input_line,
        })?;
        pending.repeat.times = times;
        log::debug!(
            "Voice {}: repeat end at line {} ({} endings)",
            self.name,
            input_line,
            pending.repeat.endings.len()
        );
        self.current_container().push(VoiceContent::Repeat(pending.repeat));
        Ok(())
    }

    fn pending_mut(&mut self, element: &'static str, input_line: usize) -> Result<&mut PendingRepeat, TranslationError> {
        self.pending_repeats
            .last_mut()
            .ok_or_else(|| StructuralError::OutsideRepeat { element, input_line }.into())
    }

    pub fn repeat_depth(&self) -> usize {
        self.pending_repeats.len()
    }

    /// First measure in voice order, looking inside repeats
    pub fn first_measure_mut(&mut self) -> Option<&mut LpsrMeasure> {
        fn first_in(elements: &mut [VoiceContent]) -> Option<&mut LpsrMeasure> {
            for element in elements.iter_mut() {
                let found = match element {
                    VoiceContent::Measure(measure) => Some(measure),
                    VoiceContent::RestMeasures(run) => run.measures.first_mut(),
                    VoiceContent::Repeat(repeat) => {
                        if repeat.common_part.is_empty() {
                            repeat
                                .endings
                                .first_mut()
                                .and_then(|ending| first_in(&mut ending.elements))
                        } else {
                            first_in(&mut repeat.common_part)
                        }
                    }
                };
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        first_in(&mut self.elements)
    }

    /// Last measure appended to the current container or its parents
    pub fn last_measure_mut(&mut self) -> Option<&mut LpsrMeasure> {
        fn last_in(elements: &mut [VoiceContent]) -> Option<&mut LpsrMeasure> {
            for element in elements.iter_mut().rev() {
                let found = match element {
                    VoiceContent::Measure(measure) => Some(measure),
                    VoiceContent::RestMeasures(run) => run.measures.last_mut(),
                    VoiceContent::Repeat(repeat) => match repeat.endings.last_mut() {
                        Some(ending) => last_in(&mut ending.elements),
                        None => last_in(&mut repeat.common_part),
                    },
                };
                if found.is_some() {
                    return found;
                }
            }
            None
        }

        if !self.current_container().is_empty() {
            return last_in(self.current_container());
        }
        last_in(&mut self.elements)
    }

    /// Every measure in voice order, repeat parts included
    pub fn measures(&self) -> Vec<&LpsrMeasure> {
        fn collect<'a>(elements: &'a [VoiceContent], measures: &mut Vec<&'a LpsrMeasure>) {
            for element in elements {
                match element {
                    VoiceContent::Measure(measure) => measures.push(measure),
                    VoiceContent::RestMeasures(run) => measures.extend(run.measures.iter()),
                    VoiceContent::Repeat(repeat) => {
                        collect(&repeat.common_part, measures);
                        for ending in &repeat.endings {
                            collect(&ending.elements, measures);
                        }
                    }
                }
            }
        }

        let mut measures = Vec::new();
        collect(&self.elements, &mut measures);
        measures
    }
}

impl LpsrStanza {
    pub fn new(input_line: usize, voice_name: &str, number: &str, name: Option<String>) -> Self {
        Self {
            input_line,
            number: number.to_string(),
            name,
            lyrics_name: format!("{}_Stanza_{}", voice_name, sanitize_name(number)),
            syllables: Vec::new(),
            extend_open: false,
        }
    }

    /// Append a syllable; `extend` drives the `__` extender
    pub fn append_syllable(
        &mut self,
        input_line: usize,
        kind: LilypondLyricKind,
        text: String,
        extend: SyllableExtend,
    ) {
        let (extender, held) = match extend {
            SyllableExtend::Single => (false, false),
            SyllableExtend::Start => (true, false),
            // a continue with nothing open starts the extender itself
            SyllableExtend::Continue => (!self.extend_open, self.extend_open),
            SyllableExtend::Stop => (false, self.extend_open),
        };
        self.extend_open = matches!(extend, SyllableExtend::Start | SyllableExtend::Continue);
        self.syllables.push(LpsrSyllable {
            input_line,
            kind,
            text,
            extender,
            held,
        });
    }
}

/// LilyPond variable names accept letters, digits and underscores only
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msr::MeasureKind;
    use crate::Rational;

    fn measure(number: &str) -> LpsrMeasure {
        LpsrMeasure {
            input_line: 1,
            number: number.to_string(),
            purist_number: number.parse().unwrap_or(0),
            kind: MeasureKind::Regular,
            full_length: Rational::new(1, 1),
            elements: Vec::new(),
        }
    }

    fn voice() -> LpsrVoice {
        LpsrVoice::new(1, "P1", 1, 1, VoiceKind::Regular, LilypondVoiceContext::Voice)
    }

    #[test]
    fn test_voice_name() {
        assert_eq!(voice().name, "Part_P1_Staff_1_Voice_1");
    }

    #[test]
    fn test_repeat_collects_common_part_and_endings() {
        let mut voice = voice();
        voice.append_measure(measure("1"));
        voice.handle_repeat_start(2);
        voice.handle_repeat_common_part_start(2).unwrap();
        voice.append_measure(measure("2"));
        voice.handle_repeat_common_part_end(2).unwrap();
        voice.handle_repeat_ending_start(3, "1", RepeatEndingKind::Hooked, false).unwrap();
        voice.append_measure(measure("3"));
        voice.handle_repeat_ending_end(3).unwrap();
        voice.handle_repeat_ending_start(4, "2", RepeatEndingKind::Hookless, true).unwrap();
        voice.append_measure(measure("4"));
        voice.handle_repeat_ending_end(4).unwrap();
        voice.handle_repeat_end(4, 2).unwrap();

        assert_eq!(voice.elements.len(), 2);
        match &voice.elements[1] {
            VoiceContent::Repeat(repeat) => {
                assert_eq!(repeat.common_part.len(), 1);
                assert_eq!(repeat.endings.len(), 2);
                assert!(repeat.endings[1].last_in_sequence);
            }
            other => panic!("expected a repeat, got {:?}", other),
        }
        assert_eq!(voice.repeat_depth(), 0);
    }

    #[test]
    fn test_nested_repeat_lands_in_enclosing_common_part() {
        let mut voice = voice();
        voice.handle_repeat_start(1);
        voice.handle_repeat_common_part_start(1).unwrap();
        voice.handle_repeat_start(2);
        voice.handle_repeat_common_part_start(2).unwrap();
        voice.append_measure(measure("1"));
        voice.handle_repeat_common_part_end(2).unwrap();
        voice.handle_repeat_end(2, 2).unwrap();
        voice.handle_repeat_common_part_end(3).unwrap();
        voice.handle_repeat_end(3, 3).unwrap();

        assert_eq!(voice.elements.len(), 1);
        let VoiceContent::Repeat(outer) = &voice.elements[0] else {
            panic!("expected a repeat");
        };
        assert_eq!(outer.times, 3);
        assert!(matches!(outer.common_part[0], VoiceContent::Repeat(_)));
    }

    #[test]
    fn test_repeat_end_without_start_is_structural() {
        let mut voice = voice();
        let result = voice.handle_repeat_end(7, 2);
        assert_eq!(
            result,
            Err(TranslationError::Structural(StructuralError::OutsideRepeat {
                element: "repeat end",
                input_line: 7,
            }))
        );
    }

    #[test]
    fn test_extender_state_runs_across_syllables() {
        let mut stanza = LpsrStanza::new(1, "Part_P1_Staff_1_Voice_1", "1", None);
        let extends = [
            SyllableExtend::Start,
            SyllableExtend::Continue,
            SyllableExtend::Stop,
            SyllableExtend::Single,
            SyllableExtend::Continue,
        ];
        for (i, extend) in extends.into_iter().enumerate() {
            stanza.append_syllable(i + 2, LilypondLyricKind::Single, format!("s{}", i), extend);
        }

        let extenders: Vec<bool> = stanza.syllables.iter().map(|s| s.extender).collect();
        let held: Vec<bool> = stanza.syllables.iter().map(|s| s.held).collect();
        assert_eq!(extenders, vec![true, false, false, false, true]);
        assert_eq!(held, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_single_rest_measure_is_not_compressed() {
        let mut voice = voice();
        voice.append_rest_measures(vec![measure("1")]);
        voice.append_rest_measures(vec![measure("2"), measure("3"), measure("4")]);

        assert!(matches!(voice.elements[0], VoiceContent::Measure(_)));
        match &voice.elements[1] {
            VoiceContent::RestMeasures(run) => {
                assert_eq!(run.count, 3);
                assert_eq!(run.first_measure_number(), Some("2"));
            }
            other => panic!("expected rest measures, got {:?}", other),
        }
        assert_eq!(voice.measures().len(), 4);
    }
}
