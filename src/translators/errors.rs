//! Error types for score translation
//!
//! Unsupported source values are not errors: they are reported as
//! [`SkippedElement`](super::skipped::SkippedElement)s and translation
//! goes on. The types below abort a translation.

use thiserror::Error;

/// Top-level translation error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslationError {
    /// No source score was supplied
    #[error("No source score to translate")]
    MissingScore,

    /// A node appeared where the score tree shape makes it impossible
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    /// Internal translator error (should not occur, indicates a bug)
    #[error("Internal translation error: {0}")]
    InternalError(String),
}

/// Node visited outside of the context it requires
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("chord member note at line {input_line} is not inside a chord")]
    ChordMemberOutsideChord { input_line: usize },

    #[error("chord at line {input_line} starts while another chord is open")]
    NestedChord { input_line: usize },

    #[error("grace note at line {input_line} is not inside a grace notes group")]
    GraceNoteOutsideGraceNotesGroup { input_line: usize },

    #[error("grace notes group at line {input_line} has no note or chord to attach to")]
    GraceNotesGroupWithoutNote { input_line: usize },

    #[error("grace notes group at line {input_line} starts inside another grace notes group")]
    NestedGraceNotesGroup { input_line: usize },

    #[error("tuplet member at line {input_line} is not inside a tuplet")]
    TupletMemberOutsideTuplet { input_line: usize },

    #[error("tuplet ending at line {input_line} was never started")]
    UnbalancedTuplet { input_line: usize },

    #[error("double tremolo member at line {input_line} is not inside a double tremolo")]
    TremoloMemberOutsideDoubleTremolo { input_line: usize },

    #[error("double tremolo member at line {input_line} matches neither tremolo slot")]
    TremoloMemberWithoutSlot { input_line: usize },

    #[error("double tremolo {slot} slot filled twice at line {input_line}")]
    TremoloSlotFilledTwice { input_line: usize, slot: &'static str },

    #[error("double tremolo at line {input_line} ends with an empty slot")]
    IncompleteDoubleTremolo { input_line: usize },

    #[error("double tremolo at line {input_line} starts inside another double tremolo")]
    NestedDoubleTremolo { input_line: usize },

    #[error("{element} at line {input_line} is not attached to a note")]
    AttachmentOutsideNote { element: &'static str, input_line: usize },

    #[error("syllable at line {input_line} has no enclosing voice or stanza")]
    SyllableOutsideVoice { input_line: usize },

    #[error("stanza at line {input_line} has no enclosing voice")]
    StanzaOutsideVoice { input_line: usize },

    #[error("harmony at line {input_line} has no enclosing voice")]
    HarmonyOutsideVoice { input_line: usize },

    #[error("figured bass at line {input_line} has no enclosing voice")]
    FiguredBassOutsideVoice { input_line: usize },

    #[error("{element} at line {input_line} has no enclosing measure")]
    OutsideMeasure { element: &'static str, input_line: usize },

    #[error("{element} at line {input_line} has no enclosing voice")]
    OutsideVoice { element: &'static str, input_line: usize },

    #[error("voice at line {input_line} has no enclosing staff")]
    VoiceOutsideStaff { input_line: usize },

    #[error("staff at line {input_line} has no enclosing part")]
    StaffOutsidePart { input_line: usize },

    #[error("part at line {input_line} has no enclosing part group")]
    PartOutsidePartGroup { input_line: usize },

    #[error("{element} at line {input_line} has no enclosing repeat")]
    OutsideRepeat { element: &'static str, input_line: usize },
}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("Cannot read options file: {0}")]
    Io(String),

    #[error("Invalid YAML options: {0}")]
    Yaml(String),

    #[error("Invalid JSON options: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_converts_into_translation_error() {
        let error: TranslationError = StructuralError::ChordMemberOutsideChord { input_line: 12 }.into();
        assert_eq!(
            error.to_string(),
            "Structural error: chord member note at line 12 is not inside a chord"
        );
    }
}
