//! Translation options
//!
//! One plain configuration bundle, held by each translator instance. All
//! fields have defaults, so YAML or JSON documents may set only a few.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::OptionsError;

/// Which books and score blocks the LilyPond score is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreOutputKind {
    /// The full score only
    Score,
    /// One book per part
    Parts,
    /// The full score, then one book per part
    ScoreAndParts,
    /// One book per part, then the full score
    PartsAndScore,
    /// One book: the full score then each part as book parts
    ScoreAndPartsOneFile,
    /// One book: each part then the full score as book parts
    PartsAndScoreOneFile,
    /// One book with each part as a book part
    PartsOneFile,
}

impl Default for ScoreOutputKind {
    fn default() -> Self {
        ScoreOutputKind::Score
    }
}

/// Braille page geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrailleLayout {
    pub cells_per_line: usize,
    pub lines_per_page: usize,
    /// Whether the first page carries a page heading
    pub page_heading: bool,
}

impl Default for BrailleLayout {
    fn default() -> Self {
        Self {
            cells_per_line: 40,
            lines_per_page: 25,
            page_heading: true,
        }
    }
}

/// Configuration options consumed by the translators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationOptions {
    /// Translate clefs (all clefs are dropped when false)
    pub include_clefs: bool,

    /// Drop all tempos
    pub no_tempos: bool,

    /// Show a repeat start barline for repeats that have none in the source
    pub create_implicit_initial_repeat_barline: bool,

    /// Coalesce consecutive full-measure rests into one rest-measures run
    pub compress_full_measure_rests: bool,

    /// Also attach each lyric syllable to its note as words
    pub add_words_from_lyrics: bool,

    /// Reinterpret words as tempo marks
    pub convert_words_to_tempo: bool,

    /// Reinterpret words as rehearsal marks
    pub convert_words_to_rehearsal_marks: bool,

    /// Reinterpret tempos as rehearsal marks
    pub convert_tempos_to_rehearsal_marks: bool,

    /// Turn grace notes following a trilled note into after-grace notes
    pub convert_trailing_grace_notes_to_after_grace: bool,

    /// Append a bar check after each measure
    pub insert_bar_checks: bool,

    pub score_output_kind: ScoreOutputKind,

    pub braille: BrailleLayout,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            include_clefs: true,
            no_tempos: false,
            create_implicit_initial_repeat_barline: false,
            compress_full_measure_rests: false,
            add_words_from_lyrics: false,
            convert_words_to_tempo: false,
            convert_words_to_rehearsal_marks: false,
            convert_tempos_to_rehearsal_marks: false,
            convert_trailing_grace_notes_to_after_grace: false,
            insert_bar_checks: true,
            score_output_kind: ScoreOutputKind::Score,
            braille: BrailleLayout::default(),
        }
    }
}

impl TranslationOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, OptionsError> {
        serde_yaml::from_str(yaml).map_err(|e| OptionsError::Yaml(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(json).map_err(|e| OptionsError::Json(e.to_string()))
    }

    /// Load options from a `.yaml`/`.yml` file, or JSON for any other extension
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| OptionsError::Io(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }
}
