//! Score translators
//!
//! Each translator is an [`MsrVisitor`](crate::msr::MsrVisitor) run over
//! one score by [`msr::browse`].
//!
//! # Modules
//!
//! - **errors**: fatal translation errors
//! - **options**: configuration options
//! - **skipped**: skipped element report
//! - **msr_to_lpsr**: MSR to LilyPond Score Representation
//! - **msr_to_bsr**: MSR to Braille Score Representation

pub mod errors;
pub mod options;
pub mod skipped;
pub mod msr_to_lpsr;
pub mod msr_to_bsr;

pub use errors::{OptionsError, StructuralError, TranslationError};
pub use options::{BrailleLayout, ScoreOutputKind, TranslationOptions};
pub use skipped::{ConversionResult, SkippedElement};
pub use msr_to_bsr::BsrTranslator;
pub use msr_to_lpsr::LpsrTranslator;

use crate::bsr::BsrScore;
use crate::lpsr::LpsrScore;
use crate::msr::{self, MsrNode};

/// Open containers of a translator during a walk
///
/// Every depth is back to zero once a walk has finished.
pub trait ContextProbe {
    fn tuplet_depth(&self) -> usize;
    fn chord_open(&self) -> bool;
    fn grace_notes_group_open(&self) -> bool;
    fn double_tremolo_open(&self) -> bool;
    fn note_depth(&self) -> usize;
}

/// Translate a score to LPSR
pub fn build_lpsr_from_msr(
    score: Option<&msr::Score>,
    options: &TranslationOptions,
) -> Result<ConversionResult<LpsrScore>, TranslationError> {
    let score = score.ok_or(TranslationError::MissingScore)?;
    log::info!("building LPSR from MSR");

    let mut translator = LpsrTranslator::new(options);
    msr::browse(MsrNode::Score(score), &mut translator)?;
    translator.finish()
}

/// Translate a score to BSR
pub fn build_bsr_from_msr(
    score: Option<&msr::Score>,
    options: &TranslationOptions,
) -> Result<ConversionResult<BsrScore>, TranslationError> {
    let score = score.ok_or(TranslationError::MissingScore)?;
    log::info!("building BSR from MSR");

    let mut translator = BsrTranslator::new(options);
    msr::browse(MsrNode::Score(score), &mut translator)?;
    translator.finish()
}
