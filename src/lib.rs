//! Music notation translators
//!
//! Translates a Music Score Representation (MSR) tree into a LilyPond
//! Score Representation (LPSR) or a Braille Score Representation (BSR).
//! Both translations are single depth-first walks of the source tree,
//! reporting the constructs their target cannot express as skipped
//! elements.

#[macro_use]
mod macros;

pub mod msr;
pub mod lpsr;
pub mod bsr;
pub mod tables;
pub mod translators;

/// Whole-note fractions used for sounding durations
pub type Rational = num_rational::Rational32;

// Re-export commonly used types
pub use translators::{
    build_bsr_from_msr, build_lpsr_from_msr, ContextProbe, ConversionResult, ScoreOutputKind,
    SkippedElement, StructuralError, TranslationError, TranslationOptions,
};
