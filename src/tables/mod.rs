//! Lookup tables from MSR values to target notation values
//!
//! Every function returns `None` for a value the target cannot express;
//! the translators turn that into a skipped element.

pub mod lilypond;
pub mod braille;
pub mod braille_values;
