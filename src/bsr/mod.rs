//! Braille Score Representation (BSR)
//!
//! Pages of lines of measures of braille signs, built by the MSR to BSR
//! translator and consumed by a braille cell renderer.

pub mod kinds;
pub mod signs;
pub mod score;

pub use kinds::*;
pub use signs::*;
pub use score::*;
