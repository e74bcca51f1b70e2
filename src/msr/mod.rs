//! Music Score Representation (MSR)
//!
//! The format-neutral score tree produced upstream from MusicXML. The
//! translators only ever read it.
//!
//! # Modules
//!
//! - **kinds**: closed enumerations (clefs, keys, durations, accidentals...)
//! - **score**: structural nodes, from `Score` down to `Measure`
//! - **elements**: measure contents and note attachments
//! - **visitor**: `MsrNode`, the `MsrVisitor` trait and `browse`

pub mod kinds;
pub mod score;
pub mod elements;
pub mod visitor;

pub use kinds::*;
pub use score::*;
pub use elements::*;
pub use visitor::{browse, MsrNode, MsrVisitor};
