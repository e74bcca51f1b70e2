//! LilyPond Score Representation (LPSR)
//!
//! Built by the MSR to LPSR translator, consumed by a LilyPond source
//! renderer.
//!
//! # Modules
//!
//! - **kinds**: LilyPond enumerations and score features
//! - **music**: measures and their music elements
//! - **voice**: voices, repeats and stanzas
//! - **score**: score root, header, paper, cloned tree and blocks

pub mod kinds;
pub mod music;
pub mod voice;
pub mod score;

pub use kinds::*;
pub use music::*;
pub use voice::*;
pub use score::*;
