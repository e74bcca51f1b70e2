//! Braille signs and their widths in cells

use serde::Serialize;

use super::kinds::*;
use crate::msr::TimeItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrNote {
    pub input_line: usize,
    pub value: NoteValueKind,
    pub value_size: NoteValueSize,
    pub dots: u8,
    /// `None` for rests
    pub octave: Option<BrailleOctaveKind>,
    pub octave_sign: bool,
    pub value_size_sign: bool,
    pub accidental: Option<BrailleAccidentalKind>,
    pub grace: bool,
    pub tie: bool,
}

impl BsrNote {
    pub fn is_rest(&self) -> bool {
        self.octave.is_none()
    }

    pub fn cells_width(&self) -> usize {
        let mut width = 1 + self.dots as usize;
        if self.octave_sign {
            width += 1;
        }
        if self.value_size_sign {
            width += 2;
        }
        if let Some(accidental) = self.accidental {
            width += accidental.cells_width();
        }
        if self.grace {
            width += 2;
        }
        if self.tie {
            width += 2;
        }
        width
    }
}

/// Chord member written as an interval from the chord's first note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrInterval {
    pub input_line: usize,
    pub interval: BrailleIntervalKind,
    pub octave: BrailleOctaveKind,
    pub octave_sign: bool,
    pub accidental: Option<BrailleAccidentalKind>,
}

impl BsrInterval {
    pub fn cells_width(&self) -> usize {
        1 + usize::from(self.octave_sign) + self.accidental.map_or(0, |a| a.cells_width())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrClef {
    pub input_line: usize,
    pub kind: BrailleClefKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrKey {
    pub input_line: usize,
    pub kind: BrailleKeyKind,
    pub count: u8,
}

impl BsrKey {
    /// Four or more accidentals are written with a number sign
    pub fn uses_number_sign(&self) -> bool {
        self.count > 3
    }

    pub fn cells_width(&self) -> usize {
        match self.count {
            0 => 1,
            count if count <= 3 => count as usize,
            _ => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrTime {
    pub input_line: usize,
    pub kind: BrailleTimeKind,
    pub items: Vec<TimeItem>,
}

fn digits(n: u32) -> usize {
    n.to_string().len()
}

impl BsrTime {
    pub fn uses_number_sign(&self) -> bool {
        !matches!(self.kind, BrailleTimeKind::Common | BrailleTimeKind::Cut)
    }

    pub fn cells_width(&self) -> usize {
        let upper: usize = self
            .items
            .iter()
            .map(|item| item.beats.iter().map(|&b| digits(b)).sum::<usize>())
            .sum();
        let lower: usize = self.items.iter().map(|item| digits(item.beat_type)).sum();

        match self.kind {
            BrailleTimeKind::Common | BrailleTimeKind::Cut => 2,
            BrailleTimeKind::Numerical => 1 + upper + lower,
            BrailleTimeKind::UpperNumberOnly => 1 + upper,
            BrailleTimeKind::NumberAndNote => 2 + upper,
            BrailleTimeKind::NumberAndDottedNote => 3 + upper,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrBarline {
    pub input_line: usize,
    pub kind: BrailleBarlineKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrDynamics {
    pub input_line: usize,
    pub kind: BrailleDynamicsKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrWords {
    pub input_line: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrTempo {
    pub input_line: usize,
    pub words: Option<String>,
    pub beat_unit: Option<NoteValueKind>,
    pub dots: u8,
    pub per_minute: Option<String>,
}

impl BsrTempo {
    pub fn cells_width(&self) -> usize {
        let mut width = self.words.as_ref().map_or(0, |w| w.chars().count() + 2);
        if self.beat_unit.is_some() {
            // note value, its dots, the equals sign, then the number sign
            width += 1 + self.dots as usize + 2 + 1;
            width += self.per_minute.as_ref().map_or(0, |p| p.chars().count());
        }
        width
    }
}

/// Tuplet indicator, before the first note of the tuplet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrTupletIndicator {
    pub input_line: usize,
    pub actual: u32,
}

impl BsrTupletIndicator {
    pub fn cells_width(&self) -> usize {
        if self.actual == 3 {
            1
        } else {
            2 + digits(self.actual)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Sign {
    Note(BsrNote),
    Interval(BsrInterval),
    Clef(BsrClef),
    Key(BsrKey),
    Time(BsrTime),
    Barline(BsrBarline),
    Dynamics(BsrDynamics),
    Words(BsrWords),
    Tempo(BsrTempo),
    TupletIndicator(BsrTupletIndicator),
}

impl Sign {
    pub fn cells_width(&self) -> usize {
        match self {
            Sign::Note(note) => note.cells_width(),
            Sign::Interval(interval) => interval.cells_width(),
            Sign::Clef(_) => 3,
            Sign::Key(key) => key.cells_width(),
            Sign::Time(time) => time.cells_width(),
            Sign::Barline(_) => 2,
            // word sign prefix
            Sign::Dynamics(dynamics) => 1 + dynamics.kind.name().len(),
            Sign::Words(words) => 2 + words.text.chars().count(),
            Sign::Tempo(tempo) => tempo.cells_width(),
            Sign::TupletIndicator(indicator) => indicator.cells_width(),
        }
    }
}
