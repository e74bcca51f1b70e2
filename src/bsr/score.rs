//! BSR score, pages, lines and measures

use serde::Serialize;

use super::signs::{BsrKey, BsrTempo, BsrTime, Sign};

/// Transcriber's note about something the braille cannot show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionNote {
    pub input_line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptionNotes {
    pub notes: Vec<TranscriptionNote>,
}

impl TranscriptionNotes {
    pub fn append(&mut self, input_line: usize, text: String) {
        self.notes.push(TranscriptionNote { input_line, text });
    }
}

/// Title line at the top of the first page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHeading {
    pub title: Option<String>,
    pub composers: Vec<String>,
    pub page_number: usize,
}

/// Tempo, key and time of the start of the music, centered above it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MusicHeading {
    pub tempo: Option<BsrTempo>,
    pub key: Option<BsrKey>,
    pub time: Option<BsrTime>,
}

impl MusicHeading {
    pub fn is_empty(&self) -> bool {
        self.tempo.is_none() && self.key.is_none() && self.time.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrMeasure {
    pub input_line: usize,
    pub number: String,
    pub signs: Vec<Sign>,
}

impl BsrMeasure {
    pub fn new(input_line: usize, number: &str) -> Self {
        Self {
            input_line,
            number: number.to_string(),
            signs: Vec::new(),
        }
    }

    pub fn cells_width(&self) -> usize {
        self.signs.iter().map(Sign::cells_width).sum()
    }

    /// First note sign, if any
    pub fn first_note_mut(&mut self) -> Option<&mut super::signs::BsrNote> {
        self.signs.iter_mut().find_map(|sign| match sign {
            Sign::Note(note) if !note.is_rest() => Some(note),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrLine {
    pub number: usize,
    pub cells_per_line: usize,
    pub measures: Vec<BsrMeasure>,
}

impl BsrLine {
    pub fn new(number: usize, cells_per_line: usize) -> Self {
        Self {
            number,
            cells_per_line,
            measures: Vec::new(),
        }
    }

    /// Cells used, one space between measures
    pub fn cells_used(&self) -> usize {
        let widths: usize = self.measures.iter().map(BsrMeasure::cells_width).sum();
        widths + self.measures.len().saturating_sub(1)
    }

    /// An empty line takes any measure, even one wider than the line
    pub fn fits(&self, measure: &BsrMeasure) -> bool {
        self.measures.is_empty() || self.cells_used() + 1 + measure.cells_width() <= self.cells_per_line
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsrPage {
    pub number: usize,
    pub lines_per_page: usize,
    pub heading: Option<PageHeading>,
    pub music_heading: Option<MusicHeading>,
    pub lines: Vec<BsrLine>,
}

impl BsrPage {
    pub fn new(number: usize, lines_per_page: usize) -> Self {
        Self {
            number,
            lines_per_page,
            heading: None,
            music_heading: None,
            lines: Vec::new(),
        }
    }

    /// Lines taken by the headings count against the page
    pub fn lines_used(&self) -> usize {
        let headings = usize::from(self.heading.is_some())
            + usize::from(self.music_heading.as_ref().map_or(false, |h| !h.is_empty()));
        headings + self.lines.len()
    }

    pub fn is_full(&self) -> bool {
        self.lines_used() >= self.lines_per_page
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BsrScore {
    pub transcription_notes: TranscriptionNotes,
    pub pages: Vec<BsrPage>,
}

impl BsrScore {
    pub fn lines(&self) -> impl Iterator<Item = &BsrLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }

    pub fn measures(&self) -> impl Iterator<Item = &BsrMeasure> {
        self.lines().flat_map(|line| line.measures.iter())
    }

    pub fn music_heading(&self) -> Option<&MusicHeading> {
        self.pages.first().and_then(|page| page.music_heading.as_ref())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsr::kinds::{BrailleBarlineKind, BrailleKeyKind};
    use crate::bsr::signs::{BsrBarline, BsrKey};

    fn measure_of_width(barlines: usize) -> BsrMeasure {
        let mut measure = BsrMeasure::new(1, "1");
        for _ in 0..barlines {
            measure.signs.push(Sign::Barline(BsrBarline {
                input_line: 1,
                kind: BrailleBarlineKind::Special,
            }));
        }
        measure
    }

    #[test]
    fn test_line_fit_counts_separating_space() {
        let mut line = BsrLine::new(1, 10);
        line.measures.push(measure_of_width(2)); // 4 cells
        assert!(line.fits(&measure_of_width(2))); // 4 + 1 + 4 = 9
        line.measures.push(measure_of_width(2));
        assert_eq!(line.cells_used(), 9);
        assert!(!line.fits(&measure_of_width(1)));
    }

    #[test]
    fn test_empty_line_takes_an_oversized_measure() {
        let line = BsrLine::new(1, 4);
        assert!(line.fits(&measure_of_width(5)));
    }

    #[test]
    fn test_music_heading_uses_a_line() {
        let mut page = BsrPage::new(1, 2);
        page.music_heading = Some(MusicHeading::default());
        assert_eq!(page.lines_used(), 0);

        page.music_heading = Some(MusicHeading {
            key: Some(BsrKey {
                input_line: 1,
                kind: BrailleKeyKind::Sharps,
                count: 1,
            }),
            ..Default::default()
        });
        page.lines.push(BsrLine::new(1, 40));
        assert!(page.is_full());
    }
}
