//! Unsupported-construct reporting
//!
//! A source value with no target mapping is dropped, logged and recorded
//! here; the translation itself goes on.

use serde::{Deserialize, Serialize};

/// Information about a skipped/unsupported construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedElement {
    /// Kind of source node (e.g., "clef")
    pub element_type: String,

    /// Name of the source value that has no mapping (e.g., "percussion")
    pub value: String,

    /// Source line of the node
    pub input_line: usize,

    /// Measure number where the node appears (if in measure context)
    pub measure_number: Option<String>,

    /// Part ID where the node appears (if in part context)
    pub part_id: Option<String>,

    /// Human-readable explanation of why it was skipped
    pub reason: String,
}

/// Result of a translation: the target score plus the skip report
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult<S> {
    pub score: S,
    pub skipped_elements: Vec<SkippedElement>,
}

/// Collects skipped elements for one translation
#[derive(Debug, Default)]
pub struct SkipReport {
    target: &'static str,
    current_part_id: Option<String>,
    current_measure: Option<String>,
    elements: Vec<SkippedElement>,
}

impl SkipReport {
    /// `target` names the representation being built, for log messages
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn set_part(&mut self, part_id: Option<&str>) {
        self.current_part_id = part_id.map(str::to_string);
    }

    pub fn set_measure(&mut self, measure_number: Option<&str>) {
        self.current_measure = measure_number.map(str::to_string);
    }

    /// Record and log one unsupported source value
    pub fn add_skipped(&mut self, element_type: &str, value: &str, input_line: usize, reason: &str) {
        log::warn!(
            "{}: {} '{}' at line {} skipped: {}",
            self.target,
            element_type,
            value,
            input_line,
            reason
        );

        self.elements.push(SkippedElement {
            element_type: element_type.to_string(),
            value: value.to_string(),
            input_line,
            measure_number: self.current_measure.clone(),
            part_id: self.current_part_id.clone(),
            reason: reason.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn last(&self) -> Option<&SkippedElement> {
        self.elements.last()
    }

    pub fn into_elements(self) -> Vec<SkippedElement> {
        self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_carry_current_context() {
        let mut report = SkipReport::new("test");
        report.set_part(Some("P1"));
        report.set_measure(Some("3"));
        report.add_skipped("clef", "percussion", 42, "no braille clef");

        let skipped = report.into_elements();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].part_id.as_deref(), Some("P1"));
        assert_eq!(skipped[0].measure_number.as_deref(), Some("3"));
        assert_eq!(skipped[0].input_line, 42);
    }
}
