//! Classification result types.

use crate::processors::class_id_or_sentinel;
use std::fmt;

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Index of the highest score, `None` when the model returned no usable score
    pub class_index: Option<usize>,
    /// Raw per-class scores for the single input image
    pub scores: Vec<f32>,
    /// Label of the predicted class, when labels are configured
    pub label: Option<String>,
}

impl Prediction {
    /// Builds a prediction from scores, labelling the selected class when
    /// `labels` has an entry for it.
    pub fn from_scores(scores: Vec<f32>, labels: &[String]) -> Self {
        let class_index = crate::processors::argmax(&scores);
        let label = class_index.and_then(|idx| labels.get(idx).cloned());
        Self {
            class_index,
            scores,
            label,
        }
    }

    /// Signed class id, `-1` when no class was selected.
    pub fn class_id(&self) -> i64 {
        class_id_or_sentinel(self.class_index)
    }

    /// Score of the selected class.
    pub fn score(&self) -> Option<f32> {
        self.class_index.and_then(|idx| self.scores.get(idx).copied())
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.class_id())?;
        if let Some(label) = &self.label {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_selects_and_labels() {
        let labels = vec!["real".to_string(), "fake".to_string()];
        let prediction = Prediction::from_scores(vec![0.2, 0.8], &labels);
        assert_eq!(prediction.class_index, Some(1));
        assert_eq!(prediction.label.as_deref(), Some("fake"));
        assert_eq!(prediction.score(), Some(0.8));
        assert_eq!(prediction.to_string(), "class 1 (fake)");
    }

    #[test]
    fn test_empty_scores_give_sentinel() {
        let prediction = Prediction::from_scores(vec![], &[]);
        assert_eq!(prediction.class_index, None);
        assert_eq!(prediction.class_id(), -1);
        assert_eq!(prediction.score(), None);
        assert_eq!(prediction.to_string(), "class -1");
    }

    #[test]
    fn test_missing_label_is_none() {
        let labels = vec!["real".to_string()];
        let prediction = Prediction::from_scores(vec![0.1, 0.3, 0.2], &labels);
        assert_eq!(prediction.class_index, Some(1));
        assert!(prediction.label.is_none());
        assert_eq!(prediction.to_string(), "class 1");
    }
}
