use crate::image_classifier::interface::Classification;

/// Ranked classifier output for one image. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    classifications: Vec<Classification>,
}

impl PredictionResult {
    /// Keeps the classifier's order as given; `None` when there is nothing to rank.
    pub fn new(classifications: Vec<Classification>) -> Option<Self> {
        if classifications.is_empty() {
            None
        } else {
            Some(Self { classifications })
        }
    }

    pub fn top(&self) -> &Classification {
        &self.classifications[0]
    }

    pub fn leading(&self, count: usize) -> &[Classification] {
        &self.classifications[..count.min(self.classifications.len())]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.classifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(label: &str, confidence: f32) -> Classification {
        Classification {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(PredictionResult::new(vec![]).is_none());
    }

    #[test]
    fn test_leading_keeps_order() {
        let prediction = PredictionResult::new(vec![
            classification("nevi", 0.3),
            classification("melanoma", 0.5),
        ])
        .unwrap();

        assert_eq!(prediction.top().label, "nevi");
        assert_eq!(prediction.leading(3).len(), 2);
        assert_eq!(prediction.leading(1)[0].label, "nevi");
        assert_eq!(prediction.len(), 2);
    }
}
