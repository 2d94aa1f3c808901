//! Test cases and their expected labels

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// A single input sentence and its position in the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// 1-based position in the batch
    pub index: usize,
    /// Sentence handed to the oracle
    pub input_text: String,
}

impl TestCase {
    /// Create a test case
    pub fn new(index: usize, input_text: impl Into<String>) -> Self {
        Self {
            index,
            input_text: input_text.into(),
        }
    }

    /// Build a densely indexed batch (1..=N) from ordered input texts
    pub fn batch<I, S>(inputs: I) -> Vec<TestCase>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        inputs
            .into_iter()
            .enumerate()
            .map(|(i, text)| TestCase::new(i + 1, text))
            .collect()
    }
}

/// Check that a hand-built case list is non-empty and indexed 1..=N in order.
///
/// Lists produced by [`TestCase::batch`] always satisfy this. Callers that
/// assemble cases themselves are responsible for density; this is the check
/// they should run before handing the list to the batcher.
pub fn validate_dense(cases: &[TestCase]) -> BenchResult<()> {
    if cases.is_empty() {
        return Err(BenchError::invalid_input_field(
            "case list is empty",
            "cases",
        ));
    }

    for (position, case) in cases.iter().enumerate() {
        let expected = position + 1;
        if case.index != expected {
            return Err(BenchError::invalid_input_field(
                format!(
                    "case at position {} has index {}, expected {}",
                    position, case.index, expected
                ),
                "cases",
            ));
        }
    }

    Ok(())
}

/// Expected labels aligned by position with the test cases.
///
/// `labels[i]` belongs to the case with index `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedLabels(Vec<String>);

impl ExpectedLabels {
    /// Wrap an ordered label list
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Label for a 1-based case index, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .map(String::as_str)
    }

    /// Number of expected cases
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no expected cases
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(index, label)` pairs with 1-based indices
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().enumerate().map(|(i, l)| (i + 1, l.as_str()))
    }

    /// Borrow the underlying labels
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ExpectedLabels {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_is_densely_indexed() {
        let cases = TestCase::batch(["a", "b", "c"]);
        let indices: Vec<usize> = cases.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(validate_dense(&cases).is_ok());
    }

    #[test]
    fn test_validate_dense_rejects_gaps_and_empty() {
        assert!(validate_dense(&[]).is_err());

        let gap = vec![TestCase::new(1, "a"), TestCase::new(3, "b")];
        let err = validate_dense(&gap).unwrap_err();
        assert!(err.to_string().contains("has index 3, expected 2"));

        let zero_based = vec![TestCase::new(0, "a")];
        assert!(validate_dense(&zero_based).is_err());

        let duplicate = vec![TestCase::new(1, "a"), TestCase::new(1, "b")];
        assert!(validate_dense(&duplicate).is_err());
    }

    #[test]
    fn test_expected_labels_one_based_lookup() {
        let expected = ExpectedLabels::new(["Positive", "Negative"]);
        assert_eq!(expected.get(0), None);
        assert_eq!(expected.get(1), Some("Positive"));
        assert_eq!(expected.get(2), Some("Negative"));
        assert_eq!(expected.get(3), None);
        assert_eq!(expected.len(), 2);
    }
}
