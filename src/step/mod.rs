//! Step protocol shared by every sorting engine and the playback driver
//!
//! A [`Step`] describes one atomic event inside a sorting algorithm. Engines
//! emit steps in order; the driver consumes them one at a time and is the only
//! party that materializes a [`Step::Swap`] or [`Step::Overwrite`] into the
//! visible array.
//!
//! Each kind carries exactly the payload it needs, so a swap with one index or
//! an overwrite without a value cannot be constructed or deserialized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric element type of every sorted array
pub type Value = i64;

/// Discriminant of a [`Step`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    Overwrite,
    Sorted,
    SubSorted,
}

/// One atomic algorithmic event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Step {
    /// Two positions are being compared
    Compare { indices: [usize; 2] },
    /// Two positions exchange their values
    Swap { indices: [usize; 2] },
    /// `value` is written at `index`
    Overwrite { index: usize, value: Value },
    /// Positions that hold their final value
    Sorted { indices: Vec<usize> },
    /// Positions that are ordered relative to each other, but not yet final
    SubSorted { indices: Vec<usize> },
}

impl Step {
    pub fn compare(a: usize, b: usize) -> Self {
        Step::Compare { indices: [a, b] }
    }

    pub fn swap(a: usize, b: usize) -> Self {
        Step::Swap { indices: [a, b] }
    }

    pub fn overwrite(index: usize, value: Value) -> Self {
        Step::Overwrite { index, value }
    }

    /// Mark a single position as final
    pub fn sorted(index: usize) -> Self {
        Step::Sorted {
            indices: vec![index],
        }
    }

    /// Mark a batch of positions as final
    pub fn sorted_batch(indices: Vec<usize>) -> Self {
        debug_assert!(!indices.is_empty(), "sorted step without indices");
        Step::Sorted { indices }
    }

    pub fn sub_sorted(index: usize) -> Self {
        Step::SubSorted {
            indices: vec![index],
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Step::Compare { .. } => StepKind::Compare,
            Step::Swap { .. } => StepKind::Swap,
            Step::Overwrite { .. } => StepKind::Overwrite,
            Step::Sorted { .. } => StepKind::Sorted,
            Step::SubSorted { .. } => StepKind::SubSorted,
        }
    }

    /// Array positions involved in this step, in emission order
    pub fn indices(&self) -> &[usize] {
        match self {
            Step::Compare { indices } | Step::Swap { indices } => indices,
            Step::Overwrite { index, .. } => std::slice::from_ref(index),
            Step::Sorted { indices } | Step::SubSorted { indices } => indices,
        }
    }

    /// Whether consuming this step changes array contents
    pub fn is_mutation(&self) -> bool {
        matches!(self, Step::Swap { .. } | Step::Overwrite { .. })
    }

    /// Materialize this step into `array`.
    ///
    /// Only swaps and overwrites touch the array. An index outside `array`
    /// means the producing engine is broken, so this panics rather than
    /// skipping the step.
    pub fn replay(&self, array: &mut [Value]) {
        match *self {
            Step::Swap { indices: [a, b] } => array.swap(a, b),
            Step::Overwrite { index, value } => array[index] = value,
            Step::Compare { .. } | Step::Sorted { .. } | Step::SubSorted { .. } => {}
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Compare { indices: [a, b] } => write!(f, "compare [{}, {}]", a, b),
            Step::Swap { indices: [a, b] } => write!(f, "swap [{}, {}]", a, b),
            Step::Overwrite { index, value } => write!(f, "write [{}] = {}", index, value),
            Step::Sorted { indices } => write!(f, "sorted {:?}", indices),
            Step::SubSorted { indices } => write!(f, "sub-sorted {:?}", indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_per_kind() {
        assert_eq!(Step::compare(3, 4).indices(), &[3, 4]);
        assert_eq!(Step::swap(0, 2).indices(), &[0, 2]);
        assert_eq!(Step::overwrite(7, 42).indices(), &[7]);
        assert_eq!(Step::sorted_batch(vec![1, 2, 3]).indices(), &[1, 2, 3]);
        assert_eq!(Step::sub_sorted(5).kind(), StepKind::SubSorted);
    }

    #[test]
    fn test_replay_only_mutates_for_swap_and_overwrite() {
        let mut array = vec![5, 3, 4];

        Step::compare(0, 1).replay(&mut array);
        Step::sorted(2).replay(&mut array);
        assert_eq!(array, vec![5, 3, 4]);

        Step::swap(0, 1).replay(&mut array);
        assert_eq!(array, vec![3, 5, 4]);

        Step::overwrite(2, 9).replay(&mut array);
        assert_eq!(array, vec![3, 5, 9]);
    }

    #[test]
    #[should_panic]
    fn test_replay_out_of_range_panics() {
        let mut array = vec![1, 2];
        Step::swap(0, 2).replay(&mut array);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Step::overwrite(1, 2)).unwrap();
        assert_eq!(json, r#"{"type":"overwrite","index":1,"value":2}"#);

        let json = serde_json::to_string(&Step::sub_sorted(0)).unwrap();
        assert_eq!(json, r#"{"type":"sub-sorted","indices":[0]}"#);
    }

    #[test]
    fn test_malformed_swap_is_rejected() {
        let parsed: Result<Step, _> = serde_json::from_str(r#"{"type":"swap","indices":[1]}"#);
        assert!(parsed.is_err());

        let parsed: Result<Step, _> = serde_json::from_str(r#"{"type":"overwrite","index":1}"#);
        assert!(parsed.is_err());
    }
}
