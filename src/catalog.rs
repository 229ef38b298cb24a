//! Algorithm catalog
//!
//! The fixed, ordered list of sorting algorithms offered to the user, with the
//! identifier, display name and description shown in the controls pane.

use crate::config::ConfigError;
use crate::engine::Engine;
use crate::step::Value;
use std::fmt;
use std::str::FromStr;

/// A sorting algorithm that can be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Merge,
    Insertion,
    Quick,
    Selection,
    Heap,
}

impl Algorithm {
    /// Catalog order, as presented in the controls pane
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Selection,
        Algorithm::Heap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Repeatedly swaps adjacent elements if they are in the wrong order. \
                 Large values \"bubble\" to the top."
            }
            Algorithm::Merge => {
                "Divides the list into smaller sub-lists, sorts them, and then merges \
                 them back together like a zipper."
            }
            Algorithm::Insertion => {
                "Builds the sorted array one item at a time, picking an element and \
                 sliding it into its correct spot."
            }
            Algorithm::Quick => {
                "Picks a \"pivot\" element and partitions the array into smaller \
                 elements (left) and larger elements (right)."
            }
            Algorithm::Selection => {
                "Repeatedly finds the minimum element from the unsorted part and puts \
                 it at the beginning."
            }
            Algorithm::Heap => {
                "Builds a heap data structure (max-heap) and repeatedly extracts the \
                 maximum element."
            }
        }
    }

    /// Position of this algorithm in [`Algorithm::ALL`]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|&a| a == self)
            .unwrap_or_default()
    }

    /// Next algorithm in catalog order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in catalog order, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Create a fresh engine over a private copy of `input`
    pub fn engine(self, input: &[Value]) -> Engine {
        Engine::new(self, input)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.id() == wanted)
            .ok_or(ConfigError::UnknownAlgorithm(s.to_string()))
    }
}
