//! Highlight state derived from the consumed step stream
//!
//! Two transient selections (`comparing`, `swapping`) follow the latest step;
//! two accumulating sets (`sorted`, `sub_sorted`) only grow until the next run
//! starts. Rendering asks [`Highlight::classify`] for each index.

use crate::step::Step;
use rustc_hash::FxHashSet;

/// Visual classification of one bar, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarState {
    Sorted,
    Swapping,
    Comparing,
    SubSorted,
    Default,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted: FxHashSet<usize>,
    sub_sorted: FxHashSet<usize>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one consumed step into the highlight state
    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Compare { indices } => {
                self.comparing = indices.to_vec();
                self.swapping.clear();
            }
            Step::Swap { indices } => {
                self.swapping = indices.to_vec();
                self.comparing.clear();
            }
            Step::Overwrite { index, .. } => {
                self.swapping = vec![*index];
                self.comparing.clear();
            }
            Step::Sorted { indices } => {
                self.sorted.extend(indices.iter().copied());
                self.comparing.clear();
                self.swapping.clear();
            }
            Step::SubSorted { indices } => {
                self.sub_sorted.extend(indices.iter().copied());
            }
        }
    }

    /// The state after `step`, leaving `self` untouched
    pub fn project(&self, step: &Step) -> Highlight {
        let mut next = self.clone();
        next.apply(step);
        next
    }

    /// Drop the comparing/swapping selections, keep the accumulated sets
    pub fn clear_transient(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
    }

    pub fn clear(&mut self) {
        *self = Highlight::default();
    }

    pub fn classify(&self, index: usize) -> BarState {
        if self.sorted.contains(&index) {
            BarState::Sorted
        } else if self.swapping.contains(&index) {
            BarState::Swapping
        } else if self.comparing.contains(&index) {
            BarState::Comparing
        } else if self.sub_sorted.contains(&index) {
            BarState::SubSorted
        } else {
            BarState::Default
        }
    }

    pub fn comparing(&self) -> &[usize] {
        &self.comparing
    }

    pub fn swapping(&self) -> &[usize] {
        &self.swapping
    }

    pub fn sorted(&self) -> &FxHashSet<usize> {
        &self.sorted
    }

    pub fn sub_sorted(&self) -> &FxHashSet<usize> {
        &self.sub_sorted
    }

    /// Number of positions marked final so far
    pub fn sorted_count(&self) -> usize {
        self.sorted.len()
    }
}
