//! Step-producing sorting engines
//!
//! Every algorithm is an explicit state machine implementing
//! `Iterator<Item = Step>`. Pulling one item runs the algorithm up to its next
//! observable event and suspends there; nothing is computed ahead.
//!
//! - [`bubble`], [`selection`], [`insertion`]: nested loops with resumable
//!   loop counters
//! - [`merge`], [`quick`]: recursion replaced by an explicit task stack
//! - [`heap`]: heapify's tail recursion replaced by a sift cursor that
//!   re-roots itself
//!
//! Each engine owns a private copy of its input. It mutates that copy to decide
//! later comparisons, and reports every mutation through the step it emits.
//! The copy is never handed out.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::catalog::Algorithm;
use crate::step::{Step, Value};
use std::ops::Range;

/// Yields `Sorted[k]` for each `k` of a range, used by the final cleanup passes
#[derive(Debug, Clone)]
pub(crate) struct SortedSweep(Range<usize>);

impl SortedSweep {
    pub(crate) fn new(len: usize) -> Self {
        SortedSweep(0..len)
    }

    pub(crate) fn next_step(&mut self) -> Option<Step> {
        self.0.next().map(Step::sorted)
    }
}

/// A running engine for one algorithm, bound to one input array.
///
/// The wrapper is fused: once the underlying algorithm reports completion it
/// keeps returning `None` without touching the algorithm again.
pub struct Engine {
    algorithm: Algorithm,
    source: Box<dyn Iterator<Item = Step>>,
    emitted: usize,
    exhausted: bool,
}

impl Engine {
    pub fn new(algorithm: Algorithm, input: &[Value]) -> Self {
        let source: Box<dyn Iterator<Item = Step>> = match algorithm {
            Algorithm::Bubble => Box::new(bubble::BubbleSort::new(input)),
            Algorithm::Selection => Box::new(selection::SelectionSort::new(input)),
            Algorithm::Insertion => Box::new(insertion::InsertionSort::new(input)),
            Algorithm::Merge => Box::new(merge::MergeSort::new(input)),
            Algorithm::Quick => Box::new(quick::QuickSort::new(input)),
            Algorithm::Heap => Box::new(heap::HeapSort::new(input)),
        };
        Engine {
            algorithm,
            source,
            emitted: 0,
            exhausted: false,
        }
    }

    /// Produce the next step, or `None` once the algorithm has finished
    pub fn next_step(&mut self) -> Option<Step> {
        if self.exhausted {
            return None;
        }
        match self.source.next() {
            Some(step) => {
                self.emitted += 1;
                Some(step)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of steps handed out so far
    pub fn steps_emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for Engine {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.next_step()
    }
}

impl std::iter::FusedIterator for Engine {}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("algorithm", &self.algorithm)
            .field("emitted", &self.emitted)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Shared fixtures for the per-engine unit tests
#[cfg(test)]
pub(crate) mod test_support {
    use crate::step::{Step, Value};

    /// Replay every mutation of `steps` against a copy of `input`
    pub fn replay(input: &[Value], steps: &[Step]) -> Vec<Value> {
        let mut array = input.to_vec();
        for step in steps {
            step.replay(&mut array);
        }
        array
    }

    pub fn sorted_copy(input: &[Value]) -> Vec<Value> {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        expected
    }

    pub fn fixtures() -> Vec<Vec<Value>> {
        vec![
            vec![],
            vec![7],
            vec![2, 1],
            vec![4, 4, 4, 4],
            vec![1, 2, 3, 4, 5, 6],
            vec![9, 8, 7, 6, 5, 4, 3],
            vec![5, 3, 4],
            vec![38, 27, 43, 3, 9, 82, 10],
            vec![12, -4, 12, 0, 7, -4, 99, 1, 1, 50, 3],
        ]
    }
}
