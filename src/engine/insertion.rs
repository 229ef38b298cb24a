//! Insertion sort

use super::SortedSweep;
use crate::step::{Step, Value};

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Index 0 is trivially ordered
    Base,
    /// Pick up the key at `i`
    Pick,
    /// Shift larger predecessors right until the hole is in place
    Shift,
    /// The predecessor of `hole` was compared and is larger; move it right
    MoveRight,
    /// Mark the prefix `0..=i` as provisionally ordered, one index at a time
    MarkPrefix(usize),
    /// Final pass marking every index sorted
    Cleanup,
}

/// Insertion sort with shifting writes.
///
/// The key is held aside while larger predecessors shift right into the hole,
/// each shift reported as an overwrite; the key is then written into the hole.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    arr: Vec<Value>,
    i: usize,
    hole: usize,
    key: Value,
    phase: Phase,
    sweep: SortedSweep,
}

impl InsertionSort {
    pub fn new(input: &[Value]) -> Self {
        let n = input.len();
        InsertionSort {
            arr: input.to_vec(),
            i: 1,
            hole: 0,
            key: 0,
            // With fewer than two elements the cleanup pass alone marks everything
            phase: if n > 1 { Phase::Base } else { Phase::Cleanup },
            sweep: SortedSweep::new(n),
        }
    }
}

impl Iterator for InsertionSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.arr.len();
        loop {
            match self.phase {
                Phase::Base => {
                    self.phase = Phase::Pick;
                    return Some(Step::sorted(0));
                }
                Phase::Pick => {
                    if self.i >= n {
                        self.phase = Phase::Cleanup;
                        continue;
                    }
                    self.key = self.arr[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Shift;
                    return Some(Step::compare(self.i, self.i - 1));
                }
                Phase::Shift => {
                    if self.hole > 0 && self.arr[self.hole - 1] > self.key {
                        self.phase = Phase::MoveRight;
                        return Some(Step::compare(self.hole, self.hole - 1));
                    }
                    self.arr[self.hole] = self.key;
                    self.phase = Phase::MarkPrefix(0);
                    return Some(Step::overwrite(self.hole, self.key));
                }
                Phase::MoveRight => {
                    let hole = self.hole;
                    self.arr[hole] = self.arr[hole - 1];
                    self.hole -= 1;
                    self.phase = Phase::Shift;
                    return Some(Step::overwrite(hole, self.arr[hole]));
                }
                Phase::MarkPrefix(k) => {
                    if k <= self.i {
                        self.phase = Phase::MarkPrefix(k + 1);
                        return Some(Step::sub_sorted(k));
                    }
                    self.i += 1;
                    self.phase = Phase::Pick;
                }
                Phase::Cleanup => return self.sweep.next_step(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{fixtures, replay, sorted_copy};

    #[test]
    fn test_two_element_trace() {
        let steps: Vec<Step> = InsertionSort::new(&[2, 1]).collect();
        assert_eq!(
            steps,
            vec![
                Step::sorted(0),
                Step::compare(1, 0),
                Step::compare(1, 0),
                Step::overwrite(1, 2),
                Step::overwrite(0, 1),
                Step::sub_sorted(0),
                Step::sub_sorted(1),
                Step::sorted(0),
                Step::sorted(1),
            ]
        );
    }

    #[test]
    fn test_in_order_key_is_rewritten_in_place() {
        let steps: Vec<Step> = InsertionSort::new(&[1, 2]).collect();
        assert_eq!(
            steps,
            vec![
                Step::sorted(0),
                Step::compare(1, 0),
                Step::overwrite(1, 2),
                Step::sub_sorted(0),
                Step::sub_sorted(1),
                Step::sorted(0),
                Step::sorted(1),
            ]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(InsertionSort::new(&[]).next().is_none());
        let steps: Vec<Step> = InsertionSort::new(&[5]).collect();
        assert_eq!(steps, vec![Step::sorted(0)]);
    }

    #[test]
    fn test_sorts_fixtures() {
        for input in fixtures() {
            let steps: Vec<Step> = InsertionSort::new(&input).collect();
            assert_eq!(replay(&input, &steps), sorted_copy(&input), "{:?}", input);
        }
    }
}
