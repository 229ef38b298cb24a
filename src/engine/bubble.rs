//! Bubble sort

use crate::step::{Step, Value};

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Next event is the comparison of `j` and `j + 1`, or the end of the pass
    Scan,
    /// The pair at `j` was just compared; swap it if out of order
    Decide,
    /// All passes done; index 0 is only known to be final now
    Finish,
    Done,
}

/// Adjacent-pair bubble sort.
///
/// Runs `n - 1` passes. Pass `i` bubbles the largest remaining value to
/// `n - i - 1` and marks it sorted; index 0 is marked once after the last pass.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    arr: Vec<Value>,
    i: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(input: &[Value]) -> Self {
        BubbleSort {
            arr: input.to_vec(),
            i: 0,
            j: 0,
            phase: if input.is_empty() {
                Phase::Done
            } else {
                Phase::Scan
            },
        }
    }
}

impl Iterator for BubbleSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.arr.len();
        loop {
            match self.phase {
                Phase::Scan => {
                    if self.i + 1 >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    if self.j + 1 < n - self.i {
                        self.phase = Phase::Decide;
                        return Some(Step::compare(self.j, self.j + 1));
                    }
                    let settled = n - self.i - 1;
                    self.i += 1;
                    self.j = 0;
                    return Some(Step::sorted(settled));
                }
                Phase::Decide => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    if self.arr[j] > self.arr[j + 1] {
                        self.arr.swap(j, j + 1);
                        return Some(Step::swap(j, j + 1));
                    }
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(Step::sorted(0));
                }
                Phase::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{fixtures, replay, sorted_copy};

    #[test]
    fn test_three_element_trace() {
        let steps: Vec<Step> = BubbleSort::new(&[5, 3, 4]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(0, 1),
                Step::swap(0, 1),
                Step::compare(1, 2),
                Step::swap(1, 2),
                Step::sorted(2),
                Step::compare(0, 1),
                Step::sorted(1),
                Step::sorted(0),
            ]
        );
    }

    #[test]
    fn test_single_element_marks_once() {
        let steps: Vec<Step> = BubbleSort::new(&[42]).collect();
        assert_eq!(steps, vec![Step::sorted(0)]);
    }

    #[test]
    fn test_sorts_fixtures() {
        for input in fixtures() {
            let steps: Vec<Step> = BubbleSort::new(&input).collect();
            assert_eq!(replay(&input, &steps), sorted_copy(&input), "{:?}", input);
        }
    }
}
