//! Selection sort

use crate::step::{Step, Value};

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Scanning `j` for the minimum of `i..n`
    Scan,
    /// Scan finished; place the minimum at `i` if it is elsewhere
    Place,
    /// Position `i` holds its final value
    Mark,
}

/// Selection sort: every pass `i` scans the tail for its minimum, moves it to
/// `i` and marks `i` sorted, swap or not.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    arr: Vec<Value>,
    i: usize,
    j: usize,
    min_idx: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(input: &[Value]) -> Self {
        SelectionSort {
            arr: input.to_vec(),
            i: 0,
            j: 1,
            min_idx: 0,
            phase: Phase::Scan,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.arr.len();
        if self.i >= n {
            return None;
        }
        loop {
            match self.phase {
                Phase::Scan => {
                    if self.j < n {
                        let step = Step::compare(self.min_idx, self.j);
                        if self.arr[self.j] < self.arr[self.min_idx] {
                            self.min_idx = self.j;
                        }
                        self.j += 1;
                        return Some(step);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Place => {
                    self.phase = Phase::Mark;
                    if self.min_idx != self.i {
                        self.arr.swap(self.i, self.min_idx);
                        return Some(Step::swap(self.i, self.min_idx));
                    }
                }
                Phase::Mark => {
                    let settled = self.i;
                    self.i += 1;
                    self.j = self.i + 1;
                    self.min_idx = self.i;
                    self.phase = Phase::Scan;
                    return Some(Step::sorted(settled));
                }
            }
        }
    }
}
