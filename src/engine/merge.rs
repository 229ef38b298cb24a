//! Top-down merge sort
//!
//! The recursion `sort(l, r) = sort(l, mid); sort(mid + 1, r); merge(l, mid, r)`
//! is unrolled onto an explicit task stack. Tasks are pushed in reverse so the
//! left half is always fully sorted before the right half starts.

use super::SortedSweep;
use crate::step::{Step, Value};

#[derive(Debug, Clone, Copy)]
enum Task {
    /// Sort the inclusive range `left..=right`
    Sort { left: usize, right: usize },
    /// Merge the sorted runs `left..=mid` and `mid + 1..=right`
    Merge { left: usize, mid: usize, right: usize },
}

/// An in-progress merge of two adjacent runs
#[derive(Debug, Clone)]
struct Merging {
    left: usize,
    mid: usize,
    left_run: Vec<Value>,
    right_run: Vec<Value>,
    i: usize,
    j: usize,
    k: usize,
    /// Value picked by the last comparison, written on the next pull
    pending: Option<Value>,
}

impl Merging {
    fn new(arr: &[Value], left: usize, mid: usize, right: usize) -> Self {
        Merging {
            left,
            mid,
            left_run: arr[left..=mid].to_vec(),
            right_run: arr[mid + 1..=right].to_vec(),
            i: 0,
            j: 0,
            k: left,
            pending: None,
        }
    }

    fn write(&mut self, arr: &mut [Value], value: Value) -> Step {
        let k = self.k;
        arr[k] = value;
        self.k += 1;
        Step::overwrite(k, value)
    }

    /// Advance the merge by one event, `None` once both runs are drained
    fn advance(&mut self, arr: &mut [Value]) -> Option<Step> {
        if let Some(value) = self.pending.take() {
            return Some(self.write(arr, value));
        }

        let (left_len, right_len) = (self.left_run.len(), self.right_run.len());
        if self.i < left_len && self.j < right_len {
            let step = Step::compare(self.left + self.i, self.mid + 1 + self.j);
            // Ties go to the left run, which keeps the sort stable
            let chosen = if self.left_run[self.i] <= self.right_run[self.j] {
                self.i += 1;
                self.left_run[self.i - 1]
            } else {
                self.j += 1;
                self.right_run[self.j - 1]
            };
            self.pending = Some(chosen);
            return Some(step);
        }

        if self.i < left_len {
            let value = self.left_run[self.i];
            self.i += 1;
            return Some(self.write(arr, value));
        }
        if self.j < right_len {
            let value = self.right_run[self.j];
            self.j += 1;
            return Some(self.write(arr, value));
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    arr: Vec<Value>,
    tasks: Vec<Task>,
    merging: Option<Merging>,
    sweep: SortedSweep,
}

impl MergeSort {
    pub fn new(input: &[Value]) -> Self {
        let mut tasks = Vec::new();
        if !input.is_empty() {
            tasks.push(Task::Sort {
                left: 0,
                right: input.len() - 1,
            });
        }
        MergeSort {
            arr: input.to_vec(),
            tasks,
            merging: None,
            sweep: SortedSweep::new(input.len()),
        }
    }
}

impl Iterator for MergeSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(merging) = self.merging.as_mut() {
                if let Some(step) = merging.advance(&mut self.arr) {
                    return Some(step);
                }
                self.merging = None;
            }

            match self.tasks.pop() {
                Some(Task::Sort { left, right }) => {
                    if left >= right {
                        continue;
                    }
                    let mid = left + (right - left) / 2;
                    self.tasks.push(Task::Merge { left, mid, right });
                    self.tasks.push(Task::Sort {
                        left: mid + 1,
                        right,
                    });
                    self.tasks.push(Task::Sort { left, right: mid });
                }
                Some(Task::Merge { left, mid, right }) => {
                    self.merging = Some(Merging::new(&self.arr, left, mid, right));
                }
                None => return self.sweep.next_step(),
            }
        }
    }
}
