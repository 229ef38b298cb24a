//! Quick sort with Lomuto partitioning
//!
//! The last element of each range is the pivot. Ranges still to be sorted
//! wait on a stack; the left side of a partition is always pushed last so it
//! is processed first, matching the recursive order.

use super::SortedSweep;
use crate::step::{Step, Value};

/// An in-progress Lomuto partition of `low..=high`
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: Value,
    /// Next slot for a value smaller than the pivot
    store: usize,
    j: usize,
    /// `j` was just compared against the pivot
    compared: bool,
}

impl Partition {
    fn new(arr: &[Value], low: usize, high: usize) -> Self {
        Partition {
            low,
            high,
            pivot: arr[high],
            store: low,
            j: low,
            compared: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Take the next pending range
    Next,
    Partitioning(Partition),
    /// The pivot rests at `pivot`; mark it and queue both sides
    Settle { low: usize, pivot: usize, high: usize },
    Cleanup,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    arr: Vec<Value>,
    /// Inclusive `(low, high)` ranges still to sort
    ranges: Vec<(usize, usize)>,
    phase: Phase,
    sweep: SortedSweep,
}

impl QuickSort {
    pub fn new(input: &[Value]) -> Self {
        let n = input.len();
        let mut ranges = Vec::new();
        // A lone element is left to the cleanup pass so it is marked only once
        if n > 1 {
            ranges.push((0, n - 1));
        }
        QuickSort {
            arr: input.to_vec(),
            ranges,
            phase: Phase::Next,
            sweep: SortedSweep::new(n),
        }
    }
}

impl Iterator for QuickSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                Phase::Next => match self.ranges.pop() {
                    Some((low, high)) if low < high => {
                        self.phase = Phase::Partitioning(Partition::new(&self.arr, low, high));
                    }
                    Some((low, _)) => return Some(Step::sorted(low)),
                    None => self.phase = Phase::Cleanup,
                },
                Phase::Partitioning(mut part) => {
                    if part.compared {
                        let j = part.j;
                        part.j += 1;
                        part.compared = false;
                        let swapped = self.arr[j] < part.pivot;
                        let store = part.store;
                        if swapped {
                            self.arr.swap(store, j);
                            part.store += 1;
                        }
                        self.phase = Phase::Partitioning(part);
                        if swapped {
                            return Some(Step::swap(store, j));
                        }
                    } else if part.j < part.high {
                        part.compared = true;
                        self.phase = Phase::Partitioning(part);
                        return Some(Step::compare(part.j, part.high));
                    } else {
                        self.arr.swap(part.store, part.high);
                        self.phase = Phase::Settle {
                            low: part.low,
                            pivot: part.store,
                            high: part.high,
                        };
                        return Some(Step::swap(part.store, part.high));
                    }
                }
                Phase::Settle { low, pivot, high } => {
                    if pivot < high {
                        self.ranges.push((pivot + 1, high));
                    }
                    if pivot > low {
                        self.ranges.push((low, pivot - 1));
                    }
                    self.phase = Phase::Next;
                    return Some(Step::sorted(pivot));
                }
                Phase::Cleanup => return self.sweep.next_step(),
            }
        }
    }
}
