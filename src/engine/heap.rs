//! Heap sort over a max-heap

use crate::step::{Step, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftStage {
    Left,
    Right,
    Exchange,
}

/// Cursor for heapify of `root` within the heap prefix `0..size`.
///
/// After an exchange the cursor re-roots at the child that received the old
/// root, which replaces the recursive call on that subtree.
#[derive(Debug, Clone, Copy)]
struct Sift {
    size: usize,
    root: usize,
    largest: usize,
    stage: SiftStage,
}

impl Sift {
    fn new(size: usize, root: usize) -> Self {
        Sift {
            size,
            root,
            largest: root,
            stage: SiftStage::Left,
        }
    }

    fn advance(&mut self, arr: &mut [Value]) -> Option<Step> {
        loop {
            match self.stage {
                SiftStage::Left => {
                    self.stage = SiftStage::Right;
                    let l = 2 * self.root + 1;
                    if l < self.size {
                        let step = Step::compare(l, self.largest);
                        if arr[l] > arr[self.largest] {
                            self.largest = l;
                        }
                        return Some(step);
                    }
                }
                SiftStage::Right => {
                    self.stage = SiftStage::Exchange;
                    let r = 2 * self.root + 2;
                    if r < self.size {
                        let step = Step::compare(r, self.largest);
                        if arr[r] > arr[self.largest] {
                            self.largest = r;
                        }
                        return Some(step);
                    }
                }
                SiftStage::Exchange => {
                    if self.largest == self.root {
                        return None;
                    }
                    let (root, child) = (self.root, self.largest);
                    arr.swap(root, child);
                    *self = Sift::new(self.size, child);
                    return Some(Step::swap(root, child));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Heapify the non-leaf roots; holds how many are left, next root is `k - 1`
    Build(usize),
    /// Move the maximum to `i`
    Extract(usize),
    /// `i` just received the maximum; mark it and restore the heap below it
    Settle(usize),
    Finish,
    Done,
}

#[derive(Debug, Clone)]
pub struct HeapSort {
    arr: Vec<Value>,
    sift: Option<Sift>,
    phase: Phase,
}

impl HeapSort {
    pub fn new(input: &[Value]) -> Self {
        let n = input.len();
        HeapSort {
            arr: input.to_vec(),
            sift: None,
            phase: if n == 0 {
                Phase::Done
            } else {
                Phase::Build(n / 2)
            },
        }
    }
}

impl Iterator for HeapSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(step) = sift.advance(&mut self.arr) {
                    return Some(step);
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build(0) => self.phase = Phase::Extract(self.arr.len() - 1),
                Phase::Build(k) => {
                    self.sift = Some(Sift::new(self.arr.len(), k - 1));
                    self.phase = Phase::Build(k - 1);
                }
                Phase::Extract(0) => self.phase = Phase::Finish,
                Phase::Extract(i) => {
                    self.arr.swap(0, i);
                    self.phase = Phase::Settle(i);
                    return Some(Step::swap(0, i));
                }
                Phase::Settle(i) => {
                    self.sift = Some(Sift::new(i, 0));
                    self.phase = Phase::Extract(i - 1);
                    return Some(Step::sorted(i));
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
        // [5, 3, 4] is already a max-heap, so building only compares
        let steps: Vec<Step> = HeapSort::new(&[5, 3, 4]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(1, 0),
                Step::compare(2, 0),
                Step::swap(0, 2),
                Step::sorted(2),
                Step::compare(1, 0),
                Step::swap(0, 1),
                Step::sorted(1),
                Step::sorted(0),
            ]
        );
    }

    #[test]
    fn test_sift_recurses_into_child() {
        // root 1 must sink two levels: 1 <-> 7, then 1 <-> 6
        let mut arr = vec![1, 7, 2, 6, 5];
        let mut sift = Sift::new(arr.len(), 0);
        let steps: Vec<Step> = std::iter::from_fn(|| sift.advance(&mut arr)).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(1, 0),
                Step::compare(2, 1),
                Step::swap(0, 1),
                Step::compare(3, 1),
                Step::compare(4, 3),
                Step::swap(1, 3),
            ]
        );
        assert_eq!(arr, vec![7, 6, 2, 1, 5]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(HeapSort::new(&[]).next().is_none());
        let steps: Vec<Step> = HeapSort::new(&[8]).collect();
        assert_eq!(steps, vec![Step::sorted(0)]);
    }

    #[test]
    fn test_sorts_fixtures() {
        for input in fixtures() {
            let steps: Vec<Step> = HeapSort::new(&input).collect();
            assert_eq!(replay(&input, &steps), sorted_copy(&input), "{:?}", input);
        }
    }
}
