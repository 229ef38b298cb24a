// Integration tests for the step-producing sorting engines

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::catalog::Algorithm;
use sortty::step::{Step, Value};

fn run(algorithm: Algorithm, input: &[Value]) -> Vec<Step> {
    algorithm.engine(input).collect()
}

fn replay(input: &[Value], steps: &[Step]) -> Vec<Value> {
    let mut array = input.to_vec();
    for step in steps {
        step.replay(&mut array);
    }
    array
}

fn edge_cases() -> Vec<Vec<Value>> {
    vec![
        vec![],
        vec![1],
        vec![6, 6, 6, 6, 6],
        vec![1, 2, 3, 4, 5, 6, 7, 8],
        vec![8, 7, 6, 5, 4, 3, 2, 1],
        vec![2, 1],
        vec![5, 3, 4],
    ]
}

fn random_arrays(count: usize) -> Vec<Vec<Value>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..40);
            (0..len).map(|_| rng.gen_range(-20..=120)).collect()
        })
        .collect()
}

// === SORT CORRECTNESS ===

#[test]
fn test_every_engine_sorts_edge_cases() {
    for algorithm in Algorithm::ALL {
        for input in edge_cases() {
            let steps = run(algorithm, &input);
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(
                replay(&input, &steps),
                expected,
                "{} failed on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_every_engine_sorts_random_arrays() {
    for input in random_arrays(60) {
        let mut expected = input.clone();
        expected.sort();
        for algorithm in Algorithm::ALL {
            let steps = run(algorithm, &input);
            assert_eq!(
                replay(&input, &steps),
                expected,
                "{} failed on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_every_index_is_marked_sorted() {
    for input in random_arrays(20).into_iter().chain(edge_cases()) {
        for algorithm in Algorithm::ALL {
            let mut marked = vec![false; input.len()];
            for step in run(algorithm, &input) {
                if let Step::Sorted { indices } = step {
                    for i in indices {
                        marked[i] = true;
                    }
                }
            }
            assert!(
                marked.iter().all(|&m| m),
                "{} left indices unmarked on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_step_indices_stay_in_bounds() {
    for input in random_arrays(20) {
        for algorithm in Algorithm::ALL {
            for step in run(algorithm, &input) {
                assert!(
                    step.indices().iter().all(|&i| i < input.len()),
                    "{} emitted {} for len {}",
                    algorithm,
                    step,
                    input.len()
                );
            }
        }
    }
}

// === DETERMINISM ===

#[test]
fn test_step_sequences_are_deterministic() {
    for input in random_arrays(10) {
        for algorithm in Algorithm::ALL {
            let first = serde_json::to_string(&run(algorithm, &input)).unwrap();
            let second = serde_json::to_string(&run(algorithm, &input)).unwrap();
            assert_eq!(first, second, "{} is not deterministic", algorithm);
        }
    }
}

// === DEGENERATE INPUTS ===

#[test]
fn test_empty_array_emits_nothing() {
    for algorithm in Algorithm::ALL {
        assert!(run(algorithm, &[]).is_empty(), "{} emitted steps", algorithm);
    }
}

#[test]
fn test_single_element_emits_one_sorted_mark() {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            run(algorithm, &[42]),
            vec![Step::sorted(0)],
            "{} on a single element",
            algorithm
        );
    }
}

// === SCENARIOS ===

#[test]
fn test_bubble_scenario() {
    let steps = run(Algorithm::Bubble, &[5, 3, 4]);
    let json = serde_json::to_value(&steps).unwrap();
    let expected = serde_json::json!([
        { "type": "compare", "indices": [0, 1] },
        { "type": "swap", "indices": [0, 1] },
        { "type": "compare", "indices": [1, 2] },
        { "type": "swap", "indices": [1, 2] },
        { "type": "sorted", "indices": [2] },
        { "type": "compare", "indices": [0, 1] },
        { "type": "sorted", "indices": [1] },
        { "type": "sorted", "indices": [0] },
    ]);
    assert_eq!(json, expected);
    assert_eq!(replay(&[5, 3, 4], &steps), vec![3, 4, 5]);
}

#[test]
fn test_insertion_scenario() {
    let input = [2, 1];
    let steps = run(Algorithm::Insertion, &input);
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

    // the shift leaves a duplicate before the key lands
    assert_eq!(replay(&input, &steps[..4]), vec![2, 2]);
    assert_eq!(replay(&input, &steps[..5]), vec![1, 2]);
}

#[test]
fn test_merge_only_compares_while_both_runs_remain() {
    // left run [1, 2] drains first; 3 and 4 are copied without comparing
    let steps = run(Algorithm::Merge, &[1, 2, 3, 4]);
    let last_merge: Vec<&Step> = steps
        .iter()
        .skip_while(|s| **s != Step::compare(0, 2))
        .take_while(|s| !matches!(s, Step::Sorted { .. }))
        .collect();
    assert_eq!(
        last_merge,
        vec![
            &Step::compare(0, 2),
            &Step::overwrite(0, 1),
            &Step::compare(1, 2),
            &Step::overwrite(1, 2),
            &Step::overwrite(2, 3),
            &Step::overwrite(3, 4),
        ]
    );
}

#[test]
fn test_quick_marks_pivot_before_recursing() {
    let steps = run(Algorithm::Quick, &[3, 7, 1, 5]);
    // pivot 5 ends at index 2 after the final pivot swap
    let pivot_swap = steps
        .iter()
        .position(|s| *s == Step::swap(2, 3))
        .unwrap();
    assert_eq!(steps[pivot_swap + 1], Step::sorted(2));
}

#[test]
fn test_heap_extraction_order() {
    let steps = run(Algorithm::Heap, &[4, 10, 3, 5, 1]);

    let marks: Vec<(usize, &Step)> = steps
        .iter()
        .enumerate()
        .filter(|(_, s)| matches!(s, Step::Sorted { .. }))
        .collect();
    let marked: Vec<usize> = marks.iter().map(|(_, s)| s.indices()[0]).collect();
    assert_eq!(marked, vec![4, 3, 2, 1, 0]);

    // every mark but the last directly follows the swap that moved the max there
    for &(pos, step) in &marks[..marks.len() - 1] {
        let i = step.indices()[0];
        assert_eq!(steps[pos - 1], Step::swap(0, i));
    }
}

#[test]
fn test_selection_marks_every_pass() {
    let steps = run(Algorithm::Selection, &[1, 2, 3]);
    assert_eq!(
        steps,
        vec![
            Step::compare(0, 1),
            Step::compare(0, 2),
            Step::sorted(0),
            Step::compare(1, 2),
            Step::sorted(1),
            Step::sorted(2),
        ]
    );
}
