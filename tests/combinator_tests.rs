//! Integration tests for the lazy combinators.

#![cfg(feature = "combinator")]

use std::cell::Cell;

use lazy_seq::combinator::{filter, map, skip, take, zip, zip_n, zipf, zipf_n};
use lazy_seq::error::ValidationError;
use lazy_seq::sequence::{Seq, Sequence, SequenceExt};
use lazy_seq::source::{range, range_from};
use rstest::rstest;

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn pipeline_construction_pulls_nothing() {
    let pulls = Cell::new(0);
    let counted = map(
        |value: u32| {
            pulls.set(pulls.get() + 1);
            value
        },
        range_from(0_u32),
    );
    let pipeline = take(2, skip(3, filter(|value: &u32| value % 2 == 0, &counted)));
    assert_eq!(pulls.get(), 0);

    let mut cursor = pipeline.cursor();
    assert_eq!(pulls.get(), 0);
    assert_eq!(cursor.next(), Some(6));
    assert_eq!(pulls.get(), 7);
    assert_eq!(cursor.next(), Some(8));
    assert_eq!(pulls.get(), 9);
    assert_eq!(cursor.next(), None);
    assert_eq!(pulls.get(), 9);
}

#[rstest]
fn map_invokes_function_once_per_pulled_value() {
    let calls = Cell::new(0);
    let squares = map(
        |value: i64| {
            calls.set(calls.get() + 1);
            value * value
        },
        vec![1, 2, 3, 4],
    );
    let first_two: Vec<i64> = squares.cursor().take(2).collect();
    assert_eq!(first_two, vec![1, 4]);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn cursors_over_one_pipeline_are_independent() {
    let doubled = map(|value: i32| value * 2, range(0, 5));
    let mut first = doubled.cursor();
    let mut second = doubled.cursor();
    assert_eq!(first.next(), Some(0));
    assert_eq!(first.next(), Some(2));
    assert_eq!(second.next(), Some(0));
    assert_eq!(first.next(), Some(4));
}

// =============================================================================
// take / skip
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(2, vec![10, 20])]
#[case(9, vec![10, 20, 30])]
fn take_bounds(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(take(count, vec![10, 20, 30]).cursor().collect::<Vec<_>>(), expected);
}

#[rstest]
fn take_bounds_an_unbounded_range() {
    let first = take(4, range_from(0_i32));
    assert_eq!(first.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[rstest]
#[case(0, vec![10, 20, 30])]
#[case(2, vec![30])]
#[case(9, vec![])]
fn skip_bounds(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(skip(count, vec![10, 20, 30]).cursor().collect::<Vec<_>>(), expected);
}

#[rstest]
fn take_does_not_pull_past_its_count() {
    let pulls = Cell::new(0);
    let counted = map(
        |value: u8| {
            pulls.set(pulls.get() + 1);
            value
        },
        range_from(0_u8),
    );
    let bounded = take(3, &counted);
    let mut cursor = bounded.cursor();
    while cursor.next().is_some() {}
    assert_eq!(pulls.get(), 3);
    assert_eq!(cursor.next(), None);
    assert_eq!(pulls.get(), 3);
}

// =============================================================================
// zip family
// =============================================================================

#[rstest]
fn zip_truncates_to_shortest() {
    let pairs = zip(vec![1, 2, 3], vec!['a', 'b']);
    assert_eq!(pairs.cursor().collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b')]);
}

#[rstest]
fn zip_n_rows_in_lockstep() {
    let rows = zip_n(vec![vec![1, 2, 3], vec![10, 20], vec![100, 200, 300]]).unwrap();
    assert_eq!(
        rows.cursor().collect::<Vec<_>>(),
        vec![vec![1, 10, 100], vec![2, 20, 200]]
    );
    assert_eq!(rows.arity(), 3);
}

#[rstest]
fn zipf_n_applies_combiner_to_each_row() {
    let sums = zipf_n(
        |row: Vec<i32>| row.into_iter().sum::<i32>(),
        [range(0, 3), range(10, 20), range(100, 1000)],
    )
    .unwrap();
    assert_eq!(sums.cursor().collect::<Vec<_>>(), vec![110, 113, 116]);
}

#[rstest]
fn two_input_zipf_matches_general_path() {
    let left = vec![1, 2, 3, 4];
    let right = vec![5, 6, 7];
    let pairwise = zipf(|a: i32, b: i32| a * b, &left, &right);
    let general = zipf_n(|row: Vec<i32>| row[0] * row[1], [&left, &right]).unwrap();
    assert_eq!(
        pairwise.cursor().collect::<Vec<_>>(),
        general.cursor().collect::<Vec<_>>()
    );
}

#[rstest]
#[case(0)]
#[case(1)]
fn zip_n_rejects_fewer_than_two_inputs(#[case] count: usize) {
    let inputs: Vec<Vec<u8>> = vec![vec![1]; count];
    let error = zip_n(inputs).unwrap_err();
    assert_eq!(error, ValidationError::TooFewSequences { count });
    assert_eq!(error.identifier(), "requires at least two input sequences");
}

#[rstest]
fn zip_over_infinite_inputs_terminates_with_finite_one() {
    let labelled = zip(range_from(1_u64), "xyz");
    assert_eq!(labelled.cursor().count(), 3);
}

// =============================================================================
// Type-erased pipelines
// =============================================================================

#[rstest]
fn boxed_pipelines_share_one_type() {
    let pipelines: Vec<Seq<i32>> = vec![
        vec![1, 2, 3].map(|value: i32| value + 1).boxed(),
        range_from(0).filter(|value: &i32| value % 5 == 0).take(2).boxed(),
        vec![9, 8, 7].skip(2).boxed(),
    ];
    let collected: Vec<Vec<i32>> = pipelines
        .iter()
        .map(|pipeline| pipeline.cursor().collect())
        .collect();
    assert_eq!(collected, vec![vec![2, 3, 4], vec![0, 5], vec![7]]);
}
