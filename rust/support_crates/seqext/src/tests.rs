//! Randomized cross-checks of the extension traits against straightforward
//! reference computations on `Vec`s.

use std::collections::HashSet;

use crate::prelude::*;

fn random_vec(max_len: usize, max_value: u32) -> Vec<u32> {
    let len = fastrand::usize(0..=max_len);
    (0..len).map(|_| fastrand::u32(0..max_value)).collect()
}

#[test]
fn test_concat_round_trip() {
    fastrand::seed(8317442);
    for _ in 0..200 {
        let a = random_vec(20, 100);
        let b = random_vec(20, 100);

        let expected: Vec<u32> = a.iter().chain(b.iter()).copied().collect();
        let concatenated: Vec<u32> = a.clone().into_iter().concat(b.clone()).collect();
        let added: Vec<u32> = (Seq::new(a.clone()) + b.clone()).collect();

        assert_eq!(concatenated, expected);
        assert_eq!(added, expected);
    }
}

#[test]
fn test_distinct_matches_naive() {
    fastrand::seed(55120931);
    for _ in 0..200 {
        let values = random_vec(50, 10);

        let mut seen = HashSet::new();
        let expected: Vec<u32> = values.iter().copied().filter(|v| seen.insert(*v)).collect();

        let actual: Vec<u32> = values.iter().copied().distinct().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_chunked_flattens_back() {
    fastrand::seed(1209984);
    for _ in 0..200 {
        let values = random_vec(40, 1000);
        let size = fastrand::usize(1..8);

        let chunks: Vec<Vec<u32>> = values.iter().copied().chunked(size).unwrap().collect();

        assert_eq!(chunks.len(), values.len().div_ceil(size));
        if let Some((last, full)) = chunks.split_last() {
            assert!(full.iter().all(|chunk| chunk.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
        }
        let flattened: Vec<u32> = chunks.into_iter().flatten().collect();
        assert_eq!(flattened, values);
    }
}

#[test]
fn test_group_by_partitions_input() {
    fastrand::seed(7732001);
    for _ in 0..100 {
        let values = random_vec(60, 50);
        let groups = values.iter().copied().group_by(|v| v % 7);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, values.len());

        for (key, group) in &groups {
            assert!(group.iter().all(|v| v % 7 == *key));
            let expected: Vec<u32> = values.iter().copied().filter(|v| v % 7 == *key).collect();
            assert_eq!(group, &expected);
        }

        let key_order: Vec<u32> = groups.keys().copied().collect();
        let first_seen: Vec<u32> = values.iter().map(|v| v % 7).distinct().collect();
        assert_eq!(key_order, first_seen);
    }
}

#[test]
fn test_slice_fast_paths_agree_with_iterators() {
    fastrand::seed(40210);
    for _ in 0..200 {
        let values = random_vec(30, 20);
        let index = fastrand::usize(0..40);

        assert_eq!(values.last_or_none(), values.iter().last_or_none());
        assert_eq!(
            values.element_at_or_none(index),
            values.iter().element_at_or_none(index)
        );
        assert_eq!(
            values.last_where_or_none(|v| **v % 3 == 0),
            values.iter().last_where_or_none(|v| **v % 3 == 0)
        );
        assert!(values.reversed().eq(values.iter().reversed()));
    }
}

#[test]
fn test_extrema_agree_with_std() {
    fastrand::seed(990017);
    for _ in 0..200 {
        let values = random_vec(30, 1000);
        assert_eq!(values.iter().min_or_none(), values.iter().min());
        assert_eq!(values.iter().max_or_none(), values.iter().max());
        assert_eq!(
            values.iter().copied().sum_or_none().is_none(),
            values.is_empty()
        );
    }
}

#[test]
fn test_first_or_none_iff_empty() {
    fastrand::seed(3);
    for _ in 0..50 {
        let values = random_vec(5, 10);
        match values.iter().first_or_none() {
            None => assert!(values.is_empty()),
            Some(first) => assert_eq!(Some(first), values.first()),
        }
    }
}
