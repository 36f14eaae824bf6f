//! Tests for the disjoint-set strategies.

use proptest::{prelude::*, test_runner::TestCaseResult};
use rstest::rstest;

use crate::{DisjointSetError, DisjointSetErrorCode, test_utils::suite_proptest_config};

use super::{DisjointSets, QuickFindDisjointSets, UnionBySizeCompressingDisjointSets};

fn registered<D: DisjointSets<u32> + Default>(count: u32) -> D {
    let mut sets = D::default();
    for item in 0..count {
        sets.make_set(item);
    }
    sets
}

fn assert_rejects_unknown_items<D: DisjointSets<u32> + Default>() {
    let mut sets: D = registered(2);
    let unknown = DisjointSetError::UnknownItem {
        operation: "find_set",
    };
    assert_eq!(sets.find_set(&7), Err(unknown));
    assert_eq!(
        sets.union(&0, &7),
        Err(DisjointSetError::UnknownItem { operation: "union" })
    );
    assert_eq!(
        sets.union(&7, &0),
        Err(DisjointSetError::UnknownItem { operation: "union" })
    );
    assert_eq!(unknown.code(), DisjointSetErrorCode::UnknownItem);
    assert_eq!(unknown.code().as_str(), "DISJOINT_SET_UNKNOWN_ITEM");
}

fn assert_union_semantics<D: DisjointSets<u32> + Default>() {
    let mut sets: D = registered(5);
    let singleton = sets.find_set(&4).expect("registered");
    assert_ne!(sets.find_set(&0).expect("registered"), singleton);

    assert_eq!(sets.union(&0, &1), Ok(true));
    assert_eq!(sets.union(&2, &3), Ok(true));
    assert_eq!(sets.union(&1, &0), Ok(false));
    assert_eq!(sets.union(&1, &3), Ok(true));
    assert_eq!(sets.union(&0, &2), Ok(false));

    let root = sets.find_set(&0).expect("registered");
    for item in 1..4 {
        assert_eq!(sets.find_set(&item), Ok(root));
    }
    assert_eq!(sets.find_set(&4), Ok(singleton));
}

#[test]
fn union_by_size_rejects_unknown_items() {
    assert_rejects_unknown_items::<UnionBySizeCompressingDisjointSets<u32>>();
}

#[test]
fn quick_find_rejects_unknown_items() {
    assert_rejects_unknown_items::<QuickFindDisjointSets<u32>>();
}

#[test]
fn union_by_size_merges_sets() {
    assert_union_semantics::<UnionBySizeCompressingDisjointSets<u32>>();
}

#[test]
fn quick_find_merges_sets() {
    assert_union_semantics::<QuickFindDisjointSets<u32>>();
}

#[test]
fn singleton_is_its_own_representative() {
    let mut sets = UnionBySizeCompressingDisjointSets::new();
    sets.make_set("solo");
    let id = sets.id(&"solo").expect("registered");
    assert_eq!(sets.find_set(&"solo"), Ok(id));
    assert_eq!(sets.len(), 1);
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn larger_set_root_absorbs_smaller_set() {
    let mut sets: UnionBySizeCompressingDisjointSets<u32> = registered(4);
    sets.union(&0, &1).expect("registered");
    sets.union(&0, &2).expect("registered");
    let big_root = sets.find_set(&0).expect("registered");

    // The singleton is passed second, so only the size rule keeps the big root.
    sets.union(&1, &3).expect("registered");
    assert_eq!(sets.find_set(&3), Ok(big_root));
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn equal_sizes_attach_left_root_under_right_root() {
    let mut sets: UnionBySizeCompressingDisjointSets<u32> = registered(2);
    sets.union(&0, &1).expect("registered");
    assert_eq!(sets.find_set(&0), Ok(sets.id(&1).expect("registered")));
}

#[test]
fn find_set_halves_the_walked_path() {
    let mut sets: UnionBySizeCompressingDisjointSets<u32> = registered(16);
    for step in [1_u32, 2, 4, 8] {
        let mut left = step - 1;
        while left < 16 {
            sets.union(&left, &(left + step)).expect("registered");
            left += 2 * step;
        }
    }
    let leaf = sets.id(&0).expect("registered");
    assert_eq!(sets.depth_of(leaf), 4);

    let root = sets.find_set(&0).expect("registered");
    assert_eq!(root, sets.id(&15).expect("registered"));
    assert_eq!(sets.depth_of(leaf), 2);

    sets.find_set(&0).expect("registered");
    assert_eq!(sets.depth_of(leaf), 1);
}

#[rstest]
#[case::ascending_chain(256)]
#[case::odd_count(1_000)]
fn sequential_unions_keep_paths_logarithmic(#[case] count: u32) {
    let mut sets: UnionBySizeCompressingDisjointSets<u32> = registered(count);
    for item in 1..count {
        sets.union(&(item - 1), &item).expect("registered");
    }
    let bound = usize::try_from(count.ilog2()).expect("small");
    let deepest = (0..sets.len()).map(|id| sets.depth_of(id)).max();
    assert!(deepest.is_some_and(|depth| depth <= bound));
    assert_eq!(sets.set_count(), 1);
}

/// Relabels the component of `left` with the label of `right`'s component.
fn merge_labels(labels: &mut [usize], left: usize, right: usize) -> bool {
    let (from, to) = (labels[left], labels[right]);
    if from == to {
        return false;
    }
    for label in labels.iter_mut() {
        if *label == from {
            *label = to;
        }
    }
    true
}

fn union_plan() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..64).prop_flat_map(|count| {
        let pairs = proptest::collection::vec((0..count, 0..count), 0..(count * 2));
        (Just(count), pairs)
    })
}

fn check_against_oracle<D>(count: usize, unions: &[(usize, usize)]) -> TestCaseResult
where
    D: DisjointSets<usize> + Default,
{
    let mut sets = D::default();
    for item in 0..count {
        sets.make_set(item);
    }
    let mut labels: Vec<usize> = (0..count).collect();
    for &(left, right) in unions {
        let merged = sets
            .union(&left, &right)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(merged, merge_labels(&mut labels, left, right));
    }
    let mut representatives = Vec::with_capacity(count);
    for item in 0..count {
        let root = sets
            .find_set(&item)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        representatives.push(root);
    }
    for left in 0..count {
        for right in 0..count {
            prop_assert_eq!(
                representatives[left] == representatives[right],
                labels[left] == labels[right]
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn union_by_size_matches_oracle((count, unions) in union_plan()) {
        check_against_oracle::<UnionBySizeCompressingDisjointSets<usize>>(count, &unions)?;
    }

    #[test]
    fn quick_find_matches_oracle((count, unions) in union_plan()) {
        check_against_oracle::<QuickFindDisjointSets<usize>>(count, &unions)?;
    }

    #[test]
    fn depth_never_exceeds_log_of_item_count((count, unions) in union_plan()) {
        let mut sets = UnionBySizeCompressingDisjointSets::new();
        for item in 0..count {
            sets.make_set(item);
        }
        for (left, right) in unions {
            sets.union(&left, &right).map_err(|err| TestCaseError::fail(err.to_string()))?;
        }
        let bound = usize::try_from(count.ilog2()).unwrap_or(usize::MAX);
        for id in 0..count {
            prop_assert!(sets.depth_of(id) <= bound);
        }
    }
}
