use ordered_tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(k) => bst.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => bst.delete(k) == set.take(k),
        };
        agrees && bst.is_ordered() && bst.len() == set.len()
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.keys().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_only_adds_its_key(xs: Vec<i8>, k: i8, probes: Vec<i8>) -> bool {
    let before: Tree<_> = xs.into_iter().collect();
    let mut after = before.clone();
    after.insert(k);

    after.contains(&k)
        && probes
            .iter()
            .filter(|probe| **probe != k)
            .all(|probe| after.contains(probe) == before.contains(probe))
}

#[quickcheck]
fn delete_only_removes_its_key(xs: Vec<i8>, pick: usize, probes: Vec<i8>) -> bool {
    if xs.is_empty() {
        return true;
    }
    let k = xs[pick % xs.len()];
    let before: Tree<_> = xs.into_iter().collect();
    let mut after = before.clone();

    after.try_delete(&k) == Ok(k)
        && !after.contains(&k)
        && after.is_ordered()
        && probes
            .iter()
            .filter(|probe| **probe != k)
            .all(|probe| after.contains(probe) == before.contains(probe))
}

#[quickcheck]
fn insert_then_delete_restores_keys(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    if tree.contains(&k) {
        return true;
    }
    let before: Vec<i8> = tree.keys().into_iter().copied().collect();

    tree.insert(k);
    tree.delete(&k);

    tree.keys().into_iter().copied().eq(before)
}

#[quickcheck]
fn size_conservation(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();

    if tree.contains(&k) {
        tree.try_delete(&k).is_ok() && tree.len() == len - 1
    } else {
        tree.try_insert(k).is_ok() && tree.len() == len + 1
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn maximum_and_minimum(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.maximum().ok() == xs.iter().max() && tree.minimum().ok() == xs.iter().min()
}

#[quickcheck]
fn destroy_releases_len_nodes(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();

    tree.destroy() == len
}
