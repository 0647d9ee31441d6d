use rebalance_bst::{Tree, TreeError};

use std::collections::BTreeSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());

    xs.iter().all(|x| tree.find(x).map(|node| node.key()) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).err() == Some(TreeError::KeyNotFound))
}

#[quickcheck]
fn size_is_number_of_unique_keys(xs: Vec<i8>) -> bool {
    let unique: BTreeSet<_> = xs.iter().copied().collect();
    let tree = Tree::build(xs);

    tree.len() == unique.len() && tree.level_order().len() == unique.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, extra: Vec<i16>) -> bool {
    let mut tree = Tree::build(xs);
    tree.extend(extra);

    tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    let before: Vec<_> = tree.iter().copied().collect();

    let inserted_any = xs.iter().any(|x| tree.insert(*x));

    !inserted_any && tree.iter().copied().eq(before) && tree.len() == tree.in_order().len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    let mut present: BTreeSet<_> = xs.into_iter().collect();

    for delete in &deletes {
        let len = tree.len();
        match tree.delete(delete) {
            Ok(removed) => {
                if removed != *delete || tree.len() != len - 1 || !present.remove(delete) {
                    return false;
                }
            }
            Err(TreeError::KeyNotFound) => {
                if tree.len() != len || present.contains(delete) {
                    return false;
                }
            }
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && tree.iter().eq(present.iter())
}

#[quickcheck]
fn rebalance_keeps_keys_and_balances(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::build(xs);
    tree.extend(inserts);
    let before: Vec<_> = tree.iter().copied().collect();

    tree.rebalance();

    tree.is_balanced() && tree.iter().copied().eq(before)
}

#[quickcheck]
fn depth_of_every_node_matches_level(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let mut ok = true;
    let mut level = 0;
    let mut remaining_in_level = tree.root().map_or(0, |_| 1);
    let mut next_level = 0;

    tree.level_order_with(|node| {
        ok &= tree.depth(node) == Ok(level);
        next_level += node.left().map_or(0, |_| 1) + node.right().map_or(0, |_| 1);
        remaining_in_level -= 1;
        if remaining_in_level == 0 {
            level += 1;
            remaining_in_level = next_level;
            next_level = 0;
        }
    });

    ok
}
