use linkedbst::{Error, Tree};

use std::collections::HashSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and to a plain `Vec` holding the same items.
/// This way we can ensure that after a random smattering of adds, removes and rebuilds
/// we have the same items in both, with `size` tracking successful adds minus removes.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, items: &mut Vec<i8>) -> bool {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                items.push(*x);
            }
            Op::Remove(x) => {
                let removed = tree.remove(x);
                match items.iter().position(|y| y == x) {
                    Some(pos) => {
                        items.swap_remove(pos);
                        if removed != Ok(*x) {
                            return false;
                        }
                    }
                    None => {
                        if removed != Err(Error::KeyNotFound) {
                            return false;
                        }
                    }
                }
            }
            Op::Rebalance => {
                let height = tree.height();
                tree.rebalance();
                if tree.height() > height {
                    return false;
                }
            }
        }
        if tree.len() != items.len() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut items = Vec::new();

    if !do_ops(&ops, &mut tree, &mut items) {
        return false;
    }
    items.sort_unstable();
    tree.inorder().eq(items.iter())
}

#[quickcheck]
fn inorder_is_non_decreasing(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let inorder: Vec<_> = tree.inorder().collect();

    inorder.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn remove_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let copies = xs.iter().filter(|y| **y == x).count();

    match tree.remove(&x) {
        Ok(removed) => removed == x && tree.find(&x).is_some() == (copies > 1),
        Err(Error::KeyNotFound) => copies == 0,
    }
}

#[quickcheck]
fn rebalance_keeps_items_and_never_grows(xs: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before: Vec<_> = tree.inorder().copied().collect();
    let height = tree.height();

    tree.rebalance();
    tree.inorder().copied().eq(before) && tree.height() <= height && tree.is_balanced()
}

#[quickcheck]
fn queries_do_not_mutate(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let preorder: Vec<_> = tree.iter().copied().collect();

    let first = (tree.height(), tree.is_balanced());
    let _ = tree.range_find(&low, &high);
    let _ = tree.successor(&low);
    let _ = tree.predecessor(&high);
    let second = (tree.height(), tree.is_balanced());

    first == second && tree.iter().copied().eq(preorder)
}

#[quickcheck]
fn clone_is_equal_with_same_shape(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut items = Vec::new();
    if !do_ops(&ops, &mut tree, &mut items) {
        return false;
    }
    let clone = tree.clone();

    clone == tree
        && clone.to_string() == tree.to_string()
        && clone.height() == tree.height()
        && clone.iter().eq(tree.iter())
}

#[test]
fn examples_from_the_docs() {
    init_logging();
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.range_find(&2, &9), Some(vec![&3, &4, &5, &7, &8, &9]));

    tree.clear();
    assert_eq!(tree.find(&1), None);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    assert_eq!(Error::KeyNotFound.to_string(), "item not in tree");

    let mut words: Tree<String> = ["kiwi", "apple", "fig"].iter().map(|w| w.to_string()).collect();
    assert_eq!(words.replace(&"fig".to_string(), "fig".to_string()), Some("fig".to_string()));
    words.rebalance();
    assert_eq!(words.to_string(), "| kiwi\nfig\n| apple\n");
    assert_eq!(words.into_iter().collect::<Vec<_>>(), ["apple", "fig", "kiwi"]);
}
