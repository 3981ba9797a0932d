use bst_engine::{Node, Order, Tree};

use std::collections::{BTreeSet, HashSet};

fn values(nodes: Vec<&Node<i8>>) -> Vec<i8> {
    nodes.into_iter().map(|n| *n.value()).collect()
}

/// The height is the longest search path to any value in the tree.
fn reference_height(tree: &Tree<i8>) -> usize {
    tree.inorder()
        .into_iter()
        .map(|n| tree.search(n.value()).path.len())
        .max()
        .unwrap_or(0)
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();
        let inorder = values(tree.inorder());

        inorder.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x).found)
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let mut still_present: BTreeSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            let before = tree.len();
            let deleted = tree.delete(delete);
            assert_eq!(deleted, still_present.remove(delete));
            assert_eq!(tree.len(), if deleted { before - 1 } else { before });
        }

        deletes.iter().all(|x| !tree.contains(x))
            && values(tree.inorder()) == still_present.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn node_count_matches_reachable_nodes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.into_iter().collect();
        for delete in &deletes {
            tree.delete(delete);
        }

        Order::ALL.iter().all(|order| tree.traverse(*order).len() == tree.len())
    }
}

quickcheck::quickcheck! {
    fn height_and_balance(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();
        let left = tree.root().and_then(Node::left).map_or(0, Node::height) as isize;
        let right = tree.root().and_then(Node::right).map_or(0, Node::height) as isize;

        tree.height() == reference_height(&tree)
            && (tree.is_empty() || tree.balance_factor() == left - right)
    }
}

quickcheck::quickcheck! {
    fn search_path_ends_where_descent_stops(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();
        let search = tree.search(&probe);

        // Every step of the path is a child of the step before it.
        let linked = search.path.windows(2).all(|w| {
            [w[0].left(), w[0].right()]
                .into_iter()
                .flatten()
                .any(|child| child.id() == w[1].id())
        });
        let ends_right = match search.path.last() {
            None => tree.is_empty(),
            Some(last) if search.found => *last.value() == probe,
            Some(last) => {
                let next = if probe < *last.value() { last.left() } else { last.right() };
                next.is_none()
            }
        };

        linked && ends_right
    }
}
