use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bst_engine::{Order, Tree};

/// Shapes of tree to bench against. The tree never rebalances so insertion order
/// decides its height.
#[derive(Clone, Copy)]
enum Shape {
    /// Values inserted in ascending order: a list leaning right.
    Degenerate,
    /// Values inserted so every subtree is perfectly balanced.
    Balanced,
}

impl Shape {
    fn name(self) -> &'static str {
        match self {
            Self::Degenerate => "degenerate",
            Self::Balanced => "balanced",
        }
    }

    fn build(self, num_nodes: i32) -> Tree<i32> {
        match self {
            Self::Degenerate => (0..num_nodes).collect(),
            Self::Balanced => {
                let mut tree = Tree::new();
                insert_midpoints(&mut tree, 0, num_nodes);
                tree
            }
        }
    }
}

fn insert_midpoints(tree: &mut Tree<i32>, low: i32, high: i32) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    tree.insert(mid);
    insert_midpoints(tree, low, mid);
    insert_midpoints(tree, mid + 1, high);
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 9] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        for shape in [Shape::Degenerate, Shape::Balanced] {
            let tree = shape.build(num_nodes);
            let id = BenchmarkId::new(shape.name(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.search(&i).found);
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "delete-root", |tree, _| {
        let root = tree.root().map(|n| *n.value());
        if let Some(root) = root {
            tree.delete(&root);
        }
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.search(&(i + 1)).found);
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.stats());
    });
    bench_helper(c, "traverse", |tree, _| {
        for order in Order::ALL {
            let _len = black_box(tree.traverse(order).len());
        }
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
