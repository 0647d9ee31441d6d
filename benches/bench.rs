use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rebalance_bst::{Order, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an ascending manner. Nothing rebalances on insert,
/// so this is a linked list in all but name.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    tree.extend((0..).take(num_nodes_in_full_tree(num_levels)));
    tree
}

/// Builds a full tree with `num_levels` levels of nodes.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    Tree::build((0..).take(num_nodes_in_full_tree(num_levels)))
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced trees get expensive to build quickly, so stop at 2^11.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

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

/// Measures building a tree from shuffled keys with duplicates.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = num_nodes_in_full_tree(num_levels) as i32;
        // A cheap deterministic shuffle. Every key shows up twice.
        let keys: Vec<i32> = (0..num_nodes * 2)
            .map(|x| (x * 7_919) % num_nodes)
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(num_nodes), &keys, |b, keys| {
            b.iter(|| Tree::build(black_box(keys.iter().copied())))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i).is_ok());
    });
    bench_helper(c, "delete", |tree, i| {
        let _ = tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)).is_ok());
    });
    bench_helper(c, "delete-miss", |tree, i| {
        let _ = tree.delete(&(i + 1));
    });

    bench_helper(c, "level-order", |tree, _| {
        black_box(tree.traverse(Order::LevelOrder));
    });
    bench_helper(c, "in-order", |tree, _| {
        black_box(tree.iter().count());
    });

    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });

    bench_build(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
