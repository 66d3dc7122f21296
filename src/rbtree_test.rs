use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::random;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{Config, DeleteMode};
use crate::error::Error;
use crate::node::{Color, NodeId};
use crate::rbtree::RbTree;
use crate::step::{Rotation, Step, StepKind};

#[test]
fn test_id() {
    let tree: RbTree<i64> = RbTree::new("test-rbtree");
    assert_eq!(tree.id(), "test-rbtree".to_string());
}

#[test]
fn test_len() {
    let tree: RbTree<i64> = RbTree::new("test-rbtree");
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_right_right() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let n10 = tree.insert(10).unwrap();
    tree.insert(20).unwrap();

    let mut steps: Vec<Step<i64>> = vec![];
    tree.insert_observed(30, &mut steps).unwrap();

    let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Insert, StepKind::Rotation(Rotation::RightRight)]
    );
    assert_eq!(steps[1].description(), "RR Rotation at Node 10");
    assert_eq!(steps[1].highlight()[0], n10);

    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), vec![10, 20, 30]);
    let root = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.color(), Color::Black);
    // pivot and grandparent exchange colors, both outer nodes end red.
    assert_eq!(tree.color_of(&10), Some(Color::Red));
    assert_eq!(tree.color_of(&30), Some(Color::Red));
    // node identity survives the rotation.
    assert_eq!(tree.find(&10), Some(n10));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_right_left() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    tree.insert(10).unwrap();
    tree.insert(20).unwrap();

    let mut steps: Vec<Step<i64>> = vec![];
    tree.insert_observed(15, &mut steps).unwrap();
    assert_eq!(
        steps.last().map(|s| s.kind()),
        Some(StepKind::Rotation(Rotation::RightLeft))
    );

    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), vec![10, 15, 20]);
    let root = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(*root.key(), 15);
    assert_eq!(root.color(), Color::Black);
    let snapshot = tree.snapshot();
    let (left, right) = snapshot.children(tree.root().unwrap());
    assert_eq!(snapshot.node(left.unwrap()).unwrap().key, 10);
    assert_eq!(snapshot.node(right.unwrap()).unwrap().key, 20);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_left_left() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    tree.insert(10).unwrap();
    tree.insert(5).unwrap();

    let mut steps: Vec<Step<i64>> = vec![];
    tree.insert_observed(1, &mut steps).unwrap();
    assert_eq!(
        steps.last().map(|s| s.kind()),
        Some(StepKind::Rotation(Rotation::LeftLeft))
    );
    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), vec![1, 5, 10]);
    assert_eq!(tree.get(tree.root().unwrap()).map(|n| *n.key()), Some(5));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_left_right() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    tree.insert(10).unwrap();
    tree.insert(5).unwrap();

    let mut steps: Vec<Step<i64>> = vec![];
    tree.insert_observed(7, &mut steps).unwrap();
    assert_eq!(
        steps.last().map(|s| s.kind()),
        Some(StepKind::Rotation(Rotation::LeftRight))
    );
    assert_eq!(steps.last().unwrap().description(), "LR Rotation at Node 10");
    assert_eq!(tree.get(tree.root().unwrap()).map(|n| *n.key()), Some(7));
    assert_eq!(tree.color_of(&5), Some(Color::Red));
    assert_eq!(tree.color_of(&10), Some(Color::Red));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_recolor() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in [10, 5, 20].iter() {
        tree.insert(*key).unwrap();
    }

    let mut steps: Vec<Step<i64>> = vec![];
    tree.insert_observed(30, &mut steps).unwrap();
    let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Insert, StepKind::Recolor, StepKind::RootRecolor]
    );
    assert_eq!(
        steps[1].description(),
        "Recoloring: Parent 20, Uncle 5 -> Black; Grand 10 -> Red"
    );
    assert_eq!(steps[1].highlight().len(), 3);
    // snapshot taken right after the recolor, before the root fix.
    let recolored = steps[1].snapshot();
    let root = recolored.node(recolored.root.unwrap()).unwrap();
    assert_eq!(root.color, Color::Red);

    assert_eq!(tree.color_of(&10), Some(Color::Black));
    assert_eq!(tree.color_of(&5), Some(Color::Black));
    assert_eq!(tree.color_of(&20), Some(Color::Black));
    assert_eq!(tree.color_of(&30), Some(Color::Red));
    assert_eq!(tree.validate().unwrap().blacks(), Some(2));
}

#[test]
fn test_first_insert() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let mut steps: Vec<Step<i64>> = vec![];
    let id = tree.insert_observed(42, &mut steps).unwrap();

    let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![StepKind::Insert, StepKind::RootRecolor]);
    assert_eq!(steps[0].snapshot().nodes[0].color, Color::Red);
    assert_eq!(steps[1].snapshot().nodes[0].color, Color::Black);
    assert_eq!(steps[1].highlight(), &[id]);
}

#[test]
fn test_duplicate() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in 0..10 {
        tree.insert(key).unwrap();
    }
    let before = tree.snapshot();

    let mut steps: Vec<Step<i64>> = vec![];
    assert_eq!(
        tree.insert_observed(7, &mut steps),
        Err(Error::DuplicateKey(7))
    );
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].kind(), StepKind::Duplicate);
    assert_eq!(steps[0].description(), "Duplicate value 7 not allowed");
    assert_eq!(steps[0].highlight(), &[tree.find(&7).unwrap()]);

    assert_eq!(tree.len(), 10);
    assert_eq!(tree.snapshot(), before);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_delete_missing() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    assert_eq!(tree.delete(&1), None);

    for key in 0..10 {
        tree.insert(key).unwrap();
    }
    let before = tree.snapshot();
    let mut steps: Vec<Step<i64>> = vec![];
    assert_eq!(tree.delete_observed(&10, &mut steps), None);
    assert!(steps.is_empty());
    assert_eq!(tree.snapshot(), before);
    assert_eq!(tree.len(), 10);
}

#[test]
fn test_rotation_round_trip() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in [10, 5, 20, 30].iter() {
        tree.insert(*key).unwrap();
    }
    let before = tree.snapshot();
    let (n20, n30) = (tree.find(&20).unwrap(), tree.find(&30).unwrap());

    tree.rotate_left(n20);
    assert_eq!(tree.get(n30).unwrap().left(), Some(n20));
    assert_eq!(tree.get(n20).unwrap().parent(), Some(n30));
    assert_eq!(tree.color_of(&20), Some(Color::Red));
    assert_eq!(tree.color_of(&30), Some(Color::Black));

    tree.rotate_right(n30);
    assert_eq!(tree.snapshot(), before);

    // around the root, the root reference follows the pivot.
    let (n10, n20) = (tree.find(&10).unwrap(), tree.find(&20).unwrap());
    tree.rotate_left(n10);
    assert_eq!(tree.root(), Some(n20));
    assert_eq!(tree.get(n20).unwrap().parent(), None);
    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), vec![5, 10, 20, 30]);
    tree.rotate_right(n20);
    assert_eq!(tree.root(), Some(n10));
    assert_eq!(tree.snapshot(), before);
}

#[test]
#[should_panic(expected = "has no right child")]
fn test_rotate_missing_child() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let id = tree.insert(1).unwrap();
    tree.rotate_left(id);
}

#[test]
fn test_delete_splice_only() {
    let mut config = Config::new("test-rbtree");
    config.set_delete_mode(DeleteMode::SpliceOnly);
    let mut tree: RbTree<i64> = RbTree::with_config(config);
    for key in [10, 5, 20, 30].iter() {
        tree.insert(*key).unwrap();
    }

    assert_eq!(tree.delete(&5), Some(5));
    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), vec![10, 20, 30]);
    assert_eq!(tree.color_of(&10), Some(Color::Black));
    // plain splice of a black leaf, black-height is left unbalanced.
    match tree.validate() {
        Err(Error::UnbalancedBlacks(_)) => (),
        res => panic!("expected unbalanced blacks, got {:?}", res.map(|_| ())),
    }
}

#[test]
fn test_delete_rebalance() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in [10, 5, 20, 30].iter() {
        tree.insert(*key).unwrap();
    }

    let mut steps: Vec<Step<i64>> = vec![];
    assert_eq!(tree.delete_observed(&5, &mut steps), Some(5));
    assert_eq!(steps[0].kind(), StepKind::Delete);
    assert_eq!(steps.last().map(|s| s.kind()), Some(StepKind::Rebalance));

    assert_eq!(tree.get(tree.root().unwrap()).map(|n| *n.key()), Some(20));
    assert_eq!(tree.color_of(&10), Some(Color::Black));
    assert_eq!(tree.color_of(&30), Some(Color::Black));
    assert_eq!(tree.validate().unwrap().blacks(), Some(2));
}

#[test]
fn test_delete_two_children() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in 0..10 {
        tree.insert(key).unwrap();
    }
    let root = tree.root().unwrap();
    let key = *tree.get(root).unwrap().key();
    let successor = key + 1;
    let successor_id = tree.find(&successor).unwrap();

    let mut steps: Vec<Step<i64>> = vec![];
    assert_eq!(tree.delete_observed(&key, &mut steps), Some(key));
    assert_eq!(steps[0].kind(), StepKind::Delete);
    assert_eq!(steps[0].highlight(), &[root]);
    // value copy, the successor's slot is the one that goes away.
    assert!(tree.get(successor_id).is_none());
    assert_eq!(tree.find(&successor), Some(root));
    assert_eq!(tree.len(), 9);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_delete_all() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let mut keys: Vec<i64> = (0..200).collect();
    let mut rng = SmallRng::from_seed(make_seed().to_le_bytes());
    keys.shuffle(&mut rng);
    for key in keys.iter() {
        tree.insert(*key).unwrap();
    }
    keys.shuffle(&mut rng);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.delete(key), Some(*key));
        assert_eq!(tree.len(), keys.len() - i - 1);
        assert!(tree.validate().is_ok(), "after deleting {}", key);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert!(tree.iter().next().is_none());
}

#[test]
fn test_recycled_ids() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    for key in 0..4 {
        tree.insert(key).unwrap();
    }
    let id = tree.find(&3).unwrap();
    assert_eq!(tree.delete(&3), Some(3));
    assert_eq!(tree.insert(100), Ok(id));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_sorted_inserts() {
    let n = 1000;
    let mut asc: RbTree<i64> = RbTree::new("ascending");
    let mut desc: RbTree<i64> = RbTree::new("descending");
    for key in 0..n {
        asc.insert(key).unwrap();
        desc.insert(n - key - 1).unwrap();
    }
    for tree in [asc, desc].iter() {
        let stats = tree.validate().unwrap();
        assert_eq!(stats.entries(), n as usize);
        let depths = stats.depths().unwrap();
        assert_eq!(depths.samples(), n as usize + 1);
        // height of a red-black tree is at most 2*log2(n+1).
        assert!(depths.max() <= 20, "max depth {}", depths.max());
        assert!(depths.min() >= stats.blacks().unwrap() - 1);
        assert!(tree.iter().cloned().eq(0..n));
    }
}

#[test]
fn test_snapshot() {
    let tree: RbTree<i64> = RbTree::load_from("test-rbtree", vec![4, 2, 6, 1, 3, 5, 7]).unwrap();
    let snapshot = tree.snapshot();
    assert_eq!(snapshot.nodes.len(), 7);
    assert_eq!(snapshot.edges.len(), 6);
    assert_eq!(snapshot.nodes[0].id, tree.root().unwrap());
    assert_eq!(
        snapshot.keys().into_iter().cloned().collect::<Vec<i64>>(),
        vec![1, 2, 3, 4, 5, 6, 7]
    );
    for edge in snapshot.edges.iter() {
        assert_eq!(tree.get(edge.child).unwrap().parent(), Some(edge.parent));
    }
    for view in snapshot.nodes.iter() {
        assert_eq!(tree.color_of(&view.key), Some(view.color));
    }
}

#[test]
fn test_load_from_duplicate() {
    match RbTree::load_from("test-rbtree", vec![1, 2, 3, 2]) {
        Err(Error::DuplicateKey(2)) => (),
        Err(err) => panic!("unexpected {:?}", err),
        Ok(_) => panic!("duplicate went through"),
    }
}

#[test]
fn test_clear() {
    let mut tree: RbTree<i64> = RbTree::load_from("test-rbtree", 0..20).unwrap();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.insert(5), Ok(NodeId(0)));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_random() {
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let mut rng = SmallRng::from_seed(make_seed().to_le_bytes());

    assert_eq!(tree.random(&mut rng), None);
    tree.insert(0).unwrap();
    assert_eq!(tree.random(&mut rng), Some(0));

    for key in 1..10_000 {
        tree.insert(key).unwrap();
    }
    for _i in 0..10_000 {
        let key = tree.random(&mut rng).unwrap();
        assert!(key >= 0 && key < 10_000);
    }
}

#[test]
fn test_steps_replay() {
    // every snapshot in the stream is a consistent tree shape.
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let mut steps: Vec<Step<i64>> = vec![];
    for key in [50, 25, 75, 10, 30, 60, 90, 5, 1, 28, 29].iter() {
        tree.insert_observed(*key, &mut steps).unwrap();
    }
    for key in [25, 50, 1].iter() {
        tree.delete_observed(key, &mut steps).unwrap();
    }
    assert!(!steps.is_empty());
    for step in steps.iter() {
        let snapshot = step.snapshot();
        assert_eq!(snapshot.edges.len() + 1, snapshot.nodes.len());
        let keys = snapshot.keys();
        assert_eq!(keys.len(), snapshot.nodes.len());
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", step.description());
    }
    assert_eq!(steps.last().unwrap().snapshot(), &tree.snapshot());
}

#[test]
fn test_crud() {
    let size = 500;
    let mut tree: RbTree<i64> = RbTree::new("test-rbtree");
    let mut refks = RefKeys::new(size);

    for _ in 0..20_000 {
        let key: i64 = (random::<i64>() % (size as i64)).abs();
        let op: i64 = (random::<i64>() % 3).abs();
        match op {
            0 => {
                let fresh = refks.insert(key);
                assert_eq!(tree.insert(key).is_ok(), fresh);
            }
            1 => {
                let val = tree.delete(&key);
                let refval = refks.delete(key);
                assert_eq!(val, refval);
            }
            2 => assert_eq!(tree.contains(&key), refks.contains(key)),
            op => panic!("unreachable {}", op),
        };

        assert!(tree.validate().is_ok());
    }

    assert_eq!(tree.len(), refks.len());
    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), refks.keys());
}

#[test]
fn test_crud_splice_only() {
    let size = 200;
    let mut config = Config::new("test-rbtree");
    config.set_delete_mode(DeleteMode::SpliceOnly);
    let mut tree: RbTree<i64> = RbTree::with_config(config);
    let mut refks = RefKeys::new(size);

    for _ in 0..5_000 {
        let key: i64 = (random::<i64>() % (size as i64)).abs();
        if random::<bool>() {
            assert_eq!(tree.insert(key).is_ok(), refks.insert(key));
        } else {
            assert_eq!(tree.delete(&key), refks.delete(key));
        }

        // colors may drift, ordering and links may not.
        let snapshot = tree.snapshot();
        for edge in snapshot.edges.iter() {
            assert_eq!(tree.get(edge.child).unwrap().parent(), Some(edge.parent));
        }
        if let Some(root) = tree.root() {
            assert_eq!(tree.get(root).unwrap().color(), Color::Black);
        }
    }
    assert_eq!(tree.iter().cloned().collect::<Vec<i64>>(), refks.keys());
}

#[test]
fn test_depth_json() {
    let tree: RbTree<i64> = RbTree::load_from("test-rbtree", 0..3).unwrap();
    let depths = tree.validate().unwrap().depths().unwrap();
    assert_eq!(depths.samples(), 4);
    assert_eq!((depths.min(), depths.max(), depths.mean()), (2, 2, 2));
    assert_eq!(
        depths.json(),
        "{ \"min\": 2, \"mean\": 2, \"max\": 2, \"percentiles\": { \"100\": 2 } }"
    );

    let empty: RbTree<i64> = RbTree::new("empty");
    assert_eq!(empty.validate().unwrap().depths().unwrap().samples(), 1);
    assert!(empty.stats().depths().is_none());
}

fn make_seed() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

include!("./ref_test.rs");
