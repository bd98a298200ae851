use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeMap;

/// Checks BST order, the AVL bound and stored heights. Returns the subtree
/// height and node count.
fn validate_node(link: &Link, lower: Option<&str>, upper: Option<&str>) -> (u32, usize) {
    let Some(n) = link else {
        return (0, 0);
    };
    if let Some(lo) = lower {
        assert!(n.key.as_str() > lo, "{:?} must sort after {:?}", n.key, lo);
    }
    if let Some(hi) = upper {
        assert!(n.key.as_str() < hi, "{:?} must sort before {:?}", n.key, hi);
    }

    let (lh, lc) = validate_node(&n.left, lower, Some(n.key.as_str()));
    let (rh, rc) = validate_node(&n.right, Some(n.key.as_str()), upper);
    assert!(lh.abs_diff(rh) <= 1, "unbalanced at {:?}: {lh} vs {rh}", n.key);
    assert_eq!(n.height, 1 + lh.max(rh), "stale height at {:?}", n.key);
    (n.height, 1 + lc + rc)
}

fn validate_tree(t: &PrefixTree) {
    let (h, count) = validate_node(&t.root, None, None);
    assert_eq!(h, t.height());
    assert_eq!(count, t.size(), "reachable node count must match size");
}

/// Model answer: matches ranked by descending frequency, then ascending key.
fn expected_completions(m: &BTreeMap<String, i64>, prefix: &str, limit: usize) -> Vec<String> {
    let mut hits: Vec<(&String, i64)> = m
        .iter()
        .filter(|(k, _)| k.starts_with(prefix))
        .map(|(k, &f)| (k, f))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    hits.into_iter().take(limit).map(|(k, _)| k.clone()).collect()
}

fn key_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so prefixes actually collide.
    "[a-d]{0,6}"
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(
        #[proptest(strategy = "key_strategy()")] String,
        #[proptest(strategy = "-20i64..20")] i64,
    ),
    Complete(#[proptest(strategy = "\"[a-e]{0,3}\"")] String),
    Get(#[proptest(strategy = "key_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=500)) {
        let mut t = PrefixTree::new();
        let mut m: BTreeMap<String, i64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, frequency) => {
                    let fresh = !m.contains_key(&key);
                    prop_assert_eq!(t.insert(&key, frequency), fresh);
                    m.entry(key).or_insert(frequency);
                }
                Op::Complete(prefix) => {
                    let expected = expected_completions(&m, &prefix, 3);
                    prop_assert_eq!(t.completions(&prefix), expected);
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key), m.get(&key).copied());
                }
            }

            prop_assert_eq!(t.size(), m.len());
        }

        validate_tree(&t);
        let got: Vec<(String, i64)> = t.iter().map(|(k, f)| (k.to_owned(), f)).collect();
        let expected: Vec<(String, i64)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_completion_limit(
        entries in prop::collection::vec((key_strategy(), any::<i64>()), 0..200),
        prefix in "[a-d]{0,2}",
        limit in 0usize..8,
    ) {
        let mut t = PrefixTree::with_config(Config { max_completions: limit });
        let mut m = BTreeMap::new();
        for (k, f) in entries {
            t.insert(&k, f);
            m.entry(k).or_insert(f);
        }
        validate_tree(&t);
        prop_assert_eq!(t.completions(&prefix), expected_completions(&m, &prefix, limit));
    }
}

/// Calls `f` once per ordering of `items`, permuting in place (Heap's
/// algorithm). `items` ends up in some permutation of its starting order.
fn for_each_ordering<T>(items: &mut [T], mut f: impl FnMut(&[T])) {
    fn heap<T>(k: usize, items: &mut [T], f: &mut impl FnMut(&[T])) {
        if k <= 1 {
            f(items);
            return;
        }
        heap(k - 1, items, f);
        for i in 0..k - 1 {
            let j = if k % 2 == 0 { i } else { 0 };
            items.swap(j, k - 1);
            heap(k - 1, items, f);
        }
    }

    let n = items.len();
    heap(n, items, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    use std::collections::HashSet;

    let mut entries = [
        ("a", 4),
        ("b", 1),
        ("c", 6),
        ("aa", 2),
        ("ab", 5),
        ("ba", 3),
        ("", 0),
    ];
    let n = entries.len();
    let mut seen: HashSet<Vec<&str>> = HashSet::new();

    for_each_ordering(&mut entries, |order| {
        seen.insert(order.iter().map(|&(k, _)| k).collect());

        let t: PrefixTree = order.iter().copied().collect();
        validate_tree(&t);
        assert_eq!(t.size(), n);
        assert!(t.height() <= 4, "height {} for {:?}", t.height(), order);

        assert_eq!(t.completions(""), ["c", "ab", "a"]);
        assert_eq!(t.completions("a"), ["ab", "a", "aa"]);
        assert_eq!(t.completions("b"), ["ba", "b"]);
        assert_eq!(t.completions("ab"), ["ab"]);
        assert!(t.completions("abc").is_empty());
        assert!(t.completions("d").is_empty());
    });

    // 7! distinct insertion orders.
    assert_eq!(seen.len(), 5040);
}

#[test]
fn ascending_and_descending_inserts_stay_balanced() {
    let keys: Vec<String> = (0..512).map(|i| format!("{i:04}")).collect();

    let up: PrefixTree = keys.iter().map(|k| (k.as_str(), 1)).collect();
    validate_tree(&up);
    let down: PrefixTree = keys.iter().rev().map(|k| (k.as_str(), 1)).collect();
    validate_tree(&down);

    // Perfectly full at 511 nodes, so 512 nodes need exactly 10 levels.
    assert_eq!(up.height(), 10);
    assert_eq!(down.height(), 10);
}
