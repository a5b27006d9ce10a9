use hollow_store::MaxHeap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum HeapOp {
    Add(i32),
    ExtractMax,
    Peek,
}

fn heap_op_strategy() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        4 => (-1_000i32..1_000).prop_map(HeapOp::Add),
        3 => Just(HeapOp::ExtractMax),
        1 => Just(HeapOp::Peek),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Draining a heapified sequence yields its keys in non-increasing order.
    #[test]
    fn drain_is_non_increasing(keys in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut heap = MaxHeap::heapify(keys.iter().map(|&key| (key, ())).collect());
        prop_assert_eq!(heap.peek().map(|(key, _)| *key), keys.iter().copied().max());

        let mut drained = Vec::with_capacity(keys.len());
        while let Some((key, ())) = heap.get_max() {
            drained.push(key);
        }

        let mut expected = keys;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, expected);
    }

    /// Replays random operations against a sorted `Vec` model.
    #[test]
    fn ops_match_sorted_model(start in prop::collection::vec(-1_000i32..1_000, 0..100), ops in prop::collection::vec(heap_op_strategy(), 0..1_000)) {
        let mut heap: MaxHeap<i32, ()> = start.iter().map(|&key| (key, ())).collect();
        let mut model = start;
        model.sort_unstable();

        for op in &ops {
            match op {
                HeapOp::Add(key) => {
                    heap.add(*key, ());
                    let at = model.partition_point(|probe| probe < key);
                    model.insert(at, *key);
                }
                HeapOp::ExtractMax => {
                    prop_assert_eq!(heap.extract_max().map(|(key, ())| key), model.pop());
                }
                HeapOp::Peek => {
                    prop_assert_eq!(heap.peek().map(|(key, _)| *key), model.last().copied());
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}

#[test]
fn values_travel_with_their_keys() {
    let mut heap = MaxHeap::heapify(vec![(1, "one"), (3, "three"), (2, "two")]);
    assert_eq!(heap.iter().len(), 3);
    assert_eq!(heap.extract_max(), Some((3, "three")));
    heap.add(5, "five");
    assert_eq!(heap.clone().into_sorted_vec(), vec![(5, "five"), (2, "two"), (1, "one")]);
    assert_eq!(heap.len(), 3);
}

#[test]
fn debug_lists_array_order() {
    let heap = MaxHeap::heapify(vec![(1, 'a'), (2, 'b')]);
    assert_eq!(format!("{heap:?}"), "[(2, 'b'), (1, 'a')]");
    assert!(MaxHeap::<i32, ()>::default().is_empty());
}
