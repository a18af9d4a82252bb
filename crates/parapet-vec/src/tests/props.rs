// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Model checking against `Vec`: random operation sequences must leave the
//! container element-for-element identical to the standard vector.

use proptest::prelude::*;

use crate::{Cursor, ParapetVec};

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    Insert(usize, i32),
    Erase(usize),
    Resize(usize, i32),
    Reserve(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushBack),
        any::<i32>().prop_map(Op::PushFront),
        (0..64usize, any::<i32>()).prop_map(|(k, x)| Op::Insert(k, x)),
        (0..64usize).prop_map(Op::Erase),
        (0..48usize, any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
        (0..64usize).prop_map(Op::Reserve),
    ]
}

proptest! {
    #[test]
    fn test_matches_vec_model(ops in proptest::collection::vec(op_strategy(), 0..48)) {
        let mut v = ParapetVec::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(x) => {
                    v.push_back(x);
                    model.push(x);
                }
                Op::PushFront(x) => {
                    v.push_front(x);
                    model.insert(0, x);
                }
                Op::Insert(k, x) => {
                    let k = k % (model.len() + 1);
                    v.insert(v.begin().add(k), x).unwrap();
                    model.insert(k, x);
                }
                Op::Erase(k) => {
                    if !model.is_empty() {
                        let k = k % model.len();
                        v.erase(v.begin().add(k)).unwrap();
                        model.remove(k);
                    }
                }
                Op::Resize(n, x) => {
                    v.resize(n, x);
                    model.resize(n, x);
                }
                Op::Reserve(n) => {
                    v.reserve(n);
                }
            }

            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert!(v.capacity() >= v.len());
        }
    }

    #[test]
    fn test_checked_walk_agrees_with_indexing(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let mut v = ParapetVec::new();
        for &x in &values {
            v.push_back(x);
        }

        let mut cur = v.cursor();
        let end = cur.to_end();
        let mut i = 0;
        while cur != end {
            prop_assert_eq!(cur.read().unwrap(), values[i]);
            cur.advance().unwrap();
            i += 1;
        }
        prop_assert_eq!(i, values.len());
        prop_assert!(cur.read().is_err());
    }

    #[test]
    fn test_clone_from_matches_assignment(
        a in proptest::collection::vec(any::<i32>(), 0..24),
        b in proptest::collection::vec(any::<i32>(), 0..24),
    ) {
        let mut dst = ParapetVec::new();
        for &x in &a {
            dst.push_back(x);
        }
        let mut src = ParapetVec::new();
        for &x in &b {
            src.push_back(x);
        }

        let cap_before = dst.capacity();
        dst.clone_from(&src);

        prop_assert_eq!(dst.as_slice(), b.as_slice());
        if b.len() <= cap_before {
            prop_assert_eq!(dst.capacity(), cap_before);
        } else {
            prop_assert_eq!(dst.capacity(), b.len());
        }
    }
}
