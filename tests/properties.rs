// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: `Vector` against `std::vec::Vec` as a model, plus the
//! algebraic laws of the positional operations.

use proptest::prelude::*;
use raw_vector::{Error, Vector};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
    Resize(usize),
    Truncate(usize),
    ShrinkToFit,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (0usize..40, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => (0usize..40).prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..32).prop_map(Op::Resize),
        1 => (0usize..32).prop_map(Op::Truncate),
        1 => Just(Op::ShrinkToFit),
    ]
}

fn vector_of(xs: &[i32]) -> Vector<i32> {
    let mut v = Vector::new();
    for &x in xs {
        v.push(x);
    }
    v
}

proptest! {
    #[test]
    fn matches_std_vec_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut v: Vector<i32> = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            let cap_before = v.capacity();
            let shrinking = matches!(op, Op::ShrinkToFit);
            match op {
                Op::Push(x) => {
                    v.push(x);
                    model.push(x);
                }
                Op::Pop => prop_assert_eq!(v.pop(), model.pop()),
                Op::Insert(i, x) => {
                    let res = v.insert(i, x).map(|r| *r);
                    if i <= model.len() {
                        model.insert(i, x);
                        prop_assert_eq!(res, Ok(x));
                    } else {
                        prop_assert_eq!(res, Err(Error::OutOfBounds));
                    }
                }
                Op::Erase(i) => {
                    let res = v.erase(i);
                    if i < model.len() {
                        model.remove(i);
                        prop_assert_eq!(res, Ok(i));
                    } else {
                        prop_assert_eq!(res, Err(Error::OutOfBounds));
                    }
                }
                Op::Reserve(n) => {
                    let len = v.len();
                    v.reserve(n);
                    prop_assert!(v.capacity() >= n);
                    prop_assert_eq!(v.len(), len);
                }
                Op::Resize(n) => {
                    v.resize(n);
                    model.resize(n, 0);
                }
                Op::Truncate(n) => {
                    v.truncate(n);
                    model.truncate(n);
                }
                Op::ShrinkToFit => {
                    v.shrink_to_fit();
                    prop_assert_eq!(v.capacity(), v.len());
                }
            }
            if !shrinking {
                prop_assert!(v.capacity() >= cap_before);
            }
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_pop_counts(xs in prop::collection::vec(any::<i32>(), 0..100), pops in 0usize..120) {
        let mut v = vector_of(&xs);
        let popped = (0..pops).filter_map(|_| v.pop()).count();
        prop_assert_eq!(popped, pops.min(xs.len()));
        prop_assert_eq!(v.len(), xs.len() - popped);
        prop_assert_eq!(v.as_slice(), &xs[..v.len()]);
    }

    #[test]
    fn insert_then_erase_is_identity(xs in prop::collection::vec(any::<i32>(), 0..50), pos in 0usize..60, x in any::<i32>()) {
        let original = vector_of(&xs);
        let pos = pos % (xs.len() + 1);
        let mut v = original.clone();
        v.insert(pos, x).unwrap();
        prop_assert_eq!(v[pos], x);
        v.erase(pos).unwrap();
        prop_assert_eq!(v, original);
    }

    #[test]
    fn insert_at_end_is_push(xs in prop::collection::vec(any::<i32>(), 0..80)) {
        let mut a = Vector::new();
        let mut b = Vector::new();
        for &x in &xs {
            a.push(x);
            let end = b.len();
            b.insert(end, x).unwrap();
            prop_assert_eq!(a.capacity(), b.capacity());
        }
        prop_assert_eq!(a, b);
    }

    #[test]
    fn growth_is_geometric(n in 0usize..2000) {
        let mut v: Vector<usize> = Vector::new();
        let mut relocated = 0usize;
        for i in 0..n {
            let (before, len, cap) = (v.as_ptr(), v.len(), v.capacity());
            v.push(i);
            if v.as_ptr() != before {
                prop_assert_eq!(len, cap);
                relocated += len;
            }
        }
        prop_assert!(relocated <= 2 * n);
        if n > 0 {
            prop_assert!(v.capacity().is_power_of_two());
            prop_assert!(v.capacity() < 2 * n);
        }
    }

    #[test]
    fn clone_is_equal_and_independent(xs in prop::collection::vec(any::<i32>(), 1..50)) {
        let original = vector_of(&xs);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.capacity(), original.len());
        copy[0] = copy[0].wrapping_add(1);
        copy.push(0);
        prop_assert_eq!(original.as_slice(), xs.as_slice());
    }

    #[test]
    fn clone_from_matches_source(dst in prop::collection::vec(any::<i32>(), 0..30), src in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut d = vector_of(&dst);
        let s = vector_of(&src);
        let cap_before = d.capacity();
        d.clone_from(&s);
        prop_assert_eq!(&d, &s);
        if src.len() <= cap_before {
            prop_assert_eq!(d.capacity(), cap_before);
        }
    }

    #[test]
    fn take_leaves_source_empty(xs in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut src = vector_of(&xs);
        let cap = src.capacity();
        let dst = core::mem::take(&mut src);
        prop_assert!(src.is_empty());
        prop_assert_eq!(src.capacity(), 0);
        prop_assert_eq!(dst.as_slice(), xs.as_slice());
        prop_assert_eq!(dst.capacity(), cap);
    }
}
