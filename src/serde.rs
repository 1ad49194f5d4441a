// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Vector`](crate::Vector).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence. The initial reservation follows the
//!   format's size hint, capped so a hostile length prefix cannot force a huge
//!   allocation up front; beyond that the vector grows as usual.

// Crate imports
use crate::vec::Vector;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VectorVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VectorVisitor<T> {
    type Value = Vector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap_limit = MAX_PREALLOC_BYTES / core::mem::size_of::<T>().max(1);
        let hint = a.size_hint().unwrap_or(0).min(cap_limit);
        let mut out = Vector::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Vector;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: Vector<i32> = [1, 2, 3].into();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: Vector<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_serde_ignores_spare_capacity() {
        let mut v: Vector<u8> = Vector::with_capacity(16);
        v.push(9);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[9]");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: Vector<i32> = Vector::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: Vector<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_owned_elements() {
        let v = Vector::from([alloc::string::String::from("a"), alloc::string::String::from("bc")]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"["a","bc"]"#);
        let back: Vector<alloc::string::String> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Vector<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }
}
