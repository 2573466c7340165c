// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Serde Support
//!
//! `Serialize` and `Deserialize` implementations for [`OrdinalArray`],
//! available behind the `serde` feature. An array serializes as a tuple of
//! its `N` slots in ordinal order, which most human-readable formats render
//! as a plain sequence (`[8, 8, 10]` in JSON). Deserialization requires
//! exactly `N` elements and rejects a slot count that does not match the key
//! type's value count.

use crate::array::OrdinalArray;
use crate::ordinal::Ordinal;
use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<E, T, const N: usize> Serialize for OrdinalArray<E, T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for slot in self.as_slice() {
            tuple.serialize_element(slot)?;
        }
        tuple.end()
    }
}

struct SlotsVisitor<E, T, const N: usize> {
    _marker: PhantomData<(E, T)>,
}

impl<'de, E, T, const N: usize> Visitor<'de> for SlotsVisitor<E, T, N>
where
    E: Ordinal,
    T: Deserialize<'de>,
{
    type Value = OrdinalArray<E, T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {} {} slots", N, E::NAME)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut slots = Vec::with_capacity(N);
        for position in 0..N {
            match seq.next_element()? {
                Some(slot) => slots.push(slot),
                None => return Err(A::Error::invalid_length(position, &self)),
            }
        }

        let slots: [T; N] = match slots.try_into() {
            Ok(slots) => slots,
            Err(_) => return Err(A::Error::invalid_length(N, &self)),
        };

        OrdinalArray::try_new(slots).ok_or_else(|| {
            A::Error::custom(format_args!(
                "invalid dimension: {} expects {} slots, got {}",
                E::NAME,
                E::COUNT,
                N
            ))
        })
    }
}

impl<'de, E, T, const N: usize> Deserialize<'de> for OrdinalArray<E, T, N>
where
    E: Ordinal,
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(
            N,
            SlotsVisitor {
                _marker: PhantomData,
            },
        )
    }
}
