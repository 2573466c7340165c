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

//! # Enum-Indexed Fixed Arrays
//!
//! [`OrdinalArray`] stores one slot per value of an [`Ordinal`] type in a
//! plain `[T; N]`, with the identity mapping between values and slots: the
//! value at position `p` owns slot `p`. Indexing by an enumeration value
//! compiles down to a direct array access.
//!
//! ## Motivation
//!
//! Keying a fixed, closed set by a hash map wastes both time and intent: the
//! key space is known at compile time and dense. An array indexed by the
//! enumeration itself keeps the storage contiguous, the lookups O(1), and
//! the key type visible in the signature.
//!
//! ## Highlights
//!
//! - `Index`/`IndexMut` by enumeration value, total for every lawful
//!   [`Ordinal`] implementation.
//! - Raw positional access through `get`/`get_mut` and the slice views
//!   `as_slice`/`as_mut_slice`.
//! - `keys` yields the key sequence, `entries` pairs keys with elements.
//! - Constructors validate once that `N` equals `E::COUNT`; stable const
//!   generics cannot derive the slot count from `E`, so it is spelled at the
//!   use site.
//!
//! ## Usage
//!
//! ```rust
//! use gamut::{Ordinal, OrdinalArray};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
//! enum Channel {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! let mut gains: OrdinalArray<Channel, f32, 3> = OrdinalArray::filled(1.0);
//! gains[Channel::Green] = 0.5;
//!
//! assert_eq!(gains[Channel::Green], 0.5);
//! assert_eq!(gains.as_slice(), &[1.0, 0.5, 1.0]);
//! ```

use crate::iter::OrdinalIter;
use crate::ordinal::Ordinal;
use std::marker::PhantomData;

/// A fixed-size array whose slots are keyed by the values of an [`Ordinal`]
/// type.
///
/// The slot count `N` must equal `E::COUNT`; every constructor checks this
/// once, after which indexing by enumeration value cannot go out of bounds.
///
/// # Examples
///
/// ```rust
/// use gamut::{Ordinal, OrdinalArray};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
/// enum Channel {
///     Red,
///     Green,
///     Blue,
/// }
///
/// let names: OrdinalArray<Channel, &str, 3> =
///     OrdinalArray::new(["red", "green", "blue"]);
/// assert_eq!(names[Channel::Blue], "blue");
/// ```
pub struct OrdinalArray<E, T, const N: usize> {
    slots: [T; N],
    _marker: PhantomData<E>,
}

impl<E, T, const N: usize> OrdinalArray<E, T, N>
where
    E: Ordinal,
{
    /// Creates a new `OrdinalArray` from its slots in ordinal order.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from `E::COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert_eq!(depths[Channel::Blue], 10);
    /// ```
    #[inline]
    pub fn new(slots: [T; N]) -> Self {
        assert!(
            N == E::COUNT,
            "Invalid dimension: {} expects {} slots, got {}",
            E::NAME,
            E::COUNT,
            N
        );
        Self {
            slots,
            _marker: PhantomData,
        }
    }

    /// Creates a new `OrdinalArray` if the slot count matches `E::COUNT`.
    ///
    /// Returns `None` on a mismatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// assert!(OrdinalArray::<Channel, u8, 3>::try_new([0, 0, 0]).is_some());
    /// assert!(OrdinalArray::<Channel, u8, 2>::try_new([0, 0]).is_none());
    /// ```
    #[inline]
    pub fn try_new(slots: [T; N]) -> Option<Self> {
        if N == E::COUNT {
            Some(Self {
                slots,
                _marker: PhantomData,
            })
        } else {
            None
        }
    }

    /// Creates a new `OrdinalArray` without checking the slot count in
    /// release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `N` equals `E::COUNT`.
    /// This function contains a `debug_assert!` to catch errors during
    /// development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> =
    ///     OrdinalArray::new_unchecked([8, 8, 10]);
    /// assert_eq!(depths.len(), 3);
    /// ```
    #[inline]
    pub fn new_unchecked(slots: [T; N]) -> Self {
        debug_assert!(
            N == E::COUNT,
            "Invalid dimension: {} expects {} slots, got {}",
            E::NAME,
            E::COUNT,
            N
        );
        Self {
            slots,
            _marker: PhantomData,
        }
    }

    /// Creates a new `OrdinalArray` by invoking `f` with every key in
    /// ordinal order.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from `E::COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let doubled: OrdinalArray<Channel, usize, 3> =
    ///     OrdinalArray::from_fn(|channel: Channel| channel.ordinal() * 2);
    /// assert_eq!(doubled[Channel::Blue], 4);
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(E) -> T,
    {
        assert!(
            N == E::COUNT,
            "Invalid dimension: {} expects {} slots, got {}",
            E::NAME,
            E::COUNT,
            N
        );
        Self {
            slots: std::array::from_fn(|ordinal| f(E::from_ordinal(ordinal))),
            _marker: PhantomData,
        }
    }

    /// Creates a new `OrdinalArray` with every slot set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from `E::COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let zeros: OrdinalArray<Channel, u32, 3> = OrdinalArray::filled(0);
    /// assert_eq!(zeros.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        assert!(
            N == E::COUNT,
            "Invalid dimension: {} expects {} slots, got {}",
            E::NAME,
            E::COUNT,
            N
        );
        Self {
            slots: std::array::from_fn(|_| value.clone()),
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over the keys of the array in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// let keys: Vec<_> = depths.keys().collect();
    /// assert_eq!(keys, vec![Channel::Red, Channel::Green, Channel::Blue]);
    /// ```
    #[inline]
    pub fn keys(&self) -> OrdinalIter<E> {
        OrdinalIter::new()
    }

    /// Returns an iterator over `(key, &element)` pairs in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// for (channel, depth) in depths.entries() {
    ///     assert_eq!(depths[channel], *depth);
    /// }
    /// ```
    #[inline]
    pub fn entries(&self) -> std::iter::Zip<OrdinalIter<E>, std::slice::Iter<'_, T>> {
        OrdinalIter::new().zip(self.slots.iter())
    }

    /// Returns an iterator over `(key, &mut element)` pairs in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let mut depths: OrdinalArray<Channel, usize, 3> = OrdinalArray::filled(0);
    /// for (channel, depth) in depths.entries_mut() {
    ///     *depth = channel.ordinal();
    /// }
    /// assert_eq!(depths.as_slice(), &[0, 1, 2]);
    /// ```
    #[inline]
    pub fn entries_mut(&mut self) -> std::iter::Zip<OrdinalIter<E>, std::slice::IterMut<'_, T>> {
        OrdinalIter::new().zip(self.slots.iter_mut())
    }
}

impl<E, T, const N: usize> OrdinalArray<E, T, N> {
    /// The number of slots in the array.
    pub const LEN: usize = N;

    /// Returns the number of slots in the array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert_eq!(depths.len(), 3);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the array has no slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert!(!depths.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the slot at the raw position `ordinal`, or
    /// `None` if the position is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert_eq!(depths.get(2), Some(&10));
    /// assert_eq!(depths.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, ordinal: usize) -> Option<&T> {
        self.slots.get(ordinal)
    }

    /// Returns a mutable reference to the slot at the raw position
    /// `ordinal`, or `None` if the position is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let mut depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// *depths.get_mut(0).unwrap() = 12;
    /// assert_eq!(depths[Channel::Red], 12);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, ordinal: usize) -> Option<&mut T> {
        self.slots.get_mut(ordinal)
    }

    /// Returns the slots as a slice in ordinal order.
    ///
    /// Indexing the slice panics on out-of-range positions, which makes it
    /// the unchecked counterpart of [`OrdinalArray::get`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert_eq!(depths.as_slice(), &[8, 8, 10]);
    /// assert_eq!(depths.as_slice()[1], 8);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns the slots as a mutable slice in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let mut depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// depths.as_mut_slice()[1] = 9;
    /// assert_eq!(depths[Channel::Green], 9);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Returns an iterator over the elements in ordinal order.
    ///
    /// The iterator is double-ended; `rev` walks the elements in reverse
    /// ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 9, 10]);
    /// let reversed: Vec<u8> = depths.iter().rev().copied().collect();
    /// assert_eq!(reversed, vec![10, 9, 8]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Returns a mutable iterator over the elements in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let mut depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 9, 10]);
    /// for depth in depths.iter_mut() {
    ///     *depth += 1;
    /// }
    /// assert_eq!(depths.as_slice(), &[9, 10, 11]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Consumes the array and returns the underlying slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalArray};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Channel {
    ///     Red,
    ///     Green,
    ///     Blue,
    /// }
    ///
    /// let depths: OrdinalArray<Channel, u8, 3> = OrdinalArray::new([8, 8, 10]);
    /// assert_eq!(depths.into_inner(), [8, 8, 10]);
    /// ```
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.slots
    }
}

impl<E, T, const N: usize> std::ops::Index<E> for OrdinalArray<E, T, N>
where
    E: Ordinal,
{
    type Output = T;

    #[inline]
    fn index(&self, key: E) -> &Self::Output {
        &self.slots[key.ordinal()]
    }
}

impl<E, T, const N: usize> std::ops::IndexMut<E> for OrdinalArray<E, T, N>
where
    E: Ordinal,
{
    #[inline]
    fn index_mut(&mut self, key: E) -> &mut Self::Output {
        &mut self.slots[key.ordinal()]
    }
}

impl<E, T, const N: usize> Default for OrdinalArray<E, T, N>
where
    E: Ordinal,
    T: Default,
{
    /// Creates an array with every slot set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from `E::COUNT`.
    #[inline]
    fn default() -> Self {
        Self::new(std::array::from_fn(|_| T::default()))
    }
}

impl<E, T, const N: usize> Clone for OrdinalArray<E, T, N>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, T, const N: usize> Copy for OrdinalArray<E, T, N> where T: Copy {}

impl<E, T, const N: usize> PartialEq for OrdinalArray<E, T, N>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<E, T, const N: usize> Eq for OrdinalArray<E, T, N> where T: Eq {}

impl<E, T, const N: usize> std::hash::Hash for OrdinalArray<E, T, N>
where
    T: std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}

impl<E, T, const N: usize> std::fmt::Debug for OrdinalArray<E, T, N>
where
    E: Ordinal + std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<E, T, const N: usize> IntoIterator for OrdinalArray<E, T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, E, T, const N: usize> IntoIterator for &'a OrdinalArray<E, T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a, E, T, const N: usize> IntoIterator for &'a mut OrdinalArray<E, T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

impl<E, T, const N: usize> From<[T; N]> for OrdinalArray<E, T, N>
where
    E: Ordinal,
{
    #[inline]
    fn from(slots: [T; N]) -> Self {
        Self::new(slots)
    }
}

impl<E, T, const N: usize> From<OrdinalArray<E, T, N>> for [T; N] {
    #[inline]
    fn from(array: OrdinalArray<E, T, N>) -> Self {
        array.slots
    }
}
