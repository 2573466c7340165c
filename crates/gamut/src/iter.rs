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

//! # Ordinal Iterator
//!
//! [`OrdinalIter`] walks the values of an [`Ordinal`] type over the half-open
//! position range `[cursor, COUNT)`, advancing by a compile-time step. It is
//! a trivially copyable pair of `usize` cursors with a phantom element type,
//! so holding, cloning, or restarting one costs nothing.
//!
//! ## Motivation
//!
//! Enumerations are closed sets, yet `for`-looping over one in Rust requires
//! either hand-written constant tables or macro machinery. `OrdinalIter`
//! turns any `Ordinal` type into a first-class iterable with the full
//! standard iterator protocol, including exact sizes and reverse traversal.
//!
//! ## Highlights
//!
//! - Implements `Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`, and
//!   `FusedIterator`.
//! - Comparisons (`==`, `<`, and friends) consider only the current
//!   position, so an iterator can be matched against the terminal sentinel
//!   [`OrdinalIter::at`]`(E::COUNT)` regardless of how it was produced.
//! - The `STEP` parameter (default `1`) selects every `STEP`-th value at
//!   compile time; [`OrdinalIter::with_step`] re-steps an iterator in place.
//!   A step of `0` is a caller error: such an iterator never reaches the
//!   terminal bound and its length is undefined.
//!
//! ## Usage
//!
//! ```rust
//! use gamut::{Ordinal, OrdinalIter};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
//! enum Axis {
//!     X,
//!     Y,
//!     Z,
//! }
//!
//! let all: Vec<_> = OrdinalIter::<Axis>::new().collect();
//! assert_eq!(all, vec![Axis::X, Axis::Y, Axis::Z]);
//!
//! let every_other: Vec<_> = Axis::ordinals().with_step::<2>().collect();
//! assert_eq!(every_other, vec![Axis::X, Axis::Z]);
//! ```

use crate::ordinal::Ordinal;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the values of an [`Ordinal`] type.
///
/// The iterator yields `E::from_ordinal(p)` for every position `p` of the
/// arithmetic progression starting at the cursor and advancing by `STEP`,
/// as long as `p` stays below the terminal bound `E::COUNT`.
///
/// # Examples
///
/// ```rust
/// use gamut::{Ordinal, OrdinalIter};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
/// enum Axis {
///     X,
///     Y,
///     Z,
/// }
///
/// let mut iter = OrdinalIter::<Axis>::new();
/// assert_eq!(iter.next(), Some(Axis::X));
/// assert_eq!(iter.next(), Some(Axis::Y));
/// assert_eq!(iter.next(), Some(Axis::Z));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Clone, Copy)]
pub struct OrdinalIter<E, const STEP: usize = 1>
where
    E: Ordinal,
{
    end_exclusive: usize,
    current: usize,
    _marker: PhantomData<E>,
}

impl<E> OrdinalIter<E>
where
    E: Ordinal,
{
    /// Creates an iterator positioned at the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let mut iter = OrdinalIter::<Axis>::new();
    /// assert_eq!(iter.next(), Some(Axis::X));
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            end_exclusive: E::COUNT,
            current: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an iterator positioned at `value`.
    ///
    /// The value itself is yielded first; construction performs no range
    /// check because every value of a lawful [`Ordinal`] type lies below the
    /// terminal bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let tail: Vec<_> = OrdinalIter::starting_at(Axis::Y).collect();
    /// assert_eq!(tail, vec![Axis::Y, Axis::Z]);
    /// ```
    #[inline]
    pub fn starting_at(value: E) -> Self {
        Self::at(value.ordinal())
    }

    /// Creates an iterator positioned at the raw position `ordinal`.
    ///
    /// Passing `E::COUNT` produces the terminal sentinel: an iterator that
    /// yields nothing and that every forward iterator with step `1` compares
    /// equal to once it is exhausted. Positions past the terminal bound are
    /// representable and likewise yield nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let mut iter = OrdinalIter::<Axis>::new();
    /// let end = OrdinalIter::<Axis>::at(Axis::COUNT);
    ///
    /// while iter != end {
    ///     iter.next();
    /// }
    /// assert_eq!(iter.len(), 0);
    /// ```
    #[inline]
    pub const fn at(ordinal: usize) -> Self {
        Self {
            end_exclusive: E::COUNT,
            current: ordinal,
            _marker: PhantomData,
        }
    }
}

impl<E, const STEP: usize> OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    /// Reinterprets the iterator with the step `NEW_STEP`.
    ///
    /// The cursor and the remaining bound carry over unchanged; only the
    /// stride of subsequent advances differs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Grade {
    ///     A,
    ///     B,
    ///     C,
    ///     D,
    ///     E,
    /// }
    ///
    /// let every_other: Vec<_> = Grade::ordinals().with_step::<2>().collect();
    /// assert_eq!(every_other, vec![Grade::A, Grade::C, Grade::E]);
    ///
    /// let offset: Vec<Grade> = OrdinalIter::at(1).with_step::<2>().collect();
    /// assert_eq!(offset, vec![Grade::B, Grade::D]);
    /// ```
    #[inline]
    pub const fn with_step<const NEW_STEP: usize>(self) -> OrdinalIter<E, NEW_STEP> {
        OrdinalIter {
            end_exclusive: self.end_exclusive,
            current: self.current,
            _marker: PhantomData,
        }
    }

    /// Returns the raw position of the cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let mut iter = OrdinalIter::<Axis>::new();
    /// assert_eq!(iter.cursor(), 0);
    /// iter.next();
    /// assert_eq!(iter.cursor(), 1);
    /// ```
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.current
    }

    /// Returns the value at the cursor without advancing.
    ///
    /// Returns `None` once the iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::{Ordinal, OrdinalIter};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let mut iter = OrdinalIter::<Axis>::new();
    /// assert_eq!(iter.peek(), Some(Axis::X));
    /// assert_eq!(iter.next(), Some(Axis::X));
    ///
    /// let end = OrdinalIter::<Axis>::at(Axis::COUNT);
    /// assert_eq!(end.peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<E> {
        if self.current < self.end_exclusive {
            E::try_from_ordinal(self.current)
        } else {
            None
        }
    }
}

impl<E, const STEP: usize> Iterator for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let result = E::from_ordinal(self.current);
            self.current += STEP;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<E, const STEP: usize> DoubleEndedIterator for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            // Last position of the stepped progression still below the bound.
            let span = self.end_exclusive - 1 - self.current;
            let last = self.current + (span / STEP) * STEP;
            self.end_exclusive = last;
            Some(E::from_ordinal(last))
        } else {
            None
        }
    }
}

impl<E, const STEP: usize> ExactSizeIterator for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    /// Returns the number of values left to yield.
    ///
    /// # Panics
    ///
    /// Panics with a division by zero if `STEP` is `0`.
    fn len(&self) -> usize {
        if self.current >= self.end_exclusive {
            return 0;
        }
        let span = self.end_exclusive - self.current;
        (span + STEP - 1) / STEP
    }
}

impl<E, const STEP: usize> FusedIterator for OrdinalIter<E, STEP> where E: Ordinal {}

impl<E, const STEP: usize> Default for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    #[inline]
    fn default() -> Self {
        Self {
            end_exclusive: E::COUNT,
            current: 0,
            _marker: PhantomData,
        }
    }
}

impl<E> From<E> for OrdinalIter<E>
where
    E: Ordinal,
{
    #[inline]
    fn from(value: E) -> Self {
        Self::starting_at(value)
    }
}

impl<E, const STEP: usize> PartialEq for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<E, const STEP: usize> Eq for OrdinalIter<E, STEP> where E: Ordinal {}

impl<E, const STEP: usize> PartialOrd for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E, const STEP: usize> Ord for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.current.cmp(&other.current)
    }
}

impl<E, const STEP: usize> std::hash::Hash for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl<E, const STEP: usize> std::fmt::Debug for OrdinalIter<E, STEP>
where
    E: Ordinal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdinalIter")
            .field("enumeration", &E::NAME)
            .field("current", &self.current)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Axis {
        X,
        Y,
        Z,
    }

    impl Ordinal for Axis {
        const NAME: &'static str = "Axis";
        const COUNT: usize = 3;

        fn ordinal(self) -> usize {
            self as usize
        }

        fn try_from_ordinal(ordinal: usize) -> Option<Self> {
            match ordinal {
                0 => Some(Axis::X),
                1 => Some(Axis::Y),
                2 => Some(Axis::Z),
                _ => None,
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Grade {
        A,
        B,
        C,
        D,
        E,
    }

    impl Ordinal for Grade {
        const NAME: &'static str = "Grade";
        const COUNT: usize = 5;

        fn ordinal(self) -> usize {
            self as usize
        }

        fn try_from_ordinal(ordinal: usize) -> Option<Self> {
            match ordinal {
                0 => Some(Grade::A),
                1 => Some(Grade::B),
                2 => Some(Grade::C),
                3 => Some(Grade::D),
                4 => Some(Grade::E),
                _ => None,
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Nothing {}

    impl Ordinal for Nothing {
        const NAME: &'static str = "Nothing";
        const COUNT: usize = 0;

        fn ordinal(self) -> usize {
            match self {}
        }

        fn try_from_ordinal(_ordinal: usize) -> Option<Self> {
            None
        }
    }

    #[test]
    fn test_full_sequence() {
        let all: Vec<Axis> = OrdinalIter::new().collect();
        assert_eq!(all, vec![Axis::X, Axis::Y, Axis::Z]);
    }

    #[test]
    fn test_default_matches_new() {
        let a: OrdinalIter<Axis> = OrdinalIter::new();
        let b: OrdinalIter<Axis> = Default::default();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_by_position() {
        let a: OrdinalIter<Axis> = OrdinalIter::new();
        let mut b: OrdinalIter<Axis> = OrdinalIter::new();
        assert_eq!(a, b);

        b.next();
        assert_ne!(a, b);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(b, OrdinalIter::starting_at(Axis::Y));
    }

    #[test]
    fn test_back_consumption_keeps_position() {
        let a: OrdinalIter<Axis> = OrdinalIter::new();
        let mut b: OrdinalIter<Axis> = OrdinalIter::new();

        // Consuming from the back moves the bound, not the position.
        b.next_back();
        assert_eq!(a, b);
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_starting_at() {
        let tail: Vec<Axis> = OrdinalIter::starting_at(Axis::Y).collect();
        assert_eq!(tail, vec![Axis::Y, Axis::Z]);
    }

    #[test]
    fn test_from_value() {
        let iter = OrdinalIter::from(Axis::Z);
        assert_eq!(iter.cursor(), 2);
        let tail: Vec<Axis> = iter.collect();
        assert_eq!(tail, vec![Axis::Z]);
    }

    #[test]
    fn test_terminal_sentinel() {
        let mut end = OrdinalIter::<Axis>::at(Axis::COUNT);
        assert_eq!(end.len(), 0);
        assert_eq!(end.peek(), None);
        assert_eq!(end.next(), None);
    }

    #[test]
    fn test_walk_reaches_sentinel() {
        let mut iter = OrdinalIter::<Axis>::new();
        let end = OrdinalIter::<Axis>::at(Axis::COUNT);

        assert_ne!(iter, end);
        while iter.next().is_some() {}
        assert_eq!(iter, end);
    }

    #[test]
    fn test_past_terminal_yields_nothing() {
        let mut iter = OrdinalIter::<Axis>::at(10);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut iter = OrdinalIter::<Axis>::new();
        assert_eq!(iter.peek(), Some(Axis::X));
        assert_eq!(iter.peek(), Some(Axis::X));
        assert_eq!(iter.cursor(), 0);
        assert_eq!(iter.next(), Some(Axis::X));
        assert_eq!(iter.peek(), Some(Axis::Y));
    }

    #[test]
    fn test_double_ended() {
        let mut iter = OrdinalIter::<Axis>::new();

        assert_eq!(iter.next(), Some(Axis::X));
        assert_eq!(iter.next_back(), Some(Axis::Z));
        assert_eq!(iter.next(), Some(Axis::Y));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_reverse_order() {
        let forward: Vec<Axis> = OrdinalIter::new().collect();
        let mut backward: Vec<Axis> = OrdinalIter::new().rev().collect();
        assert_eq!(backward, vec![Axis::Z, Axis::Y, Axis::X]);

        // Same values, opposite order.
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_exact_size() {
        let mut iter = OrdinalIter::<Axis>::new();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));

        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));

        iter.next_back();
        assert_eq!(iter.len(), 1);

        iter.next();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_fused() {
        let mut iter = OrdinalIter::<Axis>::at(2);
        assert_eq!(iter.next(), Some(Axis::Z));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_stepped_sequence() {
        let every_other: Vec<Grade> = Grade::ordinals().with_step::<2>().collect();
        assert_eq!(every_other, vec![Grade::A, Grade::C, Grade::E]);
        assert_eq!(Grade::ordinals().with_step::<2>().len(), 3);
    }

    #[test]
    fn test_stepped_from_offset() {
        let from_b: Vec<Grade> = OrdinalIter::at(1).with_step::<2>().collect();
        assert_eq!(from_b, vec![Grade::B, Grade::D]);
        assert_eq!(OrdinalIter::<Grade>::at(1).with_step::<2>().len(), 2);
    }

    #[test]
    fn test_stepped_reverse() {
        let backward: Vec<Grade> = Grade::ordinals().with_step::<2>().rev().collect();
        assert_eq!(backward, vec![Grade::E, Grade::C, Grade::A]);
    }

    #[test]
    fn test_stepped_double_ended() {
        let mut iter = Grade::ordinals().with_step::<2>();
        assert_eq!(iter.next(), Some(Grade::A));
        assert_eq!(iter.next_back(), Some(Grade::E));
        assert_eq!(iter.next(), Some(Grade::C));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_step_three() {
        let sparse: Vec<Grade> = Grade::ordinals().with_step::<3>().collect();
        assert_eq!(sparse, vec![Grade::A, Grade::D]);
        assert_eq!(Grade::ordinals().with_step::<3>().len(), 2);
    }

    #[test]
    fn test_with_step_keeps_cursor() {
        let mut iter = Grade::ordinals();
        iter.next();
        iter.next();

        let rest: Vec<Grade> = iter.with_step::<2>().collect();
        assert_eq!(rest, vec![Grade::C, Grade::E]);
    }

    #[test]
    fn test_stepped_default() {
        let iter: OrdinalIter<Grade, 2> = Default::default();
        let every_other: Vec<Grade> = iter.collect();
        assert_eq!(every_other, vec![Grade::A, Grade::C, Grade::E]);
    }

    #[test]
    fn test_empty_enumeration() {
        let mut iter = OrdinalIter::<Nothing>::new();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);

        // With no values the first position is already the terminal one.
        assert_eq!(OrdinalIter::<Nothing>::new(), OrdinalIter::<Nothing>::at(0));
    }

    #[test]
    fn test_ordering() {
        let begin = OrdinalIter::<Axis>::new();
        let middle = OrdinalIter::<Axis>::at(1);
        let end = OrdinalIter::<Axis>::at(3);

        assert!(begin < middle);
        assert!(middle < end);
        assert!(begin <= begin);
        assert_eq!(Ord::cmp(&begin, &middle), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_copy_restarts() {
        let fresh = OrdinalIter::<Axis>::new();
        let mut running = fresh;

        running.next();
        running.next();
        assert_eq!(fresh.len(), 3);
        assert_eq!(running.len(), 1);
    }

    #[test]
    fn test_debug_format() {
        let iter = OrdinalIter::<Axis>::new();
        assert_eq!(
            format!("{:?}", iter),
            "OrdinalIter { enumeration: \"Axis\", current: 0, end_exclusive: 3 }"
        );
    }
}
