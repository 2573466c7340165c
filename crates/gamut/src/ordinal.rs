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

//! # Ordinal Enumerations
//!
//! The [`Ordinal`] trait maps an enumeration type bijectively onto the
//! positions `0..COUNT`. It is the contract that connects user-defined enums
//! to the ordinal iterator ([`OrdinalIter`]) and the enum-indexed array
//! (`OrdinalArray`): once a type states its value count and how values
//! convert to and from positions, iteration and direct indexing follow with
//! no runtime bookkeeping.
//!
//! ## Motivation
//!
//! Enumerations with sequential values are ubiquitous as closed key spaces:
//! directions, states, channels, categories. Rust offers no built-in way to
//! walk such a type's values or to use them as array subscripts. `Ordinal`
//! supplies exactly that seam, compiling down to integer casts and
//! comparisons.
//!
//! ## Highlights
//!
//! - `NAME` provides a human-readable type name used in diagnostics.
//! - `COUNT` is the exclusive upper bound of the position space.
//! - `ordinal` / `try_from_ordinal` convert between values and positions.
//! - `from_ordinal` is the panicking variant for positions known to be valid.
//! - `ordinals` yields every value in declaration order.
//! - `#[derive(Ordinal)]` (feature `derive`, enabled by default) implements
//!   the trait for fieldless enums without explicit discriminants.
//!
//! ## Usage
//!
//! ```rust
//! use gamut::Ordinal;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum Cardinal {
//!     North,
//!     East,
//!     South,
//!     West,
//! }
//!
//! impl Ordinal for Cardinal {
//!     const NAME: &'static str = "Cardinal";
//!     const COUNT: usize = 4;
//!
//!     fn ordinal(self) -> usize {
//!         self as usize
//!     }
//!
//!     fn try_from_ordinal(ordinal: usize) -> Option<Self> {
//!         match ordinal {
//!             0 => Some(Cardinal::North),
//!             1 => Some(Cardinal::East),
//!             2 => Some(Cardinal::South),
//!             3 => Some(Cardinal::West),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let all: Vec<_> = Cardinal::ordinals().collect();
//! assert_eq!(
//!     all,
//!     vec![Cardinal::North, Cardinal::East, Cardinal::South, Cardinal::West]
//! );
//! ```

use crate::iter::OrdinalIter;

/// A type whose values map bijectively onto the positions `0..COUNT`.
///
/// Implementations must uphold two rules:
///
/// - `ordinal` returns a position strictly below `COUNT`, and distinct values
///   return distinct positions.
/// - `try_from_ordinal` inverts `ordinal` for every position below `COUNT`
///   and returns `None` for every position at or above it.
///
/// Sparse layouts (flag enums, explicit discriminants with gaps) cannot
/// satisfy these rules and are not supported.
///
/// # Examples
///
/// ```rust
/// use gamut::Ordinal;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
/// enum Axis {
///     X,
///     Y,
///     Z,
/// }
///
/// assert_eq!(Axis::COUNT, 3);
/// assert_eq!(Axis::Y.ordinal(), 1);
/// assert_eq!(Axis::try_from_ordinal(2), Some(Axis::Z));
/// assert_eq!(Axis::try_from_ordinal(3), None);
/// ```
pub trait Ordinal: Copy {
    /// A human-readable name of the implementing type, used in diagnostics.
    const NAME: &'static str;

    /// The number of values of this type, and the exclusive upper bound of
    /// its position space.
    const COUNT: usize;

    /// Returns the position of this value within `0..COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::Ordinal;
    ///
    /// #[derive(Clone, Copy, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// assert_eq!(Axis::X.ordinal(), 0);
    /// assert_eq!(Axis::Z.ordinal(), 2);
    /// ```
    fn ordinal(self) -> usize;

    /// Returns the value at `ordinal`, or `None` if the position is at or
    /// above `COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::Ordinal;
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// assert_eq!(Axis::try_from_ordinal(0), Some(Axis::X));
    /// assert_eq!(Axis::try_from_ordinal(3), None);
    /// ```
    fn try_from_ordinal(ordinal: usize) -> Option<Self>;

    /// Returns the value at `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is at or above `COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::Ordinal;
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// assert_eq!(Axis::from_ordinal(1), Axis::Y);
    /// ```
    #[inline]
    fn from_ordinal(ordinal: usize) -> Self {
        match Self::try_from_ordinal(ordinal) {
            Some(value) => value,
            None => panic!(
                "Invalid ordinal: {} has no value at position {} (count {})",
                Self::NAME,
                ordinal,
                Self::COUNT
            ),
        }
    }

    /// Returns an iterator over every value of this type in ordinal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamut::Ordinal;
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
    /// enum Axis {
    ///     X,
    ///     Y,
    ///     Z,
    /// }
    ///
    /// let all: Vec<_> = Axis::ordinals().collect();
    /// assert_eq!(all, vec![Axis::X, Axis::Y, Axis::Z]);
    /// ```
    #[inline]
    fn ordinals() -> OrdinalIter<Self> {
        OrdinalIter::new()
    }
}

impl Ordinal for bool {
    const NAME: &'static str = "bool";
    const COUNT: usize = 2;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    fn try_from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}
