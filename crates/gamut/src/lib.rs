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

//! # Gamut
//!
//! Ordinal iteration over enumeration types and enum-indexed fixed-size
//! arrays. Enumerations with sequential values form closed, dense key
//! spaces; this crate makes such a type iterable and usable as an array
//! subscript with zero runtime bookkeeping, compiling down to integer
//! cursors and direct array accesses.
//!
//! ## Modules
//!
//! - `ordinal`: The [`Ordinal`] trait mapping a type's values bijectively
//!   onto the positions `0..COUNT`, with checked and panicking conversions
//!   in both directions.
//! - `iter`: [`OrdinalIter`], a copyable half-open iterator over an ordinal
//!   type's values with a compile-time step (`Iterator`,
//!   `DoubleEndedIterator`, `ExactSizeIterator`, `FusedIterator`).
//! - `array`: [`OrdinalArray`], a `[T; N]` keyed by an ordinal type with
//!   the identity mapping between values and slots.
//! - `serde`: `Serialize`/`Deserialize` for [`OrdinalArray`] (requires the
//!   `serde` feature).
//!
//! ## Features
//!
//! - `derive` (default): Provides `#[derive(Ordinal)]` for fieldless enums
//!   without explicit discriminants.
//! - `serde`: Serializes an [`OrdinalArray`] as a tuple of its slots in
//!   ordinal order.
//!
//! ## Usage
//!
//! ```rust
//! use gamut::{Ordinal, OrdinalArray};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
//! enum Cardinal {
//!     North,
//!     East,
//!     South,
//!     West,
//! }
//!
//! let mut distances: OrdinalArray<Cardinal, u32, 4> = OrdinalArray::filled(0);
//! distances[Cardinal::East] = 12;
//!
//! assert_eq!(distances[Cardinal::East], 12);
//! assert_eq!(Cardinal::ordinals().count(), 4);
//!
//! for (cardinal, distance) in distances.entries() {
//!     assert_eq!(distances[cardinal], *distance);
//! }
//! ```
//!
//! Refer to each module for detailed APIs and examples.

pub mod array;
pub mod iter;
pub mod ordinal;

#[cfg(feature = "serde")]
pub mod serde;

pub use crate::array::OrdinalArray;
pub use crate::iter::OrdinalIter;
pub use crate::ordinal::Ordinal;

#[cfg(feature = "derive")]
pub use gamut_derive::Ordinal;
