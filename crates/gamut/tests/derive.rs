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

#![cfg(feature = "derive")]

use gamut::{Ordinal, OrdinalArray};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
enum Cardinal {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
enum Only {
    Sole,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
enum Nothing {}

#[test]
fn test_derived_constants() {
    assert_eq!(Cardinal::NAME, "Cardinal");
    assert_eq!(Cardinal::COUNT, 4);
    assert_eq!(Only::COUNT, 1);
    assert_eq!(Nothing::COUNT, 0);
}

#[test]
fn test_derived_positions() {
    assert_eq!(Cardinal::North.ordinal(), 0);
    assert_eq!(Cardinal::East.ordinal(), 1);
    assert_eq!(Cardinal::South.ordinal(), 2);
    assert_eq!(Cardinal::West.ordinal(), 3);
}

#[test]
fn test_derived_round_trip() {
    for value in Cardinal::ordinals() {
        assert_eq!(Cardinal::from_ordinal(value.ordinal()), value);
    }
}

#[test]
fn test_derived_try_from_ordinal() {
    assert_eq!(Cardinal::try_from_ordinal(0), Some(Cardinal::North));
    assert_eq!(Cardinal::try_from_ordinal(3), Some(Cardinal::West));
    assert_eq!(Cardinal::try_from_ordinal(4), None);
    assert_eq!(Nothing::try_from_ordinal(0), None);
}

#[test]
#[should_panic(expected = "Invalid ordinal: Cardinal has no value at position 4")]
fn test_derived_from_ordinal_out_of_range() {
    let _ = Cardinal::from_ordinal(4);
}

#[test]
fn test_derived_iteration() {
    let values: Vec<Cardinal> = Cardinal::ordinals().collect();
    assert_eq!(
        values,
        vec![
            Cardinal::North,
            Cardinal::East,
            Cardinal::South,
            Cardinal::West
        ]
    );
    assert_eq!(Nothing::ordinals().next(), None);
}

#[test]
fn test_derived_stepped_iteration() {
    let values: Vec<Cardinal> = Cardinal::ordinals().with_step::<2>().collect();
    assert_eq!(values, vec![Cardinal::North, Cardinal::South]);
}

#[test]
fn test_derived_array_indexing() {
    let mut distances = OrdinalArray::<Cardinal, u32, 4>::from_fn(|value| value.ordinal() as u32);
    assert_eq!(distances[Cardinal::North], 0);
    assert_eq!(distances[Cardinal::West], 3);

    distances[Cardinal::South] = 42;
    assert_eq!(distances[Cardinal::South], 42);
}

#[test]
fn test_derived_array_keys_match_ordinals() {
    let labels = OrdinalArray::<Cardinal, &str, 4>::new(["n", "e", "s", "w"]);
    let collected: Vec<(Cardinal, &&str)> = labels.entries().collect();
    assert_eq!(collected.len(), 4);
    assert_eq!(collected[0], (Cardinal::North, &"n"));
    assert_eq!(collected[3], (Cardinal::West, &"w"));
}
