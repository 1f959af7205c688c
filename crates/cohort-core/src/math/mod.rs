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

//! # Math Primitives
//!
//! Foundational mathematical structures for bounded-domain year sweeps.
//! This module focuses on closed inclusive interval math, designed to
//! integrate cleanly with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[start, end]` interval type with validation,
//!   predicates (intersection, adjacency, containment), set operations
//!   (intersection/union), overflow-safe point counting, and iteration
//!   support (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`). Includes conversions to/from
//!   `std::ops::RangeInclusive` and `RangeBounds`.
//!
//! ## Motivation
//!
//! Population counting manipulates year windows that are inclusive on both
//! ends: the year of death still counts towards the living population.
//! Closed inclusive intervals carry that semantic directly instead of
//! shifting every boundary by one.
//!
//! Refer to the `interval` module for detailed APIs and examples.

pub mod interval;
