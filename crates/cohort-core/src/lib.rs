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

//! # Cohort Core
//!
//! Foundational math primitives for the Cohort population-analysis
//! ecosystem. This crate consolidates the reusable building blocks that
//! underpin the higher-level solver crate.
//!
//! ## Modules
//!
//! - `math`: Closed inclusive interval `[start, end]` primitives with
//!   validation, predicates (intersection, adjacency, containment), set
//!   operations (intersection/union), point counting in overflow-safe wide
//!   arithmetic, iteration (`Iterator`, `DoubleEndedIterator`,
//!   `ExactSizeIterator`, `FusedIterator`), and conversions to/from
//!   `std::ops::RangeInclusive`.
//!
//! ## Purpose
//!
//! Calendar-year arithmetic is riddled with off-by-one traps: a person who
//! is born and dies in the same year was still alive for that whole year.
//! Modelling year spans as closed inclusive intervals keeps those boundary
//! semantics explicit and lets the solver crate stay free of ad hoc `+1`
//! corrections.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
