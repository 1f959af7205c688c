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

//! # Cohort Solver
//!
//! **Sweep-line solver for the year(s) of peak living population.**
//!
//! Given a collection of people, each described by an inclusive birth and
//! death year, this crate answers the question: *within a bounded year
//! range, in which year were the most people alive at the same time?*
//! Ties are reported in full, in ascending year order.
//!
//! ## Architecture
//!
//! * **`lifespan`**: The `Lifespan<T>` value type, a plain
//!   birth-year/death-year pair. Deliberately unvalidated at construction;
//!   the solver enforces all invariants at solve time.
//! * **`solver`**: The `PopulationSolver<T>` configuration object and its
//!   difference-array sweep, together with the `SolverError` taxonomy.
//!
//! ## Algorithm
//!
//! The solver runs a classic difference-array sweep: each person adds `+1`
//! at their birth year and `-1` at the year after their death year, and a
//! single prefix-sum pass over the configured range recovers the living
//! population per year while tracking the running maximum. For `n` people
//! over a range of `s` years this is `O(n + s)` time and `O(s)` auxiliary
//! space.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: Every entry is validated before any counting happens.
//!    A single out-of-range or inverted lifespan rejects the whole call
//!    with a distinguishable error.
//! 2. **Pure Computation**: Solving neither mutates the solver nor the
//!    input. The same bounds and input always produce the same answer.
//! 3. **Generic Years, Wide Counts**: Year arithmetic is generic over
//!    signed primitive integers (`i16` reproduces the classic interview
//!    domain), while population counters are a fixed wide type so the
//!    count can never overflow the year type.
//!
//! ## Example
//!
//! ```rust
//! use cohort_solver::lifespan::Lifespan;
//! use cohort_solver::solver::PopulationSolver;
//!
//! let solver = PopulationSolver::new(1900i16, 2000i16)?;
//! let people = [
//!     Lifespan::new(1903, 1974),
//!     Lifespan::new(1922, 1984),
//!     Lifespan::new(1920, 2000),
//!     Lifespan::new(1965, 1978),
//!     Lifespan::new(1942, 1965),
//! ];
//! assert_eq!(solver.highest_population_year(&people)?, vec![1965]);
//! # Ok::<(), cohort_solver::solver::SolverError<i16>>(())
//! ```

pub mod lifespan;
pub mod solver;
