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

//! Peak-population computation over a bounded, reconfigurable year range.
//! The `PopulationSolver<T>` holds an inclusive minimum and maximum year
//! and answers, for a batch of lifespans, which year(s) inside that range
//! held the largest living population. The computation is a single
//! difference-array sweep: linear in the number of entries plus the width
//! of the range, with one heap buffer sized from the bounds current at
//! call time. All entry validation happens before any counting, entries
//! are checked in input order with the range check ahead of the inversion
//! check, and the first violation rejects the whole call.

use crate::lifespan::Lifespan;
use cohort_core::math::interval::ClosedInterval;
use num_traits::{PrimInt, Signed};

/// Population counter type used by the sweep.
///
/// Kept independent of the year type `T` so that the number of tracked
/// people is bounded by the input length, never by the width of `T`:
/// an `i16` year domain can still count billions of overlapping lives.
type Count = i64;

/// The error type for solver construction and solving.
///
/// Every variant is a precondition violation surfaced immediately to the
/// caller. Nothing is retried, recovered, or logged internally, and there
/// is no partial-success mode: a single offending entry rejects the entire
/// call before any result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError<T>
where
    T: PrimInt + Signed,
{
    /// The solver was constructed with a minimum year greater than the
    /// maximum year.
    InvalidRange {
        /// The offending minimum year.
        minimum_year: T,
        /// The offending maximum year.
        maximum_year: T,
    },
    /// The solve call received zero lifespans.
    EmptyInput,
    /// An entry's birth year lies before the minimum year, or its death
    /// year lies after the maximum year.
    OutOfRange {
        /// The first offending entry, in input order.
        lifespan: Lifespan<T>,
    },
    /// An entry's birth year lies after its death year.
    InvertedSpan {
        /// The first offending entry, in input order.
        lifespan: Lifespan<T>,
    },
}

impl<T> std::fmt::Display for SolverError<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange {
                minimum_year,
                maximum_year,
            } => write!(
                f,
                "Minimum year {} is greater than maximum year {}",
                minimum_year, maximum_year
            ),
            Self::EmptyInput => write!(f, "No lifespan entries were provided"),
            Self::OutOfRange { lifespan } => {
                write!(f, "{} lies outside the configured year range", lifespan)
            }
            Self::InvertedSpan { lifespan } => {
                write!(f, "{} has a birth year after its death year", lifespan)
            }
        }
    }
}

impl<T> std::error::Error for SolverError<T> where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display
{
}

/// Finds the year(s) with the highest living population within a bounded,
/// inclusive year range.
///
/// The solver is a small configuration object holding the two year bounds.
/// The bounds are validated at construction (`minimum_year <= maximum_year`)
/// and may afterwards be reassigned independently through the unchecked
/// setters; see [`set_minimum_year`](PopulationSolver::set_minimum_year)
/// for that contract.
///
/// `PopulationSolver` deliberately does not implement `Clone` or `Copy`:
/// it is a single configuration object meant to be passed by reference,
/// and accidental duplication would silently fork the configuration.
///
/// The solver provides no internal synchronization. Solving takes `&self`
/// and is pure, so concurrent solve calls are harmless, but the bounds
/// must not be mutated while a solve call is in flight.
///
/// # Examples
///
/// ```rust
/// use cohort_solver::lifespan::Lifespan;
/// use cohort_solver::solver::PopulationSolver;
///
/// let solver = PopulationSolver::new(1900i16, 2000i16)?;
/// let people = [
///     Lifespan::new(1903, 1974),
///     Lifespan::new(1922, 1984),
///     Lifespan::new(1920, 2000),
///     Lifespan::new(1965, 1978),
///     Lifespan::new(1942, 1965),
/// ];
/// assert_eq!(solver.highest_population_year(&people)?, vec![1965]);
/// # Ok::<(), cohort_solver::solver::SolverError<i16>>(())
/// ```
pub struct PopulationSolver<T>
where
    T: PrimInt + Signed,
{
    minimum_year: T,
    maximum_year: T,
}

impl<T> PopulationSolver<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new solver for the inclusive year range
    /// `[minimum_year, maximum_year]`.
    ///
    /// A single-year range (`minimum_year == maximum_year`) is valid.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidRange`] if
    /// `minimum_year > maximum_year`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_solver::solver::{PopulationSolver, SolverError};
    ///
    /// assert!(PopulationSolver::new(1900i16, 2000i16).is_ok());
    /// assert!(PopulationSolver::new(1900i16, 1900i16).is_ok());
    /// assert_eq!(
    ///     PopulationSolver::new(2000i16, 1900i16).unwrap_err(),
    ///     SolverError::InvalidRange {
    ///         minimum_year: 2000,
    ///         maximum_year: 1900,
    ///     }
    /// );
    /// ```
    pub fn new(minimum_year: T, maximum_year: T) -> Result<Self, SolverError<T>> {
        if minimum_year > maximum_year {
            return Err(SolverError::InvalidRange {
                minimum_year,
                maximum_year,
            });
        }
        Ok(Self {
            minimum_year,
            maximum_year,
        })
    }

    /// Returns the inclusive minimum year bound.
    #[inline]
    pub const fn minimum_year(&self) -> T {
        self.minimum_year
    }

    /// Returns the inclusive maximum year bound.
    #[inline]
    pub const fn maximum_year(&self) -> T {
        self.maximum_year
    }

    /// Overwrites the minimum year bound.
    ///
    /// The new value is **not** validated against the current maximum:
    /// the bounds may transiently cross, and it is the caller's
    /// responsibility to restore `minimum_year <= maximum_year` before
    /// solving. A solve call made while the bounds are crossed cannot
    /// succeed, because no entry can satisfy both bounds at once; it fails
    /// with [`SolverError::OutOfRange`] on the first entry.
    #[inline]
    pub fn set_minimum_year(&mut self, year: T) {
        self.minimum_year = year;
    }

    /// Overwrites the maximum year bound.
    ///
    /// Like [`set_minimum_year`](Self::set_minimum_year), the new value is
    /// not validated against the current minimum.
    #[inline]
    pub fn set_maximum_year(&mut self, year: T) {
        self.maximum_year = year;
    }

    /// Computes the year(s) with the highest living population.
    ///
    /// A person is alive from their birth year through their death year,
    /// both inclusive. The returned years are in strictly ascending order;
    /// a single year when the maximum is unique, every tied year otherwise.
    ///
    /// The bounds used are those current at call time; solving does not
    /// mutate the solver or the input, so repeated calls with the same
    /// state yield identical results.
    ///
    /// # Errors
    ///
    /// * [`SolverError::EmptyInput`] if `lifespans` is empty.
    /// * [`SolverError::OutOfRange`] if an entry's birth year lies before
    ///   the minimum bound or its death year lies after the maximum bound.
    /// * [`SolverError::InvertedSpan`] if an entry's birth year lies after
    ///   its death year.
    ///
    /// Entries are validated in input order, and for each entry the range
    /// check runs before the inversion check, so mixed violations resolve
    /// deterministically.
    ///
    /// # Complexity
    ///
    /// `O(n + s)` time and `O(s)` auxiliary space, where `n` is the number
    /// of entries and `s` the number of years in the configured range. The
    /// delta buffer is heap-allocated per call and sized from the current
    /// bounds, so reconfiguring the bounds between calls is safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cohort_solver::lifespan::Lifespan;
    /// use cohort_solver::solver::PopulationSolver;
    ///
    /// let solver = PopulationSolver::new(-50i32, 50i32)?;
    /// let people = [
    ///     Lifespan::new(-36, 10),
    ///     Lifespan::new(-35, 6),
    ///     Lifespan::new(5, 49),
    /// ];
    /// // Three people alive in both 5 and 6; the tie is reported in full.
    /// assert_eq!(solver.highest_population_year(&people)?, vec![5, 6]);
    /// # Ok::<(), cohort_solver::solver::SolverError<i32>>(())
    /// ```
    pub fn highest_population_year(
        &self,
        lifespans: &[Lifespan<T>],
    ) -> Result<Vec<T>, SolverError<T>> {
        if lifespans.is_empty() {
            return Err(SolverError::EmptyInput);
        }

        for &lifespan in lifespans {
            if lifespan.birth_year() < self.minimum_year
                || lifespan.death_year() > self.maximum_year
            {
                return Err(SolverError::OutOfRange { lifespan });
            }
            if lifespan.is_inverted() {
                return Err(SolverError::InvertedSpan { lifespan });
            }
        }

        // At least one entry satisfied minimum <= birth <= death <= maximum,
        // so the bounds are ordered here even after unchecked setter calls.
        let years = ClosedInterval::new_unchecked(self.minimum_year, self.maximum_year);
        let span = years.count();
        let origin = year_as_wide(self.minimum_year);

        // Net population change per year. The extra trailing slot absorbs
        // the decrement for a death in the final year of the range.
        let mut deltas = vec![0 as Count; span + 1];
        for lifespan in lifespans {
            let birth_offset = (year_as_wide(lifespan.birth_year()) - origin) as usize;
            let death_offset = (year_as_wide(lifespan.death_year()) - origin) as usize;
            deltas[birth_offset] += 1;
            // A person still counts in their death year; the population
            // drops the year after.
            deltas[death_offset + 1] -= 1;
        }

        let mut alive: Count = 0;
        let mut highest: Count = 0;
        let mut peak_years = Vec::new();
        for (offset, year) in years.iter().enumerate() {
            alive += deltas[offset];
            if alive > highest {
                highest = alive;
                peak_years.clear();
                peak_years.push(year);
            } else if alive == highest {
                peak_years.push(year);
            }
        }

        Ok(peak_years)
    }
}

impl<T> std::fmt::Debug for PopulationSolver<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopulationSolver")
            .field("minimum_year", &self.minimum_year)
            .field("maximum_year", &self.maximum_year)
            .finish()
    }
}

/// Widens a year to `i64` for offset arithmetic that cannot overflow the
/// year type, even for spans covering the full range of `T`.
#[inline]
fn year_as_wide<T>(year: T) -> i64
where
    T: PrimInt + Signed,
{
    year.to_i64().expect("year exceeds the i64 range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people<T>(pairs: &[(T, T)]) -> Vec<Lifespan<T>>
    where
        T: PrimInt + Signed,
    {
        pairs.iter().map(|&(b, d)| Lifespan::new(b, d)).collect()
    }

    /// Direct per-year counting, as slow and obvious as possible.
    fn brute_force_peaks(
        minimum_year: i32,
        maximum_year: i32,
        lifespans: &[Lifespan<i32>],
    ) -> Vec<i32> {
        let mut highest = 0usize;
        let mut peaks = Vec::new();
        for year in minimum_year..=maximum_year {
            let alive = lifespans.iter().filter(|l| l.alive_in(year)).count();
            if alive > highest {
                highest = alive;
                peaks.clear();
                peaks.push(year);
            } else if alive == highest {
                peaks.push(year);
            }
        }
        peaks
    }

    #[test]
    fn test_construction_valid() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        assert_eq!(solver.minimum_year(), 1900);
        assert_eq!(solver.maximum_year(), 2000);
    }

    #[test]
    fn test_construction_single_year_range() {
        // A closed single-year range is valid.
        let solver = PopulationSolver::new(1900i16, 1900i16).unwrap();
        assert_eq!(solver.minimum_year(), 1900);
        assert_eq!(solver.maximum_year(), 1900);
    }

    #[test]
    fn test_construction_invalid_range() {
        let result = PopulationSolver::new(2000i16, 1900i16);
        assert_eq!(
            result.unwrap_err(),
            SolverError::InvalidRange {
                minimum_year: 2000,
                maximum_year: 1900,
            }
        );
    }

    #[test]
    fn test_set_minimum_year() {
        let mut solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        solver.set_minimum_year(1950);
        assert_eq!(solver.minimum_year(), 1950);
        assert_eq!(solver.maximum_year(), 2000);
    }

    #[test]
    fn test_set_maximum_year() {
        let mut solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        solver.set_maximum_year(2050);
        assert_eq!(solver.minimum_year(), 1900);
        assert_eq!(solver.maximum_year(), 2050);
    }

    #[test]
    fn test_setters_allow_crossed_bounds() {
        // Setters never validate; the bounds may transiently cross.
        let mut solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        solver.set_minimum_year(2100);
        assert_eq!(solver.minimum_year(), 2100);
        assert_eq!(solver.maximum_year(), 2000);

        // No entry can satisfy crossed bounds, so solving fails on the
        // first entry.
        let input = people(&[(1950, 1960)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::OutOfRange {
                lifespan: Lifespan::new(1950, 1960),
            }
        );
    }

    #[test]
    fn test_single_peak_year() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[
            (1903, 1974),
            (1922, 1984),
            (1920, 2000),
            (1965, 1978),
            (1942, 1965),
        ]);
        assert_eq!(solver.highest_population_year(&input).unwrap(), vec![1965]);
    }

    #[test]
    fn test_tied_peak_years() {
        // Same scenario as above, but the last death moves from 1965 to
        // 1967, stretching the five-person peak across three years.
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[
            (1903, 1974),
            (1922, 1984),
            (1920, 2000),
            (1965, 1978),
            (1942, 1967),
        ]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap(),
            vec![1965, 1966, 1967]
        );
    }

    #[test]
    fn test_negative_year_range() {
        let solver = PopulationSolver::new(-200i16, -100i16).unwrap();
        let input = people(&[(-188, -120), (-174, -150), (-150, -100)]);
        assert_eq!(solver.highest_population_year(&input).unwrap(), vec![-150]);
    }

    #[test]
    fn test_range_crossing_zero() {
        let solver = PopulationSolver::new(-50i16, 50i16).unwrap();
        let input = people(&[(-36, 10), (-35, 6), (5, 49)]);
        assert_eq!(solver.highest_population_year(&input).unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_single_person_single_year() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1950, 1950)]);
        // Only the single lived year is a peak; the surrounding
        // zero-population years are not reported.
        assert_eq!(solver.highest_population_year(&input).unwrap(), vec![1950]);
    }

    #[test]
    fn test_peak_in_final_year_of_range() {
        // Death in the maximum year exercises the trailing delta slot.
        let solver = PopulationSolver::new(1990i16, 2000i16).unwrap();
        let input = people(&[(1990, 2000), (2000, 2000)]);
        assert_eq!(solver.highest_population_year(&input).unwrap(), vec![2000]);
    }

    #[test]
    fn test_empty_input() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input: Vec<Lifespan<i16>> = Vec::new();
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::EmptyInput
        );
    }

    #[test]
    fn test_birth_year_out_of_range() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1903, 1974), (1804, 1935), (1920, 1999)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::OutOfRange {
                lifespan: Lifespan::new(1804, 1935),
            }
        );
    }

    #[test]
    fn test_death_year_out_of_range() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();

        // Death year one past the maximum is already rejected.
        let input = people(&[(1903, 1974), (1974, 2001), (1920, 1999)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::OutOfRange {
                lifespan: Lifespan::new(1974, 2001),
            }
        );
    }

    #[test]
    fn test_inverted_span() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1903, 1974), (1981, 1922), (1920, 1999)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::InvertedSpan {
                lifespan: Lifespan::new(1981, 1922),
            }
        );
    }

    #[test]
    fn test_range_checked_before_inversion() {
        // The entry is both out of range and inverted; the range check
        // runs first, so OutOfRange wins.
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1850, 1750)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::OutOfRange {
                lifespan: Lifespan::new(1850, 1750),
            }
        );
    }

    #[test]
    fn test_first_offending_entry_wins() {
        // An inverted entry ahead of an out-of-range entry: entries are
        // validated in input order, so the inversion is reported.
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1920, 1980), (1981, 1922), (1804, 1935)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap_err(),
            SolverError::InvertedSpan {
                lifespan: Lifespan::new(1981, 1922),
            }
        );
    }

    #[test]
    fn test_idempotence() {
        let solver = PopulationSolver::new(1900i16, 2000i16).unwrap();
        let input = people(&[(1903, 1974), (1922, 1984), (1920, 2000)]);
        let first = solver.highest_population_year(&input).unwrap();
        let second = solver.highest_population_year(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_reconfiguration_between_calls() {
        // The delta buffer is sized from the bounds current at call time,
        // so widening the range between calls must not misbehave.
        let mut solver = PopulationSolver::new(1950i16, 1960i16).unwrap();
        let input = people(&[(1955, 1958)]);
        assert_eq!(
            solver.highest_population_year(&input).unwrap(),
            vec![1955, 1956, 1957, 1958]
        );

        solver.set_minimum_year(1900);
        solver.set_maximum_year(2000);
        assert_eq!(
            solver.highest_population_year(&input).unwrap(),
            vec![1955, 1956, 1957, 1958]
        );
    }

    #[test]
    fn test_matches_brute_force() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let solver = PopulationSolver::new(-300i32, 300i32).unwrap();

        for _ in 0..50 {
            let count = rng.random_range(1..=120);
            let input: Vec<Lifespan<i32>> = (0..count)
                .map(|_| {
                    let birth = rng.random_range(-300..=300);
                    let death = rng.random_range(birth..=300);
                    Lifespan::new(birth, death)
                })
                .collect();

            let peaks = solver.highest_population_year(&input).unwrap();
            assert_eq!(peaks, brute_force_peaks(-300, 300, &input));

            // Structural properties of the result
            assert!(!peaks.is_empty());
            assert!(peaks.windows(2).all(|w| w[0] < w[1]));
            assert!(peaks.iter().all(|&y| (-300..=300).contains(&y)));
        }
    }

    #[test]
    fn test_display_messages() {
        let invalid: SolverError<i16> = SolverError::InvalidRange {
            minimum_year: 2000,
            maximum_year: 1900,
        };
        assert_eq!(
            format!("{}", invalid),
            "Minimum year 2000 is greater than maximum year 1900"
        );

        let empty: SolverError<i16> = SolverError::EmptyInput;
        assert_eq!(format!("{}", empty), "No lifespan entries were provided");

        let out_of_range: SolverError<i16> = SolverError::OutOfRange {
            lifespan: Lifespan::new(1804, 1935),
        };
        assert_eq!(
            format!("{}", out_of_range),
            "Lifespan(1804, 1935) lies outside the configured year range"
        );

        let inverted: SolverError<i16> = SolverError::InvertedSpan {
            lifespan: Lifespan::new(1981, 1922),
        };
        assert_eq!(
            format!("{}", inverted),
            "Lifespan(1981, 1922) has a birth year after its death year"
        );
    }
}
