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

use num_traits::{PrimInt, Signed};

/// A person's lifespan: the closed year interval `[birth_year, death_year]`
/// during which they are counted as alive.
///
/// Both bounds are inclusive. A person born and dead in the same year was
/// alive for that entire year and contributes to its population.
///
/// `Lifespan` is a plain value pair and performs no validation of its own:
/// a lifespan may carry a birth year after its death year, or years outside
/// any particular solver's bounds. [`PopulationSolver`] enforces both
/// invariants at solve time and rejects offending entries with a
/// distinguishable error, so constructing a `Lifespan` is always cheap and
/// infallible.
///
/// [`PopulationSolver`]: crate::solver::PopulationSolver
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lifespan<T>
where
    T: PrimInt + Signed,
{
    birth_year: T,
    death_year: T,
}

impl<T> Lifespan<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Lifespan` from a birth and death year.
    ///
    /// No validation is performed; see the type-level documentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_solver::lifespan::Lifespan;
    ///
    /// let person = Lifespan::new(1903i16, 1974i16);
    /// assert_eq!(person.birth_year(), 1903);
    /// assert_eq!(person.death_year(), 1974);
    /// ```
    #[inline]
    pub const fn new(birth_year: T, death_year: T) -> Self {
        Self {
            birth_year,
            death_year,
        }
    }

    /// Returns the year the person was born (inclusive start of life).
    #[inline]
    pub const fn birth_year(&self) -> T {
        self.birth_year
    }

    /// Returns the year the person died (inclusive; still counted as alive).
    #[inline]
    pub const fn death_year(&self) -> T {
        self.death_year
    }

    /// Returns `true` if the person was alive during `year`.
    ///
    /// Both the birth year and the death year count as alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_solver::lifespan::Lifespan;
    ///
    /// let person = Lifespan::new(1903i32, 1974i32);
    /// assert!(person.alive_in(1903));
    /// assert!(person.alive_in(1974));
    /// assert!(!person.alive_in(1975));
    /// ```
    #[inline]
    pub fn alive_in(&self, year: T) -> bool {
        self.birth_year <= year && year <= self.death_year
    }

    /// Returns `true` if the birth year lies after the death year.
    ///
    /// Such a lifespan is nonsensical and is rejected by the solver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_solver::lifespan::Lifespan;
    ///
    /// assert!(Lifespan::new(1981i16, 1922i16).is_inverted());
    /// assert!(!Lifespan::new(1922i16, 1922i16).is_inverted());
    /// ```
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.birth_year > self.death_year
    }
}

impl<T> From<(T, T)> for Lifespan<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from((birth_year, death_year): (T, T)) -> Self {
        Self::new(birth_year, death_year)
    }
}

impl<T> std::fmt::Debug for Lifespan<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifespan")
            .field("birth_year", &self.birth_year)
            .field("death_year", &self.death_year)
            .finish()
    }
}

impl<T> std::fmt::Display for Lifespan<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lifespan({}, {})", self.birth_year, self.death_year)
    }
}
