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

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

/// Widens an integer to `i128` for overflow-safe interval arithmetic.
///
/// # Panics
///
/// Panics if the value does not fit into `i128` (only possible for `u128`
/// values above `i128::MAX`).
#[inline]
fn widen<T>(value: T) -> i128
where
    T: PrimInt,
{
    value
        .to_i128()
        .expect("interval bound exceeds the i128 range")
}

/// A closed inclusive interval `[start, end]` over primitive integers.
///
/// This struct represents a contiguous, non-empty set of integers that
/// includes both of its bounds. It supports set-theoretic operations such
/// as intersection and union, as well as geometric queries like overlap
/// and adjacency checks.
///
/// Unlike a closed-open interval, a closed interval cannot be empty: even
/// `[y, y]` contains the single point `y`. This matches domains where both
/// boundary values are meaningful, such as calendar-year spans in which the
/// final year still counts in full.
///
/// # Invariants
/// `start_inclusive` must always be less than or equal to `end_inclusive`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_inclusive: T,
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// The iterator is careful not to step past `T::MAX`: an interval ending at
/// the maximum representable value iterates to completion without
/// overflowing.
///
/// # Examples
///
/// ```rust
/// # use cohort_core::math::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        let remaining = widen(self.back) - widen(self.front) + 1;
        usize::try_from(remaining)
            .expect("ClosedIntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: PrimInt {}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1900, 2000);
    /// assert_eq!(iv.count(), 101);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_inclusive: T) -> Self {
        assert!(
            start_inclusive <= end_inclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_inclusive"
        );
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_inclusive: T) -> Option<Self> {
        if start_inclusive <= end_inclusive {
            Some(Self {
                start_inclusive,
                end_inclusive,
            })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start_inclusive <= end_inclusive`.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new_unchecked(0, 10);
    /// ```
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_inclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_inclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_inclusive"
        );
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    /// Returns the inclusive start bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(5, 10);
    /// assert_eq!(iv.start(), 5);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the inclusive end bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(5, 10);
    /// assert_eq!(iv.end(), 10);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end_inclusive
    }

    /// Returns the number of integer points contained in the interval.
    ///
    /// The count is computed in wide arithmetic, so intervals spanning the
    /// full range of `T` do not overflow.
    ///
    /// # Panics
    ///
    /// Panics if the count exceeds `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(10, 20).count(), 11);
    /// assert_eq!(ClosedInterval::new(-5, 5).count(), 11);
    /// assert_eq!(ClosedInterval::new(7, 7).count(), 1);
    /// assert_eq!(ClosedInterval::new(i16::MIN, i16::MAX).count(), 65536);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        let points = widen(self.end_inclusive) - widen(self.start_inclusive) + 1;
        usize::try_from(points).expect("ClosedInterval: point count exceeds usize::MAX")
    }

    /// Returns `true` if the interval contains exactly one point (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::new(10, 10).is_singleton());
    /// assert!(!ClosedInterval::new(10, 11).is_singleton());
    /// ```
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.start_inclusive == self.end_inclusive
    }

    /// Returns `true` if `value` is contained in the interval `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value <= self.end_inclusive
    }

    /// Returns `true` if `other` is fully contained within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(2, 10);
    /// assert!(a.contains_interval(b));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start_inclusive <= other.start_inclusive && other.end_inclusive <= self.end_inclusive
    }

    /// Returns `true` if this interval shares at least one point with `other`.
    ///
    /// Closed intervals that merely touch at a bound do share that bound,
    /// so touching counts as intersection here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.intersects(ClosedInterval::new(10, 20))); // Shares the point 10
    /// assert!(!a.intersects(ClosedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive <= other.end_inclusive && other.start_inclusive <= self.end_inclusive
    }

    /// Returns `true` if the intervals are disjoint but separated by no gap.
    ///
    /// For closed intervals this means one interval ends exactly one point
    /// before the other starts. The check is performed in wide arithmetic,
    /// so bounds at the extremes of `T` do not overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.adjacent(ClosedInterval::new(11, 20)));
    /// assert!(!a.adjacent(ClosedInterval::new(10, 20))); // Overlaps instead
    /// assert!(!a.adjacent(ClosedInterval::new(12, 20))); // Gap of one point
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        widen(self.end_inclusive) + 1 == widen(other.start_inclusive)
            || widen(other.end_inclusive) + 1 == widen(self.start_inclusive)
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals are disjoint. Because closed
    /// intervals are never empty, two intervals touching at a single point
    /// intersect in the singleton interval containing that point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = max(self.start_inclusive, other.start_inclusive);
        let new_end = min(self.end_inclusive, other.end_inclusive);

        if new_start <= new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` if the intervals intersect or are adjacent.
    /// Returns `None` if the intervals are separated by a gap, since the
    /// result would not be contiguous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(11, 20);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(0, 20)));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects(other) || self.adjacent(other) {
            Some(Self {
                start_inclusive: min(self.start_inclusive, other.start_inclusive),
                end_inclusive: max(self.end_inclusive, other.end_inclusive),
            })
        } else {
            None
        }
    }

    /// Creates an iterator over the points in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cohort_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1, 3);
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.start_inclusive,
            back: self.end_inclusive,
            exhausted: false,
        }
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: PrimInt,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: PrimInt,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_inclusive", &self.end_inclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start_inclusive, self.end_inclusive)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start_inclusive)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end_inclusive)
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if the range is exhausted or inverted (`start > end`).
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start_inclusive..=iv.end_inclusive
    }
}
