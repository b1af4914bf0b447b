use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

use num_traits::AsPrimitive;

use crate::cursor::{Cursor, ReverseCursor};
use crate::element::Element;
use crate::iter::{IntoIter, Iter};
use crate::narrow::narrow;
use crate::RangeError;

/// An arithmetic progression `start, start + step, start + 2 * step, ...`
/// bounded by the exclusive `stop`.
///
/// Only the three defining values are stored. Length and elements are
/// computed on demand in constant time, so a `StepRange` never allocates
/// and stays `Copy`.
///
/// # Invariants
/// - `step` is non-zero.
/// - `step` points from `start` towards `stop` (`start == stop` is allowed
///   with either sign).
/// - The length fits in `isize`, so every element has a signed position.
///
/// All three are checked on construction; a built range upholds them for
/// its whole life.
///
/// # Examples
/// ```
/// use step_range::StepRange;
///
/// let r = StepRange::new(9i64, -6, -3).unwrap();
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.get(1), Ok(6));
/// assert_eq!(r.get(-2), Ok(0));
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![9, 6, 3, 0, -3]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct StepRange<T: Element> {
    start: T,
    stop: T,
    step: T,
}

impl<T: Element> StepRange<T> {
    /// Creates the range from `start` up to (excluding) `stop`, moving by `step`.
    ///
    /// # Errors
    /// - [`RangeError::ZeroStep`] if `step` is zero
    /// - [`RangeError::InvalidDirection`] if stepping from `start` moves away
    ///   from `stop` (this includes NaN bounds or steps)
    /// - [`RangeError::TooLong`] if the range has more than `isize::MAX`
    ///   elements or a non-finite extent
    #[inline]
    pub fn new(start: T, stop: T, step: T) -> Result<Self, RangeError> {
        if step == T::zero() {
            log::debug!("range rejected: zero step ({}..{})", start, stop);
            return Err(RangeError::ZeroStep);
        }
        let forward = start <= stop && step > T::zero();
        let backward = start >= stop && step < T::zero();
        if !forward && !backward {
            log::debug!("range rejected: step {} never reaches {} from {}", step, stop, start);
            return Err(RangeError::InvalidDirection);
        }
        let len = T::count(start, stop, step);
        if narrow::<isize, usize>(len).is_err() {
            log::debug!("range rejected: {}..{} by {} is too long", start, stop, step);
            return Err(RangeError::TooLong);
        }
        Ok(Self { start, stop, step })
    }

    /// Creates `start..stop` with a step of one.
    #[inline]
    pub fn with_bounds(start: T, stop: T) -> Result<Self, RangeError> {
        Self::new(start, stop, T::one())
    }

    /// Creates `0..stop` with a step of one.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let r = StepRange::with_stop(10).unwrap();
    /// assert_eq!(r.get(0), Ok(0));
    /// assert_eq!(r.get(-1), Ok(9));
    /// ```
    #[inline]
    pub fn with_stop(stop: T) -> Result<Self, RangeError> {
        Self::new(T::zero(), stop, T::one())
    }

    /// Creates `0..stop` from a value of another element type.
    ///
    /// # Errors
    /// [`RangeError::Narrowing`] if `stop` is not exactly representable in `T`,
    /// plus anything [`StepRange::with_stop`] reports.
    ///
    /// # Examples
    /// ```
    /// use step_range::{RangeError, StepRange};
    ///
    /// let r = StepRange::<i8>::try_from_stop(10u32).unwrap();
    /// assert_eq!(r.len(), 10);
    ///
    /// assert_eq!(StepRange::<i8>::try_from_stop(300u32), Err(RangeError::Narrowing));
    /// ```
    #[inline]
    pub fn try_from_stop<U>(stop: U) -> Result<Self, RangeError>
    where
        U: Element + AsPrimitive<T>,
        T: AsPrimitive<U>,
    {
        Self::with_stop(narrow(stop)?)
    }

    /// Creates `start..stop` (step one) from values of another element type.
    #[inline]
    pub fn try_from_bounds<U>(start: U, stop: U) -> Result<Self, RangeError>
    where
        U: Element + AsPrimitive<T>,
        T: AsPrimitive<U>,
    {
        Self::with_bounds(narrow(start)?, narrow(stop)?)
    }

    /// Returns the first value of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive bound of the range.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step between consecutive values.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values in the range.
    ///
    /// For floats, trailing positions whose computed value rounds onto or
    /// past `stop` are not counted, so `get(-1)` of a non-empty range always
    /// succeeds and iteration never yields `stop`.
    ///
    /// ```
    /// use step_range::StepRange;
    ///
    /// assert_eq!(StepRange::with_stop(5).unwrap().len(), 5);
    /// assert_eq!(StepRange::new(2, 5, 3).unwrap().len(), 1);
    /// assert_eq!(StepRange::new(1, 2, 10).unwrap().len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        T::count(self.start, self.stop, self.step)
    }

    /// Returns `true` if the range has no values, which happens exactly
    /// when `start == stop`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`.
    ///
    /// Negative indices count from the end: `-1` is the last value, `-2` the
    /// one before it. Index `0` is always `start`.
    ///
    /// # Errors
    /// [`RangeError::IndexOutOfBounds`] if the translated index falls outside
    /// the range or the computed value does not lie strictly before `stop`.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let r = StepRange::new(0, 5, 2).unwrap();
    /// assert_eq!(r.get(0), Ok(0));
    /// assert_eq!(r.get(-1), Ok(4));
    /// assert!(r.get(3).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: isize) -> Result<T, RangeError> {
        let len = self.len();
        let out_of_bounds = RangeError::IndexOutOfBounds { index, len };
        // len <= isize::MAX was checked on construction.
        let position = if index >= 0 { index } else { len as isize + index };
        if position < 0 || position as usize >= len {
            return Err(out_of_bounds);
        }

        let value = T::offset(self.start, self.step, position as usize);
        if !self.in_bounds(value) {
            return Err(out_of_bounds);
        }
        Ok(value)
    }

    /// Returns the first value, or `None` if the range is empty.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.get(0).ok()
    }

    /// Returns the last value, or `None` if the range is empty.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.get(-1).ok()
    }

    /// Returns the position at which iterating the range yields `value`.
    ///
    /// Float values must match the computed element exactly, so
    /// `StepRange::new(0.0, 1.0, 0.1)` holds `0.30000000000000004` at
    /// position 3, not `0.3`.
    ///
    /// ```
    /// use step_range::StepRange;
    ///
    /// let r = StepRange::new(9, -6, -3).unwrap();
    /// assert_eq!(r.index_of(6), Some(1));
    /// assert_eq!(r.index_of(5), None);
    /// assert_eq!(r.index_of(-6), None);
    /// ```
    #[inline]
    pub fn index_of(&self, value: T) -> Option<usize> {
        if !self.in_bounds(value) {
            return None;
        }
        let index = T::index_of(self.start, self.step, value)?;
        (index < self.len()).then_some(index)
    }

    /// Returns `true` if iterating the range would yield `value`.
    ///
    /// ```
    /// use step_range::StepRange;
    ///
    /// let r = StepRange::new(-5, 5, 3).unwrap();
    /// assert!(r.contains(-2));
    /// assert!(!r.contains(0));
    /// assert!(!r.contains(5));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns a cursor at the first position.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor one past the last position.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len() as isize)
    }

    /// Returns a reverse cursor at the last value.
    #[inline]
    pub fn rbegin(&self) -> ReverseCursor<'_, T> {
        ReverseCursor::new(self.end())
    }

    /// Returns a reverse cursor one before the first value.
    #[inline]
    pub fn rend(&self) -> ReverseCursor<'_, T> {
        ReverseCursor::new(self.begin())
    }

    /// Returns an iterator over the values of the range.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks the range
    /// from its last value back to `start`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.end())
    }

    /// Whether `value` lies in `[start, stop)` in the direction of the step.
    #[inline]
    fn in_bounds(&self, value: T) -> bool {
        if self.step > T::zero() {
            value >= self.start && value < self.stop
        } else {
            value <= self.start && value > self.stop
        }
    }
}

impl<T: Element> Default for StepRange<T> {
    fn default() -> Self {
        Self {
            start: T::zero(),
            stop: T::zero(),
            step: T::one(),
        }
    }
}

impl<T: Element> fmt::Debug for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRange")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish()
    }
}

impl<T: Element> fmt::Display for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == T::one() {
            write!(f, "range({}, {})", self.start, self.stop)
        } else {
            write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
        }
    }
}

impl<T: Element> TryFrom<Range<T>> for StepRange<T> {
    type Error = RangeError;

    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::with_bounds(range.start, range.end)
    }
}

impl<'a, T: Element> IntoIterator for &'a StepRange<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> IntoIterator for StepRange<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// Returns `0..min(container.len(), count)`, for visiting at most `count`
/// elements of a container.
///
/// The container length is narrowed into `T`, so a container longer than
/// `T` can express fails with [`RangeError::Narrowing`].
///
/// # Examples
/// ```
/// use step_range::min_range;
///
/// let names = ["ada", "grace", "edsger"];
/// assert_eq!(min_range(&names, 2u8).unwrap().len(), 2);
/// assert_eq!(min_range(&names, 10u8).unwrap().len(), 3);
/// ```
pub fn min_range<T, C>(container: C, count: T) -> Result<StepRange<T>, RangeError>
where
    T: Element + AsPrimitive<usize>,
    usize: AsPrimitive<T>,
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
{
    let len: T = narrow(container.into_iter().len())?;
    let stop = match len.partial_cmp(&count) {
        Some(Ordering::Less) => len,
        _ => count,
    };
    StepRange::with_stop(stop)
}
