//! Bidirectional cursors over a [`StepRange`].
//!
//! A cursor is a borrowed range plus a signed position. It stores no value:
//! every read goes back through [`StepRange::get`], so the cursor may sit
//! anywhere (one past the end, one before the start) and only reading an
//! out-of-range position fails.

use core::fmt;
use core::ptr;

use crate::element::Element;
use crate::{RangeError, StepRange};

/// A forward cursor over a [`StepRange`].
///
/// Two cursors are equal when they borrow the same range instance and sit at
/// the same position. Cursors over equal but distinct ranges never compare
/// equal.
///
/// # Examples
/// ```
/// use step_range::StepRange;
///
/// let r = StepRange::new(0, 10, 2).unwrap();
/// let mut values = Vec::new();
/// let mut it = r.begin();
/// while it != r.end() {
///     values.push(it.get().unwrap());
///     it.inc();
/// }
/// assert_eq!(values, vec![0, 2, 4, 6, 8]);
/// ```
pub struct Cursor<'a, T: Element> {
    range: &'a StepRange<T>,
    position: isize,
}

impl<'a, T: Element> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(range: &'a StepRange<T>, position: isize) -> Self {
        Self { range, position }
    }

    /// Returns the range this cursor walks.
    #[inline]
    pub fn range(&self) -> &'a StepRange<T> {
        self.range
    }

    /// Returns the current position (may be `-1` or `len()`).
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Reads the value at the current position.
    ///
    /// # Errors
    /// [`RangeError::IndexOutOfBounds`] outside `[0, len)`.
    #[inline]
    pub fn get(&self) -> Result<T, RangeError> {
        if self.position < 0 {
            // A negative position is a cursor past the front, not an index
            // from the end.
            return Err(RangeError::IndexOutOfBounds {
                index: self.position,
                len: self.range.len(),
            });
        }
        self.range.get(self.position)
    }

    /// Moves to the next position.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Moves to the previous position.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Moves to the next position and returns the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prior = *self;
        self.position += 1;
        prior
    }

    /// Moves to the previous position and returns the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prior = *self;
        self.position -= 1;
        prior
    }
}

impl<T: Element> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element> Copy for Cursor<'_, T> {}

impl<T: Element> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.range, other.range) && self.position == other.position
    }
}

impl<T: Element> Eq for Cursor<'_, T> {}

impl<T: Element> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("range", self.range)
            .field("position", &self.position)
            .finish()
    }
}

/// A cursor walking a [`StepRange`] backwards, built on a forward [`Cursor`].
///
/// Reading a reverse cursor whose base sits at position `p` yields the value
/// at forward position `p - 1`, so [`StepRange::rbegin`] wraps
/// [`StepRange::end`] and [`StepRange::rend`] wraps [`StepRange::begin`].
///
/// # Examples
/// ```
/// use step_range::StepRange;
///
/// let r = StepRange::new(0, 10, 2).unwrap();
/// let mut values = Vec::new();
/// let mut it = r.rbegin();
/// while it != r.rend() {
///     values.push(it.get().unwrap());
///     it.inc();
/// }
/// assert_eq!(values, vec![8, 6, 4, 2, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReverseCursor<'a, T: Element> {
    base: Cursor<'a, T>,
}

impl<'a, T: Element> ReverseCursor<'a, T> {
    /// Wraps a forward cursor.
    #[inline]
    pub fn new(base: Cursor<'a, T>) -> Self {
        Self { base }
    }

    /// Returns the wrapped forward cursor.
    #[inline]
    pub fn base(&self) -> Cursor<'a, T> {
        self.base
    }

    /// Reads the value just before the base position.
    #[inline]
    pub fn get(&self) -> Result<T, RangeError> {
        let mut forward = self.base;
        forward.dec();
        forward.get()
    }

    /// Moves one value towards the start of the range.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    /// Moves one value towards the end of the range.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }

    /// Like [`ReverseCursor::inc`], returning the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prior = *self;
        self.base.dec();
        prior
    }

    /// Like [`ReverseCursor::dec`], returning the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prior = *self;
        self.base.inc();
        prior
    }
}
