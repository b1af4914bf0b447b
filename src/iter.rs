use core::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::element::Element;
use crate::StepRange;

/// Borrowing iterator over a [`StepRange`], created by [`StepRange::iter`].
///
/// Holds a `[front, back)` pair of cursors. `next` reads at `front` and moves
/// it forward; `next_back` moves `back` backward and reads there, so
/// `iter().rev()` visits the same values as walking `rbegin()..rend()`.
/// Every read goes through [`StepRange::get`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T: Element> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T: Element> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        Self { front, back }
    }
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.front.get().ok()?;
        self.front.inc();
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        let remaining = self.len();
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        // n < remaining <= isize::MAX
        self.front = Cursor::new(self.front.range(), self.front.position() + n as isize);
        self.next()
    }
}

impl<T: Element> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let mut last = self.back;
        let value = last.dec().get().ok()?;
        self.back = last;
        Some(value)
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        (self.back.position() - self.front.position()) as usize
    }
}

impl<T: Element> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`StepRange`], created by `into_iter`.
///
/// The range is `Copy`, so this is the borrowing iterator's positions kept
/// next to their own copy of the range.
#[derive(Clone, Debug)]
pub struct IntoIter<T: Element> {
    range: StepRange<T>,
    front: usize,
    back: usize,
}

impl<T: Element> IntoIter<T> {
    #[inline]
    pub(crate) fn new(range: StepRange<T>) -> Self {
        Self {
            range,
            front: 0,
            back: range.len(),
        }
    }
}

impl<T: Element> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // Positions stay below len, which fits in isize.
        let value = self.range.get(self.front as isize).ok()?;
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T: Element> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.range.get(self.back as isize - 1).ok()?;
        self.back -= 1;
        Some(value)
    }
}

impl<T: Element> ExactSizeIterator for IntoIter<T> {}

impl<T: Element> FusedIterator for IntoIter<T> {}
