use core::fmt;

use num_traits::float::FloatCore;
use num_traits::{Bounded, Num, NumCast};

/// Sealed trait module to prevent external implementations.
///
/// The positional arithmetic lives here so it stays out of the public API.
mod private {
    pub trait Sealed: Sized {
        /// Number of values in `[start, stop)` visited by `step`.
        ///
        /// The arguments must already satisfy the direction invariant. Counts
        /// that do not fit in `usize` saturate to `usize::MAX`.
        fn count(start: Self, stop: Self, step: Self) -> usize;

        /// `start + step * index`, multiplied first and then added.
        ///
        /// Only called with `index <= count(start, stop, step)`.
        fn offset(start: Self, step: Self, index: usize) -> Self;

        /// Position whose value is exactly `value`, if any. Does not check
        /// the range bounds.
        fn index_of(start: Self, step: Self, value: Self) -> Option<usize>;
    }
}

/// Trait for numeric types that can be the element type of a `StepRange`.
///
/// This trait is sealed and implemented for the primitive integers up to
/// 64 bits (signed and unsigned, including `isize` and `usize`) and for
/// `f32` and `f64`.
///
/// Integer implementations do their arithmetic in `i128`, so computing
/// `stop - start` never overflows the element type itself. Float
/// implementations use the element's own arithmetic and inherit its rounding.
///
/// The arithmetic behind the range is not part of this trait's API:
///
/// ```compile_fail
/// use step_range::Element;
///
/// let _ = i32::count(0, 10, 1);
/// ```
pub trait Element:
    private::Sealed + Copy + PartialOrd + Num + Bounded + NumCast + fmt::Debug + fmt::Display + 'static
{
}

macro_rules! impl_integer_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {
                #[inline]
                fn count(start: Self, stop: Self, step: Self) -> usize {
                    let span = stop as i128 - start as i128;
                    let step = step as i128;
                    let whole = span / step;
                    // A partial final step still visits one more value.
                    let count = if span % step == 0 { whole } else { whole + 1 };
                    usize::try_from(count).unwrap_or(usize::MAX)
                }

                #[inline]
                fn offset(start: Self, step: Self, index: usize) -> Self {
                    (start as i128 + step as i128 * index as i128) as $ty
                }

                #[inline]
                fn index_of(start: Self, step: Self, value: Self) -> Option<usize> {
                    let delta = value as i128 - start as i128;
                    let step = step as i128;
                    if delta % step != 0 {
                        return None;
                    }
                    usize::try_from(delta / step).ok()
                }
            }

            impl Element for $ty {}
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {
                #[inline]
                fn count(start: Self, stop: Self, step: Self) -> usize {
                    let steps = FloatCore::trunc((stop - start) / step);
                    let Some(whole) = <usize as NumCast>::from(steps) else {
                        return usize::MAX;
                    };
                    let count = if start + step * steps == stop {
                        whole
                    } else {
                        whole.saturating_add(1)
                    };

                    let before_stop = |index: usize| {
                        let value = Self::offset(start, step, index);
                        if step > 0.0 { value < stop } else { value > stop }
                    };
                    if count == 0 || before_stop(count - 1) {
                        return count;
                    }
                    // Rounding carried the tail onto or past stop. Values are
                    // monotonic in the index, so the bad positions form a
                    // suffix; index 0 is start and always good.
                    let (mut good, mut bad) = (0, count - 1);
                    while bad - good > 1 {
                        let mid = good + (bad - good) / 2;
                        if before_stop(mid) {
                            good = mid;
                        } else {
                            bad = mid;
                        }
                    }
                    bad
                }

                #[inline]
                fn offset(start: Self, step: Self, index: usize) -> Self {
                    start + step * (index as $ty)
                }

                #[inline]
                fn index_of(start: Self, step: Self, value: Self) -> Option<usize> {
                    let nearest = FloatCore::round((value - start) / step);
                    let nearest = <usize as NumCast>::from(nearest)?;
                    [Some(nearest), nearest.checked_sub(1), nearest.checked_add(1)]
                        .into_iter()
                        .flatten()
                        .find(|&index| Self::offset(start, step, index) == value)
                }
            }

            impl Element for $ty {}
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_element!(f32, f64);

/// Returns `true` when `T` can hold negative values.
///
/// Floats count as signed.
#[inline]
pub(crate) fn is_signed<T: Element>() -> bool {
    T::min_value() < T::zero()
}
