//! Checked numeric conversions between element types.
//!
//! A conversion narrows when the value is out of the target's range, when
//! converting it back does not reproduce it, or when the two types disagree
//! in signedness and the cast flips the sign (a large `u32` wrapping to a
//! negative `i32`). Both directions use checked conversions, since `as`
//! saturates float-to-int casts and would round-trip `2^63` through `i64`.

use num_traits::{AsPrimitive, NumCast};

use crate::element::{is_signed, Element};
use crate::RangeError;

/// Returns `true` if `converted` (the result of casting `original` to `T`)
/// lost information.
///
/// # Examples
/// ```
/// use step_range::is_narrowing;
///
/// assert!(!is_narrowing(10i8, 10u32));
/// assert!(is_narrowing(300u32 as i8, 300u32));
/// assert!(is_narrowing(u32::MAX as i32, u32::MAX));
/// assert!(is_narrowing(2.5f64 as i32, 2.5f64));
/// // 2^63 saturates to i64::MAX, which converts back to 2^63.
/// let two_pow_63 = 9_223_372_036_854_775_808.0f64;
/// assert!(is_narrowing(two_pow_63 as i64, two_pow_63));
/// ```
#[inline]
pub fn is_narrowing<T, U>(converted: T, original: U) -> bool
where
    T: Element,
    U: Element,
{
    let in_range = <T as NumCast>::from(original).is_some();
    let round_trip = <U as NumCast>::from(converted);
    !in_range
        || round_trip != Some(original)
        || (is_signed::<T>() != is_signed::<U>()
            && (converted < T::zero()) != (original < U::zero()))
}

/// Casts `value` to `T`, failing with [`RangeError::Narrowing`] if the cast
/// would lose information.
///
/// # Examples
/// ```
/// use step_range::{narrow, RangeError};
///
/// assert_eq!(narrow::<i8, u32>(100), Ok(100i8));
/// assert_eq!(narrow::<i8, u32>(200), Err(RangeError::Narrowing));
/// assert_eq!(narrow::<u16, i64>(-1), Err(RangeError::Narrowing));
/// ```
#[inline]
pub fn narrow<T, U>(value: U) -> Result<T, RangeError>
where
    T: Element + AsPrimitive<U>,
    U: Element + AsPrimitive<T>,
{
    let converted: T = value.as_();
    if is_narrowing(converted, value) {
        log::debug!("narrowing conversion rejected: {} became {}", value, converted);
        return Err(RangeError::Narrowing);
    }
    Ok(converted)
}
