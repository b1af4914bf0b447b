use crate::element::Element;
use crate::{RangeError, StepRange};

/// A field-less enum whose discriminant can bound a [`StepRange`].
///
/// Usually implemented with [`impl_range_enum!`](crate::impl_range_enum).
pub trait RangeEnum: Copy {
    /// The enum's underlying integer representation.
    type Repr: Element;

    /// Returns the integer encoding of this enumerator.
    fn to_repr(self) -> Self::Repr;
}

/// Implements [`RangeEnum`] for one or more field-less enums by casting the
/// discriminant to the given representation.
///
/// ```
/// use step_range::{impl_range_enum, StepRange};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Channel {
///     Red,
///     Green,
///     Blue,
///     Alpha,
/// }
/// impl_range_enum!(Channel => u8);
///
/// let colors = StepRange::from_enum(Channel::Alpha).unwrap();
/// assert_eq!(colors.iter().collect::<Vec<u8>>(), vec![0, 1, 2]);
/// ```
#[macro_export]
macro_rules! impl_range_enum {
    ($($ty:ty => $repr:ty),* $(,)?) => {
        $(
            impl $crate::RangeEnum for $ty {
                type Repr = $repr;

                #[inline]
                fn to_repr(self) -> $repr {
                    self as $repr
                }
            }
        )*
    };
}

impl<T: Element> StepRange<T> {
    /// Creates the range `0..value` over the enum's underlying integer type,
    /// i.e. the discriminants of every enumerator declared before `value`
    /// (for enums numbered from zero).
    ///
    /// Fails with [`RangeError::InvalidDirection`] when the discriminant is
    /// negative.
    #[inline]
    pub fn from_enum<E>(value: E) -> Result<Self, RangeError>
    where
        E: RangeEnum<Repr = T>,
    {
        Self::with_stop(value.to_repr())
    }
}

/// Free-function form of [`StepRange::from_enum`].
#[inline]
pub fn range_over_enum<E: RangeEnum>(value: E) -> Result<StepRange<E::Repr>, RangeError> {
    StepRange::from_enum(value)
}
