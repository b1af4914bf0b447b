use thiserror::Error;

/// Errors reported when a [`StepRange`](crate::StepRange) is built or indexed.
///
/// Every variant describes a programming mistake in the calling code rather
/// than bad external input, so none of them carry a source error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The step was zero, so the sequence would never advance.
    #[error("range -- cannot have step size of 0")]
    ZeroStep,

    /// Stepping from start moves away from stop.
    #[error("invalid range and step")]
    InvalidDirection,

    /// A value could not be represented exactly in the target element type.
    #[error("range -- narrowing error")]
    Narrowing,

    /// The index, after negative-index translation, falls outside the range.
    #[error("range -- invalid index: {index} (len {len})")]
    IndexOutOfBounds { index: isize, len: usize },

    /// The range holds more elements than a signed position can address.
    #[error("range -- sequence length exceeds isize::MAX")]
    TooLong,
}
