#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use step_range::StepRange;
//!
//! // Every second value from 0 up to (excluding) 10
//! let range = StepRange::new(0, 10, 2).unwrap();
//!
//! assert_eq!(range.len(), 5);
//! assert_eq!(range.get(0), Ok(0));
//! assert_eq!(range.get(-1), Ok(8));
//!
//! // Iterate forwards and backwards
//! for i in &range {
//!     println!("{}", i);
//! }
//! assert_eq!(range.iter().rev().collect::<Vec<_>>(), vec![8, 6, 4, 2, 0]);
//! ```
//!
//! # Element Types
//!
//! `StepRange` works over `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`
//! and `f64`. Float ranges compute each value as `start + step * index`
//! rather than by repeated addition, which limits (but does not remove)
//! rounding drift:
//!
//! ```rust
//! use step_range::StepRange;
//!
//! let range = StepRange::new(-3.2, 8.0, 0.8).unwrap();
//! assert_eq!(range.get(2), Ok(-1.6));
//! ```
//!
//! # Errors Instead of Panics
//!
//! Invalid definitions are reported when the range is built, and bad
//! indices when they are read:
//!
//! ```rust
//! use step_range::{RangeError, StepRange};
//!
//! assert_eq!(StepRange::new(5, 3, 1), Err(RangeError::InvalidDirection));
//! assert_eq!(StepRange::new(1, 1, 0), Err(RangeError::ZeroStep));
//! assert_eq!(StepRange::<i8>::try_from_stop(1000u32), Err(RangeError::Narrowing));
//!
//! let range = StepRange::with_stop(3).unwrap();
//! assert_eq!(range.get(3), Err(RangeError::IndexOutOfBounds { index: 3, len: 3 }));
//! ```

mod cursor;
mod element;
mod enum_range;
mod error;
mod iter;
mod narrow;
mod step_range;

pub use cursor::{Cursor, ReverseCursor};
pub use element::Element;
pub use enum_range::{range_over_enum, RangeEnum};
pub use error::RangeError;
pub use iter::{IntoIter, Iter};
pub use narrow::{is_narrowing, narrow};
pub use step_range::{min_range, StepRange};

#[cfg(test)]
#[path = "tests/step_range_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod cursor_tests;
