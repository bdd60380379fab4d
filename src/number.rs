//! Numeric element types.
//!
//! [`Number`] is the small amount of arithmetic that [`range`] and the
//! numeric reductions ([`sum`], [`min`], [`max`], [`avg`]) need. It is
//! implemented for every primitive integer and floating point type.
//!
//! [`range`]: crate::source::range
//! [`sum`]: crate::consumer::sum
//! [`min`]: crate::consumer::min
//! [`max`]: crate::consumer::max
//! [`avg`]: crate::consumer::avg

use std::fmt::Debug;
use std::ops::{Add, Div, Sub};

/// A primitive number usable as a sequence element in numeric operations.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::number::Number;
///
/// assert_eq!(<i32 as Number>::TWO, 2);
/// assert_eq!(Number::magnitude(-3_i64), 3);
/// assert_eq!(Number::checked_add(u8::MAX, 1), None);
/// assert_eq!(Number::checked_add(1.5_f64, 1.0), Some(2.5));
/// assert_eq!(Number::midpoint(u8::MAX, 253), 254);
/// ```
pub trait Number:
    Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> + Div<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The divisor of the running pairwise average.
    const TWO: Self;

    /// Adds, returning `None` on overflow. Floating point never overflows.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtracts, returning `None` on overflow. Floating point never overflows.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Returns the absolute value, saturating for the minimum signed integer.
    fn magnitude(self) -> Self;

    /// Returns `(self + rhs) / 2` without intermediate overflow.
    ///
    /// Integers round towards zero, matching the truncation of `/`.
    fn midpoint(self, rhs: Self) -> Self;

    /// Returns `true` for a floating point NaN. Integers are never NaN.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_signed_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl Number for $number {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$number>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$number>::checked_sub(self, rhs)
                }

                #[inline]
                fn magnitude(self) -> Self {
                    <$number>::saturating_abs(self)
                }

                #[inline]
                fn midpoint(self, rhs: Self) -> Self {
                    <$number>::midpoint(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl Number for $number {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$number>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$number>::checked_sub(self, rhs)
                }

                #[inline]
                fn magnitude(self) -> Self {
                    self
                }

                #[inline]
                fn midpoint(self, rhs: Self) -> Self {
                    <$number>::midpoint(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl Number for $number {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn magnitude(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn midpoint(self, rhs: Self) -> Self {
                    <$number>::midpoint(self, rhs)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$number>::is_nan(self)
                }
            }
        )*
    };
}

impl_signed_number!(i8, i16, i32, i64, i128, isize);
impl_unsigned_number!(u8, u16, u32, u64, u128, usize);
impl_float_number!(f32, f64);
