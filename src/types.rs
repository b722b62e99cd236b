//! Types and traits for real numbers
use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Float, FloatConst, FromPrimitive, NumCast, ToPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Floating point type, used throughout this crate for operator construction.
///
/// Implemented for `f32` and `f64`. Transform operators that use fast
/// cosine transforms additionally require [`ndrustfft::FftNum`].
pub trait FloatNum:
    Float
    + FloatConst
    + FromPrimitive
    + LinalgScalar
    + ScalarOperand
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl<T> FloatNum for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + LinalgScalar
        + ScalarOperand
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Sum
        + Debug
        + Display
        + Send
        + Sync
        + 'static
{
}

/// Cast a primitive number (index, `f64` constant) into the working precision.
///
/// Any finite primitive is representable in `f32`/`f64`, the `NaN` fallback
/// only triggers for exotic `T`.
#[inline]
pub(crate) fn cast<T: FloatNum, U: ToPrimitive>(x: U) -> T {
    <T as NumCast>::from(x).unwrap_or_else(T::nan)
}

/// Shorthand for `2`
#[inline]
pub(crate) fn two<T: FloatNum>() -> T {
    T::one() + T::one()
}
