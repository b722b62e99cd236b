//! Evaluation of Chebyshev series with Clenshaw's algorithm
use crate::error::{check_size, Error, Result};
use crate::types::{two, FloatNum};
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Evaluate `Σ c_k T_k(x)` by the three-term backward recurrence
///
/// `b_k = c_k + 2x b_(k+1) - b_(k+2)`, `p(x) = c_0 + x b_1 - b_2`.
///
/// No range check on `x`, an empty series evaluates to zero.
pub fn clenshaw<T, S>(c: &ArrayBase<S, Ix1>, x: T) -> T
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = c.len();
    if n == 0 {
        return T::zero();
    }
    let two_x = two::<T>() * x;
    let (mut b1, mut b2) = (T::zero(), T::zero());
    for k in (1..n).rev() {
        let b0 = c[k] + two_x * b1 - b2;
        b2 = b1;
        b1 = b0;
    }
    c[0] + x * b1 - b2
}

/// Evaluate a Chebyshev series at `x` in \[-1, 1\].
///
/// # Errors
/// Empty coefficients or `x` outside of \[-1, 1\]
///
/// # Example
///```
/// use pdesuite::chebyshev::feval;
/// use ndarray::array;
/// // T_2(x) = 2x^2 - 1
/// let y = feval(&array![0f64, 0., 1.], 0.5).unwrap();
/// assert!((y + 0.5).abs() < 1e-15);
///```
pub fn feval<T, S>(c: &ArrayBase<S, Ix1>, x: T) -> Result<T>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    check_size("feval", c.len(), 1)?;
    if !(-T::one()..=T::one()).contains(&x) {
        return Err(Error::invalid_parameter(
            "x",
            format!("evaluation point {} outside of [-1, 1]", x),
        ));
    }
    Ok(clenshaw(c, x))
}

/// Evaluate a Chebyshev series at many points, one Clenshaw
/// recurrence per point (O(n m)).
///
/// # Errors
/// Empty coefficients or any point outside of \[-1, 1\]
pub fn feval_many<T, S1, S2>(c: &ArrayBase<S1, Ix1>, xs: &ArrayBase<S2, Ix1>) -> Result<Array1<T>>
where
    T: FloatNum,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    xs.iter()
        .map(|&x| feval(c, x))
        .collect::<Result<Vec<T>>>()
        .map(Array1::from_vec)
}
