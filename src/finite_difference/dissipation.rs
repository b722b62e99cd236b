//! Kreiss-Oliger artificial dissipation
use crate::error::{Error, Result};
use crate::types::{cast, two, FloatNum};
use ndarray::Array1;

/// Order `2r` of the dissipation operator that damps a finite difference
/// scheme of accuracy order `2r - 2` without reducing its accuracy.
///
/// The result is the smallest even order strictly above `acc_order`, so
/// an odd accuracy order `2r - 1` also maps to `2r`, i.e. `acc_order + 1`.
pub fn dissipation_order(acc_order: usize) -> usize {
    2 * (acc_order / 2 + 1)
}

/// Stencil weights of Kreiss-Oliger dissipation of even order `2r`,
///
/// `w_k = (-1)^(k+1) C(2r, r+k) / 2^(2r)`, `k = -r, ..., r`,
///
/// i.e. `(-1)^(r+1) (h² D₊D₋)^r / 2^(2r)`. The consumer scales the
/// weights by `σ/h` and adds the term to the right hand side.
///
/// # Errors
/// Odd or zero order
///
/// # Example
///```
/// use pdesuite::finite_difference::dissipation_wts;
/// use ndarray::array;
/// let w = dissipation_wts::<f64>(2).unwrap();
/// assert_eq!(w, array![0.25, -0.5, 0.25]);
///```
pub fn dissipation_wts<T: FloatNum>(diss_order: usize) -> Result<Array1<T>> {
    if diss_order == 0 || diss_order % 2 == 1 {
        return Err(Error::invalid_parameter(
            "diss_order",
            format!("expected positive even order, got {}", diss_order),
        ));
    }
    let r = diss_order / 2;
    let norm = two::<T>().powi(diss_order as i32);
    // C(2r, i), i = 0..2r
    let mut binom = Array1::<T>::zeros(diss_order + 1);
    binom[0] = T::one();
    for i in 1..=diss_order {
        binom[i] = binom[i - 1] * cast(diss_order + 1 - i) / cast(i);
    }
    Ok(Array1::from_shape_fn(diss_order + 1, |i| {
        // k = i - r, sign (-1)^(k+1)
        let sign = if (i + r) % 2 == 0 { -T::one() } else { T::one() };
        sign * binom[i] / norm
    }))
}
