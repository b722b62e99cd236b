//! Uniform finite difference grids
use crate::error::{Error, Result};
use crate::types::FloatNum;
use ndarray::Array1;

/// Uniform grid on \[x_min, x_max\] with `round((x_max - x_min)/dx) + 1`
/// points. Both ends are included, the spacing is adjusted when `dx`
/// does not divide the interval.
///
/// # Errors
/// `dx <= 0`, `x_max <= x_min` or non-finite input
///
/// # Example
///```
/// use pdesuite::finite_difference::fdm_grid;
/// let x = fdm_grid(0., 1., 0.25).unwrap();
/// assert_eq!(x.len(), 5);
/// assert_eq!(x[4], 1.);
///```
pub fn fdm_grid<T: FloatNum>(x_min: T, x_max: T, dx: T) -> Result<Array1<T>> {
    if !(dx > T::zero() && dx.is_finite()) {
        return Err(Error::invalid_parameter(
            "dx",
            format!("expected positive finite spacing, got {}", dx),
        ));
    }
    if !(x_min.is_finite() && x_max.is_finite()) || x_max <= x_min {
        return Err(Error::invalid_parameter(
            "interval",
            format!("expected finite x_min < x_max, got [{}, {}]", x_min, x_max),
        ));
    }
    let n = ((x_max - x_min) / dx)
        .round()
        .to_usize()
        .ok_or_else(|| Error::invalid_parameter("dx", "number of grid points overflows"))?
        + 1;
    log::trace!("fdm_grid: {} points on [{}, {}]", n, x_min, x_max);
    Ok(Array1::linspace(x_min, x_max, n))
}
