//! Collocation differentiation matrices on Chebyshev grids
use super::{angles, bary_diffmat, bary_rectdiff, barywts, half_length, pts, Kind};
use crate::error::Result;
use crate::types::FloatNum;
use ndarray::Array2;

/// Differentiation matrix of order `k` on `n` Chebyshev points.
///
/// Maps values at [`pts`]`(kind, n, interval)` to values of the `k`-th
/// derivative of their interpolant at the same points. Built by
/// [`bary_diffmat`] with the closed form weights and the polar angles
/// of the grid, then scaled by `(2/(x_max-x_min))^k`.
///
/// # Errors
/// `n < 1` or an invalid interval
///
/// # Example
///```
/// use pdesuite::chebyshev::{diffmat, pts, Kind};
/// let x = pts::<f64>(Kind::First, 8, None).unwrap();
/// let d = diffmat::<f64>(Kind::First, 8, 1, None).unwrap();
/// let dy = d.dot(&x.mapv(|x| x.powi(3)));
/// for (a, b) in dy.iter().zip(x.iter()) {
///     assert!((a - 3. * b * b).abs() < 1e-10);
/// }
///```
pub fn diffmat<T: FloatNum>(
    kind: Kind,
    n: usize,
    k: usize,
    interval: Option<(T, T)>,
) -> Result<Array2<T>> {
    let scale = half_length(interval)?;
    let x = pts::<T>(kind, n, None)?;
    let w = barywts::<T>(kind, n)?;
    let t = angles::<T>(kind, n)?;
    let mut d = bary_diffmat(&x, Some(&w), k, Some(&t))?;
    if k > 0 {
        d.mapv_inplace(|v| v / scale.powi(k as i32));
    }
    Ok(d)
}

/// Rectangular first derivative from `n` points of a grid of `kind`
/// to `m` points of the 1st kind.
fn rectdiff<T: FloatNum>(
    kind: Kind,
    m: usize,
    n: usize,
    interval: Option<(T, T)>,
) -> Result<Array2<T>> {
    let scale = half_length(interval)?;
    let x = pts::<T>(kind, n, None)?;
    let w = barywts::<T>(kind, n)?;
    let y = pts::<T>(Kind::First, m, None)?;
    let mut d = bary_rectdiff(&x, &w, &y)?;
    d.mapv_inplace(|v| v / scale);
    Ok(d)
}

/// Rectangular `m x n` first order differentiation matrix from an
/// `n`-point 1st kind grid to an `m`-point 1st kind grid.
///
/// Typically `m < n`, e.g. to evaluate a derivative on a coarser grid
/// in rectangular collocation.
///
/// # Errors
/// `m < 1`, `n < 1` or an invalid interval
pub fn rectdiff1<T: FloatNum>(m: usize, n: usize, interval: Option<(T, T)>) -> Result<Array2<T>> {
    rectdiff(Kind::First, m, n, interval)
}

/// Rectangular `m x n` first order differentiation matrix from an
/// `n`-point 2nd kind grid to an `m`-point 1st kind grid.
///
/// # Errors
/// `m < 1`, `n < 1` or an invalid interval
pub fn rectdiff2<T: FloatNum>(m: usize, n: usize, interval: Option<(T, T)>) -> Result<Array2<T>> {
    rectdiff(Kind::Second, m, n, interval)
}
