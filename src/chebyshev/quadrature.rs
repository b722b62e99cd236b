//! Quadrature weights on Chebyshev grids
use super::{amat, half_length, Kind};
use crate::error::Result;
use crate::types::{cast, FloatNum};
use ndarray::Array1;

/// Interpolatory quadrature weights, `∫ f ≈ Σ w_j f(x_j)`.
///
/// Fejér's first rule on the 1st kind grid and Clenshaw-Curtis on
/// the 2nd kind grid. The weights are `Aᵀ m` with the analysis
/// matrix `A` and the moments `m_k = ∫T_k = 2/(1-k²)` (`k` even, zero
/// otherwise), scaled by `(x_max - x_min)/2`.
///
/// # Errors
/// `n < 1` or an invalid interval
///
/// # Example
///```
/// use pdesuite::chebyshev::{pts, quadwts, Kind};
/// let x = pts::<f64>(Kind::Second, 5, None).unwrap();
/// let w = quadwts::<f64>(Kind::Second, 5, None).unwrap();
/// let integral = w.dot(&x.mapv(|x| x * x));
/// assert!((integral - 2. / 3.).abs() < 1e-14);
///```
pub fn quadwts<T: FloatNum>(kind: Kind, n: usize, interval: Option<(T, T)>) -> Result<Array1<T>> {
    let scale = half_length(interval)?;
    let a = amat::<T>(kind, n)?;
    let moments = Array1::from_shape_fn(n, |k| {
        if k % 2 == 0 {
            let k: T = cast(k);
            cast::<T, _>(2) / (T::one() - k * k)
        } else {
            T::zero()
        }
    });
    let mut w = a.t().dot(&moments);
    w.mapv_inplace(|v| v * scale);
    Ok(w)
}
