//! # Barycentric interpolation and differentiation
//!
//! Closed form barycentric weights for Chebyshev grids, the barycentric
//! interpolation formula, and differentiation matrices of arbitrary
//! order built from nodes and weights.
//!
//! # References
//! J.-P. Berrut and L. N. Trefethen, Barycentric Lagrange interpolation,
//! SIAM Review 46 (2004).
//!
//! R. Baltensperger and M. R. Trummer, Spectral differencing with a twist,
//! SIAM J. Sci. Comput. 24 (2003).
use super::{angles, Kind};
use crate::error::{check_len, check_size, Error, Result};
use crate::types::{cast, two, FloatNum};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};

/// Barycentric weights of the Chebyshev points of [`super::pts`].
///
/// - 1st kind: `w_j = (-1)^(n-1-j) sin θ_j`
/// - 2nd kind: `w_j = (-1)^(n-1-j)`, both end weights halved
///
/// The barycentric formula is invariant under a common scaling of the
/// weights, hence the closed forms drop all constant factors.
///
/// # Errors
/// `n < 1`
pub fn barywts<T: FloatNum>(kind: Kind, n: usize) -> Result<Array1<T>> {
    check_size("barywts", n, 1)?;
    if n == 1 {
        return Ok(Array1::ones(1));
    }
    let mut w = match kind {
        Kind::First => angles::<T>(kind, n)?.mapv(T::sin),
        Kind::Second => {
            let half = T::one() / two();
            let mut w = Array1::<T>::ones(n);
            w[0] = half;
            w[n - 1] = half;
            w
        }
    };
    for (j, v) in w.iter_mut().enumerate() {
        if (n - 1 - j) % 2 == 1 {
            *v = -*v;
        }
    }
    Ok(w)
}

/// Barycentric weights `w_j = 1 / prod_{k != j} (x_j - x_k)` of arbitrary
/// distinct nodes, normalized to a maximum magnitude of one.
///
/// The products are accumulated as sums of logarithms, so large node sets
/// neither overflow nor underflow.
///
/// # Errors
/// Empty or repeated nodes
pub fn generic_barywts<T, S>(x: &ArrayBase<S, Ix1>) -> Result<Array1<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = x.len();
    check_size("generic_barywts", n, 1)?;
    let mut log_mag = Array1::<T>::zeros(n);
    let mut sign = Array1::<T>::ones(n);
    for j in 0..n {
        for k in 0..n {
            if k == j {
                continue;
            }
            let d = x[j] - x[k];
            if d == T::zero() {
                return Err(Error::invalid_parameter(
                    "x",
                    format!("nodes {} and {} coincide", j, k),
                ));
            }
            log_mag[j] += d.abs().ln();
            if d < T::zero() {
                sign[j] = -sign[j];
            }
        }
    }
    let min = log_mag.iter().fold(T::infinity(), |acc, &v| acc.min(v));
    Ok(Array1::from_shape_fn(n, |j| sign[j] * (min - log_mag[j]).exp()))
}

/// Index of the node nearest to `y` and its distance
fn nearest_node<T, S>(x: &ArrayBase<S, Ix1>, y: T) -> (usize, T)
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    x.iter()
        .map(|xj| (*xj - y).abs())
        .enumerate()
        .fold((0, T::infinity()), |acc, (j, d)| if d < acc.1 { (j, d) } else { acc })
}

/// Index of the node nearest to `y`, if it lies within a few ulps of the
/// grid scale `max |x_j|`
fn coincident_node<T, S>(x: &ArrayBase<S, Ix1>, y: T) -> Option<usize>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let scale = x.iter().fold(y.abs(), |acc, xj| acc.max(xj.abs()));
    let tol = T::epsilon() * scale * cast(x.len());
    let (p, dist) = nearest_node(x, y);
    if dist <= tol {
        Some(p)
    } else {
        None
    }
}

/// Evaluate the polynomial interpolant of `(x_j, f_j)` at `x0` with the
/// barycentric formula
///
/// `p(x0) = Σ (w_j f_j)/(x0-x_j) / Σ w_j/(x0-x_j)`
///
/// If `x0` coincides with a node up to rounding relative to the grid
/// scale, or the sums overflow, `f_j` of the nearest node is returned.
///
/// # Errors
/// Empty input or `w`, `x`, `f` of different lengths
///
/// # Example
///```
/// use pdesuite::chebyshev::{bary, barywts, pts, Kind};
/// let x = pts::<f64>(Kind::Second, 9, None).unwrap();
/// let w = barywts::<f64>(Kind::Second, 9).unwrap();
/// let f = x.mapv(|x| x.powi(3));
/// let p = bary(&w, &x, &f, 0.3).unwrap();
/// assert!((p - 0.027).abs() < 1e-13);
///```
pub fn bary<T, S1, S2, S3>(
    w: &ArrayBase<S1, Ix1>,
    x: &ArrayBase<S2, Ix1>,
    f: &ArrayBase<S3, Ix1>,
    x0: T,
) -> Result<T>
where
    T: FloatNum,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    S3: Data<Elem = T>,
{
    check_size("bary", x.len(), 1)?;
    check_len(x.len(), w.len())?;
    check_len(x.len(), f.len())?;
    if let Some(p) = coincident_node(x, x0) {
        return Ok(f[p]);
    }
    let mut num = T::zero();
    let mut den = T::zero();
    for ((wj, xj), fj) in w.iter().zip(x.iter()).zip(f.iter()) {
        let c = *wj / (x0 - *xj);
        num += c * *fj;
        den += c;
    }
    let value = num / den;
    if value.is_finite() {
        return Ok(value);
    }
    Ok(f[nearest_node(x, x0).0])
}

/// Pairwise differences `x_i - x_j` (zero diagonal).
///
/// With polar angles `t` (`x = cos t`) the differences are formed by
/// `-2 sin((t_i+t_j)/2) sin((t_i-t_j)/2)`, which avoids cancellation
/// near the endpoints.
fn differences<T, S>(x: &ArrayBase<S, Ix1>, t: Option<&Array1<T>>) -> Array2<T>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = x.len();
    match t {
        Some(t) => Array2::from_shape_fn((n, n), |(i, j)| {
            -two::<T>() * ((t[i] + t[j]) / two()).sin() * ((t[i] - t[j]) / two()).sin()
        }),
        None => Array2::from_shape_fn((n, n), |(i, j)| x[i] - x[j]),
    }
}

/// Replace diagonal by the negative sum of the off-diagonal entries of each row
fn negative_sum_trick<T: FloatNum>(d: &mut Array2<T>) {
    for i in 0..d.nrows() {
        d[[i, i]] = T::zero();
        let sum = d.row(i).sum();
        d[[i, i]] = -sum;
    }
}

/// Barycentric differentiation matrix of order `k` on nodes `x`.
///
/// Maps values at `x` to values of the `k`-th derivative of the
/// interpolating polynomial at `x`. Off-diagonal entries follow the
/// recursion
///
/// `D^(k)_ij = k/(x_i-x_j) (w_j/w_i D^(k-1)_ii - D^(k-1)_ij)`,
///
/// the diagonal is the negative row sum, so constants are annihilated exactly.
///
/// # Arguments
/// * `x` - Nodes
/// * `w` - Barycentric weights, generic weights of `x` if `None`
/// * `k` - Order of derivative, `0` returns the identity
/// * `t` - Polar angles of the nodes (`x = cos t`), optional
///
/// # Errors
/// Empty nodes or `w`, `t` do not match the length of `x`
pub fn bary_diffmat<T, S>(
    x: &ArrayBase<S, Ix1>,
    w: Option<&Array1<T>>,
    k: usize,
    t: Option<&Array1<T>>,
) -> Result<Array2<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = x.len();
    check_size("bary_diffmat", n, 1)?;
    if let Some(w) = w {
        check_len(n, w.len())?;
    }
    if let Some(t) = t {
        check_len(n, t.len())?;
    }
    if k == 0 {
        return Ok(Array2::eye(n));
    }
    if n == 1 {
        return Ok(Array2::zeros((1, 1)));
    }
    let w = match w {
        Some(w) => w.to_owned(),
        None => generic_barywts(x)?,
    };

    // Reciprocal differences and weight ratios, both with zero diagonal
    let dx = differences(x, t);
    let dxi = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            T::zero()
        } else {
            T::one() / dx[[i, j]]
        }
    });
    let dw = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            T::zero()
        } else {
            w[j] / w[i]
        }
    });

    // First derivative
    let mut d = &dw * &dxi;
    negative_sum_trick(&mut d);

    // Higher derivatives
    for order in 2..=k {
        let ord: T = cast(order);
        let dd = d.diag().to_owned();
        d = Array2::from_shape_fn((n, n), |(i, j)| {
            ord * dxi[[i, j]] * (dw[[i, j]] * dd[i] - d[[i, j]])
        });
        negative_sum_trick(&mut d);
    }
    Ok(d)
}

/// Rectangular first order differentiation matrix of size `m x n`.
///
/// Maps values at the nodes `x` (length `n`) to the derivative of the
/// interpolating polynomial at the points `y` (length `m`), i.e.
/// `D_ij = ℓ_j'(y_i)` with the Lagrange basis `ℓ_j` of `x`.
/// Rows of output points that coincide with a node, up to rounding
/// relative to the grid scale, equal the corresponding row of the
/// square [`bary_diffmat`].
///
/// # Errors
/// Empty nodes/points or `w` does not match the length of `x`
pub fn bary_rectdiff<T, S1, S2, S3>(
    x: &ArrayBase<S1, Ix1>,
    w: &ArrayBase<S2, Ix1>,
    y: &ArrayBase<S3, Ix1>,
) -> Result<Array2<T>>
where
    T: FloatNum,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    S3: Data<Elem = T>,
{
    let (n, m) = (x.len(), y.len());
    check_size("bary_rectdiff", n, 1)?;
    check_size("bary_rectdiff", m, 1)?;
    check_len(n, w.len())?;
    let mut d = Array2::<T>::zeros((m, n));
    if n == 1 {
        return Ok(d);
    }
    for (i, yi) in y.iter().enumerate() {
        match coincident_node(x, *yi) {
            Some(p) => {
                let mut sum = T::zero();
                for j in (0..n).filter(|&j| j != p) {
                    let v = w[j] / w[p] / (x[p] - x[j]);
                    d[[i, j]] = v;
                    sum += v;
                }
                d[[i, p]] = -sum;
            }
            None => {
                let c = Array1::from_shape_fn(n, |j| w[j] / (*yi - x[j]));
                let s = c.sum();
                let s2 = c
                    .iter()
                    .zip(x.iter())
                    .map(|(cj, xj)| *cj / (*yi - *xj))
                    .sum::<T>();
                for j in 0..n {
                    d[[i, j]] = c[j] / s * (s2 / s - T::one() / (*yi - x[j]));
                }
            }
        }
    }
    Ok(d)
}
