//! # Ultraspherical spectral method
//!
//! Sparse operators acting on coefficients in the ultraspherical bases
//! `C^(λ)`, where `λ = 0` denotes the Chebyshev polynomials `T_k` and
//! `λ = 1` the Chebyshev polynomials of the second kind `U_k`.
//!
//! Differentiation maps `T` coefficients to `C^(m)` coefficients of the
//! `m`-th derivative, conversion raises the index of the basis by one,
//! and multiplication by a smooth function is represented in the
//! basis of the result. All operators are banded with bandwidths that
//! do not depend on the size `n`, and are returned as [`BandedMatrix`].
//!
//! # Example
//! Operator of `u'' + x u` in `C^(2)` coefficients
//! ```
//! use pdesuite::ultraspherical::{convertmat, diffmat, multmat_sized};
//! use ndarray::array;
//! let n = 16;
//! let d2 = diffmat::<f64>(n, 2).unwrap();
//! let s = convertmat::<f64>(n, 0, 2).unwrap();
//! let x = multmat_sized::<f64, _>(n, &array![0., 1.], 2).unwrap();
//! let op = d2.add(&x.matmul(&s).unwrap()).unwrap();
//! assert_eq!(op.shape(), (n, n));
//! assert_eq!(op.upper_bandwidth(), 5);
//! ```
//!
//! # Reference
//! S. Olver and A. Townsend, A fast and well-conditioned spectral method,
//! SIAM Review 55 (2013).
use crate::banded::BandedMatrix;
use crate::error::{check_size, Error, Result};
use crate::types::{cast, two, FloatNum};
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Index of the last nonzero entry, 0 for all zero
fn last_nonzero<T: FloatNum, S: Data<Elem = T>>(v: &ArrayBase<S, Ix1>) -> usize {
    v.iter().rposition(|x| *x != T::zero()).unwrap_or(0)
}

/// Conversion `C^(λ) -> C^(λ+1)`, `n x n`, bands at offset 0 and +2.
///
/// - `λ = 0`: `T_0 = U_0`, `T_k = (U_k - U_(k-2))/2`
/// - `λ > 0`: `C^(λ)_k = λ/(λ+k) (C^(λ+1)_k - C^(λ+1)_(k-2))`
///
/// # Errors
/// `n < 1`
pub fn spconvert<T: FloatNum>(n: usize, lambda: usize) -> Result<BandedMatrix<T>> {
    check_size("spconvert", n, 1)?;
    let half = T::one() / two();
    let lam: T = cast(lambda);
    let coef = |k: usize| {
        if lambda == 0 {
            if k == 0 {
                T::one()
            } else {
                half
            }
        } else {
            lam / (lam + cast(k))
        }
    };
    let diag = Array1::from_shape_fn(n, coef);
    let upper = Array1::from_shape_fn(n.saturating_sub(2), |p| -coef(p + 2));
    Ok(BandedMatrix::from_diags(n, &[(0, diag), (2, upper)]))
}

/// Conversion from `C^(k1)` to `C^(k2)` coefficients, `n x n`.
///
/// Product of the single steps of [`spconvert`] for `λ = k1, ..., k2-1`,
/// upper triangular with `2 (k2 - k1)` superdiagonals. The identity
/// for `k1 == k2`.
///
/// # Errors
/// `n < 1` or `k1 > k2`
pub fn convertmat<T: FloatNum>(n: usize, k1: usize, k2: usize) -> Result<BandedMatrix<T>> {
    check_size("convertmat", n, 1)?;
    if k1 > k2 {
        return Err(Error::invalid_parameter(
            "k1",
            format!("conversion lowers the basis index ({} > {})", k1, k2),
        ));
    }
    let mut mat = BandedMatrix::eye(n);
    for lambda in k1..k2 {
        mat = spconvert(n, lambda)?.matmul(&mat)?;
    }
    Ok(mat)
}

/// Differentiation of order `m` from `T` coefficients to `C^(m)` coefficients.
///
/// `d^m/dx^m T_k = 2^(m-1) (m-1)! k C^(m)_(k-m)`, a single band at offset `m`.
/// `m = 0` is the identity.
///
/// # Errors
/// `n < 1`
pub fn diffmat<T: FloatNum>(n: usize, m: usize) -> Result<BandedMatrix<T>> {
    check_size("ultraspherical diffmat", n, 1)?;
    if m == 0 {
        return Ok(BandedMatrix::eye(n));
    }
    // 2^(m-1) (m-1)!
    let mut factor = T::one();
    for j in 1..m {
        factor = factor * two() * cast(j);
    }
    let values = Array1::from_shape_fn(n.saturating_sub(m), |p| factor * cast(p + m));
    Ok(BandedMatrix::from_diags(n, &[(m as isize, values)]))
}

/// Banded Toeplitz matrix `M[i, j] = col[i - j]` (`i >= j`),
/// `row[j - i]` (`j > i`). The shape is `col.len() x row.len()`,
/// `row[0]` is ignored.
///
/// # Errors
/// Empty `col` or `row`
pub fn sptoeplitz<T, S1, S2>(col: &ArrayBase<S1, Ix1>, row: &ArrayBase<S2, Ix1>) -> Result<BandedMatrix<T>>
where
    T: FloatNum,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let (nrows, ncols) = (col.len(), row.len());
    check_size("sptoeplitz", nrows, 1)?;
    check_size("sptoeplitz", ncols, 1)?;
    let kl = last_nonzero(col);
    let ku = last_nonzero(row);
    let mut mat = BandedMatrix::zeros(nrows, ncols, kl, ku);
    for i in 0..nrows {
        for j in i.saturating_sub(kl)..(i + ku + 1).min(ncols) {
            let v = if i >= j { col[i - j] } else { row[j - i] };
            mat.set(i, j, v);
        }
    }
    Ok(mat)
}

/// Hankel matrix `H[i, j] = r[i + j]` for `i + j < len(r)`, zero below
/// the anti-diagonal. The shape is `len(r) x len(r)`.
///
/// With `b` the last nonzero index of `r`, the leading `(b+1) x (b+1)`
/// block is the lower triangular Toeplitz matrix of `r[b], ..., r[0]`
/// with its rows flipped. The band extends `b` on both sides.
///
/// # Errors
/// Empty `r`
///
/// # Example
///```
/// use pdesuite::ultraspherical::sphankel;
/// use ndarray::array;
/// let h = sphankel(&array![1., 2., 3.]).unwrap();
/// assert_eq!(h.to_dense(), array![[1., 2., 3.], [2., 3., 0.], [3., 0., 0.]]);
///```
pub fn sphankel<T, S>(r: &ArrayBase<S, Ix1>) -> Result<BandedMatrix<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = r.len();
    check_size("sphankel", n, 1)?;
    let b = last_nonzero(r);
    let col = Array1::from_shape_fn(b + 1, |k| r[b - k]);
    let mut row = Array1::zeros(b + 1);
    row[0] = r[b];
    let toeplitz = sptoeplitz(&col, &row)?;
    let mut mat = BandedMatrix::zeros(n, n, b, b);
    for i in 0..=b {
        for j in 0..=(b - i) {
            mat.set(i, j, toeplitz.get(b - i, j));
        }
    }
    Ok(mat)
}

/// Multiplication by `f = Σ a_k T_k` acting on `C^(λ)` coefficients, `n x n`
/// with `n = a.len()`. See [`multmat_sized`].
///
/// # Errors
/// Empty `a`
pub fn multmat<T, S>(a: &ArrayBase<S, Ix1>, lambda: usize) -> Result<BandedMatrix<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    multmat_sized(a.len(), a, lambda)
}

/// Multiplication by `f = Σ a_k T_k` acting on `C^(λ)` coefficients, `n x n`.
///
/// `a` holds Chebyshev (`T`) coefficients and is truncated or zero
/// padded to length `n`. The bandwidth equals the index of the last
/// nonzero coefficient.
///
/// - `λ = 0`: Toeplitz plus Hankel, from `T_m T_k = (T_(m+k) + T_|m-k|)/2`
/// - `λ = 1`: Toeplitz minus Hankel, from `T_m U_k = (U_(m+k) + U_(k-m))/2`
/// - `λ >= 2`: `Σ a^(λ)_k C^(λ)_k(M_x)` by the three-term recurrence of
///   `C^(λ)`, where `M_x` is multiplication by `x` and `a^(λ)` are the
///   coefficients of `f` in `C^(λ)`. Assembled on `2n` coefficients and
///   truncated, so that the leading `n x n` block is exact.
///
/// # Errors
/// `n < 1`
pub fn multmat_sized<T, S>(n: usize, a: &ArrayBase<S, Ix1>, lambda: usize) -> Result<BandedMatrix<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    check_size("multmat", n, 1)?;
    let a = Array1::from_shape_fn(n, |k| if k < a.len() { a[k] } else { T::zero() });
    let half = T::one() / two();
    let mat = match lambda {
        0 | 1 => {
            let t = Array1::from_shape_fn(n, |k| if k == 0 { a[0] } else { a[k] * half });
            let toeplitz = sptoeplitz(&t, &t)?;
            let mut hankel = if lambda == 0 {
                let mut h = sphankel(&a.mapv(|v| v * half))?;
                for j in 0..n {
                    if h.get(0, j) != T::zero() {
                        h.set(0, j, T::zero());
                    }
                }
                h
            } else {
                let r = Array1::from_shape_fn(n, |k| if k + 2 < n { a[k + 2] * half } else { T::zero() });
                sphankel(&r)?
            };
            if lambda == 1 {
                hankel.scale(-T::one());
            }
            toeplitz.add(&hankel)?
        }
        _ => multmat_recurrence(n, &a, lambda)?,
    };
    log::debug!(
        "multmat: n = {}, lambda = {}, bandwidth = {}",
        n,
        lambda,
        mat.upper_bandwidth()
    );
    Ok(mat)
}

/// Multiplication in `C^(λ)`, `λ >= 1`, by the three-term recurrence
///
/// `C_(k+1)(x) = (2(k+λ) x C_k(x) - (k+2λ-1) C_(k-1)(x)) / (k+1)`
fn multmat_recurrence<T: FloatNum>(n: usize, a: &Array1<T>, lambda: usize) -> Result<BandedMatrix<T>> {
    let big = 2 * n;
    let lam: T = cast(lambda);
    let degree = last_nonzero(a);
    let a = convertmat::<T>(n, 0, lambda)?.dot(a)?;

    // x C_k = ((k+1) C_(k+1) + (k+2λ-1) C_(k-1)) / (2(k+λ))
    let lower = Array1::from_shape_fn(big - 1, |k| {
        let k: T = cast(k);
        (k + T::one()) / (two::<T>() * (k + lam))
    });
    let upper = Array1::from_shape_fn(big - 1, |p| {
        let k: T = cast(p + 1);
        (k + two::<T>() * lam - T::one()) / (two::<T>() * (k + lam))
    });
    let mx = BandedMatrix::from_diags(big, &[(-1, lower), (1, upper)]);

    let mut prev = BandedMatrix::eye(big);
    let mut out = prev.clone();
    out.scale(a[0]);
    if degree == 0 {
        return Ok(out.truncate(n, n));
    }
    let mut cur = mx.clone();
    cur.scale(two::<T>() * lam);
    let mut term = cur.clone();
    term.scale(a[1]);
    out = out.add(&term)?;
    for k in 1..degree {
        let kk: T = cast(k);
        let mut next = mx.matmul(&cur)?;
        next.scale(two::<T>() * (kk + lam) / (kk + T::one()));
        prev.scale(-(kk + two::<T>() * lam - T::one()) / (kk + T::one()));
        next = next.add(&prev)?;
        let mut term = next.clone();
        term.scale(a[k + 1]);
        out = out.add(&term)?;
        prev = cur;
        cur = next;
    }
    Ok(out.truncate(n, n))
}
