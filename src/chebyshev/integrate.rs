//! # Indefinite integration
//!
//! In coefficient space, with `∫T_0 = T_1`, `∫T_1 = T_2/4` and
//!
//! `∫T_k = T_(k+1)/(2(k+1)) - T_(k-1)/(2(k-1))`, `k >= 2`,
//!
//! the constant term is chosen such that the integral vanishes at the
//! left end of the interval. Value space operators conjugate the
//! coefficient operator with the transform matrices.
use super::{amat, angles, half_length, smat, Kind};
use crate::error::{check_size, Result};
use crate::operator::Apply;
use crate::types::{cast, two, FloatNum};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayViewMut1, Data, Ix1, Zip};

/// Integrate coefficients `c` into `b`, where `b` has `c.len()` entries
/// (highest term truncated) or `c.len() + 1` entries (exact).
/// `b(-1) = 0` for the coefficients that are kept.
fn integrate_lane<T: FloatNum>(c: &ArrayView1<T>, b: &mut ArrayViewMut1<T>) {
    let (n, rows) = (c.len(), b.len());
    let half = T::one() / two();
    let mut constant = T::zero();
    for k in 1..rows {
        let kk: T = cast(k);
        let mut v = if k == 1 {
            c[0]
        } else if k - 1 < n {
            c[k - 1] * half / kk
        } else {
            T::zero()
        };
        if k + 1 < n {
            v -= c[k + 1] * half / kk;
        }
        b[k] = v;
        // T_k(-1) = (-1)^k
        if k % 2 == 1 {
            constant += v;
        } else {
            constant -= v;
        }
    }
    b[0] = constant;
}

/// Unscaled integration matrix of shape `rows x n`
fn integral_matrix<T: FloatNum>(n: usize, rows: usize) -> Array2<T> {
    let eye = Array2::<T>::eye(n);
    let mut b = Array2::zeros((rows, n));
    Zip::from(b.columns_mut())
        .and(eye.columns())
        .for_each(|mut out, col| integrate_lane(&col, &mut out));
    b
}

/// Indefinite integration matrix in coefficient space, `n x n`.
///
/// The coefficient of `T_n` is truncated, the constant term makes
/// the (truncated) integral vanish at the left end. Scaled by
/// `(x_max - x_min)/2`.
///
/// # Errors
/// `n < 1` or an invalid interval
pub fn coeffs_cumsummat<T: FloatNum>(n: usize, interval: Option<(T, T)>) -> Result<Array2<T>> {
    check_size("coeffs_cumsummat", n, 1)?;
    let scale = half_length(interval)?;
    let mut b = integral_matrix::<T>(n, n);
    b.mapv_inplace(|v| v * scale);
    Ok(b)
}

/// Indefinite integration matrix in value space, `n x n`.
///
/// Maps values at the Chebyshev points to values of the integral of
/// their interpolant, normalized to vanish at the first node. The
/// first row is exactly zero, and for functions vanishing at the
/// first node it inverts [`super::diffmat`] of order one.
///
/// # Errors
/// `n < 1` or an invalid interval
///
/// # Example
///```
/// use pdesuite::chebyshev::{cumsummat, pts, Kind};
/// let x = pts::<f64>(Kind::Second, 6, None).unwrap();
/// let q = cumsummat::<f64>(Kind::Second, 6, None).unwrap();
/// // ∫_{-1}^x 2t dt = x^2 - 1
/// let y = q.dot(&x.mapv(|x| 2. * x));
/// for (a, b) in y.iter().zip(x.iter()) {
///     assert!((a - (b * b - 1.)).abs() < 1e-13);
/// }
///```
pub fn cumsummat<T: FloatNum>(kind: Kind, n: usize, interval: Option<(T, T)>) -> Result<Array2<T>> {
    let b = coeffs_cumsummat(n, interval)?;
    let q = smat::<T>(kind, n)?.dot(&b).dot(&amat::<T>(kind, n)?);
    let first = q.row(0).to_owned();
    Ok(Array2::from_shape_fn((n, n), |(i, j)| q[[i, j]] - first[j]))
}

/// Definite integration matrix on the 2nd kind grid, `n x n`.
///
/// Row `i` integrates the interpolant from `x_min` to the `i`-th point.
/// The `T_n` term of the integral is kept, so the result is exact for
/// every polynomial of degree `< n`. The last row holds quadrature
/// weights of the whole interval.
///
/// # Errors
/// `n < 1` or an invalid interval
pub fn rectint<T: FloatNum>(n: usize, interval: Option<(T, T)>) -> Result<Array2<T>> {
    check_size("rectint", n, 1)?;
    let scale = half_length(interval)?;
    let theta = angles::<T>(Kind::Second, n)?;
    let s = Array2::from_shape_fn((n, n + 1), |(i, k)| (cast::<T, _>(k) * theta[i]).cos());
    let b = integral_matrix::<T>(n, n + 1);
    let mut r = s.dot(&b).dot(&amat::<T>(Kind::Second, n)?);
    r.mapv_inplace(|v| v * scale);
    if n > 1 {
        r.row_mut(0).fill(T::zero());
    }
    Ok(r)
}

/// Indefinite integral of a Chebyshev series.
///
/// `n` coefficients are mapped to the `n + 1` coefficients of the
/// integral, which vanishes at the left end of the interval.
/// Application is O(n).
#[derive(Debug, Clone)]
pub struct Cumsum<T> {
    n: usize,
    scale: T,
}

impl<T: FloatNum> Cumsum<T> {
    /// Integration of series with `n` coefficients
    ///
    /// # Errors
    /// `n < 1` or an invalid interval
    pub fn new(n: usize, interval: Option<(T, T)>) -> Result<Self> {
        check_size("Cumsum", n, 1)?;
        let scale = half_length(interval)?;
        log::debug!("Cumsum: n = {}, scale = {}", n, scale);
        Ok(Self { n, scale })
    }
}

impl<T: FloatNum> Apply<T> for Cumsum<T> {
    fn len_in(&self) -> usize {
        self.n
    }

    fn len_out(&self) -> usize {
        self.n + 1
    }

    fn apply_lane(&self, input: &ArrayView1<T>, output: &mut ArrayViewMut1<T>) {
        integrate_lane(input, output);
        let scale = self.scale;
        output.mapv_inplace(|v| v * scale);
    }
}

/// Coefficients of the indefinite integral of a Chebyshev series,
/// see [`Cumsum`].
///
/// # Errors
/// Empty coefficients or an invalid interval
///
/// # Example
///```
/// use pdesuite::chebyshev::cumsum;
/// use ndarray::array;
/// // ∫_{-1}^x 1 dt = 1 + x
/// let b = cumsum(&array![1.], None).unwrap();
/// assert_eq!(b, array![1., 1.]);
///```
pub fn cumsum<T, S>(c: &ArrayBase<S, Ix1>, interval: Option<(T, T)>) -> Result<Array1<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    Cumsum::new(c.len(), interval)?.apply(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chebyshev::{diffmat, feval, pts, quadwts};
    use ndarray::array;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn approx_eq(result: &Array1<f64>, expected: &Array1<f64>, dif: f64) {
        assert_eq!(result.len(), expected.len());
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_coeffs_cumsummat() {
        // ∫_{-1}^x T_1 = (T_0 + T_2)/4 - 1/2
        let b = coeffs_cumsummat::<f64>(4, None).unwrap();
        approx_eq(&b.dot(&array![0., 1., 0., 0.]), &array![-0.25, 0., 0.25, 0.], 1e-15);
        // ∫_{-1}^x T_0 = T_0 + T_1
        approx_eq(&b.dot(&array![1., 0., 0., 0.]), &array![1., 1., 0., 0.], 1e-15);
        let b = coeffs_cumsummat::<f64>(1, None).unwrap();
        assert_eq!(b[[0, 0]], 0.);
    }

    #[test]
    fn test_cumsummat_first_row_zero() {
        for kind in [Kind::First, Kind::Second].iter() {
            for n in 1..10 {
                let q = cumsummat::<f64>(*kind, n, None).unwrap();
                assert!(q.row(0).iter().all(|v| *v == 0.));
            }
        }
    }

    #[test]
    fn test_cumsummat_inverts_diffmat() {
        let n = 8;
        for kind in [Kind::First, Kind::Second].iter() {
            let x = pts::<f64>(*kind, n, None).unwrap();
            let x0 = x[0];
            let f = x.mapv(|x| (x - x0) * (x * x + 1.));
            let q = cumsummat::<f64>(*kind, n, None).unwrap();
            let d = diffmat::<f64>(*kind, n, 1, None).unwrap();
            approx_eq(&q.dot(&d).dot(&f), &f, 1e-11);
        }
    }

    #[test]
    fn test_cumsummat_mapped() {
        let interval = Some((1., 3.));
        let x = pts::<f64>(Kind::First, 5, interval).unwrap();
        let q = cumsummat::<f64>(Kind::First, 5, interval).unwrap();
        let x0 = x[0];
        approx_eq(&q.dot(&Array1::ones(5)), &x.mapv(|x| x - x0), 1e-13);
    }

    #[test]
    fn test_rectint_exact() {
        let n = 5;
        let x = pts::<f64>(Kind::Second, n, None).unwrap();
        let r = rectint::<f64>(n, None).unwrap();
        let y = r.dot(&x.mapv(|x| x.powi(4)));
        approx_eq(&y, &x.mapv(|x| (x.powi(5) + 1.) / 5.), 1e-14);
        let w = quadwts::<f64>(Kind::Second, n, None).unwrap();
        approx_eq(&r.row(n - 1).to_owned(), &w, 1e-14);
    }

    #[test]
    fn test_rectint_single_point() {
        let r = rectint::<f64>(1, Some((0., 4.))).unwrap();
        assert!((r[[0, 0]] - 2.).abs() < 1e-14);
    }

    #[test]
    fn test_cumsum() {
        let b = cumsum(&array![1.], Some((0., 4.))).unwrap();
        approx_eq(&b, &array![2., 2.], 1e-15);
        let c = Array1::<f64>::random(7, Uniform::new(-1., 1.));
        let b = cumsum(&c, None).unwrap();
        assert_eq!(b.len(), 8);
        assert!(feval(&b, -1.).unwrap().abs() < 1e-14);
    }

    #[test]
    fn test_cumsum_operator_axis() {
        let data = Array2::<f64>::random((6, 3), Uniform::new(-1., 1.));
        let op = Cumsum::new(6, None).unwrap();
        let out = op.apply_axis(&data, 0).unwrap();
        assert_eq!(out.shape(), &[7, 3]);
        for j in 0..3 {
            approx_eq(&out.column(j).to_owned(), &cumsum(&data.column(j), None).unwrap(), 1e-15);
        }
        assert!(Cumsum::<f64>::new(0, None).is_err());
    }
}
