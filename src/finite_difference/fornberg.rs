//! Finite difference weights by Fornberg's recursion
use crate::error::{Error, Result};
use crate::types::{cast, two, FloatNum};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};

/// Check stencil size and distinct nodes
fn check_stencil<T, S>(order: usize, min: usize, x: &ArrayBase<S, Ix1>) -> Result<()>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    if x.len() < min {
        return Err(Error::InsufficientNodes {
            order,
            min,
            got: x.len(),
        });
    }
    for i in 0..x.len() {
        for j in 0..i {
            if x[i] == x[j] {
                return Err(Error::invalid_parameter(
                    "x",
                    format!("stencil nodes {} and {} coincide", j, i),
                ));
            }
        }
    }
    Ok(())
}

/// Subtract the sum of all weights from the central weight, such that
/// derivatives of constants vanish exactly
fn sum_correction<T: FloatNum>(w: &mut Array1<T>) {
    let sum = w.sum();
    let mid = w.len() / 2;
    w[mid] -= sum;
}

/// Finite difference weights `w` with `f^(order)(x0) ≈ Σ w_j f(x_j)`.
///
/// Fornberg's recursion: the weights of all derivatives up to `order`
/// are updated node by node in a running `N x (order+1)` table, which
/// is better conditioned than solving the Vandermonde system. For
/// `order > 0` the sum of the weights is subtracted from the central
/// weight.
///
/// # Arguments
/// * `order` - Order of the derivative
/// * `x0` - Point of approximation, need not be a node
/// * `x` - Stencil nodes, distinct, in any order
///
/// # Errors
/// `InsufficientNodes` if `x.len() <= order`, `InvalidParameter` for
/// coinciding nodes
///
/// # Example
///```
/// use pdesuite::finite_difference::fornberg_calculate_wts;
/// use ndarray::array;
/// let w = fornberg_calculate_wts(1, 0., &array![-1f64, 0., 1.]).unwrap();
/// assert!((w[0] + 0.5).abs() < 1e-15);
/// assert!(w[1].abs() < 1e-15);
/// assert!((w[2] - 0.5).abs() < 1e-15);
///```
pub fn fornberg_calculate_wts<T, S>(order: usize, x0: T, x: &ArrayBase<S, Ix1>) -> Result<Array1<T>>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = x.len();
    check_stencil(order, order + 1, x)?;
    log::trace!("fornberg: order {}, {} nodes, x0 = {}", order, n, x0);

    let mut c = Array2::<T>::zeros((n, order + 1));
    c[[0, 0]] = T::one();
    let mut c1 = T::one();
    let mut c4 = x[0] - x0;
    for i in 1..n {
        let mn = i.min(order);
        let mut c2 = T::one();
        let c5 = c4;
        c4 = x[i] - x0;
        for j in 0..i {
            let c3 = x[i] - x[j];
            c2 *= c3;
            if j == i - 1 {
                for s in (1..=mn).rev() {
                    let ss: T = cast(s);
                    c[[i, s]] = c1 * (ss * c[[i - 1, s - 1]] - c5 * c[[i - 1, s]]) / c2;
                }
                c[[i, 0]] = -c1 * c5 * c[[i - 1, 0]] / c2;
            }
            for s in (1..=mn).rev() {
                let ss: T = cast(s);
                c[[j, s]] = (c4 * c[[j, s]] - ss * c[[j, s - 1]]) / c3;
            }
            c[[j, 0]] = c4 * c[[j, 0]] / c3;
        }
        c1 = c2;
    }
    let mut w = c.column(order).to_owned();
    if order > 0 {
        sum_correction(&mut w);
    }
    Ok(w)
}

/// Product of two polynomials in `t`, truncated after degree `deg`
fn mul_truncated<T: FloatNum>(a: &Array1<T>, b: &Array1<T>, deg: usize) -> Array1<T> {
    let mut out = Array1::zeros(deg + 1);
    for (i, ai) in a.iter().enumerate().take(deg + 1) {
        for (j, bj) in b.iter().enumerate().take(deg + 1 - i) {
            out[i + j] += *ai * *bj;
        }
    }
    out
}

/// Hermite finite difference weights `(d, e)` with
/// `f^(order)(x0) ≈ Σ d_j f(x_j) + Σ e_j f'(x_j)`.
///
/// The weights are derivatives at `x0` of the Hermite basis
///
/// `h_j = (1 - 2 ℓ_j'(x_j) (x - x_j)) ℓ_j²`, `g_j = (x - x_j) ℓ_j²`,
///
/// with the Lagrange basis `ℓ_j` of the nodes. All bases are built
/// incrementally, factor by factor, as Taylor polynomials around `x0`
/// truncated after degree `order`. For `order > 0` the sum of `d` is
/// subtracted from its central weight.
///
/// # Errors
/// `InsufficientNodes` unless `x.len() > order/2 + 1`, `InvalidParameter`
/// for coinciding nodes
///
/// # Example
///```
/// use pdesuite::finite_difference::fornberg_calculate_wts_hermite;
/// use ndarray::array;
/// let x = array![-1f64, 0., 1.];
/// let (d, e) = fornberg_calculate_wts_hermite(3, 0., &x).unwrap();
/// // f = x^3
/// let f3 = d.dot(&x.mapv(|x| x * x * x)) + e.dot(&x.mapv(|x| 3. * x * x));
/// assert!((f3 - 6.).abs() < 1e-12);
///```
pub fn fornberg_calculate_wts_hermite<T, S>(
    order: usize,
    x0: T,
    x: &ArrayBase<S, Ix1>,
) -> Result<(Array1<T>, Array1<T>)>
where
    T: FloatNum,
    S: Data<Elem = T>,
{
    let n = x.len();
    check_stencil(order, order / 2 + 2, x)?;
    log::trace!("fornberg hermite: order {}, {} nodes, x0 = {}", order, n, x0);

    // order!
    let mut factorial = T::one();
    for k in 2..=order {
        factorial *= cast(k);
    }
    let mut d = Array1::<T>::zeros(n);
    let mut e = Array1::<T>::zeros(n);
    for j in 0..n {
        // ℓ_j around x0
        let mut lagrange = Array1::<T>::zeros(order + 1);
        lagrange[0] = T::one();
        let mut dlagrange = T::zero();
        for k in (0..n).filter(|&k| k != j) {
            let denom = x[j] - x[k];
            let mut factor = Array1::<T>::zeros(2);
            factor[0] = (x0 - x[k]) / denom;
            factor[1] = T::one() / denom;
            lagrange = mul_truncated(&lagrange, &factor, order);
            dlagrange += T::one() / denom;
        }
        let squared = mul_truncated(&lagrange, &lagrange, order);
        // x - x_j
        let mut shift = Array1::<T>::zeros(2);
        shift[0] = x0 - x[j];
        shift[1] = T::one();
        let g = mul_truncated(&squared, &shift, order);
        let h = &squared - &g.mapv(|v| two::<T>() * dlagrange * v);
        d[j] = factorial * h[order];
        e[j] = factorial * g[order];
    }
    if order > 0 {
        sum_correction(&mut d);
    }
    Ok((d, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn approx_eq(result: &Array1<f64>, expected: &Array1<f64>, dif: f64) {
        assert_eq!(result.len(), expected.len());
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_central_first_derivative() {
        let w = fornberg_calculate_wts(1, 0., &array![-1., 0., 1.]).unwrap();
        approx_eq(&w, &array![-0.5, 0., 0.5], 1e-15);
    }

    #[test]
    fn test_central_second_derivative() {
        let w = fornberg_calculate_wts(2, 0., &array![-1., 0., 1.]).unwrap();
        approx_eq(&w, &array![1., -2., 1.], 1e-14);
        let w = fornberg_calculate_wts(2, 0., &array![-2., -1., 0., 1., 2.]).unwrap();
        let expected = array![-1., 16., -30., 16., -1.] / 12.;
        approx_eq(&w, &expected, 1e-13);
    }

    #[test]
    fn test_forward_difference() {
        let w = fornberg_calculate_wts(2, 0., &array![0., 1., 2., 3.]).unwrap();
        approx_eq(&w, &array![2., -5., 4., -1.], 1e-13);
        let w = fornberg_calculate_wts(0, 0.5, &array![0., 1.]).unwrap();
        approx_eq(&w, &array![0.5, 0.5], 1e-15);
    }

    #[test]
    fn test_non_uniform_sum_zero() {
        let x = array![-0.7f64, -0.1, 0.25, 0.4, 1.3];
        for order in 1..5 {
            let w = fornberg_calculate_wts(order, 0.1, &x).unwrap();
            assert!(w.sum().abs() < 1e-12);
        }
        // exact for polynomials of degree < N
        let w = fornberg_calculate_wts(1, 0.1, &x).unwrap();
        let df = w.dot(&x.mapv(|x| x.powi(4)));
        assert!((df - 4. * 0.1f64.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn test_insufficient_nodes() {
        let err = fornberg_calculate_wts(2, 0., &array![0., 1.]).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientNodes {
                order: 2,
                min: 3,
                got: 2
            }
        );
        assert!(fornberg_calculate_wts(1, 0., &array![0., 1., 1.]).is_err());
        assert!(fornberg_calculate_wts_hermite(4, 0., &array![-1., 0., 1.]).is_err());
    }

    #[test]
    fn test_hermite_weights() {
        let x = array![-1f64, 0., 1.];
        let (d, e) = fornberg_calculate_wts_hermite(1, 0., &x).unwrap();
        assert!(d.sum().abs() < 1e-14);
        // exact for polynomials of degree < 2N
        for p in 0..6 {
            let f = x.mapv(|x: f64| x.powi(p));
            let df = x.mapv(|x: f64| if p == 0 { 0. } else { p as f64 * x.powi(p - 1) });
            let approx = d.dot(&f) + e.dot(&df);
            let exact = if p == 1 { 1. } else { 0. };
            assert!((approx - exact).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hermite_third_derivative() {
        let x = array![-1., 0., 1.];
        let (d, e) = fornberg_calculate_wts_hermite(3, 0.2, &x).unwrap();
        // f = x^5 - x^3, f''' = 60 x^2 - 6
        let f = x.mapv(|x: f64| x.powi(5) - x.powi(3));
        let df = x.mapv(|x: f64| 5. * x.powi(4) - 3. * x * x);
        let approx = d.dot(&f) + e.dot(&df);
        assert!((approx - (60. * 0.04 - 6.)).abs() < 1e-11);
    }

    #[test]
    fn test_hermite_order_zero_interpolates() {
        let x = array![0., 1.];
        let (d, e) = fornberg_calculate_wts_hermite(0, 0., &x).unwrap();
        approx_eq(&d, &array![1., 0.], 1e-15);
        approx_eq(&e, &array![0., 0.], 1e-15);
    }
}
