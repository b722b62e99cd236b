//! Chebyshev points and polar angles
use super::{half_length, Kind};
use crate::error::{check_size, Result};
use crate::types::{cast, two, FloatNum};
use ndarray::Array1;

/// Polar angles of Chebyshev points, in decreasing order, such that
/// `cos(angles[i])` is the i-th point of [`pts`] on \[-1, 1\].
///
/// - 1st kind: `θ_k = (2k+1)π/(2n)`, `k = n-1, ..., 0`
/// - 2nd kind: `θ_k = kπ/(n-1)`, `k = n-1, ..., 0`
///
/// A single point has angle `π/2`.
///
/// # Errors
/// `n < 1`
pub fn angles<T: FloatNum>(kind: Kind, n: usize) -> Result<Array1<T>> {
    check_size("angles", n, 1)?;
    let pi = T::PI();
    if n == 1 {
        return Ok(Array1::from_elem(1, pi / two()));
    }
    let theta = match kind {
        Kind::First => {
            let denom: T = cast(2 * n);
            Array1::from_shape_fn(n, |i| cast::<T, _>(2 * (n - 1 - i) + 1) * pi / denom)
        }
        Kind::Second => {
            let denom: T = cast(n - 1);
            Array1::from_shape_fn(n, |i| cast::<T, _>(n - 1 - i) * pi / denom)
        }
    };
    Ok(theta)
}

/// Chebyshev points in increasing order.
///
/// On the reference interval:
/// - 1st kind: `x_k = -cos((2k+1)π/(2n))`
/// - 2nd kind: `x_k = -cos(kπ/(n-1))`
///
/// for `k = 0, ..., n-1`. The points are evaluated with the equivalent
/// sine form, which makes them exactly symmetric around the midpoint.
/// Given an `interval` (x_min, x_max), the points are mapped by
/// `x_min + (x + 1) (x_max - x_min) / 2`. A single point is the midpoint.
///
/// # Errors
/// `n < 1` or an empty/degenerate interval
///
/// # Example
///```
/// use pdesuite::chebyshev::{pts, Kind};
/// let x = pts::<f64>(Kind::Second, 5, None).unwrap();
/// assert_eq!(x[0], -1.);
/// assert_eq!(x[4], 1.);
///```
pub fn pts<T: FloatNum>(kind: Kind, n: usize, interval: Option<(T, T)>) -> Result<Array1<T>> {
    check_size("pts", n, 1)?;
    let scale = half_length(interval)?;
    let pi = T::PI();
    let mut x = if n == 1 {
        Array1::zeros(1)
    } else {
        match kind {
            Kind::First => {
                let denom: T = cast(2 * n);
                Array1::from_shape_fn(n, |k| {
                    let num = cast::<T, _>(2 * k + 1) - cast::<T, _>(n);
                    (pi * num / denom).sin()
                })
            }
            Kind::Second => {
                let m = n - 1;
                let denom: T = cast(2 * m);
                let mut x = Array1::from_shape_fn(n, |k| {
                    let num = cast::<T, _>(2 * k) - cast::<T, _>(m);
                    (pi * num / denom).sin()
                });
                x[0] = -T::one();
                x[m] = T::one();
                x
            }
        }
    };
    if let Some((x_min, x_max)) = interval {
        let mid = (x_max + x_min) / two();
        x.mapv_inplace(|v| mid + scale * v);
        if kind == Kind::Second && n > 1 {
            x[0] = x_min;
            x[n - 1] = x_max;
        }
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(result: &Array1<f64>, expected: &Array1<f64>, dif: f64) {
        assert_eq!(result.len(), expected.len());
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    fn is_increasing(x: &Array1<f64>) -> bool {
        x.windows(2).into_iter().all(|w| w[0] < w[1])
    }

    #[test]
    fn test_pts_1st_kind() {
        let x = pts::<f64>(Kind::First, 5, None).unwrap();
        assert_eq!(x.len(), 5);
        assert!(is_increasing(&x));
        assert!(x[0] > -1. && x[4] < 1.);
        let expected = Array1::from_shape_fn(5, |k| {
            -((2 * k + 1) as f64 * std::f64::consts::PI / 10.).cos()
        });
        approx_eq(&x, &expected, 1e-14);
        assert_eq!(x[2], 0.);
    }

    #[test]
    fn test_pts_2nd_kind() {
        let x = pts::<f64>(Kind::Second, 5, None).unwrap();
        assert_eq!(x.len(), 5);
        assert!(is_increasing(&x));
        assert_eq!(x[0], -1.);
        assert_eq!(x[4], 1.);
        let expected = Array1::from_shape_fn(5, |k| -(k as f64 * std::f64::consts::PI / 4.).cos());
        approx_eq(&x, &expected, 1e-14);
    }

    #[test]
    fn test_pts_symmetric() {
        for kind in [Kind::First, Kind::Second].iter() {
            for n in 2..12 {
                let x = pts::<f64>(*kind, n, None).unwrap();
                for k in 0..n {
                    assert_eq!(x[k], -x[n - 1 - k]);
                }
            }
        }
    }

    #[test]
    fn test_pts_mapped() {
        let x = pts::<f64>(Kind::Second, 6, Some((0., 2.))).unwrap();
        let y = pts::<f64>(Kind::Second, 6, None).unwrap();
        approx_eq(&x, &(&y + 1.), 1e-14);
        assert_eq!(x[0], 0.);
        assert_eq!(x[5], 2.);
        let x = pts::<f64>(Kind::First, 4, Some((1., 5.))).unwrap();
        assert!(is_increasing(&x));
        assert!(x[0] > 1. && x[3] < 5.);
    }

    #[test]
    fn test_pts_single_point() {
        let x = pts::<f64>(Kind::Second, 1, Some((2., 4.))).unwrap();
        approx_eq(&x, &Array1::from_elem(1, 3.), 0.);
        let x = pts::<f32>(Kind::First, 1, None).unwrap();
        assert_eq!(x[0], 0.);
    }

    #[test]
    fn test_pts_errors() {
        assert!(pts::<f64>(Kind::First, 0, None).is_err());
        assert!(pts::<f64>(Kind::First, 4, Some((1., 1.))).is_err());
        assert!(angles::<f64>(Kind::Second, 0).is_err());
    }

    #[test]
    fn test_angles_match_points() {
        for kind in [Kind::First, Kind::Second].iter() {
            let n = 7;
            let t = angles::<f64>(*kind, n).unwrap();
            let x = pts::<f64>(*kind, n, None).unwrap();
            approx_eq(&t.mapv(f64::cos), &x, 1e-14);
            assert!(t.iter().all(|&a| (0. ..=std::f64::consts::PI).contains(&a)));
        }
    }
}
