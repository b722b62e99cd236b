//! # Transforms between values and Chebyshev coefficients
//!
//! Values live on the increasing grid of [`super::pts`], coefficients
//! `c_k` multiply `T_k`. Both directions exist as exact matrices
//! ([`amat`] analysis, [`smat`] synthesis) and as fast discrete cosine
//! transforms (`ndrustfft`):
//!
//! - 1st kind: DCT-II (values to coefficients), DCT-III (inverse)
//! - 2nd kind: DCT-I in both directions
//!
//! [`Coeffs2Vals`] and [`Vals2Coeffs`] precompute the cheaper of the
//! two representations for a given size and reuse it for every call.
//!
//! # Example
//! Repeated transforms of the same size
//! ```
//! use pdesuite::chebyshev::{Coeffs2Vals, Kind, Vals2Coeffs};
//! use pdesuite::Apply;
//! use ndarray::Array1;
//! let n = 100;
//! let forward = Vals2Coeffs::<f64>::new(Kind::Second, n).unwrap();
//! let backward = Coeffs2Vals::<f64>::new(Kind::Second, n).unwrap();
//! let vals = Array1::<f64>::linspace(0., 1., n);
//! let coeffs = forward.apply(&vals).unwrap();
//! let recover = backward.apply(&coeffs).unwrap();
//! for (a, b) in vals.iter().zip(recover.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! ```
use super::{angles, Kind};
use crate::error::{check_size, Result};
use crate::operator::Apply;
use crate::types::{cast, two, FloatNum};
use ndarray::linalg::general_mat_vec_mul;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayViewMut1, Data, Ix1};
use ndrustfft::{nddct1, nddct2, nddct3, DctHandler, FftNum};
use std::fmt;

/// Transforms of at least this size use the fft
pub const FFT_THRESHOLD: usize = 64;

/// Representation used by a precomputed transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Dense matrix-vector product, O(n²) per call
    Dense,
    /// Discrete cosine transform, O(n log n) per call
    Fft,
}

impl Method {
    /// Cheaper representation for size `n`
    fn select(n: usize) -> Self {
        if n >= FFT_THRESHOLD {
            Method::Fft
        } else {
            Method::Dense
        }
    }
}

/// Synthesis matrix `S`, maps coefficients to values: `S[j, k] = T_k(x_j)`.
///
/// # Errors
/// `n < 1`
pub fn smat<T: FloatNum>(kind: Kind, n: usize) -> Result<Array2<T>> {
    check_size("smat", n, 1)?;
    let theta = angles::<T>(kind, n)?;
    if n == 1 {
        return Ok(Array2::ones((1, 1)));
    }
    Ok(Array2::from_shape_fn((n, n), |(j, k)| {
        (cast::<T, _>(k) * theta[j]).cos()
    }))
}

/// Analysis matrix `A = S⁻¹`, maps values to coefficients.
///
/// Built from the discrete orthogonality of the cosines on the grid,
/// not by inversion.
///
/// # Errors
/// `n < 1`
pub fn amat<T: FloatNum>(kind: Kind, n: usize) -> Result<Array2<T>> {
    check_size("amat", n, 1)?;
    let theta = angles::<T>(kind, n)?;
    if n == 1 {
        return Ok(Array2::ones((1, 1)));
    }
    let half = T::one() / two();
    let a = match kind {
        Kind::First => {
            let scale = two::<T>() / cast(n);
            Array2::from_shape_fn((n, n), |(k, j)| {
                let b = if k == 0 { half } else { T::one() };
                scale * b * (cast::<T, _>(k) * theta[j]).cos()
            })
        }
        Kind::Second => {
            let m = n - 1;
            let scale = two::<T>() / cast(m);
            Array2::from_shape_fn((n, n), |(k, j)| {
                let a = if j == 0 || j == m { half } else { T::one() };
                let b = if k == 0 || k == m { half } else { T::one() };
                scale * a * b * (cast::<T, _>(k) * theta[j]).cos()
            })
        }
    };
    Ok(a)
}

/// Precomputed discrete cosine transform with its correction.
///
/// The transforms run on the values in increasing grid order, i.e. on
/// the reflected grid `x -> -x`. The correction folds the resulting
/// `(-1)^k` together with the normalization of each coefficient.
#[derive(Clone)]
struct DctPlan<T: FftNum> {
    handler: DctHandler<T>,
    correct: Array1<T>,
}

#[derive(Clone)]
enum Plan<T: FftNum> {
    Dense(Array2<T>),
    Dct(DctPlan<T>),
}

impl<T: FftNum> Plan<T> {
    fn method(&self) -> Method {
        match self {
            Plan::Dense(_) => Method::Dense,
            Plan::Dct(_) => Method::Fft,
        }
    }
}

/// Alternating ones `(-1)^k`
fn alternating_ones<T: FloatNum>(n: usize) -> Array1<T> {
    Array1::from_shape_fn(n, |k| if k % 2 == 0 { T::one() } else { -T::one() })
}

/// Correction applied to the coefficients before the inverse dct.
///
/// - 1st kind, DCT-III `y_j = x_0 + 2 Σ x_k cos(πk(2j+1)/(2n))`:
///   interior coefficients are halved
/// - 2nd kind, DCT-I `y_j = x_0 + (-1)^j x_(n-1) + 2 Σ x_k cos(πjk/(n-1))`:
///   all but the end coefficients are halved
fn coeffs2vals_correct<T: FloatNum>(kind: Kind, n: usize) -> Array1<T> {
    let half = T::one() / two();
    let mut correct = alternating_ones::<T>(n) * half;
    correct[0] = T::one();
    if kind == Kind::Second {
        correct[n - 1] = correct[n - 1] * two();
    }
    correct
}

/// Correction applied to the output of the forward dct.
///
/// - 1st kind, DCT-II `y_k = 2 Σ x_j cos(πk(2j+1)/(2n))`: scale by
///   `1/n`, `c_0` halved
/// - 2nd kind, DCT-I: scale by `1/(n-1)`, both ends halved
fn vals2coeffs_correct<T: FloatNum>(kind: Kind, n: usize) -> Array1<T> {
    let half = T::one() / two();
    let m = match kind {
        Kind::First => n,
        Kind::Second => n - 1,
    };
    let mut correct = alternating_ones::<T>(n) / cast::<T, _>(m);
    correct[0] = correct[0] * half;
    if kind == Kind::Second {
        correct[n - 1] = correct[n - 1] * half;
    }
    correct
}

macro_rules! impl_transform_operator {
    ($name: ident, $dense: ident, $correct: ident, $dct_lane: ident, $desc: expr) => {
        #[doc = $desc]
        ///
        /// Construct once per size, apply many times. The operator is
        /// immutable after construction and may be applied from several
        /// threads at once.
        #[derive(Clone)]
        pub struct $name<T: FftNum> {
            kind: Kind,
            n: usize,
            plan: Plan<T>,
        }

        impl<T: FloatNum + FftNum> $name<T> {
            /// Precompute transform of size `n`, choosing the cheaper representation
            ///
            /// # Errors
            /// `n < 1`
            pub fn new(kind: Kind, n: usize) -> Result<Self> {
                Self::with_method(kind, n, Method::select(n))
            }

            /// Precompute transform of size `n` with a given representation.
            ///
            /// Sizes for which the dct is degenerate (`n < 2`) always
            /// use the dense matrix.
            ///
            /// # Errors
            /// `n < 1`
            pub fn with_method(kind: Kind, n: usize, method: Method) -> Result<Self> {
                check_size(stringify!($name), n, 1)?;
                let plan = if method == Method::Dense || n < 2 {
                    Plan::Dense($dense(kind, n)?)
                } else {
                    Plan::Dct(DctPlan {
                        handler: DctHandler::new(n),
                        correct: $correct(kind, n),
                    })
                };
                log::debug!(
                    "{}: kind {:?}, n = {}, method {:?}",
                    stringify!($name),
                    kind,
                    n,
                    plan.method()
                );
                Ok(Self { kind, n, plan })
            }

            /// Kind of the grid
            pub fn kind(&self) -> Kind {
                self.kind
            }

            /// Representation in use
            pub fn method(&self) -> Method {
                self.plan.method()
            }
        }

        impl<T: FloatNum + FftNum> Apply<T> for $name<T> {
            fn len_in(&self) -> usize {
                self.n
            }

            fn len_out(&self) -> usize {
                self.n
            }

            fn apply_lane(&self, input: &ArrayView1<T>, output: &mut ArrayViewMut1<T>) {
                match &self.plan {
                    Plan::Dense(mat) => general_mat_vec_mul(T::one(), mat, input, T::zero(), output),
                    Plan::Dct(plan) => $dct_lane(self.kind, plan, input, output),
                }
            }
        }

        impl<T: FftNum> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("kind", &self.kind)
                    .field("n", &self.n)
                    .field("method", &self.plan.method())
                    .finish()
            }
        }
    };
}

impl_transform_operator!(
    Coeffs2Vals,
    smat,
    coeffs2vals_correct,
    coeffs2vals_dct,
    "Convert Chebyshev coefficients to values at Chebyshev points."
);

impl_transform_operator!(
    Vals2Coeffs,
    amat,
    vals2coeffs_correct,
    vals2coeffs_dct,
    "Convert values at Chebyshev points to Chebyshev coefficients."
);

/// Values from coefficients by the inverse dct
fn coeffs2vals_dct<T: FloatNum + FftNum>(
    kind: Kind,
    plan: &DctPlan<T>,
    c: &ArrayView1<T>,
    v: &mut ArrayViewMut1<T>,
) {
    let buffer = c * &plan.correct;
    match kind {
        Kind::First => nddct3(&buffer, v, &plan.handler, 0),
        Kind::Second => nddct1(&buffer, v, &plan.handler, 0),
    }
}

/// Coefficients from values by the forward dct
fn vals2coeffs_dct<T: FloatNum + FftNum>(
    kind: Kind,
    plan: &DctPlan<T>,
    v: &ArrayView1<T>,
    c: &mut ArrayViewMut1<T>,
) {
    match kind {
        Kind::First => nddct2(v, c, &plan.handler, 0),
        Kind::Second => nddct1(v, c, &plan.handler, 0),
    }
    *c *= &plan.correct;
}

/// Convert Chebyshev coefficients to values at Chebyshev points.
///
/// For repeated calls of the same size, construct a [`Coeffs2Vals`] once.
///
/// # Errors
/// Empty coefficients
pub fn coeffs2vals<T, S>(kind: Kind, coeffs: &ArrayBase<S, Ix1>) -> Result<Array1<T>>
where
    T: FloatNum + FftNum,
    S: Data<Elem = T>,
{
    Coeffs2Vals::new(kind, coeffs.len())?.apply(coeffs)
}

/// Convert values at Chebyshev points to Chebyshev coefficients.
///
/// For repeated calls of the same size, construct a [`Vals2Coeffs`] once.
///
/// # Errors
/// Empty values
pub fn vals2coeffs<T, S>(kind: Kind, vals: &ArrayBase<S, Ix1>) -> Result<Array1<T>>
where
    T: FloatNum + FftNum,
    S: Data<Elem = T>,
{
    Vals2Coeffs::new(kind, vals.len())?.apply(vals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chebyshev::pts;
    use ndarray::{array, Array2, Dimension};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    const KINDS: [Kind; 2] = [Kind::First, Kind::Second];

    fn approx_eq<S, D>(result: &ArrayBase<S, D>, expected: &ArrayBase<S, D>, dif: f64)
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        assert_eq!(result.shape(), expected.shape());
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_amat_inverts_smat() {
        for kind in KINDS.iter() {
            for n in [1, 2, 5, 16].iter() {
                let s = smat::<f64>(*kind, *n).unwrap();
                let a = amat::<f64>(*kind, *n).unwrap();
                approx_eq(&a.dot(&s), &Array2::eye(*n), 1e-13);
            }
        }
    }

    #[test]
    fn test_synthesis_of_x() {
        // T_1 = x
        for kind in KINDS.iter() {
            let x = pts::<f64>(*kind, 6, None).unwrap();
            let v = coeffs2vals(*kind, &array![0., 1., 0., 0., 0., 0.]).unwrap();
            approx_eq(&v, &x, 1e-14);
        }
    }

    #[test]
    fn test_analysis_of_x_squared() {
        // x^2 = (T_0 + T_2)/2
        for kind in KINDS.iter() {
            let x = pts::<f64>(*kind, 5, None).unwrap();
            let c = vals2coeffs(*kind, &x.mapv(|v| v * v)).unwrap();
            approx_eq(&c, &array![0.5, 0., 0.5, 0., 0.], 1e-14);
        }
    }

    #[test]
    fn test_round_trip() {
        for kind in KINDS.iter() {
            for n in [1, 2, 3, 10, 63, 64, 129].iter() {
                let c = Array1::<f64>::random(*n, Uniform::new(-1., 1.));
                let v = coeffs2vals(*kind, &c).unwrap();
                let recover = vals2coeffs(*kind, &v).unwrap();
                approx_eq(&recover, &c, 1e-13 * (*n as f64).max(10.));
            }
        }
    }

    #[test]
    fn test_fft_matches_dense() {
        for kind in KINDS.iter() {
            for n in [2, 3, 8, 17].iter() {
                let c = Array1::<f64>::random(*n, Uniform::new(-1., 1.));
                let fft = Coeffs2Vals::<f64>::with_method(*kind, *n, Method::Fft).unwrap();
                let dense = Coeffs2Vals::<f64>::with_method(*kind, *n, Method::Dense).unwrap();
                assert_eq!(fft.method(), Method::Fft);
                approx_eq(&fft.apply(&c).unwrap(), &dense.apply(&c).unwrap(), 1e-13);

                let fft = Vals2Coeffs::<f64>::with_method(*kind, *n, Method::Fft).unwrap();
                let dense = Vals2Coeffs::<f64>::with_method(*kind, *n, Method::Dense).unwrap();
                approx_eq(&fft.apply(&c).unwrap(), &dense.apply(&c).unwrap(), 1e-13);
            }
        }
    }

    #[test]
    fn test_dct_on_grid_orientation() {
        // T_1 = x and T_3 = 4x^3 - 3x on the increasing grid
        for kind in KINDS.iter() {
            let n = 100;
            let x = pts::<f64>(*kind, n, None).unwrap();
            let mut c = Array1::<f64>::zeros(n);
            c[1] = 1.;
            c[3] = 2.;
            let op = Coeffs2Vals::<f64>::new(*kind, n).unwrap();
            assert_eq!(op.method(), Method::Fft);
            let expected = x.mapv(|v| v + 2. * (4. * v.powi(3) - 3. * v));
            approx_eq(&op.apply(&c).unwrap(), &expected, 1e-13);
            let op = Vals2Coeffs::<f64>::new(*kind, n).unwrap();
            approx_eq(&op.apply(&expected).unwrap(), &c, 1e-13);
        }
    }

    #[test]
    fn test_method_selection() {
        let op = Coeffs2Vals::<f64>::new(Kind::First, FFT_THRESHOLD - 1).unwrap();
        assert_eq!(op.method(), Method::Dense);
        let op = Coeffs2Vals::<f64>::new(Kind::First, FFT_THRESHOLD).unwrap();
        assert_eq!(op.method(), Method::Fft);
        let op = Vals2Coeffs::<f64>::with_method(Kind::Second, 1, Method::Fft).unwrap();
        assert_eq!(op.method(), Method::Dense);
    }

    #[test]
    fn test_operator_dimension_mismatch() {
        let op = Vals2Coeffs::<f64>::new(Kind::Second, 8).unwrap();
        assert!(op.apply(&Array1::<f64>::zeros(7)).is_err());
        assert!(Vals2Coeffs::<f64>::new(Kind::Second, 0).is_err());
    }

    #[test]
    fn test_apply_axis_par() {
        let (nx, ny) = (70, 5);
        let data = Array2::<f64>::random((nx, ny), Uniform::new(-1., 1.));
        let op = Vals2Coeffs::<f64>::new(Kind::First, nx).unwrap();
        let coeffs = op.apply_axis_par(&data, 0).unwrap();
        for j in 0..ny {
            let lane = op.apply(&data.column(j)).unwrap();
            approx_eq(&coeffs.column(j).to_owned(), &lane, 1e-15);
        }
    }

    #[test]
    fn test_single_precision() {
        let x = pts::<f32>(Kind::Second, 9, None).unwrap();
        let c = vals2coeffs(Kind::Second, &x.mapv(|v| 2. * v * v - 1.)).unwrap();
        assert!((c[2] - 1.).abs() < 1e-5);
        assert!(c[0].abs() < 1e-5);
    }
}
