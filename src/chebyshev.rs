//! # Chebyshev spectral operators
//!
//! Collocation and coefficient space operators on Chebyshev grids
//! of the first kind (roots of `T_n`, endpoints excluded) and the second kind
//! (extrema of `T_{n-1}`, endpoints included).
//!
//! Both kinds share one implementation; functions take a [`Kind`] and
//! only the point/angle formulas and the boundary weights differ.
//!
//! Implemented:
//! - Grids, angles and barycentric weights, see [`pts()`], [`angles()`], [`barywts()`]
//! - Transforms between values and coefficients, see [`Coeffs2Vals`], [`Vals2Coeffs`]
//! - Clenshaw evaluation, see [`clenshaw()`], [`feval()`]
//! - Barycentric interpolation and differentiation, see [`bary()`], [`bary_diffmat()`]
//! - Differentiation matrices, see [`diffmat()`], [`rectdiff1()`], [`rectdiff2()`]
//! - Integration matrices, see [`cumsummat()`], [`coeffs_cumsummat()`], [`rectint()`]
//! - Quadrature weights, see [`quadwts()`]
//!
//! # References
//! Chebfun (`@chebtech1`, `@chebtech2`, `@chebcolloc1`, `@chebcolloc2`)
//!
//! J.-P. Berrut and L. N. Trefethen, Barycentric Lagrange interpolation,
//! SIAM Review 46 (2004).
pub mod barycentric;
pub mod clenshaw;
pub mod diffmat;
pub mod grid;
pub mod integrate;
pub mod quadrature;
pub mod transform;
pub use barycentric::{bary, bary_diffmat, bary_rectdiff, barywts, generic_barywts};
pub use clenshaw::{clenshaw, feval, feval_many};
pub use diffmat::{diffmat, rectdiff1, rectdiff2};
pub use grid::{angles, pts};
pub use integrate::{coeffs_cumsummat, cumsum, cumsummat, rectint, Cumsum};
pub use quadrature::quadwts;
pub use transform::{amat, coeffs2vals, smat, vals2coeffs, Coeffs2Vals, Method, Vals2Coeffs};

use crate::error::{Error, Result};
use crate::types::{two, FloatNum};

/// Kind of Chebyshev grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Roots of `T_n`, interior points only
    First,
    /// Extrema of `T_{n-1}`, includes -1 and 1
    Second,
}

/// Half length `(x_max - x_min) / 2` of the interval, 1 for the
/// reference interval \[-1, 1\]
///
/// # Errors
/// `x_min >= x_max` or non-finite bounds
pub(crate) fn half_length<T: FloatNum>(interval: Option<(T, T)>) -> Result<T> {
    match interval {
        None => Ok(T::one()),
        Some((x_min, x_max)) => {
            if !(x_min.is_finite() && x_max.is_finite()) || x_min >= x_max {
                return Err(Error::invalid_parameter(
                    "interval",
                    format!("expected finite x_min < x_max, got [{}, {}]", x_min, x_max),
                ));
            }
            Ok((x_max - x_min) / two())
        }
    }
}
