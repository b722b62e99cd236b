//! # `pdesuite`: Discretization operators for partial differential equations
//!<img align="right" src="https://rustacean.net/assets/cuddlyferris.png" width="80">
//!
//! # Dependencies
//! - cargo >= v1.49
//!
//! # Details
//!
//! This library turns continuous differential and integral operators into
//! matrices and weight vectors, the building blocks of spectral and finite
//! difference solvers. It does not assemble or solve systems itself.
//!
//! Implemented operators:
//! - `Chebyshev` spectral operators on grids of the first and second kind,
//!   see [`chebyshev`]. Grids, value/coefficient transforms, Clenshaw
//!   evaluation, barycentric interpolation, differentiation, integration
//!   and quadrature.
//! - `Ultraspherical` operators in banded storage, see [`ultraspherical`].
//!   Conversion, differentiation and multiplication in the bases `C^(λ)`.
//! - `Finite differences`, see [`finite_difference`]. Fornberg weights on
//!   arbitrary stencils and Kreiss-Oliger dissipation.
//!
//! All builders are generic over the precision ([`FloatNum`], `f32` or
//! `f64`) and return [`Result`]. Operators that are applied repeatedly are
//! precomputed once and implement [`Apply`], which also acts along an
//! axis of n-dimensional arrays, optionally in parallel.
//!
//! # Example
//! Solve `u' = cos(x)`, `u(-1) = 0` by integration, and check with the
//! differentiation matrix
//! ```
//! use pdesuite::chebyshev::{cumsummat, diffmat, pts, Kind};
//! let n = 20;
//! let x = pts::<f64>(Kind::Second, n, None).unwrap();
//! let q = cumsummat::<f64>(Kind::Second, n, None).unwrap();
//! let u = q.dot(&x.mapv(f64::cos));
//! for (ui, xi) in u.iter().zip(x.iter()) {
//!     assert!((ui - (xi.sin() + 1f64.sin())).abs() < 1e-12);
//! }
//! let d = diffmat::<f64>(Kind::Second, n, 1, None).unwrap();
//! let du = d.dot(&u);
//! assert!((du[n / 2] - x[n / 2].cos()).abs() < 1e-10);
//! ```
//!
//! ## Logging
//!
//! Operator construction is reported through the `log` facade. Install
//! any logger (e.g. `env_logger`) in the application to see it.
//!
//! ## Documentation
//!
//! Download and run:
//!
//! `cargo doc --open`
#![warn(missing_docs)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
pub mod banded;
pub mod chebyshev;
pub mod error;
pub mod finite_difference;
pub mod operator;
pub mod types;
pub mod ultraspherical;
pub use banded::BandedMatrix;
pub use error::{Error, Result};
pub use operator::Apply;
pub use types::FloatNum;
