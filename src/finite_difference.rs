//! # Finite difference operators
//!
//! Derivative weights of arbitrary order on arbitrary (non-uniform)
//! stencils, uniform grids, and Kreiss-Oliger dissipation weights.
//!
//! Implemented:
//! - Fornberg's algorithm, see [`fornberg_calculate_wts()`]
//! - Hermite finite differences (values and first derivatives), see
//!   [`fornberg_calculate_wts_hermite()`]
//! - Uniform grids, see [`fdm_grid()`]
//! - Artificial dissipation, see [`dissipation_order()`], [`dissipation_wts()`]
//!
//! # Example
//! Second derivative with a five point stencil
//! ```
//! use pdesuite::finite_difference::{fdm_grid, fornberg_calculate_wts};
//! let x = fdm_grid(-0.2, 0.2, 0.1).unwrap();
//! let w = fornberg_calculate_wts(2, 0., &x).unwrap();
//! let d2 = w.dot(&x.mapv(|x: f64| x.powi(4) + x * x));
//! assert!((d2 - 2.).abs() < 1e-9);
//! ```
//!
//! # References
//! B. Fornberg, Generation of finite difference formulas on arbitrarily
//! spaced grids, Math. Comp. 51 (1988).
//!
//! B. Fornberg, Calculation of weights in finite difference formulas,
//! SIAM Review 40 (1998).
//!
//! M. C. Babiuc et al., Implementation of standard testbeds for numerical
//! relativity, Class. Quant. Grav. 25 (2008).
pub mod dissipation;
pub mod fornberg;
pub mod grid;
pub use dissipation::{dissipation_order, dissipation_wts};
pub use fornberg::{fornberg_calculate_wts, fornberg_calculate_wts_hermite};
pub use grid::fdm_grid;
