//! # Banded matrices
//!
//! Sparse storage for operators whose nonzeros are confined to a band
//! around the main diagonal, with `kl` subdiagonals and `ku` superdiagonals.
//!
//! The band is stored row by row: `data[[b, i]]` holds the entry
//! `A[i, j]` with `b = j + kl - i`, so `b = kl` is the main diagonal.
//! Storage and matrix-vector products are O(n (kl + ku)), independent
//! of the dense size.
use crate::error::{check_len, Result};
use crate::operator::Apply;
use crate::types::FloatNum;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayViewMut1, Data, Ix1};

/// Banded (possibly rectangular) matrix
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix<T> {
    nrows: usize,
    ncols: usize,
    kl: usize,
    ku: usize,
    data: Array2<T>,
}

impl<T: FloatNum> BandedMatrix<T> {
    /// Zero matrix of shape `nrows x ncols` with room for `kl`
    /// subdiagonals and `ku` superdiagonals
    pub fn zeros(nrows: usize, ncols: usize, kl: usize, ku: usize) -> Self {
        Self {
            nrows,
            ncols,
            kl,
            ku,
            data: Array2::zeros((kl + ku + 1, nrows)),
        }
    }

    /// Identity matrix
    pub fn eye(n: usize) -> Self {
        let mut mat = Self::zeros(n, n, 0, 0);
        mat.data.fill(T::one());
        mat
    }

    /// Square matrix from a list of diagonals.
    ///
    /// Each diagonal is given by its offset (negative: below, positive: above
    /// the main diagonal) and its values, starting in the top left corner.
    /// Values beyond the length of a diagonal are ignored, missing values
    /// are zero.
    ///
    /// # Example
    /// Tridiagonal matrix
    ///```
    /// use pdesuite::banded::BandedMatrix;
    /// use ndarray::array;
    /// let mat = BandedMatrix::from_diags(
    ///     3,
    ///     &[(-1, array![1., 1.]), (0, array![-2., -2., -2.]), (1, array![1., 1.])],
    /// );
    /// assert_eq!(mat.get(1, 0), 1.);
    /// assert_eq!(mat.get(2, 0), 0.);
    ///```
    pub fn from_diags(n: usize, diags: &[(isize, Array1<T>)]) -> Self {
        let kl = diags
            .iter()
            .map(|(k, _)| if *k < 0 { k.unsigned_abs() } else { 0 })
            .max()
            .unwrap_or(0);
        let ku = diags
            .iter()
            .map(|(k, _)| if *k > 0 { k.unsigned_abs() } else { 0 })
            .max()
            .unwrap_or(0);
        let mut mat = Self::zeros(n, n, kl, ku);
        for (k, values) in diags {
            let (i0, j0) = if *k < 0 {
                (k.unsigned_abs(), 0)
            } else {
                (0, k.unsigned_abs())
            };
            for (p, v) in values.iter().enumerate() {
                let (i, j) = (i0 + p, j0 + p);
                if i >= n || j >= n {
                    break;
                }
                mat.set(i, j, *v);
            }
        }
        mat
    }

    /// Shape (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored subdiagonals
    pub fn lower_bandwidth(&self) -> usize {
        self.kl
    }

    /// Number of stored superdiagonals
    pub fn upper_bandwidth(&self) -> usize {
        self.ku
    }

    /// True if `(i, j)` lies inside the stored band
    fn in_band(&self, i: usize, j: usize) -> bool {
        i < self.nrows && j < self.ncols && j + self.kl >= i && j <= i + self.ku
    }

    /// Entry `A[i, j]`, zero outside the band
    pub fn get(&self, i: usize, j: usize) -> T {
        if self.in_band(i, j) {
            self.data[[j + self.kl - i, i]]
        } else {
            T::zero()
        }
    }

    /// Set entry `A[i, j]`
    ///
    /// ## Panics
    /// `(i, j)` outside of the stored band
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(
            self.in_band(i, j),
            "Entry ({}, {}) outside of band (kl={}, ku={}) of {}x{} matrix",
            i,
            j,
            self.kl,
            self.ku,
            self.nrows,
            self.ncols
        );
        self.data[[j + self.kl - i, i]] = value;
    }

    /// Add `value` to entry `A[i, j]`
    ///
    /// ## Panics
    /// `(i, j)` outside of the stored band
    pub fn add_at(&mut self, i: usize, j: usize, value: T) {
        let old = self.get(i, j);
        self.set(i, j, old + value);
    }

    /// Column range of row `i` inside the band
    fn row_range(&self, i: usize) -> std::ops::Range<usize> {
        let start = i.saturating_sub(self.kl);
        let end = (i + self.ku + 1).min(self.ncols);
        start..end.max(start)
    }

    /// Extract diagonal with offset `k`, analogous to `numpy.diag`
    pub fn diag(&self, k: isize) -> Array1<T> {
        let (i0, j0) = if k < 0 {
            (k.unsigned_abs(), 0)
        } else {
            (0, k.unsigned_abs())
        };
        if i0 >= self.nrows || j0 >= self.ncols {
            return Array1::zeros(0);
        }
        let len = (self.nrows - i0).min(self.ncols - j0);
        Array1::from_shape_fn(len, |p| self.get(i0 + p, j0 + p))
    }

    /// Matrix-vector product
    ///
    /// # Errors
    /// Length of `x` does not match the number of columns
    pub fn dot<S: Data<Elem = T>>(&self, x: &ArrayBase<S, Ix1>) -> Result<Array1<T>> {
        self.apply(x)
    }

    /// Matrix-matrix product. The bandwidths of the result are the sums
    /// of the bandwidths of the factors (clipped to the matrix shape).
    ///
    /// # Errors
    /// Inner dimensions do not agree
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        check_len(self.ncols, other.nrows)?;
        let kl = (self.kl + other.kl).min(self.nrows.saturating_sub(1));
        let ku = (self.ku + other.ku).min(other.ncols.saturating_sub(1));
        let mut out = Self::zeros(self.nrows, other.ncols, kl, ku);
        for i in 0..self.nrows {
            for p in self.row_range(i) {
                let a = self.get(i, p);
                if a == T::zero() {
                    continue;
                }
                for j in other.row_range(p) {
                    out.add_at(i, j, a * other.get(p, j));
                }
            }
        }
        Ok(out)
    }

    /// Sum of two matrices of equal shape
    ///
    /// # Errors
    /// Shapes do not agree
    pub fn add(&self, other: &Self) -> Result<Self> {
        check_len(self.nrows, other.nrows)?;
        check_len(self.ncols, other.ncols)?;
        let mut out = Self::zeros(
            self.nrows,
            self.ncols,
            self.kl.max(other.kl),
            self.ku.max(other.ku),
        );
        for m in [self, other].iter() {
            for i in 0..m.nrows {
                for j in m.row_range(i) {
                    out.add_at(i, j, m.get(i, j));
                }
            }
        }
        Ok(out)
    }

    /// Multiply all entries by `alpha`
    pub fn scale(&mut self, alpha: T) {
        self.data.mapv_inplace(|v| v * alpha);
    }

    /// Leading `nrows x ncols` block
    pub fn truncate(&self, nrows: usize, ncols: usize) -> Self {
        let nrows = nrows.min(self.nrows);
        let ncols = ncols.min(self.ncols);
        let kl = self.kl.min(nrows.saturating_sub(1));
        let ku = self.ku.min(ncols.saturating_sub(1));
        let mut out = Self::zeros(nrows, ncols, kl, ku);
        for i in 0..nrows {
            for j in out.row_range(i) {
                out.set(i, j, self.get(i, j));
            }
        }
        out
    }

    /// Number of entries inside the band that are nonzero
    pub fn nnz(&self) -> usize {
        (0..self.nrows)
            .map(|i| {
                self.row_range(i)
                    .filter(|&j| self.get(i, j) != T::zero())
                    .count()
            })
            .sum()
    }

    /// Dense copy. Meant for inspection and tests, solvers should
    /// work on the banded storage.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.nrows, self.ncols));
        for i in 0..self.nrows {
            for j in self.row_range(i) {
                dense[[i, j]] = self.get(i, j);
            }
        }
        dense
    }
}

impl<T: FloatNum> Apply<T> for BandedMatrix<T> {
    fn len_in(&self) -> usize {
        self.ncols
    }

    fn len_out(&self) -> usize {
        self.nrows
    }

    fn apply_lane(&self, input: &ArrayView1<T>, output: &mut ArrayViewMut1<T>) {
        for i in 0..self.nrows {
            let mut acc = T::zero();
            for j in self.row_range(i) {
                acc += self.data[[j + self.kl - i, i]] * input[j];
            }
            output[i] = acc;
        }
    }
}
