//! # Precomputed linear operators
//!
//! Every operator in this crate is built once for a fixed size and then
//! applied to many vectors. The construction may be expensive
//! (dense matrices are O(n²), fft plans O(n log n)), application only reads
//! the precomputed data. Hence one operator can be shared between
//! threads and applied concurrently.
//!
//! Besides single vectors, operators act on all lanes of an
//! n-dimensional array along a given axis, either sequentially or
//! in parallel (rayon).
use crate::error::{check_len, Error, Result};
use crate::types::FloatNum;
use ndarray::linalg::general_mat_vec_mul;
use ndarray::{Array, Array1, Array2, ArrayBase, ArrayView1, ArrayViewMut1, Axis};
use ndarray::{Data, Dimension, Ix1, Zip};

/// Apply a precomputed linear operator: y = M x
pub trait Apply<T: FloatNum> {
    /// Length of input vectors (columns of M)
    fn len_in(&self) -> usize;

    /// Length of output vectors (rows of M)
    fn len_out(&self) -> usize;

    /// Apply operator to a single lane.
    ///
    /// Sizes are not checked, `input` must be of length `len_in`
    /// and `output` of length `len_out`.
    fn apply_lane(&self, input: &ArrayView1<T>, output: &mut ArrayViewMut1<T>);

    /// Apply operator to a vector
    ///
    /// # Errors
    /// Length of `input` does not match `len_in`
    fn apply<S: Data<Elem = T>>(&self, input: &ArrayBase<S, Ix1>) -> Result<Array1<T>> {
        check_len(self.len_in(), input.len())?;
        let mut output = Array1::<T>::zeros(self.len_out());
        self.apply_lane(&input.view(), &mut output.view_mut());
        Ok(output)
    }

    /// Apply operator along `axis` of an n-dimensional array.
    /// The output has the same shape as the input, except along
    /// `axis`, which has length `len_out`.
    ///
    /// # Errors
    /// `axis` out of bounds or length along `axis` does not match `len_in`
    fn apply_axis<S, D>(&self, input: &ArrayBase<S, D>, axis: usize) -> Result<Array<T, D>>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let mut output = self.allocate_output(input, axis)?;
        Zip::from(output.lanes_mut(Axis(axis)))
            .and(input.lanes(Axis(axis)))
            .for_each(|mut out, inp| {
                self.apply_lane(&inp, &mut out);
            });
        Ok(output)
    }

    /// Parallel version of [`Apply::apply_axis`]
    ///
    /// # Errors
    /// `axis` out of bounds or length along `axis` does not match `len_in`
    fn apply_axis_par<S, D>(&self, input: &ArrayBase<S, D>, axis: usize) -> Result<Array<T, D>>
    where
        Self: Sync,
        S: Data<Elem = T>,
        D: Dimension,
    {
        let mut output = self.allocate_output(input, axis)?;
        Zip::from(output.lanes_mut(Axis(axis)))
            .and(input.lanes(Axis(axis)))
            .par_for_each(|mut out, inp| {
                self.apply_lane(&inp, &mut out);
            });
        Ok(output)
    }

    #[doc(hidden)]
    fn allocate_output<S, D>(&self, input: &ArrayBase<S, D>, axis: usize) -> Result<Array<T, D>>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        if axis >= input.ndim() {
            return Err(Error::invalid_parameter(
                "axis",
                format!("axis {} out of bounds for {} dimensions", axis, input.ndim()),
            ));
        }
        check_len(self.len_in(), input.shape()[axis])?;
        let mut shape = input.raw_dim();
        shape[axis] = self.len_out();
        Ok(Array::zeros(shape))
    }
}

/// Dense matrices act as operators directly
impl<T: FloatNum> Apply<T> for Array2<T> {
    fn len_in(&self) -> usize {
        self.ncols()
    }

    fn len_out(&self) -> usize {
        self.nrows()
    }

    fn apply_lane(&self, input: &ArrayView1<T>, output: &mut ArrayViewMut1<T>) {
        general_mat_vec_mul(T::one(), self, input, T::zero(), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    fn approx_eq<S, D>(result: &ArrayBase<S, D>, expected: &ArrayBase<S, D>)
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let dif = 1e-12;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_dense_apply() {
        let mat = array![[1., 2., 3.], [4., 5., 6.]];
        let x = array![1., 0., -1.];
        let y = mat.apply(&x).unwrap();
        approx_eq(&y, &array![-2., -2.]);
        assert!(mat.apply(&array![1., 2.]).is_err());
    }

    #[test]
    fn test_apply_axis() {
        let mat = array![[0., 1.], [1., 0.], [1., 1.]];
        let mut data = Array2::<f64>::zeros((2, 4));
        for (i, v) in data.iter_mut().enumerate() {
            *v = i as f64;
        }
        let out = mat.apply_axis(&data, 0).unwrap();
        assert_eq!(out.shape(), &[3, 4]);
        for j in 0..4 {
            let lane = mat.apply(&data.column(j)).unwrap();
            approx_eq(&out.column(j).to_owned(), &lane);
        }
        let out_par = mat.apply_axis_par(&data, 0).unwrap();
        approx_eq(&out_par, &out);
    }

    #[test]
    fn test_apply_axis_errors() {
        let mat = Array2::<f64>::eye(3);
        let data = Array3::<f64>::zeros((3, 2, 2));
        assert!(mat.apply_axis(&data, 0).is_ok());
        assert!(mat.apply_axis(&data, 1).is_err());
        assert!(mat.apply_axis(&data, 3).is_err());
    }
}
