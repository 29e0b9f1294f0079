use crate::state::{StateVector, DIM};

/// Dense operator on the two-qubit amplitude space, row-major.
pub type Matrix4 = [[f64; DIM]; DIM];

/// `M · v`. Amplitudes of any type that widens losslessly to `f64` are
/// accepted and converted before the product is taken.
pub fn mat_vec<T>(m: &Matrix4, v: &[T; DIM]) -> StateVector
where
    T: Copy + Into<f64>,
{
    let x: [f64; DIM] = v.map(Into::into);
    let mut out = [0.0; DIM];
    for (i, row) in m.iter().enumerate() {
        let mut acc = 0.0;
        for (j, mij) in row.iter().enumerate() {
            acc += mij * x[j];
        }
        out[i] = acc;
    }
    StateVector::new(out)
}
