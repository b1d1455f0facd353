//! Small fixed-size linear algebra for the 2-DOF solvers
//!
//! Real types (`NMat2`, `NVec2`) are what the transient integrator works
//! with. The complex types (`CMat2`, `CVec2`) and `cis` are only used by the
//! steady-state solver.
//!
//! Negation, scaling, addition, subtraction and matrix-vector products are
//! plain nalgebra operators. Inversion is closed-form since the size is
//! fixed at 2.

use nalgebra::{ComplexField, Matrix2, Scalar, Vector2};
use num_complex::Complex64;

use crate::simulation::error::SolverError;

pub type NMat2 = Matrix2<f64>;
pub type NVec2 = Vector2<f64>;
pub type CMat2 = Matrix2<Complex64>;
pub type CVec2 = Vector2<Complex64>;

/// Relative determinant threshold below which a matrix counts as singular
pub const SINGULAR_TOL: f64 = 1.0e-12;

/// Real matrix from row-major entries `[[a, b], [c, d]]`
pub fn mat2(a: f64, b: f64, c: f64, d: f64) -> NMat2 {
    NMat2::new(a, b, c, d)
}

/// Complex matrix from row-major entries `[[a, b], [c, d]]`
pub fn cmat2(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> CMat2 {
    CMat2::new(a, b, c, d)
}

/// Promote a real matrix to a complex one with zero imaginary part
pub fn to_complex(m: &NMat2) -> CMat2 {
    m.map(|x| Complex64::new(x, 0.0))
}

/// Promote a real vector to a complex one with zero imaginary part
pub fn to_complex_vec(v: &NVec2) -> CVec2 {
    v.map(|x| Complex64::new(x, 0.0))
}

/// e^{i theta} = cos(theta) + i sin(theta)
pub fn cis(theta: f64) -> Complex64 {
    Complex64::new(theta.cos(), theta.sin())
}

/// Real part of each component
pub fn re(v: &CVec2) -> NVec2 {
    v.map(|z| z.re)
}

/// Closed-form inverse of a 2x2 matrix, real or complex.
///
/// For `[[a, b], [c, d]]`, `det = a d - b c` and the inverse is
/// `(1/det) [[d, -b], [-c, a]]`. `name` labels the matrix in the error.
///
/// Fails with `SingularMatrix` when det is not finite or
/// `|det| <= SINGULAR_TOL * (|a d| + |b c|)`, so no NaN/inf leaves here.
pub fn invert<T>(m: &Matrix2<T>, name: &'static str) -> Result<Matrix2<T>, SolverError>
where
    T: ComplexField<RealField = f64> + Scalar + Copy,
{
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);

    let ad = a * d;
    let bc = b * c;
    let det = ad - bc;

    // scale keeps the check meaningful for both tiny and huge entries
    let scale = ad.modulus() + bc.modulus();
    let det_abs = det.modulus();
    if !det_abs.is_finite() || det_abs <= SINGULAR_TOL * scale {
        return Err(SolverError::SingularMatrix { name, det: det_abs });
    }

    let inv_det = det.recip();
    Ok(Matrix2::new(d * inv_det, -b * inv_det, -c * inv_det, a * inv_det))
}
