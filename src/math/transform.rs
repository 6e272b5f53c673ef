use crate::math::matrix::{Matrix, MatrixError};

/// Moves an object along the given axes.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::new_unchecked(
        4,
        4,
        vec![
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Alters the size of an object along the given axes.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::new_unchecked(
        4,
        4,
        vec![
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Rotates an object clockwise around the x axis by r radians.
pub fn rotation_x(r: f64) -> Matrix {
    let cos = r.cos();
    let sin = r.sin();
    Matrix::new_unchecked(
        4,
        4,
        vec![
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Rotates an object clockwise around the y axis by r radians.
pub fn rotation_y(r: f64) -> Matrix {
    let cos = r.cos();
    let sin = r.sin();
    Matrix::new_unchecked(
        4,
        4,
        vec![
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Rotates an object clockwise around the z axis by r radians.
pub fn rotation_z(r: f64) -> Matrix {
    let cos = r.cos();
    let sin = r.sin();
    Matrix::new_unchecked(
        4,
        4,
        vec![
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Slants the shape of an object. Each component changes in proportion to
/// the other two.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::new_unchecked(
        4,
        4,
        vec![
            1.0, xy, xz, 0.0, //
            yx, 1.0, yz, 0.0, //
            zx, zy, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    )
}

/// Composes a sequence of transformations so that the first listed matrix is
/// applied first to a point, despite matrix multiplication associating the
/// other way around.
pub fn transform(transformations: &[Matrix]) -> Result<Matrix, MatrixError> {
    let mut result = Matrix::identity();
    for m in transformations.iter().rev() {
        result = result.mat_mul(m)?;
    }
    Ok(result)
}
