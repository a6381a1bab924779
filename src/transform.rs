use crate::error::*;
use crate::matrix::Matrix;

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows4([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows4([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows4([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows4([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows4([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Composes transforms listed in application order: the first element is
/// applied to the operand first.
pub fn compose(transforms: &[Matrix]) -> Result<Matrix> {
    let mut out = Matrix::identity4();
    for t in transforms {
        out = t.multiply(&out)?;
    }
    Ok(out)
}

/// Ordered sequence of transforms, applied front to back.
#[derive(Clone, Debug, Default)]
pub struct TransformChain {
    transforms: Vec<Matrix>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `m`, which is applied after everything already in the chain.
    pub fn then(mut self, m: Matrix) -> Self {
        self.transforms.push(m);
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn compose(&self) -> Result<Matrix> {
        compose(&self.transforms)
    }
}
