use crate::error::*;
use crate::util::*;
use crate::Tuple;
use std::ops::Index;

/// Immutable row-major grid of `f64`.
///
/// Transform and intersection code only ever deals with 4x4 matrices, but
/// determinant, submatrix and inverse work on any square size so the
/// cofactor expansion can recurse.
#[derive(Clone, Debug)]
pub struct Matrix {
    values: Vec<f64>,
    height: usize,
    width: usize,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(height * width);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    len: r.len(),
                    width,
                });
            }
            values.extend(r);
        }
        Ok(Matrix {
            values,
            height,
            width,
        })
    }

    pub fn from_rows4(rows: [[f64; 4]; 4]) -> Self {
        Matrix {
            values: rows.iter().flat_map(|r| r.iter().copied()).collect(),
            height: 4,
            width: 4,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    pub fn identity4() -> Self {
        Self::identity(4)
    }

    fn from_fn<F: FnMut(usize, usize) -> f64>(height: usize, width: usize, mut f: F) -> Self {
        let mut values = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                values.push(f(r, c));
            }
        }
        Matrix {
            values,
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_4x4(&self) -> bool {
        self.height == 4 && self.width == 4
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.values[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns a copy with one entry replaced.
    pub fn with(&self, row: usize, col: usize, value: f64) -> Result<Self> {
        self.check_index(row, col)?;
        let mut m = self.clone();
        m.values[row * self.width + col] = value;
        Ok(m)
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.width + col]
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    pub(crate) fn require_4x4(&self, op: &'static str) -> Result<()> {
        if self.is_4x4() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                op,
                expected: "4x4",
                height: self.height,
                width: self.width,
            })
        }
    }

    fn require_square(&self, op: &'static str) -> Result<()> {
        if self.height == self.width {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                op,
                expected: "square",
                height: self.height,
                width: self.width,
            })
        }
    }

    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        self.require_4x4("multiply")?;
        rhs.require_4x4("multiply")?;
        Ok(Self::from_fn(4, 4, |r, c| {
            (0..4).map(|k| self.at(r, k) * rhs.at(k, c)).sum()
        }))
    }

    pub fn multiply_tuple(&self, t: &Tuple) -> Result<Tuple> {
        self.require_4x4("multiply_tuple")?;
        let v = t.to_array();
        let mut out = [0.0; 4];
        for (r, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|k| self.at(r, k) * v[k]).sum();
        }
        Ok(Tuple::from(out))
    }

    pub fn transpose(&self) -> Matrix {
        Self::from_fn(self.width, self.height, |r, c| self.at(c, r))
    }

    /// Laplace expansion along row 0. A 0x0 matrix has determinant 1.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square("determinant")?;
        match self.height {
            0 => Ok(1.0),
            2 => Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)),
            n => {
                let mut det = 0.0;
                for col in 0..n {
                    det += self.at(0, col) * self.cofactor(0, col)?;
                }
                Ok(det)
            }
        }
    }

    /// Removing a row or column from a 1-wide matrix yields an empty one.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.check_index(row, col)?;
        let mut values = Vec::with_capacity((self.height - 1) * (self.width - 1));
        for r in (0..self.height).filter(|r| *r != row) {
            for c in (0..self.width).filter(|c| *c != col) {
                values.push(self.at(r, c));
            }
        }
        Ok(Matrix {
            values,
            height: self.height - 1,
            width: self.width - 1,
        })
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.submatrix(row, col)?.determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        if (row + col) % 2 == 1 {
            Ok(-minor)
        } else {
            Ok(minor)
        }
    }

    // exact zero: the determinant is itself a sum of cofactor products
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != 0.0)
    }

    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }
        let n = self.height;
        let mut values = vec![0.0; n * n];
        for row in 0..n {
            for col in 0..n {
                // write transposed: inverse[col][row]
                values[col * n + row] = self.cofactor(row, col)? / det;
            }
        }
        Ok(Matrix {
            values,
            height: n,
            width: n,
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        &self.values[row * self.width + col]
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.height == other.height
            && self.width == other.width
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| float_eq_eps(*a, *b, eps))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::*;
    use rand::prelude::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_construct() {
        let a = m(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.5, 6.5, 7.5, 8.5],
            &[9.0, 10.0, 11.0, 12.0],
            &[13.5, 14.5, 15.5, 16.5],
        ]);
        assert!(float_eq(a[(0, 0)], 1.0));
        assert!(float_eq(a[(0, 3)], 4.0));
        assert!(float_eq(a[(1, 0)], 5.5));
        assert!(float_eq(a[(1, 2)], 7.5));
        assert!(float_eq(a[(2, 2)], 11.0));
        assert!(float_eq(a[(3, 0)], 13.5));
        assert!(float_eq(a[(3, 2)], 15.5));
        assert_eq!(a.get(4, 0), None);

        let b = m(&[&[-3.0, 5.0], &[1.0, -2.0]]);
        assert_eq!((b.height(), b.width()), (2, 2));
        assert!(float_eq(b[(1, 1)], -2.0));

        let c = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!((c.height(), c.width()), (2, 3));
    }

    #[test]
    fn test_ragged_rows() {
        let r = Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            r,
            Err(Error::RaggedRows {
                row: 1,
                len: 1,
                width: 2
            })
        ));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let _ = Matrix::identity(2)[(2, 0)];
    }

    #[test]
    fn test_with_is_copy() {
        let a = Matrix::identity4();
        let b = a.with(0, 3, 5.0).unwrap();
        assert!(float_eq(a[(0, 3)], 0.0));
        assert!(float_eq(b[(0, 3)], 5.0));
        assert!(a.with(4, 0, 1.0).is_err());
    }

    #[test]
    fn test_equality() {
        let a = Matrix::from_rows4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 8.0, 7.0, 6.0],
            [5.0, 4.0, 3.0, 2.0],
        ]);
        let b = a.with(3, 3, 2.0 + EPSILON / 10.0).unwrap();
        assert_eq!(a, b);
        let c = a.with(3, 3, 1.0).unwrap();
        assert_ne!(a, c);
        assert_ne!(Matrix::identity(3), Matrix::identity(4));
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 8.0, 7.0, 6.0],
            [5.0, 4.0, 3.0, 2.0],
        ]);
        let b = Matrix::from_rows4([
            [-2.0, 1.0, 2.0, 3.0],
            [3.0, 2.0, 1.0, -1.0],
            [4.0, 3.0, 6.0, 5.0],
            [1.0, 2.0, 7.0, 8.0],
        ]);
        let expected = Matrix::from_rows4([
            [20.0, 22.0, 50.0, 48.0],
            [44.0, 54.0, 114.0, 108.0],
            [40.0, 58.0, 110.0, 102.0],
            [16.0, 26.0, 46.0, 42.0],
        ]);
        assert_eq!(a.multiply(&b).unwrap(), expected);
        assert_eq!(a.multiply(&Matrix::identity4()).unwrap(), a);
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        let a = Matrix::identity(3);
        let b = Matrix::identity4();
        assert!(matches!(
            a.multiply(&b),
            Err(Error::ShapeMismatch {
                height: 3,
                width: 3,
                ..
            })
        ));
        assert!(b.multiply(&a).is_err());
        assert!(a.multiply_tuple(&point(1.0, 2.0, 3.0)).is_err());
    }

    #[test]
    fn test_multiply_tuple() {
        let a = Matrix::from_rows4([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 4.0, 2.0],
            [8.0, 6.0, 4.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let t = a.multiply_tuple(&point(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(t, point(18.0, 24.0, 33.0));
        let i = Matrix::identity4().multiply_tuple(&t).unwrap();
        assert_eq!(i, t);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows4([
            [0.0, 9.0, 3.0, 0.0],
            [9.0, 8.0, 0.0, 8.0],
            [1.0, 8.0, 5.0, 3.0],
            [0.0, 0.0, 5.0, 8.0],
        ]);
        let expected = Matrix::from_rows4([
            [0.0, 9.0, 1.0, 0.0],
            [9.0, 8.0, 8.0, 0.0],
            [3.0, 0.0, 5.0, 5.0],
            [0.0, 8.0, 3.0, 8.0],
        ]);
        assert_eq!(a.transpose(), expected);
        assert_eq!(Matrix::identity4().transpose(), Matrix::identity4());

        let r = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).transpose();
        assert_eq!(r, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    }

    #[test]
    fn test_determinant_2x2() {
        let a = m(&[&[1.0, 5.0], &[-3.0, 2.0]]);
        assert!(float_eq(a.determinant().unwrap(), 17.0));
    }

    #[test]
    fn test_submatrix() {
        let a = m(&[&[1.0, 5.0, 0.0], &[-3.0, 2.0, 7.0], &[0.0, 6.0, -3.0]]);
        assert_eq!(a.submatrix(0, 2).unwrap(), m(&[&[-3.0, 2.0], &[0.0, 6.0]]));
        let b = m(&[
            &[-6.0, 1.0, 1.0, 6.0],
            &[-8.0, 5.0, 8.0, 6.0],
            &[-1.0, 0.0, 8.0, 2.0],
            &[-7.0, 1.0, -1.0, 1.0],
        ]);
        assert_eq!(
            b.submatrix(2, 1).unwrap(),
            m(&[&[-6.0, 1.0, 6.0], &[-8.0, 8.0, 6.0], &[-7.0, -1.0, 1.0]])
        );
        assert!(matches!(
            b.submatrix(4, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_submatrix_degenerate() {
        let e = m(&[&[3.0]]).submatrix(0, 0).unwrap();
        assert_eq!((e.height(), e.width()), (0, 0));
        let e = m(&[&[1.0, 2.0, 3.0]]).submatrix(0, 1).unwrap();
        assert_eq!((e.height(), e.width()), (0, 2));
        assert!(float_eq(m(&[&[3.0]]).determinant().unwrap(), 3.0));
    }

    #[test]
    fn test_minor_cofactor_3x3() {
        let a = m(&[&[3.0, 5.0, 0.0], &[2.0, -1.0, -7.0], &[6.0, -1.0, 5.0]]);
        assert!(float_eq(a.submatrix(1, 0).unwrap().determinant().unwrap(), 25.0));
        assert!(float_eq(a.minor(1, 0).unwrap(), 25.0));
        assert!(float_eq(a.minor(0, 0).unwrap(), -12.0));
        assert!(float_eq(a.cofactor(0, 0).unwrap(), -12.0));
        assert!(float_eq(a.cofactor(1, 0).unwrap(), -25.0));
    }

    #[test]
    fn test_determinant_3x3() {
        let a = m(&[&[1.0, 2.0, 6.0], &[-5.0, 8.0, -4.0], &[2.0, 6.0, 4.0]]);
        assert!(float_eq(a.cofactor(0, 0).unwrap(), 56.0));
        assert!(float_eq(a.cofactor(0, 1).unwrap(), 12.0));
        assert!(float_eq(a.cofactor(0, 2).unwrap(), -46.0));
        assert!(float_eq(a.determinant().unwrap(), -196.0));
    }

    #[test]
    fn test_determinant_4x4() {
        let a = Matrix::from_rows4([
            [-2.0, -8.0, 3.0, 5.0],
            [-3.0, 1.0, 7.0, 3.0],
            [1.0, 2.0, -9.0, 6.0],
            [-6.0, 7.0, 7.0, -9.0],
        ]);
        assert!(float_eq(a.cofactor(0, 0).unwrap(), 690.0));
        assert!(float_eq(a.cofactor(0, 1).unwrap(), 447.0));
        assert!(float_eq(a.cofactor(0, 2).unwrap(), 210.0));
        assert!(float_eq(a.cofactor(0, 3).unwrap(), 51.0));
        assert!(float_eq(a.determinant().unwrap(), -4071.0));
    }

    #[test]
    fn test_determinant_not_square() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert!(matches!(
            a.determinant(),
            Err(Error::ShapeMismatch {
                expected: "square",
                ..
            })
        ));
    }

    #[test]
    fn test_invertible() {
        let a = Matrix::from_rows4([
            [6.0, 4.0, 4.0, 4.0],
            [5.0, 5.0, 7.0, 6.0],
            [4.0, -9.0, 3.0, -7.0],
            [9.0, 1.0, 7.0, -6.0],
        ]);
        assert!(float_eq(a.determinant().unwrap(), -2120.0));
        assert!(a.is_invertible().unwrap());

        let b = Matrix::from_rows4([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(float_eq(b.determinant().unwrap(), 0.0));
        assert!(!b.is_invertible().unwrap());
        assert!(matches!(b.inverse(), Err(Error::SingularMatrix)));
    }

    #[test]
    fn test_inverse() {
        let a = Matrix::from_rows4([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ]);
        let b = a.inverse().unwrap();
        assert!(float_eq(a.determinant().unwrap(), 532.0));
        assert!(float_eq(a.cofactor(2, 3).unwrap(), -160.0));
        assert!(float_eq(b[(3, 2)], -160.0 / 532.0));
        assert!(float_eq(a.cofactor(3, 2).unwrap(), 105.0));
        assert!(float_eq(b[(2, 3)], 105.0 / 532.0));
        let expected = Matrix::from_rows4([
            [0.21805, 0.45113, 0.24060, -0.04511],
            [-0.80827, -1.45677, -0.44361, 0.52068],
            [-0.07895, -0.22368, -0.05263, 0.19737],
            [-0.52256, -0.81391, -0.30075, 0.30639],
        ]);
        assert_eq!(b, expected);

        let c = Matrix::from_rows4([
            [8.0, -5.0, 9.0, 2.0],
            [7.0, 5.0, 6.0, 1.0],
            [-6.0, 0.0, 9.0, 6.0],
            [-3.0, 0.0, -9.0, -4.0],
        ]);
        let expected = Matrix::from_rows4([
            [-0.15385, -0.15385, -0.28205, -0.53846],
            [-0.07692, 0.12308, 0.02564, 0.03077],
            [0.35897, 0.35897, 0.43590, 0.92308],
            [-0.69231, -0.69231, -0.76923, -1.92308],
        ]);
        assert_eq!(c.inverse().unwrap(), expected);
    }

    #[test]
    fn test_product_times_inverse() {
        let a = Matrix::from_rows4([
            [3.0, -9.0, 7.0, 3.0],
            [3.0, -8.0, 2.0, -9.0],
            [-4.0, 4.0, 4.0, 1.0],
            [-6.0, 5.0, -1.0, 1.0],
        ]);
        let b = Matrix::from_rows4([
            [8.0, 2.0, 2.0, 2.0],
            [3.0, -1.0, 7.0, 0.0],
            [7.0, 0.0, 5.0, 4.0],
            [6.0, -2.0, 0.0, 5.0],
        ]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.multiply(&b.inverse().unwrap()).unwrap(), a);
    }

    fn random_matrix(rng: &mut StdRng) -> Matrix {
        let mut rows = [[0.0; 4]; 4];
        for row in rows.iter_mut() {
            for v in row.iter_mut() {
                *v = rng.gen_range(-10.0..10.0);
            }
        }
        Matrix::from_rows4(rows)
    }

    #[test]
    fn test_inverse_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut checked = 0;
        while checked < 200 {
            let a = random_matrix(&mut rng);
            if a.determinant().unwrap().abs() < 1.0 {
                continue;
            }
            let product = a.multiply(&a.inverse().unwrap()).unwrap();
            assert_eq!(product, Matrix::identity4());
            checked += 1;
        }
    }

    #[test]
    fn test_against_nalgebra() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_matrix(&mut rng);
            let values: Vec<f64> = (0..16).map(|i| a[(i / 4, i % 4)]).collect();
            let na = nalgebra::Matrix4::<f64>::from_row_slice(&values);

            let det = a.determinant().unwrap();
            assert!(det.approx_eq_eps(&na.determinant(), 1e-6 * det.abs().max(1.0)));

            if det.abs() < 1.0 {
                continue;
            }
            let inv = a.inverse().unwrap();
            let na_inv = na.try_inverse().unwrap();
            for r in 0..4 {
                for c in 0..4 {
                    assert!(float_eq(inv[(r, c)], na_inv[(r, c)]));
                }
            }
        }
    }
}
