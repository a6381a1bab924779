use crate::error::*;
use crate::matrix::Matrix;
use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub dir: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, dir: Tuple) -> Result<Self> {
        Ok(Ray {
            origin: origin.expect_point("ray origin")?,
            dir: dir.expect_vector("ray direction")?,
        })
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.dir * t
    }

    /// The direction is not renormalised.
    pub fn transform(&self, m: &Matrix) -> Result<Self> {
        Ok(Ray {
            origin: m.multiply_tuple(&self.origin)?,
            dir: m.multiply_tuple(&self.dir)?,
        })
    }
}
