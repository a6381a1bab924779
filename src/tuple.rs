use crate::error::*;
use crate::util::*;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Homogeneous 4-component value. `w == 1` is a point, `w == 0` a vector.
#[derive(Clone, Copy, Debug)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::point(x, y, z)
}

pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::vector(x, y, z)
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Tuple { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn is_point(&self) -> bool {
        float_eq(self.w, 1.0)
    }

    pub fn is_vector(&self) -> bool {
        float_eq(self.w, 0.0)
    }

    /// Fails with `InvalidTupleRole` naming `what` unless this is a point.
    pub fn expect_point(self, what: &'static str) -> Result<Self> {
        if self.is_point() {
            Ok(self)
        } else {
            Err(Error::InvalidTupleRole {
                what,
                expected: "point",
                tuple: self,
            })
        }
    }

    pub fn expect_vector(self, what: &'static str) -> Result<Self> {
        if self.is_vector() {
            Ok(self)
        } else {
            Err(Error::InvalidTupleRole {
                what,
                expected: "vector",
                tuple: self,
            })
        }
    }

    pub fn dot(&self, rhs: &Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    // w is ignored, the result is always a vector
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Divides by the magnitude. A zero vector yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * 2.0 * self.dot(normal)
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl ApproxEq for Tuple {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        float_eq_eps(self.x, other.x, eps)
            && float_eq_eps(self.y, other.y, eps)
            && float_eq_eps(self.z, other.z, eps)
            && float_eq_eps(self.w, other.w, eps)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl From<[f64; 4]> for Tuple {
    fn from(a: [f64; 4]) -> Self {
        Tuple::new(a[0], a[1], a[2], a[3])
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Tuple::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Tuple::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Tuple::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Tuple::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}
