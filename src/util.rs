/// Tolerance shared by every float comparison in the crate.
pub const EPSILON: f64 = 1e-5;

/// Lower bound on `t` for shadow rays so a surface does not shadow itself.
pub const SHADOW_EPSILON: f64 = EPSILON;

pub fn float_eq(a: f64, b: f64) -> bool {
    float_eq_eps(a, b, EPSILON)
}

pub fn float_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn approx_eq_eps(&self, other: &Rhs, eps: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &f64, eps: f64) -> bool {
        float_eq_eps(*self, *other, eps)
    }
}
