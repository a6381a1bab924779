use crate::shape::Sphere;

#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Intersection { t, object }
    }
}

/// Intersections kept in ascending `t` order.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a> {
    xs: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    pub fn new(mut xs: Vec<Intersection<'a>>) -> Self {
        xs.sort_by(|a, b| a.t.total_cmp(&b.t));
        Intersections { xs }
    }

    /// Nearest intersection with `t >= 0`, `None` when everything lies
    /// behind the origin.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.xs.iter().find(|i| i.t >= 0.0)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.xs.iter()
    }
}

impl<'a> From<Vec<Intersection<'a>>> for Intersections<'a> {
    fn from(xs: Vec<Intersection<'a>>) -> Self {
        Self::new(xs)
    }
}
