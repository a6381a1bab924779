use crate::error::*;
use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::*;

/// Unit sphere at the object-space origin, placed in the world by its
/// transform. The inverse is cached whenever the transform is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    transform: Matrix,
    inverse: Matrix,
    pub material: Material,
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere {
            transform: Matrix::identity4(),
            inverse: Matrix::identity4(),
            material: Material::default(),
        }
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: Matrix) -> Result<Self> {
        let mut s = Self::new();
        s.set_transform(transform)?;
        Ok(s)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        transform.require_4x4("sphere transform")?;
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn inverse_transform(&self) -> &Matrix {
        &self.inverse
    }

    /// Both roots of the ray/sphere quadratic in ascending order, even when
    /// they coincide. Negative `t` lies behind the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>> {
        let ray = ray.transform(&self.inverse)?;
        let sphere_to_ray = ray.origin - point(0.0, 0.0, 0.0);
        let a = ray.dir.dot(&ray.dir);
        let b = 2.0 * ray.dir.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Ok(vec![]);
        }
        let sqrt_d = discriminant.sqrt();
        let t1 = (-b - sqrt_d) / (2.0 * a);
        let t2 = (-b + sqrt_d) / (2.0 * a);
        Ok(vec![Intersection::new(t1, self), Intersection::new(t2, self)])
    }

    pub fn normal_at(&self, world_point: &Tuple) -> Result<Tuple> {
        let world_point = world_point.expect_point("normal point")?;
        let object_point = self.inverse.multiply_tuple(&world_point)?;
        let object_normal = object_point - point(0.0, 0.0, 0.0);
        let mut world_normal = self.inverse.transpose().multiply_tuple(&object_normal)?;
        world_normal.w = 0.0;
        Ok(world_normal.normalize())
    }
}
