use crate::error::*;
use crate::intersection::*;
use crate::light::PointLight;
use crate::shape::Sphere;
use crate::util::SHADOW_EPSILON;
use crate::*;

/// Shading inputs derived from one intersection.
#[derive(Clone, Debug)]
pub struct Computation<'a> {
    pub object: &'a Sphere,
    pub t: f64,
    pub point: Tuple,
    pub eye: Tuple,
    pub normal: Tuple,
    pub inside: bool,
}

#[derive(Clone, Debug, Default)]
pub struct World {
    pub objects: Vec<Sphere>,
    pub lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intersect(&self, ray: &Ray) -> Result<Intersections<'_>> {
        let mut xs = vec![];
        for o in self.objects.iter() {
            xs.extend(o.intersect(ray)?);
        }
        Ok(Intersections::new(xs))
    }

    pub fn prepare_computations<'a>(
        &self,
        hit: &Intersection<'a>,
        ray: &Ray,
    ) -> Result<Computation<'a>> {
        let point = ray.position(hit.t);
        let eye = -ray.dir;
        let mut normal = hit.object.normal_at(&point)?;
        let inside = normal.dot(&eye) < 0.0;
        if inside {
            normal = -normal;
        }
        Ok(Computation {
            object: hit.object,
            t: hit.t,
            point,
            eye,
            normal,
            inside,
        })
    }

    pub fn is_shadowed(&self, pos: &Tuple, light: &PointLight) -> Result<bool> {
        let r = light.position - *pos;
        let dist = r.magnitude();
        if dist < SHADOW_EPSILON {
            return Ok(false);
        }
        let ray = Ray::new(*pos, r.normalize())?;
        let xs = self.intersect(&ray)?;
        Ok(xs
            .iter()
            .any(|i| SHADOW_EPSILON < i.t && i.t < dist))
    }

    pub fn shade_hit(&self, comps: &Computation<'_>) -> Result<RGB> {
        let mut color = RGB::black();
        for light in self.lights.iter() {
            let in_shadow = self.is_shadowed(&comps.point, light)?;
            color += comps.object.material.lighting(
                light,
                &comps.point,
                &comps.eye,
                &comps.normal,
                in_shadow,
            );
        }
        Ok(color)
    }

    pub fn color_at(&self, ray: &Ray) -> Result<RGB> {
        let xs = self.intersect(ray)?;
        match xs.hit() {
            Some(hit) => {
                let comps = self.prepare_computations(hit, ray)?;
                self.shade_hit(&comps)
            }
            None => Ok(RGB::black()),
        }
    }
}
