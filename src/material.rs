use crate::light::PointLight;
use crate::util::*;
use crate::*;

/// Phong surface parameters.
#[derive(Clone, Debug)]
pub struct Material {
    pub color: RGB,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: RGB::all(1.0),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && float_eq(self.ambient, other.ambient)
            && float_eq(self.diffuse, other.diffuse)
            && float_eq(self.specular, other.specular)
            && float_eq(self.shininess, other.shininess)
    }
}

impl Material {
    pub fn new(color: RGB) -> Self {
        Material {
            color,
            ..Default::default()
        }
    }

    /// Phong contribution of a single light at `pos`. `eye` and `normal`
    /// are unit vectors; a shadowed point only receives the ambient term.
    pub fn lighting(
        &self,
        light: &PointLight,
        pos: &Tuple,
        eye: &Tuple,
        normal: &Tuple,
        in_shadow: bool,
    ) -> RGB {
        let effective = self.color * light.intensity;
        let ambient = effective * self.ambient;
        if in_shadow {
            return ambient;
        }

        let light_dir = (light.position - *pos).normalize();
        let light_dot_normal = light_dir.dot(normal);
        // NaN when the light sits exactly on the shaded point
        if light_dot_normal.is_nan() || light_dot_normal < 0.0 {
            return ambient;
        }
        let diffuse = effective * self.diffuse * light_dot_normal;

        let reflect_dir = (-light_dir).reflect(normal);
        let reflect_dot_eye = reflect_dir.dot(eye);
        if reflect_dot_eye <= 0.0 {
            return ambient + diffuse;
        }
        let specular = light.intensity * self.specular * reflect_dot_eye.powf(self.shininess);
        ambient + diffuse + specular
    }
}
