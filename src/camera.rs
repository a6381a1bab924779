use crate::error::*;
use crate::image::*;
use crate::matrix::Matrix;
use crate::transform::translation;
use crate::world::World;
use crate::*;

/// Orientation matrix looking from `from` towards `to`. `up` only needs to
/// be roughly perpendicular to the view direction.
pub fn view_transform(from: &Tuple, to: &Tuple, up: &Tuple) -> Result<Matrix> {
    let from = from.expect_point("view origin")?;
    let to = to.expect_point("view target")?;
    let up = up.expect_vector("view up")?;
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);
    let orientation = Matrix::from_rows4([
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    orientation.multiply(&translation(-from.x, -from.y, -from.z))
}

/// Pinhole camera with its image plane at z = -1 in camera space.
#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    fov: f64,
    transform: Matrix,
    inverse: Matrix,
    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, fov: f64) -> Self {
        let half_view = (fov / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        Camera {
            hsize,
            vsize,
            fov,
            transform: Matrix::identity4(),
            inverse: Matrix::identity4(),
            pixel_size: half_width * 2.0 / hsize as f64,
            half_width,
            half_height,
        }
    }

    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        transform.require_4x4("camera transform")?;
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }
    pub fn vsize(&self) -> usize {
        self.vsize
    }
    pub fn fov(&self) -> f64 {
        self.fov
    }
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Result<Ray> {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;
        // looking down -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self
            .inverse
            .multiply_tuple(&point(world_x, world_y, -1.0))?;
        let origin = self.inverse.multiply_tuple(&point(0.0, 0.0, 0.0))?;
        Ray::new(origin, (pixel - origin).normalize())
    }

    pub fn render_row(&self, world: &World, py: usize) -> Result<Vec<RGB>> {
        (0..self.hsize)
            .map(|px| world.color_at(&self.ray_for_pixel(px, py)?))
            .collect()
    }

    /// Row-major render into `sink`, stopping at the first error.
    pub fn render_into<S: ImageSink>(&self, world: &World, sink: &mut S) -> Result<()> {
        for py in 0..self.vsize {
            for px in 0..self.hsize {
                let ray = self.ray_for_pixel(px, py)?;
                sink.put_pixel(px, py, world.color_at(&ray)?);
            }
        }
        Ok(())
    }

    pub fn render(&self, world: &World) -> Result<Image> {
        let mut image = Image::new(self.hsize, self.vsize);
        self.render_into(world, &mut image)?;
        Ok(image)
    }
}
