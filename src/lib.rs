pub mod camera;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod intersection;
pub mod light;
pub mod manager;
pub mod material;
pub mod matrix;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod shape;
pub mod transform;
pub mod tuple;
pub mod util;
pub mod world;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use ray::Ray;
pub use rgb::RGB;
pub use tuple::{point, vector, Tuple};
