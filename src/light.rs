use crate::error::*;
use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: RGB,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: RGB) -> Result<Self> {
        Ok(PointLight {
            position: position.expect_point("light position")?,
            intensity,
        })
    }
}
