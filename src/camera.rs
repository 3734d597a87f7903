use serde::{Deserialize, Serialize};

use crate::geometry::Quad;
use crate::math::{Ray, Vec3};

/// Where inside a raster cell the image plane is sampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Cell `(x, y)` samples `((x + 1) / w, (y + 1) / h)`: the far corner of the cell.
    /// Corner 0 of the image plane is never sampled.
    #[default]
    #[serde(alias = "corner")]
    FarCorner,
    /// Cell `(x, y)` samples its center, `((x + 0.5) / w, (y + 0.5) / h)`.
    #[serde(alias = "center")]
    PixelCenter,
}

impl SamplingMode {
    pub fn uv(self, x: usize, y: usize, width: usize, height: usize) -> (f64, f64) {
        let offset = match self {
            SamplingMode::FarCorner => 1.0,
            SamplingMode::PixelCenter => 0.5,
        };
        (
            (x as f64 + offset) / width as f64,
            (y as f64 + offset) / height as f64,
        )
    }
}

impl std::str::FromStr for SamplingMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "far_corner" | "corner" => Ok(SamplingMode::FarCorner),
            "center" | "pixel_center" => Ok(SamplingMode::PixelCenter),
            other => Err(format!(
                "unknown sampling mode {:?}, expected one of corner, center",
                other
            )),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub observer: Vec3,
    pub image_plane: Quad,
}

impl Camera {
    pub fn new(observer: Vec3, image_plane: Quad) -> Camera {
        Camera {
            observer,
            image_plane,
        }
    }

    /// Ray from the observer through the image plane point belonging to raster cell `(x, y)`.
    /// The direction is left unnormalized.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize, mode: SamplingMode) -> Ray {
        let (u, v) = mode.uv(x, y, width, height);
        let pixel_point = self.image_plane.sample(u, v);

        Ray::new(self.observer, pixel_point - self.observer)
    }
}
