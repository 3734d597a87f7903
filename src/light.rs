use serde::{Deserialize, Serialize};

use crate::geometry::IntersectionData;
use crate::math::{Pixel, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// `source` is the light's position.
    #[default]
    Point,
    /// `source` is the direction the light travels in.
    Directional,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(default)]
    pub kind: LightKind,
    pub source: Vec3,
    pub ambient: Pixel,
}

impl Light {
    pub fn point(source: Vec3, ambient: Pixel) -> Light {
        Light {
            kind: LightKind::Point,
            source,
            ambient,
        }
    }

    pub fn directional(direction: Vec3, ambient: Pixel) -> Light {
        Light {
            kind: LightKind::Directional,
            source: direction,
            ambient,
        }
    }

    /// Unit vector from `point` towards the light.
    pub fn direction_to_light(&self, point: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Point => (self.source - point).normalized(),
            LightKind::Directional => (-self.source).normalized(),
        }
    }
}

/// Turns a surface hit into a color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingModel {
    /// The light's ambient color, opaque, regardless of surface orientation or light position.
    #[default]
    Ambient,
    /// `ambient * max(0, n . l)` with `l` the unit direction from the hit towards the light.
    Lambertian,
}

impl ShadingModel {
    pub fn shade(&self, light: &Light, isect: &IntersectionData) -> Pixel {
        match self {
            ShadingModel::Ambient => light.ambient.opaque(),
            ShadingModel::Lambertian => {
                let to_light = light.direction_to_light(isect.point);
                // f64::max also maps the nan from a light sitting on the hit point to 0
                let cos_theta = isect.normal.dot(to_light).max(0.0);
                light.ambient.scaled(cos_theta)
            }
        }
    }
}

impl std::str::FromStr for ShadingModel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ambient" => Ok(ShadingModel::Ambient),
            "lambertian" => Ok(ShadingModel::Lambertian),
            other => Err(format!(
                "unknown shading model {:?}, expected one of ambient, lambertian",
                other
            )),
        }
    }
}
