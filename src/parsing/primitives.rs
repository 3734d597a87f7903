use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    geometry::{Quad, Sphere},
    light::{Light, LightKind},
    math::{Pixel, Vec3},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    pub observer: [f64; 3],
    /// corners ordered top-left, top-right, bottom-right, bottom-left
    pub image_plane: [[f64; 3]; 4],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightData {
    #[serde(default)]
    pub kind: LightKind,
    pub source: [f64; 3],
    pub ambient: Pixel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereData {
    pub center: [f64; 3],
    pub radius: f64,
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Camera {
        let [p0, p1, p2, p3] = data.image_plane;
        Camera::new(
            data.observer.into(),
            Quad::new(p0.into(), p1.into(), p2.into(), p3.into()),
        )
    }
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Light {
        Light {
            kind: data.kind,
            source: Vec3::from(data.source),
            ambient: data.ambient,
        }
    }
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Sphere {
        Sphere::new(data.center.into(), data.radius)
    }
}
