use crate::camera::Camera;
use crate::error::RenderError;
use crate::geometry::Sphere;
use crate::light::Light;
use crate::math::Vec3;

/// One camera, one light, one sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    pub sphere: Sphere,
}

impl Scene {
    pub fn new(camera: Camera, light: Light, sphere: Sphere) -> Scene {
        Scene {
            camera,
            light,
            sphere,
        }
    }

    /// Same scene with the light source moved, for batch renders.
    pub fn with_light_source(mut self, source: Vec3) -> Scene {
        self.light.source = source;
        self
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.sphere.is_degenerate() {
            return Err(RenderError::Geometry(format!(
                "sphere radius must be finite and positive, got radius {} at {:?}",
                self.sphere.radius, self.sphere.center
            )));
        }
        if self.camera.image_plane.is_degenerate() {
            return Err(RenderError::Geometry(format!(
                "image plane has a zero-length or non-finite spanning vector: {:?}",
                self.camera.image_plane
            )));
        }
        if !self.camera.observer.is_finite() {
            return Err(RenderError::Geometry(format!(
                "camera observer is not finite: {:?}",
                self.camera.observer
            )));
        }
        Ok(())
    }
}
