use crate::math::{Ray, Vec3};

mod quad;
mod sphere;

pub use quad::Quad;
pub use sphere::Sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceIntersectionData {
    pub time: f64,
    pub point: Vec3,
    pub normal: Vec3,
}

impl SurfaceIntersectionData {
    pub fn new(time: f64, point: Vec3, normal: Vec3) -> Self {
        SurfaceIntersectionData {
            time,
            point,
            normal,
        }
    }
}

pub type IntersectionData = SurfaceIntersectionData;

pub trait Primitive {
    /// Nearest hit to the ray origin with a parameter inside `(r.tmin, r.tmax)`.
    fn intersect(&self, r: Ray) -> Option<IntersectionData>;
}
