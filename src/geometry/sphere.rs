use serde::{Deserialize, Serialize};

use crate::geometry::{IntersectionData, Primitive, SurfaceIntersectionData};
use crate::math::{Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Sphere {
        Sphere { center, radius }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0 && self.center.is_finite())
    }

    /// Both parameters where the ray's line crosses the sphere, smaller first.
    /// `None` when the discriminant is negative.
    pub fn roots(&self, r: Ray) -> Option<(f64, f64)> {
        let oc = r.origin - self.center;
        let oc2 = oc.norm_squared();
        let r2 = self.radius * self.radius;
        let v2 = r.direction.norm_squared();
        let dot = r.direction * oc;

        let delta = 4.0 * dot * dot - 4.0 * v2 * (oc2 - r2);
        if delta < 0.0 {
            return None;
        }
        let delta_sqrt = delta.sqrt();
        let t0 = (-2.0 * dot - delta_sqrt) / (2.0 * v2);
        let t1 = (-2.0 * dot + delta_sqrt) / (2.0 * v2);
        Some((t0, t1))
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> Option<IntersectionData> {
        let (t0, t1) = self.roots(r)?;

        // closest candidate point to the ray origin, by squared distance
        let mut closest: Option<(f64, f64, Vec3)> = None;
        for time in [t0, t1] {
            if !(time > r.tmin && time < r.tmax) {
                continue;
            }
            let point = r.point_at_parameter(time);
            let distance_squared = (point - r.origin).norm_squared();
            match closest {
                Some((best, _, _)) if best <= distance_squared => {}
                _ => closest = Some((distance_squared, time, point)),
            }
        }

        closest.map(|(_, time, point)| {
            let normal = (point - self.center).normalized();
            SurfaceIntersectionData::new(time, point, normal)
        })
    }
}
