use super::Vec3;
use std::f64::INFINITY;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub tmin: f64,
    pub tmax: f64,
}

impl Ray {
    /// A ray spanning the whole line through `origin`, in both directions.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction,
            tmin: -INFINITY,
            tmax: INFINITY,
        }
    }

    pub fn with_tmin(mut self, tmin: f64) -> Self {
        self.tmin = tmin;
        self
    }

    pub fn point_at_parameter(self, time: f64) -> Vec3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vec3::default(), Vec3::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.point_at_parameter(0.0), ray.origin);
        assert_eq!(ray.point_at_parameter(1.5), Vec3::new(1.0, 3.0, 0.0));
        assert_eq!(ray.point_at_parameter(-1.0), Vec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn test_default_window_is_whole_line() {
        let ray = Ray::default().with_tmin(0.0);
        assert_eq!(ray.tmin, 0.0);
        assert_eq!(ray.tmax, INFINITY);
        assert_eq!(Ray::default().tmin, -INFINITY);
    }
}
