use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Planar quadrilateral, corners ordered
///
/// ```text
///  0 ------------ 1
///  |              |
///  |              |
///  3 ------------ 2
/// ```
///
/// `0 -> 1` and `0 -> 3` are taken as the plane's basis. Planarity and
/// rectangularity are not checked.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [Vec3; 4]);

impl Quad {
    pub fn new(top_left: Vec3, top_right: Vec3, bottom_right: Vec3, bottom_left: Vec3) -> Quad {
        Quad([top_left, top_right, bottom_right, bottom_left])
    }

    pub fn origin(&self) -> Vec3 {
        self.0[0]
    }

    /// horizontal axis
    pub fn sup(&self) -> Vec3 {
        self.0[1] - self.0[0]
    }

    /// vertical axis
    pub fn lat(&self) -> Vec3 {
        self.0[3] - self.0[0]
    }

    /// Point at plane coordinates `(u, v)`, where `(0, 0)` is corner 0 and `(1, 1)` is
    /// `p0 + sup + lat`.
    pub fn sample(&self, u: f64, v: f64) -> Vec3 {
        Vec3::sum_all(&[self.origin(), self.sup() * u, self.lat() * v])
    }

    pub fn is_degenerate(&self) -> bool {
        let (sup, lat) = (self.sup(), self.lat());
        !(sup.is_finite() && lat.is_finite())
            || sup.norm_squared() == 0.0
            || lat.norm_squared() == 0.0
    }
}
