use std::{
    fmt,
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Vec3 {
    /// Component-wise sum of any number of vectors. An empty slice sums to `Vec3::ZERO`.
    pub fn sum_all(vecs: &[Vec3]) -> Vec3 {
        vecs.iter().copied().sum()
    }

    #[inline(always)]
    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        *self / norm
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f64;
    fn mul(self, other: Vec3) -> f64 {
        self.dot(other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Vec3 {
        iter.fold(Vec3::ZERO, |acc, v| acc + v)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(other: [f64; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        v.as_array()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn random_vec() -> Vec3 {
        Vec3::new(
            rand::random::<f64>() * 200.0 - 100.0,
            rand::random::<f64>() * 200.0 - 100.0,
            rand::random::<f64>() * 200.0 - 100.0,
        )
    }

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < EPSILON
    }

    #[test]
    fn test_add_commutative_and_associative() {
        for _ in 0..100 {
            let (a, b, c) = (random_vec(), random_vec(), random_vec());
            assert_eq!(a + b, b + a);
            assert!(approx_eq((a + b) + c, a + (b + c)), "{:?} {:?} {:?}", a, b, c);
            assert!(approx_eq(Vec3::sum_all(&[a, b, c]), a + b + c));
        }
    }

    #[test]
    fn test_sum_all_identity() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Vec3::sum_all(&[]), Vec3::ZERO);
        assert_eq!(Vec3::sum_all(&[v]), v);
        assert_eq!(Vec3::sum_all(&[v, Vec3::ZERO]), v);
    }

    #[test]
    fn test_sub_self_is_zero() {
        for _ in 0..100 {
            let a = random_vec();
            assert_eq!(a - a, Vec3::ZERO);
        }
    }

    #[test]
    fn test_scalar_mul() {
        let v = random_vec();
        assert_eq!(v * 1.0, v);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_dot_symmetric() {
        for _ in 0..100 {
            let (a, b) = (random_vec(), random_vec());
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a * b, a.dot(b));
        }
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn test_length_matches_length_squared() {
        for _ in 0..100 {
            let v = random_vec();
            let norm = v.norm();
            assert!(
                (norm * norm - v.norm_squared()).abs() < 1e-6 * v.norm_squared().max(1.0),
                "{:?}",
                v
            );
        }
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).norm_squared(), 9.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vec3::new(0.0, 0.0, -7.0).normalized();
        assert_eq!(v, -Vec3::Z);
        assert!(Vec3::ZERO.normalized().x.is_nan());
    }

    #[test]
    fn test_serde_as_array() {
        let v: Vec3 = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.0,3.0]");
    }
}
