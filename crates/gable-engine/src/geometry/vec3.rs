use core::ops::{Add, AddAssign, Neg};

/// 3D vector used both as a vertex position and as a displacement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(0.25, 4.0, -1.5);
        assert_eq!(a + b, Vec3::new(1.25, 2.0, -1.0));
    }

    #[test]
    fn add_is_commutative() {
        let samples = [
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(-7.5, 1e-3, 42.0),
            Vec3::zero(),
            Vec3::new(1e6, -1e6, 0.0),
        ];
        for a in samples {
            for b in samples {
                assert_eq!(a + b, b + a);
            }
        }
    }

    #[test]
    fn zero_is_identity() {
        let v = Vec3::new(3.0, 4.0, 5.0);
        assert_eq!(v + Vec3::zero(), v);
    }

    #[test]
    fn neg_cancels() {
        let v = Vec3::new(0.1, -0.1, 2.0);
        assert_eq!(v + -v, Vec3::zero());
    }

    #[test]
    fn add_assign_matches_add() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v += Vec3::new(0.5, 0.0, -1.0);
        assert_eq!(v, Vec3::new(1.5, 1.0, 0.0));
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(Vec3::new(0.0, 1.0, 2.0).is_finite());
        assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, 0.0, f32::INFINITY).is_finite());
    }
}
