use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::{
    norm::Normed,
    scalar::{One, Zero},
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn unit_x() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot_product(&self, rhs: &Self) -> T
    where
        T: Copy + Mul<T, Output = T> + Add<T, Output = T>,
    {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross_product(&self, rhs: &Self) -> Self
    where
        T: Copy + Mul<T, Output = T> + Sub<T, Output = T>,
    {
        let s1 = self.y * rhs.z - self.z * rhs.y;
        let s2 = self.z * rhs.x - self.x * rhs.z;
        let s3 = self.x * rhs.y - self.y * rhs.x;

        Vec3::new(s1, s2, s3)
    }

    /// Applies `f` to every component.
    pub fn map<U, F>(self, mut f: F) -> Vec3<U>
    where
        F: FnMut(T) -> U,
    {
        Vec3::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Vec3<f32> {
    pub fn component_min(&self, rhs: &Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    pub fn component_max(&self, rhs: &Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Returns the vector scaled to length one, or `None` for a (near) zero vector.
    pub fn normalize(mut self) -> Option<Self> {
        let norm = self.norm();
        if norm <= f32::EPSILON || !norm.is_finite() {
            return None;
        }
        self.unscale_mut(norm);
        Some(self)
    }
}

impl Normed for Vec3<f32> {
    type Norm = f32;

    fn norm(&self) -> Self::Norm {
        self.norm_squared().sqrt()
    }

    fn norm_squared(&self) -> Self::Norm {
        self.dot_product(self)
    }

    fn scale_mut(&mut self, n: Self::Norm) {
        self.x *= n;
        self.y *= n;
        self.z *= n;
    }

    fn unscale_mut(&mut self, n: Self::Norm) {
        self.x /= n;
        self.y /= n;
        self.z /= n;
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Add<T, Output = T>> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<T, Output = T>> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: AddAssign<T>> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Copy + Mul<T, Output = T>> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::assert_vec3_eq;

    use super::*;

    #[test]
    fn vec_dot_product() {
        let cv1: Vec3<f32> = [1.0, 1.0, 1.0].into();
        let cv2: Vec3<f32> = [1.0, 1.0, 1.0].into();

        assert_eq!(cv1.dot_product(&cv2), 3.0);
    }

    #[test]
    fn vec3_cross_product() {
        let a: Vec3<f32> = Vec3::new(1.0, 2.0, -3.0);
        let b: Vec3<f32> = Vec3::new(-6.0, 7.0, 0.2);

        assert_vec3_eq(&a.cross_product(&b), &Vec3::new(21.4, 17.8, 19.0));
        assert_eq!(
            Vec3::<f32>::unit_x().cross_product(&Vec3::unit_y()),
            Vec3::unit_z()
        );
    }

    #[test]
    fn vec3_normalize() {
        let vec3: Vec3<f32> = Vec3::new(12.1, 234.1, -1234.5);
        let should = Vec3::new(
            0.00962947543657918,
            0.1863024958432385,
            -0.9824452418559502,
        );

        assert_vec3_eq(&vec3.normalize().unwrap(), &should);
        assert_eq!(Vec3::<f32>::zero().normalize(), None);
    }

    #[test]
    fn vec3_component_bounds() {
        let a: Vec3<f32> = Vec3::new(1.0, -2.0, 3.0);
        let b: Vec3<f32> = Vec3::new(-1.0, 2.0, 3.5);

        assert_eq!(a.component_min(&b), Vec3::new(-1.0, -2.0, 3.0));
        assert_eq!(a.component_max(&b), Vec3::new(1.0, 2.0, 3.5));
    }
}
