use std::fmt;

use crate::{scalar::Abs, vector::Vec3};

#[derive(Debug, Clone)]
pub struct VecCmp<T> {
    error_margin: T,
}

impl<T> VecCmp<T>
where
    T: fmt::Debug + Copy + PartialOrd + Abs<Output = T> + std::ops::Sub<T, Output = T>,
{
    pub fn eq_margin(&self, is: &Vec3<T>, should: &Vec3<T>, error_margin: T) {
        for (idx, (v1, v2)) in is
            .to_array()
            .iter()
            .zip(should.to_array().iter())
            .enumerate()
        {
            let diff_abs = (*v1 - *v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {:?} should: {:?} (+- {:?}) @ {}",
                is,
                should,
                error_margin,
                idx
            );
        }
    }

    pub fn eq(&self, is: &Vec3<T>, should: &Vec3<T>) {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl VecCmp<f32> {
    pub const DEFAULT: Self = Self { error_margin: 1e-5 };
}

pub fn assert_vec3_eq(is: &Vec3<f32>, should: &Vec3<f32>) {
    VecCmp::<f32>::DEFAULT.eq(is, should)
}
