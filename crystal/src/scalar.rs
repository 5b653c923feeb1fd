//! Numeric identities the generic vector constructors are bounded on.

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Abs {
    type Output;

    fn abs(&self) -> Self::Output;
}

macro_rules! impl_signed {
    ( $( $num:ty )+ ) => {
        $(
            impl Zero for $num {
                fn zero() -> Self {
                    0 as $num
                }
            }

            impl One for $num {
                fn one() -> Self {
                    1 as $num
                }
            }

            impl Abs for $num {
                type Output = Self;

                fn abs(&self) -> Self::Output {
                    (*self).abs()
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ( $( $num:ty )+ ) => {
        $(
            impl Zero for $num {
                fn zero() -> Self {
                    0
                }
            }

            impl One for $num {
                fn one() -> Self {
                    1
                }
            }

            impl Abs for $num {
                type Output = Self;

                fn abs(&self) -> Self::Output {
                    *self
                }
            }
        )+
    };
}

impl_signed! { i32 i64 f32 f64 }
impl_unsigned! { u32 u64 usize }
