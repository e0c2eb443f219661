use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Two {
    fn two() -> Self;
}

macro_rules! impl_constant {
    ($trait_name:ident :: $method:ident => $($ty:ty = $value:expr),* $(,)?) => {
        $(
            impl $trait_name for $ty {
                fn $method() -> Self {
                    $value
                }
            }
        )*
    };
}

impl_constant!(Zero::zero => i32 = 0, f32 = 0.0, f64 = 0.0);
impl_constant!(One::one => i32 = 1, f32 = 1.0, f64 = 1.0);
impl_constant!(Two::two => f32 = 2.0, f64 = 2.0);

/// Arithmetic closed over `Self`, including the compound assignments used by
/// the in-place vector operations.
pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl<T> NumericOps for T where
    T: Add<Output = T>
        + AddAssign
        + Sub<Output = T>
        + SubAssign
        + Mul<Output = T>
        + MulAssign
        + Div<Output = T>
        + DivAssign
        + Neg<Output = T>
        + PartialOrd
{
}

/// Floating point scalar the vector, quaternion and matrix types are generic over.
pub trait Float: Display + Copy + Zero + One + Two + NumericOps {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn sqrt(self) -> Self;
    fn to_radians(self) -> Self;

    fn half(self) -> Self {
        self / Self::two()
    }

    fn recip(self) -> Self {
        Self::one() / self
    }
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }

                fn to_radians(self) -> Self {
                    <$ty>::to_radians(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);
