use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::trace;

use crate::matrix::Matrix4;
use crate::number_traits::{Float, Zero};
use crate::quaternion::Quaternion;

pub type Vector3f = Vector3<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f64> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }

            /// Overwrites every component.
            pub fn set(&mut self, $($dim: T),*) -> &mut Self {
                $(self.$dim = $dim;)*
                self
            }
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            /// Copies every component of `other` into `self`.
            pub fn copy(&mut self, other: &Self) -> &mut Self {
                $(self.$dim = other.$dim;)*
                self
            }
        }

        impl<T> $name<T>
        where
            T: Float,
        {
            /// Euclidean norm.
            pub fn length(&self) -> T {
                let mut squared_length = T::zero();
                $(squared_length += self.$dim * self.$dim;)*
                squared_length.sqrt()
            }

            pub fn multiply_scalar(&mut self, scalar: T) -> &mut Self {
                $(self.$dim *= scalar;)*
                self
            }

            /// Scales the vector to unit length. A vector of length exactly zero
            /// becomes the zero vector instead of NaN.
            pub fn normalize(&mut self) -> &mut Self {
                let length = self.length();
                if length == T::zero() {
                    trace!("Normalizing a zero-length vector, result is the zero vector");
                    $(self.$dim = T::zero();)*
                    return self;
                }

                self.multiply_scalar(length.recip())
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector3: "({}, {}, {})", (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector3<T>
where
    T: Zero,
{
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    /// Rotates the vector by a unit quaternion, computing `q * v * conj(q)`.
    /// For a non-unit `q` the result is also scaled by `|q|²`.
    #[allow(clippy::similar_names)]
    pub fn apply_quaternion(&mut self, q: &Quaternion<T>) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * conj(q)
        self.x = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        self.y = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        self.z = iz * qw + iw * -qz + ix * -qy - iy * -qx;
        self
    }

    /// Transforms the vector as the homogeneous point `(x, y, z, 1)` and divides
    /// the result by its `w` component.
    ///
    /// A matrix whose bottom row maps the point to `w == 0` is not rejected:
    /// the components become infinite or NaN.
    pub fn apply_matrix4(&mut self, matrix: &Matrix4<T>) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = matrix.as_column_major();

        let w = e[3] * x + e[7] * y + e[11] * z + e[15];
        if w == T::zero() {
            trace!("Projecting {self} through a matrix that yields w = 0");
        }
        let inverse_w = w.recip();

        self.x = (e[0] * x + e[4] * y + e[8] * z + e[12]) * inverse_w;
        self.y = (e[1] * x + e[5] * y + e[9] * z + e[13]) * inverse_w;
        self.z = (e[2] * x + e[6] * y + e[10] * z + e[14]) * inverse_w;
        self
    }

    /// Sets `self` to `a × b`.
    pub fn cross_vectors(&mut self, a: &Vector3<T>, b: &Vector3<T>) -> &mut Self {
        let (ax, ay, az) = (a.x, a.y, a.z);
        let (bx, by, bz) = (b.x, b.y, b.z);

        self.x = ay * bz - az * by;
        self.y = az * bx - ax * bz;
        self.z = ax * by - ay * bx;
        self
    }

    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        let mut cross = Vector3::zero();
        cross.cross_vectors(self, other);
        cross
    }
}

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}
