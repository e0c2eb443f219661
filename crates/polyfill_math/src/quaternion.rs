use std::fmt::{Display, Formatter};
use std::ops::Mul;

use crate::matrix::Matrix4;
use crate::number_traits::Float;
use crate::vector::Vector3;

/// Rotation quaternion `w + xi + yj + zk`.
///
/// Rotation helpers assume a unit quaternion; call [`Quaternion::normalize`]
/// after accumulating products if drift matters.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// `axis` must be normalized, `angle` is in radians.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let half_angle = angle.half();
        let half_angle_sin = half_angle.sin();

        Self::new(
            axis.x * half_angle_sin,
            axis.y * half_angle_sin,
            axis.z * half_angle_sin,
            half_angle.cos(),
        )
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        let mut rotated = *v;
        rotated.apply_quaternion(self);
        rotated
    }

    #[rustfmt::skip]
    #[allow(clippy::similar_names)]
    pub fn rotation_matrix(&self) -> Matrix4<T> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx2 = x2 * x;
        let xy2 = x2 * y;
        let xz2 = x2 * z;
        let yy2 = y2 * y;
        let yz2 = y2 * z;
        let zz2 = z2 * z;
        let wx2 = x2 * w;
        let wy2 = y2 * w;
        let wz2 = z2 * w;

        Matrix4::from_rows([
            [T::one() - yy2 - zz2, xy2 - wz2, xz2 + wy2, T::zero()],
            [xy2 + wz2, T::one() - xx2 - zz2, yz2 - wx2, T::zero()],
            [xz2 - wy2, yz2 + wx2, T::one() - xx2 - yy2, T::zero()],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    pub fn norm(&self) -> T {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalize(&mut self) -> &mut Self {
        let inverse_norm = self.norm().recip();
        self.x *= inverse_norm;
        self.y *= inverse_norm;
        self.z *= inverse_norm;
        self.w *= inverse_norm;
        self
    }

    pub fn normalized(&self) -> Self {
        let mut normalized_quaternion = *self;
        normalized_quaternion.normalize();
        normalized_quaternion
    }
}

impl<T> Default for Quaternion<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} + {} i + {} j + {} k)", self.w, self.x, self.y, self.z)
    }
}

/// Hamilton product. When rotating, `a * b` applies `b` first.
impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (x1, y1, z1, w1) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2, w2) = (rhs.x, rhs.y, rhs.z, rhs.w);

        Quaternion::new(
            x1 * w2 + y1 * z2 - z1 * y2 + w1 * x2,
            y1 * w2 + z1 * x2 + w1 * y2 - x1 * z2,
            z1 * w2 + w1 * z2 + x1 * y2 - y1 * x2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}
