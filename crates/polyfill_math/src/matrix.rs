use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::MathError;
use crate::number_traits::{Float, NumericOps, One, Zero};
use crate::vector::{Vector3, Vector4};

pub type Matrix4f = Matrix4<f32>;

/// 4x4 matrix stored in column-major order.
///
/// Element `(row, col)` lives at flat index `col * 4 + row`: indices `0..4`
/// hold the first column and the translation of an affine transform sits at
/// indices 12, 13 and 14. Indexing with `matrix[col]` yields a column slice,
/// so `matrix[col][row]` addresses a single element.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4<T = f64> {
    values: [T; 16],
}

impl<T> Debug for Matrix4<T>
where
    T: Copy + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for row in 0..Self::ROWS {
            write!(f, "\t")?;
            for col in 0..Self::COLS {
                write!(f, "{}, ", self.element(row, col))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    pub const fn from_column_major(values: [T; 16]) -> Self {
        Self { values }
    }

    pub const fn as_column_major(&self) -> &[T; 16] {
        &self.values
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    /// Builds a matrix from rows as they would be written on paper.
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        let values = std::array::from_fn(|i| rows[i % Self::ROWS][i / Self::ROWS]);
        Self { values }
    }

    pub fn element(&self, row: usize, col: usize) -> T {
        self.values[col * Self::ROWS + row]
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    #[rustfmt::skip]
    pub fn new_translation(translation: &Vector3<T>) -> Self {
        Self::from_rows([
            [T::one(), T::zero(), T::zero(), translation.x],
            [T::zero(), T::one(), T::zero(), translation.y],
            [T::zero(), T::zero(), T::one(), translation.z],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    pub fn new_scale_uniform(scale: T) -> Self {
        Self::new_scale(&Vector3::new(scale, scale, scale))
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        Self::from_rows([
            [scale.x, T::zero(), T::zero(), T::zero()],
            [T::zero(), scale.y, T::zero(), T::zero()],
            [T::zero(), T::zero(), scale.z, T::zero()],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    /// Perspective projection, `fov_y` in degrees.
    pub fn new_perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let top = near * fov_y.to_radians().half().tan();
        let bottom = -top;
        let right = top * aspect;
        let left = -right;
        Self::new_frustum(left, right, bottom, top, near, far)
    }

    /// OpenGL style frustum: the camera looks down -Z and the view volume maps
    /// to the `[-1, 1]` cube.
    #[rustfmt::skip]
    pub fn new_frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two_near = T::two() * near;
        Self::from_rows([
            [two_near / (right - left), T::zero(), (right + left) / (right - left), T::zero()],
            [T::zero(), two_near / (top - bottom), (top + bottom) / (top - bottom), T::zero()],
            [T::zero(), T::zero(), -(far + near) / (far - near), T::two() * far * near / (near - far)],
            [T::zero(), T::zero(), -T::one(), T::zero()],
        ])
    }

    #[must_use]
    pub fn transform_vec(&self, vec: &Vector4<T>) -> Vector4<T> {
        let row = |r: usize| {
            self.element(r, 0) * vec.x
                + self.element(r, 1) * vec.y
                + self.element(r, 2) * vec.z
                + self.element(r, 3) * vec.w
        };
        Vector4::new(row(0), row(1), row(2), row(3))
    }

    /// Transforms a point with perspective divide. See [`Vector3::apply_matrix4`].
    #[must_use]
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        let mut transformed = *point;
        transformed.apply_matrix4(self);
        transformed
    }
}

impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + NumericOps + Zero,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for col in 0..Self::COLS {
            for row in 0..Self::ROWS {
                let mut sum = T::zero();
                for k in 0..Self::COLS {
                    sum += self.element(row, k) * rhs.element(k, col);
                }
                values[col * Self::ROWS + row] = sum;
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + NumericOps + Zero,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Column access: `matrix[col][row]`.
impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, col: usize) -> &Self::Output {
        &self.values[col * Self::ROWS..(col + 1) * Self::ROWS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.values[col * Self::ROWS..(col + 1) * Self::ROWS]
    }
}

impl<T> From<[T; 16]> for Matrix4<T> {
    fn from(values: [T; 16]) -> Self {
        Self::from_column_major(values)
    }
}

impl<T> TryFrom<&[T]> for Matrix4<T>
where
    T: Copy,
{
    type Error = MathError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let values: [T; 16] = slice
            .try_into()
            .map_err(|_| MathError::InvalidMatrixLength(slice.len()))?;
        Ok(Self::from_column_major(values))
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: Copy + One + Zero {
    fn identity() -> Self {
        Self::from_rows([
            [T::one(), T::zero(), T::zero(), T::zero()],
            [T::zero(), T::one(), T::zero(), T::zero()],
            [T::zero(), T::zero(), T::one(), T::zero()],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }
}
