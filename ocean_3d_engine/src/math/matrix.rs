/// Matrix - minimal 4x4 matrix intended for graphics operations.
///
/// Constructors take elements in row-major order (as written on paper), but
/// storage is column-major so `as_slice()` can be uploaded to a shader
/// uniform untransposed. Instances are immutable by convention: every
/// transform returns a new `Matrix`.
///
/// `translate`, `rotate`, `scale`, `perspective` and `look_at` build the
/// classic fixed-function matrix and right-multiply it, so a chain reads in
/// the same order as the equivalent GL call sequence.

use std::ops::Mul;
use glam::Mat4;
use crate::error::{Error, Result};
use super::Vector;

/// 4x4 `f32` matrix, column-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    elements: [f32; 16],
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Matrix = Matrix::new([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Build a matrix from 16 elements in row-major order.
    pub const fn new(rows: [f32; 16]) -> Self {
        let mut elements = [0.0; 16];
        let mut r = 0;
        while r < 4 {
            let mut c = 0;
            while c < 4 {
                elements[c * 4 + r] = rows[r * 4 + c];
                c += 1;
            }
            r += 1;
        }
        Self { elements }
    }

    /// Build a matrix from a row-major slice, which must hold exactly 16 values.
    pub fn from_row_major(rows: &[f32]) -> Result<Self> {
        let rows: [f32; 16] = rows
            .try_into()
            .map_err(|_| Error::InvalidMatrixLength(rows.len()))?;
        Ok(Self::new(rows))
    }

    /// All-zero matrix.
    pub const fn zero() -> Self {
        Self { elements: [0.0; 16] }
    }

    /// Build a matrix directly from column-major storage.
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.elements[column * 4 + row]
    }

    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        self.elements[column * 4 + row] = value;
    }

    /// Column-major elements, ready for `uniformMatrix4fv`.
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.elements
    }

    /// Standard matrix product `self * right`.
    pub fn multiply(&self, right: &Matrix) -> Matrix {
        let mut result = Matrix::zero();
        for i in 0..4 {
            for j in 0..4 {
                let mut v = 0.0;
                for k in 0..4 {
                    v += self.get(i, k) * right.get(k, j);
                }
                result.set(i, j, v);
            }
        }
        result
    }

    /// Based on glTranslate
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Matrix {
        let translation = Matrix::new([
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.multiply(&translation)
    }

    /// Based on glRotate. `(x, y, z)` must already be a unit axis; it is not
    /// normalized here.
    pub fn rotate(&self, angle: f32, x: f32, y: f32, z: f32) -> Matrix {
        let c = angle.cos();
        let s = angle.sin();
        let rotation = Matrix::new([
            x * x * (1.0 - c) + c,     x * y * (1.0 - c) - z * s, x * z * (1.0 - c) + y * s, 0.0,
            y * x * (1.0 - c) + z * s, y * y * (1.0 - c) + c,     y * z * (1.0 - c) - x * s, 0.0,
            x * z * (1.0 - c) - y * s, y * z * (1.0 - c) + x * s, z * z * (1.0 - c) + c,     0.0,
            0.0,                       0.0,                       0.0,                       1.0,
        ]);
        self.multiply(&rotation)
    }

    /// Based on glScale
    pub fn scale(&self, x: f32, y: f32, z: f32) -> Matrix {
        let scale = Matrix::new([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.multiply(&scale)
    }

    /// Based on gluPerspective. `fovy` is in radians.
    pub fn perspective(&self, fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix {
        let f = 1.0 / (fovy / 2.0).tan();
        let perspective = Matrix::new([
            f / aspect, 0.0, 0.0,                                0.0,
            0.0,        f,   0.0,                                0.0,
            0.0,        0.0, (z_near + z_far) / (z_near - z_far), (2.0 * z_far * z_near) / (z_near - z_far),
            0.0,        0.0, -1.0,                               0.0,
        ]);
        self.multiply(&perspective)
    }

    /// Based on gluLookAt
    pub fn look_at(&self, eye: Vector, center: Vector, up: Vector) -> Matrix {
        let f = center.subtract(eye).normal();
        let up = up.normal();
        let s = f.cross(up).normal();
        let u = s.cross(f);

        let look_at = Matrix::new([
            s.x,  s.y,  s.z,  0.0,
            u.x,  u.y,  u.z,  0.0,
            -f.x, -f.y, -f.z, 0.0,
            0.0,  0.0,  0.0,  1.0,
        ]);
        self.multiply(&look_at).translate(-eye.x, -eye.y, -eye.z)
    }

    /// Transform a point (w = 1) and drop the resulting w.
    pub fn transform_point(&self, p: Vector) -> Vector {
        let row = |r: usize| {
            self.get(r, 0) * p.x + self.get(r, 1) * p.y + self.get(r, 2) * p.z + self.get(r, 3)
        };
        Vector::new(row(0), row(1), row(2))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl TryFrom<&[f32]> for Matrix {
    type Error = Error;

    fn try_from(rows: &[f32]) -> Result<Self> {
        Matrix::from_row_major(rows)
    }
}

// ===== GLAM INTEROP =====

impl From<Matrix> for Mat4 {
    fn from(m: Matrix) -> Self {
        Mat4::from_cols_array(&m.elements)
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        Matrix::from_cols_array(m.to_cols_array())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
