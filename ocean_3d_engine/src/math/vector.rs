/// Vector - a very minimal 3-component vector.
///
/// Values are immutable by convention: every operation returns a new
/// `Vector`. `normal()` of a zero vector yields NaN components.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};
use glam::Vec3;
use crate::error::{Error, Result};

/// Three ordered `f32` components (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build a vector from a slice, which must hold exactly 3 values.
    pub fn from_slice(elements: &[f32]) -> Result<Self> {
        match elements {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(Error::InvalidVectorLength(elements.len())),
        }
    }

    pub fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    pub fn subtract(self, v: Vector) -> Vector {
        Vector::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    pub fn negate(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }

    pub fn scale(self, s: f32) -> Vector {
        Vector::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(self, v: Vector) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    pub fn cross(self, v: Vector) -> Vector {
        Vector::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Euclidean norm.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Not guarded against zero length.
    pub fn normal(self) -> Vector {
        let len = self.length();
        Vector::new(self.x / len, self.y / len, self.z / len)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

// ===== OPERATORS =====

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector index out of range: {}", index),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{},{}>", self.x, self.y, self.z)
    }
}

// ===== CONVERSIONS =====

impl From<[f32; 3]> for Vector {
    fn from(v: [f32; 3]) -> Self {
        Vector::new(v[0], v[1], v[2])
    }
}

impl From<Vector> for [f32; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vector {
    type Error = Error;

    fn try_from(elements: &[f32]) -> Result<Self> {
        Vector::from_slice(elements)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vec3 {
    fn from(v: Vector) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
