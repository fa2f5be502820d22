//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Mul, Neg, Sub},
};

/// Two-dimensional vector used for both points and velocities.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector {
    x: f64,
    y: f64,
}

pub type Position = Vector;
pub type Velocity = Vector;

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        (*self - position).length()
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn rotate_vector(&self, angle: Angle) -> Vector {
        Vector::new(
            self.x * angle.0.cos() - self.y * angle.0.sin(),
            self.x * angle.0.sin() + self.y * angle.0.cos(),
        )
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    pub fn normalized(&self) -> Option<Vector> {
        let length = self.length();
        if length > f64::EPSILON && length.is_finite() {
            Some(*self * length.recip())
        } else {
            None
        }
    }

    /// Same direction with the given length. The zero vector stays zero.
    pub fn with_length(&self, length: f64) -> Vector {
        self.normalized().map_or(Vector::ZERO, |unit| unit * length)
    }

    /// Mirror image about the line perpendicular to `normal`. The sign of `normal` does not
    /// matter.
    pub fn reflect(&self, normal: Vector) -> Vector {
        match normal.normalized() {
            Some(n) => *self - n * (2.0 * self.dot(n)),
            None => *self,
        }
    }

    /// Direction of the vector, `None` for the zero vector.
    pub fn angle(&self) -> Option<Angle> {
        self.normalized().map(|_| Angle::new(self.y.atan2(self.x)))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) + 360.0) % 360.0
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Angle> for f32 {
    fn from(value: Angle) -> Self {
        value.0 as f32
    }
}
