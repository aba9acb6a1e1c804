//! Small 2D vector type with shader semantics
//!
//! Rounding and fractional parts follow GLSL/WGSL (`fract(x) = x - floor(x)`),
//! not Rust's sign-preserving `f32::fract`.

use std::ops::{Add, Div, Mul, Sub};

/// One full turn in radians
pub const FULL_ROTATION: f32 = std::f32::consts::TAU;

/// Fractional part in shader semantics, always in [0, 1] for finite input
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// 2D float vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const HALF: Self = Self::new(0.5, 0.5);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared euclidean length
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Nearest integer lattice point, halves rounding up (`floor(v + 0.5)`)
    pub fn round_half_up(self) -> Self {
        (self + Self::HALF).floor()
    }

    pub fn fract(self) -> Self {
        Self::new(fract(self.x), fract(self.y))
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}
