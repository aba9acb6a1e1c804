//! Lattice hashes - deterministic pseudo-random values per lattice point
//!
//! Each hash is a pure function of the lattice coordinate: no seed, no state.
//! The constants are tuned for low periodicity over an integer lattice and
//! carry no other meaning.

use crate::math::{Vec2, fract};

/// Pseudo-random value in [0, 1] for a lattice coordinate
pub trait LatticeHash {
    fn hash(&self, cell: Vec2) -> f32;
}

/// Two-component hash used by the rigid variant
///
/// Only the x component seeds the rotation; the y component is kept so the
/// full seed vector can be inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorHash;

impl VectorHash {
    /// Full seed vector, both components in [0, 1]
    pub fn hash_vec(&self, cell: Vec2) -> Vec2 {
        let mut x = fract(cell.x * 0.1031);
        let mut y = fract(cell.y * 0.1030);
        let mut z = fract(cell.x * 0.0973);
        // Self-dot mixing couples both axes into every component
        let d = x * (y + 33.33) + y * (z + 33.33) + z * (x + 33.33);
        x += d;
        y += d;
        z += d;
        Vec2::new(fract((x + y) * z), fract((x + z) * y))
    }
}

impl LatticeHash for VectorHash {
    fn hash(&self, cell: Vec2) -> f32 {
        self.hash_vec(cell).x
    }
}

/// Scalar hash used by the warped variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarHash;

impl LatticeHash for ScalarHash {
    fn hash(&self, cell: Vec2) -> f32 {
        let mut x = fract(cell.x * 0.1031);
        let mut y = fract(cell.y * 0.1031);
        let mut z = fract(cell.x * 0.1031);
        let d = x * (y + 33.33) + y * (z + 33.33) + z * (x + 33.33);
        x += d;
        y += d;
        z += d;
        fract((x + y) * z)
    }
}

/// Runtime-selectable hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashKind {
    #[default]
    Vector,
    Scalar,
}

impl HashKind {
    /// Numeric tag used in the GPU uniform block
    pub fn as_u32(self) -> u32 {
        match self {
            HashKind::Vector => 0,
            HashKind::Scalar => 1,
        }
    }

    /// Inverse of [`HashKind::as_u32`]; unknown tags fall back to `Vector`
    pub fn from_u32(tag: u32) -> Self {
        match tag {
            1 => HashKind::Scalar,
            _ => HashKind::Vector,
        }
    }
}

impl LatticeHash for HashKind {
    fn hash(&self, cell: Vec2) -> f32 {
        match self {
            HashKind::Vector => VectorHash.hash(cell),
            HashKind::Scalar => ScalarHash.hash(cell),
        }
    }
}
