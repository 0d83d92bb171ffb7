use std::sync::Arc;

use super::header::ConfigurationHeader;
use super::matrix::Matrix;

/// Symmetric stress tensor in kbar, in the file's `XX YY ZZ` / `XY YZ ZX`
/// component order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StressTensor {
    pub xx: f64,
    pub yy: f64,
    pub zz: f64,
    pub xy: f64,
    pub yz: f64,
    pub zx: f64,
}

impl StressTensor {
    pub fn new(diagonal: [f64; 3], off_diagonal: [f64; 3]) -> Self {
        let [xx, yy, zz] = diagonal;
        let [xy, yz, zx] = off_diagonal;
        Self {
            xx,
            yy,
            zz,
            xy,
            yz,
            zx,
        }
    }

    /// Mechanical pressure, `-(xx + yy + zz) / 3`.
    #[inline]
    pub fn mechanical_pressure(&self) -> f64 {
        -(self.xx + self.yy + self.zz) / 3.0
    }
}

/// One atomic-structure snapshot.
///
/// The header is shared with every other configuration of identical
/// structure; see [`HeaderPool`](super::header::HeaderPool).
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// 1-based position in the file.
    pub index: usize,
    pub header: Arc<ConfigurationHeader>,
    pub ctifor: Option<f64>,
    /// Primitive lattice vectors (Å), one per row.
    pub lattice_vectors: Matrix<f64>,
    /// Atomic positions (Å), one atom per row.
    pub positions: Matrix<f64>,
    /// Total energy (eV).
    pub energy: f64,
    /// Forces (eV/Å), one atom per row.
    pub forces: Matrix<f64>,
    pub stress: StressTensor,
    /// Atomic charges (e), one per atom.
    pub charges: Option<Vec<f64>>,
}

impl Configuration {
    #[inline]
    pub fn name(&self) -> &str {
        &self.header.name
    }

    #[inline]
    pub fn number_of_atom_types(&self) -> usize {
        self.header.number_of_atom_types
    }

    #[inline]
    pub fn number_of_atoms(&self) -> usize {
        self.header.number_of_atoms
    }

    #[inline]
    pub fn number_of_atoms_per_type(&self) -> &[(String, usize)] {
        &self.header.number_of_atoms_per_type
    }

    pub fn type_lookup(&self) -> Vec<&str> {
        self.header.type_lookup()
    }

    /// Lattice vectors as rows of a 3×3 array, if they have that shape.
    pub fn lattice(&self) -> Option<[[f64; 3]; 3]> {
        self.lattice_vectors.to_array3x3()
    }

    #[inline]
    pub fn has_charges(&self) -> bool {
        self.charges.is_some()
    }
}
