//! Literal section captions of the MLAB format.
//!
//! The validator reports problems using the same captions, so they double
//! as field names.

pub const NUMBER_OF_CONFIGURATIONS: &str = "The number of configurations";
pub const MAX_ATOM_TYPES: &str = "The maximum number of atom type";
pub const ATOM_TYPES: &str = "The atom types in the data file";
pub const MAX_ATOMS_PER_SYSTEM: &str = "The maximum number of atoms per system";
pub const MAX_ATOMS_PER_TYPE: &str = "The maximum number of atoms per atom type";
pub const REFERENCE_ENERGIES: &str = "Reference atomic energy (eV)";
pub const ATOMIC_MASSES: &str = "Atomic mass";
pub const NUMBERS_OF_BASIS_SETS: &str = "The numbers of basis sets per atom type";

pub const BASIS_SET: &str = "Basis set for";
pub const CONFIGURATION: &str = "Configuration num.";

pub const SYSTEM_NAME: &str = "System name";
pub const NUMBER_OF_ATOM_TYPES: &str = "The number of atom types";
pub const NUMBER_OF_ATOMS: &str = "The number of atoms";
pub const ATOMS_PER_TYPE: &str = "Atom types and atom numbers";
pub const CTIFOR: &str = "CTIFOR";
pub const LATTICE_VECTORS: &str = "Primitive lattice vectors (ang.)";
pub const POSITIONS: &str = "Atomic positions (ang.)";
pub const TOTAL_ENERGY: &str = "Total energy (eV)";
pub const FORCES: &str = "Forces (eV ang.^-1)";
pub const STRESS: &str = "Stress (kbar)";
pub const STRESS_DIAGONAL: &str = "XX YY ZZ";
pub const STRESS_OFF_DIAGONAL: &str = "XY YZ ZX";
pub const CHARGES: &str = "Charges (e)";
