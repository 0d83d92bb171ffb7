//! A pure Rust reader and consistency checker for MLAB files, the
//! machine-learned force field training data written by VASP (`ML_AB`).
//!
//! An MLAB file holds a preamble of declared totals, the basis sets chosen per
//! atom type, and a list of configurations (atomic structures with lattice,
//! positions, energy, forces and stress). This crate reads such a file into a
//! typed [`Container`], checks that the declared totals and cross references
//! agree with the data, and groups configurations of identical structure into
//! [`Section`]s for downstream analysis.
//!
//! # Features
//!
//! - **Strict parsing** – Every grammar or shape problem is reported with the
//!   source line range and raw text of the offending block
//! - **Validation** – Declared counts, maxima, atom-type lists and basis-set
//!   references are re-derived from the configurations and compared
//! - **Grouping** – Configurations sharing a header form one [`Section`],
//!   in first-seen order
//! - **Metrics** – Per-configuration energy per atom, pressure, lattice
//!   lengths and cell volume
//!
//! # Quick Start
//!
//! ```
//! use mlab::{group_into_sections, parse, validate};
//! use std::io::Cursor;
//!
//! let text = "\
//! 1.0 Version
//! **************************************************
//!      The number of configurations
//! --------------------------------------------------
//!           1
//! **************************************************
//!      The maximum number of atom type
//! --------------------------------------------------
//!        1
//! **************************************************
//!      The atom types in the data file
//! --------------------------------------------------
//!      H
//! **************************************************
//!      The maximum number of atoms per system
//! --------------------------------------------------
//!              1
//! **************************************************
//!      The maximum number of atoms per atom type
//! --------------------------------------------------
//!              1
//! **************************************************
//!      Reference atomic energy (eV)
//! --------------------------------------------------
//!    0.0
//! **************************************************
//!      Atomic mass
//! --------------------------------------------------
//!    1.008
//! **************************************************
//!      The numbers of basis sets per atom type
//! --------------------------------------------------
//!        1
//! **************************************************
//!      Basis set for H
//! --------------------------------------------------
//!       1      1
//! **************************************************
//!      Configuration num.      1
//! ==================================================
//!      System name
//! --------------------------------------------------
//!      hydrogen
//! ==================================================
//!      The number of atom types
//! --------------------------------------------------
//!        1
//! ==================================================
//!      The number of atoms
//! --------------------------------------------------
//!          1
//! **************************************************
//!      Atom types and atom numbers
//! --------------------------------------------------
//!      H       1
//! ==================================================
//!      Primitive lattice vectors (ang.)
//! --------------------------------------------------
//!    5.0 0.0 0.0
//!    0.0 5.0 0.0
//!    0.0 0.0 5.0
//! ==================================================
//!      Atomic positions (ang.)
//! --------------------------------------------------
//!    0.0 0.0 0.0
//! ==================================================
//!      Total energy (eV)
//! --------------------------------------------------
//!   -1.1
//! ==================================================
//!      Forces (eV ang.^-1)
//! --------------------------------------------------
//!    0.0 0.0 0.0
//! ==================================================
//!      Stress (kbar)
//! --------------------------------------------------
//!      XX YY ZZ
//! --------------------------------------------------
//!    0.0 0.0 0.0
//! --------------------------------------------------
//!      XY YZ ZX
//! --------------------------------------------------
//!    0.0 0.0 0.0
//! ";
//!
//! let container = parse(Cursor::new(text))?;
//! validate(&container)?;
//!
//! let sections = group_into_sections(&container);
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].name(), "hydrogen");
//! assert_eq!(sections[0].non_periodic_radius(), Some(2.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – Block reader, typed decoders and the [`parse`] entry point
//! - [`validate`](mod@validate) – Semantic consistency checks
//! - [`metrics`] – Physical summaries of single configurations
//!
//! # Data Types
//!
//! - [`Container`] – The complete contents of one file
//! - [`Configuration`] – One atomic structure with its reference data
//! - [`ConfigurationHeader`] – Structural signature shared by configurations
//! - [`BasisSet`] / [`BasisIndex`] – Training basis per atom type
//! - [`Section`] – Configurations sharing one header
//! - [`Matrix`] – Dense row-major matrix used for lattices, positions and
//!   forces

mod group;
mod model;

pub mod io;
pub mod metrics;
pub mod validate;

pub use model::configuration::{Configuration, StressTensor};
pub use model::container::{BasisIndex, BasisSet, Container};
pub use model::header::{ConfigurationHeader, HeaderPool};
pub use model::matrix::Matrix;
pub use model::section::Section;

pub use group::group_into_sections;
pub use io::{parse, read_file};
pub use validate::validate;

pub use io::Error as ParseError;
pub use validate::Error as ValidationError;
