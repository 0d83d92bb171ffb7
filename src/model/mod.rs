//! Data structures describing the contents of an MLAB file.
//!
//! - [`container`] – The parsed file: declared totals, per-type tables,
//!   basis sets and configurations.
//! - [`configuration`] – One snapshot with its lattice, positions, forces,
//!   energy, stress and optional charges.
//! - [`header`] – The structural signature shared by identical
//!   configurations, and the pool that interns it.
//! - [`section`] – Views over configurations sharing one header.
//! - [`matrix`] – Dense row-major storage for the numeric blocks.
//!
//! Everything here is built once by [`crate::io::parse`] and never mutated
//! afterwards.

pub mod configuration;
pub mod container;
pub mod header;
pub mod matrix;
pub mod section;
