use std::sync::Arc;

use super::configuration::Configuration;
use super::container::Container;
use super::header::ConfigurationHeader;
use crate::metrics;

/// All configurations of one [`Container`] that share a header, in file
/// order.
///
/// Sections are views produced by [`crate::group_into_sections`]; they own
/// no configuration data.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub source: &'a Container,
    pub header: Arc<ConfigurationHeader>,
    pub configurations: Vec<&'a Configuration>,
}

impl<'a> Section<'a> {
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

    #[inline]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.configurations.iter().map(|c| c.energy)
    }

    pub fn pressures(&self) -> impl Iterator<Item = f64> + '_ {
        self.configurations
            .iter()
            .map(|c| c.stress.mechanical_pressure())
    }

    /// Half the shortest distance from any atom to its own nearest periodic
    /// image, minimised over the section.
    ///
    /// Configurations without a 3×3 lattice are skipped; `None` if none has
    /// one.
    pub fn non_periodic_radius(&self) -> Option<f64> {
        self.configurations
            .iter()
            .filter_map(|c| c.lattice())
            .map(|lattice| metrics::non_periodic_radius(&lattice))
            .min_by(f64::total_cmp)
    }
}
