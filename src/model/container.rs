use super::configuration::Configuration;

/// A reference to one atom of one configuration, both 1-based as written
/// in the file.
///
/// Indices are kept signed so that zero and negative references survive
/// parsing and are reported by [`crate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasisIndex {
    pub configuration: i64,
    pub atom: i64,
}

impl BasisIndex {
    pub fn new(configuration: i64, atom: i64) -> Self {
        Self {
            configuration,
            atom,
        }
    }
}

/// The atoms of one atom type selected as the ML training basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisSet {
    pub name: String,
    pub indices: Vec<BasisIndex>,
}

impl BasisSet {
    pub fn new(name: impl Into<String>, indices: Vec<BasisIndex>) -> Self {
        Self {
            name: name.into(),
            indices,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// The complete contents of one MLAB file.
///
/// The declared totals are stored exactly as written; [`crate::validate`]
/// checks them against the configurations. `reference_energies`,
/// `atomic_masses` and `numbers_of_basis_sets` are aligned with
/// `atom_types`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    /// The leading version/comment line, usually `1.0 Version`.
    pub comment: Option<String>,
    pub configuration_count: usize,
    pub max_atom_types: usize,
    pub atom_types: Vec<String>,
    pub max_atoms_per_system: usize,
    pub max_atoms_per_type: usize,
    pub reference_energies: Vec<f64>,
    pub atomic_masses: Vec<f64>,
    pub numbers_of_basis_sets: Vec<usize>,
    pub basis_sets: Vec<BasisSet>,
    pub configurations: Vec<Configuration>,
}

impl Container {
    /// Looks up a configuration by its 1-based index.
    pub fn configuration(&self, index: usize) -> Option<&Configuration> {
        index
            .checked_sub(1)
            .and_then(|i| self.configurations.get(i))
    }

    pub fn atom_type_position(&self, name: &str) -> Option<usize> {
        self.atom_types.iter().position(|t| t == name)
    }

    pub fn basis_set(&self, name: &str) -> Option<&BasisSet> {
        self.basis_sets.iter().find(|b| b.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
