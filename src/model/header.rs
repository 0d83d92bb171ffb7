use std::collections::HashSet;
use std::iter;
use std::sync::Arc;

/// The structural signature of a configuration.
///
/// Two configurations with equal headers describe the same kind of system
/// (same name and the same atom-type composition in the same order) and end
/// up in the same [`Section`](super::section::Section).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigurationHeader {
    pub name: String,
    pub number_of_atom_types: usize,
    pub number_of_atoms: usize,
    pub number_of_atoms_per_type: Vec<(String, usize)>,
}

impl ConfigurationHeader {
    pub fn new(
        name: impl Into<String>,
        number_of_atom_types: usize,
        number_of_atoms: usize,
        number_of_atoms_per_type: Vec<(String, usize)>,
    ) -> Self {
        Self {
            name: name.into(),
            number_of_atom_types,
            number_of_atoms,
            number_of_atoms_per_type,
        }
    }

    /// Expands the `(type, count)` pairs into one type name per atom, in
    /// declaration order.
    ///
    /// For a consistent header the result has length
    /// [`number_of_atoms`](Self::number_of_atoms).
    pub fn type_lookup(&self) -> Vec<&str> {
        self.number_of_atoms_per_type
            .iter()
            .flat_map(|(name, count)| iter::repeat_n(name.as_str(), *count))
            .collect()
    }
}

/// Interning map for configuration headers.
///
/// Structurally equal headers are stored once and shared by every
/// configuration that carries them.
#[derive(Debug, Default)]
pub struct HeaderPool {
    headers: HashSet<Arc<ConfigurationHeader>>,
}

impl HeaderPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pooled instance equal to `candidate`, inserting it first
    /// if no such instance exists yet.
    pub fn intern(&mut self, candidate: ConfigurationHeader) -> Arc<ConfigurationHeader> {
        if let Some(existing) = self.headers.get(&candidate) {
            return Arc::clone(existing);
        }
        let shared = Arc::new(candidate);
        self.headers.insert(Arc::clone(&shared));
        shared
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
