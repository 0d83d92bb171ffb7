//! Semantic checks over a parsed [`Container`].
//!
//! [`validate`] re-derives every declared total and cross reference from the
//! configurations themselves and stops at the first disagreement. Checks run
//! in a fixed order: file-wide totals, then each configuration, then the
//! basis sets. A failure therefore says nothing about the checks after it.

mod error;

pub use error::{Error, Scope};

use std::collections::HashSet;

use tracing::debug;

use crate::io::caption;
use crate::model::configuration::Configuration;
use crate::model::container::Container;

/// Checks that `container` is internally consistent.
pub fn validate(container: &Container) -> Result<(), Error> {
    check_totals(container)?;
    for (position, configuration) in container.configurations.iter().enumerate() {
        check_configuration(container, position + 1, configuration)?;
    }
    check_basis_sets(container)?;

    debug!(
        configurations = container.configurations.len(),
        atom_types = container.atom_types.len(),
        "validation passed"
    );
    Ok(())
}

fn check_totals(container: &Container) -> Result<(), Error> {
    let configurations = &container.configurations;

    if container.configuration_count != configurations.len() {
        return Err(Error::mismatch(
            Scope::File,
            caption::NUMBER_OF_CONFIGURATIONS,
            configurations.len(),
            container.configuration_count,
        ));
    }

    if container.max_atom_types != container.atom_types.len() {
        return Err(Error::mismatch(
            Scope::File,
            caption::MAX_ATOM_TYPES,
            container.atom_types.len(),
            container.max_atom_types,
        ));
    }

    let max_atoms = configurations
        .iter()
        .map(Configuration::number_of_atoms)
        .max()
        .unwrap_or(0);
    if container.max_atoms_per_system != max_atoms {
        return Err(Error::mismatch(
            Scope::File,
            caption::MAX_ATOMS_PER_SYSTEM,
            max_atoms,
            container.max_atoms_per_system,
        ));
    }

    let max_per_type = configurations
        .iter()
        .flat_map(|c| c.number_of_atoms_per_type().iter().map(|(_, count)| *count))
        .max()
        .unwrap_or(0);
    if container.max_atoms_per_type != max_per_type {
        return Err(Error::mismatch(
            Scope::File,
            caption::MAX_ATOMS_PER_TYPE,
            max_per_type,
            container.max_atoms_per_type,
        ));
    }

    if let Some(name) = first_duplicate(container.atom_types.iter().map(String::as_str)) {
        return Err(Error::Duplicate {
            scope: Scope::File,
            field: caption::ATOM_TYPES,
            name: name.to_owned(),
        });
    }

    let declared: HashSet<&str> = container.atom_types.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    for configuration in configurations {
        for (name, _) in configuration.number_of_atoms_per_type() {
            if !declared.contains(name.as_str()) {
                return Err(Error::Missing {
                    field: caption::ATOM_TYPES,
                    name: name.clone(),
                    reason: format!("seen in configuration {}", configuration.index),
                });
            }
            seen.insert(name.as_str());
        }
    }
    if let Some(name) = container
        .atom_types
        .iter()
        .find(|name| !seen.contains(name.as_str()))
    {
        return Err(Error::Unexpected {
            field: caption::ATOM_TYPES,
            name: name.clone(),
            reason: "not seen in any configuration".into(),
        });
    }

    let per_type_lists = [
        (caption::REFERENCE_ENERGIES, container.reference_energies.len()),
        (caption::ATOMIC_MASSES, container.atomic_masses.len()),
        (
            caption::NUMBERS_OF_BASIS_SETS,
            container.numbers_of_basis_sets.len(),
        ),
    ];
    for (field, len) in per_type_lists {
        if len != container.atom_types.len() {
            return Err(Error::mismatch(
                Scope::File,
                field,
                format!("{} entries", container.atom_types.len()),
                format!("{len} entries"),
            ));
        }
    }

    Ok(())
}

fn check_configuration(
    container: &Container,
    position: usize,
    configuration: &Configuration,
) -> Result<(), Error> {
    if configuration.index != position {
        return Err(Error::NonSequentialIndex {
            position,
            index: configuration.index,
        });
    }

    let scope = || Scope::Configuration(position);
    let per_type = configuration.number_of_atoms_per_type();

    if configuration.number_of_atom_types() != per_type.len() {
        return Err(Error::mismatch(
            scope(),
            caption::NUMBER_OF_ATOM_TYPES,
            per_type.len(),
            configuration.number_of_atom_types(),
        ));
    }

    if configuration.number_of_atom_types() > container.max_atom_types {
        return Err(Error::ExceedsMaximum {
            configuration: position,
            field: caption::NUMBER_OF_ATOM_TYPES,
            maximum: container.max_atom_types,
            actual: configuration.number_of_atom_types(),
        });
    }

    if let Some(name) = first_duplicate(per_type.iter().map(|(name, _)| name.as_str())) {
        return Err(Error::Duplicate {
            scope: scope(),
            field: caption::ATOMS_PER_TYPE,
            name: name.to_owned(),
        });
    }

    let Some(atoms) = per_type
        .iter()
        .try_fold(0usize, |sum, (_, count)| sum.checked_add(*count))
    else {
        return Err(Error::mismatch(
            scope(),
            caption::NUMBER_OF_ATOMS,
            "the sum of the atoms per type",
            format!("{}; the sum overflows", configuration.number_of_atoms()),
        ));
    };
    if configuration.number_of_atoms() != atoms {
        return Err(Error::mismatch(
            scope(),
            caption::NUMBER_OF_ATOMS,
            atoms,
            configuration.number_of_atoms(),
        ));
    }

    let matrices = [
        (caption::LATTICE_VECTORS, configuration.lattice_vectors.shape(), (3, 3)),
        (caption::POSITIONS, configuration.positions.shape(), (atoms, 3)),
        (caption::FORCES, configuration.forces.shape(), (atoms, 3)),
    ];
    for (field, (rows, cols), (expected_rows, expected_cols)) in matrices {
        if (rows, cols) != (expected_rows, expected_cols) {
            return Err(Error::mismatch(
                scope(),
                field,
                format!("{expected_rows}x{expected_cols}"),
                format!("{rows}x{cols}"),
            ));
        }
    }

    if let Some(charges) = &configuration.charges {
        if charges.len() != atoms {
            return Err(Error::mismatch(
                scope(),
                caption::CHARGES,
                format!("{atoms} entries"),
                format!("{} entries", charges.len()),
            ));
        }
    }

    Ok(())
}

fn check_basis_sets(container: &Container) -> Result<(), Error> {
    if let Some(name) = first_duplicate(container.basis_sets.iter().map(|b| b.name.as_str())) {
        return Err(Error::Duplicate {
            scope: Scope::File,
            field: caption::BASIS_SET,
            name: name.to_owned(),
        });
    }

    for basis_set in &container.basis_sets {
        if container.atom_type_position(&basis_set.name).is_none() {
            return Err(Error::Missing {
                field: caption::ATOM_TYPES,
                name: basis_set.name.clone(),
                reason: "but has basis set".into(),
            });
        }
    }

    for (atom_type, declared) in container
        .atom_types
        .iter()
        .zip(&container.numbers_of_basis_sets)
    {
        let Some(basis_set) = container.basis_set(atom_type) else {
            return Err(Error::Unexpected {
                field: caption::ATOM_TYPES,
                name: atom_type.clone(),
                reason: "but lacks basis set".into(),
            });
        };
        if basis_set.len() != *declared {
            return Err(Error::mismatch(
                Scope::BasisSet(atom_type.clone()),
                caption::NUMBERS_OF_BASIS_SETS,
                basis_set.len(),
                declared,
            ));
        }
    }

    for basis_set in &container.basis_sets {
        for (entry, index) in basis_set.indices.iter().enumerate() {
            let entry = entry + 1;
            let configuration = usize::try_from(index.configuration)
                .ok()
                .and_then(|i| container.configuration(i));
            let Some(configuration) = configuration else {
                return Err(Error::OutOfRange {
                    basis_set: basis_set.name.clone(),
                    entry,
                    target: "configuration",
                    maximum: container.configurations.len(),
                    actual: index.configuration,
                });
            };

            let types = configuration.type_lookup();
            let found = usize::try_from(index.atom)
                .ok()
                .and_then(|atom| atom.checked_sub(1))
                .and_then(|i| types.get(i).map(|name| (i + 1, name)));
            let Some((atom, actual)) = found else {
                return Err(Error::OutOfRange {
                    basis_set: basis_set.name.clone(),
                    entry,
                    target: "atom",
                    maximum: configuration.number_of_atoms(),
                    actual: index.atom,
                });
            };

            if *actual != basis_set.name {
                return Err(Error::AtomTypeMismatch {
                    basis_set: basis_set.name.clone(),
                    entry,
                    configuration: configuration.index,
                    atom,
                    actual: (*actual).to_owned(),
                });
            }
        }
    }

    Ok(())
}

fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::configuration::StressTensor;
    use crate::model::container::{BasisIndex, BasisSet};
    use crate::model::header::ConfigurationHeader;
    use crate::model::matrix::Matrix;
    use std::sync::Arc;

    fn rows(n: usize, value: f64) -> Matrix<f64> {
        Matrix::from_rows(vec![vec![value; 3]; n]).unwrap()
    }

    fn identity() -> Matrix<f64> {
        Matrix::from_rows(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap()
    }

    fn configuration(index: usize, header: &Arc<ConfigurationHeader>) -> Configuration {
        let atoms = header.number_of_atoms;
        Configuration {
            index,
            header: Arc::clone(header),
            ctifor: None,
            lattice_vectors: identity(),
            positions: rows(atoms, 0.5),
            energy: -1.0,
            forces: rows(atoms, 0.0),
            stress: StressTensor::default(),
            charges: None,
        }
    }

    /// Two configurations: a 2-atom carbon cell and a 3-atom CO2-like cell.
    fn consistent() -> Container {
        let carbon = Arc::new(ConfigurationHeader::new(
            "carbon",
            1,
            2,
            vec![("C".into(), 2)],
        ));
        let dioxide = Arc::new(ConfigurationHeader::new(
            "dioxide",
            2,
            3,
            vec![("C".into(), 1), ("O".into(), 2)],
        ));

        Container {
            comment: None,
            configuration_count: 2,
            max_atom_types: 2,
            atom_types: vec!["C".into(), "O".into()],
            max_atoms_per_system: 3,
            max_atoms_per_type: 2,
            reference_energies: vec![0.0, 0.0],
            atomic_masses: vec![12.011, 15.999],
            numbers_of_basis_sets: vec![2, 1],
            basis_sets: vec![
                BasisSet::new("C", vec![BasisIndex::new(1, 2), BasisIndex::new(2, 1)]),
                BasisSet::new("O", vec![BasisIndex::new(2, 3)]),
            ],
            configurations: vec![configuration(1, &carbon), configuration(2, &dioxide)],
        }
    }

    #[test]
    fn consistent_container_passes() {
        assert_eq!(validate(&consistent()), Ok(()));
    }

    #[test]
    fn minimal_single_type_container_passes() {
        let header = Arc::new(ConfigurationHeader::new("C", 1, 1, vec![("C".into(), 1)]));
        let container = Container {
            comment: Some("1.0 Version".into()),
            configuration_count: 1,
            max_atom_types: 1,
            atom_types: vec!["C".into()],
            max_atoms_per_system: 1,
            max_atoms_per_type: 1,
            reference_energies: vec![0.0],
            atomic_masses: vec![12.011],
            numbers_of_basis_sets: vec![1],
            basis_sets: vec![BasisSet::new("C", vec![BasisIndex::new(1, 1)])],
            configurations: vec![configuration(1, &header)],
        };
        assert_eq!(validate(&container), Ok(()));
    }

    #[test]
    fn declared_configuration_count_must_match() {
        let mut container = consistent();
        container.configurations.pop();
        container.configuration_count = 2;

        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::NUMBER_OF_CONFIGURATIONS);
        assert_eq!(
            err.to_string(),
            "\"The number of configurations\" should be 1 (is 2)"
        );
    }

    #[test]
    fn declared_maxima_must_match() {
        let mut container = consistent();
        container.max_atoms_per_system = 4;
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::MAX_ATOMS_PER_SYSTEM);

        let mut container = consistent();
        container.max_atoms_per_type = 1;
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::MAX_ATOMS_PER_TYPE);

        let mut container = consistent();
        container.max_atom_types = 3;
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::MAX_ATOM_TYPES);
    }

    #[test]
    fn declared_type_never_used_is_rejected() {
        let mut container = consistent();
        container.atom_types.push("H".into());
        container.max_atom_types = 3;

        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::ATOM_TYPES);
        assert!(err.to_string().contains("not seen in any configuration"));
    }

    #[test]
    fn undeclared_type_is_rejected() {
        let mut container = consistent();
        container.atom_types = vec!["C".into(), "N".into()];

        let err = validate(&container).unwrap_err();
        assert_eq!(
            err,
            Error::Missing {
                field: caption::ATOM_TYPES,
                name: "O".into(),
                reason: "seen in configuration 2".into(),
            }
        );
    }

    #[test]
    fn duplicate_atom_types_are_rejected() {
        let mut container = consistent();
        container.atom_types = vec!["C".into(), "C".into()];
        let err = validate(&container).unwrap_err();
        assert!(matches!(err, Error::Duplicate { name, .. } if name == "C"));
    }

    #[test]
    fn per_type_lists_must_align_with_atom_types() {
        let mut container = consistent();
        container.atomic_masses.pop();
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::ATOMIC_MASSES);
        assert!(err.to_string().contains("should be 2 entries (is 1 entries)"));
    }

    #[test]
    fn configurations_must_be_numbered_in_order() {
        let mut container = consistent();
        container.configurations[1].index = 5;
        let err = validate(&container).unwrap_err();
        assert_eq!(err, Error::NonSequentialIndex { position: 2, index: 5 });
        assert_eq!(err.field(), caption::CONFIGURATION);
    }

    #[test]
    fn counts_must_sum_to_atom_count() {
        let mut container = consistent();
        let header = ConfigurationHeader::new("carbon", 1, 2, vec![("C".into(), 3)]);
        container.configurations[0].header = Arc::new(header);
        container.max_atoms_per_type = 3;

        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::NUMBER_OF_ATOMS);
        assert_eq!(err.configuration(), Some(1));
        assert!(err.to_string().starts_with("in configuration 1, "));
    }

    #[test]
    fn overflowing_type_counts_are_a_mismatch() {
        let mut container = consistent();
        let header = ConfigurationHeader::new(
            "dioxide",
            2,
            3,
            vec![("C".into(), usize::MAX), ("O".into(), 2)],
        );
        container.configurations[1].header = Arc::new(header);
        container.max_atoms_per_type = usize::MAX;

        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::NUMBER_OF_ATOMS);
        assert_eq!(err.configuration(), Some(2));
        assert!(err.to_string().contains("the sum overflows"), "{err}");
    }

    #[test]
    fn declared_type_count_must_match_entries() {
        let mut container = consistent();
        let header = ConfigurationHeader::new("carbon", 2, 2, vec![("C".into(), 2)]);
        container.configurations[0].header = Arc::new(header);

        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::NUMBER_OF_ATOM_TYPES);
    }

    #[test]
    fn matrix_shapes_are_checked() {
        let mut container = consistent();
        container.configurations[1].forces = rows(2, 0.0);
        let err = validate(&container).unwrap_err();
        assert_eq!(
            err,
            Error::mismatch(Scope::Configuration(2), caption::FORCES, "3x3", "2x3")
        );

        let mut container = consistent();
        container.configurations[0].lattice_vectors = rows(2, 1.0);
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::LATTICE_VECTORS);
    }

    #[test]
    fn charges_must_cover_every_atom() {
        let mut container = consistent();
        container.configurations[0].charges = Some(vec![0.1]);
        let err = validate(&container).unwrap_err();
        assert_eq!(err.field(), caption::CHARGES);

        container.configurations[0].charges = Some(vec![0.1, -0.1]);
        assert_eq!(validate(&container), Ok(()));
    }

    #[test]
    fn basis_set_length_must_match_declared_count() {
        let mut container = consistent();
        container.numbers_of_basis_sets = vec![3, 1];
        let err = validate(&container).unwrap_err();
        assert_eq!(
            err,
            Error::mismatch(
                Scope::BasisSet("C".into()),
                caption::NUMBERS_OF_BASIS_SETS,
                2,
                3
            )
        );
    }

    #[test]
    fn every_atom_type_needs_a_basis_set() {
        let mut container = consistent();
        container.basis_sets.pop();
        let err = validate(&container).unwrap_err();
        assert!(matches!(err, Error::Unexpected { ref name, .. } if name == "O"));
    }

    #[test]
    fn basis_atom_index_zero_is_out_of_range() {
        let mut container = consistent();
        container.basis_sets[0].indices[0] = BasisIndex::new(1, 0);
        let err = validate(&container).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                basis_set: "C".into(),
                entry: 1,
                target: "atom",
                maximum: 2,
                actual: 0,
            }
        );
    }

    #[test]
    fn negative_basis_indices_are_out_of_range() {
        let mut container = consistent();
        container.basis_sets[0].indices[0] = BasisIndex::new(-1, 1);
        let err = validate(&container).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { target: "configuration", maximum: 2, actual: -1, .. }
        ));

        container.basis_sets[0].indices[0] = BasisIndex::new(1, -2);
        let err = validate(&container).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { target: "atom", maximum: 2, actual: -2, .. }
        ));
    }

    #[test]
    fn basis_atom_index_past_the_end_is_out_of_range() {
        let mut container = consistent();
        container.basis_sets[0].indices[1] = BasisIndex::new(2, 4);
        let err = validate(&container).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { target: "atom", maximum: 3, actual: 4, .. }
        ));
    }

    #[test]
    fn basis_configuration_index_is_checked() {
        let mut container = consistent();
        container.basis_sets[1].indices[0] = BasisIndex::new(3, 1);
        let err = validate(&container).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { target: "configuration", maximum: 2, actual: 3, .. }
        ));
    }

    #[test]
    fn basis_atom_must_have_matching_type() {
        let mut container = consistent();
        container.basis_sets[1].indices[0] = BasisIndex::new(2, 1);
        let err = validate(&container).unwrap_err();
        assert_eq!(
            err,
            Error::AtomTypeMismatch {
                basis_set: "O".into(),
                entry: 1,
                configuration: 2,
                atom: 1,
                actual: "C".into(),
            }
        );
    }
}
