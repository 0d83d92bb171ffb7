//! Serializable summary of a parsed file, shared by the table and JSON
//! outputs of `mlab inspect`.

use serde::Serialize;

use mlab::metrics::ConfigurationMetrics;
use mlab::{Container, Section};

#[derive(Debug, Serialize)]
pub struct Report {
    pub source: String,
    pub comment: Option<String>,
    pub configurations: usize,
    pub atom_types: Vec<AtomTypeSummary>,
    pub basis_sets: usize,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
pub struct AtomTypeSummary {
    pub name: String,
    pub atomic_mass: Option<f64>,
    pub reference_energy: Option<f64>,
    /// Number of atoms of this type across all configurations, saturating
    /// at `usize::MAX`.
    pub atoms: usize,
}

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub atoms: usize,
    pub composition: Vec<(String, usize)>,
    pub structures: usize,
    pub energy: Option<Range>,
    pub energy_per_atom: Option<Range>,
    pub pressure: Option<Range>,
    pub volume: Option<Range>,
    pub non_periodic_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Range {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

impl Report {
    pub fn new(source: String, container: &Container, sections: &[Section<'_>]) -> Self {
        let atom_types = container
            .atom_types
            .iter()
            .enumerate()
            .map(|(i, name)| AtomTypeSummary {
                name: name.clone(),
                atomic_mass: container.atomic_masses.get(i).copied(),
                reference_energy: container.reference_energies.get(i).copied(),
                atoms: container
                    .configurations
                    .iter()
                    .flat_map(|c| c.number_of_atoms_per_type())
                    .filter(|(type_name, _)| type_name == name)
                    .fold(0usize, |sum, (_, count)| sum.saturating_add(*count)),
            })
            .collect();

        Self {
            source,
            comment: container.comment.clone(),
            configurations: container.configurations.len(),
            atom_types,
            basis_sets: container.basis_sets.len(),
            sections: sections.iter().map(SectionSummary::new).collect(),
        }
    }
}

impl SectionSummary {
    fn new(section: &Section<'_>) -> Self {
        let metrics: Vec<ConfigurationMetrics> = section
            .configurations
            .iter()
            .filter_map(|c| ConfigurationMetrics::from_configuration(c))
            .collect();

        Self {
            name: section.name().to_string(),
            atoms: section.number_of_atoms(),
            composition: section.number_of_atoms_per_type().to_vec(),
            structures: section.len(),
            energy: Range::from_values(section.energies()),
            energy_per_atom: Range::from_values(metrics.iter().map(|m| m.energy_per_atom)),
            pressure: Range::from_values(section.pressures()),
            volume: Range::from_values(metrics.iter().map(|m| m.volume)),
            non_periodic_radius: section.non_periodic_radius(),
        }
    }
}
