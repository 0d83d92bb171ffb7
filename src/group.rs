//! Grouping configurations into sections of structurally identical systems.

use std::collections::HashMap;

use tracing::debug;

use crate::model::container::Container;
use crate::model::header::ConfigurationHeader;
use crate::model::section::Section;

/// Partitions the configurations of `container` by header.
///
/// Sections appear in the order their header is first seen; configurations
/// keep their file order within a section. Every configuration lands in
/// exactly one section.
pub fn group_into_sections(container: &Container) -> Vec<Section<'_>> {
    let mut positions: HashMap<&ConfigurationHeader, usize> = HashMap::new();
    let mut sections: Vec<Section<'_>> = Vec::new();

    for configuration in &container.configurations {
        let header = configuration.header.as_ref();
        let position = *positions.entry(header).or_insert_with(|| {
            sections.push(Section {
                source: container,
                header: configuration.header.clone(),
                configurations: Vec::new(),
            });
            sections.len() - 1
        });
        sections[position].configurations.push(configuration);
    }

    debug!(
        configurations = container.configurations.len(),
        sections = sections.len(),
        "grouped configurations into sections"
    );
    sections
}
