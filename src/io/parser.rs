use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::caption;
use super::error::Error;
use super::reader::BlockReader;
use crate::model::{
    configuration::{Configuration, StressTensor},
    container::{BasisIndex, BasisSet, Container},
    header::{ConfigurationHeader, HeaderPool},
};

static BASIS_SET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Basis set for ([a-zA-Z0-9]+)$").expect("invalid basis set pattern")
});

static CONFIGURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Configuration num\.\s+([0-9]+)$").expect("invalid configuration pattern")
});

/// Reads a complete MLAB file from `reader`.
///
/// Parsing checks grammar and field shapes only; the result may still be
/// semantically inconsistent, which [`crate::validate`] detects. Any
/// failure aborts the whole parse.
pub fn parse<R: BufRead>(reader: R) -> Result<Container, Error> {
    let mut reader = BlockReader::new(reader);
    debug!("parsing MLAB stream");

    reader.advance()?;
    let comment = match reader.block() {
        [] => None,
        lines => Some(lines.join(" ")),
    };

    reader.consume_header(caption::NUMBER_OF_CONFIGURATIONS)?;
    let configuration_count = reader.decode_usize()?;

    reader.consume_header(caption::MAX_ATOM_TYPES)?;
    let max_atom_types = reader.decode_usize()?;

    reader.consume_header(caption::ATOM_TYPES)?;
    let atom_types = reader.decode_strings()?;

    reader.consume_header(caption::MAX_ATOMS_PER_SYSTEM)?;
    let max_atoms_per_system = reader.decode_usize()?;

    reader.consume_header(caption::MAX_ATOMS_PER_TYPE)?;
    let max_atoms_per_type = reader.decode_usize()?;

    reader.consume_header(caption::REFERENCE_ENERGIES)?;
    let reference_energies = reader.decode_floats()?;

    reader.consume_header(caption::ATOMIC_MASSES)?;
    let atomic_masses = reader.decode_floats()?;

    reader.consume_header(caption::NUMBERS_OF_BASIS_SETS)?;
    let numbers_of_basis_sets = reader.decode_usizes()?;

    let mut basis_sets = Vec::new();
    while let Some(name) = reader.peek_captured(&BASIS_SET_PATTERN)? {
        let basis_set = read_basis_set(&mut reader, name)?;
        trace!(name = %basis_set.name, entries = basis_set.len(), "read basis set");
        basis_sets.push(basis_set);
    }

    let mut pool = HeaderPool::new();
    let mut configurations = Vec::new();
    loop {
        // Past the first configuration a final divider may end the file here.
        let may_end = !configurations.is_empty();
        reader.set_lenient_eof(may_end);
        let next = reader.peek_captured(&CONFIGURATION_PATTERN);
        reader.set_lenient_eof(false);

        let Some(number) = next? else {
            if may_end && reader.is_eof() && reader.block().is_empty() {
                break;
            }
            let details = if configurations.is_empty() {
                format!("expected {:?}", CONFIGURATION_PATTERN.as_str())
            } else {
                format!(
                    "malformed trailing data, expected {:?} or end of file",
                    CONFIGURATION_PATTERN.as_str()
                )
            };
            return Err(reader.error(details));
        };
        let index = number
            .parse::<usize>()
            .map_err(|_| reader.error("invalid configuration number"))?;

        let configuration = read_configuration(&mut reader, index, &mut pool)?;
        trace!(
            index,
            name = configuration.name(),
            atoms = configuration.number_of_atoms(),
            "read configuration"
        );
        configurations.push(configuration);

        if reader.is_eof() && (!reader.has_pending() || reader.block().is_empty()) {
            break;
        }
    }

    debug!(
        configurations = configurations.len(),
        headers = pool.len(),
        basis_sets = basis_sets.len(),
        "parsed MLAB stream"
    );

    Ok(Container {
        comment,
        configuration_count,
        max_atom_types,
        atom_types,
        max_atoms_per_system,
        max_atoms_per_type,
        reference_energies,
        atomic_masses,
        numbers_of_basis_sets,
        basis_sets,
        configurations,
    })
}

/// Opens and parses the file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Container, Error> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

fn read_basis_set<R: BufRead>(
    reader: &mut BlockReader<R>,
    name: String,
) -> Result<BasisSet, Error> {
    let matrix = reader.decode_matrix::<i64>("configuration and atom indices")?;
    if !matrix.is_empty() && matrix.ncols() != 2 {
        return Err(reader.error("expected pairs of configuration and atom indices"));
    }

    let indices = matrix
        .rows()
        .map(|row| BasisIndex::new(row[0], row[1]))
        .collect();
    Ok(BasisSet::new(name, indices))
}

fn read_configuration<R: BufRead>(
    reader: &mut BlockReader<R>,
    index: usize,
    pool: &mut HeaderPool,
) -> Result<Configuration, Error> {
    reader.consume_header(caption::SYSTEM_NAME)?;
    let name = reader.decode_string()?;

    reader.consume_header(caption::NUMBER_OF_ATOM_TYPES)?;
    let number_of_atom_types = reader.decode_usize()?;

    reader.consume_header(caption::NUMBER_OF_ATOMS)?;
    let number_of_atoms = reader.decode_usize()?;

    reader.consume_header(caption::ATOMS_PER_TYPE)?;
    let number_of_atoms_per_type = reader.decode_type_counts()?;

    let header = pool.intern(ConfigurationHeader::new(
        name,
        number_of_atom_types,
        number_of_atoms,
        number_of_atoms_per_type,
    ));

    let ctifor = if reader.peek_header(caption::CTIFOR)? {
        Some(reader.decode_float()?)
    } else {
        None
    };

    reader.consume_header(caption::LATTICE_VECTORS)?;
    let lattice_vectors = reader.decode_matrix("decimal numbers")?;

    reader.consume_header(caption::POSITIONS)?;
    let positions = reader.decode_matrix("decimal numbers")?;

    reader.consume_header(caption::TOTAL_ENERGY)?;
    let energy = reader.decode_float()?;

    reader.consume_header(caption::FORCES)?;
    let forces = reader.decode_matrix("decimal numbers")?;

    reader.consume_header(caption::STRESS)?;
    reader.consume_header(caption::STRESS_DIAGONAL)?;
    let diagonal = reader.decode_vector()?;
    reader.consume_header(caption::STRESS_OFF_DIAGONAL)?;

    // The file may end after the off-diagonal stress or after the charges.
    reader.set_lenient_eof(true);
    let off_diagonal = match reader.decode_vector() {
        Err(_) if reader.is_eof() && reader.block().is_empty() => {
            return Err(reader.eof_error());
        }
        result => result?,
    };
    let charges = if !reader.is_eof() && reader.peek_header(caption::CHARGES)? {
        Some(reader.decode_column()?)
    } else {
        None
    };
    reader.set_lenient_eof(false);

    Ok(Configuration {
        index,
        header,
        ctifor,
        lattice_vectors,
        positions,
        energy,
        forces,
        stress: StressTensor::new(diagonal, off_diagonal),
        charges,
    })
}
