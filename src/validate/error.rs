use std::fmt;

use thiserror::Error;

/// Where in the file a problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    File,
    Configuration(usize),
    BasisSet(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => Ok(()),
            Self::Configuration(index) => write!(f, "in configuration {index}, "),
            Self::BasisSet(name) => write!(f, "in basis set for {name}, "),
        }
    }
}

/// A semantic inconsistency in a well-formed MLAB file.
///
/// Each variant names the caption of the offending field; declared values
/// are reported as "is", derived ones as "should be".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A declared value differs from the value derived from the data.
    #[error("{scope}{field:?} should be {expected} (is {actual})")]
    Mismatch {
        scope: Scope,
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// A list that must hold unique names repeats one.
    #[error("{scope}{field:?} contains duplicate entry {name:?}")]
    Duplicate {
        scope: Scope,
        field: &'static str,
        name: String,
    },

    /// A name used elsewhere in the file is absent from the field.
    #[error("{field:?} does not contain {name:?}, {reason}")]
    Missing {
        field: &'static str,
        name: String,
        reason: String,
    },

    /// The field lists a name that nothing else in the file backs up.
    #[error("{field:?} contains {name:?}, {reason}")]
    Unexpected {
        field: &'static str,
        name: String,
        reason: String,
    },

    /// Configurations must be numbered 1, 2, 3, ... in file order.
    #[error("configuration at position {position} is numbered {index}")]
    NonSequentialIndex { position: usize, index: usize },

    /// A per-configuration value is larger than the file-wide maximum.
    #[error("in configuration {configuration}, {field:?} should be at most {maximum} (is {actual})")]
    ExceedsMaximum {
        configuration: usize,
        field: &'static str,
        maximum: usize,
        actual: usize,
    },

    /// A basis-set entry references a configuration or atom that does not
    /// exist.
    #[error(
        "in basis set for {basis_set}, entry {entry} references {target} {actual}, should be between 1 and {maximum}"
    )]
    OutOfRange {
        basis_set: String,
        entry: usize,
        target: &'static str,
        maximum: usize,
        actual: i64,
    },

    /// A basis-set entry references an atom of a different type.
    #[error(
        "in basis set for {basis_set}, entry {entry} references atom {atom} of configuration {configuration}, which is {actual:?}"
    )]
    AtomTypeMismatch {
        basis_set: String,
        entry: usize,
        configuration: usize,
        atom: usize,
        actual: String,
    },
}

impl Error {
    /// The caption of the field the problem was found in.
    pub fn field(&self) -> &str {
        match self {
            Self::Mismatch { field, .. }
            | Self::Duplicate { field, .. }
            | Self::Missing { field, .. }
            | Self::Unexpected { field, .. }
            | Self::ExceedsMaximum { field, .. } => *field,
            Self::NonSequentialIndex { .. } => crate::io::caption::CONFIGURATION,
            Self::OutOfRange { .. } | Self::AtomTypeMismatch { .. } => {
                crate::io::caption::BASIS_SET
            }
        }
    }

    /// The configuration the problem was found in, if any.
    pub fn configuration(&self) -> Option<usize> {
        match self {
            Self::Mismatch {
                scope: Scope::Configuration(index),
                ..
            }
            | Self::Duplicate {
                scope: Scope::Configuration(index),
                ..
            } => Some(*index),
            Self::NonSequentialIndex { position, .. } => Some(*position),
            Self::ExceedsMaximum { configuration, .. } => Some(*configuration),
            _ => None,
        }
    }

    pub(crate) fn mismatch(
        scope: Scope,
        field: &'static str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::Mismatch {
            scope,
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::caption;

    #[test]
    fn configuration_scope_prefixes_message() {
        let err = Error::mismatch(Scope::Configuration(3), caption::NUMBER_OF_ATOMS, 4, 5);
        assert_eq!(
            err.to_string(),
            "in configuration 3, \"The number of atoms\" should be 4 (is 5)"
        );
        assert_eq!(err.field(), caption::NUMBER_OF_ATOMS);
        assert_eq!(err.configuration(), Some(3));
    }

    #[test]
    fn file_scope_has_no_prefix() {
        let err = Error::mismatch(Scope::File, caption::NUMBER_OF_CONFIGURATIONS, 1, 2);
        assert_eq!(
            err.to_string(),
            "\"The number of configurations\" should be 1 (is 2)"
        );
        assert_eq!(err.configuration(), None);
    }

    #[test]
    fn basis_set_errors_report_basis_set_caption() {
        let err = Error::OutOfRange {
            basis_set: "C".into(),
            entry: 2,
            target: "atom",
            maximum: 8,
            actual: 0,
        };
        assert_eq!(err.field(), caption::BASIS_SET);
        assert_eq!(
            err.to_string(),
            "in basis set for C, entry 2 references atom 0, should be between 1 and 8"
        );
    }
}
