use thiserror::Error;

/// Errors raised while reading an MLAB file.
///
/// Every grammar or shape problem carries the 1-based, inclusive line range
/// of the offending block and its raw text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("on lines {start_line}-{end_line}: {details}, found {found:?}")]
    Parse {
        start_line: usize,
        end_line: usize,
        details: String,
        found: String,
    },

    #[error("on lines {start_line}-{end_line}: unexpected end of file, found {found:?}")]
    UnexpectedEof {
        start_line: usize,
        end_line: usize,
        found: String,
    },
}

impl Error {
    pub fn parse(
        start_line: usize,
        end_line: usize,
        details: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Parse {
            start_line,
            end_line,
            details: details.into(),
            found: found.into(),
        }
    }

    /// The source lines of the offending block, if the error has one.
    pub fn line_range(&self) -> Option<(usize, usize)> {
        match self {
            Self::Io { .. } => None,
            Self::Parse {
                start_line,
                end_line,
                ..
            }
            | Self::UnexpectedEof {
                start_line,
                end_line,
                ..
            } => Some((*start_line, *end_line)),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
