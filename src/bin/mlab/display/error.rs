use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_parse_hints(err);
        collector.collect_validation_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_parse_hints(&mut self, err: &Error) {
        use mlab::ParseError;

        let Some(parse_err) = err.downcast_ref::<ParseError>() else {
            return;
        };

        self.mark_typed();

        match parse_err {
            ParseError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            ParseError::Parse {
                start_line,
                end_line,
                details,
                ..
            } => {
                self.add(format!(
                    "Inspect lines {start_line}-{end_line} of the input for a malformed section"
                ));
                if details.starts_with("expected to find") {
                    self.add("Sections must appear in the fixed order written by VASP");
                    self.add("Check that no caption was edited or misspelled");
                } else if details.contains("trailing data") {
                    self.add("Only configurations may follow the basis sets");
                    self.add("Remove text appended after the last configuration");
                } else if details.contains("matrix") {
                    self.add("Every row of a matrix needs the same number of columns");
                } else {
                    self.add("Check that the value has the expected type and line count");
                }
            }

            ParseError::UnexpectedEof { .. } => {
                self.add("The file ends in the middle of a section");
                self.add("It may be truncated; check that the copy or download completed");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid UTF-8 data");
                self.add("Verify that the input is a text MLAB file, not a binary");
            }

            _ => {
                self.add("I/O operation failed while reading the input");
            }
        }
    }

    fn collect_validation_hints(&mut self, err: &Error) {
        use mlab::ValidationError;

        let Some(validation_err) = err.downcast_ref::<ValidationError>() else {
            return;
        };

        self.mark_typed();

        self.add(format!("Problem found in field \"{}\"", validation_err.field()));
        if let Some(configuration) = validation_err.configuration() {
            self.add(format!("See \"Configuration num. {configuration}\""));
        }

        match validation_err {
            ValidationError::OutOfRange { .. } | ValidationError::AtomTypeMismatch { .. } => {
                self.add("Basis-set entries are 1-based (configuration, atom) pairs");
            }
            ValidationError::NonSequentialIndex { .. } => {
                self.add("Configurations must be numbered 1, 2, 3, ... without gaps");
            }
            _ => {}
        }

        self.add("Validation stops at the first problem; this may not be the only one");
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
            self.add("Input appears to be from a terminal");
            self.add("Provide input via -i/--input or pipe data to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_point_at_lines() {
        let source = mlab::ParseError::parse(7, 9, "expected to find \"Atomic mass\"", "x");
        let err = Error::new(source).context("Failed to parse ML_AB");
        let hints = HintCollector::collect(&err).unwrap();
        assert_eq!(
            hints[0],
            "Inspect lines 7-9 of the input for a malformed section"
        );
        assert!(hints.iter().any(|h| h.contains("fixed order")));
    }

    #[test]
    fn validation_errors_name_field_and_configuration() {
        let source = mlab::ValidationError::NonSequentialIndex {
            position: 2,
            index: 4,
        };
        let err = Error::new(source).context("Validation failed");
        let hints = HintCollector::collect(&err).unwrap();
        assert_eq!(hints[0], "Problem found in field \"Configuration num.\"");
        assert_eq!(hints[1], "See \"Configuration num. 2\"");
        assert!(hints.last().unwrap().contains("may not be the only one"));
    }

    #[test]
    fn untyped_errors_fall_back_to_message() {
        let err = anyhow::anyhow!("No input file specified and stdin is a terminal");
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints[0].contains("terminal"));
    }

    #[test]
    fn chain_text_is_lowercased() {
        let err = Error::new(std::io::Error::other("Permission Denied")).context("Opening");
        assert_eq!(error_chain_text(&err), "opening\npermission denied");
    }
}
