use std::io::Cursor;

use mlab::{ParseError, group_into_sections, parse, validate};

fn minimal_file(per_type: &str) -> String {
    format!(
        "\
 1.0 Version
**************************************************
     The number of configurations
--------------------------------------------------
          1
**************************************************
     The maximum number of atom type
--------------------------------------------------
       1
**************************************************
     The atom types in the data file
--------------------------------------------------
     C
**************************************************
     The maximum number of atoms per system
--------------------------------------------------
             2
**************************************************
     The maximum number of atoms per atom type
--------------------------------------------------
             2
**************************************************
     Reference atomic energy (eV)
--------------------------------------------------
   0.000000000000000E+00
**************************************************
     Atomic mass
--------------------------------------------------
   12.0110000000000
**************************************************
     The numbers of basis sets per atom type
--------------------------------------------------
       1
**************************************************
     Basis set for C
--------------------------------------------------
      1      1
**************************************************
     Configuration num.      1
==================================================
     System name
--------------------------------------------------
     carbon dimer
==================================================
     The number of atom types
--------------------------------------------------
       1
==================================================
     The number of atoms
--------------------------------------------------
         2
**************************************************
     Atom types and atom numbers
--------------------------------------------------
     {per_type}
==================================================
     Primitive lattice vectors (ang.)
--------------------------------------------------
   1.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
   0.000000000000000E+00   1.000000000000000E+00   0.000000000000000E+00
   0.000000000000000E+00   0.000000000000000E+00   1.000000000000000E+00
==================================================
     Atomic positions (ang.)
--------------------------------------------------
   0.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
   5.000000000000000E-01   5.000000000000000E-01   5.000000000000000E-01
==================================================
     Total energy (eV)
--------------------------------------------------
  -1.000000000000000E+00
==================================================
     Forces (eV ang.^-1)
--------------------------------------------------
   0.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
   0.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
==================================================
     Stress (kbar)
--------------------------------------------------
     XX YY ZZ
--------------------------------------------------
   0.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
--------------------------------------------------
     XY YZ ZX
--------------------------------------------------
   0.000000000000000E+00   0.000000000000000E+00   0.000000000000000E+00
"
    )
}

#[test]
fn minimal_file_parses_validates_and_groups() {
    let container = parse(Cursor::new(minimal_file("C       2"))).unwrap();
    validate(&container).unwrap();

    let configuration = &container.configurations[0];
    assert_eq!(configuration.energy, -1.0);
    assert_eq!(
        configuration.lattice(),
        Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    );
    assert!(configuration.forces.as_slice().iter().all(|f| *f == 0.0));

    let sections = group_into_sections(&container);
    assert_eq!(sections.len(), 1);

    let section = &sections[0];
    assert_eq!(section.name(), "carbon dimer");
    assert_eq!(section.name(), configuration.name());
    assert_eq!(section.number_of_atoms(), 2);
    assert_eq!(section.number_of_atoms_per_type(), [("C".to_string(), 2)]);
    assert_eq!(section.len(), 1);
    assert_eq!(section.type_lookup(), vec!["C", "C"]);
}

#[test]
fn inconsistent_counts_pass_parsing_but_fail_validation() {
    let text = minimal_file("C       3").replace(
        "atoms per atom type\n--------------------------------------------------\n             2\n",
        "atoms per atom type\n--------------------------------------------------\n             3\n",
    );
    let container = parse(Cursor::new(text)).unwrap();
    assert_eq!(container.max_atoms_per_type, 3);

    let err = validate(&container).unwrap_err();
    assert_eq!(err.field(), "The number of atoms");
    assert_eq!(err.configuration(), Some(1));
    assert_eq!(
        err.to_string(),
        "in configuration 1, \"The number of atoms\" should be 3 (is 2)"
    );
}

#[test]
fn truncated_file_is_a_parse_error() {
    let text = minimal_file("C       2");
    let cut = text.find("   5.000000000000000E-01").unwrap();

    let err = parse(Cursor::new(&text[..cut])).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    assert!(err.to_string().contains("unexpected end of file"));
}

#[test]
fn read_file_reports_missing_path() {
    let err = mlab::read_file("/nonexistent/ML_AB").unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
    assert_eq!(err.line_range(), None);
}
