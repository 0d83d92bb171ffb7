mod inspect;
mod validate;

use inspect::run_inspect;
use validate::run_validate;

use anyhow::{Context, Result, bail};

use mlab::Container;

use crate::cli::{Command, IoOptions};
use crate::display::Context as DisplayContext;
use crate::io::{input_label, open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Validate(args) => run_validate(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}

/// Reads and parses the input named by `io`.
fn read_container(io: &IoOptions) -> Result<Container> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: mlab <COMMAND> -i <FILE> or pipe data via stdin."
        );
    }

    let label = input_label(io.input.as_deref());
    let reader = open_input(io.input.as_deref())?;
    mlab::parse(reader).with_context(|| format!("Failed to parse {label}"))
}

fn read_substeps(container: &Container) -> Vec<String> {
    vec![
        format!("{} configurations", container.configurations.len()),
        format!(
            "{} atom types ({})",
            container.atom_types.len(),
            container.atom_types.join(", ")
        ),
        format!("{} basis sets", container.basis_sets.len()),
    ]
}
